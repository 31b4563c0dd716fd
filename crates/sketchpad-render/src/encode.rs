//! PNG encoding of the raster buffer.

use sketchpad_core::ExportError;
use tiny_skia::Pixmap;

/// Encode a pixmap as an 8-bit RGBA PNG with straight alpha.
pub fn encode_rgba_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (pixmap.width(), pixmap.height());

    // tiny-skia stores premultiplied pixels; PNG expects straight alpha.
    let mut rgba_data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba_data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| ExportError::Encode(format!("PNG header: {e}")))?;
        writer
            .write_image_data(&rgba_data)
            .map_err(|e| ExportError::Encode(format!("PNG data: {e}")))?;
        writer
            .finish()
            .map_err(|e| ExportError::Encode(format!("PNG finish: {e}")))?;
    }

    log::debug!("Encoded {}x{} PNG ({} bytes)", width, height, png_data.len());
    Ok(png_data)
}
