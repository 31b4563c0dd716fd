//! tiny-skia implementation of `RasterSurface`.

use crate::encode::encode_rgba_png;
use kurbo::Point;
use sketchpad_core::{
    CaptureError, ExportError, ImageOrigin, ImportError, RasterSurface, ResizeError,
    ShapeGeometry, StrokeStyle, SurfaceSpec,
};
use tiny_skia::{
    Color, ColorU8, FilterQuality, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap,
    PixmapPaint, Stroke, Transform,
};

/// Immutable copy of a `PixmapSurface` buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct PixmapSnapshot(Pixmap);

impl PixmapSnapshot {
    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        self.0.data()
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }
}

/// CPU raster surface.
///
/// The buffer is `logical size × device scale` physical pixels; drawing calls
/// take logical coordinates and go through a scale transform.
pub struct PixmapSurface {
    spec: SurfaceSpec,
    pixmap: Pixmap,
    paint: Paint<'static>,
    stroke: Stroke,
    transform: Transform,
    /// Set once cross-origin pixels are drawn; cleared only by reallocation.
    tainted: bool,
}

impl PixmapSurface {
    /// The underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Premultiplied RGBA8 bytes of the buffer.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha color of a physical pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        self.pixmap.pixel(x, y).map(|p| p.demultiply())
    }

    pub fn is_tainted(&self) -> bool {
        self.tainted
    }

    fn stroke_path(&mut self, path: Option<Path>) {
        if let Some(path) = path {
            self.pixmap
                .stroke_path(&path, &self.paint, &self.stroke, self.transform, None);
        }
    }
}

fn segment_path(from: Point, to: Point) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(from.x as f32, from.y as f32);
    pb.line_to(to.x as f32, to.y as f32);
    pb.finish()
}

fn shape_path(shape: &ShapeGeometry) -> Option<Path> {
    match *shape {
        ShapeGeometry::Segment(line) => segment_path(line.p0, line.p1),
        ShapeGeometry::Rect(rect) => {
            let (x0, y0, x1, y1) = (rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32);
            let mut pb = PathBuilder::new();
            pb.move_to(x0, y0);
            pb.line_to(x1, y0);
            pb.line_to(x1, y1);
            pb.line_to(x0, y1);
            pb.close();
            pb.finish()
        }
        ShapeGeometry::Circle(circle) => PathBuilder::from_circle(
            circle.center.x as f32,
            circle.center.y as f32,
            circle.radius as f32,
        ),
    }
}

impl RasterSurface for PixmapSurface {
    type Snapshot = PixmapSnapshot;

    fn allocate(spec: SurfaceSpec, style: &StrokeStyle) -> Result<Self, ResizeError> {
        let pixmap = Pixmap::new(spec.width, spec.height).ok_or(ResizeError::Allocation {
            width: spec.width,
            height: spec.height,
        })?;

        let mut paint = Paint::default();
        let c = style.color;
        paint.set_color_rgba8(c.r, c.g, c.b, c.a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        let scale = spec.scale as f32;
        Ok(Self {
            spec,
            pixmap,
            paint,
            stroke,
            transform: Transform::from_scale(scale, scale),
            tainted: false,
        })
    }

    fn spec(&self) -> SurfaceSpec {
        self.spec
    }

    fn snapshot(&self) -> Result<PixmapSnapshot, CaptureError> {
        if self.tainted {
            return Err(CaptureError::Tainted);
        }
        Ok(PixmapSnapshot(self.pixmap.clone()))
    }

    fn restore(&mut self, snapshot: &PixmapSnapshot) {
        let source = &snapshot.0;
        if source.width() != self.pixmap.width() || source.height() != self.pixmap.height() {
            log::warn!(
                "Discarding {}x{} snapshot for a {}x{} surface",
                source.width(),
                source.height(),
                self.pixmap.width(),
                self.pixmap.height()
            );
            return;
        }
        self.pixmap.data_mut().copy_from_slice(source.data());
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn stroke_segment(&mut self, from: Point, to: Point) {
        self.stroke_path(segment_path(from, to));
    }

    fn stroke_shape(&mut self, shape: &ShapeGeometry) {
        self.stroke_path(shape_path(shape));
    }

    fn draw_image(&mut self, encoded: &[u8], origin: ImageOrigin) -> Result<(), ImportError> {
        let image = Pixmap::decode_png(encoded).map_err(|e| ImportError::Decode(e.to_string()))?;

        // Fit inside the physical buffer, preserving aspect ratio.
        let (bw, bh) = (self.pixmap.width() as f32, self.pixmap.height() as f32);
        let (iw, ih) = (image.width() as f32, image.height() as f32);
        let scale = (bw / iw).min(bh / ih);
        let tx = (bw - iw * scale) / 2.0;
        let ty = (bh - ih * scale) / 2.0;

        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            image.as_ref(),
            &paint,
            Transform::from_row(scale, 0.0, 0.0, scale, tx, ty),
            None,
        );

        if origin == ImageOrigin::CrossOrigin {
            self.tainted = true;
        }
        log::debug!(
            "Drew {}x{} image at scale {:.3}",
            image.width(),
            image.height(),
            scale
        );
        Ok(())
    }

    fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        if self.tainted {
            return Err(CaptureError::Tainted.into());
        }
        encode_rgba_png(&self.pixmap)
    }
}
