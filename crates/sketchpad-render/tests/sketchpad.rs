//! End-to-end behaviour of a pixmap-backed sketch pad.

use sketchpad_core::{
    ExportError, ImageOrigin, PointerEvent, PointerResponse, Tool, UNDO_CAPACITY,
};
use sketchpad_render::RasterPad;
use tiny_skia::{Color, Pixmap};

fn mounted(width: f64, height: f64, scale: f64) -> RasterPad {
    let mut pad = RasterPad::default();
    pad.on_resize(width, height, scale).unwrap();
    pad
}

fn data(pad: &RasterPad) -> Vec<u8> {
    pad.surface().unwrap().data().to_vec()
}

fn alpha(pad: &RasterPad, x: u32, y: u32) -> u8 {
    pad.surface().unwrap().pixel(x, y).unwrap().alpha()
}

fn drag(pad: &mut RasterPad, tool: Tool, points: &[(f64, f64)]) {
    pad.select_tool(tool);
    let (x0, y0) = points[0];
    pad.on_pointer_down(1, x0, y0);
    for &(x, y) in &points[1..] {
        pad.on_pointer_move(1, x, y);
    }
    let &(xn, yn) = points.last().unwrap();
    pad.on_pointer_up(1, xn, yn);
}

#[test]
fn rectangle_scenario() {
    let mut pad = mounted(100.0, 100.0, 1.0);
    pad.select_tool(Tool::Rectangle);

    assert_eq!(pad.on_pointer_down(1, 5.0, 5.0), PointerResponse::Captured(1));
    assert_eq!(pad.on_pointer_move(1, 50.0, 5.0), PointerResponse::Updated);
    assert_eq!(pad.on_pointer_move(1, 50.0, 40.0), PointerResponse::Updated);
    assert_eq!(pad.on_pointer_up(1, 50.0, 40.0), PointerResponse::Released(1));

    assert!(pad.has_content());
    assert!(pad.can_undo());
    assert_eq!(pad.undo_depth(), 1);

    // Edges of the committed rectangle.
    assert_eq!(alpha(&pad, 5, 20), 255);
    assert_eq!(alpha(&pad, 50, 20), 255);
    assert_eq!(alpha(&pad, 25, 5), 255);
    assert_eq!(alpha(&pad, 25, 40), 255);
    assert_eq!(alpha(&pad, 25, 20), 0);
    assert_eq!(alpha(&pad, 70, 5), 0);
}

#[test]
fn undo_history_is_bounded() {
    let mut pad = mounted(100.0, 100.0, 1.0);
    for i in 0..(UNDO_CAPACITY + 1) {
        let y = 2.0 + i as f64 * 4.0;
        drag(&mut pad, Tool::Line, &[(5.0, y), (95.0, y)]);
        assert!(pad.undo_depth() <= UNDO_CAPACITY);
    }

    for _ in 0..UNDO_CAPACITY {
        assert!(pad.undo());
    }
    assert!(!pad.can_undo());
    assert!(!pad.undo());

    // The empty pre-first-gesture buffer was evicted; the first line remains.
    assert_eq!(alpha(&pad, 50, 2), 255);
    assert_eq!(alpha(&pad, 50, 6), 0);
    assert!(pad.has_content());
}

#[test]
fn undo_is_bit_identical() {
    let mut pad = mounted(64.0, 48.0, 2.0);
    drag(&mut pad, Tool::Freehand, &[(4.0, 4.0), (20.0, 30.0), (60.0, 10.0)]);
    let before = data(&pad);

    drag(&mut pad, Tool::Circle, &[(32.0, 24.0), (40.0, 30.0)]);
    assert_ne!(data(&pad), before);

    assert!(pad.undo());
    assert_eq!(data(&pad), before);
    assert!(pad.has_content());

    assert!(pad.undo());
    assert!(data(&pad).iter().all(|&b| b == 0));
    assert!(!pad.has_content());
}

#[test]
fn shape_preview_is_idempotent() {
    for tool in [Tool::Line, Tool::Rectangle, Tool::Circle] {
        let mut many = mounted(80.0, 80.0, 1.0);
        drag(
            &mut many,
            tool,
            &[(20.0, 20.0), (70.0, 10.0), (25.0, 75.0), (21.0, 21.0), (55.0, 45.0)],
        );

        let mut once = mounted(80.0, 80.0, 1.0);
        drag(&mut once, tool, &[(20.0, 20.0), (55.0, 45.0)]);

        assert_eq!(data(&many), data(&once), "{} preview left artifacts", tool.name());
    }
}

#[test]
fn rectangle_corner_order_is_irrelevant() {
    let mut forward = mounted(20.0, 20.0, 1.0);
    drag(&mut forward, Tool::Rectangle, &[(2.0, 2.0), (10.0, 10.0)]);

    let mut backward = mounted(20.0, 20.0, 1.0);
    drag(&mut backward, Tool::Rectangle, &[(10.0, 10.0), (2.0, 2.0)]);

    assert_eq!(data(&forward), data(&backward));
}

#[test]
fn zero_radius_circle_changes_nothing() {
    let mut pad = mounted(40.0, 40.0, 1.0);
    drag(&mut pad, Tool::Freehand, &[(2.0, 2.0), (38.0, 2.0)]);
    let before = data(&pad);

    drag(&mut pad, Tool::Circle, &[(20.0, 20.0), (20.0, 20.0)]);
    assert_eq!(data(&pad), before);
}

#[test]
fn clear_is_undoable() {
    let mut pad = mounted(40.0, 40.0, 1.0);
    drag(&mut pad, Tool::Line, &[(5.0, 5.0), (35.0, 35.0)]);
    let drawn = data(&pad);

    assert!(pad.clear());
    assert!(!pad.has_content());
    assert!(data(&pad).iter().all(|&b| b == 0));

    assert!(pad.undo());
    assert_eq!(data(&pad), drawn);
    assert!(pad.has_content());
}

#[test]
fn resize_clears_undo() {
    let mut pad = mounted(40.0, 40.0, 1.0);
    drag(&mut pad, Tool::Line, &[(5.0, 5.0), (35.0, 35.0)]);
    assert!(pad.can_undo());

    pad.on_resize(60.0, 30.0, 2.0).unwrap();
    assert!(!pad.can_undo());
    assert!(!pad.has_content());
    let pixmap = pad.surface().unwrap().pixmap();
    assert_eq!((pixmap.width(), pixmap.height()), (120, 60));
}

#[test]
fn pointer_leave_finalizes() {
    let mut pad = mounted(40.0, 40.0, 1.0);
    pad.select_tool(Tool::Line);
    pad.on_pointer_down(7, 5.0, 20.0);
    pad.on_pointer_move(7, 30.0, 20.0);
    let response = pad.handle_pointer(PointerEvent::Leave {
        pointer_id: 7,
        position: None,
    });

    assert_eq!(response, PointerResponse::Released(7));
    assert!(!pad.is_drawing());
    assert_eq!(alpha(&pad, 20, 20), 255);
}

#[test]
fn export_produces_png_of_physical_size() {
    let mut pad = mounted(30.0, 20.0, 2.0);
    drag(&mut pad, Tool::Freehand, &[(1.0, 1.0), (29.0, 19.0)]);

    let bytes = pad.export_raster().unwrap();
    let decoded = Pixmap::decode_png(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (60, 40));
    assert_eq!(decoded.pixel(30, 20).unwrap().alpha(), 255);
}

#[test]
fn cross_origin_upload_disables_undo_and_export() {
    let mut picture = Pixmap::new(8, 8).unwrap();
    picture.fill(Color::from_rgba8(0, 128, 0, 255));
    let png = picture.encode_png().unwrap();

    let mut pad = mounted(40.0, 40.0, 1.0);
    pad.load_image(&png, ImageOrigin::CrossOrigin).unwrap();
    assert!(pad.has_content());
    assert_eq!(pad.undo_depth(), 1);

    drag(&mut pad, Tool::Line, &[(0.0, 0.0), (40.0, 40.0)]);
    assert_eq!(pad.undo_depth(), 1);
    assert!(matches!(pad.export_raster(), Err(ExportError::Capture(_))));

    // The upload itself is still undoable.
    assert!(pad.undo());
    assert!(!pad.has_content());

    pad.on_resize(40.0, 40.0, 1.0).unwrap();
    assert!(pad.export_raster().is_ok());
}
