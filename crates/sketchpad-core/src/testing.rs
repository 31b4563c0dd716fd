//! Grid surface for exercising the state machine without a rasterizer.

use crate::config::StrokeStyle;
use crate::error::{CaptureError, ExportError, ImportError, ResizeError};
use crate::geometry::ShapeGeometry;
use crate::surface::{ImageOrigin, RasterSurface, Sheet, SurfaceSpec};
use kurbo::{Point, Size};

/// One byte per physical pixel; strokes mark the cells they pass through.
pub(crate) struct GridSurface {
    spec: SurfaceSpec,
    cells: Vec<u8>,
    tainted: bool,
    last_shape: Option<ShapeGeometry>,
}

/// A mounted 1:1 grid sheet.
pub(crate) fn grid_sheet(width: u32, height: u32) -> Sheet<GridSurface> {
    let spec = SurfaceSpec::new(Size::new(f64::from(width), f64::from(height)), 1.0, 4096)
        .expect("valid grid size");
    Sheet::new(GridSurface::allocate(spec, &StrokeStyle::default()).expect("grid allocation"))
}

impl GridSurface {
    pub(crate) fn is_inked(&self, x: u32, y: u32) -> bool {
        self.index(i64::from(x), i64::from(y))
            .is_some_and(|i| self.cells[i] != 0)
    }

    pub(crate) fn inked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    pub(crate) fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn set_tainted(&mut self, tainted: bool) {
        self.tainted = tainted;
    }

    pub(crate) fn last_shape(&self) -> Option<ShapeGeometry> {
        self.last_shape
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let (w, h) = (i64::from(self.spec.width), i64::from(self.spec.height));
        (x >= 0 && y >= 0 && x < w && y < h).then(|| (y * w + x) as usize)
    }

    fn mark(&mut self, p: Point) {
        let x = (p.x * self.spec.scale).floor() as i64;
        let y = (p.y * self.spec.scale).floor() as i64;
        if let Some(i) = self.index(x, y) {
            self.cells[i] = 1;
        }
    }

    fn mark_segment(&mut self, a: Point, b: Point) {
        let steps = (a.distance(b) * self.spec.scale * 4.0).ceil().max(1.0) as usize;
        for i in 0..=steps {
            self.mark(a.lerp(b, i as f64 / steps as f64));
        }
    }
}

impl RasterSurface for GridSurface {
    type Snapshot = Vec<u8>;

    fn allocate(spec: SurfaceSpec, _style: &StrokeStyle) -> Result<Self, ResizeError> {
        Ok(Self {
            spec,
            cells: vec![0; spec.width as usize * spec.height as usize],
            tainted: false,
            last_shape: None,
        })
    }

    fn spec(&self) -> SurfaceSpec {
        self.spec
    }

    fn snapshot(&self) -> Result<Self::Snapshot, CaptureError> {
        if self.tainted {
            return Err(CaptureError::Tainted);
        }
        Ok(self.cells.clone())
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        if snapshot.len() == self.cells.len() {
            self.cells.copy_from_slice(snapshot);
        }
    }

    fn clear(&mut self) {
        self.cells.fill(0);
    }

    fn stroke_segment(&mut self, from: Point, to: Point) {
        self.mark_segment(from, to);
    }

    fn stroke_shape(&mut self, shape: &ShapeGeometry) {
        match *shape {
            ShapeGeometry::Segment(line) => self.mark_segment(line.p0, line.p1),
            ShapeGeometry::Rect(rect) => {
                let corners = [
                    Point::new(rect.x0, rect.y0),
                    Point::new(rect.x1, rect.y0),
                    Point::new(rect.x1, rect.y1),
                    Point::new(rect.x0, rect.y1),
                ];
                for i in 0..4 {
                    self.mark_segment(corners[i], corners[(i + 1) % 4]);
                }
            }
            ShapeGeometry::Circle(circle) => {
                let steps = (circle.radius * self.spec.scale * 8.0).ceil().max(8.0) as usize;
                for i in 0..steps {
                    let angle = std::f64::consts::TAU * i as f64 / steps as f64;
                    self.mark(Point::new(
                        circle.center.x + circle.radius * angle.cos(),
                        circle.center.y + circle.radius * angle.sin(),
                    ));
                }
            }
        }
        self.last_shape = Some(*shape);
    }

    fn draw_image(&mut self, encoded: &[u8], origin: ImageOrigin) -> Result<(), ImportError> {
        if encoded.is_empty() {
            return Err(ImportError::Decode("empty image".to_string()));
        }
        self.cells.fill(1);
        if origin == ImageOrigin::CrossOrigin {
            self.tainted = true;
        }
        Ok(())
    }

    fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        if self.tainted {
            return Err(CaptureError::Tainted.into());
        }
        Ok(self.cells.clone())
    }
}
