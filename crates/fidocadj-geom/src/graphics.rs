//! Device-space drawing contract used by primitives.
//!
//! Primitives map their geometry through a [`CoordinateMapper`] and hand the
//! resulting device coordinates to a [`GraphicsSink`]. A real sink rasterizes
//! them; [`NullGraphics`] drops them, which is enough when only the bounding
//! box collected by the mapper is wanted.
//!
//! [`CoordinateMapper`]: crate::map_coordinates::CoordinateMapper

/// Receiver of device-space drawing calls.
pub trait GraphicsSink {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, filled: bool);
    fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32, filled: bool);
    /// Closed polygon through the given vertices.
    fn draw_polygon(&mut self, vertices: &[(i32, i32)], filled: bool);
    /// Open polyline through the given vertices.
    fn draw_polyline(&mut self, vertices: &[(i32, i32)]);
    fn draw_string(&mut self, text: &str, x: i32, y: i32);
}

/// Sink that ignores every drawing call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGraphics;

impl NullGraphics {
    pub fn new() -> Self {
        Self
    }
}

impl GraphicsSink for NullGraphics {
    fn draw_line(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32) {}

    fn draw_rect(&mut self, _x: i32, _y: i32, _width: i32, _height: i32, _filled: bool) {}

    fn draw_oval(&mut self, _x: i32, _y: i32, _width: i32, _height: i32, _filled: bool) {}

    fn draw_polygon(&mut self, _vertices: &[(i32, i32)], _filled: bool) {}

    fn draw_polyline(&mut self, _vertices: &[(i32, i32)]) {}

    fn draw_string(&mut self, _text: &str, _x: i32, _y: i32) {}
}
