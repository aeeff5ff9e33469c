//! Minimal drawing model: a flat list of primitives in logical units.
//!
//! `Sketch` is the reference implementation of [`DrawingModel`]. It knows how
//! to render its primitives through a [`CoordinateMapper`] (which is what the
//! extent computations need) and how far each primitive lies from a pointer
//! position (which is what selection needs).

use fidocadj_core::constants::MIN_DISTANCE;
use serde::{Deserialize, Serialize};

use crate::drawing::DrawingModel;
use crate::geometric_distances::{
    bezier_samples, point_in_ellipse_f64, point_in_polygon, point_in_rectangle_f64,
    point_to_bezier, point_to_ellipse_f64, point_to_point, point_to_rectangle_f64,
    point_to_segment,
};
use crate::graphics::GraphicsSink;
use crate::map_coordinates::{round_half_up, CoordinateMapper};
use crate::orientation::Orientation;

/// Diameter of a connection dot, in logical units.
pub const CONNECTION_DIAMETER: f64 = 2.0;

/// Native resolution of FidoCAD drawings, in logical units per inch.
const FIDOCAD_DPI: f64 = 200.0;

/// A graphic primitive with integer logical coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    /// Axis-aligned rectangle given by two opposite corners.
    Rectangle {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        filled: bool,
    },
    /// Ellipse inscribed in the box given by two opposite corners.
    Oval {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        filled: bool,
    },
    /// Cubic Bézier curve given by its four control points.
    Bezier { points: [(i32, i32); 4] },
    Polygon {
        points: Vec<(i32, i32)>,
        filled: bool,
    },
    /// Electrical connection dot centered on a point.
    Connection { x: i32, y: i32 },
    Macro(MacroInstance),
}

/// Placement of a symbol whose primitives are authored around the local
/// origin (100, 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroInstance {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub mirror: bool,
    pub primitives: Vec<Primitive>,
}

/// Normalized `(x, y, width, height)` box from two opposite corners. Sizes
/// that do not fit an `i32` saturate.
fn corner_box(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32, i32) {
    let w = i32::try_from(x2.abs_diff(x1)).unwrap_or(i32::MAX);
    let h = i32::try_from(y2.abs_diff(y1)).unwrap_or(i32::MAX);
    (x1.min(x2), y1.min(y2), w, h)
}

/// Same as [`corner_box`], without the `i32` range limit on the sizes.
fn corner_box_f64(x1: i32, y1: i32, x2: i32, y2: i32) -> (f64, f64, f64, f64) {
    (
        x1.min(x2) as f64,
        y1.min(y2) as f64,
        (x2 as f64 - x1 as f64).abs(),
        (y2 as f64 - y1 as f64).abs(),
    )
}

impl MacroInstance {
    /// Renders the symbol with the macro-local formula, then folds the box of
    /// its primitives into the parent box.
    fn draw(&self, g: &mut dyn GraphicsSink, m: &mut CoordinateMapper) {
        let (cx, cy) = m.map_real(self.x as f64, self.y as f64);
        let orientation = self.orientation.compose(m.orientation());
        let mirror = self.mirror ^ m.mirror();

        m.push();
        m.set_x_center(cx);
        m.set_y_center(cy);
        m.set_orientation(orientation);
        m.set_mirror(mirror);
        m.set_macro(true);
        m.reset_min_max();

        for p in &self.primitives {
            p.draw(g, m);
        }
        let child = m.state();
        m.pop();

        if child.x_max >= child.x_min && child.y_max >= child.y_min {
            m.track_point(child.x_max as f64, child.y_max as f64);
            m.track_point(child.x_min as f64, child.y_min as f64);
        }
    }

    /// Mapper taking the symbol's local coordinates to the parent's logical
    /// coordinates.
    fn local_to_parent(&self) -> CoordinateMapper {
        let mut m = CoordinateMapper::new();
        m.set_x_center(self.x as f64);
        m.set_y_center(self.y as f64);
        m.set_orientation(self.orientation);
        m.set_mirror(self.mirror);
        m.set_macro(true);
        m
    }

    fn distance_to_point(&self, px: i32, py: i32) -> i32 {
        let m = self.local_to_parent();
        self.primitives
            .iter()
            .map(|p| p.transformed(&m).distance_to_point(px, py))
            .min()
            .unwrap_or(MIN_DISTANCE)
    }
}

impl Primitive {
    /// Renders the primitive, tracking every mapped point.
    pub fn draw(&self, g: &mut dyn GraphicsSink, m: &mut CoordinateMapper) {
        match self {
            Primitive::Line { x1, y1, x2, y2 } => {
                let (ax, ay) = m.map_point(*x1 as f64, *y1 as f64);
                let (bx, by) = m.map_point(*x2 as f64, *y2 as f64);
                g.draw_line(ax, ay, bx, by);
            }
            Primitive::Rectangle {
                x1,
                y1,
                x2,
                y2,
                filled,
            } => {
                let (ax, ay) = m.map_point(*x1 as f64, *y1 as f64);
                let (bx, by) = m.map_point(*x2 as f64, *y2 as f64);
                let (x, y, w, h) = corner_box(ax, ay, bx, by);
                g.draw_rect(x, y, w, h, *filled);
            }
            Primitive::Oval {
                x1,
                y1,
                x2,
                y2,
                filled,
            } => {
                let (ax, ay) = m.map_point(*x1 as f64, *y1 as f64);
                let (bx, by) = m.map_point(*x2 as f64, *y2 as f64);
                let (x, y, w, h) = corner_box(ax, ay, bx, by);
                g.draw_oval(x, y, w, h, *filled);
            }
            Primitive::Bezier { points } => {
                let mut device = [(0.0, 0.0); 4];
                for (d, (x, y)) in device.iter_mut().zip(points.iter()) {
                    let (dx, dy) = m.map_point(*x as f64, *y as f64);
                    *d = (dx as f64, dy as f64);
                }
                let polyline: Vec<(i32, i32)> = bezier_samples(device)
                    .iter()
                    .map(|(x, y)| (round_half_up(*x) as i32, round_half_up(*y) as i32))
                    .collect();
                g.draw_polyline(&polyline);
            }
            Primitive::Polygon { points, filled } => {
                let device: Vec<(i32, i32)> = points
                    .iter()
                    .map(|(x, y)| m.map_point(*x as f64, *y as f64))
                    .collect();
                g.draw_polygon(&device, *filled);
            }
            Primitive::Connection { x, y } => {
                let (cx, cy) = m.map_point(*x as f64, *y as f64);
                let d = round_half_up((CONNECTION_DIAMETER * m.x_magnitude()).abs()).max(1.0) as i32;
                g.draw_oval(cx.saturating_sub(d / 2), cy.saturating_sub(d / 2), d, d, true);
            }
            Primitive::Macro(instance) => instance.draw(g, m),
        }
    }

    /// Returns a copy with every point mapped through `m` and rounded.
    ///
    /// Nested macros keep their local primitives; their placement is
    /// composed with the mapper's orientation and mirroring.
    pub fn transformed(&self, m: &CoordinateMapper) -> Primitive {
        let map = |x: i32, y: i32| -> (i32, i32) {
            let (vx, vy) = m.map_real(x as f64, y as f64);
            (round_half_up(vx) as i32, round_half_up(vy) as i32)
        };
        match self {
            Primitive::Line { x1, y1, x2, y2 } => {
                let (ax, ay) = map(*x1, *y1);
                let (bx, by) = map(*x2, *y2);
                Primitive::Line {
                    x1: ax,
                    y1: ay,
                    x2: bx,
                    y2: by,
                }
            }
            Primitive::Rectangle {
                x1,
                y1,
                x2,
                y2,
                filled,
            } => {
                let (ax, ay) = map(*x1, *y1);
                let (bx, by) = map(*x2, *y2);
                Primitive::Rectangle {
                    x1: ax,
                    y1: ay,
                    x2: bx,
                    y2: by,
                    filled: *filled,
                }
            }
            Primitive::Oval {
                x1,
                y1,
                x2,
                y2,
                filled,
            } => {
                let (ax, ay) = map(*x1, *y1);
                let (bx, by) = map(*x2, *y2);
                Primitive::Oval {
                    x1: ax,
                    y1: ay,
                    x2: bx,
                    y2: by,
                    filled: *filled,
                }
            }
            Primitive::Bezier { points } => {
                let mut mapped = *points;
                for p in mapped.iter_mut() {
                    *p = map(p.0, p.1);
                }
                Primitive::Bezier { points: mapped }
            }
            Primitive::Polygon { points, filled } => Primitive::Polygon {
                points: points.iter().map(|(x, y)| map(*x, *y)).collect(),
                filled: *filled,
            },
            Primitive::Connection { x, y } => {
                let (cx, cy) = map(*x, *y);
                Primitive::Connection { x: cx, y: cy }
            }
            Primitive::Macro(instance) => {
                let (x, y) = map(instance.x, instance.y);
                Primitive::Macro(MacroInstance {
                    x,
                    y,
                    orientation: instance.orientation.compose(m.orientation()),
                    mirror: instance.mirror ^ m.mirror(),
                    primitives: instance.primitives.clone(),
                })
            }
        }
    }

    /// Distance between the primitive and a point, both in logical units.
    ///
    /// Filled shapes give zero for any point inside them.
    pub fn distance_to_point(&self, px: i32, py: i32) -> i32 {
        match self {
            Primitive::Line { x1, y1, x2, y2 } => point_to_segment(*x1, *y1, *x2, *y2, px, py),
            Primitive::Rectangle {
                x1,
                y1,
                x2,
                y2,
                filled,
            } => {
                let (x, y, w, h) = corner_box_f64(*x1, *y1, *x2, *y2);
                let (px, py) = (px as f64, py as f64);
                if *filled && point_in_rectangle_f64(x, y, w, h, px, py) {
                    0
                } else {
                    point_to_rectangle_f64(x, y, w, h, px, py) as i32
                }
            }
            Primitive::Oval {
                x1,
                y1,
                x2,
                y2,
                filled,
            } => {
                let (x, y, w, h) = corner_box_f64(*x1, *y1, *x2, *y2);
                let (px, py) = (px as f64, py as f64);
                if *filled && point_in_ellipse_f64(x, y, w, h, px, py) {
                    0
                } else {
                    round_half_up(point_to_ellipse_f64(x, y, w, h, px, py)) as i32
                }
            }
            Primitive::Bezier { points: p } => point_to_bezier(
                p[0].0, p[0].1, p[1].0, p[1].1, p[2].0, p[2].1, p[3].0, p[3].1, px, py,
            ),
            Primitive::Polygon { points, filled } => {
                let xs: Vec<i32> = points.iter().map(|p| p.0).collect();
                let ys: Vec<i32> = points.iter().map(|p| p.1).collect();
                if *filled && point_in_polygon(&xs, &ys, px as f64, py as f64) {
                    return 0;
                }
                let n = points.len();
                (0..n)
                    .map(|i| {
                        let (ax, ay) = points[i];
                        let (bx, by) = points[(i + 1) % n];
                        point_to_segment(ax, ay, bx, by, px, py)
                    })
                    .min()
                    .unwrap_or(MIN_DISTANCE)
            }
            Primitive::Connection { x, y } => point_to_point(*x, *y, px, py),
            Primitive::Macro(instance) => instance.distance_to_point(px, py),
        }
    }
}

/// Raster image shown behind the drawing, placed in logical units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// Top-left corner, logical X
    pub x_corner: f64,
    /// Top-left corner, logical Y
    pub y_corner: f64,
    /// Width in image pixels
    pub width: u32,
    /// Height in image pixels
    pub height: u32,
    /// Image resolution in dots per inch
    pub resolution: f64,
}

impl BackgroundImage {
    fn track_extreme_points(&self, m: &mut CoordinateMapper) {
        if self.resolution <= 0.0 {
            return;
        }
        let ox = m.map_x_tracked(self.x_corner, self.y_corner, false);
        let oy = m.map_y_tracked(self.x_corner, self.y_corner, false);
        let w = (FIDOCAD_DPI * self.width as f64 / self.resolution * m.x_magnitude() + 0.5) as i32;
        let h = (FIDOCAD_DPI * self.height as f64 / self.resolution * m.y_magnitude() + 0.5) as i32;
        m.track_point(ox as f64, oy as f64);
        m.track_point(ox.saturating_add(w) as f64, oy.saturating_add(h) as f64);
    }
}

fn default_changed() -> bool {
    true
}

/// A drawing made of primitives, with an optional background image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sketch {
    primitives: Vec<Primitive>,
    #[serde(default)]
    background: Option<BackgroundImage>,
    #[serde(skip, default = "default_changed")]
    changed: bool,
}

impl Default for Sketch {
    fn default() -> Self {
        Self {
            primitives: Vec::new(),
            background: None,
            changed: true,
        }
    }
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sketch holding the given primitives.
    pub fn with_primitives(primitives: Vec<Primitive>) -> Self {
        Self {
            primitives,
            ..Self::default()
        }
    }

    pub fn add_primitive(&mut self, p: Primitive) {
        self.primitives.push(p);
        self.changed = true;
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn set_background(&mut self, background: Option<BackgroundImage>) {
        self.background = background;
        self.changed = true;
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    /// Index of the primitive closest to `(px, py)`, if its distance does
    /// not exceed `tolerance`. Ties go to the primitive drawn last, which is
    /// the one on top.
    pub fn nearest_primitive(&self, px: i32, py: i32, tolerance: i32) -> Option<usize> {
        self.primitives
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance_to_point(px, py)))
            .filter(|(_, d)| *d <= tolerance)
            .min_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(i, _)| i)
    }
}

impl DrawingModel for Sketch {
    fn set_changed(&mut self, changed: bool) {
        self.changed = changed;
    }

    fn is_changed(&self) -> bool {
        self.changed
    }

    fn draw(&self, g: &mut dyn GraphicsSink, mapper: &mut CoordinateMapper) {
        for p in &self.primitives {
            p.draw(g, mapper);
        }
    }

    fn track_extreme_points(&self, mapper: &mut CoordinateMapper) {
        if let Some(bg) = &self.background {
            bg.track_extreme_points(mapper);
        }
    }
}
