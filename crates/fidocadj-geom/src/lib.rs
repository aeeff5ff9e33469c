//! # FidoCadJ Geometry
//!
//! Coordinate mapping and geometric queries behind the FidoCadJ editor.
//!
//! ## Core Components
//!
//! - **CoordinateMapper**: logical ↔ device mapping with zoom, translation,
//!   macro rotation/mirroring, grid snapping, bounding-box tracking and a
//!   save/restore stack
//! - **Geometric distances**: pointer-to-primitive distances and containment
//!   tests used for selection
//! - **Drawing size**: drawing extents and zoom-to-fit, computed with a no-op
//!   rendering pass
//!
//! ## Architecture
//!
//! ```text
//! drawing_size (extent, zoom to fit)
//!   ├── DrawingModel (Sketch)
//!   │     └── GraphicsSink (NullGraphics)
//!   └── CoordinateMapper
//!         └── Orientation
//!
//! geometric_distances (stateless, used by hit-testing)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fidocadj_geom::{drawing_size, Primitive, Sketch};
//!
//! let mut sketch = Sketch::new();
//! sketch.add_primitive(Primitive::Line { x1: 0, y1: 0, x2: 200, y2: 100 });
//!
//! let fit = drawing_size::zoom_to_fit(&mut sketch, 400, 400, true);
//! assert_eq!(fit.x_magnitude(), 2.0);
//! ```

pub mod drawing;
pub mod drawing_size;
pub mod geometric_distances;
pub mod graphics;
pub mod map_coordinates;
pub mod orientation;
pub mod sketch;

pub use drawing::DrawingModel;
pub use drawing_size::{image_origin, image_size, zoom_to_fit, ImageExtent};
pub use graphics::{GraphicsSink, NullGraphics};
pub use map_coordinates::{CoordinateMapper, MapperState};
pub use orientation::Orientation;
pub use sketch::{BackgroundImage, MacroInstance, Primitive, Sketch};
