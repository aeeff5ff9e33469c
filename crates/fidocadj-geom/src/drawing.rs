//! Contract between the extent computations and a drawing model.

use crate::graphics::GraphicsSink;
use crate::map_coordinates::CoordinateMapper;

/// A drawing that can render itself through a coordinate mapper.
///
/// Rendering must map every extremal point of every primitive through the
/// mapper with tracking enabled, so that after [`draw`](Self::draw) the
/// mapper's bounding box covers the whole drawing.
pub trait DrawingModel {
    /// Marks the model as modified, forcing cached geometry to be rebuilt on
    /// the next draw.
    fn set_changed(&mut self, changed: bool);

    fn is_changed(&self) -> bool;

    /// Renders every primitive on `g` through `mapper`.
    fn draw(&self, g: &mut dyn GraphicsSink, mapper: &mut CoordinateMapper);

    /// Folds content that is not made of primitives, such as a background
    /// image, into the mapper's bounding box.
    fn track_extreme_points(&self, _mapper: &mut CoordinateMapper) {}
}
