use fidocadj_core::constants::MIN_MAGNITUDE;
use fidocadj_core::{DimensionG, PointG};
use fidocadj_geom::{
    image_origin, image_size, zoom_to_fit, BackgroundImage, DrawingModel, MacroInstance,
    Orientation, Primitive, Sketch,
};

fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Primitive {
    Primitive::Line { x1, y1, x2, y2 }
}

fn single_macro(x: i32, y: i32, orientation: Orientation, mirror: bool) -> Sketch {
    Sketch::with_primitives(vec![Primitive::Macro(MacroInstance {
        x,
        y,
        orientation,
        mirror,
        primitives: vec![line(100, 100, 120, 110)],
    })])
}

#[test]
fn test_zoom_to_fit_keeps_aspect_ratio() {
    let mut sketch = Sketch::with_primitives(vec![Primitive::Rectangle {
        x1: 0,
        y1: 0,
        x2: 200,
        y2: 100,
        filled: false,
    }]);
    let fit = zoom_to_fit(&mut sketch, 400, 400, true);
    assert_eq!(fit.x_magnitude(), 2.0);
    assert_eq!(fit.y_magnitude(), 2.0);
    assert_eq!(fit.x_center(), 0.0);
    assert_eq!(fit.y_center(), 0.0);
}

#[test]
fn test_zoom_to_fit_moves_origin_to_top_left() {
    let mut sketch = Sketch::with_primitives(vec![line(50, 20, 250, 120)]);
    let mut fit = zoom_to_fit(&mut sketch, 400, 400, true);
    assert_eq!(fit.x_magnitude(), 2.0);
    assert_eq!(fit.x_center(), -100.0);
    assert_eq!(fit.y_center(), -40.0);
    assert_eq!(fit.map_x(50.0, 20.0), 0);
    assert_eq!(fit.map_y(50.0, 20.0), 0);
    assert_eq!(fit.map_x(250.0, 120.0), 400);
}

#[test]
fn test_zoom_to_fit_without_count_min_uses_logical_origin() {
    let mut sketch = Sketch::with_primitives(vec![line(50, 20, 250, 120)]);
    let fit = zoom_to_fit(&mut sketch, 400, 400, false);
    assert_eq!(fit.x_magnitude(), 1.6);
    assert_eq!(fit.x_center(), 0.0);
    assert_eq!(fit.y_center(), 0.0);
}

#[test]
fn test_zoom_to_fit_rounds_to_two_decimals() {
    let mut sketch = Sketch::with_primitives(vec![line(0, 0, 300, 300)]);
    let fit = zoom_to_fit(&mut sketch, 400, 400, true);
    assert_eq!(fit.x_magnitude(), 1.33);
}

#[test]
fn test_zoom_to_fit_clamps_to_min_magnitude() {
    let mut sketch = Sketch::with_primitives(vec![line(0, 0, 10000, 10000)]);
    let fit = zoom_to_fit(&mut sketch, 100, 100, true);
    assert_eq!(fit.x_magnitude(), MIN_MAGNITUDE);
    assert_eq!(fit.y_magnitude(), MIN_MAGNITUDE);
}

#[test]
fn test_image_size_counting_min() {
    let mut sketch = Sketch::with_primitives(vec![line(50, 20, 250, 120)]);
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.size, DimensionG::new(200, 100));
    assert_eq!(extent.origin, PointG::new(50, 20));
}

#[test]
fn test_image_size_from_origin() {
    let mut sketch = Sketch::with_primitives(vec![line(50, 20, 250, 120)]);
    let extent = image_size(&mut sketch, 1.0, false);
    assert_eq!(extent.size, DimensionG::new(250, 120));
    assert_eq!(extent.origin, PointG::new(50, 20));
}

#[test]
fn test_image_size_scales_with_magnitude() {
    let mut sketch = Sketch::with_primitives(vec![line(0, 0, 200, 100)]);
    let extent = image_size(&mut sketch, 2.0, true);
    assert_eq!(extent.size, DimensionG::new(400, 200));
}

#[test]
fn test_image_size_empty_drawing() {
    let mut sketch = Sketch::new();
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.size, DimensionG::new(1, 1));
    assert_eq!(extent.origin, PointG::new(0, 0));

    let extent = image_size(&mut sketch, 1.0, false);
    assert_eq!(extent.size, DimensionG::new(1, 1));
    assert_eq!(image_origin(&mut sketch, 1.0), PointG::new(0, 0));
}

#[test]
fn test_image_size_flat_drawing() {
    let mut sketch = Sketch::with_primitives(vec![line(10, 40, 90, 40)]);
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.size, DimensionG::new(80, 1));
}

#[test]
fn test_image_origin() {
    let mut sketch = Sketch::with_primitives(vec![
        line(50, 20, 250, 120),
        Primitive::Connection { x: 30, y: 70 },
    ]);
    assert_eq!(image_origin(&mut sketch, 1.0), PointG::new(30, 20));
    assert_eq!(image_origin(&mut sketch, 2.0), PointG::new(60, 40));
}

#[test]
fn test_extent_pass_marks_model_changed() {
    let mut sketch = Sketch::with_primitives(vec![line(0, 0, 10, 10)]);
    sketch.set_changed(false);
    image_size(&mut sketch, 1.0, true);
    assert!(sketch.is_changed());

    sketch.set_changed(false);
    image_origin(&mut sketch, 1.0);
    assert!(sketch.is_changed());
}

#[test]
fn test_background_image_counts_in_extent() {
    let mut sketch = Sketch::new();
    sketch.set_background(Some(BackgroundImage {
        x_corner: 10.0,
        y_corner: 10.0,
        width: 200,
        height: 100,
        resolution: 200.0,
    }));
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.size, DimensionG::new(200, 100));
    assert_eq!(extent.origin, PointG::new(10, 10));

    // A 400 dpi image covers half as many logical units.
    sketch.set_background(Some(BackgroundImage {
        x_corner: 0.0,
        y_corner: 0.0,
        width: 200,
        height: 100,
        resolution: 400.0,
    }));
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.size, DimensionG::new(100, 50));
}

#[test]
fn test_macro_extent_follows_anchor() {
    let mut sketch = single_macro(50, 50, Orientation::R0, false);
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.size, DimensionG::new(20, 10));
    assert_eq!(extent.origin, PointG::new(50, 50));
}

#[test]
fn test_macro_extent_rotated() {
    let mut sketch = single_macro(50, 50, Orientation::R90, false);
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.size, DimensionG::new(10, 20));
    assert_eq!(extent.origin, PointG::new(40, 50));
}

#[test]
fn test_macro_extent_mirrored() {
    let mut sketch = single_macro(50, 50, Orientation::R0, true);
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.size, DimensionG::new(20, 10));
    assert_eq!(extent.origin, PointG::new(30, 50));
}

#[test]
fn test_nested_macro_composes_orientation() {
    let inner = MacroInstance {
        x: 100,
        y: 100,
        orientation: Orientation::R90,
        mirror: false,
        primitives: vec![line(100, 100, 110, 100)],
    };
    let mut sketch = Sketch::with_primitives(vec![Primitive::Macro(MacroInstance {
        x: 100,
        y: 100,
        orientation: Orientation::R90,
        mirror: false,
        primitives: vec![Primitive::Macro(inner)],
    })]);
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.origin, PointG::new(90, 100));
    assert_eq!(extent.size, DimensionG::new(10, 1));
}

#[test]
fn test_background_image_past_i32_limit() {
    let mut sketch = Sketch::new();
    sketch.set_background(Some(BackgroundImage {
        x_corner: 2_147_000_000.0,
        y_corner: 0.0,
        width: 2_000_000,
        height: 100,
        resolution: 200.0,
    }));
    let extent = image_size(&mut sketch, 1.0, true);
    assert_eq!(extent.size, DimensionG::new(i32::MAX - 2_147_000_000, 100));
    assert_eq!(extent.origin, PointG::new(2_147_000_000, 0));
}
