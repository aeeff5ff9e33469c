//! Coordinate mapping between logical FidoCAD units and device pixels.
//!
//! The mapper scales and translates logical coordinates to device space. In
//! macro-local mode the coordinates are first taken relative to the macro
//! origin (100, 100) and rotated or mirrored according to the macro
//! instance. Every tracked forward mapping widens a bounding box of the
//! device coordinates produced, which is how the size of a drawing is found.
//!
//! The translation given by the center is meant for exports and for drawing
//! macros; scrolling the view is left to the host widget.
//!
//! ```text
//! plain:  vx = x * x_magnitude + x_center
//!         vy = y * y_magnitude + y_center
//! macro:  (x', y') = (x - 100, y - 100)
//!         (vx, vy) = orientation/mirror table of (x' * x_magnitude, y' * y_magnitude)
//!                    + (x_center, y_center)
//! ```

use std::fmt;

use fidocadj_core::constants::{DEFAULT_GRID_STEP, MACRO_ORIGIN, MAX_MAGNITUDE, MIN_MAGNITUDE};
use fidocadj_core::ViewSettings;
use tracing::{debug, warn};

use crate::orientation::Orientation;

/// Rounds to the nearest integer, halves going towards positive infinity.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn clamp_magnitude(requested: f64) -> f64 {
    let mut m = requested;
    if m.is_nan() || m.abs() < MIN_MAGNITUDE {
        m = MIN_MAGNITUDE;
    }
    if m.abs() > MAX_MAGNITUDE {
        m = MAX_MAGNITUDE;
    }
    if m != requested {
        debug!(requested, clamped = m, "Magnitude clamped");
    }
    m
}

/// Complete state of a mapper: transform, grid and tracked extremes.
///
/// This is the value saved by [`CoordinateMapper::push`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapperState {
    pub x_center: f64,
    pub y_center: f64,
    pub x_magnitude: f64,
    pub y_magnitude: f64,
    pub orientation: Orientation,
    pub mirror: bool,
    pub is_macro: bool,
    pub snap_active: bool,
    pub x_grid_step: i32,
    pub y_grid_step: i32,
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Default for MapperState {
    fn default() -> Self {
        Self {
            x_center: 0.0,
            y_center: 0.0,
            x_magnitude: 1.0,
            y_magnitude: 1.0,
            orientation: Orientation::R0,
            mirror: false,
            is_macro: false,
            snap_active: true,
            x_grid_step: DEFAULT_GRID_STEP,
            y_grid_step: DEFAULT_GRID_STEP,
            x_min: i32::MAX,
            x_max: i32::MIN,
            y_min: i32::MAX,
            y_max: i32::MIN,
        }
    }
}

/// Maps logical coordinates to device coordinates and back.
#[derive(Debug, Clone, Default)]
pub struct CoordinateMapper {
    state: MapperState,
    stack: Vec<MapperState>,
}

impl CoordinateMapper {
    /// Creates a mapper with unit magnitude, no translation, snapping on a
    /// 5 unit grid and an empty bounding box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapper from view settings, going through the checked setters.
    pub fn from_settings(settings: &ViewSettings) -> Self {
        let mut m = Self::new();
        m.set_magnitudes(settings.units_per_pixel, settings.units_per_pixel);
        m.set_x_center(settings.x_center);
        m.set_y_center(settings.y_center);
        m.set_x_grid_step(settings.x_grid_step);
        m.set_y_grid_step(settings.y_grid_step);
        m.set_snap(settings.snap);
        m
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> MapperState {
        self.state
    }

    /// Number of states saved by [`push`](Self::push) and not yet restored.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Saves the whole state on the internal stack.
    pub fn push(&mut self) {
        self.stack.push(self.state);
    }

    /// Restores the last saved state.
    ///
    /// Popping an empty stack logs a warning and leaves the state untouched.
    pub fn pop(&mut self) {
        match self.stack.pop() {
            Some(saved) => self.state = saved,
            None => warn!("Cannot pop the coordinate state out of an empty stack"),
        }
    }

    /// Sets the orientation from a FidoCAD index, clamped to `0..=3`.
    pub fn set_orientation_index(&mut self, o: i32) {
        self.state.orientation = Orientation::from_index(o);
    }

    pub fn set_orientation(&mut self, o: Orientation) {
        self.state.orientation = o;
    }

    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    pub fn set_mirror(&mut self, mirror: bool) {
        self.state.mirror = mirror;
    }

    pub fn mirror(&self) -> bool {
        self.state.mirror
    }

    /// Switches between the plain view formula and the macro-local one.
    pub fn set_macro(&mut self, is_macro: bool) {
        self.state.is_macro = is_macro;
    }

    pub fn is_macro(&self) -> bool {
        self.state.is_macro
    }

    pub fn set_snap(&mut self, snap: bool) {
        self.state.snap_active = snap;
    }

    pub fn snap(&self) -> bool {
        self.state.snap_active
    }

    /// Sets the horizontal grid step; non-positive values are ignored.
    pub fn set_x_grid_step(&mut self, step: i32) {
        if step > 0 {
            self.state.x_grid_step = step;
        }
    }

    /// Sets the vertical grid step; non-positive values are ignored.
    pub fn set_y_grid_step(&mut self, step: i32) {
        if step > 0 {
            self.state.y_grid_step = step;
        }
    }

    pub fn x_grid_step(&self) -> i32 {
        self.state.x_grid_step
    }

    pub fn y_grid_step(&self) -> i32 {
        self.state.y_grid_step
    }

    pub fn x_magnitude(&self) -> f64 {
        self.state.x_magnitude
    }

    pub fn y_magnitude(&self) -> f64 {
        self.state.y_magnitude
    }

    /// Sets the horizontal magnitude, clamped to
    /// `[MIN_MAGNITUDE, MAX_MAGNITUDE]`.
    pub fn set_x_magnitude(&mut self, m: f64) {
        self.state.x_magnitude = clamp_magnitude(m);
    }

    /// Sets the vertical magnitude, clamped to
    /// `[MIN_MAGNITUDE, MAX_MAGNITUDE]`.
    pub fn set_y_magnitude(&mut self, m: f64) {
        self.state.y_magnitude = clamp_magnitude(m);
    }

    pub fn set_magnitudes(&mut self, xm: f64, ym: f64) {
        self.set_x_magnitude(xm);
        self.set_y_magnitude(ym);
    }

    /// Sets the horizontal magnitude as given, without clamping.
    pub fn set_x_magnitude_no_check(&mut self, m: f64) {
        self.state.x_magnitude = m;
    }

    /// Sets the vertical magnitude as given, without clamping.
    pub fn set_y_magnitude_no_check(&mut self, m: f64) {
        self.state.y_magnitude = m;
    }

    pub fn set_magnitudes_no_check(&mut self, xm: f64, ym: f64) {
        self.set_x_magnitude_no_check(xm);
        self.set_y_magnitude_no_check(ym);
    }

    pub fn x_center(&self) -> f64 {
        self.state.x_center
    }

    pub fn y_center(&self) -> f64 {
        self.state.y_center
    }

    pub fn set_x_center(&mut self, c: f64) {
        self.state.x_center = c;
    }

    pub fn set_y_center(&mut self, c: f64) {
        self.state.y_center = c;
    }

    pub fn x_min(&self) -> i32 {
        self.state.x_min
    }

    pub fn x_max(&self) -> i32 {
        self.state.x_max
    }

    pub fn y_min(&self) -> i32 {
        self.state.y_min
    }

    pub fn y_max(&self) -> i32 {
        self.state.y_max
    }

    /// Empties the tracked bounding box.
    pub fn reset_min_max(&mut self) {
        self.state.x_min = i32::MAX;
        self.state.y_min = i32::MAX;
        self.state.x_max = i32::MIN;
        self.state.y_max = i32::MIN;
    }

    /// True once at least one point has been tracked since the last reset.
    pub fn has_valid_bounds(&self) -> bool {
        self.state.x_max >= self.state.x_min && self.state.y_max >= self.state.y_min
    }

    /// Maps a logical point on both axes without rounding or tracking.
    pub fn map_real(&self, x: f64, y: f64) -> (f64, f64) {
        let s = &self.state;
        let (vx, vy) = if s.is_macro {
            let sx = (x - MACRO_ORIGIN) * s.x_magnitude;
            let sy = (y - MACRO_ORIGIN) * s.y_magnitude;
            s.orientation.apply(s.mirror, sx, sy)
        } else {
            (x * s.x_magnitude, y * s.y_magnitude)
        };
        (vx + s.x_center, vy + s.y_center)
    }

    /// Maps the X coordinate of a logical point, without rounding or tracking.
    pub fn map_x_real(&self, x: f64, y: f64) -> f64 {
        self.map_real(x, y).0
    }

    /// Maps the Y coordinate of a logical point, without rounding or tracking.
    pub fn map_y_real(&self, x: f64, y: f64) -> f64 {
        self.map_real(x, y).1
    }

    /// Maps and rounds the X coordinate, widening the bounding box.
    pub fn map_x(&mut self, x: f64, y: f64) -> i32 {
        self.map_x_tracked(x, y, true)
    }

    /// Maps and rounds the Y coordinate, widening the bounding box.
    pub fn map_y(&mut self, x: f64, y: f64) -> i32 {
        self.map_y_tracked(x, y, true)
    }

    /// Maps and rounds the X coordinate; the bounding box is only widened
    /// when `track` is set.
    pub fn map_x_tracked(&mut self, x: f64, y: f64, track: bool) -> i32 {
        let ivx = round_half_up(self.map_x_real(x, y)) as i32;
        if track {
            self.state.x_min = self.state.x_min.min(ivx);
            self.state.x_max = self.state.x_max.max(ivx);
        }
        ivx
    }

    /// Maps and rounds the Y coordinate; the bounding box is only widened
    /// when `track` is set.
    pub fn map_y_tracked(&mut self, x: f64, y: f64, track: bool) -> i32 {
        let ivy = round_half_up(self.map_y_real(x, y)) as i32;
        if track {
            self.state.y_min = self.state.y_min.min(ivy);
            self.state.y_max = self.state.y_max.max(ivy);
        }
        ivy
    }

    /// Maps a logical point on both axes with tracking.
    pub fn map_point(&mut self, x: f64, y: f64) -> (i32, i32) {
        (self.map_x(x, y), self.map_y(x, y))
    }

    /// Folds a point already in device coordinates into the bounding box.
    ///
    /// Fractional coordinates are truncated.
    pub fn track_point(&mut self, xp: f64, yp: f64) {
        let s = &mut self.state;
        if yp < s.y_min as f64 {
            s.y_min = yp as i32;
        }
        if yp > s.y_max as f64 {
            s.y_max = yp as i32;
        }
        if xp < s.x_min as f64 {
            s.x_min = xp as i32;
        }
        if xp > s.x_max as f64 {
            s.x_max = xp as i32;
        }
    }

    /// Converts a device X coordinate to logical units, ignoring the grid.
    ///
    /// The inverse always uses the plain view formula.
    pub fn unmap_x_no_snap(&self, x: i32) -> i32 {
        round_half_up((x as f64 - self.state.x_center) / self.state.x_magnitude) as i32
    }

    /// Converts a device Y coordinate to logical units, ignoring the grid.
    pub fn unmap_y_no_snap(&self, y: i32) -> i32 {
        round_half_up((y as f64 - self.state.y_center) / self.state.y_magnitude) as i32
    }

    /// Converts a device X coordinate to logical units, snapped to the grid
    /// when snapping is active.
    pub fn unmap_x_snap(&self, x: i32) -> i32 {
        let xc = self.unmap_x_no_snap(x);
        if self.state.snap_active {
            snap_to(xc, self.state.x_grid_step)
        } else {
            xc
        }
    }

    /// Converts a device Y coordinate to logical units, snapped to the grid
    /// when snapping is active.
    pub fn unmap_y_snap(&self, y: i32) -> i32 {
        let yc = self.unmap_y_no_snap(y);
        if self.state.snap_active {
            snap_to(yc, self.state.y_grid_step)
        } else {
            yc
        }
    }
}

/// Nearest multiple of `step`, saturating at the `i32` limits.
fn snap_to(value: i32, step: i32) -> i32 {
    (round_half_up(value as f64 / step as f64) * step as f64) as i32
}

impl From<&ViewSettings> for CoordinateMapper {
    fn from(settings: &ViewSettings) -> Self {
        Self::from_settings(settings)
    }
}

impl fmt::Display for CoordinateMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.state;
        write!(
            f,
            "[xCenter={}|yCenter={}|xMagnitude={}|yMagnitude={}|orientation={}|mirror={}\
             |isMacro={}|snapActive={}|xMin={}|xMax={}|yMin={}|yMax={}|xGridStep={}|yGridStep={}]",
            s.x_center,
            s.y_center,
            s.x_magnitude,
            s.y_magnitude,
            s.orientation,
            s.mirror,
            s.is_macro,
            s.snap_active,
            s.x_min,
            s.x_max,
            s.y_min,
            s.y_max,
            s.x_grid_step,
            s.y_grid_step
        )
    }
}
