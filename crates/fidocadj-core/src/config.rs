//! View settings for a coordinate mapping context.
//!
//! A view or an export operation starts from a `ViewSettings` value that is
//! handed over explicitly; nothing here is global. Settings are stored as
//! JSON by the host application.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_GRID_STEP, MAX_MAGNITUDE, MIN_MAGNITUDE};
use crate::error::{ConfigError, ConfigResult};

/// Zoom, translation and grid settings of a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Magnitude applied on both axes (device units per logical unit)
    pub units_per_pixel: f64,
    /// Horizontal shift in device units
    pub x_center: f64,
    /// Vertical shift in device units
    pub y_center: f64,
    /// Horizontal grid step in logical units
    pub x_grid_step: i32,
    /// Vertical grid step in logical units
    pub y_grid_step: i32,
    /// Snap unmapped coordinates to the grid
    pub snap: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            units_per_pixel: 1.0,
            x_center: 0.0,
            y_center: 0.0,
            x_grid_step: DEFAULT_GRID_STEP,
            y_grid_step: DEFAULT_GRID_STEP,
            snap: true,
        }
    }
}

impl ViewSettings {
    /// Parses settings from a JSON document and validates them.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let settings: ViewSettings = serde_json::from_str(json)?;
        settings.validate()?;
        debug!(?settings, "Loaded view settings");
        Ok(settings)
    }

    /// Serializes the settings as pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every field against the limits the mapper enforces.
    pub fn validate(&self) -> ConfigResult<()> {
        let magnitude = self.units_per_pixel.abs();
        if !self.units_per_pixel.is_finite()
            || !(MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&magnitude)
        {
            return Err(out_of_range("units_per_pixel", self.units_per_pixel));
        }
        if !self.x_center.is_finite() {
            return Err(out_of_range("x_center", self.x_center));
        }
        if !self.y_center.is_finite() {
            return Err(out_of_range("y_center", self.y_center));
        }
        if self.x_grid_step <= 0 {
            return Err(out_of_range("x_grid_step", self.x_grid_step));
        }
        if self.y_grid_step <= 0 {
            return Err(out_of_range("y_grid_step", self.y_grid_step));
        }
        Ok(())
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
