//! # FidoCadJ
//!
//! Geometry core of the FidoCadJ schematic and PCB editor:
//! - Mapping between FidoCAD logical units and device pixels, including
//!   macro rotation and mirroring
//! - Pointer-to-primitive distances for selection
//! - Drawing extents and zoom to fit
//!
//! ## Architecture
//!
//! The workspace is organized as:
//!
//! 1. **fidocadj-core** - Constants, value types, errors, view settings
//! 2. **fidocadj-geom** - Coordinate mapper, distances, drawing size
//! 3. **fidocadj** - This crate, re-exporting both and setting up logging

pub use fidocadj_core::constants;
pub use fidocadj_core::{ConfigError, ConfigResult, DimensionG, PointG, ViewSettings};
pub use fidocadj_geom::{
    drawing_size, geometric_distances, BackgroundImage, CoordinateMapper, DrawingModel,
    GraphicsSink, ImageExtent, MacroInstance, MapperState, NullGraphics, Orientation, Primitive,
    Sketch,
};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, multi-line records
    #[default]
    Pretty,
    /// One JSON object per record
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support (INFO when unset)
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging with the given output format.
///
/// A subscriber installed earlier stays in place; this is not an error.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new("info")?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .with_target(true)
                    .json(),
            )
            .try_init(),
    };

    if let Err(err) = result {
        tracing::debug!(%err, "Logging already initialized");
    }
    Ok(())
}
