//! # FidoCadJ Core
//!
//! Core constants, value types, errors and view settings shared by the
//! FidoCadJ geometry crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::ViewSettings;
pub use error::{ConfigError, ConfigResult};
pub use types::{DimensionG, PointG};
