use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load config file {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Invalid {field}: {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Inputs must be finite numbers.")]
    NonFinite,

    #[error("No real landing time (g must be positive and vy^2 + 2*g*h = {0} non-negative).")]
    NoLanding(f64),

    #[error("Plot export failed: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
