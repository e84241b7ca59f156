use thiserror::Error;

/// Errors raised while constructing schedules, grids, and environments
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid decay factor {factor}: must be finite and greater than zero")]
    InvalidDecayFactor { factor: f64 },

    #[error("invalid grid size {width}x{height}: both dimensions must be at least 1")]
    InvalidGridSize { width: usize, height: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
