/// Convenience result type used across Viewfinder.
pub type ViewfinderResult<T> = Result<T, ViewfinderError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ViewfinderError {
    /// Invalid user-provided parameter or tensor data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or compositing overlay strokes.
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors while encoding the preview for transport.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ViewfinderError {
    /// Build a [`ViewfinderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ViewfinderError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`ViewfinderError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
