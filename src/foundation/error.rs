pub type GpuResult<T> = Result<T, GpuError>;

/// Errors raised while configuring GPU memory, building command buffers, or moving scenes and
/// frames across the JSON/PNG boundary.
///
/// Command execution itself never fails: misconfigured commands degrade silently (see
/// [`crate::gpu_execute`]).
#[derive(thiserror::Error, Debug)]
pub enum GpuError {
    /// Invalid ids, unknown shader names, mismatched sizes.
    #[error("validation error: {0}")]
    Validation(String),

    /// A fixed-capacity array (buffers, textures, uniforms, programs, commands) is full.
    #[error("capacity error: {0}")]
    Capacity(String),

    /// Scene JSON could not be parsed or produced.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Image decoding or encoding failed.
    #[error("image error: {0}")]
    Image(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GpuError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn capacity(msg: impl Into<String>) -> Self {
        Self::Capacity(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
