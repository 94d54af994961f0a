use crate::foundation::core::FrameIndex;

/// Convenience result type used across scrollframe.
pub type ScrollframeResult<T> = Result<T, ScrollframeError>;

/// Top-level error taxonomy used by construction and IO paths.
///
/// Event handlers on the player never return these; the only runtime failure they know about
/// is [`FrameUnavailable`], which is logged and swallowed.
#[derive(thiserror::Error, Debug)]
pub enum ScrollframeError {
    /// Invalid user-provided options or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or decoding a frame asset.
    #[error("load error: {0}")]
    Load(String),

    /// Errors raised by a drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while reading or parsing configuration and replay scripts.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollframeError {
    /// Build a [`ScrollframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollframeError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`ScrollframeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ScrollframeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// A frame that cannot be painted: its load failed, timed out, or has not settled yet.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("frame {index} unavailable")]
pub struct FrameUnavailable {
    /// Requested frame.
    pub index: FrameIndex,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
