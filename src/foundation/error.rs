/// Convenience result type used across roboface.
pub type RobofaceResult<T> = Result<T, RobofaceError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The animation core itself never fails: missing nodes are skipped and `update` returns `()`.
/// Errors only surface where untrusted input is parsed (expression names, colors, configs,
/// scripts) or where previews are written out.
#[derive(thiserror::Error, Debug)]
pub enum RobofaceError {
    /// Invalid user-provided configuration or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An expression name outside the closed expression set.
    #[error("unknown expression '{0}'")]
    UnknownExpression(String),

    /// Scene graph construction or lookup problems.
    #[error("scene error: {0}")]
    Scene(String),

    /// Errors while rasterizing or writing previews.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RobofaceError {
    /// Build a [`RobofaceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RobofaceError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`RobofaceError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RobofaceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RobofaceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
