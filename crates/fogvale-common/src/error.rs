//! Error types for Fogvale.

use thiserror::Error;

/// Top-level error type for Fogvale operations.
///
/// The game logic itself is made of total functions (collision tests,
/// per-frame updates), so the error surface is limited to the edges:
/// configuration and asset bookkeeping.
#[derive(Debug, Error)]
pub enum FogvaleError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Asset manifest errors
    #[error("Asset error: {0}")]
    Asset(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`FogvaleError`].
pub type FogvaleResult<T> = Result<T, FogvaleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FogvaleError::Asset("missing texture entry".to_string());
        assert_eq!(err.to_string(), "Asset error: missing texture entry");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FogvaleError = io.into();
        assert!(matches!(err, FogvaleError::Io(_)));
    }
}
