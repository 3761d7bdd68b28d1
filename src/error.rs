//! Crate-level error types.

use std::fmt;

/// Errors produced by the atrium crate.
///
/// Navigation itself never fails: rejected moves and malformed touch
/// input are ordinary branches. These variants cover the edges of the
/// system (configuration files, asset resolution, replay scripts).
#[derive(Debug)]
pub enum AtriumError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable configuration.
    InvalidConfig(String),
    /// A texture or artwork image could not be resolved.
    AssetLoad(String),
    /// Replay script could not be parsed.
    Replay(String),
}

impl fmt::Display for AtriumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            Self::AssetLoad(msg) => write!(f, "asset load error: {msg}"),
            Self::Replay(msg) => write!(f, "replay script error: {msg}"),
        }
    }
}

impl std::error::Error for AtriumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AtriumError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_includes_context() {
        let err = AtriumError::InvalidConfig("boundary table is empty".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: boundary table is empty"
        );
    }

    #[test]
    fn io_errors_expose_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AtriumError::from(io);
        assert!(err.source().is_some());
        assert!(AtriumError::Replay("bad".into()).source().is_none());
    }
}
