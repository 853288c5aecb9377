use thiserror::Error;

/// Top-level error type for the desk system.
///
/// Member crates define their own error types and wrap this one with
/// `#[from]` so the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for DeskError {
    fn from(err: toml::de::Error) -> Self {
        DeskError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DeskError {
    fn from(err: toml::ser::Error) -> Self {
        DeskError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        DeskError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for desk operations.
pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeskError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = DeskError::Storage("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Storage error: lock poisoned");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let desk_err: DeskError = io_err.into();
        assert!(matches!(desk_err, DeskError::Io(_)));
        assert!(desk_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let desk_err: DeskError = parse_err.into();
        assert!(matches!(desk_err, DeskError::Config(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let desk_err: DeskError = json_err.into();
        assert!(matches!(desk_err, DeskError::Serialization(_)));
    }

    #[test]
    fn test_errors_implement_debug() {
        let err = DeskError::Storage("test".to_string());
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("Storage"));
    }
}
