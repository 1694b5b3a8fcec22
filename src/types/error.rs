use thiserror::Error;

/// zkill-isk error types
#[derive(Error, Debug)]
pub enum ZkillError {
    /// Transport failure (connect, timeout, TLS)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("unexpected status: {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// Input token is not a decimal character ID
    #[error("invalid character ID: {0:?}")]
    InvalidCharacterId(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for zkill-isk
pub type Result<T> = std::result::Result<T, ZkillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ZkillError::Parse("expected array".into());
        assert_eq!(err.to_string(), "parse error: expected array");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ZkillError::Status(429).to_string(), "unexpected status: 429");
    }

    #[test]
    fn test_invalid_character_id_quotes_token() {
        let err = ZkillError::InvalidCharacterId("abc".into());
        assert_eq!(err.to_string(), "invalid character ID: \"abc\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ZkillError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }
}
