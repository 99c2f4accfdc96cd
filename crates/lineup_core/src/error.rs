use thiserror::Error;

/// Errors raised at the JSON boundary.
///
/// The placement engine itself is total; only request decoding and
/// response encoding can fail.
#[derive(Error, Debug)]
pub enum LineupError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },
}

impl LineupError {
    /// True when the request itself was malformed, as opposed to a failure
    /// while encoding the response.
    pub fn is_client_error(&self) -> bool {
        match self {
            LineupError::Json(err) => !err.is_io(),
            LineupError::UnsupportedSchemaVersion { .. } => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_message() {
        let err = LineupError::UnsupportedSchemaVersion { found: 3, expected: 1 };
        assert_eq!(err.to_string(), "Unsupported schema version: found 3, expected 1");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: LineupError = parse.unwrap_err().into();
        assert!(matches!(err, LineupError::Json(_)));
        assert!(err.is_client_error());
    }
}
