//! Error types for the engine and the catalog loader

use thiserror::Error;

/// Failure raised by an engine computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Non-finite or out-of-domain numeric argument
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Strategy or sector not present in the catalog
    #[error("not found: {0}")]
    NotFound(String),

    /// Statistics requested over zero records
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Failure raised while loading a catalog from disk
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid record in {file}: {reason}")]
    InvalidRecord { file: &'static str, reason: String },
}

impl CatalogError {
    pub(crate) fn invalid(file: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidRecord {
            file,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinities for a named argument
pub(crate) fn ensure_finite(name: &str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::InvalidInput(format!("{} must be finite, got {}", name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("principal", 10.5), Ok(10.5));
        assert!(matches!(
            ensure_finite("principal", f64::NAN),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            ensure_finite("principal", f64::NEG_INFINITY),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_record_message() {
        let err = CatalogError::invalid("sectors.csv", "unknown sector id: Gold");
        assert_eq!(err.to_string(), "invalid record in sectors.csv: unknown sector id: Gold");
    }
}
