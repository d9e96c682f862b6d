use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read question catalog '{path}': {source}")]
    CatalogError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl InventoryError {
    /// Errors caused by the caller's payload rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            InventoryError::MalformedRequest { .. } | InventoryError::ValidationError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        let malformed = InventoryError::MalformedRequest {
            message: "EOF while parsing".to_string(),
        };
        let invalid = InventoryError::ValidationError {
            message: "value out of range".to_string(),
        };
        let config = InventoryError::ConfigError {
            message: "bad port".to_string(),
        };

        assert!(malformed.is_client_error());
        assert!(invalid.is_client_error());
        assert!(!config.is_client_error());
    }

    #[test]
    fn test_catalog_error_message_names_path() {
        let err = InventoryError::CatalogError {
            path: "questions.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("questions.txt"));
    }
}
