//! Error types for the outfit_recommender library

use thiserror::Error;

/// Result type alias for outfit_recommender operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Error kinds surfaced by the recommendation engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Image could not be decoded, normalized or analyzed
    #[error("Failed to decode image: {message}")]
    DecodeFailure {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Not enough wardrobe items or categories to build an outfit
    #[error("Insufficient input: {reason}")]
    InsufficientInput { reason: String },

    /// A vocabulary tag did not match any known value
    #[error("Unknown {kind} tag: {value:?}")]
    UnknownTag { kind: &'static str, value: String },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl EngineError {
    /// Create a decode failure wrapping an underlying error
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DecodeFailure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a decode failure without an underlying cause
    pub fn decode_msg(message: impl Into<String>) -> Self {
        Self::DecodeFailure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an insufficient input error
    pub fn insufficient(reason: impl Into<String>) -> Self {
        Self::InsufficientInput {
            reason: reason.into(),
        }
    }

    /// Create a configuration error wrapping an underlying error
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration validation error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Check if the caller can recover by falling back to its own data
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::DecodeFailure { .. } | EngineError::InsufficientInput { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            EngineError::DecodeFailure { .. } => {
                "Could not analyze the image. Color and pattern were left unchanged.".to_string()
            }
            EngineError::InsufficientInput { .. } => {
                "You need at least 2 items in your wardrobe to generate outfit suggestions."
                    .to_string()
            }
            EngineError::UnknownTag { kind, value } => {
                format!("'{}' is not a recognised {}.", value, kind)
            }
            EngineError::Config { .. } => {
                "The engine configuration is invalid. Please check the settings file.".to_string()
            }
        }
    }
}
