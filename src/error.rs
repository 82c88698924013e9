//! Error types and handling for the `tripweaver` application

use thiserror::Error;

/// Main error type for the `tripweaver` application
#[derive(Error, Debug)]
pub enum TripWeaverError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Place-name lookup errors
    #[error("Lookup failed: {message}")]
    Lookup { message: String },

    /// Itinerary generation errors
    #[error("Generation failed: {message}")]
    Generation { message: String },

    /// Routing service errors
    #[error("Routing error: {message}")]
    Routing { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripWeaverError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new lookup error
    pub fn lookup<S: Into<String>>(message: S) -> Self {
        Self::Lookup {
            message: message.into(),
        }
    }

    /// Create a new generation error
    pub fn generation<S: Into<String>>(message: S) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create a new routing error
    pub fn routing<S: Into<String>>(message: S) -> Self {
        Self::Routing {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripWeaverError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            TripWeaverError::Lookup { message } => {
                format!("Destination lookup failed: {message}")
            }
            TripWeaverError::Generation { .. } => {
                "Could not generate the itinerary. Please try again.".to_string()
            }
            TripWeaverError::Routing { .. } => {
                "Unable to reach the routing service. Please check your internet connection."
                    .to_string()
            }
            TripWeaverError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripWeaverError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripWeaverError::config("missing API key");
        assert!(matches!(config_err, TripWeaverError::Config { .. }));

        let lookup_err = TripWeaverError::lookup("no results");
        assert!(matches!(lookup_err, TripWeaverError::Lookup { .. }));

        let generation_err = TripWeaverError::generation("model unavailable");
        assert!(matches!(generation_err, TripWeaverError::Generation { .. }));

        let validation_err = TripWeaverError::validation("no destinations");
        assert!(matches!(validation_err, TripWeaverError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TripWeaverError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let lookup_err = TripWeaverError::lookup("No results for 'Atlantis'");
        assert!(lookup_err.user_message().contains("Atlantis"));

        let generation_err = TripWeaverError::generation("test");
        assert!(generation_err.user_message().contains("try again"));

        let validation_err = TripWeaverError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let trip_err: TripWeaverError = io_err.into();
        assert!(matches!(trip_err, TripWeaverError::Io { .. }));
    }
}
