use cm_auth::AuthError;
use cm_config::ConfigError;
use cm_views::{FormError, error_message};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{message} ({source})")]
    Auth {
        message: &'static str,
        #[source]
        source: AuthError,
    },

    #[error("Invalid login form: {}", describe(.errors))]
    InvalidForm { errors: Vec<FormError> },

    #[error("Unknown role '{value}' {location}")]
    UnknownRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Access denied: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON serialization error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn unknown_role(value: impl Into<String>) -> Self {
        CliError::UnknownRole {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        CliError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for CliError {
    fn from(source: AuthError) -> Self {
        CliError::Auth {
            message: error_message(&source),
            source,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

fn describe(errors: &[FormError]) -> String {
    errors
        .iter()
        .map(FormError::message)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, CliError>;
