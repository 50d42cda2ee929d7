use cm_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Account not found: {account} {location}")]
    AccountNotFound {
        account: String,
        location: ErrorLocation,
    },

    #[error("Account is inactive: {account} {location}")]
    InactiveAccount {
        account: String,
        location: ErrorLocation,
    },

    #[error("Too many failed sign-in attempts {location}")]
    TooManyAttempts { location: ErrorLocation },

    #[error("Email already in use: {email} {location}")]
    EmailAlreadyInUse {
        email: String,
        location: ErrorLocation,
    },

    #[error("Weak password: {message} {location}")]
    WeakPassword {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider error: {message} (code: {code}) {location}")]
    Provider {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Document store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user record: {source} {location}")]
    InvalidRecord {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Map an identity-provider error code onto the local taxonomy.
    ///
    /// Unrecognised codes become [`AuthError::Provider`] and keep the code.
    #[track_caller]
    pub fn from_provider_code(code: &str, message: impl Into<String>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = message.into();

        match code {
            "auth/invalid-credential" | "auth/wrong-password" | "auth/invalid-email" => {
                Self::InvalidCredentials { location }
            }
            "auth/user-not-found" => Self::AccountNotFound {
                account: message,
                location,
            },
            "auth/user-disabled" => Self::InactiveAccount {
                account: message,
                location,
            },
            "auth/too-many-requests" => Self::TooManyAttempts { location },
            "auth/email-already-in-use" => Self::EmailAlreadyInUse {
                email: message,
                location,
            },
            "auth/weak-password" => Self::WeakPassword { message, location },
            _ => Self::Provider {
                code: code.to_string(),
                message,
                location,
            },
        }
    }

    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::AccountNotFound { .. } => "ACCOUNT_NOT_FOUND",
            Self::InactiveAccount { .. } => "INACTIVE_ACCOUNT",
            Self::TooManyAttempts { .. } => "TOO_MANY_ATTEMPTS",
            Self::EmailAlreadyInUse { .. } => "EMAIL_ALREADY_IN_USE",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::Store { .. } => "STORE_ERROR",
            Self::InvalidRecord { .. } => "INVALID_RECORD",
        }
    }

    /// Creates InvalidCredentials error at caller location.
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AccountNotFound error at caller location.
    #[track_caller]
    pub fn account_not_found(account: impl Into<String>) -> Self {
        Self::AccountNotFound {
            account: account.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InactiveAccount error at caller location.
    #[track_caller]
    pub fn inactive_account(account: impl Into<String>) -> Self {
        Self::InactiveAccount {
            account: account.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates TooManyAttempts error at caller location.
    #[track_caller]
    pub fn too_many_attempts() -> Self {
        Self::TooManyAttempts {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates EmailAlreadyInUse error at caller location.
    #[track_caller]
    pub fn email_already_in_use(email: impl Into<String>) -> Self {
        Self::EmailAlreadyInUse {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates WeakPassword error at caller location.
    #[track_caller]
    pub fn weak_password(message: impl Into<String>) -> Self {
        Self::WeakPassword {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Provider error at caller location.
    #[track_caller]
    pub fn provider(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Store error at caller location.
    #[track_caller]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::InvalidRecord {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
