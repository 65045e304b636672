use axum::extract::rejection::{JsonRejection, PathRejection};
use diesel_async::pooled_connection::PoolError;
use thiserror::Error;

use crate::config::error::ConfigError;
use crate::error::DatabaseErrorConverter;

/// Message returned to clients when a body or file cannot be read.
pub const IO_ERROR_MESSAGE: &str = "Error occurred while processing file";

/// A single violated field collected from request body validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

/// Application-wide error type that represents all possible errors in the system.
///
/// Services return these variants untouched; the HTTP boundary in
/// `api::middleware::error_handler` is the only place they become status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Identifier or unique key does not resolve to a stored record
    #[error("{entity} with {field}: {value} not found")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Unique key already taken by another record
    #[error("{entity} with {field}: {value} already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Request body violated one or more field rules
    #[error("Validation failed: {}", join_messages(.errors))]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Path parameter could not be decoded into its expected type
    #[error("{message}")]
    TypeMismatch { message: String },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Reading a request body or file failed
    #[error("I/O error")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

fn join_messages(errors: &[ValidationFieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// Builds a `NotFound` error for the given lookup key.
    pub fn not_found(entity: &str, field: &str, value: impl ToString) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Builds a `Duplicate` error for the given unique key.
    pub fn duplicate(entity: &str, field: &str, value: impl ToString) -> Self {
        AppError::Duplicate {
            entity: entity.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Human-readable message placed in the response body.
    ///
    /// Unclassified failures carry their raw message, including the source
    /// chain. I/O failures are replaced by a generic message.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Io { .. } => IO_ERROR_MESSAGE.to_string(),
            AppError::TypeMismatch { message } | AppError::BadRequest { message } => {
                message.clone()
            }
            AppError::Database { operation, source } => format!("{operation}: {source:#}"),
            AppError::Configuration { key, source } => {
                format!("Configuration error: {key}: {source:#}")
            }
            AppError::ConnectionPool { source } => format!("Connection pool error: {source:#}"),
            AppError::Internal { source } => format!("{source:#}"),
            other => other.to_string(),
        }
    }

    /// Every message of a validation failure, or the client message otherwise.
    pub fn messages(&self) -> Vec<String> {
        match self {
            AppError::ValidationErrors { errors } => {
                errors.iter().map(|e| e.message.clone()).collect()
            }
            other => vec![other.client_message()],
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<PoolError> for AppError {
    fn from(error: PoolError) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<bb8::RunError<PoolError>> for AppError {
    fn from(error: bb8::RunError<PoolError>) -> Self {
        match error {
            bb8::RunError::User(inner) => AppError::from(inner),
            bb8::RunError::TimedOut => AppError::ConnectionPool {
                source: anyhow::anyhow!("timed out waiting for a database connection"),
            },
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Configuration {
            key: error.key().to_string(),
            source: anyhow::Error::from(error),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::TypeMismatch {
            message: rejection.body_text(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// Flattens every field error, ordered by field name so responses are stable.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors: Vec<(String, Vec<validator::ValidationError>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs.clone()))
            .collect();
        field_errors.sort_by(|a, b| a.0.cmp(&b.0));

        let errors = field_errors
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.into_iter().map(move |err| ValidationFieldError {
                    field: field.clone(),
                    message: err
                        .message
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", field, err.code)),
                })
            })
            .collect();

        AppError::ValidationErrors { errors }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
