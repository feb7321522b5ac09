//! Platform Error Types

use thiserror::Error;

use crate::validation::FieldError;

#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("Validation failed")]
    Validation { details: Vec<FieldError> },

    #[error("Duplicate entry: {field}={value}")]
    Duplicate { field: String, value: String },

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl WaitlistError {
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self::Validation { details }
    }

    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, WaitlistError>;
