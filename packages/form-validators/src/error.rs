//! Error type returned by the uniqueness validator.
//!
//! Only [`UniqueError::Validation`] is meant for end users. The other variants
//! describe a misconfigured validator or a form that cannot be validated, and
//! should surface during development.

use sea_orm::DbErr;
use thiserror::Error;

/// Default failure message; passed through the form's translation hook.
pub const DEFAULT_MESSAGE: &str = "Already exists.";

#[derive(Debug, Error)]
pub enum UniqueError {
    /// The validator cannot reach a data store.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The column specification does not resolve to any column.
    #[error("invalid column specification: {0}")]
    InvalidSpec(String),

    /// The form does not expose what the validator needs.
    #[error("integration error: {0}")]
    Integration(String),

    /// Another record already holds the submitted value.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl UniqueError {
    pub fn configuration(detail: impl Into<String>) -> Self {
        Self::Configuration(detail.into())
    }
    pub fn invalid_spec(detail: impl Into<String>) -> Self {
        Self::InvalidSpec(detail.into())
    }
    pub fn integration(detail: impl Into<String>) -> Self {
        Self::Integration(detail.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for the user-facing duplicate-value failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The user-facing message, if this is a validation failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Validation { message, .. } => Some(message),
            _ => None,
        }
    }
}
