// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations
//!
//! Validation failures are ordinary outcomes in this crate: callers turn a
//! [`ValidationError`] into a console message and a `false`/early return.
//! [`DomainError`] covers configuration, I/O and serialization failures, which
//! the binaries propagate.

use thiserror::Error;

/// Why a user or address value was rejected
///
/// The display text is the message printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace only
    #[error("El nombre es requerido.")]
    EmptyName,

    /// Email is empty or has no `@`
    #[error("El formato de email es inválido.")]
    InvalidEmail,

    /// Street is empty once trimmed
    #[error("La calle no puede estar vacía.")]
    EmptyStreet,

    /// Zip code is shorter than the accepted minimum
    #[error("El código postal debe tener al menos {min} caracteres (tiene {actual}).")]
    ZipCodeTooShort {
        /// Minimum accepted length
        min: usize,
        /// Length that was supplied
        actual: usize,
    },
}

impl ValidationError {
    /// Short field name used in structured logs
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "name",
            ValidationError::InvalidEmail => "email",
            ValidationError::EmptyStreet => "street",
            ValidationError::ZipCodeTooShort { .. } => "zip_code",
        }
    }

    /// Field name as it appears in console messages
    pub fn field_label(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "nombre",
            ValidationError::InvalidEmail => "email",
            ValidationError::EmptyStreet => "calle",
            ValidationError::ZipCodeTooShort { .. } => "código postal",
        }
    }
}

/// Errors that can occur outside of plain validation
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reading a file failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}
