// models/src/errors.rs
use std::io;
pub use thiserror::Error;
use serde::{Serialize, Deserialize};
use serde_json::Error as SerdeJsonError;

#[derive(Debug, Serialize, Deserialize, Error, Clone)]
pub enum PortalError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    StorageError(String), // General storage operation error
    #[error("Serialization error: {0}")]
    SerializationError(String), // Error during data serialization
    #[error("Deserialization error: {0}")]
    DeserializationError(String), // Error during data deserialization
    #[error("Database connection error: {0}")]
    ConnectionError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Entity already exists: {0}")]
    AlreadyExists(String),
    #[error("record with id {0} was not found")]
    NotFound(String),
    #[error("Invalid data provided: {0}")]
    InvalidData(String),
    #[error("version conflict on record {id}: expected {expected}, found {actual}")]
    VersionConflict { id: String, expected: u64, actual: u64 },
    #[error("Validation error: {0}")]
    Validation(ValidationError),
    #[error("An internal error occurred: {0}")]
    InternalError(String),
}

// Implement the From trait for &str
impl From<&str> for PortalError {
    fn from(error: &str) -> Self {
        PortalError::InvalidData(error.to_string())
    }
}

// Implement From for serde_json::Error
impl From<SerdeJsonError> for PortalError {
    fn from(err: SerdeJsonError) -> Self {
        PortalError::SerializationError(format!("JSON serialization error: {}", err))
    }
}

// Implement From for io::Error
impl From<io::Error> for PortalError {
    fn from(err: io::Error) -> Self {
        PortalError::Io(format!("IO error: {}", err))
    }
}

// Implement From for ValidationError
impl From<ValidationError> for PortalError {
    fn from(err: ValidationError) -> Self {
        PortalError::Validation(err)
    }
}

#[derive(Debug, Serialize, Deserialize, Error, PartialEq, Clone)]
pub enum ValidationError {
    #[error("a face reference image is required at enrollment")]
    MissingFaceImage,
    #[error("image payload is not a valid data URI: {0}")]
    InvalidImageEncoding(String),
    #[error("patient id '{0}' is invalid")]
    InvalidPatientId(String),
    #[error("password hashing failed")]
    PasswordHashingFailed,
    #[error("password verification failed")]
    PasswordVerificationFailed,
}

/// Errors surfaced at the authenticator boundary. These are structured
/// results: nothing past this boundary panics or leaks transport detail,
/// and every variant maps to a stable user-facing message.
#[derive(Debug, Serialize, Deserialize, Error, Clone, PartialEq)]
pub enum AuthError {
    #[error("record store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("no patient records exist")]
    EmptyStore,
    #[error("invalid patient id or password")]
    InvalidCredentials,
    #[error("claimed identity not found")]
    UnknownIdentity,
    #[error("face mismatch: {reason}")]
    FaceMismatch { reason: String, confidence: f64 },
    #[error("face oracle unavailable: {0}")]
    OracleUnavailable(String),
}

impl AuthError {
    /// The message shown to the end user. Unknown id and wrong password
    /// collapse into the same line, and an empty store is indistinguishable
    /// from bad credentials, so a caller cannot probe for account existence.
    /// A face mismatch surfaces the oracle's reason verbatim.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::StoreUnavailable(_) => {
                "Unable to connect to the record store. Please try again later.".to_string()
            }
            AuthError::EmptyStore | AuthError::InvalidCredentials => {
                "Invalid Patient ID or Password".to_string()
            }
            AuthError::UnknownIdentity => "Patient profile not found".to_string(),
            AuthError::FaceMismatch { reason, .. } => reason.clone(),
            AuthError::OracleUnavailable(_) => {
                "An error occurred during face verification. Please try again later.".to_string()
            }
        }
    }
}

/// A type alias for a `Result` that returns a `PortalError` on failure.
pub type PortalResult<T> = Result<T, PortalError>;

/// A type alias for a `Result` that returns an `AuthError` on failure.
pub type AuthResult<T> = Result<T, AuthError>;
