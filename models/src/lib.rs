// models/src/lib.rs

// Declare all top-level modules within the 'models' crate
pub mod errors;
pub mod password;

// Declare the 'medical' sub-module
pub mod medical;

// Re-export common core types for convenience when other crates use 'models::*'
pub use errors::{AuthError, AuthResult, PortalError, PortalResult, ValidationError};
pub use medical::{
    BillPayment, ContactInfoUpdate, Disease, DiseaseStatus, EmergencyContactUpdate,
    EncodedImage, NewPatient, PatientRecord, PaymentMethod, PaymentStatus, Tablet,
};
pub use password::PasswordHash;
