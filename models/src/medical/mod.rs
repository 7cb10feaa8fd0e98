// models/src/medical/mod.rs

pub mod billing;
pub mod disease;
pub mod image;
pub mod patient;

pub use billing::{BillPayment, PaymentMethod, PaymentStatus, Tablet};
pub use disease::{Disease, DiseaseStatus};
pub use image::EncodedImage;
pub use patient::{ContactInfoUpdate, EmergencyContactUpdate, NewPatient, PatientRecord};
