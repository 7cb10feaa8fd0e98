// lib/src/records/mod.rs

pub mod normalize;
pub mod patient_directory;

pub use normalize::{normalize, normalize_record, sample_bill_payments, sample_diseases};
pub use patient_directory::{generate_password, generate_patient_id, PatientDirectory};
