// models/src/medical/patient.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::medical::{BillPayment, Disease, EncodedImage};
use crate::password::PasswordHash;

/// The persisted patient aggregate. One document per patient, keyed by the
/// human-assigned id (`PAT###` style). Lookups against `id` are
/// case-insensitive on the credential path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    // Primary identifier
    pub id: String,
    pub password: PasswordHash,

    // Demographics
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub house_address: String,
    pub blood_group: String,
    pub age: String,
    pub gender: String,

    // Contact Information
    pub contact_number: String,
    pub alternative_contact: Option<String>,

    // Clinical history
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub diseases: Vec<Disease>,
    #[serde(default)]
    pub bill_payments: Vec<BillPayment>,
    #[serde(default)]
    pub previous_treatments: Vec<String>,

    // Emergency Contact
    pub emergency_contact_name: String,
    pub emergency_contact_relation: String,
    pub emergency_contact_phone: String,

    // Biometric enrollment
    pub face_image: EncodedImage,
    pub signature_image: Option<EncodedImage>,

    // Audit Trail
    pub last_visit: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // Write version for compare-and-swap upserts. Not part of the profile.
    #[serde(default)]
    pub version: u64,
}

impl PatientRecord {
    /// Builds a record from enrollment input: the face image is mandatory,
    /// the password is hashed, timestamps are stamped. Demo-data seeding is
    /// the directory's concern, not the constructor's.
    pub fn from_new(new: NewPatient, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        if new.id.trim().is_empty() {
            return Err(ValidationError::InvalidPatientId(new.id));
        }
        let face_image = match new.face_image {
            Some(image) if !image.is_empty() => image,
            _ => return Err(ValidationError::MissingFaceImage),
        };
        Ok(Self {
            id: new.id,
            password: PasswordHash::derive(&new.password)?,
            first_name: new.first_name,
            middle_name: new.middle_name,
            last_name: new.last_name,
            house_address: new.house_address,
            blood_group: new.blood_group,
            age: new.age,
            gender: new.gender,
            contact_number: new.contact_number,
            alternative_contact: new.alternative_contact,
            allergies: new.allergies,
            diseases: new.diseases,
            bill_payments: Vec::new(),
            previous_treatments: Vec::new(),
            emergency_contact_name: new.emergency_contact_name,
            emergency_contact_relation: new.emergency_contact_relation,
            emergency_contact_phone: new.emergency_contact_phone,
            face_image,
            signature_image: new.signature_image,
            last_visit: None,
            notes: String::new(),
            created_at: now,
            updated_at: now,
            version: 0,
        })
    }

    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// A copy of this record with `last_visit` refreshed. The visit
    /// timestamp moves only on successful authentication.
    pub fn with_visit_at(&self, now: DateTime<Utc>) -> Self {
        let mut updated = self.clone();
        updated.last_visit = Some(now);
        updated.updated_at = now;
        updated
    }

    pub fn apply_contact_info(&mut self, update: ContactInfoUpdate, now: DateTime<Utc>) {
        self.house_address = update.house_address;
        self.contact_number = update.contact_number;
        self.alternative_contact = update.alternative_contact;
        self.updated_at = now;
    }

    pub fn apply_emergency_contact(&mut self, update: EmergencyContactUpdate, now: DateTime<Utc>) {
        self.emergency_contact_name = update.name;
        self.emergency_contact_relation = update.relation;
        self.emergency_contact_phone = update.phone;
        self.updated_at = now;
    }
}

/// Enrollment input supplied by the presentation layer. Carries the
/// plaintext password exactly once; it is hashed before anything persists.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewPatient {
    pub id: String,
    pub password: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub house_address: String,
    pub blood_group: String,
    pub age: String,
    pub gender: String,
    pub contact_number: String,
    pub alternative_contact: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub diseases: Vec<Disease>,
    pub emergency_contact_name: String,
    pub emergency_contact_relation: String,
    pub emergency_contact_phone: String,
    pub face_image: Option<EncodedImage>,
    pub signature_image: Option<EncodedImage>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContactInfoUpdate {
    pub house_address: String,
    pub contact_number: String,
    pub alternative_contact: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EmergencyContactUpdate {
    pub name: String,
    pub relation: String,
    pub phone: String,
}
