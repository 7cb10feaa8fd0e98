// lib/src/commands.rs
//! Command definitions shared between the core and the CLI front end.
use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum PatientCommand {
    /// Enroll a new patient. Id and password are generated when omitted.
    Create {
        #[clap(long)] id: Option<String>,
        #[clap(long)] password: Option<String>,
        #[clap(long)] first_name: String,
        #[clap(long)] middle_name: Option<String>,
        #[clap(long)] last_name: String,
        #[clap(long, default_value = "")] house_address: String,
        #[clap(long, default_value = "")] blood_group: String,
        #[clap(long, default_value = "")] age: String,
        #[clap(long, default_value = "")] gender: String,
        #[clap(long, default_value = "")] contact_number: String,
        #[clap(long)] alternative_contact: Option<String>,
        #[clap(long, value_delimiter = ',')] allergies: Vec<String>,
        #[clap(long, value_delimiter = ',')] existing_diseases: Vec<String>,
        #[clap(long, default_value = "")] emergency_contact_name: String,
        #[clap(long, default_value = "")] emergency_contact_relation: String,
        #[clap(long, default_value = "")] emergency_contact_phone: String,
        /// Path to the enrollment face photo (mandatory).
        #[clap(long)] face_image: PathBuf,
        /// Path to an optional signature image.
        #[clap(long)] signature_image: Option<PathBuf>,
    },
    /// Show one patient profile by exact id.
    View {
        #[clap(long)] id: String,
    },
    /// List every enrolled patient.
    List,
    /// Update contact details on a profile.
    UpdateContact {
        #[clap(long)] id: String,
        #[clap(long)] house_address: String,
        #[clap(long)] contact_number: String,
        #[clap(long)] alternative_contact: Option<String>,
    },
    /// Update the emergency contact on a profile.
    UpdateEmergency {
        #[clap(long)] id: String,
        #[clap(long)] name: String,
        #[clap(long)] relation: String,
        #[clap(long)] phone: String,
    },
    /// Backfill demo fields across all stored records.
    Seed,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum AuthCommand {
    /// Password login.
    Login {
        #[clap(long)] id: String,
        #[clap(long)] password: String,
    },
    /// Face login with a captured frame read from disk.
    FaceLogin {
        #[clap(long)] id: String,
        #[clap(long)] image: PathBuf,
    },
    /// Check credentials without recording a visit.
    Validate {
        #[clap(long)] id: String,
        #[clap(long)] password: String,
    },
}
