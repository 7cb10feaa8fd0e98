// server/src/cli/handlers_patient.rs
use std::sync::Arc;

use lib::commands::PatientCommand;
use lib::records::{generate_password, generate_patient_id, PatientDirectory};
use lib::storage_engine::RecordStore;
use logging_service::AuditLog;
use models::{Disease, DiseaseStatus, NewPatient};

use crate::cli::handlers_utils::{load_image, render_profile};

pub async fn handle_patient_command(
    action: PatientCommand,
    store: Arc<dyn RecordStore>,
    audit: &AuditLog,
) -> String {
    let directory = PatientDirectory::new(store);

    match action {
        PatientCommand::Create {
            id,
            password,
            first_name,
            middle_name,
            last_name,
            house_address,
            blood_group,
            age,
            gender,
            contact_number,
            alternative_contact,
            allergies,
            existing_diseases,
            emergency_contact_name,
            emergency_contact_relation,
            emergency_contact_phone,
            face_image,
            signature_image,
        } => {
            let id = id.unwrap_or_else(generate_patient_id);
            let password = password.unwrap_or_else(generate_password);

            let face_image = match load_image(&face_image).await {
                Ok(image) => Some(image),
                Err(e) => return format!("Error: {}", e),
            };
            let signature_image = match signature_image {
                Some(path) => match load_image(&path).await {
                    Ok(image) => Some(image),
                    Err(e) => return format!("Error: {}", e),
                },
                None => None,
            };

            let diseases = existing_diseases
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(|name| Disease::new(name, DiseaseStatus::Ongoing))
                .collect();

            let new_patient = NewPatient {
                id,
                password: password.clone(),
                first_name,
                middle_name,
                last_name,
                house_address,
                blood_group,
                age,
                gender,
                contact_number,
                alternative_contact,
                allergies,
                diseases,
                emergency_contact_name,
                emergency_contact_relation,
                emergency_contact_phone,
                face_image,
                signature_image,
            };

            match directory.create_patient(new_patient).await {
                Ok(record) => {
                    audit.record_created(&record.id);
                    // The generated password is shown exactly once, here.
                    format!(
                        "Account created.\nPatient ID: {}\nPassword: {}",
                        record.id, password
                    )
                }
                Err(e) => format!("Error: {}", e),
            }
        }
        PatientCommand::View { id } => match directory.get_by_id(&id).await {
            Ok(Some(record)) => render_profile(&record),
            Ok(None) => "Patient profile not found".to_string(),
            Err(e) => format!("Error: {}", e),
        },
        PatientCommand::List => match directory.list_all().await {
            Ok(records) => {
                if records.is_empty() {
                    "No patient records found".to_string()
                } else {
                    records
                        .iter()
                        .map(|r| format!("{}  {}", r.id, r.full_name()))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Err(e) => format!("Error: {}", e),
        },
        PatientCommand::UpdateContact {
            id,
            house_address,
            contact_number,
            alternative_contact,
        } => {
            let update = models::ContactInfoUpdate {
                house_address,
                contact_number,
                alternative_contact,
            };
            match directory.update_contact_info(&id, update).await {
                Ok(record) => {
                    audit.profile_updated(&record.id, "contact_info");
                    format!("Contact info updated for {}", record.id)
                }
                Err(e) => format!("Error: {}", e),
            }
        }
        PatientCommand::UpdateEmergency {
            id,
            name,
            relation,
            phone,
        } => {
            let update = models::EmergencyContactUpdate {
                name,
                relation,
                phone,
            };
            match directory.update_emergency_contact(&id, update).await {
                Ok(record) => {
                    audit.profile_updated(&record.id, "emergency_contact");
                    format!("Emergency contact updated for {}", record.id)
                }
                Err(e) => format!("Error: {}", e),
            }
        }
        PatientCommand::Seed => match directory.seed_demo_records().await {
            Ok(count) => {
                audit.seed_completed(count);
                format!("Seeded demo fields across {} records", count)
            }
            Err(e) => format!("Error: {}", e),
        },
    }
}
