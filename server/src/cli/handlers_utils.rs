// server/src/cli/handlers_utils.rs
use std::path::Path;

use models::medical::EncodedImage;
use models::PatientRecord;

/// Reads an image file into the data-URI payload the core expects.
pub async fn load_image(path: &Path) -> Result<EncodedImage, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("could not read image {}: {}", path.display(), e))?;
    Ok(EncodedImage::from_bytes(mime_for(path), &bytes))
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Renders a profile the way the portal's profile screen lays it out.
pub fn render_profile(record: &PatientRecord) -> String {
    let mut lines = vec![
        format!("Patient ID: {}", record.id),
        format!("Name: {}", record.full_name()),
        format!("Age/Gender: {} / {}", record.age, record.gender),
        format!("Blood Group: {}", record.blood_group),
        format!("Address: {}", record.house_address),
        format!("Contact: {}", record.contact_number),
    ];
    if let Some(alt) = &record.alternative_contact {
        lines.push(format!("Alternative Contact: {}", alt));
    }
    lines.push(format!("Allergies: {}", join_or_none(&record.allergies)));
    let diseases: Vec<String> = record
        .diseases
        .iter()
        .map(|d| format!("{} ({})", d.name, d.status))
        .collect();
    lines.push(format!("Diseases: {}", join_or_none(&diseases)));
    lines.push(format!("Bill entries: {}", record.bill_payments.len()));
    lines.push(format!(
        "Last visit: {}",
        record
            .last_visit
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string())
    ));
    lines.push(format!(
        "Emergency contact: {} ({}) {}",
        record.emergency_contact_name,
        record.emergency_contact_relation,
        record.emergency_contact_phone
    ));
    lines.join("\n")
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
