// lib/src/records/normalize.rs
//! Defaulting normalizer for patient records.
//!
//! Backfills the demo fields a sparse record lacks: sample diseases, a
//! sample billing history, and a first-visit timestamp. Runs at record
//! creation and inside the explicit seed tooling; the read path never
//! applies it, so loading records cannot silently rewrite stored data.
use chrono::{DateTime, TimeZone, Utc};
use log::warn;
use models::{BillPayment, Disease, DiseaseStatus, PatientRecord, PaymentMethod, PaymentStatus, Tablet};

/// Applies the defaulting rules to one record. Pure in `now`; idempotent
/// after the first application.
pub fn normalize_record(mut record: PatientRecord, now: DateTime<Utc>) -> PatientRecord {
    if record.diseases.is_empty() {
        record.diseases = sample_diseases();
    }

    // A first bill entry missing diagnosis or payment method marks the
    // whole list as old-format, and the entire history is replaced with
    // samples. Preserved quirk: real entries after the first are lost too.
    let bills_incomplete = record
        .bill_payments
        .first()
        .map(|bill| !bill.is_structurally_complete())
        .unwrap_or(true);
    if bills_incomplete {
        if !record.bill_payments.is_empty() {
            warn!(
                "[NORMALIZE] Replacing {} old-format bill entries for {} with samples",
                record.bill_payments.len(),
                record.id
            );
        }
        record.bill_payments = sample_bill_payments();
    }

    if record.last_visit.is_none() {
        record.last_visit = Some(now);
    }

    record
}

/// Applies the defaulting rules across a collection.
pub fn normalize(records: Vec<PatientRecord>, now: DateTime<Utc>) -> Vec<PatientRecord> {
    records
        .into_iter()
        .map(|record| normalize_record(record, now))
        .collect()
}

pub fn sample_diseases() -> Vec<Disease> {
    vec![
        Disease::new("Common Cold", DiseaseStatus::Cured),
        Disease::new("Asthma", DiseaseStatus::Ongoing),
    ]
}

pub fn sample_bill_payments() -> Vec<BillPayment> {
    vec![
        BillPayment {
            date: Utc.with_ymd_and_hms(2023, 11, 15, 0, 0, 0).unwrap(),
            amount: 1500.0,
            status: PaymentStatus::Paid,
            diagnosis: Some("Viral Fever".to_string()),
            tablets: vec![
                Tablet::new("Paracetamol", "1 tablet twice a day"),
                Tablet::new("Azithromycin", "1 tablet once a day"),
            ],
            payment_method: Some(PaymentMethod::Upi),
        },
        BillPayment {
            date: Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
            amount: 250.0,
            status: PaymentStatus::Paid,
            diagnosis: Some("Follow-up Consultation".to_string()),
            tablets: Vec::new(),
            payment_method: Some(PaymentMethod::Cash),
        },
        BillPayment {
            date: Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap(),
            amount: 800.0,
            status: PaymentStatus::Paid,
            diagnosis: Some("Allergic Rhinitis".to_string()),
            tablets: vec![Tablet::new("Cetirizine", "1 tablet at night")],
            payment_method: Some(PaymentMethod::DebitCard),
        },
        BillPayment {
            date: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            amount: 1200.0,
            status: PaymentStatus::Pending,
            diagnosis: Some("Sinusitis".to_string()),
            tablets: vec![
                Tablet::new("Amoxicillin", "1 tablet three times a day"),
                Tablet::new("Ibuprofen", "As needed for pain"),
            ],
            payment_method: Some(PaymentMethod::InsuranceClaim),
        },
    ]
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use models::medical::EncodedImage;
    use models::{NewPatient, PatientRecord, PaymentStatus};

    use super::{normalize_record, sample_bill_payments, sample_diseases};

    fn sparse_record() -> PatientRecord {
        PatientRecord::from_new(
            NewPatient {
                id: "PAT001".to_string(),
                password: "abc123".to_string(),
                first_name: "Asha".to_string(),
                last_name: "Rao".to_string(),
                face_image: Some(EncodedImage::from_bytes("image/png", b"face")),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn should_backfill_sparse_record() {
        let now = Utc::now();
        let normalized = normalize_record(sparse_record(), now);
        assert_eq!(normalized.diseases, sample_diseases());
        assert_eq!(normalized.bill_payments.len(), 4);
        assert_eq!(normalized.last_visit, Some(now));
    }

    #[test]
    fn should_be_idempotent() {
        let now = Utc::now();
        let once = normalize_record(sparse_record(), now);
        let twice = normalize_record(once.clone(), now);
        assert_eq!(once, twice);
    }

    #[test]
    fn should_keep_existing_diseases() {
        let mut record = sparse_record();
        record.diseases = vec![models::Disease::new(
            "Hypertension",
            models::DiseaseStatus::Ongoing,
        )];
        let normalized = normalize_record(record, Utc::now());
        assert_eq!(normalized.diseases.len(), 1);
        assert_eq!(normalized.diseases[0].name, "Hypertension");
    }

    #[test]
    fn should_keep_structurally_complete_bills() {
        let mut record = sparse_record();
        record.bill_payments = sample_bill_payments();
        record.bill_payments.truncate(1);
        let normalized = normalize_record(record, Utc::now());
        assert_eq!(normalized.bill_payments.len(), 1);
        assert_eq!(
            normalized.bill_payments[0].diagnosis.as_deref(),
            Some("Viral Fever")
        );
    }

    #[test]
    fn should_replace_old_format_bill_history_wholesale() {
        // The preserved quirk: one old-format entry at the head throws away
        // the entire list, complete entries included.
        let mut record = sparse_record();
        let mut old_format = sample_bill_payments();
        old_format[0].diagnosis = None;
        record.bill_payments = old_format;

        let normalized = normalize_record(record, Utc::now());
        assert_eq!(normalized.bill_payments, sample_bill_payments());
    }

    #[test]
    fn should_keep_existing_last_visit() {
        let now = Utc::now();
        let mut record = sparse_record();
        let earlier = now - chrono::Duration::days(30);
        record.last_visit = Some(earlier);
        let normalized = normalize_record(record, now);
        assert_eq!(normalized.last_visit, Some(earlier));
    }

    #[test]
    fn should_seed_expected_sample_shape() {
        let bills = sample_bill_payments();
        assert_eq!(bills.len(), 4);
        assert!(bills.iter().all(|b| b.is_structurally_complete()));
        assert_eq!(bills[3].status, PaymentStatus::Pending);
    }
}
