// models/src/medical/billing.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of a patient's billing history.
///
/// `diagnosis` and `payment_method` are optional at the serde layer: old-
/// format documents predate both fields and must still deserialize. The
/// defaulting normalizer treats their absence on the first entry as a
/// structurally incomplete history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillPayment {
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub status: PaymentStatus,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub tablets: Vec<Tablet>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

impl BillPayment {
    /// An entry missing either post-hoc field is treated as old-format.
    pub fn is_structurally_complete(&self) -> bool {
        self.diagnosis.is_some() && self.payment_method.is_some()
    }
}

/// A prescribed tablet and its usage directions, attached to a bill entry.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tablet {
    pub name: String,
    pub usage: String,
}

impl Tablet {
    pub fn new(name: &str, usage: &str) -> Self {
        Self {
            name: name.to_string(),
            usage: usage.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// Payment channels accepted by the billing desk. Serialized with the
/// display names the stored documents already use.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Insurance Claim")]
    InsuranceClaim,
    Cash,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Upi => write!(f, "UPI"),
            PaymentMethod::DebitCard => write!(f, "Debit Card"),
            PaymentMethod::InsuranceClaim => write!(f, "Insurance Claim"),
            PaymentMethod::Cash => write!(f, "Cash"),
        }
    }
}
