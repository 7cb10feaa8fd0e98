// models/src/medical/disease.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named condition on a patient's history, with its treatment status.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    #[serde(default)]
    pub status: DiseaseStatus,
}

impl Disease {
    pub fn new(name: &str, status: DiseaseStatus) -> Self {
        Self {
            name: name.to_string(),
            status,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum DiseaseStatus {
    Ongoing,
    Cured,
    #[default]
    Unknown,
}

impl fmt::Display for DiseaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiseaseStatus::Ongoing => write!(f, "Ongoing"),
            DiseaseStatus::Cured => write!(f, "Cured"),
            DiseaseStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Disease, DiseaseStatus};

    #[test]
    fn should_default_missing_status_to_unknown() {
        let disease: Disease = serde_json::from_str(r#"{"name": "Asthma"}"#).unwrap();
        assert_eq!(disease.status, DiseaseStatus::Unknown);
    }
}
