// lib/src/face_oracle/mod.rs
//! Client side of the remote face-similarity model.
//!
//! The model is an opaque oracle: two images in, a same-person verdict,
//! confidence score, and explanation out. Nothing here applies policy to
//! the verdict; the confidence floor lives with the face authenticator.

pub mod http_oracle;

use async_trait::async_trait;
use models::medical::EncodedImage;
use models::PortalResult;
use serde::{Deserialize, Serialize};

pub use http_oracle::HttpFaceOracle;

/// The oracle's structured verdict, exactly as the remote model reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceVerdict {
    #[serde(rename = "isSamePerson")]
    pub is_same_person: bool,
    /// Score in [0, 1]; 1 means certain same person.
    pub confidence: f64,
    /// The model's explanation for its decision.
    pub reason: String,
}

#[async_trait]
pub trait FaceOracle: Send + Sync {
    /// Compares a stored reference image against a live capture.
    async fn compare(
        &self,
        reference: &EncodedImage,
        live: &EncodedImage,
    ) -> PortalResult<FaceVerdict>;
}
