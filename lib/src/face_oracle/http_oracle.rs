// lib/src/face_oracle/http_oracle.rs
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use models::medical::EncodedImage;
use models::{PortalError, PortalResult};
use serde::Serialize;

use crate::config::OracleConfig;
use crate::face_oracle::{FaceOracle, FaceVerdict};

/// Request body of the hosted verification model. Images travel as
/// self-describing data URIs.
#[derive(Serialize)]
struct VerifyFaceRequest<'a> {
    #[serde(rename = "faceImage1DataUri")]
    face_image_1_data_uri: &'a str,
    #[serde(rename = "faceImage2DataUri")]
    face_image_2_data_uri: &'a str,
}

pub struct HttpFaceOracle {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFaceOracle {
    /// Builds the client. No timeout is set unless configured, so a hung
    /// model call hangs the login attempt that issued it.
    pub fn new(config: &OracleConfig) -> PortalResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| PortalError::NetworkError(format!("oracle client build failed: {}", e)))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl FaceOracle for HttpFaceOracle {
    async fn compare(
        &self,
        reference: &EncodedImage,
        live: &EncodedImage,
    ) -> PortalResult<FaceVerdict> {
        let reference_uri = reference.to_data_uri();
        let live_uri = live.to_data_uri();
        let request = VerifyFaceRequest {
            face_image_1_data_uri: &reference_uri,
            face_image_2_data_uri: &live_uri,
        };
        debug!("[ORACLE] Submitting face comparison to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| PortalError::NetworkError(format!("oracle request failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(PortalError::NetworkError(format!(
                "oracle returned status {}",
                response.status()
            )));
        }
        let verdict = response.json::<FaceVerdict>().await.map_err(|e| {
            PortalError::DeserializationError(format!("oracle verdict decode failed: {}", e))
        })?;
        debug!(
            "[ORACLE] Verdict: same_person={} confidence={:.2}",
            verdict.is_same_person, verdict.confidence
        );
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use crate::face_oracle::FaceVerdict;

    #[test]
    fn should_decode_model_verdict_wire_format() {
        let verdict: FaceVerdict = serde_json::from_str(
            r#"{"isSamePerson": true, "confidence": 0.95, "reason": "match"}"#,
        )
        .unwrap();
        assert!(verdict.is_same_person);
        assert_eq!(verdict.confidence, 0.95);
        assert_eq!(verdict.reason, "match");
    }
}
