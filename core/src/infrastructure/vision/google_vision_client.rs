use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{VisionConfig, entities::app_errors::CoreError},
    identification::ports::LabelDetector,
};

/// Label detection backed by the Google Cloud Vision `images:annotate` API.
#[derive(Debug, Clone)]
pub struct GoogleVisionClient {
    api_key: Option<String>,
    endpoint: String,
    max_labels: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest {
    image: Image,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct Image {
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    kind: String,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    label_annotations: Vec<LabelAnnotation>,
    error: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct LabelAnnotation {
    description: String,
    #[serde(default)]
    score: f32,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(default)]
    message: String,
}

impl GoogleVisionClient {
    pub fn new(config: &VisionConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                CoreError::InvalidConfiguration(format!("failed to build vision client: {}", e))
            })?;

        Ok(Self {
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            max_labels: config.max_labels,
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn call_vision_api(&self, request: AnnotateRequest) -> Result<Vec<String>, CoreError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CoreError::ExternalServiceError("Vision API key is not configured".to_string())
        })?;

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::error!("Vision API request timed out: {}", e);
                } else {
                    tracing::error!("Vision API request failed: {}", e);
                }
                CoreError::ExternalServiceError(format!("Vision API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Vision API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Vision API returned error: {}",
                status
            )));
        }

        let annotate_response: AnnotateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Vision response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse Vision response: {}", e))
        })?;

        labels_from_response(annotate_response)
    }
}

/// Labels of the first image response, highest score first.
fn labels_from_response(response: AnnotateResponse) -> Result<Vec<String>, CoreError> {
    let Some(image_response) = response.responses.into_iter().next() else {
        return Ok(Vec::new());
    };

    if let Some(status) = image_response.error {
        tracing::error!("Vision API rejected image: {}", status.message);
        return Err(CoreError::ExternalServiceError(format!(
            "Vision API rejected image: {}",
            status.message
        )));
    }

    let mut annotations = image_response.label_annotations;
    annotations.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(annotations.into_iter().map(|a| a.description).collect())
}

impl LabelDetector for GoogleVisionClient {
    async fn detect_labels(&self, image_data: Vec<u8>) -> Result<Vec<String>, CoreError> {
        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: Image {
                    content: general_purpose::STANDARD.encode(&image_data),
                },
                features: vec![Feature {
                    kind: "LABEL_DETECTION".to_string(),
                    max_results: self.max_labels,
                }],
            }],
        };

        self.call_vision_api(request).await
    }
}
