use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use business::domain::receipt::errors::VisionError;
use business::domain::receipt::model::EncodedImage;
use business::domain::receipt::services::VisionExtractionService;

use crate::client::GeminiClient;

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

pub struct GeminiVisionExtractor {
    client: GeminiClient,
}

impl GeminiVisionExtractor {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_request_body(image: &EncodedImage, instruction: &str) -> Value {
        json!({
            "contents": [
                {
                    "parts": [
                        {"text": instruction},
                        {
                            "inlineData": {
                                "mimeType": image.mime_type,
                                "data": image.data,
                            },
                        },
                    ],
                },
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
            },
        })
    }

    /// Concatenates the text parts of the first candidate.
    ///
    /// Blank text is still a reply; only a missing candidate or content is `None`.
    fn extract_text(response: GenerateContentResponse) -> Option<String> {
        let content = response.candidates.into_iter().next()?.content?;
        Some(content.parts.into_iter().filter_map(|p| p.text).collect())
    }
}

#[async_trait]
impl VisionExtractionService for GeminiVisionExtractor {
    async fn generate(
        &self,
        image: &EncodedImage,
        instruction: &str,
    ) -> Result<String, VisionError> {
        let body = Self::build_request_body(image, instruction);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| VisionError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VisionError::UpstreamStatus(response.status().as_u16()));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| VisionError::Transport(e.to_string()))?;

        Self::extract_text(data).ok_or(VisionError::EmptyResponse)
    }
}
