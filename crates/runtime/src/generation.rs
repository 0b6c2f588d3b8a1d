use async_openai::config::Config;
use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;

use teddies_clients::LlmClient;
use teddies_common::ModuleClient;

use crate::error::GenerationError;
use crate::prompt::ImagePrompt;

pub const IMAGE_MODEL: &str = "dall-e-3";

/// A generated image: remotely addressable, or inline bytes. Both shapes
/// render uniformly into a stored reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationArtifact {
    Url(String),
    Inline(Vec<u8>),
}

impl GenerationArtifact {
    /// The string that goes into a card's `url` column: remote URLs
    /// verbatim, inline payloads as a png data URL.
    pub fn stored_ref(&self) -> String {
        match self {
            GenerationArtifact::Url(url) => url.clone(),
            GenerationArtifact::Inline(bytes) => format!(
                "data:image/png;base64,{}",
                base64::engine::general_purpose::STANDARD.encode(bytes)
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
    b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<ImageData>,
}

/// The outbound generation call: one request per invocation, no internal
/// retry. Retry policy belongs to callers.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &ImagePrompt) -> Result<GenerationArtifact, GenerationError>;
}

/// Calls the images endpoint of whatever OpenAI-compatible service the
/// [`LlmClient`] is configured against.
#[derive(Clone)]
pub struct OpenAiImageGenerator {
    llm: LlmClient,
    http: reqwest::Client,
}

impl OpenAiImageGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate(&self, prompt: &ImagePrompt) -> Result<GenerationArtifact, GenerationError> {
        let config = self.llm.get_client().config();
        let body = json!({
            "model": IMAGE_MODEL,
            "prompt": prompt.text,
            "n": 1,
            "size": prompt.size,
            "response_format": prompt.response_format,
        });

        let mut request = self
            .http
            .post(format!("{}/images/generations", config.api_base()))
            .header("Content-Type", "application/json")
            .json(&body);
        for (key, value) in config.headers().iter() {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GenerationError::Service(format!("{}: {}", status, text)));
        }

        let parsed: ImagesResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::Service(format!("malformed response body: {}", e)))?;
        let first = parsed
            .data
            .into_iter()
            .next()
            .ok_or(GenerationError::EmptyResult)?;

        if let Some(url) = first.url {
            return Ok(GenerationArtifact::Url(url));
        }
        if let Some(b64) = first.b64_json {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(b64.as_bytes())
                .map_err(|e| {
                    tracing::warn!(
                        "[OpenAiImageGenerator::generate] Undecodable b64_json payload: {}",
                        e
                    );
                    GenerationError::EmptyResult
                })?;
            return Ok(GenerationArtifact::Inline(bytes));
        }
        Err(GenerationError::EmptyResult)
    }
}
