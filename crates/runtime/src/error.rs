use thiserror::Error;

/// Failures at the generation-service boundary.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Network-level failure before a usable response was read.
    #[error("transport failure calling generation service: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status or an API-reported error; carries the raw body for
    /// diagnostics.
    #[error("generation service reported failure: {0}")]
    Service(String),

    /// The response was well-formed but held no usable artifact.
    #[error("generation service returned no usable artifact")]
    EmptyResult,
}

/// Failures at the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write artifact to disk: {0}")]
    Io(#[from] std::io::Error),

    #[error("card store rejected the write: {0}")]
    Store(#[from] sqlx::Error),

    #[error("failed to encode catalog: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures on the creative-crew path.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A structured stage output did not parse. Aborts the whole run:
    /// downstream persistence needs the complete structure.
    #[error("stage output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to decode downloaded image: {0}")]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
