/// Failures inside the extraction pipeline.
///
/// Unlike the other domain errors these display human-readable messages: the
/// message becomes `ExtractionResult::Failure::error` and is shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("No file uploaded")]
    NoInput,
    #[error("Failed to process receipt")]
    MissingMediaType,
    #[error("Failed to process receipt")]
    UnreadableImage,
    #[error("Failed to process receipt")]
    Upstream(#[from] VisionError),
    #[error("Failed to parse receipt data")]
    UnparseableResponse,
    #[error("{0}")]
    Declared(String),
}

/// Errors reported by a vision-extraction adapter.
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("vision.transport: {0}")]
    Transport(String),
    #[error("vision.upstream_status: {0}")]
    UpstreamStatus(u16),
    #[error("vision.empty_response")]
    EmptyResponse,
}
