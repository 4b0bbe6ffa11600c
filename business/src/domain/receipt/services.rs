use async_trait::async_trait;

use super::errors::VisionError;
use super::model::EncodedImage;

/// Service port for a vision-capable model that answers a fixed instruction
/// about an image.
///
/// Implementations return the model's raw reply text. Interpreting that text
/// is the caller's job.
#[async_trait]
pub trait VisionExtractionService: Send + Sync {
    async fn generate(
        &self,
        image: &EncodedImage,
        instruction: &str,
    ) -> Result<String, VisionError>;
}
