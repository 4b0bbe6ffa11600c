use async_trait::async_trait;

use crate::domain::receipt::model::ExtractionResult;

pub struct ExtractReceiptParams {
    pub image_bytes: Vec<u8>,
    pub mime_type: String,
}

/// Turns a receipt image into an `ExtractionResult`. Never fails: every
/// problem is reported through `ExtractionResult::Failure`.
#[async_trait]
pub trait ExtractReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ExtractReceiptParams) -> ExtractionResult;
}
