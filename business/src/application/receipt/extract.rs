use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ExtractionError;
use crate::domain::receipt::instruction::RECEIPT_INSTRUCTION;
use crate::domain::receipt::model::{ExtractionResult, ReceiptAmounts, ReceiptImage};
use crate::domain::receipt::response::parse_model_reply;
use crate::domain::receipt::services::VisionExtractionService;
use crate::domain::receipt::use_cases::extract::{ExtractReceiptParams, ExtractReceiptUseCase};

pub struct ExtractReceiptUseCaseImpl {
    pub vision: Arc<dyn VisionExtractionService>,
    pub logger: Arc<dyn Logger>,
}

impl ExtractReceiptUseCaseImpl {
    async fn extract(&self, image: ReceiptImage) -> Result<ReceiptAmounts, ExtractionError> {
        if image.bytes.is_empty() {
            return Err(ExtractionError::NoInput);
        }
        if image.mime_type.trim().is_empty() {
            return Err(ExtractionError::MissingMediaType);
        }

        let encoded = image.encode();
        let reply = self.vision.generate(&encoded, RECEIPT_INSTRUCTION).await?;
        self.logger.debug(&format!("Model reply: {}", reply));

        parse_model_reply(&reply)
    }
}

#[async_trait]
impl ExtractReceiptUseCase for ExtractReceiptUseCaseImpl {
    async fn execute(&self, params: ExtractReceiptParams) -> ExtractionResult {
        self.logger.info(&format!(
            "Extracting receipt amounts ({} bytes, {})",
            params.image_bytes.len(),
            params.mime_type
        ));

        let image = ReceiptImage::new(params.image_bytes, params.mime_type);

        match self.extract(image).await {
            Ok(amounts) => {
                self.logger.info(&format!(
                    "Receipt extracted: total={} pre_tax={} service_fee={}",
                    amounts.total_amount, amounts.pre_tax_amount, amounts.service_fee
                ));
                ExtractionResult::Success(amounts)
            }
            Err(ExtractionError::Upstream(cause)) => {
                self.logger
                    .error(&format!("Vision service call failed: {cause}"));
                ExtractionError::Upstream(cause).into()
            }
            Err(err) => {
                self.logger.warn(&format!("Receipt extraction failed: {}", err));
                err.into()
            }
        }
    }
}
