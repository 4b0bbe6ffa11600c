use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};

use business::domain::receipt::model::{ExtractionResult, ReceiptAmounts};

/// Receipt photo uploaded as a form file.
#[derive(Multipart)]
pub struct ExtractReceiptForm {
    /// Receipt image file
    pub receipt: Option<Upload>,
}

/// Request to extract amounts from an inline receipt image.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ExtractReceiptBase64Request {
    /// Base64-encoded image, optionally as a `data:image/...;base64,` URL
    pub image_base64: String,
    /// Media type of the image; taken from the data URL when omitted
    #[oai(skip_serializing_if_is_none)]
    pub mime_type: Option<String>,
}

/// Amounts extracted from a receipt, or the reason extraction failed.
///
/// Amounts are present only when `success` is true, `error` only when it is false.
#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct ExtractionResultDto {
    pub success: bool,
    /// Final amount to pay
    #[oai(skip_serializing_if_is_none)]
    pub total_amount: Option<f64>,
    /// Subtotal before tax
    #[oai(skip_serializing_if_is_none)]
    pub pre_tax_amount: Option<f64>,
    /// Service or delivery fees already billed
    #[oai(skip_serializing_if_is_none)]
    pub service_fee: Option<f64>,
    /// Human-readable failure reason
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<ExtractionResult> for ExtractionResultDto {
    fn from(result: ExtractionResult) -> Self {
        match result {
            ExtractionResult::Success(amounts) => Self {
                success: true,
                total_amount: Some(amounts.total_amount),
                pre_tax_amount: Some(amounts.pre_tax_amount),
                service_fee: Some(amounts.service_fee),
                error: None,
            },
            ExtractionResult::Failure { error } => Self {
                success: false,
                total_amount: None,
                pre_tax_amount: None,
                service_fee: None,
                error: Some(error),
            },
        }
    }
}

/// Client-held results come back on every tip request; missing amounts read as 0.
impl From<ExtractionResultDto> for ExtractionResult {
    fn from(dto: ExtractionResultDto) -> Self {
        if dto.success {
            ExtractionResult::Success(ReceiptAmounts {
                total_amount: dto.total_amount.unwrap_or(0.0),
                pre_tax_amount: dto.pre_tax_amount.unwrap_or(0.0),
                service_fee: dto.service_fee.unwrap_or(0.0),
            })
        } else {
            ExtractionResult::failure(dto.error.unwrap_or_default())
        }
    }
}
