use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use super::errors::ExtractionError;

/// Amounts read from a receipt.
///
/// The three values come from an untrusted source and are independent of each
/// other: nothing guarantees `pre_tax_amount <= total_amount` or that the
/// service fee fits inside the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptAmounts {
    /// Final payable amount printed on the receipt.
    pub total_amount: f64,
    /// Subtotal before tax.
    pub pre_tax_amount: f64,
    /// Mandatory service/delivery charges already billed before tax.
    pub service_fee: f64,
}

/// Outcome of extracting amounts from a receipt image.
///
/// Amounts exist only on success and an error message only on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Success(ReceiptAmounts),
    Failure { error: String },
}

impl ExtractionResult {
    pub fn failure(error: impl Into<String>) -> Self {
        ExtractionResult::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success(_))
    }

    pub fn amounts(&self) -> Option<&ReceiptAmounts> {
        match self {
            ExtractionResult::Success(amounts) => Some(amounts),
            ExtractionResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ExtractionResult::Success(_) => None,
            ExtractionResult::Failure { error } => Some(error),
        }
    }
}

impl From<ReceiptAmounts> for ExtractionResult {
    fn from(amounts: ReceiptAmounts) -> Self {
        ExtractionResult::Success(amounts)
    }
}

impl From<ExtractionError> for ExtractionResult {
    fn from(err: ExtractionError) -> Self {
        ExtractionResult::failure(err.to_string())
    }
}

impl From<Result<ReceiptAmounts, ExtractionError>> for ExtractionResult {
    fn from(result: Result<ReceiptAmounts, ExtractionError>) -> Self {
        match result {
            Ok(amounts) => amounts.into(),
            Err(err) => err.into(),
        }
    }
}

/// Raw receipt image as submitted by the caller.
#[derive(Debug, Clone)]
pub struct ReceiptImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ReceiptImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Encodes the image for transport to the vision service.
    pub fn encode(&self) -> EncodedImage {
        EncodedImage {
            data: STANDARD.encode(&self.bytes),
            mime_type: self.mime_type.trim().to_string(),
        }
    }
}

/// Base64 image payload paired with its media type.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    pub data: String,
    pub mime_type: String,
}
