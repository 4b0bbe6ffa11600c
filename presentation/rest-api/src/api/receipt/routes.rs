use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::receipt::errors::ExtractionError;
use business::domain::receipt::model::ExtractionResult;
use business::domain::receipt::use_cases::extract::{ExtractReceiptParams, ExtractReceiptUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::receipt::dto::{
    ExtractReceiptBase64Request, ExtractReceiptForm, ExtractionResultDto,
};
use crate::api::receipt::image::decode_inline_image;
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    extract_use_case: Arc<dyn ExtractReceiptUseCase>,
}

impl ReceiptApi {
    pub fn new(extract_use_case: Arc<dyn ExtractReceiptUseCase>) -> Self {
        Self { extract_use_case }
    }
}

/// Receipt extraction API
///
/// Reads the total, pre-tax subtotal and service fees from a receipt photo.
/// Extraction problems are reported in the body with `success: false`.
#[OpenApi]
impl ReceiptApi {
    /// Extract amounts from an uploaded receipt
    ///
    /// Accepts a multipart form with a `receipt` image file.
    #[oai(path = "/receipts/extract", method = "post", tag = "ApiTags::Receipts")]
    async fn extract_receipt(&self, form: ExtractReceiptForm) -> ExtractReceiptResponse {
        let Some(upload) = form.receipt else {
            let result: ExtractionResult = ExtractionError::NoInput.into();
            return ExtractReceiptResponse::Ok(Json(result.into()));
        };

        let mime_type = upload.content_type().unwrap_or_default().to_string();
        let result = match upload.into_vec().await {
            Ok(image_bytes) => {
                self.extract_use_case
                    .execute(ExtractReceiptParams {
                        image_bytes,
                        mime_type,
                    })
                    .await
            }
            Err(err) => {
                tracing::warn!("Failed to read uploaded receipt: {}", err);
                ExtractionError::UnreadableImage.into()
            }
        };

        ExtractReceiptResponse::Ok(Json(result.into()))
    }

    /// Extract amounts from an inline receipt image
    ///
    /// Accepts the image as base64 or as a data URL.
    #[oai(
        path = "/receipts/extract-base64",
        method = "post",
        tag = "ApiTags::Receipts"
    )]
    async fn extract_receipt_base64(
        &self,
        body: Json<ExtractReceiptBase64Request>,
    ) -> ExtractReceiptBase64Response {
        let image = match decode_inline_image(&body.0.image_base64, body.0.mime_type.as_deref()) {
            Ok(image) => image,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return ExtractReceiptBase64Response::BadRequest(json);
            }
        };

        let result = self
            .extract_use_case
            .execute(ExtractReceiptParams {
                image_bytes: image.bytes,
                mime_type: image.mime_type,
            })
            .await;

        ExtractReceiptBase64Response::Ok(Json(result.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExtractReceiptResponse {
    #[oai(status = 200)]
    Ok(Json<ExtractionResultDto>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExtractReceiptBase64Response {
    #[oai(status = 200)]
    Ok(Json<ExtractionResultDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use poem::http::StatusCode;
    use poem::test::{TestClient, TestForm, TestFormField};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use business::domain::receipt::model::ReceiptAmounts;

    use super::*;

    /// Records what reached the use case and answers with fixed amounts.
    #[derive(Default)]
    struct RecordingExtractor {
        received: Mutex<Option<(Vec<u8>, String)>>,
    }

    impl RecordingExtractor {
        fn received(&self) -> Option<(Vec<u8>, String)> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExtractReceiptUseCase for RecordingExtractor {
        async fn execute(&self, params: ExtractReceiptParams) -> ExtractionResult {
            *self.received.lock().unwrap() = Some((params.image_bytes, params.mime_type));
            ExtractionResult::Success(ReceiptAmounts {
                total_amount: 120.0,
                pre_tax_amount: 100.0,
                service_fee: 10.0,
            })
        }
    }

    fn client(extractor: Arc<RecordingExtractor>) -> TestClient<impl poem::Endpoint> {
        TestClient::new(OpenApiService::new(
            ReceiptApi::new(extractor),
            "Receipts",
            "1.0",
        ))
    }

    #[tokio::test]
    async fn should_report_no_file_uploaded_when_receipt_part_is_missing() {
        let extractor = Arc::new(RecordingExtractor::default());

        let resp = client(extractor.clone())
            .post("/receipts/extract")
            .multipart(TestForm::new().text("note", "lunch"))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({"success": false, "error": "No file uploaded"}))
            .await;
        assert_eq!(extractor.received(), None);
    }

    #[tokio::test]
    async fn should_pass_uploaded_bytes_and_media_type_to_use_case() {
        let extractor = Arc::new(RecordingExtractor::default());
        let form = TestForm::new().field(
            TestFormField::bytes(b"receipt".to_vec())
                .name("receipt")
                .filename("receipt.png")
                .content_type("image/png"),
        );

        let resp = client(extractor.clone())
            .post("/receipts/extract")
            .multipart(form)
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "success": true,
            "totalAmount": 120.0,
            "preTaxAmount": 100.0,
            "serviceFee": 10.0,
        }))
        .await;
        assert_eq!(
            extractor.received(),
            Some((b"receipt".to_vec(), "image/png".to_string()))
        );
    }

    #[tokio::test]
    async fn should_reject_invalid_base64_with_bad_request() {
        let extractor = Arc::new(RecordingExtractor::default());

        let resp = client(extractor.clone())
            .post("/receipts/extract-base64")
            .body_json(&json!({"imageBase64": "not base64!"}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({
            "name": "ValidationError",
            "message": "receipt.invalid_base64",
        }))
        .await;
        assert_eq!(extractor.received(), None);
    }

    #[tokio::test]
    async fn should_decode_data_url_before_extracting() {
        let extractor = Arc::new(RecordingExtractor::default());

        let resp = client(extractor.clone())
            .post("/receipts/extract-base64")
            .body_json(&json!({"imageBase64": "data:image/webp;base64,cmVjZWlwdA=="}))
            .send()
            .await;

        resp.assert_status_is_ok();
        assert_eq!(
            extractor.received(),
            Some((b"receipt".to_vec(), "image/webp".to_string()))
        );
    }
}
