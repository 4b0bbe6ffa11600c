use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::receipt::model::ExtractionResult;
use business::domain::tip::use_cases::calculate::{CalculateTipParams, CalculateTipUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::tip::dto::{
    CalculateTipRequest, PresetOptionResponse, PresetOptionsRequest, TipBreakdownResponse,
};

pub struct TipApi {
    calculate_use_case: Arc<dyn CalculateTipUseCase>,
}

impl TipApi {
    pub fn new(calculate_use_case: Arc<dyn CalculateTipUseCase>) -> Self {
        Self { calculate_use_case }
    }
}

/// Tip calculation API
///
/// Stateless: the client sends back the extraction result with every request.
#[OpenApi]
impl TipApi {
    /// Calculate a tip
    ///
    /// Applies the selected percentage to the pre-tax subtotal minus service
    /// fees, then subtracts the fees from the tip again to show the net tip.
    #[oai(path = "/tips/calculate", method = "post", tag = "ApiTags::Tips")]
    async fn calculate_tip(&self, body: Json<CalculateTipRequest>) -> CalculateTipResponse {
        let params = CalculateTipParams {
            receipt: body.0.receipt.into(),
            preset_percent: body.0.preset_percent,
            custom_percent: body.0.custom_percent,
        };

        match self.calculate_use_case.execute(params) {
            Ok(breakdown) => CalculateTipResponse::Ok(Json(breakdown.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                CalculateTipResponse::BadRequest(json)
            }
        }
    }

    /// List preset tips
    ///
    /// Returns the 10%, 15% and 20% options with the tip each would add.
    #[oai(path = "/tips/presets", method = "post", tag = "ApiTags::Tips")]
    async fn preset_options(&self, body: Json<PresetOptionsRequest>) -> PresetOptionsResponse {
        let receipt: ExtractionResult = body.0.receipt.into();
        let options = self
            .calculate_use_case
            .preset_options(&receipt)
            .into_iter()
            .map(PresetOptionResponse::from)
            .collect();

        PresetOptionsResponse::Ok(Json(options))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CalculateTipResponse {
    #[oai(status = 200)]
    Ok(Json<TipBreakdownResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PresetOptionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PresetOptionResponse>>),
}
