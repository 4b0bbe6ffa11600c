use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::vision_extractor::GeminiVisionExtractor;

use business::application::receipt::extract::ExtractReceiptUseCaseImpl;
use business::application::tip::calculate::CalculateTipUseCaseImpl;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
    pub tip_api: crate::api::tip::routes::TipApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: &GeminiConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::HealthApi::new(gemini_config.model.clone());

        // Infrastructure adapters
        let gemini_client = GeminiClient::new(
            gemini_config.api_key.clone(),
            gemini_config.model.clone(),
            gemini_config.timeout,
        )
        .context("Failed to build Gemini HTTP client")?
        .with_base_url(gemini_config.base_url.clone());
        let vision_extractor = Arc::new(GeminiVisionExtractor::new(gemini_client));

        // Use cases
        let extract_use_case = Arc::new(ExtractReceiptUseCaseImpl {
            vision: vision_extractor,
            logger: logger.clone(),
        });
        let calculate_use_case = Arc::new(CalculateTipUseCaseImpl { logger });

        Ok(Self {
            health_api,
            receipt_api: crate::api::receipt::routes::ReceiptApi::new(extract_use_case),
            tip_api: crate::api::tip::routes::TipApi::new(calculate_use_case),
        })
    }
}
