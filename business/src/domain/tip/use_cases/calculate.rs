use crate::domain::receipt::model::ExtractionResult;
use crate::domain::tip::breakdown::{PresetOption, TipBreakdown};
use crate::domain::tip::errors::TipError;

pub struct CalculateTipParams {
    pub receipt: ExtractionResult,
    pub preset_percent: Option<f64>,
    pub custom_percent: Option<String>,
}

/// Tip calculations over an already extracted receipt. Pure and synchronous:
/// callers may invoke it as often as the selection changes.
pub trait CalculateTipUseCase: Send + Sync {
    fn execute(&self, params: CalculateTipParams) -> Result<TipBreakdown, TipError>;

    fn preset_options(&self, receipt: &ExtractionResult) -> Vec<PresetOption>;
}
