use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::receipt::model::ExtractionResult;
use crate::domain::tip::breakdown::{PresetOption, TipBreakdown, preset_options};
use crate::domain::tip::errors::TipError;
use crate::domain::tip::selection::TipSelection;
use crate::domain::tip::use_cases::calculate::{CalculateTipParams, CalculateTipUseCase};

pub struct CalculateTipUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl CalculateTipUseCase for CalculateTipUseCaseImpl {
    fn execute(&self, params: CalculateTipParams) -> Result<TipBreakdown, TipError> {
        let selection =
            TipSelection::from_input(params.preset_percent, params.custom_percent.as_deref())
                .inspect_err(|e| self.logger.warn(&format!("Invalid tip selection: {}", e)))?;

        let breakdown = TipBreakdown::compute(&params.receipt, selection.percent());

        self.logger.debug(&format!(
            "Tip calculated: percent={} tip={} adjusted={} total={}",
            breakdown.percent, breakdown.tip_amount, breakdown.adjusted_tip, breakdown.final_total
        ));

        Ok(breakdown)
    }

    fn preset_options(&self, receipt: &ExtractionResult) -> Vec<PresetOption> {
        preset_options(receipt)
    }
}
