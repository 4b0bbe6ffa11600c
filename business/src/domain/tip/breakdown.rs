use serde::Serialize;

use super::engine::{adjusted_tip, base_amount, final_total, tip_amount};
use super::selection::TipPreset;
use crate::domain::receipt::model::ExtractionResult;

/// All figures shown for one tip percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipBreakdown {
    pub percent: f64,
    pub base_amount: f64,
    pub tip_amount: f64,
    pub service_fee: f64,
    pub adjusted_tip: f64,
    pub final_total: f64,
}

impl TipBreakdown {
    pub fn compute(receipt: &ExtractionResult, percent: f64) -> Self {
        let adjusted = adjusted_tip(receipt, percent);
        Self {
            percent,
            base_amount: base_amount(receipt),
            tip_amount: tip_amount(receipt, percent),
            service_fee: receipt.amounts().map_or(0.0, |a| a.service_fee),
            adjusted_tip: adjusted,
            final_total: final_total(receipt, adjusted),
        }
    }

    /// Whether a tip summary should be shown at all.
    pub fn has_tip(&self) -> bool {
        self.percent > 0.0
    }
}

/// A preset with the tip it would add to the receipt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetOption {
    pub preset: TipPreset,
    pub tip_amount: f64,
}

pub fn preset_options(receipt: &ExtractionResult) -> Vec<PresetOption> {
    TipPreset::ALL
        .into_iter()
        .map(|preset| PresetOption {
            preset,
            tip_amount: tip_amount(receipt, preset.percent()),
        })
        .collect()
}

/// Formats an amount as dollars with two decimals, e.g. `$12.30` or `$-3.50`.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}
