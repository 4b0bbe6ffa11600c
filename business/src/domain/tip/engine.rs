//! Tip arithmetic over an extracted receipt.
//!
//! Every function is total: a failed extraction yields 0 and contradictory
//! amounts (a service fee larger than the subtotal, negative values) flow
//! through unchanged. Percentages are not clamped.

use crate::domain::receipt::model::ExtractionResult;

/// Amount the tip percentage applies to: pre-tax subtotal minus service fees.
pub fn base_amount(receipt: &ExtractionResult) -> f64 {
    match receipt.amounts() {
        Some(a) => a.pre_tax_amount - a.service_fee,
        None => 0.0,
    }
}

/// Nominal tip for `percent` of the base amount.
pub fn tip_amount(receipt: &ExtractionResult, percent: f64) -> f64 {
    if !receipt.is_success() {
        return 0.0;
    }
    base_amount(receipt) * percent / 100.0
}

/// Tip net of service fees already on the bill. Negative when the fees exceed
/// the nominal tip.
pub fn adjusted_tip(receipt: &ExtractionResult, percent: f64) -> f64 {
    let tip = tip_amount(receipt, percent);
    match receipt.amounts() {
        Some(a) => tip - a.service_fee,
        None => tip,
    }
}

/// Receipt total plus the adjusted tip.
pub fn final_total(receipt: &ExtractionResult, adjusted_tip_value: f64) -> f64 {
    match receipt.amounts() {
        Some(a) => a.total_amount + adjusted_tip_value,
        None => 0.0,
    }
}
