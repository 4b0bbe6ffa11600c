use poem_openapi::Object;

use business::domain::tip::breakdown::{PresetOption, TipBreakdown, format_currency};

use crate::api::receipt::dto::ExtractionResultDto;

/// Request to calculate the tip for one selection.
///
/// `presetPercent` (10, 15 or 20) takes precedence over `customPercent`.
/// Without either, the breakdown is computed for 0%.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CalculateTipRequest {
    /// Result previously returned by the extraction endpoints
    pub receipt: ExtractionResultDto,
    /// One of the preset percentages
    #[oai(skip_serializing_if_is_none)]
    pub preset_percent: Option<f64>,
    /// Free-form percentage as typed by the user
    #[oai(skip_serializing_if_is_none)]
    pub custom_percent: Option<String>,
}

/// Request for the preset tip options of a receipt.
#[derive(Debug, Clone, Object)]
pub struct PresetOptionsRequest {
    /// Result previously returned by the extraction endpoints
    pub receipt: ExtractionResultDto,
}

/// Amounts formatted as currency with two decimals.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct FormattedBreakdown {
    pub base_amount: String,
    pub tip_amount: String,
    pub service_fee: String,
    pub adjusted_tip: String,
    pub final_total: String,
}

/// Tip figures for one percentage.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct TipBreakdownResponse {
    /// Applied percentage
    pub percent: f64,
    /// Pre-tax subtotal minus service fees
    pub base_amount: f64,
    /// Percentage of the base amount
    pub tip_amount: f64,
    /// Service fees already on the bill
    pub service_fee: f64,
    /// Tip minus service fees; may be negative
    pub adjusted_tip: f64,
    /// Receipt total plus adjusted tip
    pub final_total: f64,
    /// Whether a tip summary should be displayed
    pub has_tip: bool,
    pub formatted: FormattedBreakdown,
}

impl From<TipBreakdown> for TipBreakdownResponse {
    fn from(b: TipBreakdown) -> Self {
        Self {
            percent: b.percent,
            base_amount: b.base_amount,
            tip_amount: b.tip_amount,
            service_fee: b.service_fee,
            adjusted_tip: b.adjusted_tip,
            final_total: b.final_total,
            has_tip: b.has_tip(),
            formatted: FormattedBreakdown {
                base_amount: format_currency(b.base_amount),
                tip_amount: format_currency(b.tip_amount),
                service_fee: format_currency(b.service_fee),
                adjusted_tip: format_currency(b.adjusted_tip),
                final_total: format_currency(b.final_total),
            },
        }
    }
}

/// A preset percentage and the tip it would add.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PresetOptionResponse {
    pub percent: f64,
    pub tip_amount: f64,
    pub formatted_tip_amount: String,
}

impl From<PresetOption> for PresetOptionResponse {
    fn from(option: PresetOption) -> Self {
        Self {
            percent: option.preset.percent(),
            tip_amount: option.tip_amount,
            formatted_tip_amount: format_currency(option.tip_amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::receipt::model::{ExtractionResult, ReceiptAmounts};

    #[test]
    fn should_format_every_breakdown_amount() {
        let receipt = ExtractionResult::Success(ReceiptAmounts {
            total_amount: 120.0,
            pre_tax_amount: 100.0,
            service_fee: 10.0,
        });

        let response = TipBreakdownResponse::from(TipBreakdown::compute(&receipt, 15.0));

        assert!(response.has_tip);
        assert_eq!(response.formatted.base_amount, "$90.00");
        assert_eq!(response.formatted.tip_amount, "$13.50");
        assert_eq!(response.formatted.service_fee, "$10.00");
        assert_eq!(response.formatted.adjusted_tip, "$3.50");
        assert_eq!(response.formatted.final_total, "$123.50");
    }
}
