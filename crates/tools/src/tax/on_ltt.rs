//! Ontario Land Transfer Tax (provincial)
//!
//! Rates on cumulative thresholds:
//! - 0.5% on the first $55,000
//! - 1.0% on $55,001 to $250,000
//! - 1.5% on $250,001 to $400,000
//! - 2.0% on $400,001 to $2,000,000
//! - 2.5% above $2,000,000
//!
//! First-time buyers get a rebate of the full tax capped at $4,000.
//! Toronto's municipal LTT is a separate levy and is not included.

use nestiq_core::{round_cents, TaxCalculationInput, TaxCalculationResult, TaxCalculator};

use super::brackets::{self, Bracket};

const SCHEDULE: [Bracket; 5] = [
    Bracket::up_to(55_000.0, 0.005, "0.5%"),
    Bracket::up_to(250_000.0, 0.01, "1%"),
    Bracket::up_to(400_000.0, 0.015, "1.5%"),
    Bracket::up_to(2_000_000.0, 0.02, "2%"),
    Bracket::above(0.025, "2.5%"),
];

/// Maximum first-time buyer rebate
pub const FIRST_TIME_REBATE_CAP: f64 = 4_000.0;

/// Ontario Land Transfer Tax calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct OntarioLandTransferTax;

impl TaxCalculator for OntarioLandTransferTax {
    fn code(&self) -> &'static str {
        "on_ltt"
    }

    fn region_name(&self) -> &'static str {
        "Ontario"
    }

    fn tax_name(&self) -> &'static str {
        "Land Transfer Tax (LTT)"
    }

    fn calculate(&self, input: &TaxCalculationInput) -> TaxCalculationResult {
        let breakdown = brackets::apply(&SCHEDULE, input.purchase_price());

        let exemption = if input.is_first_time_buyer() {
            breakdown.total_tax.min(FIRST_TIME_REBATE_CAP)
        } else {
            0.0
        };

        TaxCalculationResult {
            total_tax: breakdown.total_tax,
            exemption,
            net_tax: round_cents(breakdown.total_tax - exemption),
            tiers: breakdown.tiers,
            region_name: self.region_name().to_string(),
            tax_name: self.tax_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(price: f64, first_time: bool) -> TaxCalculationResult {
        let input = TaxCalculationInput::new(price, first_time).unwrap();
        OntarioLandTransferTax.calculate(&input)
    }

    #[test]
    fn test_first_time_rebate_capped() {
        let result = calc(500_000.0, true);
        assert_eq!(result.total_tax, 6_475.0);
        assert_eq!(result.exemption, 4_000.0);
        assert_eq!(result.net_tax, 2_475.0);

        let amounts: Vec<f64> = result.tiers.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![275.0, 1_950.0, 2_250.0, 2_000.0]);
        assert_eq!(result.tiers[3].range, "$400,001 - $2,000,000");
    }

    #[test]
    fn test_small_purchase_fully_rebated() {
        let result = calc(200_000.0, true);
        assert_eq!(result.total_tax, 1_725.0);
        assert_eq!(result.exemption, 1_725.0);
        assert_eq!(result.net_tax, 0.0);
    }

    #[test]
    fn test_no_rebate_for_repeat_buyer() {
        let result = calc(500_000.0, false);
        assert_eq!(result.exemption, 0.0);
        assert_eq!(result.net_tax, 6_475.0);
    }

    #[test]
    fn test_all_five_tiers() {
        let result = calc(2_500_000.0, false);
        assert_eq!(result.tiers.len(), 5);
        assert_eq!(result.tiers[0].range, "$0 - $55,000");
        assert_eq!(result.tiers[4].range, "Above $2,000,000");
        assert_eq!(result.tiers[4].rate, "2.5%");
        assert_eq!(result.total_tax, 48_975.0);
    }
}
