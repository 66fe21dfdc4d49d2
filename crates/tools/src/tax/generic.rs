//! Flat-rate estimate for jurisdictions without a table

use nestiq_core::{round_cents, TaxCalculationInput, TaxCalculationResult, TaxCalculator, TaxTier};

/// Estimated rate applied to the full purchase price
const ESTIMATED_RATE: f64 = 0.015;

/// Generic transfer tax estimator
///
/// Used for every code without a dedicated table. Never grants an exemption.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericEstimate;

impl TaxCalculator for GenericEstimate {
    fn code(&self) -> &'static str {
        "generic"
    }

    fn region_name(&self) -> &'static str {
        "General"
    }

    fn tax_name(&self) -> &'static str {
        "Estimated Transfer Tax"
    }

    fn calculate(&self, input: &TaxCalculationInput) -> TaxCalculationResult {
        let total_tax = round_cents(input.purchase_price() * ESTIMATED_RATE);

        let tiers = if total_tax > 0.0 {
            vec![TaxTier::new("Full purchase price", "1.5% (estimated)", total_tax)]
        } else {
            Vec::new()
        };

        TaxCalculationResult {
            total_tax,
            exemption: 0.0,
            net_tax: total_tax,
            tiers,
            region_name: self.region_name().to_string(),
            tax_name: self.tax_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_estimate() {
        let input = TaxCalculationInput::new(1_000_000.0, true).unwrap();
        let result = GenericEstimate.calculate(&input);

        assert_eq!(result.total_tax, 15_000.0);
        assert_eq!(result.exemption, 0.0);
        assert_eq!(result.net_tax, 15_000.0);
        assert_eq!(result.tiers.len(), 1);
        assert_eq!(result.tiers[0].range, "Full purchase price");
        assert_eq!(result.region_name, "General");
    }

    #[test]
    fn test_zero_price() {
        let input = TaxCalculationInput::new(0.0, false).unwrap();
        let result = GenericEstimate.calculate(&input);
        assert_eq!(result.total_tax, 0.0);
        assert!(result.tiers.is_empty());
    }
}
