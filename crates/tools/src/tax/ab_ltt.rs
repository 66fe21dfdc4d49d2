//! Alberta Land Title Transfer Fee
//!
//! Alberta has no land transfer tax. The title transfer fee is $50 plus $2
//! for every $5,000 of value or portion thereof, with no first-time buyer
//! exemption. The mortgage registration fee is separate and not included.

use nestiq_core::{round_cents, TaxCalculationInput, TaxCalculationResult, TaxCalculator, TaxTier};

const BASE_FEE: f64 = 50.0;
const INCREMENT: f64 = 5_000.0;
const FEE_PER_INCREMENT: f64 = 2.0;

/// Alberta Land Title Transfer Fee calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AlbertaTitleTransferFee;

impl AlbertaTitleTransferFee {
    /// Number of started $5,000 increments
    pub fn increments(price: f64) -> u64 {
        (price / INCREMENT).ceil() as u64
    }
}

impl TaxCalculator for AlbertaTitleTransferFee {
    fn code(&self) -> &'static str {
        "ab_ltt"
    }

    fn region_name(&self) -> &'static str {
        "Alberta"
    }

    fn tax_name(&self) -> &'static str {
        "Land Title Transfer Fee"
    }

    fn calculate(&self, input: &TaxCalculationInput) -> TaxCalculationResult {
        let increments = Self::increments(input.purchase_price());
        let increment_fee = increments as f64 * FEE_PER_INCREMENT;
        let total_tax = round_cents(BASE_FEE + increment_fee);

        let mut tiers = vec![TaxTier::new("Base fee", "Flat", BASE_FEE)];
        if increments > 0 {
            tiers.push(TaxTier::new(
                format!("{} x $5,000 increments", increments),
                "$2 per $5,000",
                increment_fee,
            ));
        }

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
    fn test_fee_formula() {
        let input = TaxCalculationInput::new(312_000.0, true)
            .unwrap()
            .newly_built(true);
        let result = AlbertaTitleTransferFee.calculate(&input);

        assert_eq!(result.total_tax, 176.0);
        assert_eq!(result.exemption, 0.0);
        assert_eq!(result.net_tax, 176.0);
        assert_eq!(result.tiers[1].range, "63 x $5,000 increments");
        assert_eq!(result.tiers[1].amount, 126.0);
    }

    #[test]
    fn test_partial_increment_rounds_up() {
        assert_eq!(AlbertaTitleTransferFee::increments(5_000.0), 1);
        assert_eq!(AlbertaTitleTransferFee::increments(5_000.01), 2);
        assert_eq!(AlbertaTitleTransferFee::increments(0.0), 0);
    }

    #[test]
    fn test_zero_price_is_base_fee_only() {
        let input = TaxCalculationInput::new(0.0, false).unwrap();
        let result = AlbertaTitleTransferFee.calculate(&input);
        assert_eq!(result.total_tax, 50.0);
        assert_eq!(result.tiers.len(), 1);
    }
}
