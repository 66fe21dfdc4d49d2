//! British Columbia Property Transfer Tax
//!
//! Rates on cumulative thresholds:
//! - 1% on the first $200,000
//! - 2% on $200,001 to $2,000,000
//! - 3% above $2,000,000
//!
//! First-time buyers are fully exempt up to a threshold and partially exempt
//! up to an upper bound, where the exemption fades linearly to zero:
//!
//! | property     | full exemption up to | no exemption from |
//! |--------------|----------------------|-------------------|
//! | resale       | $835,000             | $860,000          |
//! | newly built  | $1,100,000           | $1,150,000        |
//!
//! Inside the fade band the exemption is the raw tax *at the threshold*
//! scaled by the remaining share of the band, not the tax at the actual
//! price.

use nestiq_core::{round_cents, TaxCalculationInput, TaxCalculationResult, TaxCalculator};

use super::brackets::{self, Bracket};

const SCHEDULE: [Bracket; 3] = [
    Bracket::up_to(200_000.0, 0.01, "1%"),
    Bracket::up_to(2_000_000.0, 0.02, "2%"),
    Bracket::above(0.03, "3%"),
];

/// First-time buyer exemption band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExemptionBand {
    /// Highest price with a full exemption
    pub threshold: f64,
    /// Lowest price with no exemption
    pub upper_bound: f64,
}

pub const RESALE_EXEMPTION: ExemptionBand = ExemptionBand {
    threshold: 835_000.0,
    upper_bound: 860_000.0,
};

pub const NEWLY_BUILT_EXEMPTION: ExemptionBand = ExemptionBand {
    threshold: 1_100_000.0,
    upper_bound: 1_150_000.0,
};

/// BC Property Transfer Tax calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct BcPropertyTransferTax;

impl BcPropertyTransferTax {
    /// Tax at a price with no exemption, rounded to cents
    ///
    /// Computed directly from the rates rather than through the tier
    /// breakdown; the fade-out scales this value at the band threshold.
    pub fn raw_tax_at(price: f64) -> f64 {
        let mut tax = 0.0;
        tax += price.min(200_000.0) * 0.01;
        tax += (price - 200_000.0).max(0.0).min(1_800_000.0) * 0.02;
        tax += (price - 2_000_000.0).max(0.0) * 0.03;
        round_cents(tax)
    }

    fn exemption(input: &TaxCalculationInput, total_tax: f64) -> f64 {
        if !input.is_first_time_buyer() {
            return 0.0;
        }

        let band = if input.is_newly_built() {
            NEWLY_BUILT_EXEMPTION
        } else {
            RESALE_EXEMPTION
        };
        let price = input.purchase_price();

        if price <= band.threshold {
            total_tax
        } else if price < band.upper_bound {
            let full_exemption_tax = Self::raw_tax_at(band.threshold);
            let ratio = (band.upper_bound - price) / (band.upper_bound - band.threshold);
            round_cents(full_exemption_tax * ratio)
        } else {
            0.0
        }
    }
}

impl TaxCalculator for BcPropertyTransferTax {
    fn code(&self) -> &'static str {
        "bc_ptt"
    }

    fn region_name(&self) -> &'static str {
        "British Columbia"
    }

    fn tax_name(&self) -> &'static str {
        "Property Transfer Tax (PTT)"
    }

    fn calculate(&self, input: &TaxCalculationInput) -> TaxCalculationResult {
        let breakdown = brackets::apply(&SCHEDULE, input.purchase_price());
        let exemption = Self::exemption(input, breakdown.total_tax);

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

    fn calc(price: f64, first_time: bool, newly_built: bool) -> TaxCalculationResult {
        let input = TaxCalculationInput::new(price, first_time)
            .unwrap()
            .newly_built(newly_built);
        BcPropertyTransferTax.calculate(&input)
    }

    #[test]
    fn test_first_time_resale_full_exemption() {
        let result = calc(800_000.0, true, false);
        assert_eq!(result.total_tax, 14_000.0);
        assert_eq!(result.exemption, 14_000.0);
        assert_eq!(result.net_tax, 0.0);
        assert_eq!(result.tiers.len(), 2);
        assert_eq!(result.tiers[0].range, "$0 - $200,000");
        assert_eq!(result.tiers[0].amount, 2_000.0);
        assert_eq!(result.tiers[1].range, "$200,001 - $2,000,000");
        assert_eq!(result.tiers[1].amount, 12_000.0);
    }

    #[test]
    fn test_not_first_time() {
        let result = calc(800_000.0, false, false);
        assert_eq!(result.exemption, 0.0);
        assert_eq!(result.net_tax, 14_000.0);
    }

    #[test]
    fn test_resale_fade_out_midpoint() {
        let result = calc(847_500.0, true, false);
        assert_eq!(result.total_tax, 14_950.0);
        assert_eq!(result.exemption, 7_350.0);
        assert_eq!(result.net_tax, 7_600.0);
    }

    #[test]
    fn test_newly_built_fade_out_midpoint() {
        let result = calc(1_125_000.0, true, true);
        assert_eq!(result.total_tax, 20_500.0);
        assert_eq!(result.exemption, 10_000.0);
        assert_eq!(result.net_tax, 10_500.0);
    }

    #[test]
    fn test_fade_out_boundaries() {
        for band in [RESALE_EXEMPTION, NEWLY_BUILT_EXEMPTION] {
            let newly_built = band == NEWLY_BUILT_EXEMPTION;

            let at_threshold = calc(band.threshold, true, newly_built);
            assert_eq!(at_threshold.exemption, at_threshold.total_tax);
            assert_eq!(
                at_threshold.total_tax,
                BcPropertyTransferTax::raw_tax_at(band.threshold)
            );

            let at_upper = calc(band.upper_bound, true, newly_built);
            assert_eq!(at_upper.exemption, 0.0);

            let just_inside = calc(band.upper_bound - 1.0, true, newly_built);
            assert!(just_inside.exemption > 0.0);
            assert!(just_inside.exemption < 1_000.0);
        }
    }

    #[test]
    fn test_top_bracket() {
        let result = calc(2_500_000.0, false, false);
        assert_eq!(result.total_tax, 53_000.0);
        assert_eq!(result.tiers.len(), 3);
        assert_eq!(result.tiers[2].range, "Above $2,000,000");
        assert_eq!(result.tiers[2].amount, 15_000.0);
    }

    #[test]
    fn test_raw_tax_matches_tiers() {
        for price in [0.0, 150_000.0, 835_000.0, 1_100_000.0, 3_000_000.0] {
            assert_eq!(
                BcPropertyTransferTax::raw_tax_at(price),
                calc(price, false, false).total_tax
            );
        }
    }
}
