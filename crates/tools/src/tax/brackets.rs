//! Marginal rate schedules
//!
//! A schedule is an ascending list of brackets; each bracket taxes the slice
//! of the price between the previous ceiling and its own. Tier labels are
//! generated from the ceilings so they always agree with the rates applied.

use nestiq_core::{group_thousands, round_cents, TaxTier};

/// One marginal bracket
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bracket {
    /// Upper bound of the bracket, `None` for the open top bracket
    pub ceiling: Option<f64>,
    /// Marginal rate as a fraction, e.g. `0.02`
    pub rate: f64,
    pub rate_label: &'static str,
}

impl Bracket {
    pub const fn up_to(ceiling: f64, rate: f64, rate_label: &'static str) -> Self {
        Self {
            ceiling: Some(ceiling),
            rate,
            rate_label,
        }
    }

    pub const fn above(rate: f64, rate_label: &'static str) -> Self {
        Self {
            ceiling: None,
            rate,
            rate_label,
        }
    }
}

/// Tiers for the positive brackets plus the total, rounded to cents
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Breakdown {
    pub tiers: Vec<TaxTier>,
    pub total_tax: f64,
}

/// Apply a schedule to a price
///
/// Each tier amount is rounded on its own; the total is the rounded sum of
/// the unrounded slices.
pub(crate) fn apply(schedule: &[Bracket], price: f64) -> Breakdown {
    let mut tiers = Vec::with_capacity(schedule.len());
    let mut total = 0.0;
    let mut floor = 0.0;

    for bracket in schedule {
        let top = bracket.ceiling.map_or(price, |ceiling| price.min(ceiling));
        let base = top - floor;

        if base > 0.0 {
            let amount = base * bracket.rate;
            tiers.push(TaxTier::new(
                range_label(floor, bracket.ceiling),
                bracket.rate_label,
                round_cents(amount),
            ));
            total += amount;
        }

        match bracket.ceiling {
            Some(ceiling) => floor = ceiling,
            None => break,
        }
    }

    Breakdown {
        tiers,
        total_tax: round_cents(total),
    }
}

/// `$0 - $200,000`, `$200,001 - $2,000,000`, `Above $2,000,000`
fn range_label(floor: f64, ceiling: Option<f64>) -> String {
    match ceiling {
        None => format!("Above ${}", group_thousands(floor)),
        Some(ceiling) if floor <= 0.0 => format!("$0 - ${}", group_thousands(ceiling)),
        Some(ceiling) => format!(
            "${} - ${}",
            group_thousands(floor + 1.0),
            group_thousands(ceiling)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE: [Bracket; 3] = [
        Bracket::up_to(100_000.0, 0.01, "1%"),
        Bracket::up_to(500_000.0, 0.02, "2%"),
        Bracket::above(0.05, "5%"),
    ];

    #[test]
    fn test_range_labels() {
        assert_eq!(range_label(0.0, Some(55_000.0)), "$0 - $55,000");
        assert_eq!(range_label(55_000.0, Some(250_000.0)), "$55,001 - $250,000");
        assert_eq!(range_label(2_000_000.0, None), "Above $2,000,000");
    }

    #[test]
    fn test_partial_schedule() {
        let breakdown = apply(&SCHEDULE, 250_000.0);
        assert_eq!(breakdown.tiers.len(), 2);
        assert_eq!(breakdown.tiers[0].amount, 1_000.0);
        assert_eq!(breakdown.tiers[1].range, "$100,001 - $500,000");
        assert_eq!(breakdown.tiers[1].amount, 3_000.0);
        assert_eq!(breakdown.total_tax, 4_000.0);
    }

    #[test]
    fn test_top_bracket() {
        let breakdown = apply(&SCHEDULE, 600_000.0);
        assert_eq!(breakdown.tiers.len(), 3);
        assert_eq!(breakdown.tiers[2].range, "Above $500,000");
        assert_eq!(breakdown.tiers[2].amount, 5_000.0);
        assert_eq!(breakdown.total_tax, 14_000.0);
    }

    #[test]
    fn test_zero_price_has_no_tiers() {
        let breakdown = apply(&SCHEDULE, 0.0);
        assert!(breakdown.tiers.is_empty());
        assert_eq!(breakdown.total_tax, 0.0);
    }

    #[test]
    fn test_fractional_price_rounds_per_tier() {
        let breakdown = apply(&SCHEDULE, 100_000.33);
        assert_eq!(breakdown.tiers[1].amount, 0.01);
        assert_eq!(breakdown.total_tax, 1_000.01);
    }
}
