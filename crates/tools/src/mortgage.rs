//! Mortgage payment estimates
//!
//! Standard amortization with monthly compounding, matching the payment
//! figures shown in the chat widget's mortgage calculator.

use nestiq_config::constants::mortgage::MAX_AMORTIZATION_YEARS;
use nestiq_core::{round_cents, Error, Result};
use serde::{Deserialize, Serialize};

/// Monthly payment using the standard amortization formula
///
/// M = P × r × (1 + r)^n / [(1 + r)^n - 1]
///
/// Where:
/// - P = Principal (price less down payment)
/// - r = Monthly interest rate (annual_rate / 12 / 100)
/// - n = Number of monthly payments
pub fn calculate_monthly_payment(principal: f64, annual_rate_percent: f64, months: u32) -> f64 {
    if months == 0 || principal <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;

    // Handle edge case of 0% interest
    if monthly_rate <= 0.0 {
        return principal / months as f64;
    }

    let one_plus_r_n = (1.0 + monthly_rate).powf(f64::from(months));
    if !one_plus_r_n.is_finite() {
        return principal * monthly_rate;
    }
    principal * monthly_rate * one_plus_r_n / (one_plus_r_n - 1.0)
}

/// Total interest paid over the amortization period
pub fn calculate_total_interest(principal: f64, annual_rate_percent: f64, months: u32) -> f64 {
    let payment = calculate_monthly_payment(principal, annual_rate_percent, months);
    payment * months as f64 - principal
}

/// Inputs to a mortgage estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageInput {
    pub purchase_price: f64,
    pub down_payment_percent: f64,
    pub annual_rate_percent: f64,
    pub amortization_years: u32,
}

impl MortgageInput {
    /// Check ranges: non-negative price, percentages within 0-100,
    /// amortization between 1 and `MAX_AMORTIZATION_YEARS`
    pub fn validate(&self) -> Result<()> {
        if !self.purchase_price.is_finite() || self.purchase_price < 0.0 {
            return Err(Error::invalid_input(
                "purchasePrice",
                format!("must be a non-negative amount, got {}", self.purchase_price),
            ));
        }
        if !(0.0..=100.0).contains(&self.down_payment_percent) {
            return Err(Error::invalid_input(
                "downPaymentPercent",
                format!("must be between 0 and 100, got {}", self.down_payment_percent),
            ));
        }
        if !(0.0..=100.0).contains(&self.annual_rate_percent) {
            return Err(Error::invalid_input(
                "annualRatePercent",
                format!("must be between 0 and 100, got {}", self.annual_rate_percent),
            ));
        }
        if !(1..=MAX_AMORTIZATION_YEARS).contains(&self.amortization_years) {
            return Err(Error::invalid_input(
                "amortizationYears",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_AMORTIZATION_YEARS, self.amortization_years
                ),
            ));
        }
        Ok(())
    }
}

/// Monthly payment breakdown, amounts rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageEstimate {
    pub purchase_price: f64,
    pub down_payment: f64,
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub annual_rate_percent: f64,
    pub amortization_years: u32,
}

/// Estimate the monthly payment for a purchase
pub fn estimate(input: &MortgageInput) -> Result<MortgageEstimate> {
    input.validate()?;

    let down_payment = input.purchase_price * (input.down_payment_percent / 100.0);
    let principal = input.purchase_price - down_payment;
    let months = input
        .amortization_years
        .checked_mul(12)
        .ok_or_else(|| Error::invalid_input("amortizationYears", "term is too long"))?;

    let monthly_payment = calculate_monthly_payment(principal, input.annual_rate_percent, months);
    let total_interest = calculate_total_interest(principal, input.annual_rate_percent, months);

    Ok(MortgageEstimate {
        purchase_price: input.purchase_price,
        down_payment: round_cents(down_payment),
        principal: round_cents(principal),
        monthly_payment: round_cents(monthly_payment),
        total_interest: round_cents(total_interest),
        annual_rate_percent: input.annual_rate_percent,
        amortization_years: input.amortization_years,
    })
}
