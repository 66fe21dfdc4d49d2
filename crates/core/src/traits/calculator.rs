//! Transfer tax calculator trait
//!
//! Every jurisdiction implements the same pure interface so callers can pick
//! a strategy by jurisdiction code and render the result without knowing
//! which table produced it.
//!
//! # Example
//!
//! ```ignore
//! use nestiq_core::{TaxCalculationInput, TaxCalculator};
//!
//! let calc = nestiq_tools::get_calculator("bc_ptt");
//! let input = TaxCalculationInput::new(800_000.0, true)?;
//! let result = calc.calculate(&input);
//! assert_eq!(result.net_tax, 0.0);
//! ```

use crate::tax::{TaxCalculationInput, TaxCalculationResult};

/// Jurisdiction-specific transfer tax calculation
///
/// Implementations hold no mutable state and never fail: the input type
/// already guarantees a finite, non-negative price.
pub trait TaxCalculator: Send + Sync {
    /// Jurisdiction code this calculator is registered under
    fn code(&self) -> &'static str;

    /// Human-readable region, e.g. "British Columbia"
    fn region_name(&self) -> &'static str;

    /// Name of the tax, e.g. "Property Transfer Tax (PTT)"
    fn tax_name(&self) -> &'static str;

    /// Compute the tiered breakdown, exemption and net tax
    fn calculate(&self, input: &TaxCalculationInput) -> TaxCalculationResult;
}
