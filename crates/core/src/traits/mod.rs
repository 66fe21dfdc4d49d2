//! Core traits for the engine
//!
//! ```text
//! Calculators:
//!   - TaxCalculator: jurisdiction-specific transfer tax breakdown
//! ```

mod calculator;

pub use calculator::TaxCalculator;
