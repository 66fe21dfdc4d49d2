//! Domain Tools
//!
//! Calculator tools the chat backend exposes to the model:
//! - `transfer_tax`: tiered transfer tax breakdown
//! - `mortgage`: monthly payment estimate

mod mortgage;
mod transfer_tax;

pub use mortgage::MortgageCalculatorTool;
pub use transfer_tax::TransferTaxTool;
