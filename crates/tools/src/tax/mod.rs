//! Transfer tax calculators
//!
//! One pure calculator per jurisdiction behind [`nestiq_core::TaxCalculator`],
//! selected by code through [`get_calculator`]:
//!
//! | code     | calculator                  |
//! |----------|-----------------------------|
//! | `bc_ptt` | [`BcPropertyTransferTax`]   |
//! | `on_ltt` | [`OntarioLandTransferTax`]  |
//! | `ab_ltt` | [`AlbertaTitleTransferFee`] |
//! | other    | [`GenericEstimate`]         |

mod ab_ltt;
mod bc_ptt;
mod brackets;
mod generic;
mod on_ltt;
mod registry;

pub use ab_ltt::AlbertaTitleTransferFee;
pub use bc_ptt::{BcPropertyTransferTax, ExemptionBand, NEWLY_BUILT_EXEMPTION, RESALE_EXEMPTION};
pub use generic::GenericEstimate;
pub use on_ltt::{OntarioLandTransferTax, FIRST_TIME_REBATE_CAP};
pub use registry::{calculator_for, get_calculator};
