//! Calculator lookup by jurisdiction code

use nestiq_core::{Jurisdiction, TaxCalculator};

use super::{
    AlbertaTitleTransferFee, BcPropertyTransferTax, GenericEstimate, OntarioLandTransferTax,
};

/// Calculator for a jurisdiction
pub fn calculator_for(jurisdiction: Jurisdiction) -> &'static dyn TaxCalculator {
    match jurisdiction {
        Jurisdiction::BritishColumbia => &BcPropertyTransferTax,
        Jurisdiction::Ontario => &OntarioLandTransferTax,
        Jurisdiction::Alberta => &AlbertaTitleTransferFee,
        Jurisdiction::Generic => &GenericEstimate,
    }
}

/// Calculator for a configured jurisdiction code
///
/// Unknown codes get the generic estimate, so a lookup never fails.
pub fn get_calculator(code: &str) -> &'static dyn TaxCalculator {
    let jurisdiction = Jurisdiction::from_code(code);
    if jurisdiction == Jurisdiction::Generic {
        tracing::debug!(code, "No tax table for jurisdiction, using generic estimate");
    }
    calculator_for(jurisdiction)
}
