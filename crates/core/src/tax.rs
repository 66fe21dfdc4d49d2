//! Transfer tax input and result types
//!
//! A `TaxCalculationInput` can only be built from a finite, non-negative
//! purchase price, so calculators never see a price they cannot handle.
//! Deserialization goes through the same check.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Jurisdictions with a dedicated rate table
///
/// Codes outside this set select [`Jurisdiction::Generic`], the flat-rate
/// estimator, so an agent misconfiguration still produces an estimate.
///
/// Serializes as its calculator code; deserializing goes through
/// [`Jurisdiction::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Jurisdiction {
    /// British Columbia Property Transfer Tax
    BritishColumbia,
    /// Ontario Land Transfer Tax
    Ontario,
    /// Alberta Land Title Transfer Fee
    Alberta,
    /// Flat-rate estimate for everything else
    Generic,
}

impl Jurisdiction {
    /// Every jurisdiction with its own table, in registry order
    pub const REGIONAL: [Jurisdiction; 3] = [
        Jurisdiction::BritishColumbia,
        Jurisdiction::Ontario,
        Jurisdiction::Alberta,
    ];

    /// Resolve a configured calculator code; unknown codes map to `Generic`
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "bc_ptt" => Jurisdiction::BritishColumbia,
            "on_ltt" => Jurisdiction::Ontario,
            "ab_ltt" => Jurisdiction::Alberta,
            _ => Jurisdiction::Generic,
        }
    }

    /// Check whether a code selects a regional table
    pub fn is_known_code(code: &str) -> bool {
        Self::from_code(code) != Jurisdiction::Generic
    }

    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::BritishColumbia => "bc_ptt",
            Jurisdiction::Ontario => "on_ltt",
            Jurisdiction::Alberta => "ab_ltt",
            Jurisdiction::Generic => "generic",
        }
    }
}

impl From<String> for Jurisdiction {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Jurisdiction> for String {
    fn from(jurisdiction: Jurisdiction) -> Self {
        jurisdiction.code().to_string()
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Buyer and property attributes for a transfer tax calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTaxCalculationInput")]
pub struct TaxCalculationInput {
    purchase_price: f64,
    is_first_time_buyer: bool,
    is_newly_built: bool,
}

/// Unchecked wire shape of [`TaxCalculationInput`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTaxCalculationInput {
    purchase_price: f64,
    #[serde(default)]
    is_first_time_buyer: bool,
    #[serde(default)]
    is_newly_built: Option<bool>,
}

impl TryFrom<RawTaxCalculationInput> for TaxCalculationInput {
    type Error = Error;

    fn try_from(raw: RawTaxCalculationInput) -> Result<Self> {
        Self::new(raw.purchase_price, raw.is_first_time_buyer)
            .map(|input| input.newly_built(raw.is_newly_built.unwrap_or(false)))
    }
}

impl TaxCalculationInput {
    /// Create an input for a resale property
    ///
    /// Fails with [`Error::InvalidInput`] if the price is negative, NaN or
    /// infinite.
    pub fn new(purchase_price: f64, is_first_time_buyer: bool) -> Result<Self> {
        if !purchase_price.is_finite() {
            return Err(Error::invalid_input(
                "purchasePrice",
                format!("must be a finite number, got {}", purchase_price),
            ));
        }
        if purchase_price < 0.0 {
            return Err(Error::invalid_input(
                "purchasePrice",
                format!("must not be negative, got {}", purchase_price),
            ));
        }

        Ok(Self {
            purchase_price,
            is_first_time_buyer,
            is_newly_built: false,
        })
    }

    /// Mark the property as newly built (or not)
    pub fn newly_built(mut self, is_newly_built: bool) -> Self {
        self.is_newly_built = is_newly_built;
        self
    }

    pub fn purchase_price(&self) -> f64 {
        self.purchase_price
    }

    pub fn is_first_time_buyer(&self) -> bool {
        self.is_first_time_buyer
    }

    pub fn is_newly_built(&self) -> bool {
        self.is_newly_built
    }
}

/// One band of a tax breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTier {
    /// Price range label, e.g. `$200,001 - $2,000,000`
    pub range: String,
    /// Rate label, e.g. `2%`
    pub rate: String,
    /// Tax for this band, rounded to cents
    pub amount: f64,
}

impl TaxTier {
    pub fn new(range: impl Into<String>, rate: impl Into<String>, amount: f64) -> Self {
        Self {
            range: range.into(),
            rate: rate.into(),
            amount,
        }
    }
}

/// Tiered transfer tax breakdown for one jurisdiction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationResult {
    pub total_tax: f64,
    pub exemption: f64,
    /// `total_tax - exemption`, rounded to cents
    pub net_tax: f64,
    /// Bands with a positive amount, lowest price range first
    pub tiers: Vec<TaxTier>,
    pub region_name: String,
    pub tax_name: String,
}

impl TaxCalculationResult {
    /// Sum of all tier amounts
    pub fn tiers_total(&self) -> f64 {
        self.tiers.iter().map(|t| t.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jurisdiction_from_code() {
        assert_eq!(Jurisdiction::from_code("bc_ptt"), Jurisdiction::BritishColumbia);
        assert_eq!(Jurisdiction::from_code(" ON_LTT "), Jurisdiction::Ontario);
        assert_eq!(Jurisdiction::from_code("ab_ltt"), Jurisdiction::Alberta);
        assert_eq!(Jurisdiction::from_code("qc_welcome"), Jurisdiction::Generic);
        assert_eq!(Jurisdiction::from_code(""), Jurisdiction::Generic);

        for j in Jurisdiction::REGIONAL {
            assert_eq!(Jurisdiction::from_code(j.code()), j);
            assert!(Jurisdiction::is_known_code(j.code()));
        }
        assert!(!Jurisdiction::is_known_code("generic"));
    }

    #[test]
    fn test_jurisdiction_serializes_as_code() {
        assert_eq!(
            serde_json::to_value(Jurisdiction::BritishColumbia).unwrap(),
            "bc_ptt"
        );
        assert_eq!(serde_json::to_value(Jurisdiction::Generic).unwrap(), "generic");

        for j in Jurisdiction::REGIONAL {
            let json = serde_json::to_string(&j).unwrap();
            assert_eq!(serde_json::from_str::<Jurisdiction>(&json).unwrap(), j);
        }
        assert_eq!(
            serde_json::from_str::<Jurisdiction>(r#""qc_welcome""#).unwrap(),
            Jurisdiction::Generic
        );
    }

    #[test]
    fn test_input_rejects_bad_prices() {
        assert!(TaxCalculationInput::new(-1.0, false).is_err());
        assert!(TaxCalculationInput::new(f64::NAN, false).is_err());
        assert!(TaxCalculationInput::new(f64::INFINITY, true).is_err());
        assert!(TaxCalculationInput::new(0.0, false).is_ok());
    }

    #[test]
    fn test_input_builder() {
        let input = TaxCalculationInput::new(900_000.0, true)
            .unwrap()
            .newly_built(true);
        assert_eq!(input.purchase_price(), 900_000.0);
        assert!(input.is_first_time_buyer());
        assert!(input.is_newly_built());
    }

    #[test]
    fn test_input_deserialize_validates() {
        let input: TaxCalculationInput =
            serde_json::from_str(r#"{"purchasePrice":500000,"isFirstTimeBuyer":true}"#).unwrap();
        assert!(input.is_first_time_buyer());
        assert!(!input.is_newly_built());

        let err = serde_json::from_str::<TaxCalculationInput>(r#"{"purchasePrice":-5}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = TaxCalculationResult {
            total_tax: 15_000.0,
            exemption: 0.0,
            net_tax: 15_000.0,
            tiers: vec![TaxTier::new("Full purchase price", "1.5% (estimated)", 15_000.0)],
            region_name: "General".to_string(),
            tax_name: "Estimated Transfer Tax".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["totalTax"], 15_000.0);
        assert_eq!(value["netTax"], 15_000.0);
        assert_eq!(value["regionName"], "General");
        assert_eq!(value["tiers"][0]["rate"], "1.5% (estimated)");
        assert_eq!(result.tiers_total(), 15_000.0);
    }
}
