//! Default values for engine settings
//!
//! Tax rate tables are not here: they are statutory and live next to the
//! calculators. These are tenant-tunable defaults.

/// Transfer tax defaults
pub mod tax {
    /// Calculator code a new agent is provisioned with
    pub const DEFAULT_JURISDICTION: &str = "bc_ptt";

    /// Display currency for amounts
    pub const DEFAULT_CURRENCY: &str = "CAD";
}

/// Mortgage estimate defaults
pub mod mortgage {
    /// Purchase price shown before the visitor names one
    pub const DEFAULT_PURCHASE_PRICE: f64 = 800_000.0;

    pub const DEFAULT_DOWN_PAYMENT_PERCENT: f64 = 20.0;

    pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 4.99;

    pub const DEFAULT_AMORTIZATION_YEARS: u32 = 25;

    /// Longest amortization accepted by settings validation
    pub const MAX_AMORTIZATION_YEARS: u32 = 40;
}

/// Lead qualification thresholds (score is 0-100)
pub mod qualification {
    pub const WARM: u32 = 30;
    pub const HOT: u32 = 60;
    pub const QUALIFIED: u32 = 80;
}
