//! Calculators and MCP tools for the realtor chat engine
//!
//! - Jurisdiction-specific transfer tax calculators behind a code lookup
//! - Mortgage payment estimates
//! - MCP-compatible tool wrappers and a registry with per-tool timeouts

pub mod domain_tools;
pub mod mcp;
pub mod mortgage;
pub mod registry;
pub mod tax;

pub use domain_tools::{MortgageCalculatorTool, TransferTaxTool};
pub use mcp::{
    ContentBlock, InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema,
    DEFAULT_TOOL_TIMEOUT_SECS,
};
pub use mortgage::{
    calculate_monthly_payment, calculate_total_interest, estimate, MortgageEstimate,
    MortgageInput,
};
pub use registry::{create_registry, ToolExecutor, ToolRegistry};
pub use tax::{
    calculator_for, get_calculator, AlbertaTitleTransferFee, BcPropertyTransferTax, ExemptionBand,
    GenericEstimate, OntarioLandTransferTax, FIRST_TIME_REBATE_CAP, NEWLY_BUILT_EXEMPTION,
    RESALE_EXEMPTION,
};
