//! Transfer Tax Tool
//!
//! Tiered transfer tax breakdown for a purchase, in the agent's configured
//! jurisdiction unless the call names another.

use async_trait::async_trait;
use serde_json::{json, Value};

use nestiq_config::TaxConfig;
use nestiq_core::{format_currency, Jurisdiction, TaxCalculationInput, TaxCalculationResult};

use crate::mcp::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};
use crate::tax::get_calculator;

/// Transfer tax calculator tool
pub struct TransferTaxTool {
    default_jurisdiction: String,
    currency: String,
}

impl TransferTaxTool {
    pub fn new(default_jurisdiction: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            default_jurisdiction: default_jurisdiction.into(),
            currency: currency.into(),
        }
    }

    pub fn from_config(config: &TaxConfig) -> Self {
        Self::new(&config.default_jurisdiction, &config.currency)
    }

    fn flag(input: &Value, field: &str) -> Result<bool, ToolError> {
        match input.get(field) {
            None | Some(Value::Null) => Ok(false),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| ToolError::invalid_params(format!("{} must be a boolean", field))),
        }
    }

    fn summary(&self, result: &TaxCalculationResult) -> String {
        let total = format_currency(result.total_tax, &self.currency);
        if result.exemption > 0.0 {
            format!(
                "{} in {}: {} before a {} first-time buyer exemption, {} payable.",
                result.tax_name,
                result.region_name,
                total,
                format_currency(result.exemption, &self.currency),
                format_currency(result.net_tax, &self.currency),
            )
        } else {
            format!(
                "{} in {}: {} payable.",
                result.tax_name, result.region_name, total
            )
        }
    }
}

#[async_trait]
impl Tool for TransferTaxTool {
    fn name(&self) -> &str {
        "calculate_transfer_tax"
    }

    fn description(&self) -> &str {
        "Calculate the property transfer tax on a home purchase with a tier-by-tier breakdown and any first-time buyer exemption"
    }

    fn schema(&self) -> ToolSchema {
        let codes = Jurisdiction::REGIONAL
            .iter()
            .map(|j| j.code().to_string())
            .collect();

        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object()
                .property(
                    "purchasePrice",
                    PropertySchema::number("Purchase price of the property").with_minimum(0.0),
                    true,
                )
                .property(
                    "isFirstTimeBuyer",
                    PropertySchema::boolean("Whether the buyer has never owned a home")
                        .with_default(false),
                    false,
                )
                .property(
                    "isNewlyBuilt",
                    PropertySchema::boolean("Whether the property is newly built")
                        .with_default(false),
                    false,
                )
                .property(
                    "jurisdiction",
                    PropertySchema::enum_type("Jurisdiction code", codes)
                        .with_default(self.default_jurisdiction.as_str()),
                    false,
                ),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let purchase_price = match input.get("purchasePrice") {
            None | Some(Value::Null) => {
                return Err(ToolError::invalid_params("purchasePrice is required"))
            }
            Some(v) => v
                .as_f64()
                .ok_or_else(|| ToolError::invalid_params("purchasePrice must be a number"))?,
        };

        let is_first_time_buyer = Self::flag(&input, "isFirstTimeBuyer")?;
        let is_newly_built = Self::flag(&input, "isNewlyBuilt")?;

        let code = match input.get("jurisdiction") {
            None | Some(Value::Null) => self.default_jurisdiction.as_str(),
            Some(v) => v
                .as_str()
                .ok_or_else(|| ToolError::invalid_params("jurisdiction must be a string"))?,
        };

        let tax_input =
            TaxCalculationInput::new(purchase_price, is_first_time_buyer)?.newly_built(is_newly_built);

        let calculator = get_calculator(code);
        let result = calculator.calculate(&tax_input);

        let mut output = serde_json::to_value(&result)?;
        output["jurisdiction"] = json!(calculator.code());
        output["summary"] = json!(self.summary(&result));

        Ok(ToolOutput::json(output))
    }
}
