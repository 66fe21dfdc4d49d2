//! Mortgage Calculator Tool
//!
//! Monthly payment estimate; any argument left out falls back to the
//! configured default.

use async_trait::async_trait;
use serde_json::{json, Value};

use nestiq_config::constants::mortgage::MAX_AMORTIZATION_YEARS;
use nestiq_config::MortgageConfig;
use nestiq_core::format_currency;

use crate::mcp::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};
use crate::mortgage::{estimate, MortgageInput};

/// Mortgage payment calculator tool
pub struct MortgageCalculatorTool {
    defaults: MortgageConfig,
    currency: String,
}

impl MortgageCalculatorTool {
    pub fn new(defaults: MortgageConfig, currency: impl Into<String>) -> Self {
        Self {
            defaults,
            currency: currency.into(),
        }
    }

    fn number_or(input: &Value, field: &str, default: f64) -> Result<f64, ToolError> {
        match input.get(field) {
            None | Some(Value::Null) => Ok(default),
            Some(v) => v
                .as_f64()
                .ok_or_else(|| ToolError::invalid_params(format!("{} must be a number", field))),
        }
    }
}

#[async_trait]
impl Tool for MortgageCalculatorTool {
    fn name(&self) -> &str {
        "calculate_mortgage"
    }

    fn description(&self) -> &str {
        "Estimate the monthly mortgage payment for a home price, down payment and interest rate"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object()
                .property(
                    "purchasePrice",
                    PropertySchema::number("Home price")
                        .with_minimum(0.0)
                        .with_default(self.defaults.purchase_price),
                    false,
                )
                .property(
                    "downPaymentPercent",
                    PropertySchema::number("Down payment (% of price)")
                        .with_range(0.0, 100.0)
                        .with_default(self.defaults.down_payment_percent),
                    false,
                )
                .property(
                    "annualRatePercent",
                    PropertySchema::number("Annual interest rate (%)")
                        .with_range(0.0, 100.0)
                        .with_default(self.defaults.annual_rate_percent),
                    false,
                )
                .property(
                    "amortizationYears",
                    PropertySchema::integer("Amortization period in years")
                        .with_range(1.0, f64::from(MAX_AMORTIZATION_YEARS))
                        .with_default(self.defaults.amortization_years),
                    false,
                ),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let amortization_years = match input.get("amortizationYears") {
            None | Some(Value::Null) => self.defaults.amortization_years,
            Some(v) => v
                .as_u64()
                .and_then(|years| u32::try_from(years).ok())
                .ok_or_else(|| {
                    ToolError::invalid_params("amortizationYears must be a positive integer")
                })?,
        };

        let mortgage_input = MortgageInput {
            purchase_price: Self::number_or(&input, "purchasePrice", self.defaults.purchase_price)?,
            down_payment_percent: Self::number_or(
                &input,
                "downPaymentPercent",
                self.defaults.down_payment_percent,
            )?,
            annual_rate_percent: Self::number_or(
                &input,
                "annualRatePercent",
                self.defaults.annual_rate_percent,
            )?,
            amortization_years,
        };

        let result = estimate(&mortgage_input)?;

        let summary = format!(
            "{} per month on {} over {} years at {}%.",
            format_currency(result.monthly_payment, &self.currency),
            format_currency(result.principal, &self.currency),
            result.amortization_years,
            result.annual_rate_percent,
        );

        let mut output = serde_json::to_value(&result)?;
        output["currency"] = json!(self.currency);
        output["summary"] = json!(summary);

        Ok(ToolOutput::json(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> MortgageCalculatorTool {
        MortgageCalculatorTool::new(MortgageConfig::default(), "CAD")
    }

    #[tokio::test]
    async fn test_defaults_apply() {
        let output = tool().execute(json!({})).await.unwrap();
        let value = output.as_json().unwrap();

        assert_eq!(value["purchasePrice"], 800_000.0);
        assert_eq!(value["downPayment"], 160_000.0);
        assert_eq!(value["amortizationYears"], 25);
        assert_eq!(
            value["summary"],
            "$3,738 per month on $640,000 over 25 years at 4.99%."
        );
    }

    #[tokio::test]
    async fn test_overrides() {
        let output = tool()
            .execute(json!({
                "purchasePrice": 500000,
                "downPaymentPercent": 10,
                "annualRatePercent": 0
            }))
            .await
            .unwrap();
        let value = output.as_json().unwrap();

        assert_eq!(value["principal"], 450_000.0);
        assert_eq!(value["monthlyPayment"], 1_500.0);
        assert_eq!(value["totalInterest"], 0.0);
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let err = tool()
            .execute(json!({"downPaymentPercent": 150}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams(_)));

        let err = tool()
            .execute(json!({"annualRatePercent": "five"}))
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::invalid_params("annualRatePercent must be a number"));
    }

    #[tokio::test]
    async fn test_amortization_out_of_range() {
        for years in [41_u64, 200_000_000, 400_000_000] {
            let err = tool()
                .execute(json!({"amortizationYears": years}))
                .await
                .unwrap_err();
            assert!(matches!(err, ToolError::InvalidParams(_)));
        }

        let output = tool()
            .execute(json!({"amortizationYears": 40}))
            .await
            .unwrap();
        let value = output.as_json().unwrap();
        assert!(value["monthlyPayment"].as_f64().unwrap() > 0.0);
        assert!(value["totalInterest"].as_f64().unwrap() > 0.0);
    }
}
