//! MCP-compatible tool interface
//!
//! Tools describe their input as a JSON schema and take JSON arguments, so
//! the chat backend can expose them to a model as function calls.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Default timeout for tool execution (seconds)
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 30;

/// JSON-RPC error codes used by MCP
pub mod error_codes {
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
    pub const TIMEOUT: i32 = -32001;
}

/// A callable tool
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name
    fn name(&self) -> &str;

    /// What the tool does, shown to the model
    fn description(&self) -> &str;

    /// Input schema
    fn schema(&self) -> ToolSchema;

    /// Execution timeout
    fn timeout_secs(&self) -> u64 {
        DEFAULT_TOOL_TIMEOUT_SECS
    }

    /// Check arguments against the schema's required properties
    fn validate(&self, input: &Value) -> Result<(), ToolError> {
        let object = input
            .as_object()
            .ok_or_else(|| ToolError::invalid_params("arguments must be a JSON object"))?;

        let schema = self.schema();
        for field in &schema.input_schema.required {
            if object.get(field).map_or(true, Value::is_null) {
                return Err(ToolError::invalid_params(format!("{} is required", field)));
            }
        }
        Ok(())
    }

    /// Run the tool
    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError>;
}

/// Tool description advertised to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

/// JSON schema of a tool's arguments (always an object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl InputSchema {
    /// Empty object schema
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Add a property
    pub fn property(mut self, name: &str, schema: PropertySchema, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }
}

/// Schema of a single argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub prop_type: String,
    pub description: String,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl PropertySchema {
    fn typed(prop_type: &str, description: &str) -> Self {
        Self {
            prop_type: prop_type.to_string(),
            description: description.to_string(),
            enum_values: None,
            minimum: None,
            maximum: None,
            default: None,
        }
    }

    pub fn string(description: &str) -> Self {
        Self::typed("string", description)
    }

    pub fn number(description: &str) -> Self {
        Self::typed("number", description)
    }

    pub fn integer(description: &str) -> Self {
        Self::typed("integer", description)
    }

    pub fn boolean(description: &str) -> Self {
        Self::typed("boolean", description)
    }

    /// String restricted to a set of values
    pub fn enum_type(description: &str, values: Vec<String>) -> Self {
        Self {
            enum_values: Some(values),
            ..Self::typed("string", description)
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.minimum = Some(min);
        self.maximum = Some(max);
        self
    }

    pub fn with_minimum(mut self, min: f64) -> Self {
        self.minimum = Some(min);
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Content returned by a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
    Json { data: Value },
}

/// Tool result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutput {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub is_error: bool,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn json(data: Value) -> Self {
        Self {
            content: vec![ContentBlock::Json { data }],
            is_error: false,
        }
    }

    /// First JSON block, if any
    pub fn as_json(&self) -> Option<&Value> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Json { data } => Some(data),
            ContentBlock::Text { .. } => None,
        })
    }
}

/// Tool failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Tool '{tool}' timed out after {secs}s")]
    Timeout { tool: String, secs: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn timeout(tool: impl Into<String>, secs: u64) -> Self {
        Self::Timeout {
            tool: tool.into(),
            secs,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// JSON-RPC error code
    pub fn code(&self) -> i32 {
        match self {
            ToolError::InvalidParams(_) => error_codes::INVALID_PARAMS,
            ToolError::NotFound(_) => error_codes::METHOD_NOT_FOUND,
            ToolError::Timeout { .. } => error_codes::TIMEOUT,
            ToolError::Internal(_) => error_codes::INTERNAL_ERROR,
        }
    }
}

impl From<nestiq_core::Error> for ToolError {
    fn from(err: nestiq_core::Error) -> Self {
        ToolError::InvalidParams(err.to_string())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_schema_serializes_as_json_schema() {
        let schema = InputSchema::object()
            .property("price", PropertySchema::number("Price").with_minimum(0.0), true)
            .property("code", PropertySchema::enum_type("Code", vec!["a".into()]), false);

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["type"], "object");
        assert_eq!(value["properties"]["price"]["type"], "number");
        assert_eq!(value["properties"]["price"]["minimum"], 0.0);
        assert_eq!(value["properties"]["code"]["enum"], json!(["a"]));
        assert_eq!(value["required"], json!(["price"]));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ToolError::invalid_params("x").code(), -32602);
        assert_eq!(ToolError::not_found("x").code(), -32601);
        assert_eq!(ToolError::timeout("slow", 5).to_string(), "Tool 'slow' timed out after 5s");

        let core = nestiq_core::Error::invalid_input("purchasePrice", "must not be negative");
        assert!(matches!(ToolError::from(core), ToolError::InvalidParams(_)));
    }

    #[test]
    fn test_output_json_accessor() {
        let output = ToolOutput::json(json!({"ok": true}));
        assert_eq!(output.as_json().unwrap()["ok"], true);
        assert!(ToolOutput::text("hi").as_json().is_none());
    }
}
