//! Tool Registry
//!
//! Holds the calculator tools an agent exposes and runs them under their
//! timeouts. Tools are kept sorted by name so listings are stable.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use nestiq_config::Settings;

use crate::domain_tools::{MortgageCalculatorTool, TransferTaxTool};
use crate::mcp::{Tool, ToolError, ToolOutput, ToolSchema};

/// Tool executor trait
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool by name
    async fn execute(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolError>;

    /// Schemas of every tool, ordered by name
    fn list_tools(&self) -> Vec<ToolSchema>;

    fn get_tool(&self, name: &str) -> Option<ToolSchema>;
}

/// Calculator tools keyed by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Arc::new(tool));
    }

    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Registered tool names in order
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

#[async_trait]
impl ToolExecutor for ToolRegistry {
    /// Validate the arguments, then run the tool under its timeout
    async fn execute(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::not_found(format!("Tool not found: {}", name)))?;

        tool.validate(&arguments)?;

        let timeout_secs = tool.timeout_secs();
        tracing::trace!(tool = name, timeout_secs, "Executing calculator tool");

        tokio::time::timeout(Duration::from_secs(timeout_secs), tool.execute(arguments))
            .await
            .map_err(|_| ToolError::timeout(name, timeout_secs))?
    }

    fn list_tools(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    fn get_tool(&self, name: &str) -> Option<ToolSchema> {
        self.tools.get(name).map(|t| t.schema())
    }
}

/// Create a registry with the tools enabled in settings
pub fn create_registry(settings: &Settings) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    if settings.tools.property_tax {
        registry.register(TransferTaxTool::from_config(&settings.tax));
    }

    if settings.tools.mortgage_calc {
        registry.register(MortgageCalculatorTool::new(
            settings.mortgage.clone(),
            &settings.tax.currency,
        ));
    }

    tracing::debug!(
        tools = ?registry.tool_names(),
        jurisdiction = %settings.tax.default_jurisdiction,
        "Created tool registry"
    );

    registry
}
