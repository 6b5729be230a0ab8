//! Tool abstraction for agent hosts

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Description of a tool as advertised to an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Human-readable tool name
    pub name: String,
    /// What the tool does and when to use it
    pub description: String,
    /// JSON Schema of the call arguments
    pub parameters: Value,
}

/// A capability an agent can invoke with JSON arguments
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name, description and argument schema
    fn definition(&self) -> ToolDefinition;

    /// Invoke the tool
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidArguments`] if `args` does not match the
    /// parameter schema.
    async fn call(&self, args: Value) -> Result<String, ToolError>;
}
