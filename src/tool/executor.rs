use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::tool::{ToolDefinition, ToolError, ToolRegistry, ToolResult};

/// A request to run one tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for the call
    pub id: String,
    /// The name of the tool to call
    pub name: String,
    /// The arguments to pass to the tool
    pub arguments: Value,
}

impl ToolCall {
    /// Creates a call with a fresh identifier.
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            arguments,
        }
    }
}

/// The record produced for a single tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResult {
    /// The ID of the call this result is for
    pub call_id: String,
    /// The tool that was called
    pub name: String,
    /// The JSON record returned by the tool
    pub output: Value,
    /// Whether the call failed
    pub is_error: bool,
}

impl ToolCallResult {
    fn from_result(call: &ToolCall, result: ToolResult) -> Self {
        Self {
            call_id: call.id.clone(),
            name: call.name.clone(),
            is_error: result.is_error(),
            output: result.output,
        }
    }
}

/// Executes tool calls against a registry.
///
/// Every failure, including an unknown tool name, comes back as an
/// `{"error": ...}` record rather than an `Err`.
#[derive(Debug, Clone)]
pub struct ToolExecutor {
    registry: Arc<Mutex<ToolRegistry>>,
}

impl ToolExecutor {
    /// Creates a new tool executor with the given registry.
    pub fn new(registry: Arc<Mutex<ToolRegistry>>) -> Self {
        Self { registry }
    }

    /// Returns all tool definitions for advertising to the framework.
    pub async fn get_tool_definitions(&self) -> Vec<ToolDefinition> {
        let registry = self.registry.lock().await;
        registry.to_tool_definitions()
    }

    /// Executes a single tool call.
    pub async fn execute(&self, call: &ToolCall) -> ToolCallResult {
        let registry = self.registry.lock().await;
        let tool = match registry.get(&call.name) {
            Some(tool) => tool.clone(),
            None => {
                warn!(tool = %call.name, "Unknown tool requested");
                return ToolCallResult::from_result(
                    call,
                    ToolResult::error(ToolError::NotFound(call.name.clone()).to_string()),
                );
            }
        };
        drop(registry);

        debug!(tool = %call.name, call_id = %call.id, "Executing tool");

        let result = match tool.execute(call.arguments.clone()).await {
            Ok(result) => result,
            Err(error) => ToolResult::error(error.to_string()),
        };

        ToolCallResult::from_result(call, result)
    }

    /// Executes multiple tool calls one after another.
    pub async fn execute_all(&self, calls: Vec<ToolCall>) -> Vec<ToolCallResult> {
        let mut results = Vec::with_capacity(calls.len());

        for call in calls {
            let result = self.execute(&call).await;
            results.push(result);
        }

        results
    }
}
