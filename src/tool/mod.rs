pub mod registry;
pub mod executor;

pub use registry::{ToolRegistry, support_registry};
pub use executor::{ToolExecutor, ToolCall, ToolCallResult};
pub use tool_types::{ToolDefinition, ToolResult, ToolError};
pub use tool_trait::{Tool, DynTool, parse_args, schema_of};

mod tool_types {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    /// Definition of a tool as advertised to an agent framework.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ToolDefinition {
        /// The name of the tool
        pub name: String,
        /// A description of what the tool does
        pub description: String,
        /// JSON Schema for the tool's input parameters
        pub input_schema: Value,
    }

    /// The result of executing a tool.
    #[derive(Debug, Clone)]
    pub struct ToolResult {
        /// The JSON record returned to the caller
        pub output: Value,
        /// Set when the record describes a failure
        pub error: Option<String>,
    }

    impl ToolResult {
        /// Creates a successful result.
        pub fn ok(output: Value) -> Self {
            Self {
                output,
                error: None,
            }
        }

        /// Serializes a typed record into a successful result.
        pub fn from_record<T: Serialize>(record: &T) -> Result<Self, ToolError> {
            serde_json::to_value(record)
                .map(Self::ok)
                .map_err(|e| ToolError::ExecutionFailed(e.to_string()))
        }

        /// Creates an `{"error": ...}` record.
        pub fn error(error: impl Into<String>) -> Self {
            let error = error.into();
            Self {
                output: serde_json::json!({ "error": error }),
                error: Some(error),
            }
        }

        /// Returns whether this result describes a failure.
        pub fn is_error(&self) -> bool {
            self.error.is_some()
        }
    }

    /// Errors that can occur when executing a tool.
    #[derive(Debug, thiserror::Error)]
    pub enum ToolError {
        #[error("Invalid arguments: {0}")]
        InvalidArguments(String),
        #[error("Execution failed: {0}")]
        ExecutionFailed(String),
        #[error("Tool not found: {0}")]
        NotFound(String),
    }
}

mod tool_trait {
    use super::tool_types::{ToolDefinition, ToolResult, ToolError};
    use async_trait::async_trait;
    use schemars::JsonSchema;
    use serde::de::DeserializeOwned;
    use serde_json::Value;
    use std::sync::Arc;

    /// Trait representing a tool that can be called by the agent.
    #[async_trait]
    pub trait Tool: Send + Sync {
        /// Returns the name of the tool.
        fn name(&self) -> &str;
        /// Returns a description of what the tool does.
        fn description(&self) -> &str;
        /// Returns the JSON Schema for the tool's input parameters.
        fn parameters_schema(&self) -> Value;

        /// Executes the tool with the given arguments.
        async fn execute(&self, args: Value) -> Result<ToolResult, ToolError>;

        /// Converts the tool to its definition.
        fn to_definition(&self) -> ToolDefinition {
            ToolDefinition {
                name: self.name().to_string(),
                description: self.description().to_string(),
                input_schema: self.parameters_schema(),
            }
        }
    }

    /// A type alias for a dynamic tool reference.
    pub type DynTool = Arc<dyn Tool>;

    /// Decodes tool arguments into their typed form.
    pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
        serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))
    }

    /// Builds the parameters schema for a typed argument struct.
    pub fn schema_of<T: JsonSchema>() -> Value {
        serde_json::to_value(schemars::schema_for!(T)).unwrap_or_else(|_| {
            serde_json::json!({ "type": "object" })
        })
    }
}
