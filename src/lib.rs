//! # Support Tools
//!
//! Customer-support tools meant to be registered with a conversational agent
//! framework: order lookup, product search, and a set of synthetic returns and
//! refunds tools.
//!
//! ## Tools
//!
//! - **`get_order_status`**: cart lookup against the catalog API, reshaped into an order status
//! - **`search_product`**: top three catalog matches for a query
//! - **`initiate_return`**: return authorization for an eligible reason
//! - **`generate_return_label`**: prepaid label and tracking number
//! - **`check_return_status`**: current stage of a return
//! - **`calculate_refund_amount`**: refund breakdown for a full or partial return
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use support_tools::prelude::*;
//! use std::sync::Arc;
//! use tokio::sync::Mutex;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = CatalogClientBuilder::new().build()?;
//!     let registry = support_registry(Arc::new(catalog), os_rng());
//!     let executor = ToolExecutor::new(Arc::new(Mutex::new(registry)));
//!
//!     let call = ToolCall::new("search_product", serde_json::json!({ "query": "phone" }));
//!     let result = executor.execute(&call).await;
//!     println!("{}", result.output);
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod returns;
pub mod tool;

// Re-exports for convenient usage
pub use catalog::{CatalogApi, CatalogClient, CatalogClientBuilder, LookupError};
pub use error::SupportError;
pub use returns::{SharedRng, os_rng, seeded_rng};
pub use tool::{
    DynTool, Tool, ToolCall, ToolCallResult, ToolDefinition, ToolError, ToolExecutor,
    ToolRegistry, ToolResult, support_registry,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::catalog::{CatalogApi, CatalogClientBuilder};
    pub use crate::returns::{os_rng, seeded_rng};
    pub use crate::tool::{Tool, ToolCall, ToolExecutor, ToolRegistry, ToolResult, support_registry};
}
