use std::sync::Arc;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::client::CatalogApi;
use super::lookup::{get_order_status, search_product};
use crate::tool::{Tool, ToolError, ToolResult, parse_args, schema_of};

#[derive(Debug, Deserialize, JsonSchema)]
struct OrderStatusArgs {
    /// The order ID to look up (a cart ID in the catalog)
    order_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchProductArgs {
    /// Search term for the product
    query: String,
}

/// Tool wrapper around [`get_order_status`].
///
/// Lookup failures are returned as `{"error": ...}` records.
pub struct OrderStatusTool {
    api: Arc<dyn CatalogApi>,
}

impl OrderStatusTool {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for OrderStatusTool {
    fn name(&self) -> &str {
        "get_order_status"
    }

    fn description(&self) -> &str {
        "Check order status and details, including items, total and tracking number"
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<OrderStatusArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: OrderStatusArgs = parse_args(args)?;

        match get_order_status(self.api.as_ref(), &args.order_id).await {
            Ok(status) => ToolResult::from_record(&status),
            Err(error) => {
                warn!(order_id = %args.order_id, %error, "Order lookup failed");
                Ok(ToolResult::error(error.to_string()))
            }
        }
    }
}

/// Tool wrapper around [`search_product`].
pub struct SearchProductTool {
    api: Arc<dyn CatalogApi>,
}

impl SearchProductTool {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for SearchProductTool {
    fn name(&self) -> &str {
        "search_product"
    }

    fn description(&self) -> &str {
        "Search for products by name or keyword and return the top matches"
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<SearchProductArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: SearchProductArgs = parse_args(args)?;

        match search_product(self.api.as_ref(), &args.query).await {
            Ok(search) => ToolResult::from_record(&search),
            Err(error) => {
                warn!(query = %args.query, %error, "Product search failed");
                Ok(ToolResult::error(error.to_string()))
            }
        }
    }
}
