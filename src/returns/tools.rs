use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::SharedRng;
use super::authorization::initiate_return;
use super::label::generate_return_label;
use super::refund::calculate_refund_amount;
use super::status::check_return_status;
use crate::tool::{Tool, ToolError, ToolResult, parse_args, schema_of};

#[derive(Debug, Deserialize, JsonSchema)]
struct InitiateReturnArgs {
    /// The order ID to return
    order_id: String,
    /// Reason for return, e.g. "defective", "wrong item", "changed mind", "not as described"
    reason: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ReturnLabelArgs {
    /// Return Authorization Number from initiate_return
    ran: String,
    /// The order ID
    order_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ReturnStatusArgs {
    /// Return Authorization Number
    ran: String,
}

fn all_items() -> String {
    "all".to_string()
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RefundArgs {
    /// The order ID
    order_id: String,
    /// Which items to return: "all", or the item names
    #[serde(default = "all_items")]
    items_to_return: String,
}

pub struct InitiateReturnTool {
    rng: SharedRng,
}

impl InitiateReturnTool {
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl Tool for InitiateReturnTool {
    fn name(&self) -> &str {
        "initiate_return"
    }

    fn description(&self) -> &str {
        "Initiate a return for an order and get a Return Authorization Number with next steps"
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<InitiateReturnArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: InitiateReturnArgs = parse_args(args)?;
        let mut rng = self.rng.lock().await;
        let outcome = initiate_return(&mut *rng, &args.order_id, &args.reason);
        debug!(order_id = %args.order_id, authorized = outcome.is_authorized(), "Return requested");
        ToolResult::from_record(&outcome)
    }
}

pub struct GenerateReturnLabelTool {
    rng: SharedRng,
}

impl GenerateReturnLabelTool {
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl Tool for GenerateReturnLabelTool {
    fn name(&self) -> &str {
        "generate_return_label"
    }

    fn description(&self) -> &str {
        "Generate a prepaid return shipping label with tracking information"
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<ReturnLabelArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: ReturnLabelArgs = parse_args(args)?;
        let mut rng = self.rng.lock().await;
        let label = generate_return_label(&mut *rng, &args.ran, &args.order_id);
        ToolResult::from_record(&label)
    }
}

pub struct CheckReturnStatusTool {
    rng: SharedRng,
}

impl CheckReturnStatusTool {
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl Tool for CheckReturnStatusTool {
    fn name(&self) -> &str {
        "check_return_status"
    }

    fn description(&self) -> &str {
        "Check the status of a return and its refund"
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<ReturnStatusArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: ReturnStatusArgs = parse_args(args)?;
        let mut rng = self.rng.lock().await;
        let status = check_return_status(&mut *rng, &args.ran);
        ToolResult::from_record(&status)
    }
}

pub struct CalculateRefundTool {
    rng: SharedRng,
}

impl CalculateRefundTool {
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl Tool for CalculateRefundTool {
    fn name(&self) -> &str {
        "calculate_refund_amount"
    }

    fn description(&self) -> &str {
        "Calculate the refund amount for a return, broken down into items, shipping and tax"
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<RefundArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: RefundArgs = parse_args(args)?;
        let mut rng = self.rng.lock().await;
        let estimate = calculate_refund_amount(&mut *rng, &args.order_id, &args.items_to_return);
        ToolResult::from_record(&estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::returns::seeded_rng;
    use serde_json::json;

    #[tokio::test]
    async fn test_initiate_return_tool() {
        let tool = InitiateReturnTool::new(seeded_rng(1));
        let result = tool
            .execute(json!({ "order_id": "2", "reason": "defective item" }))
            .await
            .unwrap();

        assert!(!result.is_error());
        assert_eq!(result.output["success"], true);
        assert_eq!(result.output["free_return_shipping"], true);
        assert!(result.output["ran"].as_str().unwrap().starts_with("RAN-2-"));
    }

    #[tokio::test]
    async fn test_rejected_return_is_not_a_tool_error() {
        let tool = InitiateReturnTool::new(seeded_rng(1));
        let result = tool
            .execute(json!({ "order_id": "2", "reason": "too slow" }))
            .await
            .unwrap();

        assert_eq!(result.output["success"], false);
        assert!(result.output.get("ran").is_none());
    }

    #[tokio::test]
    async fn test_refund_tool_defaults_to_all_items() {
        let tool = CalculateRefundTool::new(seeded_rng(5));
        let result = tool.execute(json!({ "order_id": "2" })).await.unwrap();

        assert_eq!(result.output["items_to_return"], "all");
        let breakdown = &result.output["breakdown"];
        assert!(breakdown["item_refund"].as_f64().unwrap() >= 50.0);
        assert_eq!(result.output["refund_method"], "Original payment method");
    }

    #[tokio::test]
    async fn test_refund_schema_does_not_require_items() {
        let schema = CalculateRefundTool::new(seeded_rng(5)).parameters_schema();
        assert_eq!(schema["required"], json!(["order_id"]));
    }

    #[tokio::test]
    async fn test_label_and_status_tools() {
        let rng = seeded_rng(9);
        let label = GenerateReturnLabelTool::new(rng.clone())
            .execute(json!({ "ran": "RAN-2-1234", "order_id": "2" }))
            .await
            .unwrap();
        assert_eq!(
            label.output["label_url"],
            "https://returns.example.com/labels/RAN-2-1234.pdf"
        );

        let status = CheckReturnStatusTool::new(rng)
            .execute(json!({ "ran": "RAN-2-1234" }))
            .await
            .unwrap();
        assert_eq!(status.output["ran"], "RAN-2-1234");
        assert!(status.output["message"].as_str().unwrap().starts_with("Return status: "));
    }

    #[tokio::test]
    async fn test_same_seed_same_output() {
        let args = json!({ "order_id": "4", "reason": "damaged" });
        let first = InitiateReturnTool::new(seeded_rng(77)).execute(args.clone()).await.unwrap();
        let second = InitiateReturnTool::new(seeded_rng(77)).execute(args).await.unwrap();
        assert_eq!(first.output, second.output);
    }
}
