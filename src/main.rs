//! Demo harness: runs every support tool once with sample inputs.
//!
//! ```bash
//! cargo run -- --pretty
//! RUST_LOG=support_tools=debug cargo run -- --seed 42
//! ```

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use support_tools::catalog::client::BASE_URL_ENV;
use support_tools::{
    CatalogClientBuilder, ToolCall, ToolExecutor, os_rng, seeded_rng, support_registry,
};

#[derive(Debug, Parser)]
#[command(name = "support-tools", about = "Call each customer-support tool with sample data")]
struct Args {
    /// Catalog API host
    #[arg(long, env = BASE_URL_ENV)]
    base_url: Option<String>,

    /// Request timeout for catalog lookups, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Seed for the synthetic returns data
    #[arg(long)]
    seed: Option<u64>,

    /// Indent JSON results
    #[arg(long)]
    pretty: bool,
}

struct DemoStep {
    title: &'static str,
    query: &'static str,
    tool: &'static str,
    arguments: Value,
}

fn demo_steps() -> Vec<DemoStep> {
    vec![
        DemoStep {
            title: "Order Status",
            query: "Get status for order #1",
            tool: "get_order_status",
            arguments: json!({ "order_id": "1" }),
        },
        DemoStep {
            title: "Product Search",
            query: "Search for 'phone'",
            tool: "search_product",
            arguments: json!({ "query": "phone" }),
        },
        DemoStep {
            title: "Initiate Return",
            query: "Initiate return for order #2 (reason: defective)",
            tool: "initiate_return",
            arguments: json!({ "order_id": "2", "reason": "defective item" }),
        },
        DemoStep {
            title: "Generate Return Label",
            query: "Generate label for RAN-2-1234",
            tool: "generate_return_label",
            arguments: json!({ "ran": "RAN-2-1234", "order_id": "2" }),
        },
        DemoStep {
            title: "Check Return Status",
            query: "Check status for RAN-2-1234",
            tool: "check_return_status",
            arguments: json!({ "ran": "RAN-2-1234" }),
        },
        DemoStep {
            title: "Calculate Refund Amount",
            query: "Calculate refund for order #2 (all items)",
            tool: "calculate_refund_amount",
            arguments: json!({ "order_id": "2", "items_to_return": "all" }),
        },
    ]
}

fn render(value: &Value, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    } else {
        value.to_string()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut builder = CatalogClientBuilder::new();
    if let Some(base_url) = args.base_url {
        builder = builder.with_base_url(base_url);
    }
    if let Some(secs) = args.timeout_secs {
        builder = builder.with_timeout(Duration::from_secs(secs));
    }
    let catalog = builder.build()?;
    info!(base_url = catalog.base_url(), "Catalog client ready");

    let rng = match args.seed {
        Some(seed) => seeded_rng(seed),
        None => os_rng(),
    };
    let registry = support_registry(Arc::new(catalog), rng);
    let executor = ToolExecutor::new(Arc::new(Mutex::new(registry)));

    println!("{}", "=".repeat(60));
    println!("   CUSTOMER SUPPORT TOOLS - Quick Test");
    println!("{}", "=".repeat(60));
    println!("\nTesting all tools with sample data...\n");

    let mut failures = 0;
    for (index, step) in demo_steps().into_iter().enumerate() {
        println!("{}. Testing {} Tool", index + 1, step.title);
        println!("{}", "-".repeat(40));
        println!("Query: {}", step.query);

        let result = executor.execute(&ToolCall::new(step.tool, step.arguments)).await;
        if result.is_error {
            failures += 1;
        }
        println!("Result: {}", render(&result.output, args.pretty));
        println!();
    }

    println!("{}", "=".repeat(60));
    if failures == 0 {
        println!("All tools tested successfully!");
    } else {
        println!("All tools ran; {failures} returned an error record.");
    }
    println!("{}", "=".repeat(60));

    Ok(())
}
