//! Synthetic returns and refunds.
//!
//! Nothing here calls out to a real system: authorization numbers, tracking
//! numbers, status stages and order totals are all drawn from a random
//! generator that callers pass in.

pub mod authorization;
pub mod label;
pub mod refund;
pub mod status;
pub mod tools;

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;

pub use authorization::{
    ReturnAuthorization, ReturnOutcome, ReturnRejection, initiate_return, is_eligible,
};
pub use label::{ReturnLabel, generate_return_label};
pub use refund::{RefundBreakdown, RefundEstimate, calculate_refund_amount};
pub use status::{ReturnStage, ReturnStatus, check_return_status};
pub use tools::{
    CalculateRefundTool, CheckReturnStatusTool, GenerateReturnLabelTool, InitiateReturnTool,
};

/// Random generator shared by the returns tools.
pub type SharedRng = Arc<Mutex<StdRng>>;

/// A generator seeded from the operating system.
pub fn os_rng() -> SharedRng {
    Arc::new(Mutex::new(StdRng::from_os_rng()))
}

/// A generator that replays the same values for the same seed.
pub fn seeded_rng(seed: u64) -> SharedRng {
    Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))
}
