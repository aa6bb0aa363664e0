use rand::Rng;
use serde::Serialize;

/// Phrases that make a return reason acceptable.
pub const ELIGIBLE_REASONS: [&str; 5] = [
    "defective",
    "wrong item",
    "not as described",
    "changed mind",
    "damaged",
];

/// Reasons where the shop pays for return shipping.
pub const FREE_SHIPPING_KEYWORDS: [&str; 3] = ["defective", "wrong", "damaged"];

pub const RETURN_WINDOW: &str = "30 days from purchase";

pub const NEXT_STEPS: [&str; 4] = [
    "Pack item in original packaging with all tags attached",
    "Print return label (will be emailed separately)",
    "Drop off at any authorized shipping location",
    "Refund will be processed within 5-7 business days after receipt",
];

const INVALID_REASON: &str = "Invalid return reason. Please provide a valid reason such as \
                              defective, wrong item, changed mind, or damaged.";

/// An approved return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnAuthorization {
    pub success: bool,
    pub ran: String,
    pub order_id: String,
    pub reason: String,
    pub free_return_shipping: bool,
    pub return_window: String,
    pub next_steps: Vec<String>,
    pub message: String,
}

/// A refused return. Carries no RAN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnRejection {
    pub success: bool,
    pub error: String,
}

/// Either outcome of [`initiate_return`], serialized as its inner record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReturnOutcome {
    Authorized(ReturnAuthorization),
    Rejected(ReturnRejection),
}

impl ReturnOutcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized(_))
    }

    /// The Return Authorization Number, if the return was approved.
    pub fn ran(&self) -> Option<&str> {
        match self {
            Self::Authorized(auth) => Some(&auth.ran),
            Self::Rejected(_) => None,
        }
    }
}

/// Checks a free-text reason against [`ELIGIBLE_REASONS`], ignoring case.
pub fn is_eligible(reason: &str) -> bool {
    let reason = reason.to_lowercase();
    ELIGIBLE_REASONS.iter().any(|r| reason.contains(r))
}

pub fn qualifies_for_free_shipping(reason: &str) -> bool {
    let reason = reason.to_lowercase();
    FREE_SHIPPING_KEYWORDS.iter().any(|k| reason.contains(k))
}

/// Starts a return for `order_id`.
///
/// Approved returns get a RAN of the form `RAN-{order_id}-NNNN`.
pub fn initiate_return<R: Rng>(
    rng: &mut R,
    order_id: &str,
    reason: &str,
) -> ReturnOutcome {
    if !is_eligible(reason) {
        return ReturnOutcome::Rejected(ReturnRejection {
            success: false,
            error: INVALID_REASON.to_string(),
        });
    }

    let ran = format!("RAN-{}-{}", order_id, rng.random_range(1000..=9999));
    let message = format!(
        "Return authorized! Your Return Authorization Number is {ran}. \
         A prepaid return label will be emailed to you within 1 hour."
    );

    ReturnOutcome::Authorized(ReturnAuthorization {
        success: true,
        order_id: order_id.to_string(),
        reason: reason.to_string(),
        free_return_shipping: qualifies_for_free_shipping(reason),
        return_window: RETURN_WINDOW.to_string(),
        next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        message,
        ran,
    })
}
