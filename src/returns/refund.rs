use std::ops::Range;

use rand::Rng;
use serde::Serialize;

pub const TAX_RATE: f64 = 0.08;
pub const SHIPPING_COST: f64 = 4.99;
/// Orders at or above this total shipped for free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;
/// Range the simulated order total is drawn from.
pub const BASE_TOTAL_RANGE: Range<f64> = 50.0..500.0;
/// Share of the item total refunded on a partial return.
pub const PARTIAL_REFUND_SHARE: f64 = 0.5;

pub const REFUND_METHOD: &str = "Original payment method";
pub const PROCESSING_TIME: &str = "5-7 business days after receipt";

/// Rounds a money amount to cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Whether `items_to_return` asks for the whole order back.
pub fn is_full_return(items_to_return: &str) -> bool {
    items_to_return.eq_ignore_ascii_case("all")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefundBreakdown {
    pub item_refund: f64,
    pub shipping_refund: f64,
    pub tax_refund: f64,
    pub total_refund: f64,
}

/// Estimated refund for a return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefundEstimate {
    pub success: bool,
    pub order_id: String,
    pub items_to_return: String,
    pub breakdown: RefundBreakdown,
    pub refund_method: String,
    pub processing_time: String,
    pub message: String,
}

impl RefundEstimate {
    /// Computes the refund for an order whose items cost `base_total`.
    ///
    /// Tax is always refunded in full; shipping only on a full return. The
    /// total is rounded from the unrounded parts.
    pub fn from_base_total(order_id: &str, items_to_return: &str, base_total: f64) -> Self {
        let shipping_cost = if base_total < FREE_SHIPPING_THRESHOLD {
            SHIPPING_COST
        } else {
            0.0
        };
        let tax = base_total * TAX_RATE;

        let (item_refund, shipping_refund) = if is_full_return(items_to_return) {
            (base_total, shipping_cost)
        } else {
            (base_total * PARTIAL_REFUND_SHARE, 0.0)
        };

        let total_refund = round_cents(item_refund + shipping_refund + tax);

        Self {
            success: true,
            order_id: order_id.to_string(),
            items_to_return: items_to_return.to_string(),
            breakdown: RefundBreakdown {
                item_refund: round_cents(item_refund),
                shipping_refund: round_cents(shipping_refund),
                tax_refund: round_cents(tax),
                total_refund,
            },
            refund_method: REFUND_METHOD.to_string(),
            processing_time: PROCESSING_TIME.to_string(),
            message: format!("Estimated refund: ${total_refund:.2}"),
        }
    }
}

/// Estimates a refund against a simulated order total.
pub fn calculate_refund_amount<R: Rng>(
    rng: &mut R,
    order_id: &str,
    items_to_return: &str,
) -> RefundEstimate {
    let base_total = rng.random_range(BASE_TOTAL_RANGE);
    RefundEstimate::from_base_total(order_id, items_to_return, base_total)
}
