//! Order and product lookups shaped for an agent.

use serde::Serialize;
use serde_json::Value;

use super::client::{Cart, CatalogApi, CatalogProduct, LookupError, SearchResponse};

/// How many cart items or search hits a record carries.
pub const MAX_LISTED: usize = 3;

/// Fulfilment state reported for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderState {
    Shipped,
    Processing,
}

/// Status record for a single order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStatus {
    pub order_id: String,
    pub status: OrderState,
    pub total: Value,
    pub items_count: usize,
    pub items: Vec<Value>,
    pub tracking_number: Option<String>,
}

impl OrderStatus {
    /// Shapes a cart into an order status.
    ///
    /// Even order numbers count as shipped and get a tracking number.
    pub fn from_cart(order_id: &str, number: i64, cart: Cart) -> Self {
        let shipped = number.rem_euclid(2) == 0;
        let items_count = cart.products.len();

        Self {
            order_id: order_id.to_string(),
            status: if shipped {
                OrderState::Shipped
            } else {
                OrderState::Processing
            },
            total: cart.total,
            items_count,
            items: cart.products.into_iter().take(MAX_LISTED).collect(),
            tracking_number: shipped.then(|| format!("TRK{order_id}9876")),
        }
    }
}

/// One product in a search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub id: Value,
    pub name: Value,
    pub price: Value,
    pub stock: Value,
    pub rating: Value,
}

impl From<CatalogProduct> for ProductSummary {
    fn from(product: CatalogProduct) -> Self {
        Self {
            id: product.id,
            name: product.title,
            price: product.price,
            stock: product.stock,
            rating: product.rating,
        }
    }
}

/// Result record for a product search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSearch {
    pub found: usize,
    pub products: Vec<ProductSummary>,
}

impl From<SearchResponse> for ProductSearch {
    fn from(response: SearchResponse) -> Self {
        let products: Vec<ProductSummary> = response
            .products
            .into_iter()
            .take(MAX_LISTED)
            .map(ProductSummary::from)
            .collect();

        Self {
            found: products.len(),
            products,
        }
    }
}

/// Parses an order id, ignoring surrounding whitespace.
pub fn parse_order_id(order_id: &str) -> Result<i64, LookupError> {
    order_id
        .trim()
        .parse()
        .map_err(|_| LookupError::InvalidOrderId(order_id.to_string()))
}

/// Looks up an order. The id is validated before any request is sent.
pub async fn get_order_status(
    api: &dyn CatalogApi,
    order_id: &str,
) -> Result<OrderStatus, LookupError> {
    let number = parse_order_id(order_id)?;
    let cart = api.fetch_cart(number).await?;
    Ok(OrderStatus::from_cart(order_id.trim(), number, cart))
}

/// Searches the catalog and keeps the top matches.
pub async fn search_product(
    api: &dyn CatalogApi,
    query: &str,
) -> Result<ProductSearch, LookupError> {
    let response = api.search_products(query).await?;
    Ok(ProductSearch::from(response))
}
