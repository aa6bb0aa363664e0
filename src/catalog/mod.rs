pub mod client;
pub mod lookup;
pub mod tools;

pub use client::{
    Cart, CatalogApi, CatalogClient, CatalogClientBuilder, CatalogProduct, LookupError,
    SearchResponse,
};
#[cfg(test)]
pub use client::MockCatalogApi;
pub use lookup::{
    OrderState, OrderStatus, ProductSearch, ProductSummary, get_order_status, search_product,
};
pub use tools::{OrderStatusTool, SearchProductTool};
