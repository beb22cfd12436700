//! Report shapes returned by the analytics queries.
//!
//! Each endpoint has its own record type; field names are the JSON keys
//! clients see.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How many customers the spending leaderboard returns.
pub const TOP_CUSTOMERS_LIMIT: i64 = 5;

/// Order statuses counted as fulfilled by the monthly sales report.
pub const FULFILLED_STATUSES: [&str; 2] = ["Shipped", "Delivered"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopCustomer {
    pub customer_id: i32,
    pub name: String,
    /// Sum of `quantity * unit_price` over all of the customer's order items.
    pub total_spent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlySales {
    /// Calendar month formatted as `YYYY-MM`.
    #[schema(example = "2024-03")]
    pub month: String,
    pub total_sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UnsoldProduct {
    pub product_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryOrderValue {
    pub country: String,
    /// Mean of the per-order totals of orders placed from this country.
    pub avg_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FrequentBuyer {
    pub customer_id: i32,
    pub name: String,
    pub total_orders: i64,
}
