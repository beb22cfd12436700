//! OpenAPI documentation for the analytics API.

use utoipa::OpenApi;

use crate::domain::report::{
    CountryOrderValue, FrequentBuyer, MonthlySales, TopCustomer, UnsoldProduct,
};
use crate::handlers::analytics;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commerce Analytics API",
        version = "0.1.0",
        description = "Read-only reports over the customers, products, orders and order items tables."
    ),
    paths(
        analytics::top_customers,
        analytics::monthly_sales,
        analytics::unsold_products,
        analytics::average_order_value,
        analytics::frequent_buyers,
    ),
    components(schemas(
        TopCustomer,
        MonthlySales,
        UnsoldProduct,
        CountryOrderValue,
        FrequentBuyer,
    )),
    tags(
        (name = "analytics", description = "Aggregate sales reports")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_report_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/analytics/top-customers",
            "/analytics/monthly-sales",
            "/analytics/unsold-products",
            "/analytics/average-order-value",
            "/analytics/frequent-buyers",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn document_has_no_write_operations() {
        let doc = ApiDoc::openapi();
        for item in doc.paths.paths.values() {
            assert!(item.post.is_none());
            assert!(item.put.is_none());
            assert!(item.delete.is_none());
        }
    }
}
