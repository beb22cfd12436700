use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::application::analytics_service::AnalyticsService;
use crate::domain::errors::AnalyticsError;
use crate::domain::report::{
    CountryOrderValue, FrequentBuyer, MonthlySales, TopCustomer, UnsoldProduct,
};
use crate::errors::AppError;

/// Run one report on the blocking pool and serialize its rows as a JSON array.
async fn run_report<T, F>(
    service: web::Data<AnalyticsService>,
    report: F,
) -> Result<HttpResponse, AppError>
where
    T: Serialize + Send + 'static,
    F: FnOnce(&AnalyticsService) -> Result<Vec<T>, AnalyticsError> + Send + 'static,
{
    let rows = web::block(move || report(service.get_ref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// Top Customers by Spending
///
/// Returns the top 5 customers ranked by total spending on orders.
#[utoipa::path(
    get,
    path = "/analytics/top-customers",
    responses(
        (status = 200, description = "Customers ranked by total spent", body = [TopCustomer]),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "analytics"
)]
pub async fn top_customers(
    service: web::Data<AnalyticsService>,
) -> Result<HttpResponse, AppError> {
    run_report(service, AnalyticsService::top_customers).await
}

/// Monthly Sales Report
///
/// Shows monthly sales totals for only 'Shipped' or 'Delivered' orders.
#[utoipa::path(
    get,
    path = "/analytics/monthly-sales",
    responses(
        (status = 200, description = "Sales totals per month, oldest first", body = [MonthlySales]),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "analytics"
)]
pub async fn monthly_sales(
    service: web::Data<AnalyticsService>,
) -> Result<HttpResponse, AppError> {
    run_report(service, AnalyticsService::monthly_sales).await
}

/// Products Never Ordered
///
/// Lists products that have never been included in any order.
#[utoipa::path(
    get,
    path = "/analytics/unsold-products",
    responses(
        (status = 200, description = "Products without order items", body = [UnsoldProduct]),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "analytics"
)]
pub async fn unsold_products(
    service: web::Data<AnalyticsService>,
) -> Result<HttpResponse, AppError> {
    run_report(service, AnalyticsService::unsold_products).await
}

/// Average Order Value by Country
///
/// Calculates the average order value grouped by customer country.
#[utoipa::path(
    get,
    path = "/analytics/average-order-value",
    responses(
        (status = 200, description = "Average order value per country", body = [CountryOrderValue]),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "analytics"
)]
pub async fn average_order_value(
    service: web::Data<AnalyticsService>,
) -> Result<HttpResponse, AppError> {
    run_report(service, AnalyticsService::average_order_value_by_country).await
}

/// Frequent Buyers
///
/// Lists customers who have placed more than one order.
#[utoipa::path(
    get,
    path = "/analytics/frequent-buyers",
    responses(
        (status = 200, description = "Customers with more than one order", body = [FrequentBuyer]),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "analytics"
)]
pub async fn frequent_buyers(
    service: web::Data<AnalyticsService>,
) -> Result<HttpResponse, AppError> {
    run_report(service, AnalyticsService::frequent_buyers).await
}
