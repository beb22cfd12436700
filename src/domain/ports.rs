use super::errors::AnalyticsError;
use super::report::{CountryOrderValue, FrequentBuyer, MonthlySales, TopCustomer, UnsoldProduct};

/// Read-only reporting queries over the commerce dataset.
///
/// Every call runs against its own database session and either returns the
/// complete row set or an error; there are no partial results.
pub trait AnalyticsRepository: Send + Sync + 'static {
    fn top_customers(&self) -> Result<Vec<TopCustomer>, AnalyticsError>;
    fn monthly_sales(&self) -> Result<Vec<MonthlySales>, AnalyticsError>;
    fn unsold_products(&self) -> Result<Vec<UnsoldProduct>, AnalyticsError>;
    fn average_order_value_by_country(&self) -> Result<Vec<CountryOrderValue>, AnalyticsError>;
    fn frequent_buyers(&self) -> Result<Vec<FrequentBuyer>, AnalyticsError>;
}
