use std::sync::Arc;

use crate::domain::errors::AnalyticsError;
use crate::domain::ports::AnalyticsRepository;
use crate::domain::report::{
    CountryOrderValue, FrequentBuyer, MonthlySales, TopCustomer, UnsoldProduct,
};

/// Shared entry point for the analytics reports.
///
/// Cloning is cheap; every clone reads through the same repository.
#[derive(Clone)]
pub struct AnalyticsService {
    repo: Arc<dyn AnalyticsRepository>,
}

impl AnalyticsService {
    pub fn new<R: AnalyticsRepository>(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    pub fn top_customers(&self) -> Result<Vec<TopCustomer>, AnalyticsError> {
        self.repo.top_customers()
    }

    pub fn monthly_sales(&self) -> Result<Vec<MonthlySales>, AnalyticsError> {
        self.repo.monthly_sales()
    }

    pub fn unsold_products(&self) -> Result<Vec<UnsoldProduct>, AnalyticsError> {
        self.repo.unsold_products()
    }

    pub fn average_order_value_by_country(
        &self,
    ) -> Result<Vec<CountryOrderValue>, AnalyticsError> {
        self.repo.average_order_value_by_country()
    }

    pub fn frequent_buyers(&self) -> Result<Vec<FrequentBuyer>, AnalyticsError> {
        self.repo.frequent_buyers()
    }
}
