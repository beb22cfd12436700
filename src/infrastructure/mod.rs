pub mod analytics_repo;
pub mod models;

pub use analytics_repo::DieselAnalyticsRepository;
