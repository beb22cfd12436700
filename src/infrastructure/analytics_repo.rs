use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::sql_types::{Array, BigInt, Text};

use crate::db::{DbConn, DbPool};
use crate::domain::errors::AnalyticsError;
use crate::domain::ports::AnalyticsRepository;
use crate::domain::report::{
    CountryOrderValue, FrequentBuyer, MonthlySales, TopCustomer, UnsoldProduct,
    FULFILLED_STATUSES, TOP_CUSTOMERS_LIMIT,
};

use super::models::{
    CountryOrderValueRow, FrequentBuyerRow, MonthlySalesRow, TopCustomerRow, UnsoldProductRow,
};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for AnalyticsError {
    fn from(e: diesel::result::Error) -> Self {
        match &e {
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand,
                _,
            ) => AnalyticsError::Connection(e.to_string()),
            _ => AnalyticsError::Query(e.to_string()),
        }
    }
}

impl From<r2d2::Error> for AnalyticsError {
    fn from(e: r2d2::Error) -> Self {
        AnalyticsError::Connection(e.to_string())
    }
}

// ── Report queries ────────────────────────────────────────────────────────────
//
// Money is stored as NUMERIC; aggregates are cast to DOUBLE PRECISION so the
// reports serialize as plain JSON numbers.

const TOP_CUSTOMERS_SQL: &str = "
    SELECT c.customer_id, c.name,
           CAST(SUM(oi.quantity * oi.unit_price) AS DOUBLE PRECISION) AS total_spent
    FROM customers c
    JOIN orders o ON c.customer_id = o.customer_id
    JOIN order_items oi ON o.order_id = oi.order_id
    GROUP BY c.customer_id, c.name
    ORDER BY total_spent DESC, c.customer_id ASC
    LIMIT $1";

const MONTHLY_SALES_SQL: &str = "
    SELECT to_char(o.order_date, 'YYYY-MM') AS month,
           CAST(SUM(oi.quantity * oi.unit_price) AS DOUBLE PRECISION) AS total_sales
    FROM orders o
    JOIN order_items oi ON o.order_id = oi.order_id
    WHERE o.status = ANY($1)
    GROUP BY month
    ORDER BY month";

const UNSOLD_PRODUCTS_SQL: &str = "
    SELECT p.product_id, p.name
    FROM products p
    LEFT JOIN order_items oi ON p.product_id = oi.product_id
    WHERE oi.product_id IS NULL
    ORDER BY p.product_id";

const AVERAGE_ORDER_VALUE_SQL: &str = "
    SELECT order_totals.country,
           CAST(AVG(order_totals.order_total) AS DOUBLE PRECISION) AS avg_order_value
    FROM (
        SELECT o.order_id, c.customer_id, c.country,
               SUM(oi.quantity * oi.unit_price) AS order_total
        FROM customers c
        JOIN orders o ON c.customer_id = o.customer_id
        JOIN order_items oi ON o.order_id = oi.order_id
        GROUP BY o.order_id, c.customer_id, c.country
    ) AS order_totals
    GROUP BY order_totals.country
    ORDER BY order_totals.country";

const FREQUENT_BUYERS_SQL: &str = "
    SELECT c.customer_id, c.name, COUNT(o.order_id) AS total_orders
    FROM customers c
    JOIN orders o ON c.customer_id = o.customer_id
    GROUP BY c.customer_id, c.name
    HAVING COUNT(o.order_id) > 1
    ORDER BY total_orders DESC, c.customer_id ASC";

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselAnalyticsRepository {
    pool: DbPool,
}

impl DieselAnalyticsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Check a connection out of the pool for the duration of one report.
    fn session(&self) -> Result<DbConn, AnalyticsError> {
        Ok(self.pool.get()?)
    }
}

impl AnalyticsRepository for DieselAnalyticsRepository {
    fn top_customers(&self) -> Result<Vec<TopCustomer>, AnalyticsError> {
        let mut conn = self.session()?;
        log::debug!("running top-customers report: {}", TOP_CUSTOMERS_SQL);

        let rows = diesel::sql_query(TOP_CUSTOMERS_SQL)
            .bind::<BigInt, _>(TOP_CUSTOMERS_LIMIT)
            .load::<TopCustomerRow>(&mut conn)?;

        Ok(rows.into_iter().map(TopCustomer::from).collect())
    }

    fn monthly_sales(&self) -> Result<Vec<MonthlySales>, AnalyticsError> {
        let mut conn = self.session()?;
        log::debug!("running monthly-sales report: {}", MONTHLY_SALES_SQL);

        let rows = diesel::sql_query(MONTHLY_SALES_SQL)
            .bind::<Array<Text>, _>(&FULFILLED_STATUSES[..])
            .load::<MonthlySalesRow>(&mut conn)?;

        Ok(rows.into_iter().map(MonthlySales::from).collect())
    }

    fn unsold_products(&self) -> Result<Vec<UnsoldProduct>, AnalyticsError> {
        let mut conn = self.session()?;
        log::debug!("running unsold-products report: {}", UNSOLD_PRODUCTS_SQL);

        let rows = diesel::sql_query(UNSOLD_PRODUCTS_SQL).load::<UnsoldProductRow>(&mut conn)?;

        Ok(rows.into_iter().map(UnsoldProduct::from).collect())
    }

    fn average_order_value_by_country(&self) -> Result<Vec<CountryOrderValue>, AnalyticsError> {
        let mut conn = self.session()?;
        log::debug!(
            "running average-order-value report: {}",
            AVERAGE_ORDER_VALUE_SQL
        );

        let rows =
            diesel::sql_query(AVERAGE_ORDER_VALUE_SQL).load::<CountryOrderValueRow>(&mut conn)?;

        Ok(rows.into_iter().map(CountryOrderValue::from).collect())
    }

    fn frequent_buyers(&self) -> Result<Vec<FrequentBuyer>, AnalyticsError> {
        let mut conn = self.session()?;
        log::debug!("running frequent-buyers report: {}", FREQUENT_BUYERS_SQL);

        let rows = diesel::sql_query(FREQUENT_BUYERS_SQL).load::<FrequentBuyerRow>(&mut conn)?;

        Ok(rows.into_iter().map(FrequentBuyer::from).collect())
    }
}
