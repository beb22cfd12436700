use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Integer, Text};

use crate::domain::report::{
    CountryOrderValue, FrequentBuyer, MonthlySales, TopCustomer, UnsoldProduct,
};

// Row shapes for the raw report queries. Column names must match the
// aliases used in the SQL.

#[derive(Debug, QueryableByName)]
pub struct TopCustomerRow {
    #[diesel(sql_type = Integer)]
    pub customer_id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Double)]
    pub total_spent: f64,
}

#[derive(Debug, QueryableByName)]
pub struct MonthlySalesRow {
    #[diesel(sql_type = Text)]
    pub month: String,
    #[diesel(sql_type = Double)]
    pub total_sales: f64,
}

#[derive(Debug, QueryableByName)]
pub struct UnsoldProductRow {
    #[diesel(sql_type = Integer)]
    pub product_id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
}

#[derive(Debug, QueryableByName)]
pub struct CountryOrderValueRow {
    #[diesel(sql_type = Text)]
    pub country: String,
    #[diesel(sql_type = Double)]
    pub avg_order_value: f64,
}

#[derive(Debug, QueryableByName)]
pub struct FrequentBuyerRow {
    #[diesel(sql_type = Integer)]
    pub customer_id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = BigInt)]
    pub total_orders: i64,
}

impl From<TopCustomerRow> for TopCustomer {
    fn from(r: TopCustomerRow) -> Self {
        TopCustomer {
            customer_id: r.customer_id,
            name: r.name,
            total_spent: r.total_spent,
        }
    }
}

impl From<MonthlySalesRow> for MonthlySales {
    fn from(r: MonthlySalesRow) -> Self {
        MonthlySales {
            month: r.month,
            total_sales: r.total_sales,
        }
    }
}

impl From<UnsoldProductRow> for UnsoldProduct {
    fn from(r: UnsoldProductRow) -> Self {
        UnsoldProduct {
            product_id: r.product_id,
            name: r.name,
        }
    }
}

impl From<CountryOrderValueRow> for CountryOrderValue {
    fn from(r: CountryOrderValueRow) -> Self {
        CountryOrderValue {
            country: r.country,
            avg_order_value: r.avg_order_value,
        }
    }
}

impl From<FrequentBuyerRow> for FrequentBuyer {
    fn from(r: FrequentBuyerRow) -> Self {
        FrequentBuyer {
            customer_id: r.customer_id,
            name: r.name,
            total_orders: r.total_orders,
        }
    }
}
