use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::customer::Customer;
use crate::schema::orders;

#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Queryable,
    Selectable,
    Identifiable,
    Associations,
    Insertable,
)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    /// Free-form status. "Shipped" and "Delivered" count as fulfilled.
    pub status: String,
}
