use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category tag. Maps to the `category` Postgres enum, so a
/// free-form string can never reach the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "category", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

/// A stored catalog row. `id` is assigned by the database on insert and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

/// A product that has not been persisted yet. Only `create` turns one of
/// these into a `Product` with an id, so updating or deleting an unsaved
/// product is not expressible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}
