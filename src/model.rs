//! Row and payload types for coffee records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored coffee record. `type` is a Rust keyword, so the field is named
/// `kind` and renamed on both the wire and the row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Coffee {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub origin: String,
    pub grind_size: f64,
    pub weight_in_grams: f64,
}

/// Create payload. Every field is required; the id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCoffee {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: String,
    pub grind_size: f64,
    pub weight_in_grams: f64,
}

/// Partial update payload: absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoffeeUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub origin: Option<String>,
    pub grind_size: Option<f64>,
    pub weight_in_grams: Option<f64>,
}

impl CoffeeUpdate {
    /// Overlay the provided fields onto an in-memory copy of the record.
    pub fn apply_to(&self, record: &mut Coffee) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(kind) = &self.kind {
            record.kind = kind.clone();
        }
        if let Some(origin) = &self.origin {
            record.origin = origin.clone();
        }
        if let Some(grind_size) = self.grind_size {
            record.grind_size = grind_size;
        }
        if let Some(weight) = self.weight_in_grams {
            record.weight_in_grams = weight;
        }
    }
}
