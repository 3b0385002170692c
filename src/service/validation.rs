//! Field-constraint validation for inbound payloads.

use crate::error::ApiError;
use crate::model::{CoffeeUpdate, NewCoffee};

/// Width of the three text columns.
const MAX_TEXT_LEN: usize = 50;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create payload. Text fields must be non-empty and fit the
    /// column width; weight must be positive.
    pub fn validate_create(payload: &NewCoffee) -> Result<(), ApiError> {
        validate_text("name", &payload.name)?;
        validate_text("type", &payload.kind)?;
        validate_text("origin", &payload.origin)?;
        validate_weight(payload.weight_in_grams)
    }

    /// Validate only the fields present in an update payload.
    pub fn validate_update(changes: &CoffeeUpdate) -> Result<(), ApiError> {
        if let Some(name) = &changes.name {
            validate_text("name", name)?;
        }
        if let Some(kind) = &changes.kind {
            validate_text("type", kind)?;
        }
        if let Some(origin) = &changes.origin {
            validate_text("origin", origin)?;
        }
        if let Some(weight) = changes.weight_in_grams {
            validate_weight(weight)?;
        }
        Ok(())
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    // Characters, not bytes: VARCHAR(50) counts characters.
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ApiError::Validation(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(())
}

fn validate_weight(weight: f64) -> Result<(), ApiError> {
    if weight <= 0.0 {
        return Err(ApiError::Validation(
            "weight_in_grams must be greater than 0".into(),
        ));
    }
    Ok(())
}
