//! Price coercion.
//!
//! Clients send prices either as JSON numbers or as numeric strings
//! (`"9.5"`). Both are accepted; the stored value is always an `f64`.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A price as it arrives on the wire, before coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Coerce into a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] for blank or non-numeric
    /// strings and for non-finite values.
    pub fn into_price(self) -> Result<f64, ValidationError> {
        let value = match self {
            Self::Number(value) => value,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::InvalidPrice(text));
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| ValidationError::InvalidPrice(text.clone()))?
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ValidationError::InvalidPrice(value.to_string()))
        }
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
