//! Pricing error types.

use thiserror::Error;

use super::entities::{ExpenseKind, PrintLocation};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum PricingError {
    #[error("quantity {quantity} is below the minimum order of {minimum}")]
    QuantityBelowMinimum { quantity: u32, minimum: u32 },

    #[error("quantity must be greater than zero")]
    ZeroQuantity,

    #[error("{location} has {screens} screens (max {max})")]
    TooManyScreens {
        location: PrintLocation,
        screens: u8,
        max: u8,
    },

    #[error("{expense} must be a fraction in [0, 1), got {value}")]
    InvalidExpense { expense: ExpenseKind, value: f64 },

    #[error("{field} must be a finite, non-negative amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("pricing term {term} is out of range: {value}")]
    InvalidTerm { term: &'static str, value: f64 },
}

pub type PricingResult<T> = Result<T, PricingError>;
