//! Pricing logic for screen-printed orders lives here.

pub mod config;
pub mod costing;
pub mod engine;
pub mod entities;
pub mod error;
pub mod margins;
pub mod matrix;
pub mod suggestion;

pub use config::PricingConfig;
pub use costing::{
    aggregate, flash_cost, screen_fee, CostBreakdown, CostInputs, ScreenFee, ScreenFeeRule,
};
pub use engine::{compute, location_costs, PricingReport};
pub use entities::{
    ExpenseKind, LocationCosts, OrderSpec, PerLocation, PrintCostMode, PrintLocation,
    RetailPricing, ScreenCounts, SuggestionStrategy, VariableExpenses, MAX_SCREENS_PER_LOCATION,
    MIN_ORDER_QUANTITY,
};
pub use error::{PricingError, PricingResult};
pub use margins::{compute_margins, MarginBand, MarginResult, WHOLESALE_RATIO};
pub use matrix::{applicable_break, lookup, PRICE_MATRIX, QUANTITY_BREAKS};
pub use suggestion::{
    ceil_to_nickel, scenarios, suggest_retail, ScenarioRow, Suggestion, UNREACHABLE_RETAIL,
};
