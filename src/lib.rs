//! Wholesale cost and margin calculator for screen-printed apparel orders.
//!
//! [`domain::compute`] turns an [`domain::OrderSpec`] into a
//! [`domain::PricingReport`]; everything else here loads inputs and shows results.

pub mod domain;
pub mod ui;
pub mod util;
