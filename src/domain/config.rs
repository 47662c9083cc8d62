use serde::{Deserialize, Serialize};

use super::error::{PricingError, PricingResult};

/// Shop-wide pricing knobs. Every field falls back to the shop's standard terms
/// when absent from `pricing.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Volume discount applied to the whole print run (prints and screens).
    pub discount_rate: f64,
    /// Value-added services (folding, bagging, tagging) per unit.
    pub vas_cost: f64,
    /// Surcharge per unit printed on fleece.
    pub fleece_charge: f64,
    /// Contribution-margin targets, in percent, for the scenario table.
    pub scenario_targets: Vec<f64>,
}

impl PricingConfig {
    pub const DEFAULT_DISCOUNT_RATE: f64 = 0.12;
    pub const DEFAULT_VAS_COST: f64 = 1.60;
    pub const DEFAULT_FLEECE_CHARGE: f64 = 0.20;
    pub const DEFAULT_SCENARIO_TARGETS: [f64; 5] = [25.0, 20.0, 15.0, 10.0, 5.0];

    /// Rejects terms that would price below cost: a discount of 100% or more,
    /// negative charges, or non-finite scenario targets.
    pub fn validate(&self) -> PricingResult<()> {
        let discount_in_range = (0.0..1.0).contains(&self.discount_rate);
        check_term("discount_rate", self.discount_rate, discount_in_range)?;
        check_term("vas_cost", self.vas_cost, self.vas_cost >= 0.0)?;
        check_term("fleece_charge", self.fleece_charge, self.fleece_charge >= 0.0)?;
        for &target in &self.scenario_targets {
            check_term("scenario_targets", target, true)?;
        }
        Ok(())
    }

    pub fn fleece_surcharge(&self, is_fleece: bool) -> f64 {
        if is_fleece {
            self.fleece_charge
        } else {
            0.0
        }
    }
}

fn check_term(term: &'static str, value: f64, in_range: bool) -> PricingResult<()> {
    if value.is_finite() && in_range {
        Ok(())
    } else {
        Err(PricingError::InvalidTerm { term, value })
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            discount_rate: Self::DEFAULT_DISCOUNT_RATE,
            vas_cost: Self::DEFAULT_VAS_COST,
            fleece_charge: Self::DEFAULT_FLEECE_CHARGE,
            scenario_targets: Self::DEFAULT_SCENARIO_TARGETS.to_vec(),
        }
    }
}
