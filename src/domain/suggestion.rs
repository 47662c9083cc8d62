//! Retail price suggestions and the contribution-margin scenario table.

use serde::{Deserialize, Serialize};

use super::entities::SuggestionStrategy;
use super::margins::WHOLESALE_RATIO;

/// Retail price reported when a margin target cannot be reached at any price.
pub const UNREACHABLE_RETAIL: f64 = 999.0;

const NICKEL: f64 = 0.05;
/// Absorbs representation error so exact nickel amounts are not bumped up.
const ROUNDING_EPSILON: f64 = 1e-9;

/// Rounds `raw` up to the next multiple of $0.05.
pub fn ceil_to_nickel(raw: f64) -> f64 {
    (raw / NICKEL - ROUNDING_EPSILON).ceil() * NICKEL
}

/// Cheapest wholesale price that leaves `target_cm` percent contribution after
/// variable expenses, or `None` when cost plus expenses already eat the target.
fn min_wholesale_for_contribution(
    total_cogs: f64,
    variable_expense_pct: f64,
    target_cm: f64,
) -> Option<f64> {
    let denominator = (1.0 - target_cm / 100.0) - variable_expense_pct;
    (denominator > 0.0).then(|| total_cogs / denominator)
}

fn min_retail_for_gross(total_cogs: f64, target_gm: f64) -> Option<f64> {
    let denominator = 1.0 - target_gm / 100.0;
    (denominator > 0.0).then(|| total_cogs / denominator / WHOLESALE_RATIO)
}

fn min_retail_for_contribution(
    total_cogs: f64,
    variable_expense_pct: f64,
    target_cm: f64,
) -> Option<f64> {
    min_wholesale_for_contribution(total_cogs, variable_expense_pct, target_cm)
        .map(|wholesale| wholesale / WHOLESALE_RATIO)
}

/// A suggested retail price and whether it actually meets the strategy's targets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Rounded up to the nickel; [`UNREACHABLE_RETAIL`] stands in for a missed target.
    pub retail: f64,
    pub reachable: bool,
}

impl Suggestion {
    fn from_minimums(minimums: &[Option<f64>]) -> Self {
        let reachable = minimums.iter().all(Option::is_some);
        let raw = minimums
            .iter()
            .map(|minimum| minimum.unwrap_or(UNREACHABLE_RETAIL))
            .fold(0.0, f64::max);
        Self {
            retail: ceil_to_nickel(raw),
            reachable,
        }
    }
}

/// Suggested retail price for a job.
pub fn suggest_retail(
    total_cogs: f64,
    variable_expense_pct: f64,
    strategy: SuggestionStrategy,
) -> Suggestion {
    match strategy {
        SuggestionStrategy::Balanced {
            target_gm,
            target_cm,
        } => Suggestion::from_minimums(&[
            min_retail_for_gross(total_cogs, target_gm),
            min_retail_for_contribution(total_cogs, variable_expense_pct, target_cm),
        ]),
        SuggestionStrategy::ContributionOnly { target_cm } => Suggestion::from_minimums(&[
            min_retail_for_contribution(total_cogs, variable_expense_pct, target_cm),
        ]),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub target_cm: f64,
    pub unit_wholesale: f64,
    pub total_wholesale: f64,
}

impl ScenarioRow {
    /// Zero rows mark targets no price can reach.
    pub fn is_feasible(&self) -> bool {
        self.unit_wholesale > 0.0
    }
}

/// Recommended wholesale price for each contribution-margin target, in the
/// order the targets are given.
pub fn scenarios(
    total_cogs: f64,
    variable_expense_pct: f64,
    quantity: u32,
    targets: &[f64],
) -> Vec<ScenarioRow> {
    targets
        .iter()
        .map(|&target_cm| {
            let unit_wholesale =
                min_wholesale_for_contribution(total_cogs, variable_expense_pct, target_cm)
                    .map(|wholesale| ceil_to_nickel(wholesale / WHOLESALE_RATIO) * WHOLESALE_RATIO)
                    .unwrap_or(0.0);
            ScenarioRow {
                target_cm,
                unit_wholesale,
                total_wholesale: unit_wholesale * f64::from(quantity),
            }
        })
        .collect()
}
