//! One-shot pricing of an order: matrix lookup, cost roll-up, margins,
//! suggestion and scenarios.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::PricingConfig;
use super::costing::{aggregate, flash_cost, screen_fee, CostBreakdown, CostInputs};
use super::entities::{LocationCosts, OrderSpec, PrintCostMode, RetailPricing};
use super::error::PricingResult;
use super::margins::{compute_margins, MarginResult};
use super::matrix::lookup;
use super::suggestion::{scenarios, suggest_retail, ScenarioRow, Suggestion};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    pub costs: CostBreakdown,
    /// Retail price the margins were computed against.
    pub retail_price: f64,
    /// Present when the order asked for a suggested price.
    pub suggestion: Option<Suggestion>,
    pub margins: MarginResult,
    pub scenarios: Vec<ScenarioRow>,
}

/// Per-unit print cost of every location, from the price list or the manual quote.
pub fn location_costs(order: &OrderSpec) -> LocationCosts {
    match &order.print_costs {
        PrintCostMode::Matrix => order
            .screens
            .map(|colors| lookup(order.quantity, colors)),
        PrintCostMode::Manual(costs) => *costs,
    }
}

/// Prices `order` from scratch. Nothing is cached between calls.
pub fn compute(order: &OrderSpec, config: &PricingConfig) -> PricingResult<PricingReport> {
    order.validate()?;
    config.validate()?;

    let inputs = CostInputs {
        quantity: order.quantity,
        location_costs: location_costs(order),
        flash_costs: order.screens.map(flash_cost),
        total_screens: order.screens.total(),
        screen_fee: screen_fee(order.is_reorder, order.quantity)
            .or_override(order.screen_price_override),
        blank_cost: order.blank_cost,
        is_fleece: order.is_fleece,
    };
    let costs = aggregate(&inputs, config)?;

    let variable_expense_pct = order.expenses.total();
    let (retail_price, suggestion) = match order.retail {
        RetailPricing::Fixed(price) => (price, None),
        RetailPricing::Suggest(strategy) => {
            let suggestion = suggest_retail(costs.total_cogs, variable_expense_pct, strategy);
            (suggestion.retail, Some(suggestion))
        }
    };

    let margins = compute_margins(costs.total_cogs, retail_price, variable_expense_pct);
    let scenarios = scenarios(
        costs.total_cogs,
        variable_expense_pct,
        order.quantity,
        &config.scenario_targets,
    );

    debug!(
        quantity = order.quantity,
        total_cogs = costs.total_cogs,
        retail_price,
        gross_margin_pct = margins.gross_margin_pct,
        "priced order"
    );

    Ok(PricingReport {
        costs,
        retail_price,
        suggestion,
        margins,
        scenarios,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ScreenCounts;
    use crate::domain::error::PricingError;

    #[test]
    fn matrix_mode_looks_up_each_location() {
        let order = OrderSpec::default();
        let costs = location_costs(&order);
        // 250 units price at the 144 tier.
        assert_eq!(costs, LocationCosts::new(3.10, 2.35, 3.10, 0.0));
    }

    #[test]
    fn manual_mode_bypasses_matrix() {
        let order = OrderSpec {
            print_costs: PrintCostMode::Manual(LocationCosts::manual_defaults()),
            screens: ScreenCounts::new(10, 10, 10, 10),
            ..OrderSpec::default()
        };
        assert_eq!(location_costs(&order), LocationCosts::manual_defaults());
    }

    #[test]
    fn invalid_order_never_reaches_aggregation() {
        let order = OrderSpec {
            quantity: 6,
            ..OrderSpec::default()
        };
        assert!(matches!(
            compute(&order, &PricingConfig::default()),
            Err(PricingError::QuantityBelowMinimum { .. })
        ));
    }

    #[test]
    fn fixed_retail_has_no_suggestion() {
        let report = compute(&OrderSpec::default(), &PricingConfig::default()).unwrap();
        assert_eq!(report.retail_price, 36.70);
        assert_eq!(report.suggestion, None);
        assert_eq!(report.scenarios.len(), 5);
    }
}
