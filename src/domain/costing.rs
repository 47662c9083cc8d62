//! Production cost per unit: prints, flashes, screens and the fixed per-unit
//! add-ons.

use serde::{Deserialize, Serialize};

use super::config::PricingConfig;
use super::entities::LocationCosts;
use super::error::{PricingError, PricingResult};

const FLASH_COST_PER_SCREEN: f64 = 0.10;
const NEW_ORDER_SCREEN_PRICE: f64 = 23.0;
const SMALL_REORDER_SCREEN_PRICE: f64 = 15.0;
/// Reorders above this many units get their screens for free.
const FREE_REORDER_ABOVE: u32 = 144;

/// Flash-cure surcharge for one location: every screen after the first.
pub fn flash_cost(screens: u8) -> f64 {
    (FLASH_COST_PER_SCREEN * (f64::from(screens) - 1.0)).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenFeeRule {
    NewOrder,
    FreeReorder,
    SmallReorder,
    Manual,
}

impl ScreenFeeRule {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewOrder => "New Order Standard",
            Self::FreeReorder => "Reorder >144 pcs: Free",
            Self::SmallReorder => "Reorder <145 pcs: $15",
            Self::Manual => "Manual Entry",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenFee {
    pub price_per_screen: f64,
    pub rule: ScreenFeeRule,
}

impl ScreenFee {
    /// Keeps the computed fee unless the shop typed in its own price.
    pub fn or_override(self, manual: Option<f64>) -> Self {
        match manual {
            Some(price_per_screen) => Self {
                price_per_screen,
                rule: ScreenFeeRule::Manual,
            },
            None => self,
        }
    }
}

/// Default price per screen for a job.
pub fn screen_fee(is_reorder: bool, quantity: u32) -> ScreenFee {
    let (price_per_screen, rule) = match (is_reorder, quantity > FREE_REORDER_ABOVE) {
        (false, _) => (NEW_ORDER_SCREEN_PRICE, ScreenFeeRule::NewOrder),
        (true, true) => (0.0, ScreenFeeRule::FreeReorder),
        (true, false) => (SMALL_REORDER_SCREEN_PRICE, ScreenFeeRule::SmallReorder),
    };
    ScreenFee {
        price_per_screen,
        rule,
    }
}

/// Inputs to [`aggregate`], already resolved per location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostInputs {
    pub quantity: u32,
    pub location_costs: LocationCosts,
    pub flash_costs: LocationCosts,
    pub total_screens: u32,
    pub screen_fee: ScreenFee,
    pub blank_cost: f64,
    pub is_fleece: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub quantity: u32,
    pub location_costs: LocationCosts,
    pub flash_costs: LocationCosts,
    pub total_screens: u32,
    pub screen_fee: ScreenFee,
    pub screen_fee_total: f64,
    pub raw_print_cost_per_unit: f64,
    pub gross_print_run_cost: f64,
    pub discounted_print_run_cost: f64,
    pub final_print_cost_per_unit: f64,
    pub blank_cost: f64,
    pub vas_cost: f64,
    pub fleece_charge: f64,
    pub total_cogs: f64,
}

impl CostBreakdown {
    pub fn total_flash_cost(&self) -> f64 {
        self.flash_costs.sum()
    }
}

/// Rolls per-location print costs up into a per-unit COGS.
///
/// The volume discount covers the whole print run including screens; blanks,
/// VAS and the fleece surcharge are added after it at full price.
pub fn aggregate(inputs: &CostInputs, config: &PricingConfig) -> PricingResult<CostBreakdown> {
    if inputs.quantity == 0 {
        return Err(PricingError::ZeroQuantity);
    }
    let quantity = f64::from(inputs.quantity);

    let screen_fee_total = f64::from(inputs.total_screens) * inputs.screen_fee.price_per_screen;
    let raw_print_cost_per_unit = inputs.location_costs.sum() + inputs.flash_costs.sum();
    let gross_print_run_cost = raw_print_cost_per_unit * quantity + screen_fee_total;
    let discounted_print_run_cost = gross_print_run_cost * (1.0 - config.discount_rate);
    let final_print_cost_per_unit = discounted_print_run_cost / quantity;

    let fleece_charge = config.fleece_surcharge(inputs.is_fleece);
    let total_cogs =
        final_print_cost_per_unit + inputs.blank_cost + config.vas_cost + fleece_charge;

    Ok(CostBreakdown {
        quantity: inputs.quantity,
        location_costs: inputs.location_costs,
        flash_costs: inputs.flash_costs,
        total_screens: inputs.total_screens,
        screen_fee: inputs.screen_fee,
        screen_fee_total,
        raw_print_cost_per_unit,
        gross_print_run_cost,
        discounted_print_run_cost,
        final_print_cost_per_unit,
        blank_cost: inputs.blank_cost,
        vas_cost: config.vas_cost,
        fleece_charge,
        total_cogs,
    })
}
