use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{PricingError, PricingResult};

/// Smallest order the print shop accepts.
pub const MIN_ORDER_QUANTITY: u32 = 12;

/// Maximum number of screens (colors) a single print location can carry.
pub const MAX_SCREENS_PER_LOCATION: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintLocation {
    Front,
    Back,
    RightSleeve,
    LeftSleeve,
}

impl PrintLocation {
    pub const ALL: [PrintLocation; 4] = [
        PrintLocation::Front,
        PrintLocation::Back,
        PrintLocation::RightSleeve,
        PrintLocation::LeftSleeve,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
            Self::RightSleeve => "Right Sleeve",
            Self::LeftSleeve => "Left Sleeve",
        }
    }
}

impl fmt::Display for PrintLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per print location on the garment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerLocation<T> {
    pub front: T,
    pub back: T,
    pub right_sleeve: T,
    pub left_sleeve: T,
}

impl<T: Copy> PerLocation<T> {
    pub fn new(front: T, back: T, right_sleeve: T, left_sleeve: T) -> Self {
        Self {
            front,
            back,
            right_sleeve,
            left_sleeve,
        }
    }

    pub fn get(&self, location: PrintLocation) -> T {
        match location {
            PrintLocation::Front => self.front,
            PrintLocation::Back => self.back,
            PrintLocation::RightSleeve => self.right_sleeve,
            PrintLocation::LeftSleeve => self.left_sleeve,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrintLocation, T)> + '_ {
        PrintLocation::ALL
            .into_iter()
            .map(move |location| (location, self.get(location)))
    }

    /// Applies `f` to every location, keeping the location order.
    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> PerLocation<U> {
        PerLocation {
            front: f(self.front),
            back: f(self.back),
            right_sleeve: f(self.right_sleeve),
            left_sleeve: f(self.left_sleeve),
        }
    }
}

/// Screens (ink colors) burned per print location.
pub type ScreenCounts = PerLocation<u8>;

/// Per-unit print cost for each location.
pub type LocationCosts = PerLocation<f64>;

impl ScreenCounts {
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, screens)| u32::from(screens)).sum()
    }
}

impl LocationCosts {
    /// Starting values offered when the shop quotes print costs by hand.
    pub fn manual_defaults() -> Self {
        Self::new(3.10, 2.35, 3.80, 0.0)
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, cost)| cost).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseKind {
    Rebates,
    Royalties,
    Commissions,
    Freelance,
}

impl ExpenseKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rebates => "Buyer Rebates",
            Self::Royalties => "Licensing Royalties",
            Self::Commissions => "Sales Commissions",
            Self::Freelance => "Freelance Artist",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Variable expenses charged against the wholesale price, as fractions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableExpenses {
    pub rebates: f64,
    pub royalties: f64,
    pub commissions: f64,
    pub freelance: f64,
}

impl VariableExpenses {
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseKind, f64)> {
        [
            (ExpenseKind::Rebates, self.rebates),
            (ExpenseKind::Royalties, self.royalties),
            (ExpenseKind::Commissions, self.commissions),
            (ExpenseKind::Freelance, self.freelance),
        ]
        .into_iter()
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, pct)| pct).sum()
    }
}

/// How the retail price suggestion is derived.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStrategy {
    /// Cheapest retail that meets both the gross and contribution targets.
    Balanced { target_gm: f64, target_cm: f64 },
    /// Meets the contribution target only; the gross-margin floor is not applied.
    ContributionOnly { target_cm: f64 },
}

impl SuggestionStrategy {
    pub const DEFAULT_TARGET_GM: f64 = 50.0;
    pub const DEFAULT_TARGET_CM: f64 = 25.0;

    pub fn label(&self) -> &'static str {
        match self {
            Self::Balanced { .. } => "Balanced",
            Self::ContributionOnly { .. } => "Contribution Margin Only",
        }
    }
}

impl Default for SuggestionStrategy {
    fn default() -> Self {
        Self::Balanced {
            target_gm: Self::DEFAULT_TARGET_GM,
            target_cm: Self::DEFAULT_TARGET_CM,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetailPricing {
    Fixed(f64),
    Suggest(SuggestionStrategy),
}

impl Default for RetailPricing {
    fn default() -> Self {
        Self::Fixed(36.70)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintCostMode {
    /// Look every location up in the price matrix.
    #[default]
    Matrix,
    /// Use hand-quoted per-unit costs and skip the matrix.
    Manual(LocationCosts),
}

/// Everything the shop needs to quote a job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSpec {
    pub quantity: u32,
    pub screens: ScreenCounts,
    pub is_reorder: bool,
    pub is_fleece: bool,
    pub blank_cost: f64,
    pub retail: RetailPricing,
    pub print_costs: PrintCostMode,
    pub expenses: VariableExpenses,
    /// Replaces the computed price per screen when set.
    pub screen_price_override: Option<f64>,
}

impl Default for OrderSpec {
    fn default() -> Self {
        Self {
            quantity: 250,
            screens: ScreenCounts::new(3, 2, 3, 0),
            is_reorder: false,
            is_fleece: false,
            blank_cost: 4.21,
            retail: RetailPricing::default(),
            print_costs: PrintCostMode::Matrix,
            expenses: VariableExpenses {
                commissions: 0.044,
                ..VariableExpenses::default()
            },
            screen_price_override: None,
        }
    }
}

impl OrderSpec {
    /// Boundary checks that keep every downstream stage free of division by zero
    /// and out-of-range lookups.
    pub fn validate(&self) -> PricingResult<()> {
        if self.quantity == 0 {
            return Err(PricingError::ZeroQuantity);
        }
        if self.quantity < MIN_ORDER_QUANTITY {
            return Err(PricingError::QuantityBelowMinimum {
                quantity: self.quantity,
                minimum: MIN_ORDER_QUANTITY,
            });
        }

        if let Some((location, screens)) = self
            .screens
            .iter()
            .find(|(_, screens)| *screens > MAX_SCREENS_PER_LOCATION)
        {
            return Err(PricingError::TooManyScreens {
                location,
                screens,
                max: MAX_SCREENS_PER_LOCATION,
            });
        }

        if let Some((expense, value)) = self
            .expenses
            .iter()
            .find(|(_, value)| !(value.is_finite() && (0.0..1.0).contains(value)))
        {
            return Err(PricingError::InvalidExpense { expense, value });
        }

        check_amount("blank_cost", self.blank_cost)?;
        if let RetailPricing::Fixed(price) = self.retail {
            check_amount("retail_price", price)?;
        }
        if let PrintCostMode::Manual(costs) = &self.print_costs {
            for (_, cost) in costs.iter() {
                check_amount("manual_print_cost", cost)?;
            }
        }
        if let Some(price) = self.screen_price_override {
            check_amount("screen_price_override", price)?;
        }

        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> PricingResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidAmount { field, value })
    }
}
