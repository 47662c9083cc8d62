use serde::{Deserialize, Serialize};

/// Share of the retail price the shop sells at wholesale.
pub const WHOLESALE_RATIO: f64 = 0.5;

const GROSS_LOW_BELOW: f64 = 46.0;
const GROSS_MEDIUM_BELOW: f64 = 50.0;
const CONTRIBUTION_LOW_BELOW: f64 = 16.0;
const CONTRIBUTION_MEDIUM_BELOW: f64 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginBand {
    Critical,
    Low,
    Medium,
    Good,
}

impl MarginBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Low => "Low",
            Self::Medium => "Watch",
            Self::Good => "Healthy",
        }
    }

    fn classify(dollars: f64, percent: f64, low_below: f64, medium_below: f64) -> Self {
        if dollars < 0.0 || percent < 0.0 {
            Self::Critical
        } else if percent < low_below {
            Self::Low
        } else if percent < medium_below {
            Self::Medium
        } else {
            Self::Good
        }
    }

    pub fn for_gross(dollars: f64, percent: f64) -> Self {
        Self::classify(dollars, percent, GROSS_LOW_BELOW, GROSS_MEDIUM_BELOW)
    }

    pub fn for_contribution(dollars: f64, percent: f64) -> Self {
        Self::classify(
            dollars,
            percent,
            CONTRIBUTION_LOW_BELOW,
            CONTRIBUTION_MEDIUM_BELOW,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarginResult {
    pub wholesale_price: f64,
    pub gross_margin: f64,
    pub gross_margin_pct: f64,
    pub gross_band: MarginBand,
    pub variable_expense_pct: f64,
    pub variable_expense: f64,
    pub contribution_margin: f64,
    pub contribution_margin_pct: f64,
    pub contribution_band: MarginBand,
}

/// Percent of `price`, reporting 0 instead of NaN/inf for a free item.
fn percent_of(amount: f64, price: f64) -> f64 {
    if price > 0.0 {
        amount / price * 100.0
    } else {
        0.0
    }
}

/// Gross and contribution margin of selling at `retail_price`.
///
/// `variable_expense_pct` is the summed expense fraction charged on wholesale.
pub fn compute_margins(
    total_cogs: f64,
    retail_price: f64,
    variable_expense_pct: f64,
) -> MarginResult {
    let wholesale_price = retail_price * WHOLESALE_RATIO;

    let gross_margin = wholesale_price - total_cogs;
    let gross_margin_pct = percent_of(gross_margin, wholesale_price);

    let variable_expense = wholesale_price * variable_expense_pct;
    let contribution_margin = gross_margin - variable_expense;
    let contribution_margin_pct = percent_of(contribution_margin, wholesale_price);

    MarginResult {
        wholesale_price,
        gross_margin,
        gross_margin_pct,
        gross_band: MarginBand::for_gross(gross_margin, gross_margin_pct),
        variable_expense_pct,
        variable_expense,
        contribution_margin,
        contribution_margin_pct,
        contribution_band: MarginBand::for_contribution(
            contribution_margin,
            contribution_margin_pct,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn wholesale_is_half_of_retail() {
        let result = compute_margins(10.0, 36.70, 0.0);
        assert_close(result.wholesale_price, 18.35, 1e-9);
        assert_close(result.gross_margin, 8.35, 1e-9);
        assert_close(result.gross_margin_pct, 45.5, 0.01);
        assert_eq!(result.gross_band, MarginBand::Low);
    }

    #[test]
    fn contribution_subtracts_variable_expense() {
        let result = compute_margins(10.0, 40.0, 0.044);
        assert_close(result.variable_expense, 0.88, 1e-9);
        assert_close(result.contribution_margin, 9.12, 1e-9);
        assert_close(result.contribution_margin_pct, 45.6, 1e-9);
        assert_eq!(result.gross_band, MarginBand::Good);
        assert_eq!(result.contribution_band, MarginBand::Good);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(MarginBand::for_gross(1.0, 45.9), MarginBand::Low);
        assert_eq!(MarginBand::for_gross(1.0, 46.0), MarginBand::Medium);
        assert_eq!(MarginBand::for_gross(1.0, 49.9), MarginBand::Medium);
        assert_eq!(MarginBand::for_gross(1.0, 50.0), MarginBand::Good);

        assert_eq!(MarginBand::for_contribution(1.0, 15.9), MarginBand::Low);
        assert_eq!(MarginBand::for_contribution(1.0, 16.0), MarginBand::Medium);
        assert_eq!(MarginBand::for_contribution(1.0, 25.0), MarginBand::Good);
    }

    #[test]
    fn negative_margins_are_critical() {
        let result = compute_margins(20.0, 30.0, 0.1);
        assert!(result.gross_margin < 0.0);
        assert_eq!(result.gross_band, MarginBand::Critical);
        assert_eq!(result.contribution_band, MarginBand::Critical);

        // Positive gross but expenses push contribution under water.
        let result = compute_margins(10.0, 21.0, 0.2);
        assert_eq!(result.gross_band, MarginBand::Low);
        assert_eq!(result.contribution_band, MarginBand::Critical);
    }

    #[test]
    fn free_item_has_no_nan_percentages() {
        let result = compute_margins(5.0, 0.0, 0.1);
        assert_eq!(result.wholesale_price, 0.0);
        assert_eq!(result.gross_margin_pct, 0.0);
        assert_eq!(result.contribution_margin_pct, 0.0);
        assert_eq!(result.gross_band, MarginBand::Critical);
    }
}
