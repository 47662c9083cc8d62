//! Plain-text rendering of a priced order. Amounts are rounded to the cent here
//! and nowhere earlier.

use std::fmt;

use crate::domain::{applicable_break, OrderSpec, PricingReport, PrintCostMode};

fn money(value: f64) -> String {
    format!("${value:.2}")
}

/// Text view of a [`PricingReport`] for the order it was computed from.
pub struct ReportView<'a> {
    pub order: &'a OrderSpec,
    pub report: &'a PricingReport,
}

impl<'a> ReportView<'a> {
    pub fn new(order: &'a OrderSpec, report: &'a PricingReport) -> Self {
        Self { order, report }
    }
}

pub fn render_report(order: &OrderSpec, report: &PricingReport) -> String {
    ReportView::new(order, report).to_string()
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (order, report) = (self.order, self.report);
        let costs = &report.costs;
        let margins = &report.margins;

        writeln!(out, "Wholesale Cost & Margin")?;
        writeln!(out, "=======================")?;
        match order.print_costs {
            PrintCostMode::Matrix => writeln!(
                out,
                "{} units (price list tier {})",
                costs.quantity,
                applicable_break(costs.quantity)
            )?,
            PrintCostMode::Manual(_) => {
                writeln!(out, "{} units (manual print costs)", costs.quantity)?
            }
        }
        writeln!(out)?;

        writeln!(out, "{:<14} {:>7} {:>10} {:>8}", "Location", "Screens", "Print", "Flash")?;
        for (location, print) in costs.location_costs.iter() {
            writeln!(
                out,
                "{:<14} {:>7} {:>10} {:>8}",
                location.label(),
                order.screens.get(location),
                money(print),
                money(costs.flash_costs.get(location))
            )?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "Screens: {} x {} ({}) = {}",
            costs.total_screens,
            money(costs.screen_fee.price_per_screen),
            costs.screen_fee.rule.label(),
            money(costs.screen_fee_total)
        )?;
        let gross_run = money(costs.gross_print_run_cost);
        let discounted_run = money(costs.discounted_print_run_cost);
        writeln!(out, "Print run (gross):       {:>10}", gross_run)?;
        writeln!(out, "Print run (discounted):  {:>10}", discounted_run)?;
        writeln!(out, "Print cost per unit:     {:>10}", money(costs.final_print_cost_per_unit))?;
        writeln!(out, "Blank garment:           {:>10}", money(costs.blank_cost))?;
        writeln!(out, "VAS:                     {:>10}", money(costs.vas_cost))?;
        writeln!(out, "Fleece charge:           {:>10}", money(costs.fleece_charge))?;
        writeln!(out, "Total COGS:              {:>10}", money(costs.total_cogs))?;
        writeln!(out)?;

        match report.suggestion {
            Some(suggestion) if suggestion.reachable => {
                writeln!(out, "Suggested retail:        {:>10}", money(suggestion.retail))?
            }
            Some(suggestion) => writeln!(
                out,
                "Suggested retail:        {:>10} (target unreachable)",
                money(suggestion.retail)
            )?,
            None => writeln!(out, "Retail price:            {:>10}", money(report.retail_price))?,
        }
        writeln!(out, "Wholesale price:         {:>10}", money(margins.wholesale_price))?;
        writeln!(
            out,
            "Gross margin:            {:>10} {:>7.1}%  [{}]",
            money(margins.gross_margin),
            margins.gross_margin_pct,
            margins.gross_band.label()
        )?;
        writeln!(
            out,
            "Variable expenses:       {:>10} {:>7.1}%",
            money(margins.variable_expense),
            margins.variable_expense_pct * 100.0
        )?;
        writeln!(
            out,
            "Contribution margin:     {:>10} {:>7.1}%  [{}]",
            money(margins.contribution_margin),
            margins.contribution_margin_pct,
            margins.contribution_band.label()
        )?;

        if !report.scenarios.is_empty() {
            writeln!(out)?;
            writeln!(out, "{:<10} {:>12} {:>14}", "Target CM", "Unit", "Total run")?;
            for row in &report.scenarios {
                if row.is_feasible() {
                    writeln!(
                        out,
                        "{:>8.0}%  {:>12} {:>14}",
                        row.target_cm,
                        money(row.unit_wholesale),
                        money(row.total_wholesale)
                    )?;
                } else {
                    writeln!(out, "{:>8.0}%  {:>12}", row.target_cm, "unreachable")?;
                }
            }
        }

        Ok(())
    }
}
