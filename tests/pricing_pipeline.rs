use screenprint_pricing::domain::{
    compute, lookup, LocationCosts, MarginBand, OrderSpec, PricingConfig, PricingError,
    PrintCostMode, RetailPricing, ScreenCounts, ScreenFeeRule, SuggestionStrategy,
    VariableExpenses,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// The shop's standard quote: 250 tees, three locations, 4.4% commission.
fn standard_order() -> OrderSpec {
    OrderSpec::default()
}

/// A repeat run of the standard order, large enough for free screens.
fn large_reorder() -> OrderSpec {
    OrderSpec {
        is_reorder: true,
        ..standard_order()
    }
}

/// A small fleece job with everything printed by hand-quoted prices.
fn small_fleece_manual() -> OrderSpec {
    OrderSpec {
        quantity: 48,
        screens: ScreenCounts::new(1, 1, 0, 0),
        is_reorder: true,
        is_fleece: true,
        blank_cost: 12.50,
        retail: RetailPricing::Suggest(SuggestionStrategy::ContributionOnly { target_cm: 20.0 }),
        print_costs: PrintCostMode::Manual(LocationCosts::new(2.00, 1.50, 0.0, 0.0)),
        expenses: VariableExpenses {
            royalties: 0.10,
            commissions: 0.05,
            ..VariableExpenses::default()
        },
        screen_price_override: None,
    }
}

// ---------------------------------------------------------------------------
// Cost roll-up
// ---------------------------------------------------------------------------

#[test]
fn standard_order_cogs() {
    let report = compute(&standard_order(), &PricingConfig::default()).unwrap();
    let costs = &report.costs;

    assert_eq!(costs.location_costs, LocationCosts::new(3.10, 2.35, 3.10, 0.0));
    assert_close(costs.total_flash_cost(), 0.5);
    assert_eq!(costs.total_screens, 8);
    assert_eq!(costs.screen_fee.rule, ScreenFeeRule::NewOrder);
    assert_close(costs.screen_fee_total, 184.0);
    assert_close(costs.raw_print_cost_per_unit, 9.05);
    assert_close(costs.gross_print_run_cost, 2446.5);
    assert_close(costs.discounted_print_run_cost, 2152.92);
    assert_close(costs.final_print_cost_per_unit, 8.61168);
    assert_close(costs.total_cogs, 14.42168);
}

#[test]
fn large_reorder_gets_free_screens() {
    let report = compute(&large_reorder(), &PricingConfig::default()).unwrap();

    assert_eq!(report.costs.screen_fee.rule, ScreenFeeRule::FreeReorder);
    assert_close(report.costs.screen_fee_total, 0.0);
    assert_close(report.costs.final_print_cost_per_unit, 7.964);
    assert_close(report.costs.total_cogs, 13.774);
}

#[test]
fn manual_screen_price_flows_into_cogs() {
    let order = OrderSpec {
        screen_price_override: Some(10.0),
        ..standard_order()
    };
    let report = compute(&order, &PricingConfig::default()).unwrap();

    assert_eq!(report.costs.screen_fee.rule, ScreenFeeRule::Manual);
    assert_close(report.costs.screen_fee_total, 80.0);
}

#[test]
fn shop_terms_come_from_config() {
    let config = PricingConfig {
        discount_rate: 0.0,
        vas_cost: 0.0,
        ..PricingConfig::default()
    };
    let report = compute(&standard_order(), &config).unwrap();

    // 9.05 per unit plus 184 in screens over 250 units, no discount, no VAS.
    assert_close(report.costs.total_cogs, 9.05 + 184.0 / 250.0 + 4.21);
}

// ---------------------------------------------------------------------------
// Margins and suggestions
// ---------------------------------------------------------------------------

#[test]
fn standard_order_margins() {
    let report = compute(&standard_order(), &PricingConfig::default()).unwrap();
    let margins = &report.margins;

    assert_close(margins.wholesale_price, 18.35);
    assert_close(margins.gross_margin, 18.35 - 14.42168);
    assert_eq!(margins.gross_band, MarginBand::Low);
    assert_close(margins.variable_expense, 18.35 * 0.044);
    assert_eq!(margins.contribution_band, MarginBand::Medium);
}

#[test]
fn balanced_suggestion_prices_at_the_suggestion() {
    let order = OrderSpec {
        retail: RetailPricing::Suggest(SuggestionStrategy::default()),
        ..standard_order()
    };
    let report = compute(&order, &PricingConfig::default()).unwrap();

    // Gross target dominates: 14.42168 / 0.5 * 2 = 57.68672 -> 57.70
    let suggestion = report.suggestion.unwrap();
    assert_close(suggestion.retail, 57.70);
    assert!(suggestion.reachable);
    assert_close(report.retail_price, 57.70);
    assert!(report.margins.gross_margin_pct >= 50.0);
    assert_eq!(report.margins.gross_band, MarginBand::Good);
    assert_eq!(report.margins.contribution_band, MarginBand::Good);
}

#[test]
fn premium_blank_suggestion_stays_reachable() {
    let order = OrderSpec {
        blank_cost: 300.0,
        retail: RetailPricing::Suggest(SuggestionStrategy::default()),
        ..standard_order()
    };
    let report = compute(&order, &PricingConfig::default()).unwrap();

    let suggestion = report.suggestion.unwrap();
    assert!(suggestion.reachable);
    assert!(suggestion.retail > 999.0);
    assert!(report.margins.gross_margin_pct >= 50.0);
}

#[test]
fn heavy_royalties_make_the_target_unreachable() {
    let mut order = OrderSpec {
        retail: RetailPricing::Suggest(SuggestionStrategy::default()),
        ..standard_order()
    };
    order.expenses.royalties = 0.75;
    let report = compute(&order, &PricingConfig::default()).unwrap();

    let suggestion = report.suggestion.unwrap();
    assert!(!suggestion.reachable);
    assert_close(suggestion.retail, 999.0);
}

#[test]
fn out_of_range_terms_are_rejected() {
    let config = PricingConfig {
        discount_rate: 1.0,
        ..PricingConfig::default()
    };
    assert!(matches!(
        compute(&standard_order(), &config),
        Err(PricingError::InvalidTerm {
            term: "discount_rate",
            ..
        })
    ));
}

#[test]
fn contribution_only_suggestion_meets_its_target() {
    let report = compute(&small_fleece_manual(), &PricingConfig::default()).unwrap();

    assert_eq!(report.costs.screen_fee.rule, ScreenFeeRule::SmallReorder);
    assert_close(report.costs.fleece_charge, 0.20);
    assert!(report.margins.contribution_margin_pct >= 20.0);
    // The gross floor is not applied, so the price may land below 50% gross.
    assert!(report.margins.gross_margin_pct < 50.0);
}

// ---------------------------------------------------------------------------
// Scenario table
// ---------------------------------------------------------------------------

#[test]
fn scenario_rows_step_down_with_target() {
    let report = compute(&standard_order(), &PricingConfig::default()).unwrap();

    assert_eq!(report.scenarios.len(), 5);
    for pair in report.scenarios.windows(2) {
        assert!(pair[0].target_cm > pair[1].target_cm);
        assert!(pair[1].unit_wholesale <= pair[0].unit_wholesale);
    }
    for row in &report.scenarios {
        assert!(row.is_feasible());
        assert_close(row.total_wholesale, row.unit_wholesale * 250.0);
        // Every recommendation clears its own target.
        let cm = row.unit_wholesale - report.costs.total_cogs - row.unit_wholesale * 0.044;
        assert!(cm / row.unit_wholesale * 100.0 >= row.target_cm - 1e-9);
    }
}

#[test]
fn custom_scenario_targets() {
    let config = PricingConfig {
        scenario_targets: vec![40.0, 30.0],
        ..PricingConfig::default()
    };
    let report = compute(&standard_order(), &config).unwrap();

    assert_eq!(report.scenarios.len(), 2);
    assert_eq!(report.scenarios[0].target_cm, 40.0);
}

// ---------------------------------------------------------------------------
// Boundaries and determinism
// ---------------------------------------------------------------------------

#[test]
fn minimum_quantity_enforced_at_the_boundary() {
    for quantity in [0, 1, 11] {
        let order = OrderSpec {
            quantity,
            ..standard_order()
        };
        assert!(compute(&order, &PricingConfig::default()).is_err());
    }
    assert_eq!(
        compute(
            &OrderSpec {
                quantity: 0,
                ..standard_order()
            },
            &PricingConfig::default()
        ),
        Err(PricingError::ZeroQuantity)
    );

    let order = OrderSpec {
        quantity: 12,
        ..standard_order()
    };
    assert!(compute(&order, &PricingConfig::default()).is_ok());
}

#[test]
fn blank_locations_cost_nothing() {
    let order = OrderSpec {
        screens: ScreenCounts::new(0, 0, 0, 0),
        ..standard_order()
    };
    let report = compute(&order, &PricingConfig::default()).unwrap();

    assert_eq!(lookup(250, 0), 0.0);
    assert_close(report.costs.raw_print_cost_per_unit, 0.0);
    assert_close(report.costs.screen_fee_total, 0.0);
    assert_close(report.costs.total_cogs, 4.21 + 1.60);
}

#[test]
fn pipeline_is_idempotent() {
    let config = PricingConfig::default();
    for order in [standard_order(), large_reorder(), small_fleece_manual()] {
        let first = compute(&order, &config).unwrap();
        let second = compute(&order, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.costs.total_cogs.to_bits(),
            second.costs.total_cogs.to_bits()
        );
    }
}

#[test]
fn report_serializes_for_presenters() {
    let report = compute(&standard_order(), &PricingConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["costs"]["total_cogs"].is_number());
    assert_eq!(json["margins"]["gross_band"], "low");
    assert_eq!(json["costs"]["screen_fee"]["rule"], "new_order");
    assert!(json["suggestion"].is_null());
}
