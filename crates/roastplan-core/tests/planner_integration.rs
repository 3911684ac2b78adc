//! Integration tests for the planner engine through its public API.

use roastplan_core::{Planner, PlannerConfig, Priority};

fn seeded_planner() -> Planner {
    let config = PlannerConfig {
        roast_seed: Some(42),
        ..Default::default()
    };
    Planner::new(&config).expect("default config must build")
}

#[test]
fn full_workflow_from_config_to_plan_text() {
    let config = PlannerConfig::from_toml_str("roast_seed = 42").unwrap();
    let mut planner = Planner::new(&config).unwrap();

    planner.add_task("polish slides", 3.0, Priority::Low).unwrap();
    planner.add_task("fix login bug", 1.0, Priority::High).unwrap();
    planner.add_task("email digest", 2.0, Priority::Medium).unwrap();

    let plan = planner.generate_plan();

    assert!(plan.starts_with("AI Powered Roast Plan:\n\n"));
    assert!(plan.contains("1. fix login bug (HIGH)"));
    assert!(plan.contains("   Est: 1h → Predicted: 1.3h (Margins: 1.0-1.6h)"));
    assert!(plan.contains("2. email digest (MEDIUM)"));
    assert!(plan.contains("   Est: 2h → Predicted: 2.4h (Margins: 1.8-3.0h)"));
    assert!(plan.contains("3. polish slides (LOW)"));
    assert!(plan.contains("   Est: 3h → Predicted: 3.6h (Margins: 2.7-4.4h)"));

    // All three estimates predict more than 15% over, so each block roasts.
    assert_eq!(plan.matches("   🔥 ").count(), 3);

    assert!(plan.contains("Total Est: 6.0h | Realistic (ML): 7.3h"));
    // 7.26 predicted vs 6.0 estimated crosses the 1.2 aggregate line.
    assert!(plan.ends_with(
        "\nYou're underestimating big time. AI says: Adjust or fail spectacularly."
    ));
}

#[test]
fn same_seed_same_plan() {
    let mut plans = Vec::new();
    for _ in 0..2 {
        let mut planner = seeded_planner();
        planner.add_task("write", 1.0, Priority::High).unwrap();
        planner.add_task("ship", 2.0, Priority::Low).unwrap();
        plans.push(planner.generate_plan());
    }
    assert_eq!(plans[0], plans[1]);
}

#[test]
fn chart_keeps_insertion_order_while_plan_reorders() {
    let mut planner = seeded_planner();
    planner.add_task("slow refactor", 2.0, Priority::Low).unwrap();
    planner.add_task("hotfix", 1.0, Priority::High).unwrap();

    let plan = planner.generate_plan();
    let hotfix_pos = plan.find("hotfix").unwrap();
    let refactor_pos = plan.find("slow refactor").unwrap();
    assert!(hotfix_pos < refactor_pos);

    let series = planner.chart_series();
    assert_eq!(series.labels, vec!["slow refactor", "hotfix"]);
    assert_eq!(series.len(), 2);
}

#[test]
fn chart_truncates_labels_the_plan_prints_in_full() {
    let mut planner = seeded_planner();
    planner.add_task("background refactor", 2.0, Priority::Low).unwrap();

    // 19 characters: the plan keeps the whole name, the chart label is cut
    // to the first 15 plus "...".
    assert!(planner.generate_plan().contains("1. background refactor (LOW)"));
    assert_eq!(planner.chart_series().labels, vec!["background refa..."]);
}

#[test]
fn roast_boundary_matches_fitted_coefficients() {
    let mut planner = seeded_planner();

    // The estimate where predicted == estimate * 1.15 for the builtin
    // table sits between 11 and 12 hours.
    let slope = planner.predictor().slope();
    let intercept = planner.predictor().intercept();
    let crossover = intercept / (1.15 - slope);
    assert!(crossover > 11.0 && crossover < 12.0, "crossover = {crossover}");

    planner.add_task("just over the line", 8.0, Priority::Medium).unwrap();
    assert_eq!(planner.generate_plan().matches("🔥").count(), 1);

    planner.clear_tasks();
    planner.add_task("safely under it", 12.0, Priority::Medium).unwrap();
    assert_eq!(planner.generate_plan().matches("🔥").count(), 0);
}

#[test]
fn aggregate_warning_boundary_between_two_and_three_hours() {
    let mut planner = seeded_planner();

    planner.add_task("short", 2.0, Priority::Medium).unwrap();
    assert!(planner.generate_plan().contains("underestimating big time"));

    planner.clear_tasks();
    planner.add_task("longer", 3.0, Priority::Medium).unwrap();
    assert!(!planner.generate_plan().contains("underestimating big time"));
}

#[test]
fn raised_roast_threshold_suppresses_roasts() {
    let config = PlannerConfig::from_toml_str("roast_threshold = 1.3\nroast_seed = 1").unwrap();
    let mut planner = Planner::new(&config).unwrap();

    // predict(1) overruns by ~28%, under a 1.3 threshold.
    planner.add_task("quick task", 1.0, Priority::High).unwrap();
    assert!(!planner.generate_plan().contains("🔥"));
}

#[test]
fn empty_session_has_the_placeholder_and_empty_chart() {
    let mut planner = seeded_planner();
    assert_eq!(planner.generate_plan(), "No tasks yet. Add some to get roasted!");
    assert!(planner.chart_series().is_empty());

    planner.add_task("a", 1.0, Priority::Medium).unwrap();
    planner.clear_tasks();
    assert_eq!(planner.generate_plan(), "No tasks yet. Add some to get roasted!");
}
