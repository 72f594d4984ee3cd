use coalzero_core::factors::FOREST_KG_PER_HECTARE_YEAR;
use coalzero_core::gap::{analyze_gap, NeutralityStatus};

#[test]
fn surplus_absorption_is_neutral() {
    let gap = analyze_gap(5015.0, 12_200.0, FOREST_KG_PER_HECTARE_YEAR).expect("gap");

    assert_eq!(gap.gap_kg, -7185.0);
    assert!(gap.is_neutral);
    assert_eq!(gap.land_required_hectares, 0.0);
}

#[test]
fn deficit_requires_land() {
    let gap = analyze_gap(45_000.0, 20_000.0, FOREST_KG_PER_HECTARE_YEAR).expect("gap");

    assert_eq!(gap.gap_kg, 25_000.0);
    assert!(!gap.is_neutral);
    assert_eq!(gap.land_required_hectares, 2.5);
}

#[test]
fn exact_balance_is_neutral() {
    let gap = analyze_gap(10_000.0, 10_000.0, FOREST_KG_PER_HECTARE_YEAR).expect("gap");
    assert_eq!(gap.gap_kg, 0.0);
    assert!(gap.is_neutral);
    assert_eq!(gap.land_required_hectares, 0.0);
}

#[test]
fn negative_totals_are_rejected() {
    assert!(analyze_gap(-1.0, 0.0, FOREST_KG_PER_HECTARE_YEAR).is_err());
    let err = analyze_gap(0.0, -1.0, FOREST_KG_PER_HECTARE_YEAR).unwrap_err();
    assert_eq!(err.field, "sinks_total_kg");
}

#[test]
fn zero_forest_rate_is_rejected() {
    let err = analyze_gap(1.0, 0.0, 0.0).unwrap_err();
    assert_eq!(err.field, "forest_kg_per_hectare_year");
}

#[test]
fn status_follows_sign_of_gap() {
    assert_eq!(NeutralityStatus::classify(1.0, false), NeutralityStatus::CarbonPositive);
    assert_eq!(NeutralityStatus::classify(0.0, false), NeutralityStatus::CarbonNeutral);
    assert_eq!(NeutralityStatus::classify(-1.0, false), NeutralityStatus::CarbonNegative);
    assert_eq!(NeutralityStatus::classify(-1.0, true), NeutralityStatus::NoActivity);
}

#[test]
fn repeated_calls_are_identical() {
    let first = analyze_gap(45_000.0, 20_000.0, FOREST_KG_PER_HECTARE_YEAR).expect("first");
    let second = analyze_gap(45_000.0, 20_000.0, FOREST_KG_PER_HECTARE_YEAR).expect("second");
    assert_eq!(first, second);
}
