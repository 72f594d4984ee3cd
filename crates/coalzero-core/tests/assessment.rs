use coalzero_core::assessment::evaluate;
use coalzero_core::config::{CoalZeroConfig, ScenarioInput, Snapshot};
use coalzero_core::emissions::ActivityInputs;
use coalzero_core::gap::NeutralityStatus;
use coalzero_core::report::{emission_breakdown, write_breakdown_csv, write_json, EmissionSource};
use coalzero_core::sinks::SinkInputs;
use coalzero_core::CoalZeroError;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

fn literal_snapshot() -> Snapshot {
    Snapshot {
        activity: ActivityInputs {
            diesel_litres: 1000.0,
            electricity_kwh: 2000.0,
            excavation_tonnes: 500.0,
            transport_tonne_km: 10_000.0,
            workforce_count: 1,
        },
        sinks: SinkInputs {
            plantation_hectares: 1.0,
            tree_count: 100,
        },
        scenario: None,
    }
}

#[test]
fn literal_case_end_to_end() {
    let assessment = evaluate(&literal_snapshot(), &CoalZeroConfig::default()).expect("evaluate");

    assert!(close(assessment.emissions.total_kg, 5015.0));
    assert!(close(assessment.sinks.total_kg, 12_200.0));
    assert!(close(assessment.gap.gap_kg, -7185.0));
    assert!(assessment.gap.is_neutral);
    assert_eq!(assessment.gap.land_required_hectares, 0.0);
    assert_eq!(assessment.status, NeutralityStatus::CarbonNegative);
    assert!(assessment.scenario.is_none());
}

#[test]
fn deficit_with_scenario() {
    let mut snapshot = literal_snapshot();
    snapshot.sinks = SinkInputs::default();
    snapshot.scenario = Some(ScenarioInput {
        afforestation_hectares_added: 1.0,
        ..ScenarioInput::default()
    });

    let assessment = evaluate(&snapshot, &CoalZeroConfig::default()).expect("evaluate");

    assert_eq!(assessment.status, NeutralityStatus::CarbonPositive);
    assert!(close(assessment.gap.land_required_hectares, 0.5015));

    let outcome = assessment.scenario.expect("scenario outcome");
    assert!(close(outcome.result.projected_gap_kg, 5015.0 - 10_000.0));
    assert_eq!(outcome.status, NeutralityStatus::CarbonNegative);
    assert_eq!(outcome.params.carbon_credit_price_per_tonne, 15.0);
    assert!(close(outcome.impact.sink_increase_kg, 10_000.0));
}

#[test]
fn idle_operation_reports_no_activity() {
    let mut snapshot = literal_snapshot();
    snapshot.activity = ActivityInputs {
        diesel_litres: 0.0,
        electricity_kwh: 0.0,
        excavation_tonnes: 0.0,
        transport_tonne_km: 0.0,
        workforce_count: 10,
    };

    let assessment = evaluate(&snapshot, &CoalZeroConfig::default()).expect("evaluate");
    assert_eq!(assessment.status, NeutralityStatus::NoActivity);
    assert!(assessment.breakdown.iter().all(|row| row.share_pct == 0.0));
}

#[test]
fn invalid_scenario_surfaces_invalid_input() {
    let mut snapshot = literal_snapshot();
    snapshot.scenario = Some(ScenarioInput {
        renewable_pct: 150.0,
        ..ScenarioInput::default()
    });

    let err = evaluate(&snapshot, &CoalZeroConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        CoalZeroError::InvalidInput(ref invalid) if invalid.field == "renewable_pct"
    ));
}

#[test]
fn overflowing_activity_is_reported_against_its_input() {
    let mut snapshot = literal_snapshot();
    snapshot.activity.diesel_litres = 1e308;

    let err = evaluate(&snapshot, &CoalZeroConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        CoalZeroError::InvalidInput(ref invalid) if invalid.field == "diesel_litres"
    ));
}

#[test]
fn breakdown_shares_sum_to_hundred() {
    let assessment = evaluate(&literal_snapshot(), &CoalZeroConfig::default()).expect("evaluate");
    let rows = emission_breakdown(&assessment.emissions);

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].source, EmissionSource::Diesel);
    assert!(close(rows[0].tonnes, 2.68));
    let total: f64 = rows.iter().map(|row| row.share_pct).sum();
    assert!(close(total, 100.0));
}

#[test]
fn breakdown_csv_has_header_and_rows() {
    let assessment = evaluate(&literal_snapshot(), &CoalZeroConfig::default()).expect("evaluate");
    let mut buffer = Vec::new();
    write_breakdown_csv(&assessment.breakdown, &mut buffer).expect("csv");

    let text = String::from_utf8(buffer).expect("utf8");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("source,kg,tonnes,share_pct"));
    assert!(lines.next().expect("diesel row").starts_with("diesel,"));
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn json_report_contains_status_and_gap() {
    let assessment = evaluate(&literal_snapshot(), &CoalZeroConfig::default()).expect("evaluate");
    let mut buffer = Vec::new();
    write_json(&assessment, &mut buffer).expect("json");

    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("parse json");
    assert_eq!(value["status"], "carbon_negative");
    assert_eq!(value["gap"]["is_neutral"], true);
    assert!(value["generated_at"].is_string());
}
