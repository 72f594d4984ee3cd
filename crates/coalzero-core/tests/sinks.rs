use coalzero_core::factors::AbsorptionRates;
use coalzero_core::sinks::{estimate_sinks, SinkInputs};

#[test]
fn area_and_trees_use_published_rates() {
    let inputs = SinkInputs {
        plantation_hectares: 1.0,
        tree_count: 100,
    };
    let result = estimate_sinks(&inputs, &AbsorptionRates::default()).expect("sinks");

    assert_eq!(result.area_based_kg, 10_000.0);
    assert_eq!(result.tree_based_kg, 2_200.0);
    assert_eq!(result.total_kg, 12_200.0);
}

#[test]
fn total_is_area_plus_trees() {
    let inputs = SinkInputs {
        plantation_hectares: 10.5,
        tree_count: 1_234,
    };
    let result = estimate_sinks(&inputs, &AbsorptionRates::default()).expect("sinks");
    assert_eq!(result.total_kg, result.area_based_kg + result.tree_based_kg);
}

#[test]
fn empty_inputs_absorb_nothing() {
    let result =
        estimate_sinks(&SinkInputs::default(), &AbsorptionRates::default()).expect("sinks");
    assert_eq!(result.total_kg, 0.0);
}

#[test]
fn more_cover_absorbs_more() {
    let rates = AbsorptionRates::default();
    let base = SinkInputs {
        plantation_hectares: 2.0,
        tree_count: 10,
    };
    let baseline = estimate_sinks(&base, &rates).expect("baseline").total_kg;

    let more_area = SinkInputs {
        plantation_hectares: 2.5,
        ..base
    };
    let more_trees = SinkInputs {
        tree_count: 11,
        ..base
    };
    assert!(estimate_sinks(&more_area, &rates).expect("area").total_kg > baseline);
    assert!(estimate_sinks(&more_trees, &rates).expect("trees").total_kg > baseline);
}

#[test]
fn negative_area_is_rejected() {
    let inputs = SinkInputs {
        plantation_hectares: -0.5,
        tree_count: 0,
    };
    let err = estimate_sinks(&inputs, &AbsorptionRates::default()).unwrap_err();
    assert_eq!(err.field, "plantation_hectares");
}

#[test]
fn overflowing_area_names_source_field() {
    let inputs = SinkInputs {
        plantation_hectares: 1e305,
        tree_count: 0,
    };
    let err = estimate_sinks(&inputs, &AbsorptionRates::default()).unwrap_err();
    assert_eq!(err.field, "plantation_hectares");
    assert_eq!(err.reason, "result exceeds representable range");
}

#[test]
fn repeated_calls_are_identical() {
    let rates = AbsorptionRates::default();
    let inputs = SinkInputs {
        plantation_hectares: 12.5,
        tree_count: 340,
    };
    let first = estimate_sinks(&inputs, &rates).expect("first");
    let second = estimate_sinks(&inputs, &rates).expect("second");
    assert_eq!(first, second);
}
