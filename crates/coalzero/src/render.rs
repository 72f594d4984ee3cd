use coalzero_core::{
    assessment::{Assessment, ScenarioOutcome},
    config::CoalZeroConfig,
    factors::{hectares_to_acres, kg_to_tonnes},
    gap::NeutralityStatus,
};
use comfy_table::Table;

pub fn factors_table(config: &CoalZeroConfig) -> Table {
    let factors = &config.emission_factors;
    let rates = &config.absorption_rates;

    let rows = [
        ("Diesel", factors.diesel_kg_per_litre, "kg CO2/litre"),
        ("Electricity", factors.electricity_kg_per_kwh, "kg CO2/kWh"),
        ("Excavation", factors.excavation_kg_per_tonne, "kg CO2/tonne"),
        ("Transport", factors.transport_kg_per_tonne_km, "kg CO2/tonne-km"),
        ("Forest absorption", rates.forest_kg_per_hectare_year, "kg CO2/hectare/year"),
        ("Tree absorption", rates.tree_kg_per_tree_year, "kg CO2/tree/year"),
        ("Carbon credit price", config.pricing.price_per_tonne, "USD/tonne CO2"),
    ];

    let mut table = Table::new();
    table.set_header(vec!["Factor", "Value", "Unit"]);
    for (label, value, unit) in rows {
        table.add_row(vec![label.to_string(), value.to_string(), unit.to_string()]);
    }
    table
}

/// Full terminal report: footprint summary, source breakdown, and scenario
/// projection when one was requested.
pub fn assessment_report(assessment: &Assessment) -> String {
    let mut sections = vec![summary_table(assessment).to_string()];
    sections.push(breakdown_table(assessment).to_string());
    sections.push(status_line(
        assessment.status,
        assessment.gap.gap_kg,
        assessment.gap.land_required_hectares,
    ));

    if let Some(outcome) = &assessment.scenario {
        sections.push(scenario_table(assessment, outcome).to_string());
        sections.push(scenario_line(outcome));
    }

    sections.join("\n\n")
}

fn summary_table(assessment: &Assessment) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Current footprint", "tonnes CO2e/year"]);
    table.add_row(vec!["Total emissions".to_string(), tonnes(assessment.emissions.total_kg)]);
    table.add_row(vec!["Carbon sinks".to_string(), tonnes(assessment.sinks.total_kg)]);
    table.add_row(vec!["Emission gap".to_string(), tonnes(assessment.gap.gap_kg)]);
    table.add_row(vec![
        "Per capita (kg/person)".to_string(),
        format!("{:.2}", assessment.emissions.per_capita_kg),
    ]);
    table
}

fn breakdown_table(assessment: &Assessment) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Activity", "kg CO2e", "tonnes", "share"]);
    for row in &assessment.breakdown {
        table.add_row(vec![
            row.source.to_string(),
            format!("{:.2}", row.kg),
            format!("{:.2}", row.tonnes),
            format!("{:.1}%", row.share_pct),
        ]);
    }
    table
}

fn scenario_table(assessment: &Assessment, outcome: &ScenarioOutcome) -> Table {
    let result = &outcome.result;
    let impact = &outcome.impact;

    let mut table = Table::new();
    table.set_header(vec!["Scenario", "Before (t)", "After (t)", "Change"]);
    table.add_row(vec![
        "Emissions".to_string(),
        tonnes(assessment.emissions.total_kg),
        tonnes(result.projected_emissions_kg),
        percent_or_na(impact.emission_reduction_pct.map(|pct| -pct)),
    ]);
    table.add_row(vec![
        "Sinks".to_string(),
        tonnes(assessment.sinks.total_kg),
        tonnes(result.projected_sinks_kg),
        percent_or_na(impact.sink_increase_pct),
    ]);
    table.add_row(vec![
        "Net gap".to_string(),
        tonnes(assessment.gap.gap_kg),
        tonnes(result.projected_gap_kg),
        format!("{} improvement", tonnes(impact.gap_improvement_kg)),
    ]);
    table.add_row(vec![
        "Credits purchased".to_string(),
        String::new(),
        format!("{:.2}", outcome.params.carbon_credit_tonnes_purchased),
        format!("${:.2}", result.credit_cost),
    ]);
    table
}

fn status_line(status: NeutralityStatus, gap_kg: f64, land_hectares: f64) -> String {
    match status {
        NeutralityStatus::NoActivity => {
            "No production data entered; enter operational quantities to estimate emissions."
                .to_string()
        }
        NeutralityStatus::CarbonPositive => format!(
            "{status}: emits {} tonnes more CO2 than it absorbs. About {land_hectares:.2} hectares ({:.2} acres) of additional plantation would close the gap.",
            tonnes(gap_kg),
            hectares_to_acres(land_hectares),
        ),
        NeutralityStatus::CarbonNeutral | NeutralityStatus::CarbonNegative => {
            format!("{status}: absorption meets or exceeds emissions.")
        }
    }
}

fn scenario_line(outcome: &ScenarioOutcome) -> String {
    match outcome.status {
        NeutralityStatus::NoActivity => {
            "No production data entered; scenario has nothing to reduce.".to_string()
        }
        NeutralityStatus::CarbonPositive => format!(
            "Still carbon positive: offsetting the remaining {} tonnes would cost about ${:.2}.",
            tonnes(outcome.result.projected_gap_kg),
            outcome.result.residual_credit_cost,
        ),
        status => format!("{status} with these strategies."),
    }
}

fn tonnes(kg: f64) -> String {
    format!("{:.2}", kg_to_tonnes(kg))
}

fn percent_or_na(pct: Option<f64>) -> String {
    pct.map_or_else(|| "N/A".to_string(), |pct| format!("{pct:+.1}%"))
}
