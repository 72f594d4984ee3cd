//! What-if mitigation levers applied on top of a baseline estimate.
//!
//! Every lever acts on its own component. Electrification scales the diesel
//! share, renewable switching scales the electricity share, afforestation and
//! tree planting add absorption, and purchased credits offset the reported gap
//! without touching physical emissions or sinks.

use serde::Serialize;

use crate::emissions::EmissionResult;
use crate::error::{in_range, non_negative, percentage, InvalidInput};
use crate::factors::{AbsorptionRates, CARBON_CREDIT_PRICE_PER_TONNE, KG_PER_TONNE};
use crate::sinks::SinkResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioParams {
    /// Share of the diesel fleet replaced by electric equipment, 0 to 100.
    pub electrification_pct: f64,
    /// Share of grid electricity replaced by renewables, 0 to 100.
    pub renewable_pct: f64,
    pub afforestation_hectares_added: f64,
    pub trees_added: u64,
    pub carbon_credit_tonnes_purchased: f64,
    pub carbon_credit_price_per_tonne: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            electrification_pct: 0.0,
            renewable_pct: 0.0,
            afforestation_hectares_added: 0.0,
            trees_added: 0,
            carbon_credit_tonnes_purchased: 0.0,
            carbon_credit_price_per_tonne: CARBON_CREDIT_PRICE_PER_TONNE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub projected_diesel_kg: f64,
    pub projected_electricity_kg: f64,
    pub projected_emissions_kg: f64,
    pub projected_sinks_kg: f64,
    /// Net of purchased credits; negative means surplus.
    pub projected_gap_kg: f64,
    /// Spend on the purchased credits.
    pub credit_cost: f64,
    /// Spend needed to offset whatever gap remains after all levers.
    pub residual_credit_cost: f64,
}

/// Before/after comparison of a scenario against its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioImpact {
    pub emission_reduction_kg: f64,
    pub emission_reduction_pct: Option<f64>,
    pub sink_increase_kg: f64,
    pub sink_increase_pct: Option<f64>,
    pub gap_improvement_kg: f64,
}

pub fn simulate(
    baseline_emissions: &EmissionResult,
    baseline_sinks: &SinkResult,
    params: &ScenarioParams,
    rates: &AbsorptionRates,
) -> Result<ScenarioResult, InvalidInput> {
    rates.validate()?;
    let electrification = percentage("electrification_pct", params.electrification_pct)?;
    let renewable = percentage("renewable_pct", params.renewable_pct)?;
    let hectares_added = non_negative(
        "afforestation_hectares_added",
        params.afforestation_hectares_added,
    )?;
    let credit_tonnes = non_negative(
        "carbon_credit_tonnes_purchased",
        params.carbon_credit_tonnes_purchased,
    )?;
    let credit_price = non_negative(
        "carbon_credit_price_per_tonne",
        params.carbon_credit_price_per_tonne,
    )?;

    let diesel_kg = non_negative("diesel_kg", baseline_emissions.diesel_kg)?;
    let electricity_kg = non_negative("electricity_kg", baseline_emissions.electricity_kg)?;
    let excavation_kg = non_negative("excavation_kg", baseline_emissions.excavation_kg)?;
    let transport_kg = non_negative("transport_kg", baseline_emissions.transport_kg)?;
    let sinks_kg = non_negative("sinks_total_kg", baseline_sinks.total_kg)?;

    let projected_diesel_kg = diesel_kg * (1.0 - electrification / 100.0);
    let projected_electricity_kg = electricity_kg * (1.0 - renewable / 100.0);
    let projected_emissions_kg = in_range(
        "total_kg",
        baseline_emissions.total_kg,
        projected_diesel_kg + projected_electricity_kg + excavation_kg + transport_kg,
    )?;

    let trees_added = params.trees_added as f64;
    let forest_added_kg = in_range(
        "afforestation_hectares_added",
        hectares_added,
        hectares_added * rates.forest_kg_per_hectare_year,
    )?;
    let projected_sinks_kg = in_range(
        "afforestation_hectares_added",
        hectares_added,
        sinks_kg + forest_added_kg + trees_added * rates.tree_kg_per_tree_year,
    )?;

    let credit_offset_kg = in_range(
        "carbon_credit_tonnes_purchased",
        credit_tonnes,
        credit_tonnes * KG_PER_TONNE,
    )?;
    let credit_cost = in_range(
        "carbon_credit_price_per_tonne",
        credit_price,
        credit_tonnes * credit_price,
    )?;
    let projected_gap_kg = in_range(
        "carbon_credit_tonnes_purchased",
        credit_tonnes,
        projected_emissions_kg - projected_sinks_kg - credit_offset_kg,
    )?;
    let residual_credit_cost = if projected_gap_kg > 0.0 {
        in_range(
            "carbon_credit_price_per_tonne",
            credit_price,
            projected_gap_kg / KG_PER_TONNE * credit_price,
        )?
    } else {
        0.0
    };

    Ok(ScenarioResult {
        projected_diesel_kg,
        projected_electricity_kg,
        projected_emissions_kg,
        projected_sinks_kg,
        projected_gap_kg,
        credit_cost,
        residual_credit_cost,
    })
}

pub fn impact(
    baseline_emissions: &EmissionResult,
    baseline_sinks: &SinkResult,
    projected: &ScenarioResult,
) -> ScenarioImpact {
    let emission_reduction_kg = baseline_emissions.total_kg - projected.projected_emissions_kg;
    let sink_increase_kg = projected.projected_sinks_kg - baseline_sinks.total_kg;
    let baseline_gap_kg = baseline_emissions.total_kg - baseline_sinks.total_kg;

    ScenarioImpact {
        emission_reduction_kg,
        emission_reduction_pct: share_of(emission_reduction_kg, baseline_emissions.total_kg),
        sink_increase_kg,
        sink_increase_pct: share_of(sink_increase_kg, baseline_sinks.total_kg),
        gap_improvement_kg: baseline_gap_kg - projected.projected_gap_kg,
    }
}

fn share_of(part: f64, whole: f64) -> Option<f64> {
    (whole > 0.0).then(|| part / whole * 100.0)
}
