use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::{CoalZeroConfig, Snapshot};
use crate::emissions::{estimate_emissions, EmissionResult};
use crate::error::Result;
use crate::gap::{analyze_gap, GapResult, NeutralityStatus};
use crate::report::{emission_breakdown, SourceShare};
use crate::scenario::{impact, simulate, ScenarioImpact, ScenarioParams, ScenarioResult};
use crate::sinks::{estimate_sinks, SinkResult};

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub params: ScenarioParams,
    pub result: ScenarioResult,
    pub impact: ScenarioImpact,
    pub status: NeutralityStatus,
}

/// Everything derived from one input snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub generated_at: DateTime<Utc>,
    pub snapshot: Snapshot,
    pub emissions: EmissionResult,
    pub breakdown: Vec<SourceShare>,
    pub sinks: SinkResult,
    pub gap: GapResult,
    pub status: NeutralityStatus,
    pub scenario: Option<ScenarioOutcome>,
}

/// Recomputes the full chain from scratch. Nothing is cached between calls.
pub fn evaluate(snapshot: &Snapshot, config: &CoalZeroConfig) -> Result<Assessment> {
    let emissions = estimate_emissions(&snapshot.activity, &config.emission_factors)?;
    let sinks = estimate_sinks(&snapshot.sinks, &config.absorption_rates)?;
    let gap = analyze_gap(
        emissions.total_kg,
        sinks.total_kg,
        config.absorption_rates.forest_kg_per_hectare_year,
    )?;
    let idle = snapshot.activity.is_idle();
    let status = NeutralityStatus::classify(gap.gap_kg, idle);
    debug!(
        total_kg = emissions.total_kg,
        sinks_kg = sinks.total_kg,
        gap_kg = gap.gap_kg,
        %status,
        "Evaluated baseline"
    );

    let scenario = match snapshot.scenario {
        Some(input) => {
            let params = input.resolve(&config.pricing);
            let result = simulate(&emissions, &sinks, &params, &config.absorption_rates)?;
            let status = NeutralityStatus::classify(result.projected_gap_kg, idle);
            debug!(
                projected_gap_kg = result.projected_gap_kg,
                %status,
                "Evaluated scenario"
            );
            Some(ScenarioOutcome {
                params,
                impact: impact(&emissions, &sinks, &result),
                result,
                status,
            })
        }
        None => None,
    };

    Ok(Assessment {
        generated_at: Utc::now(),
        snapshot: *snapshot,
        breakdown: emission_breakdown(&emissions),
        emissions,
        sinks,
        gap,
        status,
        scenario,
    })
}
