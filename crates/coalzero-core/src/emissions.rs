use serde::{Deserialize, Serialize};

use crate::error::{in_range, non_negative, InvalidInput};
use crate::factors::EmissionFactors;

/// Annual operational quantities for one mine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivityInputs {
    pub diesel_litres: f64,
    pub electricity_kwh: f64,
    pub excavation_tonnes: f64,
    pub transport_tonne_km: f64,
    pub workforce_count: u32,
}

impl ActivityInputs {
    /// True when every emitting quantity is zero. Workforce does not count.
    pub fn is_idle(&self) -> bool {
        self.diesel_litres == 0.0
            && self.electricity_kwh == 0.0
            && self.excavation_tonnes == 0.0
            && self.transport_tonne_km == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionResult {
    pub diesel_kg: f64,
    pub electricity_kg: f64,
    pub excavation_kg: f64,
    pub transport_kg: f64,
    pub total_kg: f64,
    pub per_capita_kg: f64,
}

/// Haulage activity from extracted tonnes and average trip distance.
pub fn tonne_km(excavation_tonnes: f64, distance_km: f64) -> Result<f64, InvalidInput> {
    let tonnes = non_negative("excavation_tonnes", excavation_tonnes)?;
    let distance_km = non_negative("transport_distance_km", distance_km)?;
    in_range("transport_distance_km", distance_km, tonnes * distance_km)
}

pub fn estimate_emissions(
    inputs: &ActivityInputs,
    factors: &EmissionFactors,
) -> Result<EmissionResult, InvalidInput> {
    factors.validate()?;

    let diesel_litres = non_negative("diesel_litres", inputs.diesel_litres)?;
    let electricity_kwh = non_negative("electricity_kwh", inputs.electricity_kwh)?;
    let excavation_tonnes = non_negative("excavation_tonnes", inputs.excavation_tonnes)?;
    let transport_tonne_km = non_negative("transport_tonne_km", inputs.transport_tonne_km)?;
    if inputs.workforce_count == 0 {
        return Err(InvalidInput::new(
            "workforce_count",
            0.0,
            "must be at least 1 for per-capita emissions",
        ));
    }

    let diesel_kg = in_range(
        "diesel_litres",
        diesel_litres,
        diesel_litres * factors.diesel_kg_per_litre,
    )?;
    let electricity_kg = in_range(
        "electricity_kwh",
        electricity_kwh,
        electricity_kwh * factors.electricity_kg_per_kwh,
    )?;
    let excavation_kg = in_range(
        "excavation_tonnes",
        excavation_tonnes,
        excavation_tonnes * factors.excavation_kg_per_tonne,
    )?;
    let transport_kg = in_range(
        "transport_tonne_km",
        transport_tonne_km,
        transport_tonne_km * factors.transport_kg_per_tonne_km,
    )?;
    let total_kg = diesel_kg + electricity_kg + excavation_kg + transport_kg;
    if !total_kg.is_finite() {
        return Err(InvalidInput::new(
            "total_kg",
            total_kg,
            "sum of sources exceeds representable range",
        ));
    }

    Ok(EmissionResult {
        diesel_kg,
        electricity_kg,
        excavation_kg,
        transport_kg,
        total_kg,
        per_capita_kg: total_kg / f64::from(inputs.workforce_count),
    })
}
