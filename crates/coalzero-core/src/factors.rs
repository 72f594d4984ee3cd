use serde::{Deserialize, Serialize};

use crate::error::{non_negative, InvalidInput};

pub const DIESEL_KG_PER_LITRE: f64 = 2.68;
/// Grid electricity, coal-dominated mix.
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.82;
pub const EXCAVATION_KG_PER_TONNE: f64 = 0.15;
/// Heavy haul trucks.
pub const TRANSPORT_KG_PER_TONNE_KM: f64 = 0.062;

/// Mature forest, per hectare per year.
pub const FOREST_KG_PER_HECTARE_YEAR: f64 = 10_000.0;
pub const TREE_KG_PER_TREE_YEAR: f64 = 22.0;

/// Indicative offset price in USD per tonne CO2e.
pub const CARBON_CREDIT_PRICE_PER_TONNE: f64 = 15.0;

pub const KG_PER_TONNE: f64 = 1000.0;
pub const ACRES_PER_HECTARE: f64 = 2.47;

pub fn kg_to_tonnes(kg: f64) -> f64 {
    kg / KG_PER_TONNE
}

pub fn hectares_to_acres(hectares: f64) -> f64 {
    hectares * ACRES_PER_HECTARE
}

/// Fixed multipliers from activity quantities to kg CO2e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmissionFactors {
    pub diesel_kg_per_litre: f64,
    pub electricity_kg_per_kwh: f64,
    pub excavation_kg_per_tonne: f64,
    pub transport_kg_per_tonne_km: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            diesel_kg_per_litre: DIESEL_KG_PER_LITRE,
            electricity_kg_per_kwh: ELECTRICITY_KG_PER_KWH,
            excavation_kg_per_tonne: EXCAVATION_KG_PER_TONNE,
            transport_kg_per_tonne_km: TRANSPORT_KG_PER_TONNE_KM,
        }
    }
}

impl EmissionFactors {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        non_negative("diesel_kg_per_litre", self.diesel_kg_per_litre)?;
        non_negative("electricity_kg_per_kwh", self.electricity_kg_per_kwh)?;
        non_negative("excavation_kg_per_tonne", self.excavation_kg_per_tonne)?;
        non_negative("transport_kg_per_tonne_km", self.transport_kg_per_tonne_km)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AbsorptionRates {
    pub forest_kg_per_hectare_year: f64,
    pub tree_kg_per_tree_year: f64,
}

impl Default for AbsorptionRates {
    fn default() -> Self {
        Self {
            forest_kg_per_hectare_year: FOREST_KG_PER_HECTARE_YEAR,
            tree_kg_per_tree_year: TREE_KG_PER_TREE_YEAR,
        }
    }
}

impl AbsorptionRates {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        let forest = non_negative("forest_kg_per_hectare_year", self.forest_kg_per_hectare_year)?;
        if forest == 0.0 {
            return Err(InvalidInput::new(
                "forest_kg_per_hectare_year",
                forest,
                "must be greater than zero",
            ));
        }
        non_negative("tree_kg_per_tree_year", self.tree_kg_per_tree_year)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreditPricing {
    pub price_per_tonne: f64,
}

impl Default for CreditPricing {
    fn default() -> Self {
        Self {
            price_per_tonne: CARBON_CREDIT_PRICE_PER_TONNE,
        }
    }
}

impl CreditPricing {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        non_negative("price_per_tonne", self.price_per_tonne)?;
        Ok(())
    }
}
