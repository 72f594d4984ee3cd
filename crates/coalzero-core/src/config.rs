use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::emissions::ActivityInputs;
use crate::error::Result;
use crate::factors::{AbsorptionRates, CreditPricing, EmissionFactors};
use crate::scenario::ScenarioParams;
use crate::sinks::SinkInputs;

/// Factor tables used by every computation. Missing tables fall back to the
/// published constants.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoalZeroConfig {
    pub emission_factors: EmissionFactors,
    pub absorption_rates: AbsorptionRates,
    pub pricing: CreditPricing,
}

impl CoalZeroConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading factor configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.emission_factors.validate()?;
        self.absorption_rates.validate()?;
        self.pricing.validate()?;
        Ok(())
    }
}

/// Every input of one interaction: operational data, existing sinks, and an
/// optional mitigation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub activity: ActivityInputs,
    #[serde(default)]
    pub sinks: SinkInputs,
    #[serde(default)]
    pub scenario: Option<ScenarioInput>,
}

/// Scenario levers as written in a snapshot file. An omitted credit price
/// resolves to the configured market price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioInput {
    pub electrification_pct: f64,
    pub renewable_pct: f64,
    pub afforestation_hectares_added: f64,
    pub trees_added: u64,
    pub carbon_credit_tonnes_purchased: f64,
    pub carbon_credit_price_per_tonne: Option<f64>,
}

impl ScenarioInput {
    pub fn resolve(&self, pricing: &CreditPricing) -> ScenarioParams {
        ScenarioParams {
            electrification_pct: self.electrification_pct,
            renewable_pct: self.renewable_pct,
            afforestation_hectares_added: self.afforestation_hectares_added,
            trees_added: self.trees_added,
            carbon_credit_tonnes_purchased: self.carbon_credit_tonnes_purchased,
            carbon_credit_price_per_tonne: self
                .carbon_credit_price_per_tonne
                .unwrap_or(pricing.price_per_tonne),
        }
    }
}

impl Snapshot {
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading input snapshot");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
