use serde::{Deserialize, Serialize};

use crate::error::{in_range, non_negative, InvalidInput};
use crate::factors::AbsorptionRates;

/// Existing green cover around the mine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SinkInputs {
    pub plantation_hectares: f64,
    #[serde(default)]
    pub tree_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SinkResult {
    pub area_based_kg: f64,
    pub tree_based_kg: f64,
    pub total_kg: f64,
}

pub fn estimate_sinks(
    inputs: &SinkInputs,
    rates: &AbsorptionRates,
) -> Result<SinkResult, InvalidInput> {
    rates.validate()?;
    let hectares = non_negative("plantation_hectares", inputs.plantation_hectares)?;
    let trees = inputs.tree_count as f64;

    let area_based_kg = in_range(
        "plantation_hectares",
        hectares,
        hectares * rates.forest_kg_per_hectare_year,
    )?;
    let tree_based_kg = in_range("tree_count", trees, trees * rates.tree_kg_per_tree_year)?;
    let total_kg = in_range("plantation_hectares", hectares, area_based_kg + tree_based_kg)?;

    Ok(SinkResult {
        area_based_kg,
        tree_based_kg,
        total_kg,
    })
}
