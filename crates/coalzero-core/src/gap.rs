use std::fmt;

use serde::Serialize;

use crate::error::{non_negative, InvalidInput};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GapResult {
    /// Emissions minus absorption. Negative means surplus absorption.
    pub gap_kg: f64,
    pub is_neutral: bool,
    /// Extra plantation needed to close a positive gap, zero otherwise.
    pub land_required_hectares: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralityStatus {
    NoActivity,
    CarbonPositive,
    CarbonNeutral,
    CarbonNegative,
}

impl NeutralityStatus {
    pub fn classify(gap_kg: f64, idle: bool) -> Self {
        if idle {
            Self::NoActivity
        } else if gap_kg > 0.0 {
            Self::CarbonPositive
        } else if gap_kg < 0.0 {
            Self::CarbonNegative
        } else {
            Self::CarbonNeutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoActivity => "No production data",
            Self::CarbonPositive => "Carbon positive",
            Self::CarbonNeutral => "Carbon neutral",
            Self::CarbonNegative => "Carbon negative",
        }
    }
}

impl fmt::Display for NeutralityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn analyze_gap(
    emissions_total_kg: f64,
    sinks_total_kg: f64,
    forest_kg_per_hectare_year: f64,
) -> Result<GapResult, InvalidInput> {
    let emissions = non_negative("emissions_total_kg", emissions_total_kg)?;
    let sinks = non_negative("sinks_total_kg", sinks_total_kg)?;
    let forest_rate = non_negative("forest_kg_per_hectare_year", forest_kg_per_hectare_year)?;
    if forest_rate == 0.0 {
        return Err(InvalidInput::new(
            "forest_kg_per_hectare_year",
            forest_rate,
            "must be greater than zero",
        ));
    }

    let gap_kg = emissions - sinks;
    let land_required_hectares = if gap_kg > 0.0 {
        gap_kg / forest_rate
    } else {
        0.0
    };

    Ok(GapResult {
        gap_kg,
        is_neutral: gap_kg <= 0.0,
        land_required_hectares,
    })
}
