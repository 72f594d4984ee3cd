use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::assessment::Assessment;
use crate::emissions::EmissionResult;
use crate::error::Result;
use crate::factors::kg_to_tonnes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionSource {
    Diesel,
    Electricity,
    Excavation,
    Transport,
}

impl EmissionSource {
    pub const ALL: [EmissionSource; 4] = [
        EmissionSource::Diesel,
        EmissionSource::Electricity,
        EmissionSource::Excavation,
        EmissionSource::Transport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Diesel => "Diesel combustion",
            Self::Electricity => "Electricity",
            Self::Excavation => "Excavation",
            Self::Transport => "Transportation",
        }
    }

    pub fn kg_in(&self, emissions: &EmissionResult) -> f64 {
        match self {
            Self::Diesel => emissions.diesel_kg,
            Self::Electricity => emissions.electricity_kg,
            Self::Excavation => emissions.excavation_kg,
            Self::Transport => emissions.transport_kg,
        }
    }
}

impl fmt::Display for EmissionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceShare {
    pub source: EmissionSource,
    pub kg: f64,
    pub tonnes: f64,
    /// Percent of total emissions; zero when nothing is emitted.
    pub share_pct: f64,
}

pub fn emission_breakdown(emissions: &EmissionResult) -> Vec<SourceShare> {
    EmissionSource::ALL
        .iter()
        .map(|&source| {
            let kg = source.kg_in(emissions);
            let share_pct = if emissions.total_kg > 0.0 {
                kg / emissions.total_kg * 100.0
            } else {
                0.0
            };
            SourceShare {
                source,
                kg,
                tonnes: kg_to_tonnes(kg),
                share_pct,
            }
        })
        .collect()
}

pub fn write_json<W: Write>(assessment: &Assessment, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, assessment)?;
    Ok(())
}

/// Writes the per-source breakdown as CSV, one row per source.
pub fn write_breakdown_csv<W: Write>(breakdown: &[SourceShare], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in breakdown {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
