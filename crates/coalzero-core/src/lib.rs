pub mod assessment;
pub mod config;
pub mod emissions;
pub mod error;
pub mod factors;
pub mod gap;
pub mod report;
pub mod scenario;
pub mod sinks;

pub use assessment::{evaluate, Assessment, ScenarioOutcome};
pub use config::{CoalZeroConfig, ScenarioInput, Snapshot};
pub use emissions::{estimate_emissions, tonne_km, ActivityInputs, EmissionResult};
pub use error::{CoalZeroError, InvalidInput, Result};
pub use factors::{AbsorptionRates, CreditPricing, EmissionFactors};
pub use gap::{analyze_gap, GapResult, NeutralityStatus};
pub use scenario::{impact, simulate, ScenarioImpact, ScenarioParams, ScenarioResult};
pub use sinks::{estimate_sinks, SinkInputs, SinkResult};
