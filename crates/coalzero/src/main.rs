use std::env;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use coalzero_core::{
    config::{CoalZeroConfig, ScenarioInput, Snapshot},
    emissions::{tonne_km, ActivityInputs},
    evaluate, report,
    sinks::SinkInputs,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Coal mine carbon footprint and neutrality planner", long_about = None)]
struct Cli {
    /// Factor configuration file (TOML). Falls back to COALZERO_CONFIG, then built-in constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate emissions, sinks and the neutrality gap from command-line inputs
    Estimate(EstimateArgs),
    /// Evaluate an input snapshot file
    Run(RunArgs),
    /// Print the active emission factors and absorption rates
    Factors,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Diesel consumed (litres/year)
    #[arg(long, default_value_t = 0.0)]
    diesel_litres: f64,
    /// Grid electricity consumed (kWh/year)
    #[arg(long, default_value_t = 0.0)]
    electricity_kwh: f64,
    /// Coal extracted (tonnes/year)
    #[arg(long, default_value_t = 0.0)]
    excavation_tonnes: f64,
    /// Haulage activity (tonne-km/year)
    #[arg(long, conflicts_with = "transport_distance_km")]
    transport_tonne_km: Option<f64>,
    /// Average haul distance (km); multiplied by the extracted tonnes
    #[arg(long)]
    transport_distance_km: Option<f64>,
    /// Number of workers
    #[arg(long, default_value_t = 1)]
    workforce: u32,
    /// Existing plantation area (hectares)
    #[arg(long, default_value_t = 0.0)]
    plantation_hectares: f64,
    /// Existing individual trees
    #[arg(long, default_value_t = 0)]
    tree_count: u64,
    #[command(flatten)]
    scenario: ScenarioArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Args, Debug, Default)]
struct ScenarioArgs {
    /// Percent of the diesel fleet electrified
    #[arg(long)]
    electrification_pct: Option<f64>,
    /// Percent of electricity from renewables
    #[arg(long)]
    renewable_pct: Option<f64>,
    /// Plantation hectares added
    #[arg(long)]
    afforestation_hectares: Option<f64>,
    /// Trees planted
    #[arg(long)]
    trees_added: Option<u64>,
    /// Carbon credits purchased (tonnes)
    #[arg(long)]
    credit_tonnes: Option<f64>,
    /// Credit price (USD/tonne); defaults to the configured market price
    #[arg(long)]
    credit_price: Option<f64>,
}

impl ScenarioArgs {
    fn to_input(&self) -> Option<ScenarioInput> {
        let requested = self.electrification_pct.is_some()
            || self.renewable_pct.is_some()
            || self.afforestation_hectares.is_some()
            || self.trees_added.is_some()
            || self.credit_tonnes.is_some()
            || self.credit_price.is_some();
        if !requested {
            return None;
        }

        Some(ScenarioInput {
            electrification_pct: self.electrification_pct.unwrap_or(0.0),
            renewable_pct: self.renewable_pct.unwrap_or(0.0),
            afforestation_hectares_added: self.afforestation_hectares.unwrap_or(0.0),
            trees_added: self.trees_added.unwrap_or(0),
            carbon_credit_tonnes_purchased: self.credit_tonnes.unwrap_or(0.0),
            carbon_credit_price_per_tonne: self.credit_price,
        })
    }
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Snapshot file with [activity], [sinks] and optional [scenario] tables
    #[arg(short, long)]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    dotenvy::dotenv().ok();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Estimate(args) => handle_estimate(args, &config),
        Command::Run(args) => handle_run(args, &config),
        Command::Factors => {
            println!("{}", render::factors_table(&config));
            Ok(())
        }
    }
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(flag: Option<&Path>) -> Result<CoalZeroConfig> {
    let path = match flag {
        Some(path) => Some(path.to_path_buf()),
        None => env::var_os("COALZERO_CONFIG").map(PathBuf::from),
    };

    match path {
        Some(path) => {
            let config = CoalZeroConfig::load(&path)
                .with_context(|| {
                    format!("failed to load configuration from '{}'", path.display())
                })?;
            info!(path = %path.display(), "Using factor configuration");
            Ok(config)
        }
        None => {
            debug!("No configuration file given; using built-in factors");
            Ok(CoalZeroConfig::default())
        }
    }
}

fn handle_estimate(args: EstimateArgs, config: &CoalZeroConfig) -> Result<()> {
    let snapshot = snapshot_from_args(&args)?;
    emit(&snapshot, config, args.format)
}

fn snapshot_from_args(args: &EstimateArgs) -> Result<Snapshot> {
    let transport_tonne_km = match (args.transport_tonne_km, args.transport_distance_km) {
        (Some(value), _) => value,
        (None, Some(distance)) => tonne_km(args.excavation_tonnes, distance)?,
        (None, None) => 0.0,
    };

    Ok(Snapshot {
        activity: ActivityInputs {
            diesel_litres: args.diesel_litres,
            electricity_kwh: args.electricity_kwh,
            excavation_tonnes: args.excavation_tonnes,
            transport_tonne_km,
            workforce_count: args.workforce,
        },
        sinks: SinkInputs {
            plantation_hectares: args.plantation_hectares,
            tree_count: args.tree_count,
        },
        scenario: args.scenario.to_input(),
    })
}

fn handle_run(args: RunArgs, config: &CoalZeroConfig) -> Result<()> {
    let snapshot = Snapshot::load(&args.input)
        .with_context(|| format!("failed to read snapshot '{}'", args.input.display()))?;
    emit(&snapshot, config, args.format)
}

fn emit(snapshot: &Snapshot, config: &CoalZeroConfig, format: OutputFormat) -> Result<()> {
    let assessment = evaluate(snapshot, config).context("assessment failed")?;

    match format {
        OutputFormat::Table => {
            println!("{}", render::assessment_report(&assessment));
        }
        OutputFormat::Json => {
            report::write_json(&assessment, io::stdout().lock())?;
            println!();
        }
        OutputFormat::Csv => {
            report::write_breakdown_csv(&assessment.breakdown, io::stdout().lock())?;
        }
    }
    Ok(())
}
