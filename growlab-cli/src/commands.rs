use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{info, instrument};

use growlab_config::{GrowlabConfig, MAX_APPENDS};
use growlab_core::complexity::Exercise;
use growlab_core::sequences::{find_pairs, most_frequent, remove_duplicates, running_total};
use growlab_simulator::{ResizeEvent, ResizeObserver, SimulationReport, Simulator, TracingObserver};
use growlab_telemetry::logging::EventLogger;
use growlab_telemetry::metrics::MetricsRecorder;

#[derive(Parser, Debug)]
#[command(name = "growlab", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to config/growlab.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate appends into a store that doubles when full
    Simulate(SimulateArgs),
    /// Print a most frequent value
    MostFrequent(ValuesArgs),
    /// Remove duplicates, keeping first occurrences in order
    Dedup(ValuesArgs),
    /// Find every pair of values summing to a target
    Pairs(PairsArgs),
    /// Print the running totals of the values
    RunningTotal(ValuesArgs),
    /// Explain the time and space complexity of an exercise
    Explain(ExplainArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Number of appends (overrides the configured value)
    #[arg(short, long, allow_negative_numbers = true)]
    pub appends: Option<i64>,
    /// Fail unless the run fingerprint equals this hex digest
    #[arg(long)]
    pub validate_hash: Option<String>,
    /// Print Prometheus metrics after the run
    #[arg(long, default_value_t = false)]
    pub metrics: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ValuesArgs {
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct PairsArgs {
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: i64,
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// One of: most-frequent, remove-duplicates, find-pairs, growable-array, running-total
    pub exercise: Exercise,
}

/// Loads the explicit config file if given, otherwise the default hierarchy.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GrowlabConfig> {
    match path {
        Some(path) => GrowlabConfig::load_from_path(path)
            .with_context(|| format!("loading {}", path.display())),
        None => GrowlabConfig::load().context("loading configuration"),
    }
}

pub fn execute(
    command: Commands,
    config: &GrowlabConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Simulate(args) => return cmd_simulate(args, config, out),
        Commands::MostFrequent(args) => match most_frequent(&args.values) {
            Some(value) => writeln!(out, "{value}")?,
            None => writeln!(out, "no value")?,
        },
        Commands::Dedup(args) => writeln!(out, "{}", join(&remove_duplicates(&args.values)))?,
        Commands::Pairs(args) => return cmd_pairs(args, out),
        Commands::RunningTotal(args) => {
            writeln!(out, "{}", join(&running_total(args.values.as_slice())?))?
        }
        Commands::Explain(args) => {
            writeln!(out, "{}", args.exercise)?;
            writeln!(out, "{}", args.exercise.profile())?
        }
    }
    Ok(())
}

/// Feeds resize events into the Prometheus recorder.
struct MetricsObserver(MetricsRecorder);

impl ResizeObserver for MetricsObserver {
    fn on_resize(&mut self, event: &ResizeEvent) {
        self.0.record_resize(event.copied);
    }

    fn on_complete(&mut self, report: &SimulationReport) {
        self.0.record_appends(report.appends);
    }
}

#[instrument(level = "info", skip_all, fields(appends = ?args.appends))]
fn cmd_simulate(
    args: SimulateArgs,
    config: &GrowlabConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let appends = match args.appends {
        Some(appends) => appends,
        None => i64::try_from(config.simulator.appends)
            .context("configured append count does not fit in i64")?,
    };
    if appends > MAX_APPENDS as i64 {
        anyhow::bail!("at most {} appends are supported, got {}", MAX_APPENDS, appends);
    }

    let metrics = MetricsRecorder::new()?;
    let mut simulator =
        Simulator::new().with_observer(Box::new(MetricsObserver(metrics.clone())));
    if config.simulator.trace {
        simulator = simulator.with_observer(Box::new(TracingObserver));
    }

    let report = simulator.simulate(appends)?;

    for event in &report.events {
        writeln!(out, "{} (append #{})", event, event.append_index)?;
    }
    writeln!(out, "Appends:        {}", report.appends)?;
    writeln!(out, "Final size:     {}", report.final_size)?;
    writeln!(out, "Final capacity: {}", report.final_capacity)?;
    writeln!(out, "Resizes:        {}", report.events.len())?;
    writeln!(out, "Copies:         {}", report.total_copies)?;
    writeln!(out, "Amortized cost: {:.3} per append", report.amortized_cost())?;

    let fingerprint = report.fingerprint();
    writeln!(out, "Fingerprint:    {}", fingerprint)?;

    if let Some(expected) = args.validate_hash.as_deref() {
        report.verify_fingerprint(expected)?;
        info!("Fingerprint verified");
        writeln!(out, "Fingerprint verified")?;
    }

    EventLogger::log_event(
        "simulate",
        &[
            ("appends", report.appends.to_string()),
            ("resizes", report.events.len().to_string()),
            ("fingerprint", fingerprint),
        ],
    );

    if args.metrics || config.telemetry.metrics {
        write!(out, "{}", metrics.gather_metrics()?)?;
    }
    Ok(())
}

fn cmd_pairs(args: PairsArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut pairs: Vec<(i64, i64)> = find_pairs(&args.values, args.target).into_iter().collect();
    pairs.sort_unstable();
    let rendered: Vec<String> = pairs.iter().map(|(a, b)| format!("({a}, {b})")).collect();
    writeln!(out, "[{}]", rendered.join(", "))?;
    Ok(())
}

fn join<T: ToString>(values: &[T]) -> String {
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
