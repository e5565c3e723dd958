//! outbreak: run one epidemic from the command line and print a daily table.
//!
//! ```text
//! outbreak [--mode simple|quarantine|communities] [--days N] [--seed N] [-v]
//!          [params.toml] [key=value ...]
//!
//! Run `outbreak --help` for the full list.
//! ```
//!
//! The optional TOML file holds any subset of `SimulationParameters` fields;
//! missing fields keep their defaults.  `key=value` pairs are applied after
//! the file, e.g. `mortality_rate=0.02 quarantine_enabled=true`.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, info};
use log4rs::Config;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

use ep_core::{ParamValue, SimMode, SimRng, SimulationParameters, Tick};
use ep_sim::{EngineBuilder, SimObserver};
use ep_stats::DailyStats;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SEED: u64 = 42;
const DEFAULT_DAYS: u32 = 60;

// ISO 8601 timestamp, colour-coded level, target.
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Population layout
    #[arg(short, long, value_enum, default_value = "simple")]
    mode: Mode,

    /// Days to simulate
    #[arg(short, long, default_value_t = DEFAULT_DAYS)]
    days: u32,

    /// RNG seed
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// A TOML parameter file and/or `key=value` overrides, applied in order
    #[arg(value_name = "FILE | KEY=VALUE")]
    inputs: Vec<Input>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Simple,
    Quarantine,
    Communities,
}

impl From<Mode> for SimMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Simple      => SimMode::Simple,
            Mode::Quarantine  => SimMode::Quarantine,
            Mode::Communities => SimMode::Communities,
        }
    }
}

/// One positional argument: a parameter override when it contains `=`,
/// otherwise a parameter file.
#[derive(Clone, Debug)]
enum Input {
    File(PathBuf),
    Override(String, ParamValue),
}

impl FromStr for Input {
    type Err = anyhow::Error;

    fn from_str(arg: &str) -> Result<Self> {
        match arg.split_once('=') {
            Some((key, raw)) => Ok(Input::Override(key.to_owned(), parse_value(raw)?)),
            None => Ok(Input::File(arg.into())),
        }
    }
}

/// `true`/`false`, then integers, then floats.
fn parse_value(raw: &str) -> Result<ParamValue> {
    if let Ok(b) = raw.parse::<bool>() {
        return Ok(ParamValue::Bool(b));
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(ParamValue::Int(i));
    }
    match raw.parse::<f64>() {
        Ok(f) => Ok(ParamValue::Float(f)),
        Err(_) => bail!("cannot read {raw:?} as a parameter value"),
    }
}

/// The file, if any, then every override on top of it.
fn build_engine(mode: SimMode, inputs: Vec<Input>) -> Result<EngineBuilder> {
    let mut files = inputs.iter().filter_map(|i| match i {
        Input::File(path) => Some(path),
        Input::Override(..) => None,
    });
    let params = match (files.next(), files.next()) {
        (None, _) => SimulationParameters::default(),
        (Some(path), None) => load_params(path)?,
        (Some(_), Some(extra)) => bail!("more than one parameter file given ({})", extra.display()),
    };

    let mut builder = EngineBuilder::new().params(params).mode(mode);
    for input in inputs {
        if let Input::Override(key, value) = input {
            builder = builder.set_by_name(&key, value).with_context(|| format!("setting {key}"))?;
        }
    }
    Ok(builder)
}

fn load_params(path: &Path) -> Result<SimulationParameters> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let params = toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!("loaded parameters from {}", path.display());
    Ok(params)
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

// ── Daily table ───────────────────────────────────────────────────────────────

struct DailyTable {
    rows: usize,
}

impl DailyTable {
    fn header() {
        println!(
            "{:>4} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>6} {:>6}",
            "day", "S", "E", "I sym", "I asym", "R", "D", "quar", "+inf", "+dead"
        );
        println!("{}", "-".repeat(74));
    }
}

impl SimObserver for DailyTable {
    fn on_day_end(&mut self, row: &DailyStats) {
        println!(
            "{:>4} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>6} {:>6}",
            row.day,
            row.susceptible,
            row.exposed,
            row.symptomatic,
            row.asymptomatic,
            row.removed,
            row.dead,
            row.quarantined,
            row.new_infections,
            row.new_deaths,
        );
        self.rows += 1;
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("{}", "-".repeat(74));
        println!("{} days, ended at {final_tick}", self.rows);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })?;

    let mode = SimMode::from(args.mode);
    let builder = build_engine(mode, args.inputs)?;

    println!("=== outbreak: {mode} mode ===");
    println!("Days: {}  |  Seed: {}", args.days, args.seed);
    println!();

    let mut rng = SimRng::new(args.seed);
    let mut engine = builder.build(&mut rng)?;

    DailyTable::header();
    if let Some(day0) = engine.history().first() {
        DailyTable { rows: 0 }.on_day_end(day0);
    }
    let mut table = DailyTable { rows: 0 };

    let t0 = Instant::now();
    engine.run_days(args.days, &mut rng, &mut table);
    let elapsed = t0.elapsed();

    let stats = engine.daily_statistics();
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  peak infected : {} on day {}",
        stats.peaks.max_infected, stats.peaks.max_infected_day
    );
    println!("  attack rate   : {:.1} %", stats.attack_rate_percent());
    println!("  dead          : {:.1} %", stats.dead_percent());
    println!("  still ill     : {:.1} %", stats.infected_percent());

    Ok(())
}
