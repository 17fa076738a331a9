use super::*;
use crate::report;
use clap::{Arg, ArgMatches, Command};
use nsphere_core::prelude::*;
use nsphere_core::utils::parallel_into_collect;
use std::io::BufWriter;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const DIMENSION_ARG_NAME: &str = "dimension";
const RUNS_ARG_NAME: &str = "runs";
const MODE_ARG_NAME: &str = "mode";
const MU_ARG_NAME: &str = "mu";
const LAMBDA_ARG_NAME: &str = "lambda";
const STRATEGY_ARG_NAME: &str = "strategy";
const SIGMAS_ARG_NAME: &str = "initial-sigmas";
const WINDOW_ARG_NAME: &str = "window-size";
const FACTOR_ARG_NAME: &str = "adaptation-factor";
const SCOPE_ARG_NAME: &str = "scope";
const TAU_ARG_NAME: &str = "tau";
const TAU_PRIME_ARG_NAME: &str = "tau-prime";
const EPSILON_ARG_NAME: &str = "epsilon0";
const SEED_ARG_NAME: &str = "seed";
const RNG_ARG_NAME: &str = "rng";
const UPPER_LIMIT_ARG_NAME: &str = "upper-limit";
const OUT_DIR_ARG_NAME: &str = "out-dir";
const LOG_EVERY_ARG_NAME: &str = "log-every";

/// Builds the `run` subcommand definition.
pub fn get_run_app() -> Command {
    Command::new("run")
        .about("Runs a sweep of evolution strategy experiments on the sphere model")
        .arg(
            Arg::new(DIMENSION_ARG_NAME)
                .help("Specifies the problem dimensionality")
                .long(DIMENSION_ARG_NAME)
                .short('n')
                .default_value("10"),
        )
        .arg(
            Arg::new(RUNS_ARG_NAME)
                .help("Specifies amount of independent runs per initial step-size")
                .long(RUNS_ARG_NAME)
                .short('r')
                .default_value("10"),
        )
        .arg(
            Arg::new(MODE_ARG_NAME)
                .help("Specifies the replacement mode")
                .long(MODE_ARG_NAME)
                .value_parser(["plus", "comma"])
                .default_value("plus"),
        )
        .arg(Arg::new(MU_ARG_NAME).help("Specifies amount of parents").long(MU_ARG_NAME).default_value("1"))
        .arg(
            Arg::new(LAMBDA_ARG_NAME)
                .help("Specifies amount of offspring per generation")
                .long(LAMBDA_ARG_NAME)
                .default_value("1"),
        )
        .arg(
            Arg::new(STRATEGY_ARG_NAME)
                .help("Specifies the step-size adaptation strategy")
                .long(STRATEGY_ARG_NAME)
                .short('s')
                .value_parser(["fss", "onefive", "unss"])
                .default_value("fss"),
        )
        .arg(
            Arg::new(SIGMAS_ARG_NAME)
                .help("Specifies a comma separated list of initial step-sizes to sweep")
                .long(SIGMAS_ARG_NAME)
                .value_delimiter(',')
                .default_value("0.01,0.1,1.0"),
        )
        .arg(
            Arg::new(WINDOW_ARG_NAME)
                .help("Specifies the 1/5 rule window length, in mutations")
                .long(WINDOW_ARG_NAME)
                .default_value("10"),
        )
        .arg(
            Arg::new(FACTOR_ARG_NAME)
                .help("Specifies the 1/5 rule adaptation factor")
                .long(FACTOR_ARG_NAME)
                .default_value("0.817"),
        )
        .arg(
            Arg::new(SCOPE_ARG_NAME)
                .help("Specifies the 1/5 rule step-size granularity")
                .long(SCOPE_ARG_NAME)
                .value_parser(["shared", "per-slot"])
                .default_value("per-slot"),
        )
        .arg(Arg::new(TAU_ARG_NAME).help("Overrides the per-dimension learning rate").long(TAU_ARG_NAME))
        .arg(Arg::new(TAU_PRIME_ARG_NAME).help("Overrides the global learning rate").long(TAU_PRIME_ARG_NAME))
        .arg(
            Arg::new(EPSILON_ARG_NAME)
                .help("Specifies the step-size floor")
                .long(EPSILON_ARG_NAME)
                .default_value("0.0001"),
        )
        .arg(Arg::new(SEED_ARG_NAME).help("Specifies the base random seed").long(SEED_ARG_NAME))
        .arg(
            Arg::new(RNG_ARG_NAME)
                .help("Specifies the random generator algorithm")
                .long(RNG_ARG_NAME)
                .value_parser(["xoshiro", "chacha"])
                .default_value("xoshiro"),
        )
        .arg(
            Arg::new(UPPER_LIMIT_ARG_NAME)
                .help("Specifies the generation cap")
                .long(UPPER_LIMIT_ARG_NAME)
                .default_value("10000000"),
        )
        .arg(
            Arg::new(OUT_DIR_ARG_NAME)
                .help("Specifies the output root directory")
                .long(OUT_DIR_ARG_NAME)
                .default_value("es_data"),
        )
        .arg(
            Arg::new(LOG_EVERY_ARG_NAME)
                .help("Specifies progress logging cadence in generations, 0 disables it")
                .long(LOG_EVERY_ARG_NAME)
                .default_value("0"),
        )
}

/// Runs the sweep described by command line arguments and persists one CSV
/// log per run. A failed log write is reported as a warning and never aborts
/// the sweep.
pub fn run_experiments(matches: &ArgMatches) -> GenericResult<()> {
    let dimension = parse_int_value::<usize>(matches, DIMENSION_ARG_NAME, "dimension")?.unwrap_or(10);
    let runs = parse_int_value::<usize>(matches, RUNS_ARG_NAME, "runs")?.unwrap_or(10);
    let mu = parse_int_value::<usize>(matches, MU_ARG_NAME, "mu")?.unwrap_or(1);
    let lambda = parse_int_value::<usize>(matches, LAMBDA_ARG_NAME, "lambda")?.unwrap_or(1);
    let upper_limit =
        parse_int_value::<usize>(matches, UPPER_LIMIT_ARG_NAME, "upper limit")?.unwrap_or(10_000_000);
    let log_every = parse_int_value::<usize>(matches, LOG_EVERY_ARG_NAME, "log cadence")?.unwrap_or(0);

    let mode = get_value(matches, MODE_ARG_NAME, "plus", ReplacementMode::from_str)?;
    let rng_kind = get_value(matches, RNG_ARG_NAME, "xoshiro", RngKind::from_str)?;

    let sigmas = matches
        .get_many::<String>(SIGMAS_ARG_NAME)
        .map(|values| {
            values
                .map(|value| {
                    value.parse::<Float>().map_err(|err| {
                        GenericError::from(format!("cannot get float value, error: '{err}': 'initial step-size'"))
                    })
                })
                .collect::<GenericResult<Vec<_>>>()
        })
        .unwrap_or_else(|| Ok(vec![0.01, 0.1, 1.0]))?;

    let strategy_name = matches.get_one::<String>(STRATEGY_ARG_NAME).map(String::as_str).unwrap_or("fss");
    let strategy = match strategy_name {
        "fss" => StrategyKind::FixedStepSize,
        "onefive" => StrategyKind::OneFifthRule {
            window_size: parse_int_value::<usize>(matches, WINDOW_ARG_NAME, "window size")?.unwrap_or(10),
            adaptation_factor: parse_float_value::<Float>(matches, FACTOR_ARG_NAME, "adaptation factor")?
                .unwrap_or(DEFAULT_ADAPTATION_FACTOR),
            scope: get_value(matches, SCOPE_ARG_NAME, "per-slot", StepSizeScope::from_str)?,
        },
        "unss" => StrategyKind::UncorrelatedNStepSize {
            tau: parse_float_value::<Float>(matches, TAU_ARG_NAME, "tau")?,
            tau_prime: parse_float_value::<Float>(matches, TAU_PRIME_ARG_NAME, "tau prime")?,
            epsilon0: parse_float_value::<Float>(matches, EPSILON_ARG_NAME, "epsilon0")?.unwrap_or(0.0001),
        },
        _ => return Err(format!("unknown strategy: '{strategy_name}'").into()),
    };

    let seed = match parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")? {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|err| err.to_string())?
            .as_millis() as u64,
    };

    // fail fast on an invalid configuration before any run starts
    let probe_environment = Arc::new(Environment::new(
        Arc::new(SeedableRandom::new(rng_kind, seed)),
        Arc::new(|_: &str| {}),
    ));
    sigmas.iter().try_for_each(|&sigma| {
        create_builder(dimension, mode, mu, lambda, sigma, strategy.clone(), upper_limit, 0)
            .build(probe_environment.clone())
            .map(|_| ())
    })?;

    let notation = mode.notation(mu, lambda);
    println!("*******************************************");
    println!("{dimension}-dimensional sphere model: {strategy_name}, {notation}");
    println!("rng={rng_kind}, seed={seed}");
    println!("*******************************************");

    let out_dir = matches.get_one::<String>(OUT_DIR_ARG_NAME).map(String::as_str).unwrap_or("es_data");
    let log_dir = std::path::Path::new(out_dir)
        .join(report::log_directory_name(dimension, strategy_name, notation.as_str(), seed));
    std::fs::create_dir_all(&log_dir).map_err(|err| err.to_string())?;

    let timer = Timer::start();

    let jobs = sigmas
        .iter()
        .enumerate()
        .flat_map(|(sigma_idx, &sigma)| (1..=runs).map(move |run| (sigma, run, sigma_idx * runs + run - 1)))
        .collect::<Vec<_>>();

    let results = parallel_into_collect(jobs, |(sigma, run, ordinal)| {
        let environment = Arc::new(Environment::new_with_seed(rng_kind, seed.wrapping_add(ordinal as u64)));
        let result = create_builder(dimension, mode, mu, lambda, sigma, strategy.clone(), upper_limit, log_every)
            .build(environment)
            .map(|mut experiment| experiment.run());

        (sigma, run, result)
    });

    for (sigma, run, result) in results {
        let result = result?;

        let path = log_dir.join(report::run_file_name(run, sigma));
        let written = create_file(path.as_path(), "generation log")
            .and_then(|file| report::write_records(BufWriter::new(file), mu, lambda, result.records.as_slice()));
        if let Err(err) = written {
            eprintln!("warning: {err}; run result is kept in memory only");
        }

        println!(
            "run#{run} (dev={sigma:.2}): {:?}, iterations = {}, evaluations = {}",
            result.status, result.generations, result.total_evaluations
        );
    }

    println!("{}", timer.elapsed_display());

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn create_builder(
    dimension: usize,
    mode: ReplacementMode,
    mu: usize,
    lambda: usize,
    sigma: Float,
    strategy: StrategyKind,
    upper_limit: usize,
    log_every: usize,
) -> ExperimentBuilder {
    let builder = ExperimentBuilder::default()
        .with_dimension(dimension)
        .with_selection(mode, mu, lambda)
        .with_initial_sigma(sigma)
        .with_strategy(strategy)
        .with_upper_limit(upper_limit);

    if log_every > 0 {
        builder.with_telemetry(TelemetryMode::OnlyLogging {
            logger: Arc::new(|msg: &str| println!("{msg}")),
            log_every,
        })
    } else {
        builder
    }
}

fn get_value<T, E: Into<GenericError>>(
    matches: &ArgMatches,
    arg_name: &str,
    default: &str,
    parse: fn(&str) -> Result<T, E>,
) -> GenericResult<T> {
    parse(matches.get_one::<String>(arg_name).map(String::as_str).unwrap_or(default)).map_err(Into::into)
}
