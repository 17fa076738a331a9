use super::*;
use crate::chart;
use crate::report;
use clap::{Arg, ArgMatches, Command};
use nsphere_core::prelude::*;
use std::io::BufReader;
use std::path::PathBuf;

const DIR_ARG_NAME: &str = "DIR";
const SIGMAS_ARG_NAME: &str = "initial-sigmas";
const RUNS_ARG_NAME: &str = "runs";
const LIMIT_ARG_NAME: &str = "limit";

/// Builds the `plot` subcommand definition.
pub fn get_plot_app() -> Command {
    Command::new("plot")
        .about("Renders comparison charts from persisted run logs")
        .arg(Arg::new(DIR_ARG_NAME).help("Sets the log directory to read").required(true).index(1))
        .arg(
            Arg::new(SIGMAS_ARG_NAME)
                .help("Specifies a comma separated list of initial step-sizes to chart")
                .long(SIGMAS_ARG_NAME)
                .value_delimiter(',')
                .default_value("0.01,0.1,1.0"),
        )
        .arg(
            Arg::new(RUNS_ARG_NAME)
                .help("Specifies amount of runs per initial step-size")
                .long(RUNS_ARG_NAME)
                .short('r')
                .default_value("10"),
        )
        .arg(
            Arg::new(LIMIT_ARG_NAME)
                .help("Specifies an iteration cutoff for the chart")
                .long(LIMIT_ARG_NAME),
        )
}

/// Draws one comparison chart per initial step-size, a line per run.
pub fn run_plot(matches: &ArgMatches) -> GenericResult<()> {
    let dir = matches
        .get_one::<String>(DIR_ARG_NAME)
        .map(PathBuf::from)
        .ok_or_else(|| GenericError::from("missing log directory"))?;
    let runs = parse_int_value::<usize>(matches, RUNS_ARG_NAME, "runs")?.unwrap_or(10);
    let limit = parse_int_value::<usize>(matches, LIMIT_ARG_NAME, "iteration cutoff")?;

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

    let dir_name = dir.file_name().and_then(|name| name.to_str()).unwrap_or("sphere experiment").to_string();

    for sigma in sigmas {
        let mut series = vec![];
        for run in 1..=runs {
            let path = dir.join(report::run_file_name(run, sigma));
            let file = open_file(path.as_path(), "run log")?;
            let rows = report::read_progress(BufReader::new(file), limit)?;

            // a star marks runs cut off at the iteration limit
            let starred = limit.is_some_and(|limit| rows.len() > limit);
            let label = format!("run#{run}{}", if starred { "*" } else { "" });
            series.push((label, rows.into_iter().map(|row| (row.iteration, row.average)).collect()));
        }

        let out_path = dir.join(format!("dev={sigma:.2}.png"));
        chart::draw_comparison(out_path.as_path(), &format!("{dir_name}: dev={sigma:.2}"), series.as_slice())?;
        println!("written {}", out_path.display());
    }

    Ok(())
}
