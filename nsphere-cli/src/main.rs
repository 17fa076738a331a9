//! A command line interface to the n-sphere evolution strategy experiments.

use clap::Command;
use nsphere_cli::commands::plot::{get_plot_app, run_plot};
use nsphere_cli::commands::run::{get_run_app, run_experiments};
use std::process;

fn main() {
    let matches = Command::new("nsphere")
        .version("0.1")
        .about("Studies step-size self-adaptation of evolution strategies on the n-dimensional sphere model")
        .subcommand(get_run_app())
        .subcommand(get_plot_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("run", run_matches)) => run_experiments(run_matches),
        Some(("plot", plot_matches)) => run_plot(plot_matches),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
