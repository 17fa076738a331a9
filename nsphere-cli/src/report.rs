//! Persistence of per-generation records in a delimited tabular form, and
//! read-back of the reduced `(iteration, average)` progress view for plotting.

#[cfg(test)]
#[path = "../tests/unit/report_test.rs"]
mod report_test;

use nsphere_core::prelude::*;
use serde::Deserialize;
use std::io::{Read, Write};

/// Returns the log directory name of a sweep.
pub fn log_directory_name(dimension: usize, strategy_name: &str, mode_notation: &str, seed: u64) -> String {
    format!("log-n{dimension}-{strategy_name}-{mode_notation}_{seed}")
}

/// Returns the file name of a single run log.
pub fn run_file_name(run: usize, sigma: Float) -> String {
    format!("run_{run}(dev={sigma:.2}).csv")
}

/// Writes records as a header row `Iteration,Average,X0..,Y0..` followed by
/// one row per generation.
pub fn write_records<W: Write>(
    writer: W,
    mu: usize,
    lambda: usize,
    records: &[GenerationRecord],
) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    let header = ["Iteration".to_string(), "Average".to_string()]
        .into_iter()
        .chain((0..mu).map(|idx| format!("X{idx}")))
        .chain((0..lambda).map(|idx| format!("Y{idx}")))
        .collect::<Vec<_>>();
    writer.write_record(header.as_slice()).map_err(|err| err.to_string())?;

    for record in records {
        let row = [record.generation.to_string(), format!("{:.5}", record.average_fitness)]
            .into_iter()
            .chain(record.parent_fitnesses.iter().map(|fitness| format!("{fitness:.3}")))
            .chain(record.offspring_fitnesses.iter().map(|fitness| format!("{fitness:.3}")))
            .collect::<Vec<_>>();
        writer.write_record(row.as_slice()).map_err(|err| err.to_string())?;
    }

    writer.flush().map_err(|err| err.to_string())?;

    Ok(())
}

/// A reduced view of one persisted generation. Extra columns are ignored on
/// read-back.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ProgressRow {
    /// Generation sequence number.
    #[serde(rename = "Iteration")]
    pub iteration: usize,
    /// Average parent fitness of the generation.
    #[serde(rename = "Average")]
    pub average: Float,
}

/// Reads the progress view of a persisted run, optionally stopping after
/// given iteration.
pub fn read_progress<R: Read>(reader: R, limit: Option<usize>) -> GenericResult<Vec<ProgressRow>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = vec![];

    for row in reader.deserialize() {
        let row: ProgressRow = row.map_err(|err| err.to_string())?;
        if limit.is_some_and(|limit| row.iteration > limit) {
            break;
        }
        rows.push(row);
    }

    Ok(rows)
}
