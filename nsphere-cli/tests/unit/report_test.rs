use super::*;
use std::fs::File;
use std::io::{BufReader, BufWriter};

fn create_records() -> Vec<GenerationRecord> {
    (0..4)
        .map(|generation| GenerationRecord {
            generation,
            average_fitness: 2. - 0.5 * generation as Float,
            parent_fitnesses: vec![2. - 0.5 * generation as Float],
            offspring_fitnesses: vec![1.5, 1.25],
        })
        .collect()
}

#[test]
fn can_name_log_artifacts() {
    assert_eq!(log_directory_name(10, "unss", "(1+1)", 123), "log-n10-unss-(1+1)_123");
    assert_eq!(run_file_name(3, 0.1), "run_3(dev=0.10).csv");
}

#[test]
fn can_write_header_and_rows() {
    let mut buffer = vec![];

    write_records(&mut buffer, 1, 2, create_records().as_slice()).expect("cannot write records");

    let content = String::from_utf8(buffer).expect("invalid utf8");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Iteration,Average,X0,Y0,Y1"));
    assert_eq!(lines.next(), Some("0,2.00000,2.000,1.500,1.250"));
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn can_round_trip_progress() {
    let directory = tempfile::tempdir().expect("cannot create temp dir");
    let path = directory.path().join(run_file_name(1, 0.01));

    let file = File::create(path.as_path()).expect("cannot create file");
    write_records(BufWriter::new(file), 1, 2, create_records().as_slice()).expect("cannot write records");

    let file = File::open(path.as_path()).expect("cannot open file");
    let rows = read_progress(BufReader::new(file), None).expect("cannot read progress");

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], ProgressRow { iteration: 0, average: 2. });
    assert_eq!(rows[3], ProgressRow { iteration: 3, average: 0.5 });
}

#[test]
fn can_limit_progress_read_back() {
    let mut buffer = vec![];
    write_records(&mut buffer, 1, 2, create_records().as_slice()).expect("cannot write records");

    let rows = read_progress(buffer.as_slice(), Some(1)).expect("cannot read progress");

    assert_eq!(rows.iter().map(|row| row.iteration).collect::<Vec<_>>(), vec![0, 1]);
}
