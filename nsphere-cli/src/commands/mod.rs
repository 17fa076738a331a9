use clap::ArgMatches;
use nsphere_core::prelude::{GenericError, GenericResult};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

pub mod plot;
pub mod run;

pub(crate) fn open_file(path: &Path, description: &str) -> GenericResult<File> {
    File::open(path)
        .map_err(|err| format!("cannot open {description} file '{}': '{err}'", path.display()).into())
}

pub(crate) fn create_file(path: &Path, description: &str) -> GenericResult<File> {
    File::create(path)
        .map_err(|err| format!("cannot create {description} file '{}': '{err}'", path.display()).into())
}

pub(crate) fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot get float value, error: '{err}': '{arg_desc}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

pub(crate) fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot get integer value, error: '{err}': '{arg_desc}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}
