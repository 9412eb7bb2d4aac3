#![cfg(not(test))]
/// This crate is the binary executable's entrypoint.
use std::{env, ffi::OsString, process::ExitCode};

use ::lint_wrapper::run::run_main;
use anyhow::Result;

/// This function simply forwards CLI args to [`run_main()`].
///
/// A launch failure is returned as an error, so it is printed to stderr and
/// the process exits with code 1.
#[tokio::main]
pub async fn main() -> Result<ExitCode> {
    Ok(ExitCode::from(
        run_main(env::args_os().collect::<Vec<OsString>>()).await?,
    ))
}
