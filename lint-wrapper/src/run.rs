//! This module is the backend of the lint-wrapper executable.
//!
//! It launches the lint command once, waits for it to finish, and decides
//! what to print and which exit code to relay.

use std::{
    ffi::OsString,
    io::{self, Write},
    process::ExitStatus,
};

// non-std crates
use anyhow::{Context, Result};

// project specific modules/crates
use crate::{
    cli::Cli,
    logger,
    tool::{LaunchError, LintCommand},
};

/// Printed when the lint tool exits cleanly.
pub const PASSED_MESSAGE: &str = "\n✓ Linting passed! No issues found.\n";

/// Printed when the lint tool exits cleanly and [`crate::cli::FIX_FLAG`] was given.
pub const FIXED_MESSAGE: &str = "\n✓ Linting complete! All issues fixed automatically.\n";

/// The exit code used when the lint tool's own code is unavailable.
const FALLBACK_CODE: u8 = 1;

/// How a lint run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The lint tool exited with code 0.
    Passed {
        /// Was the fix flag given?
        fixed: bool,
    },

    /// The lint tool exited with any other code, or was terminated without one.
    Failed {
        /// The exit code to relay.
        code: u8,
    },
}

impl Completion {
    /// Interpret the lint tool's exit `status`.
    pub fn from_status(status: ExitStatus, fixed: bool) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                log::debug!("Lint command was terminated by signal {signal}");
            }
        }
        Self::from_code(status.code(), fixed)
    }

    /// Interpret the lint tool's exit `code`, if it has one.
    ///
    /// A missing code (eg. termination by a signal) counts as a failure with
    /// code 1, as does a code that a process cannot exit with.
    pub fn from_code(code: Option<i32>, fixed: bool) -> Self {
        match code {
            Some(0) => Self::Passed { fixed },
            Some(code) => Self::Failed {
                code: match u8::try_from(code) {
                    Ok(relayed) => relayed,
                    Err(_) => {
                        log::warn!("Exit code {code} cannot be relayed; using {FALLBACK_CODE}");
                        FALLBACK_CODE
                    }
                },
            },
            None => Self::Failed {
                code: FALLBACK_CODE,
            },
        }
    }

    /// The exit code this process should terminate with.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Passed { .. } => 0,
            Self::Failed { code } => *code,
        }
    }

    /// The success message to print, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Passed { fixed: true } => Some(FIXED_MESSAGE),
            Self::Passed { fixed: false } => Some(PASSED_MESSAGE),
            Self::Failed { .. } => None,
        }
    }

    /// Write the success message (if any) to `out`.
    ///
    /// Nothing is written for a failure; the lint tool already reported it.
    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(msg) = self.message() {
            writeln!(out, "{msg}")?;
        }
        out.flush()
    }
}

/// Run the `lint_cmd` with the arguments in `cli` and wait for it to finish.
///
/// The child shares this process' standard streams, so its output reaches the
/// user unmodified. Any non-zero exit is a [`Completion::Failed`], not an error.
pub async fn run_lint(lint_cmd: &LintCommand, cli: &Cli) -> Result<Completion, LaunchError> {
    let exe = lint_cmd.get_exe_path()?;
    log::debug!(
        "Using {} found at {}",
        lint_cmd.runner.to_string_lossy(),
        exe.display()
    );
    let mut cmd = lint_cmd.build(&exe, &cli.lint_args);
    log::info!(
        "Running \"{} {}\"",
        lint_cmd,
        cli.lint_args
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );
    let mut child = cmd.spawn().map_err(|e| LaunchError::Spawn(exe.clone(), e))?;
    let status = child
        .wait()
        .await
        .map_err(|e| LaunchError::Wait(exe.clone(), e))?;
    log::debug!("Lint command finished with {status}");
    Ok(Completion::from_status(status, cli.fix_requested()))
}

/// This is the backend entry point for the console application.
///
/// `args` is the full argument vector, including the program name (as
/// given by [`std::env::args_os`]). Returns the exit code to terminate with.
/// An error is only returned if the lint command could not be run at all.
///
/// Failing to print the success message (eg. stdout is a closed pipe) does not
/// change the exit code.
pub async fn run_main(args: Vec<OsString>) -> Result<u8> {
    logger::try_init();

    let cli = Cli::from_args(args);
    let lint_cmd = LintCommand::from_env();
    let completion = run_lint(&lint_cmd, &cli)
        .await
        .with_context(|| format!("Error running {}", lint_cmd.tool.to_string_lossy()))?;
    if let Err(e) = completion.report(&mut io::stdout().lock()) {
        log::debug!("Failed to write the summary to stdout: {e}");
    }
    Ok(completion.exit_code())
}
