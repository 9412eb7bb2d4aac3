//! This module describes the lint command that gets launched and how its
//! runner executable is located.

use std::{
    env::{self, current_dir},
    ffi::OsString,
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
    process::Stdio,
};

use tokio::process::Command;
use which::which_in;

/// Environment variable naming the package-script runner.
pub const RUNNER_ENV: &str = "LINT_WRAPPER_RUNNER";
/// Environment variable naming the lint tool handed to the runner.
pub const TOOL_ENV: &str = "LINT_WRAPPER_TOOL";
/// Environment variable naming the path the lint tool checks.
pub const TARGET_ENV: &str = "LINT_WRAPPER_TARGET";

const DEFAULT_RUNNER: &str = "npx";
const DEFAULT_TOOL: &str = "eslint";
const DEFAULT_TARGET: &str = ".";

/// Errors that prevent the lint command from running to completion.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Failed to access current working directory.
    #[error("Failed to access current working directory: {0}")]
    InvalidCurrentDirectory(std::io::Error),

    /// Failed to find the runner executable by searching for the provided name.
    #[error("Failed to find the {0} executable: {1}")]
    NotFound(String, which::Error),

    /// The runner executable was found but could not be started.
    #[error("Failed to start `{0}`: {1}")]
    Spawn(PathBuf, std::io::Error),

    /// The runner was started but waiting on it failed.
    #[error("Failed to wait on `{0}`: {1}")]
    Wait(PathBuf, std::io::Error),
}

/// The external command that does the actual linting.
///
/// Launched as `<runner> <tool> <target> [args...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintCommand {
    /// The package-script runner, like `npx`.
    pub runner: OsString,

    /// The lint tool the runner should execute, like `eslint`.
    pub tool: OsString,

    /// The path given to the lint tool.
    pub target: OsString,
}

impl Default for LintCommand {
    fn default() -> Self {
        Self {
            runner: DEFAULT_RUNNER.into(),
            tool: DEFAULT_TOOL.into(),
            target: DEFAULT_TARGET.into(),
        }
    }
}

impl Display for LintCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.runner.to_string_lossy(),
            self.tool.to_string_lossy(),
            self.target.to_string_lossy()
        )
    }
}

impl LintCommand {
    /// Build a [`LintCommand`] from the `LINT_WRAPPER_*` environment variables.
    ///
    /// Unset or blank variables fall back to `npx eslint .`.
    /// Values that are not valid UTF-8 are used as is (without trimming).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| match v.into_string() {
                    Ok(text) => OsString::from(text.trim()),
                    Err(raw) => raw,
                })
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.into())
        };
        Self {
            runner: get(RUNNER_ENV, DEFAULT_RUNNER),
            tool: get(TOOL_ENV, DEFAULT_TOOL),
            target: get(TARGET_ENV, DEFAULT_TARGET),
        }
    }

    /// Fetch the path to the runner executable.
    ///
    /// Names are sought in the `PATH` environment variable. Paths (absolute or
    /// relative to the working directory) are used as given, if executable.
    pub fn get_exe_path(&self) -> Result<PathBuf, LaunchError> {
        let cwd = current_dir().map_err(LaunchError::InvalidCurrentDirectory)?;
        which_in(&self.runner, env::var_os("PATH"), cwd)
            .map_err(|e| LaunchError::NotFound(self.runner.to_string_lossy().to_string(), e))
    }

    /// Prepare the child process for the given `exe` and `lint_args`.
    ///
    /// Arguments are passed as an explicit list, never through a shell.
    /// All three standard streams are inherited from this process.
    pub fn build(&self, exe: &Path, lint_args: &[OsString]) -> Command {
        let mut cmd = Command::new(exe);
        cmd.arg(&self.tool)
            .arg(&self.target)
            .args(lint_args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}
