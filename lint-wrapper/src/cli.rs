//! This module holds the Command Line Interface design.
//!
//! The wrapper owns no options: every argument is forwarded to the lint tool.
//! The only argument that is inspected is [`FIX_FLAG`].

use std::ffi::OsString;

/// The lint tool's switch for auto-correcting fixable issues.
pub const FIX_FLAG: &str = "--fix";

/// A structure to contain the CLI arguments destined for the lint tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cli {
    /// The arguments, in the order they were given.
    ///
    /// These are not required to be valid UTF-8 (eg. file names on Unix).
    pub lint_args: Vec<OsString>,
}

impl Cli {
    /// Build a [`Cli`] from the full argument vector (program name included).
    ///
    /// The leading program name is dropped. Everything else is kept verbatim,
    /// including `--`, `--help` and `--version`.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            lint_args: args.into_iter().skip(1).map(Into::into).collect(),
        }
    }

    /// Was the lint tool asked to fix issues?
    ///
    /// This only selects the success message; the flag is still forwarded.
    pub fn fix_requested(&self) -> bool {
        self.lint_args.iter().any(|arg| arg == FIX_FLAG)
    }
}

#[cfg(test)]
mod test {
    use super::Cli;

    #[test]
    fn drops_program_name() {
        let cli = Cli::from_args(["lint-wrapper"]);
        assert!(cli.lint_args.is_empty());
        assert!(!cli.fix_requested());
    }

    #[test]
    fn keeps_args_verbatim() {
        let args = [
            "lint-wrapper",
            "--help",
            "--",
            "--max-warnings=0",
            "src/*.js; rm -rf /",
            "",
        ];
        let cli = Cli::from_args(args);
        assert_eq!(cli.lint_args, &args[1..]);
    }

    #[test]
    fn detects_fix_anywhere() {
        let cli = Cli::from_args(["lint-wrapper", "--quiet", "--fix", "--cache"]);
        assert!(cli.fix_requested());
    }

    #[test]
    fn fix_match_is_exact() {
        for arg in ["--fix-dry-run", "--fix-type=problem", "fix", "-fix", "--FIX"] {
            let cli = Cli::from_args(["lint-wrapper", arg]);
            assert!(!cli.fix_requested(), "{arg} should not count as the fix flag");
        }
    }

    #[cfg(unix)]
    #[test]
    fn keeps_non_utf8_args() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let file_name = OsStr::from_bytes(b"caf\xe9.js");
        let cli = Cli::from_args([OsStr::new("lint-wrapper"), OsStr::new("--fix"), file_name]);
        assert_eq!(cli.lint_args, [OsStr::new("--fix"), file_name]);
        assert!(cli.fix_requested());
    }
}
