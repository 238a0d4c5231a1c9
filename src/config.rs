/*!
 * Configuration handling for lsl
 */

use std::env;
use std::ffi::OsString;

use clap::Parser;

use crate::bail;
use crate::error::Result;

/// Name used as the prefix of every diagnostic line
pub const PROGRAM_NAME: &str = "lsl";

/// Environment variable bounding the number of entries listed per directory
pub const MAX_ENTRIES_ENV: &str = "LSL_MAX_ENTRIES";

/// Command-line arguments for lsl
///
/// No flags are recognized: every argument, including ones starting with a
/// hyphen, is a path.
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "lsl",
    version = env!("CARGO_PKG_VERSION"),
    about = "List directory contents in long format",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Files or directories to list
    #[clap(allow_hyphen_values = true, trailing_var_arg = true)]
    pub paths: Vec<String>,
}

impl Args {
    /// Parse a full invocation, program name first
    ///
    /// An explicit end-of-options marker is inserted ahead of the user's
    /// arguments, so a literal `--` given by the user stays a path.
    pub fn from_invocation<I, T>(invocation: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut invocation = invocation.into_iter().map(Into::into);
        let program = invocation
            .next()
            .unwrap_or_else(|| OsString::from(PROGRAM_NAME));
        let argv = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(invocation);
        Self::parse_from(argv)
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Paths to list, in invocation order
    pub paths: Vec<String>,

    /// Prefix for diagnostics
    pub program_name: String,

    /// Upper bound on entries collected per directory (unbounded if None)
    pub max_entries: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            program_name: PROGRAM_NAME.to_string(),
            max_entries: None,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            paths: args.paths,
            ..Self::default()
        }
    }

    /// Apply overrides taken from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        let limit = env::var(MAX_ENTRIES_ENV).ok();
        self.with_max_entries(limit.as_deref())
    }

    /// Apply a textual entry limit, as read from the environment
    pub fn with_max_entries(mut self, limit: Option<&str>) -> Result<Self> {
        let Some(raw) = limit.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(self);
        };
        match raw.parse::<usize>() {
            Ok(0) => bail!(Config, "{} must be greater than zero", MAX_ENTRIES_ENV),
            Ok(n) => self.max_entries = Some(n),
            Err(_) => bail!(Config, "{} is not a number: {}", MAX_ENTRIES_ENV, raw),
        }
        Ok(self)
    }
}
