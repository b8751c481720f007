//! Command-line configuration.
//!
//! Defaults come from the environment (`QUADRA_GRID_WIDTH`,
//! `QUADRA_GRID_HEIGHT`) and are then overridden by arguments.

use quadra_grid::{GridSpec, STANDARD_HEIGHT, STANDARD_WIDTH};
use quadra_session::CandidatePool;

use crate::error::{CliError, Result};

pub const USAGE: &str = "\
usage: quadra [--width N] [--height N] [--exclude NAME]... [CANDIDATE]...

Runs one quadratic-voting session. Without candidates the reference
catalog is used. Commands are read from stdin, one per line:

  + I        add one vote to candidate I
  - I        remove one vote from candidate I
  set I W    set candidate I to W votes
  show       print the grid and budget
  events     print the request timeline as JSON
  done       finish and print the results
  quit       leave without results";

/// Settings for one `quadra` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub width: u32,
    pub height: u32,
    pub candidates: Vec<String>,
    pub excluded: Vec<String>,
    pub show_help: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            candidates: Vec::new(),
            excluded: Vec::new(),
            show_help: false,
        }
    }
}

fn parse_dimension(name: &str, value: &str) -> Result<u32> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        name: name.to_string(),
        value: value.to_string(),
    })
}

impl CliConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup("QUADRA_GRID_WIDTH") {
            config.width = parse_dimension("QUADRA_GRID_WIDTH", &value)?;
        }
        if let Some(value) = lookup("QUADRA_GRID_HEIGHT") {
            config.height = parse_dimension("QUADRA_GRID_HEIGHT", &value)?;
        }
        Ok(config)
    }

    /// Apply command-line arguments (without the program name).
    pub fn with_args<I>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => self.show_help = true,
                "--width" | "--height" | "--exclude" => {
                    let value = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                    match arg.as_str() {
                        "--width" => self.width = parse_dimension("--width", &value)?,
                        "--height" => self.height = parse_dimension("--height", &value)?,
                        _ => self.excluded.push(value),
                    }
                }
                flag if flag.starts_with("--") => {
                    return Err(CliError::UnknownFlag(flag.to_string()));
                }
                _ => self.candidates.push(arg),
            }
        }
        Ok(self)
    }

    /// Grid for this run, reserving the top-right cell.
    pub fn grid_spec(&self) -> Result<GridSpec> {
        Ok(GridSpec::new(self.width, self.height)?)
    }

    /// Candidate pool with exclusions applied.
    pub fn pool(&self) -> Result<CandidatePool> {
        let mut pool = if self.candidates.is_empty() {
            CandidatePool::reference()
        } else {
            CandidatePool::new(self.candidates.iter().cloned())?
        };
        for name in &self.excluded {
            pool.exclude(name)?;
        }
        Ok(pool)
    }
}
