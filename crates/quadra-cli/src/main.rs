//! Quadra binary
//!
//! Runs a single quadratic-voting session in the terminal.

mod command;
mod config;
mod error;
mod render;

use std::io::{self, BufRead, Write};

use quadra_ledger::{Decision, WeightChange};
use quadra_session::{Session, SessionError};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::command::Command;
use crate::config::{CliConfig, USAGE};
use crate::error::{CliError, Result};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is reserved for the session itself
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quadra=info,quadra_session=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = CliConfig::from_env()?.with_args(std::env::args().skip(1))?;
    if config.show_help {
        println!("{USAGE}");
        return Ok(());
    }

    let spec = config.grid_spec()?;
    let session = config.pool()?.start_session(spec)?;
    info!(
        candidates = session.allocator().candidates().len(),
        budget = session.allocator().budget(),
        "session started"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(session, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Feed commands from `input` to the session until `done`, `quit` or EOF.
fn run(mut session: Session, input: impl BufRead, mut out: impl Write) -> Result<()> {
    write!(out, "{}", render::status(session.allocator()))?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e} (try `help`)")?;
                continue;
            }
        };

        let outcome = match command {
            Command::Increment(candidate) => session.increment(candidate),
            Command::Decrement(candidate) => session.decrement(candidate),
            Command::Set { candidate, weight } => {
                session.apply(WeightChange { candidate, weight })
            }
            Command::Show => {
                write!(out, "{}", render::status(session.allocator()))?;
                continue;
            }
            Command::Events => {
                writeln!(out, "{}", serde_json::to_string_pretty(session.events())?)?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{USAGE}")?;
                continue;
            }
            Command::Done => {
                let results = session.finish()?;
                write!(out, "{}", render::results(&results))?;
                writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
                return Ok(());
            }
            Command::Quit => break,
        };

        match outcome {
            Ok(Decision::Accepted(_)) => {}
            Ok(Decision::Rejected(rejection)) => writeln!(out, "not applied: {rejection}")?,
            Err(SessionError::Ledger(e)) => {
                warn!(%e, "invalid request");
                writeln!(out, "invalid request: {e}")?;
                continue;
            }
            Err(e) => return Err(CliError::from(e)),
        }
        write!(out, "{}", render::status(session.allocator()))?;
    }

    info!("session abandoned without results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadra_grid::GridSpec;

    fn session() -> Session {
        let names = ["A", "B", "C"].map(String::from).to_vec();
        Session::new(names, GridSpec::standard()).unwrap()
    }

    fn drive(script: &str) -> String {
        let mut out = Vec::new();
        run(session(), script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reference_session_transcript() {
        let text = drive("set 0 1\nset 1 9\nset 2 4\ndone\n");
        assert!(text.contains("remaining points: 17 / 99"));
        assert!(text.contains("not applied: weight 4 for candidate 2"));
        assert!(text.contains(r#""candidate": "B""#));
        assert!(text.contains(r#""cost": 81"#));
    }

    #[test]
    fn invalid_input_keeps_session_alive() {
        let text = drive("set 0 -1\n+ 9\nbogus\n+ 0\nshow\nquit\n");
        assert!(text.contains("invalid request: negative weight -1"));
        assert!(text.contains("invalid request: candidate index 9 out of range"));
        assert!(text.contains("bad command: bogus"));
        assert!(text.contains("remaining points: 98 / 99"));
    }

    #[test]
    fn events_are_printed_as_json() {
        let text = drive("+ 1\nevents\n");
        assert!(text.contains(r#""type": "WeightAccepted""#));
    }
}
