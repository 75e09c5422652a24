use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use hilo::{run_session, GameRng, Prompter, ResultLogger};

/// Fixed relative path of the append-only result log.
const LOG_PATH: &str = "game_log.txt";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut logger = match ResultLogger::open(LOG_PATH) {
        Ok(logger) => logger,
        Err(err) => {
            tracing::warn!(path = LOG_PATH, %err, "could not open log file, continuing without logging");
            ResultLogger::disabled()
        }
    };

    let mut rng = GameRng::from_entropy();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    run_session(&mut rng, &mut prompter, &mut logger)?;
    Ok(())
}
