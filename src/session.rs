//! Top-level session loop.
//!
//! Repeatedly collects bounds and an attempt limit, runs a round, and
//! asks whether to play again. The loop ends only on an explicit "no";
//! the caller owns the generator and the logger, so the log handle is
//! released once, when the session's owner drops it.

use std::io::{self, BufRead, Write};

use crate::input::Prompter;
use crate::logger::ResultLogger;
use crate::rng::GameRng;
use crate::round::{play_round, RoundConfig};

/// Run rounds until the user opts out.
///
/// Bounds parse failures restart the iteration from the minimum prompt,
/// discarding any partially collected value. A limit parse failure does
/// not restart: it silently falls back to unlimited, a deliberate
/// leniency distinct from the bounds handling. Non-positive limits also
/// mean unlimited.
pub fn run_session<R: BufRead, W: Write>(
    rng: &mut GameRng,
    prompter: &mut Prompter<R, W>,
    logger: &mut ResultLogger,
) -> io::Result<()> {
    loop {
        let Ok(min) = prompter.read_integer("Enter minimum: ") else {
            prompter.say("Invalid input. Try again.")?;
            continue;
        };
        let Ok(max) = prompter.read_integer("Enter maximum: ") else {
            prompter.say("Invalid input. Try again.")?;
            continue;
        };
        if min >= max {
            prompter.say("Minimum must be less than maximum.")?;
            continue;
        }

        let limit = match prompter.read_integer("Max attempts (0 = unlimited): ") {
            Ok(n) if n > 0 => n as u32,
            _ => 0,
        };

        let config = RoundConfig::new(min, max, limit);
        play_round(&config, rng, prompter, logger)?;

        if !prompter.ask_yes_no("Play again? (y/n): ") {
            return Ok(());
        }
    }
}
