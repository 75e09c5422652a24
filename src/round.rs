//! One round of the game: draw a target, take guesses until a win or the
//! attempt cap runs out.
//!
//! The round moves through `{drawing, awaiting guess, evaluating, won,
//! exhausted}`: the target is drawn once up front, each prompt is gated on
//! the attempt cap, and every in-range guess is evaluated against the
//! target. Parse failures and out-of-range guesses re-prompt without
//! consuming an attempt. Exactly one log record is appended, at the
//! terminal state.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::input::Prompter;
use crate::logger::{LogRecord, ResultLogger};
use crate::rng::GameRng;

/// Immutable per-round settings.
///
/// `min < max` is enforced at construction; the session driver validates
/// user input before building one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Lower bound of the guessing range (inclusive).
    pub min: i32,
    /// Upper bound of the guessing range (inclusive).
    pub max: i32,
    /// Maximum in-range guesses allowed. `0` means unlimited.
    pub attempt_limit: u32,
}

impl RoundConfig {
    /// Create a round configuration.
    #[must_use]
    pub fn new(min: i32, max: i32, attempt_limit: u32) -> Self {
        assert!(min < max, "round bounds must satisfy min < max");
        Self {
            min,
            max,
            attempt_limit,
        }
    }

    /// Whether `value` lies inside the guessing range.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Terminal result of a round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// True when the target was guessed, false when attempts ran out.
    pub won: bool,
    /// In-range guesses taken.
    pub attempts: u32,
    /// Wall-clock duration of the round.
    pub elapsed_seconds: f64,
}

/// Play one round to completion.
///
/// Returns the outcome after the win or exhaustion message has been
/// written and the log record appended. I/O errors on the output stream
/// propagate; parse failures on the input stream only ever re-prompt.
pub fn play_round<R: BufRead, W: Write>(
    config: &RoundConfig,
    rng: &mut GameRng,
    prompter: &mut Prompter<R, W>,
    logger: &mut ResultLogger,
) -> io::Result<Outcome> {
    let target = rng.next_in_range(config.min, config.max);
    let start = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        if config.attempt_limit > 0 && attempts >= config.attempt_limit {
            prompter.say(&format!(
                "Out of attempts! You lose. The number was {target}."
            ))?;
            return Ok(finish(config, target, attempts, false, start, logger));
        }

        let Ok(guess) = prompter.read_integer("Your guess: ") else {
            prompter.say("Invalid input. Try again.")?;
            continue;
        };

        if !config.contains(guess) {
            prompter.say(&format!(
                "Out of range ({}..{}). Try again.",
                config.min, config.max
            ))?;
            continue;
        }

        attempts += 1;

        if guess < target {
            prompter.say("Higher!")?;
        } else if guess > target {
            prompter.say("Lower!")?;
        } else {
            let outcome = finish(config, target, attempts, true, start, logger);
            prompter.say(&format!(
                "You win! Attempts: {}, Time: {:.2} s",
                outcome.attempts, outcome.elapsed_seconds
            ))?;
            return Ok(outcome);
        }
    }
}

fn finish(
    config: &RoundConfig,
    target: i32,
    attempts: u32,
    won: bool,
    start: Instant,
    logger: &mut ResultLogger,
) -> Outcome {
    let elapsed_seconds = start.elapsed().as_secs_f64();
    logger.append(&LogRecord::now(config, target, attempts, won, elapsed_seconds));
    Outcome {
        won,
        attempts,
        elapsed_seconds,
    }
}
