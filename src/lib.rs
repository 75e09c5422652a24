//! # hilo
//!
//! A console higher/lower number-guessing game. The program draws a
//! target inside a user-chosen inclusive range, gives directional
//! feedback on each guess, enforces an optional attempt cap, and appends
//! one record per completed round to an append-only log file.
//!
//! ## Design Principles
//!
//! 1. **No hidden global state**: the generator is an owned [`GameRng`]
//!    constructed once at startup and threaded by `&mut`.
//!
//! 2. **Injectable console**: all prompts run through a [`Prompter`]
//!    generic over its streams, so every interaction is testable with
//!    scripted input.
//!
//! 3. **Logging never blocks play**: an unopenable log degrades to a
//!    silent no-op after a one-time warning.
//!
//! ## Modules
//!
//! - `rng`: deterministic target selection
//! - `input`: line parsing and yes/no prompts
//! - `round`: the single-round engine
//! - `logger`: the append-only result log
//! - `session`: the play-again loop

pub mod input;
pub mod logger;
pub mod rng;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::input::{ParseFailure, Prompter};
pub use crate::logger::{LogRecord, ResultLogger};
pub use crate::rng::GameRng;
pub use crate::round::{play_round, Outcome, RoundConfig};
pub use crate::session::run_session;
