#![warn(
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    missing_docs,
    rust_2018_idioms
)]
#![cfg_attr(not(feature = "std"), no_std)]

//! board-clock-core is a library that provides the state machine behind a
//! two-player board game clock. Each player owns a countdown, and pressing a
//! pad hands the turn over to the opponent, whose countdown then starts
//! running.
//!
//! # Example
//!
//! ```
//! use board_clock_core::{ClockEngine, Player};
//!
//! let mut clock = ClockEngine::new();
//! clock.configure_duration(300_000);
//! clock.reset();
//!
//! // The top player finished their move, so the bottom clock starts.
//! clock.press_pad(Player::Top);
//! clock.tick();
//!
//! let state = clock.snapshot();
//! assert_eq!(state.remaining_bottom, 299_000);
//! assert_eq!(state.remaining_top, 300_000);
//! ```

extern crate alloc;

pub mod clock;
pub mod formatting;
pub mod input;
#[cfg(feature = "std")]
pub mod settings;
#[cfg(feature = "ticker")]
pub mod ticker;

pub use crate::clock::{ClockEngine, Player, Snapshot, TICK_INTERVAL_MS};
#[cfg(feature = "std")]
pub use crate::{clock::SharedClock, settings::Settings};
#[cfg(feature = "ticker")]
pub use crate::ticker::Ticker;
