//! The clock module provides the [`ClockEngine`], the state machine that
//! decides whose countdown runs, and the types it exposes for rendering.

mod player;
mod snapshot;


pub use self::{player::Player, snapshot::Snapshot};

/// The period in milliseconds at which the clock is meant to be ticked. Every
/// tick takes exactly this much time off the active player's clock.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// The configured duration a freshly created clock hands out on reset.
pub const DEFAULT_CONFIGURED_DURATION_MS: u64 = 100_000;

/// The time both players start out with before the first reset.
pub const DEFAULT_INITIAL_REMAINING_MS: u64 = 10_000;

/// A [`ClockEngine`] that can be shared between threads, for example between
/// a [`Ticker`](crate::Ticker) and the presentation layer. Every action and
/// tick runs to completion while holding the write lock.
#[cfg(feature = "std")]
pub type SharedClock = alloc::sync::Arc<parking_lot::RwLock<ClockEngine>>;

/// The state machine of a two-player countdown clock. The engine only
/// changes through its actions, and it is driven by calling [`tick`] once per
/// [`TICK_INTERVAL_MS`].
///
/// [`tick`]: ClockEngine::tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockEngine {
    configured_duration: u64,
    remaining_top: u64,
    remaining_bottom: u64,
    active_player: Option<Player>,
    is_paused: bool,
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockEngine {
    /// Creates a new paused clock with no active player. Both players start
    /// with 10 seconds, while a reset hands out the configured duration of
    /// 100 seconds.
    pub const fn new() -> Self {
        Self::with_durations(DEFAULT_CONFIGURED_DURATION_MS, DEFAULT_INITIAL_REMAINING_MS)
    }

    /// Creates a new paused clock where both players start out with
    /// `initial_remaining` milliseconds and a reset hands out
    /// `configured_duration` milliseconds.
    pub const fn with_durations(configured_duration: u64, initial_remaining: u64) -> Self {
        Self {
            configured_duration,
            remaining_top: initial_remaining,
            remaining_bottom: initial_remaining,
            active_player: None,
            is_paused: true,
        }
    }

    /// Creates a new clock from the durations stored in the settings.
    #[cfg(feature = "std")]
    pub fn with_settings(settings: &crate::Settings) -> Self {
        Self::with_durations(
            settings.configured_duration_ms,
            settings.initial_remaining_ms,
        )
    }

    /// Wraps the clock into a [`SharedClock`].
    #[cfg(feature = "std")]
    pub fn into_shared(self) -> SharedClock {
        alloc::sync::Arc::new(parking_lot::RwLock::new(self))
    }

    /// The duration in milliseconds each player receives on the next reset.
    pub const fn configured_duration(&self) -> u64 {
        self.configured_duration
    }

    /// Sets the duration each player receives on the next reset. The clocks
    /// that are currently counting down are not touched.
    pub fn configure_duration(&mut self, milliseconds: u64) {
        self.configured_duration = milliseconds;
    }

    /// Makes `player` the active player and resumes the clock. Nothing is
    /// taken off until the next tick.
    pub fn activate(&mut self, player: Player) {
        self.active_player = Some(player);
        self.is_paused = false;
    }

    /// Handles `player` pressing their pad. Pressing the pad ends that
    /// player's turn, so it is the opponent's clock that starts running.
    pub fn press_pad(&mut self, player: Player) {
        self.activate(player.opponent());
    }

    /// Pauses a running clock or resumes a paused one. Without an active
    /// player this only flips the flag, as no clock runs either way.
    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
    }

    /// Hands the configured duration out to both players and pauses the
    /// clock. The active player is kept, so resuming continues with the same
    /// player's clock.
    pub fn reset(&mut self) {
        self.remaining_top = self.configured_duration;
        self.remaining_bottom = self.configured_duration;
        self.is_paused = true;
    }

    /// Takes one [`TICK_INTERVAL_MS`] off the active player's clock. Does
    /// nothing while paused, without an active player, or once the active
    /// player has run out of time.
    pub fn tick(&mut self) {
        if self.is_paused {
            return;
        }
        let remaining = match self.active_player {
            Some(Player::Top) => &mut self.remaining_top,
            Some(Player::Bottom) => &mut self.remaining_bottom,
            None => return,
        };
        *remaining = remaining.saturating_sub(TICK_INTERVAL_MS);
    }

    /// Returns the current state for rendering.
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            remaining_top: self.remaining_top,
            remaining_bottom: self.remaining_bottom,
            active_player: self.active_player,
            is_paused: self.is_paused,
        }
    }
}
