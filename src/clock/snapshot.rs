use super::Player;
use serde::{Deserialize, Serialize};

/// An immutable view of the clock's state at one point in time. This is what
/// a presentation layer renders. All times are in milliseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The time left for the top player.
    pub remaining_top: u64,
    /// The time left for the bottom player.
    pub remaining_bottom: u64,
    /// The player whose clock runs while the clock isn't paused. `None` until
    /// the first pad is pressed.
    pub active_player: Option<Player>,
    /// Whether the clock is paused. No time is taken off while paused.
    pub is_paused: bool,
}

impl Snapshot {
    /// The time left for the given player.
    pub const fn remaining(&self, player: Player) -> u64 {
        match player {
            Player::Top => self.remaining_top,
            Player::Bottom => self.remaining_bottom,
        }
    }

    /// Whether the given player has run out of time.
    pub const fn is_timed_out(&self, player: Player) -> bool {
        self.remaining(player) == 0
    }

    /// The active player if their time has run out. A flagged player that is
    /// not on the move isn't reported.
    pub fn timed_out_player(&self) -> Option<Player> {
        self.active_player.filter(|&p| self.is_timed_out(p))
    }

    /// Whether a tick would currently take time off a clock.
    pub fn is_running(&self) -> bool {
        !self.is_paused
            && self
                .active_player
                .map_or(false, |p| !self.is_timed_out(p))
    }
}
