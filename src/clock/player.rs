use serde::{Deserialize, Serialize};

/// One of the two sides of the clock. The names follow the physical layout of
/// the clock, with one player sitting on the top and one on the bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The player whose pad is on the top of the clock.
    Top,
    /// The player whose pad is on the bottom of the clock.
    Bottom,
}

impl Player {
    /// Returns the other side of the clock.
    pub const fn opponent(self) -> Self {
        match self {
            Player::Top => Player::Bottom,
            Player::Bottom => Player::Top,
        }
    }

    /// Both players, top first.
    pub const ALL: [Player; 2] = [Player::Top, Player::Bottom];
}
