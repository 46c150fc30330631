//! Player identification for a two-player game.
//!
//! Hog is always played by exactly two players. Player 0 moves first.

use serde::{Deserialize, Serialize};

/// Player identifier, either `PlayerId::ZERO` or `PlayerId::ONE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who takes the first turn.
    pub const ZERO: PlayerId = PlayerId(0);

    /// The player who takes the second turn.
    pub const ONE: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Hog has exactly 2 players");
        Self(id)
    }

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent of this player.
    ///
    /// ```
    /// use rust_hog::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ZERO.other(), PlayerId::ONE);
    /// assert_eq!(PlayerId::ONE.other(), PlayerId::ZERO);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both players in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ZERO, PlayerId::ONE].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
