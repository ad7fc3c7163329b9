//! Common types for Liar's Dice: participants and engine errors.

/// One of the two participants at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Actor {
    /// The human at the keyboard.
    Player,
    /// The scripted opponent.
    Computer,
}

impl Actor {
    /// The other participant.
    pub fn opponent(self) -> Self {
        match self {
            Actor::Player => Actor::Computer,
            Actor::Computer => Actor::Player,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Actor::Player => 0,
            Actor::Computer => 1,
        }
    }
}

impl core::fmt::Display for Actor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Actor::Player => write!(f, "Player"),
            Actor::Computer => write!(f, "Computer"),
        }
    }
}

/// Errors returned by engine operations. None of them change engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Proposed bid does not beat the bid it is checked against, or is out of range.
    InvalidBid,
    /// Bluff called while no bid is standing.
    NoBidsYet,
    /// Bid submitted before the dice were rolled.
    NotRolled,
    /// Acting participant is not the one whose turn it is.
    OutOfTurn,
    /// The round has already been resolved.
    RoundOver,
}

impl GameError {
    /// Short message suitable for a transient notification.
    pub fn message(&self) -> &'static str {
        match self {
            GameError::InvalidBid => "Bid must be higher than previous bid",
            GameError::NoBidsYet => "Cannot call bluff before any bids are placed",
            GameError::NotRolled => "Dice have not been rolled yet",
            GameError::OutOfTurn => "It is not your turn",
            GameError::RoundOver => "The round is already over",
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
