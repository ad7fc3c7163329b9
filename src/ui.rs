//! Boundary between the engine and whatever draws the table: the input
//! events a front end produces, the bid picker it edits, and the transient
//! notices it shows back.

use crate::{
    bid::Bid,
    common::GameError,
    config::{FACES, MAX_BID_QUANTITY},
};

/// User actions a front end reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    RollRequested,
    QuantitySelected(u8),
    FaceSelected(u8),
    BidSubmitted,
    BluffCalled,
    PlayAgainRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A short-lived toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub const NEW_GAME: Notice = Notice {
        level: NoticeLevel::Info,
        title: "New Game",
        description: "Starting a new game of Liar's Dice!",
    };
}

impl From<GameError> for Notice {
    fn from(err: GameError) -> Self {
        let title = match err {
            GameError::InvalidBid => "Invalid Bid",
            GameError::NoBidsYet => "No Bids Placed",
            GameError::NotRolled => "Roll First",
            GameError::OutOfTurn => "Not Your Turn",
            GameError::RoundOver => "Round Over",
        };
        Notice {
            level: NoticeLevel::Error,
            title,
            description: err.message(),
        }
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// The quantity and face pickers. Starts at `1 x 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidSelection {
    quantity: u8,
    face: u8,
}

impl Default for BidSelection {
    fn default() -> Self {
        Self { quantity: 1, face: 1 }
    }
}

impl BidSelection {
    pub fn select_quantity(&mut self, quantity: u8) -> Result<(), GameError> {
        if !(1..=MAX_BID_QUANTITY).contains(&quantity) {
            return Err(GameError::InvalidBid);
        }
        self.quantity = quantity;
        Ok(())
    }

    pub fn select_face(&mut self, face: u8) -> Result<(), GameError> {
        if !(1..=FACES).contains(&face) {
            return Err(GameError::InvalidBid);
        }
        self.face = face;
        Ok(())
    }

    pub fn bid(&self) -> Bid {
        Bid::new(self.quantity, self.face)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_rejects_out_of_range() {
        let mut sel = BidSelection::default();
        assert_eq!(sel.select_quantity(11), Err(GameError::InvalidBid));
        assert_eq!(sel.select_quantity(0), Err(GameError::InvalidBid));
        assert_eq!(sel.select_face(7), Err(GameError::InvalidBid));
        assert_eq!(sel.bid(), Bid::new(1, 1));
        sel.select_quantity(10).unwrap();
        sel.select_face(6).unwrap();
        assert_eq!(sel.bid(), Bid::new(10, 6));
        sel.reset();
        assert_eq!(sel.bid(), Bid::new(1, 1));
    }

    #[test]
    fn invalid_bid_notice_matches_toast() {
        let notice = Notice::from(GameError::InvalidBid);
        assert_eq!(notice.title, "Invalid Bid");
        assert_eq!(notice.description, "Bid must be higher than previous bid");
        assert_eq!(notice.level, NoticeLevel::Error);
    }
}
