use crate::{
    common::Actor,
    config::{FACES, MAX_BID_QUANTITY},
};

/// A claim that at least `quantity` dice on the table show `face`.
///
/// [`Bid::NULL`] stands for "no bid yet" and is beaten by any real bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Bid {
    pub quantity: u8,
    pub face: u8,
}

impl Bid {
    pub const NULL: Bid = Bid { quantity: 0, face: 0 };

    pub const fn new(quantity: u8, face: u8) -> Self {
        Self { quantity, face }
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// True when quantity is in `1..=MAX_BID_QUANTITY` and face in `1..=FACES`.
    pub fn in_range(&self) -> bool {
        (1..=MAX_BID_QUANTITY).contains(&self.quantity) && (1..=FACES).contains(&self.face)
    }

    /// The bidding law of this game: a bid beats `previous` when it is higher
    /// on at least one axis. Being lower on the other axis does not matter, so
    /// `2 x 6` beats `5 x 3`. Only a tie-or-worse on both axes is refused.
    pub fn beats(&self, previous: &Bid) -> bool {
        self.quantity > previous.quantity || self.face > previous.face
    }
}

impl core::fmt::Display for Bid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} x {}", self.quantity, self.face)
    }
}

/// An accepted bid together with who made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BidRecord {
    pub bidder: Actor,
    pub bid: Bid,
}

impl core::fmt::Display for BidRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.bidder, self.bid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_real_bid_beats_null() {
        assert!(Bid::new(1, 1).beats(&Bid::NULL));
    }

    #[test]
    fn single_axis_improvement_is_enough() {
        let prev = Bid::new(5, 3);
        assert!(Bid::new(2, 6).beats(&prev));
        assert!(Bid::new(6, 1).beats(&prev));
        assert!(!Bid::new(5, 3).beats(&prev));
        assert!(!Bid::new(4, 2).beats(&prev));
    }

    #[test]
    fn range_check() {
        assert!(Bid::new(10, 6).in_range());
        assert!(!Bid::new(11, 6).in_range());
        assert!(!Bid::new(0, 3).in_range());
        assert!(!Bid::new(3, 7).in_range());
        assert!(!Bid::NULL.in_range());
    }
}
