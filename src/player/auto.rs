use rand::rngs::SmallRng;

use crate::{ai, common::Actor, config::DICE_PER_HAND, game::GameView};

use super::{Action, Player};

/// Odds-driven player sitting in the human's seat.
///
/// Challenges a standing opponent bid whose odds fall below `threshold`,
/// otherwise makes the raise most likely to hold.
pub struct AutoPlayer {
    threshold: f64,
}

impl AutoPlayer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for AutoPlayer {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Player for AutoPlayer {
    fn next_action(&mut self, _rng: &mut SmallRng, view: &GameView) -> Action {
        let own = match view.player_dice {
            Some(d) => d,
            None => return Action::CallBluff,
        };
        let unseen = DICE_PER_HAND;
        let standing = view.bids.last().filter(|r| r.bidder == Actor::Computer);
        if let Some(record) = standing {
            if ai::bid_odds(&record.bid, &own, unseen) < self.threshold {
                return Action::CallBluff;
            }
        }
        match ai::suggest_bid(&own, &view.current_bid, unseen) {
            Some((bid, _)) => Action::Bid(bid),
            None => Action::CallBluff,
        }
    }
}
