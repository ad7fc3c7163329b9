use rand::{rngs::SmallRng, Rng};

use crate::{
    bid::Bid,
    config::{COMPUTER_MAX_QUANTITY, FACES},
    game::GameView,
};

use super::{Action, Player};

/// The computer opponent. It never looks at the table: every answer is a
/// uniformly random quantity in `1..=COMPUTER_MAX_QUANTITY` of a uniformly
/// random face, and it never calls a bluff.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedComputer;

impl ScriptedComputer {
    pub fn new() -> Self {
        Self
    }

    pub fn propose_bid<R: Rng>(&mut self, rng: &mut R) -> Bid {
        let quantity = rng.random_range(1..=COMPUTER_MAX_QUANTITY);
        let face = rng.random_range(1..=FACES);
        Bid::new(quantity, face)
    }
}

impl Player for ScriptedComputer {
    fn next_action(&mut self, rng: &mut SmallRng, _view: &GameView) -> Action {
        Action::Bid(self.propose_bid(rng))
    }
}
