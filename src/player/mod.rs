//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - ScriptedComputer: the opponent, bidding at random and never challenging
//! - AutoPlayer: odds-driven stand-in for the human, used by the simulator

use rand::rngs::SmallRng;

use crate::{bid::Bid, game::GameView};

/// A move a participant can make on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Bid(Bid),
    CallBluff,
}

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Decide what to do given everything this participant can see.
    fn next_action(&mut self, rng: &mut SmallRng, view: &GameView) -> Action;
}

pub mod auto;
pub mod computer;
pub use auto::AutoPlayer;
pub use computer::ScriptedComputer;
