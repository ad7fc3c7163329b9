//! Commonly used types and utilities for ease of import.

pub use crate::{
    Action, Actor, AutoPlayer, Bid, BidRecord, DiceSet, EngineConfig, GameConfig, GameEngine,
    GameError, GameStatus, GameView, Outcome, Player, ScriptedComputer, UiEvent,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Session};
