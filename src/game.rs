use alloc::vec::Vec;

use log::{debug, info};
use rand::Rng;

use crate::{
    bid::{Bid, BidRecord},
    common::{Actor, GameError},
    config::{EngineConfig, HistoryMode, ValidationTarget},
    dice::DiceSet,
};

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// No dice on the table yet.
    AwaitingRoll,
    /// Dice rolled, bidding under way.
    InProgress,
    /// A bluff was called and resolved.
    Over,
}

/// Result of a bluff call: who won, and everything revealed to decide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub winner: Actor,
    pub challenger: Actor,
    pub disputed: BidRecord,
    /// Dice across both hands showing the disputed face.
    pub tally: usize,
    pub player_dice: DiceSet,
    pub computer_dice: DiceSet,
}

impl Outcome {
    pub fn loser(&self) -> Actor {
        self.winner.opponent()
    }

    /// Whether the disputed bid turned out to be true.
    pub fn bid_held(&self) -> bool {
        self.tally >= self.disputed.bid.quantity as usize
    }
}

/// Handle for the computer's deferred answer to a player bid.
///
/// It remembers the round generation and the bid it answers; the engine
/// ignores it once either has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingComputerBid {
    generation: u64,
    answering: Bid,
}

impl PendingComputerBid {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn answering(&self) -> Bid {
        self.answering
    }
}

/// Snapshot of everything observable about an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub config: EngineConfig,
    pub player_dice: Option<DiceSet>,
    pub computer_dice: Option<DiceSet>,
    pub current: Option<BidRecord>,
    pub history: Vec<BidRecord>,
    pub last_by: [Bid; 2],
    pub turn: Actor,
    pub outcome: Option<Outcome>,
}

/// What a front end is allowed to show. The computer's hand stays hidden
/// until the round is over.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameView {
    pub status: GameStatus,
    pub turn: Actor,
    pub player_dice: Option<DiceSet>,
    pub computer_dice: Option<DiceSet>,
    pub current_bid: Bid,
    pub bids: Vec<BidRecord>,
    pub outcome: Option<Outcome>,
}

/// Core game logic: both hands, the standing bid, whose turn it is and the
/// outcome once a bluff is called.
pub struct GameEngine {
    config: EngineConfig,
    player_dice: Option<DiceSet>,
    computer_dice: Option<DiceSet>,
    current: Option<BidRecord>,
    history: Vec<BidRecord>,
    last_by: [Bid; 2],
    turn: Actor,
    outcome: Option<Outcome>,
    generation: u64,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl GameEngine {
    /// Create an engine in the pre-roll state.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            player_dice: None,
            computer_dice: None,
            current: None,
            history: Vec::new(),
            last_by: [Bid::NULL; 2],
            turn: Actor::Player,
            outcome: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Round generation. Bumped by every roll and reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn player_dice(&self) -> Option<&DiceSet> {
        self.player_dice.as_ref()
    }

    pub fn computer_dice(&self) -> Option<&DiceSet> {
        self.computer_dice.as_ref()
    }

    /// Standing bid, or [`Bid::NULL`] when nobody has bid this round.
    pub fn current_bid(&self) -> Bid {
        self.current.map(|r| r.bid).unwrap_or(Bid::NULL)
    }

    pub fn current_record(&self) -> Option<BidRecord> {
        self.current
    }

    /// Bid log in the configured [`HistoryMode`].
    pub fn history(&self) -> &[BidRecord] {
        &self.history
    }

    pub fn turn(&self) -> Actor {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        if self.outcome.is_some() {
            GameStatus::Over
        } else if self.player_dice.is_some() {
            GameStatus::InProgress
        } else {
            GameStatus::AwaitingRoll
        }
    }

    /// Roll both hands and start a new round. Callable at any point.
    pub fn roll<R: Rng>(&mut self, rng: &mut R) {
        let player = DiceSet::roll(rng);
        let computer = DiceSet::roll(rng);
        self.deal(player, computer);
    }

    /// Start a new round with the given hands.
    pub fn deal(&mut self, player: DiceSet, computer: DiceSet) {
        self.clear_round();
        self.player_dice = Some(player);
        self.computer_dice = Some(computer);
        info!("round {} dealt, player holds {}", self.generation, player);
    }

    /// Return to the pre-roll state. Any pending computer bid becomes stale.
    pub fn reset(&mut self) {
        self.clear_round();
        debug!("engine reset, generation {}", self.generation);
    }

    fn clear_round(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new(self.config);
        self.generation = generation;
    }

    /// Submit a bid on behalf of `actor`.
    ///
    /// On success the turn passes to the opponent. A player bid returns the
    /// ticket for the computer's answer, to be handed back through
    /// [`GameEngine::resolve_computer_bid`] once the thinking delay is over.
    pub fn submit_bid(
        &mut self,
        actor: Actor,
        proposed: Bid,
    ) -> Result<Option<PendingComputerBid>, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::RoundOver);
        }
        if self.player_dice.is_none() {
            return Err(GameError::NotRolled);
        }
        if actor != self.turn {
            return Err(GameError::OutOfTurn);
        }
        let baseline = match self.config.validation {
            ValidationTarget::LastBid => self.current_bid(),
            ValidationTarget::OpponentBid => self.last_by[actor.opponent().index()],
        };
        if !proposed.in_range() || !proposed.beats(&baseline) {
            debug!("{} bid {} rejected against {}", actor, proposed, baseline);
            return Err(GameError::InvalidBid);
        }

        self.record(actor, proposed);
        if actor == Actor::Player {
            Ok(Some(PendingComputerBid {
                generation: self.generation,
                answering: proposed,
            }))
        } else {
            Ok(None)
        }
    }

    /// Whether `ticket` would still be accepted by
    /// [`GameEngine::resolve_computer_bid`].
    pub fn ticket_is_current(&self, ticket: &PendingComputerBid) -> bool {
        ticket.generation == self.generation
            && self.outcome.is_none()
            && self.turn == Actor::Computer
            && self.current_bid() == ticket.answering
    }

    /// Apply the computer's answer to a player bid. The bid itself is not
    /// checked against the bidding law.
    ///
    /// Returns `None` and leaves the engine untouched when the ticket is
    /// stale: the round was reset or re-rolled, the bluff was already called,
    /// or the standing bid is no longer the one the ticket answers.
    pub fn resolve_computer_bid(
        &mut self,
        ticket: PendingComputerBid,
        bid: Bid,
    ) -> Option<BidRecord> {
        if !self.ticket_is_current(&ticket) {
            debug!(
                "dropping stale computer bid (ticket gen {}, engine gen {})",
                ticket.generation, self.generation
            );
            return None;
        }
        Some(self.record(Actor::Computer, bid))
    }

    fn record(&mut self, actor: Actor, bid: Bid) -> BidRecord {
        let record = BidRecord { bidder: actor, bid };
        if self.config.history == HistoryMode::LatestOnly {
            self.history.clear();
        }
        self.history.push(record);
        self.current = Some(record);
        self.last_by[actor.index()] = bid;
        self.turn = actor.opponent();
        debug!("{}", record);
        record
    }

    /// Challenge the standing bid. Reveals both hands and settles the round.
    pub fn call_bluff(&mut self, actor: Actor) -> Result<Outcome, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::RoundOver);
        }
        let (disputed, player_dice, computer_dice) =
            match (self.current, self.player_dice, self.computer_dice) {
                (Some(record), Some(p), Some(c)) => (record, p, c),
                _ => return Err(GameError::NoBidsYet),
            };
        if actor != self.turn {
            return Err(GameError::OutOfTurn);
        }

        let face = disputed.bid.face;
        let tally = player_dice.count(face) + computer_dice.count(face);
        let winner = if tally >= disputed.bid.quantity as usize {
            actor.opponent()
        } else {
            actor
        };
        let outcome = Outcome {
            winner,
            challenger: actor,
            disputed,
            tally,
            player_dice,
            computer_dice,
        };
        info!(
            "{} called bluff on {}: {} showing, {} wins",
            actor, disputed, tally, winner
        );
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            config: self.config,
            player_dice: self.player_dice,
            computer_dice: self.computer_dice,
            current: self.current,
            history: self.history.clone(),
            last_by: self.last_by,
            turn: self.turn,
            outcome: self.outcome,
        }
    }

    /// Restore an engine from a previously saved state, at generation zero.
    pub fn from_state(state: GameState) -> Self {
        Self {
            config: state.config,
            player_dice: state.player_dice,
            computer_dice: state.computer_dice,
            current: state.current,
            history: state.history,
            last_by: state.last_by,
            turn: state.turn,
            outcome: state.outcome,
            generation: 0,
        }
    }

    /// The state as the player may see it.
    pub fn view(&self) -> GameView {
        GameView {
            status: self.status(),
            turn: self.turn,
            player_dice: self.player_dice,
            computer_dice: if self.is_over() { self.computer_dice } else { None },
            current_bid: self.current_bid(),
            bids: self.history.clone(),
            outcome: self.outcome,
        }
    }
}
