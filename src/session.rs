#![cfg(feature = "std")]

use std::vec::Vec;

use log::debug;
use rand::rngs::SmallRng;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{sleep, Duration},
};

use crate::{
    bid::BidRecord,
    common::Actor,
    config::GameConfig,
    game::{GameEngine, GameStatus, GameView, PendingComputerBid},
    player::ScriptedComputer,
    ui::{BidSelection, Notice, UiEvent},
};

/// Interaction layer between a front end and the engine.
///
/// Owns the engine, the computer opponent and the bid picker. A player bid
/// starts a timer task that delivers the computer's ticket after the
/// thinking delay; rolling or resetting aborts that task, and a ticket that
/// still gets through is discarded by the engine's generation check.
pub struct Session {
    engine: GameEngine,
    computer: ScriptedComputer,
    rng: SmallRng,
    think_time: Duration,
    selection: BidSelection,
    fired_tx: mpsc::UnboundedSender<PendingComputerBid>,
    fired_rx: mpsc::UnboundedReceiver<PendingComputerBid>,
    thinking: Option<JoinHandle<()>>,
}

impl Session {
    pub fn new(config: GameConfig, rng: SmallRng) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            engine: GameEngine::new(config.engine),
            computer: ScriptedComputer::new(),
            rng,
            think_time: config.think_time,
            selection: BidSelection::default(),
            fired_tx,
            fired_rx,
            thinking: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selection(&self) -> BidSelection {
        self.selection
    }

    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// True while a player bid is waiting on the computer's answer.
    pub fn computer_thinking(&self) -> bool {
        self.engine.status() == GameStatus::InProgress && self.engine.turn() == Actor::Computer
    }

    /// Apply one user action. Rejected actions leave the game untouched and
    /// come back as notices.
    ///
    /// Must be called from within a Tokio runtime: a player bid spawns the
    /// computer's timer task.
    pub fn handle(&mut self, event: UiEvent) -> Vec<Notice> {
        let mut notices = Vec::new();
        match event {
            UiEvent::RollRequested => {
                self.cancel_thinking();
                self.engine.roll(&mut self.rng);
                self.selection.reset();
            }
            UiEvent::QuantitySelected(n) => {
                if let Err(e) = self.selection.select_quantity(n) {
                    notices.push(Notice::from(e));
                }
            }
            UiEvent::FaceSelected(n) => {
                if let Err(e) = self.selection.select_face(n) {
                    notices.push(Notice::from(e));
                }
            }
            UiEvent::BidSubmitted => match self.engine.submit_bid(Actor::Player, self.selection.bid()) {
                Ok(ticket) => {
                    self.selection.reset();
                    if let Some(ticket) = ticket {
                        self.schedule(ticket);
                    }
                }
                Err(e) => notices.push(Notice::from(e)),
            },
            UiEvent::BluffCalled => {
                if let Err(e) = self.engine.call_bluff(Actor::Player) {
                    notices.push(Notice::from(e));
                }
            }
            UiEvent::PlayAgainRequested => {
                self.cancel_thinking();
                self.engine.reset();
                self.selection.reset();
                notices.push(Notice::NEW_GAME);
            }
        }
        notices
    }

    fn schedule(&mut self, ticket: PendingComputerBid) {
        self.cancel_thinking();
        let tx = self.fired_tx.clone();
        let delay = self.think_time;
        debug!(
            "computer answers {} in {:?} (generation {})",
            ticket.answering(),
            delay,
            ticket.generation()
        );
        self.thinking = Some(tokio::spawn(async move {
            sleep(delay).await;
            let _ = tx.send(ticket);
        }));
    }

    fn cancel_thinking(&mut self) {
        if let Some(handle) = self.thinking.take() {
            handle.abort();
        }
    }

    /// Wait for the next ticket from a timer task. Pending forever when no
    /// timer is running, so use it as one arm of a `select!`.
    pub async fn next_ticket(&mut self) -> Option<PendingComputerBid> {
        self.fired_rx.recv().await
    }

    /// Let the computer answer `ticket`. `None` if the ticket is stale.
    ///
    /// A stale ticket draws nothing from the RNG, so a seeded game does not
    /// depend on when timers fire.
    pub fn apply_ticket(&mut self, ticket: PendingComputerBid) -> Option<BidRecord> {
        if !self.engine.ticket_is_current(&ticket) {
            debug!("ignoring stale ticket from generation {}", ticket.generation());
            return None;
        }
        let bid = self.computer.propose_bid(&mut self.rng);
        let record = self.engine.resolve_computer_bid(ticket, bid)?;
        self.thinking = None;
        Some(record)
    }

    /// Apply every ticket that has already fired; returns the last bid that landed.
    pub fn poll_tickets(&mut self) -> Option<BidRecord> {
        let mut landed = None;
        while let Ok(ticket) = self.fired_rx.try_recv() {
            if let Some(record) = self.apply_ticket(ticket) {
                landed = Some(record);
            }
        }
        landed
    }

    /// Wait out the computer's thinking time and apply its bid. Returns
    /// `None` straight away when the computer is not on turn.
    pub async fn wait_for_computer(&mut self) -> Option<BidRecord> {
        while self.computer_thinking() {
            let ticket = self.next_ticket().await?;
            if let Some(record) = self.apply_ticket(ticket) {
                return Some(record);
            }
        }
        None
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_thinking();
    }
}
