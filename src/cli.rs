#![cfg(feature = "std")]

//! Text front end: command parsing and table rendering.

use std::fmt::Write as _;
use std::string::String;
use std::vec::Vec;

use crate::{
    ai,
    common::Actor,
    config::DICE_PER_HAND,
    game::{GameStatus, GameView},
    rules::RULES,
    ui::{BidSelection, Notice, NoticeLevel, UiEvent},
};

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Roll,
    Quantity(u8),
    Face(u8),
    /// Submit the picker, optionally setting both pickers first.
    Bid(Option<(u8, u8)>),
    Bluff,
    PlayAgain,
    Rules,
    Help,
    Quit,
}

impl Command {
    /// UI events this command stands for. Empty for commands handled by the
    /// front end itself.
    pub fn events(&self) -> Vec<UiEvent> {
        match *self {
            Command::Roll => vec![UiEvent::RollRequested],
            Command::Quantity(n) => vec![UiEvent::QuantitySelected(n)],
            Command::Face(n) => vec![UiEvent::FaceSelected(n)],
            Command::Bid(None) => vec![UiEvent::BidSubmitted],
            Command::Bid(Some((q, f))) => vec![
                UiEvent::QuantitySelected(q),
                UiEvent::FaceSelected(f),
                UiEvent::BidSubmitted,
            ],
            Command::Bluff => vec![UiEvent::BluffCalled],
            Command::PlayAgain => vec![UiEvent::PlayAgainRequested],
            Command::Rules | Command::Help | Command::Quit => Vec::new(),
        }
    }
}

pub const HELP: &str = "\
Commands:
  roll            roll the dice
  q <n>           pick quantity (1-10)
  f <n>           pick face (1-6)
  bid [<n> <f>]   place the picked bid, or pick and place in one go
  liar | bluff    call bluff on the standing bid
  again           start a new game
  rules           show the rules
  quit            leave";

pub fn parse_command(input: &str) -> Option<Command> {
    let mut parts = input.split_whitespace();
    let word = parts.next()?.to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();
    let number = |i: usize| args.get(i).and_then(|s| s.parse::<u8>().ok());
    let cmd = match (word.as_str(), args.len()) {
        ("roll" | "r", 0) => Command::Roll,
        ("q" | "quantity", 1) => Command::Quantity(number(0)?),
        ("f" | "face", 1) => Command::Face(number(0)?),
        ("bid" | "b", 0) => Command::Bid(None),
        ("bid" | "b", 2) => Command::Bid(Some((number(0)?, number(1)?))),
        ("liar" | "bluff" | "l", 0) => Command::Bluff,
        ("again" | "new", 0) => Command::PlayAgain,
        ("rules", 0) => Command::Rules,
        ("help" | "?", 0) => Command::Help,
        ("quit" | "exit", 0) => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Draw the table the way the player is allowed to see it.
pub fn render_view(view: &GameView, selection: &BidSelection) -> String {
    let mut out = String::new();
    let Some(player_dice) = view.player_dice else {
        let _ = writeln!(out, "Type `roll` to roll the dice.");
        return out;
    };
    let _ = writeln!(out, "Your Dice: {}", player_dice);
    match view.computer_dice {
        Some(dice) => {
            let _ = writeln!(out, "Computer Dice: {}", dice);
        }
        None => {
            let _ = writeln!(out, "Computer Dice: Hidden");
        }
    }
    let _ = writeln!(out, "[{}'s turn]", view.turn);

    match view.status {
        GameStatus::Over => {
            if let Some(outcome) = view.outcome {
                let _ = writeln!(
                    out,
                    "Disputed bid: {} ({} showing)",
                    outcome.disputed, outcome.tally
                );
                let _ = writeln!(out, "*** {} wins! ***", outcome.winner);
                let _ = writeln!(out, "Type `again` to play again.");
            }
        }
        _ => {
            if !view.bids.is_empty() {
                let _ = writeln!(out, "Bid History:");
                for record in &view.bids {
                    let _ = writeln!(out, "  {}", record);
                }
            }
            if view.turn == Actor::Player {
                let _ = writeln!(out, "Your bid: {}", selection.bid());
            } else {
                let _ = writeln!(out, "Computer is bidding...");
            }
        }
    }
    out
}

/// Odds of the standing bid and a suggested raise, from the player's seat.
pub fn render_hint(view: &GameView) -> Option<String> {
    if view.status != GameStatus::InProgress || view.turn != Actor::Player {
        return None;
    }
    let own = view.player_dice?;
    let mut out = String::new();
    if !view.current_bid.is_null() {
        let odds = ai::bid_odds(&view.current_bid, &own, DICE_PER_HAND);
        let _ = writeln!(out, "Chance {} holds: {:.0}%", view.current_bid, odds * 100.0);
    }
    if let Some((bid, odds)) = ai::suggest_bid(&own, &view.current_bid, DICE_PER_HAND) {
        let _ = writeln!(out, "Suggested bid: {} ({:.0}%)", bid, odds * 100.0);
    }
    Some(out)
}

pub fn render_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Info => format!("[i] {}", notice),
        NoticeLevel::Error => format!("[!] {}", notice),
    }
}

pub fn render_rules() -> String {
    let mut out = String::from("Rules\n");
    for (i, line) in RULES.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, line);
    }
    out
}
