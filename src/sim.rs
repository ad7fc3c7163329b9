#![cfg(feature = "std")]

//! Headless games between [`AutoPlayer`] and [`ScriptedComputer`], with the
//! computer's thinking time skipped.

use std::vec::Vec;

use anyhow::anyhow;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

use crate::{
    bid::BidRecord,
    common::Actor,
    config::EngineConfig,
    game::GameEngine,
    player::{Action, AutoPlayer, Player, ScriptedComputer},
};

/// Player bids after which the auto player is made to call.
pub const MAX_PLAYER_BIDS: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub seed: u64,
    pub winner: Actor,
    pub bids: usize,
    pub disputed: BidRecord,
    pub tally: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub config: EngineConfig,
    pub games: usize,
    pub player_wins: usize,
    pub computer_wins: usize,
    pub mean_bids: f64,
    pub results: Vec<GameRecord>,
}

/// Play one game to its bluff call.
pub fn play_one(config: EngineConfig, seed: u64) -> anyhow::Result<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = AutoPlayer::default();
    let mut computer = ScriptedComputer::new();
    let mut engine = GameEngine::new(config);
    engine.roll(&mut rng);

    let mut player_bids = 0;
    let outcome = loop {
        let action = if player_bids >= MAX_PLAYER_BIDS {
            Action::CallBluff
        } else {
            player.next_action(&mut rng, &engine.view())
        };
        match action {
            Action::Bid(bid) => {
                let ticket = engine
                    .submit_bid(Actor::Player, bid)
                    .map_err(|e| anyhow!("player bid {} refused: {}", bid, e))?
                    .ok_or_else(|| anyhow!("player bid produced no computer turn"))?;
                player_bids += 1;
                let answer = match computer.next_action(&mut rng, &engine.view()) {
                    Action::Bid(answer) => answer,
                    Action::CallBluff => {
                        break engine.call_bluff(Actor::Computer).map_err(|e| anyhow!(e))?
                    }
                };
                engine
                    .resolve_computer_bid(ticket, answer)
                    .ok_or_else(|| anyhow!("computer answer went stale"))?;
            }
            Action::CallBluff => break engine.call_bluff(Actor::Player).map_err(|e| anyhow!(e))?,
        }
    };

    Ok(GameRecord {
        seed,
        winner: outcome.winner,
        bids: player_bids * 2,
        disputed: outcome.disputed,
        tally: outcome.tally,
    })
}

/// Play `games` games with seeds `seed, seed + 1, ...`.
pub fn simulate(config: EngineConfig, seed: u64, games: usize) -> anyhow::Result<SimReport> {
    let mut results = Vec::with_capacity(games);
    for i in 0..games {
        results.push(play_one(config, seed.wrapping_add(i as u64))?);
    }
    let player_wins = results.iter().filter(|r| r.winner == Actor::Player).count();
    let total_bids: usize = results.iter().map(|r| r.bids).sum();
    let mean_bids = if games == 0 {
        0.0
    } else {
        total_bids as f64 / games as f64
    };
    Ok(SimReport {
        config,
        games,
        player_wins,
        computer_wins: games - player_wins,
        mean_bids,
        results,
    })
}
