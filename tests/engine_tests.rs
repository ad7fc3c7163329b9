use liars_dice::{
    Actor, Bid, BidRecord, DiceSet, EngineConfig, GameEngine, GameError, GameStatus, HistoryMode,
    ValidationTarget,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn hand(faces: [u8; 5]) -> DiceSet {
    DiceSet::from_faces(faces).unwrap()
}

fn dealt(player: [u8; 5], computer: [u8; 5]) -> GameEngine {
    let mut engine = GameEngine::default();
    engine.deal(hand(player), hand(computer));
    engine
}

/// Put `bid` on the table as the computer's answer to an opening player bid.
fn computer_answers(engine: &mut GameEngine, opening: Bid, bid: Bid) {
    let ticket = engine.submit_bid(Actor::Player, opening).unwrap().unwrap();
    engine.resolve_computer_bid(ticket, bid).unwrap();
}

#[test]
fn test_roll_deals_two_full_hands() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut engine = GameEngine::default();
    assert_eq!(engine.status(), GameStatus::AwaitingRoll);
    engine.roll(&mut rng);
    assert_eq!(engine.status(), GameStatus::InProgress);
    for dice in [engine.player_dice().unwrap(), engine.computer_dice().unwrap()] {
        assert_eq!(dice.faces().len(), 5);
        assert!(dice.faces().iter().all(|f| (1..=6).contains(f)));
    }
    assert!(engine.current_bid().is_null());
    assert_eq!(engine.turn(), Actor::Player);
    assert!(engine.outcome().is_none());
}

#[test]
fn test_roll_mid_round_starts_over() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut engine = GameEngine::default();
    engine.roll(&mut rng);
    engine.submit_bid(Actor::Player, Bid::new(2, 3)).unwrap();
    engine.roll(&mut rng);
    assert!(engine.current_bid().is_null());
    assert!(engine.history().is_empty());
    assert_eq!(engine.turn(), Actor::Player);
}

#[test]
fn test_bid_before_roll_refused() {
    let mut engine = GameEngine::default();
    assert_eq!(
        engine.submit_bid(Actor::Player, Bid::new(1, 1)),
        Err(GameError::NotRolled)
    );
}

#[test]
fn test_player_bid_flips_turn_and_schedules_computer() {
    let mut engine = dealt([1, 2, 3, 4, 5], [6, 6, 6, 6, 6]);
    let ticket = engine.submit_bid(Actor::Player, Bid::new(2, 3)).unwrap();
    let ticket = ticket.expect("player bid schedules the computer");
    assert_eq!(ticket.answering(), Bid::new(2, 3));
    assert_eq!(ticket.generation(), engine.generation());
    assert_eq!(engine.turn(), Actor::Computer);
    assert_eq!(engine.current_bid(), Bid::new(2, 3));

    let record = engine.resolve_computer_bid(ticket, Bid::new(1, 1)).unwrap();
    assert_eq!(record, BidRecord { bidder: Actor::Computer, bid: Bid::new(1, 1) });
    assert_eq!(engine.turn(), Actor::Player);
    assert_eq!(engine.current_bid(), Bid::new(1, 1));
}

#[test]
fn test_computer_answer_is_not_validated() {
    let mut engine = dealt([1, 2, 3, 4, 5], [6, 6, 6, 6, 6]);
    let ticket = engine.submit_bid(Actor::Player, Bid::new(9, 6)).unwrap().unwrap();
    // Lower on both axes, still accepted.
    assert!(engine.resolve_computer_bid(ticket, Bid::new(1, 1)).is_some());
}

#[test]
fn test_dominance_rule_table() {
    let cases = [
        (Bid::new(3, 4), Bid::new(3, 4), false),
        (Bid::new(3, 4), Bid::new(2, 4), false),
        (Bid::new(3, 4), Bid::new(3, 3), false),
        (Bid::new(3, 4), Bid::new(1, 1), false),
        (Bid::new(3, 4), Bid::new(4, 4), true),
        (Bid::new(3, 4), Bid::new(3, 5), true),
        (Bid::new(3, 4), Bid::new(1, 6), true),
        (Bid::new(3, 4), Bid::new(9, 1), true),
    ];
    for (standing, proposed, accepted) in cases {
        let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
        computer_answers(&mut engine, Bid::new(1, 1), standing);
        let result = engine.submit_bid(Actor::Player, proposed);
        assert_eq!(result.is_ok(), accepted, "{} over {}", proposed, standing);
        if !accepted {
            assert_eq!(result, Err(GameError::InvalidBid));
            assert_eq!(engine.current_bid(), standing);
            assert_eq!(engine.turn(), Actor::Player);
        }
    }
}

#[test]
fn test_out_of_range_bid_is_invalid() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    for bid in [Bid::new(0, 3), Bid::new(11, 3), Bid::new(2, 0), Bid::new(2, 7)] {
        assert_eq!(engine.submit_bid(Actor::Player, bid), Err(GameError::InvalidBid));
    }
    assert!(engine.history().is_empty());
}

#[test]
fn test_out_of_turn_bid_refused() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    assert_eq!(
        engine.submit_bid(Actor::Computer, Bid::new(1, 1)),
        Err(GameError::OutOfTurn)
    );
    engine.submit_bid(Actor::Player, Bid::new(1, 1)).unwrap();
    assert_eq!(
        engine.submit_bid(Actor::Player, Bid::new(2, 2)),
        Err(GameError::OutOfTurn)
    );
}

#[test]
fn test_computer_bid_through_submit_returns_no_ticket() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    engine.submit_bid(Actor::Player, Bid::new(1, 1)).unwrap();
    assert_eq!(engine.submit_bid(Actor::Computer, Bid::new(2, 1)), Ok(None));
    assert_eq!(engine.turn(), Actor::Player);
}

#[test]
fn test_bluff_on_false_bid_wins_for_challenger() {
    let mut engine = dealt([2, 2, 2, 5, 5], [2, 3, 3, 3, 6]);
    computer_answers(&mut engine, Bid::new(1, 1), Bid::new(4, 2));
    let outcome = engine.call_bluff(Actor::Player).unwrap();
    assert_eq!(outcome.tally, 3);
    assert!(!outcome.bid_held());
    assert_eq!(outcome.winner, Actor::Player);
    assert_eq!(outcome.loser(), Actor::Computer);
    assert_eq!(outcome.challenger, Actor::Player);
    assert_eq!(outcome.disputed.bidder, Actor::Computer);
    assert!(engine.is_over());
    assert_eq!(engine.status(), GameStatus::Over);
}

#[test]
fn test_bluff_on_true_bid_wins_for_bidder() {
    let mut engine = dealt([1, 1, 1, 1, 1], [1, 1, 1, 1, 1]);
    engine.submit_bid(Actor::Player, Bid::new(10, 1)).unwrap();
    let outcome = engine.call_bluff(Actor::Computer).unwrap();
    assert_eq!(outcome.tally, 10);
    assert!(outcome.bid_held());
    assert_eq!(outcome.winner, Actor::Player);
    assert_eq!(outcome.challenger, Actor::Computer);
}

#[test]
fn test_ones_are_not_wild() {
    let mut engine = dealt([1, 1, 1, 4, 4], [1, 1, 2, 3, 5]);
    computer_answers(&mut engine, Bid::new(1, 1), Bid::new(3, 4));
    let outcome = engine.call_bluff(Actor::Player).unwrap();
    assert_eq!(outcome.tally, 2);
    assert_eq!(outcome.winner, Actor::Player);
}

#[test]
fn test_bluff_without_bid_refused() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    assert_eq!(engine.call_bluff(Actor::Player), Err(GameError::NoBidsYet));
    let mut unrolled = GameEngine::default();
    assert_eq!(unrolled.call_bluff(Actor::Player), Err(GameError::NoBidsYet));
    assert!(!engine.is_over());
}

#[test]
fn test_bluff_out_of_turn_refused() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    engine.submit_bid(Actor::Player, Bid::new(1, 1)).unwrap();
    assert_eq!(engine.call_bluff(Actor::Player), Err(GameError::OutOfTurn));
}

#[test]
fn test_nothing_moves_after_round_over() {
    let mut engine = dealt([2, 2, 2, 5, 5], [2, 3, 3, 3, 6]);
    computer_answers(&mut engine, Bid::new(1, 2), Bid::new(4, 2));
    let outcome = engine.call_bluff(Actor::Player).unwrap();
    assert_eq!(engine.submit_bid(Actor::Player, Bid::new(5, 6)), Err(GameError::RoundOver));
    assert_eq!(engine.call_bluff(Actor::Player), Err(GameError::RoundOver));
    assert_eq!(engine.outcome(), Some(&outcome));
}

#[test]
fn test_reset_matches_fresh_engine() {
    let config = EngineConfig {
        history: HistoryMode::LatestOnly,
        validation: ValidationTarget::OpponentBid,
    };
    let mut rng = SmallRng::seed_from_u64(11);
    let mut engine = GameEngine::new(config);
    engine.roll(&mut rng);
    engine.submit_bid(Actor::Player, Bid::new(3, 3)).unwrap();
    engine.reset();
    assert_eq!(engine.state(), GameEngine::new(config).state());

    engine.deal(hand([1, 1, 1, 1, 1]), hand([1, 1, 1, 1, 1]));
    engine.submit_bid(Actor::Player, Bid::new(2, 1)).unwrap();
    engine.submit_bid(Actor::Computer, Bid::new(3, 1)).unwrap();
    engine.call_bluff(Actor::Player).unwrap();
    engine.reset();
    assert_eq!(engine.state(), GameEngine::new(config).state());
    assert_eq!(engine.status(), GameStatus::AwaitingRoll);
}

#[test]
fn test_ticket_stale_after_reset() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    let ticket = engine.submit_bid(Actor::Player, Bid::new(2, 2)).unwrap().unwrap();
    engine.reset();
    let before = engine.state();
    assert!(engine.resolve_computer_bid(ticket, Bid::new(5, 5)).is_none());
    assert_eq!(engine.state(), before);
}

#[test]
fn test_ticket_stale_after_reroll_into_same_position() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    let old = engine.submit_bid(Actor::Player, Bid::new(2, 2)).unwrap().unwrap();
    engine.deal(hand([1, 2, 3, 4, 5]), hand([1, 2, 3, 4, 5]));
    // Same bid in the new round: the old ticket still must not land.
    let fresh = engine.submit_bid(Actor::Player, Bid::new(2, 2)).unwrap().unwrap();
    assert_ne!(old.generation(), fresh.generation());
    assert!(engine.resolve_computer_bid(old, Bid::new(5, 5)).is_none());
    assert_eq!(engine.turn(), Actor::Computer);
    assert!(engine.resolve_computer_bid(fresh, Bid::new(5, 5)).is_some());
}

#[test]
fn test_ticket_used_twice_lands_once() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    let ticket = engine.submit_bid(Actor::Player, Bid::new(2, 2)).unwrap().unwrap();
    assert!(engine.resolve_computer_bid(ticket, Bid::new(3, 3)).is_some());
    assert!(engine.resolve_computer_bid(ticket, Bid::new(4, 4)).is_none());
    assert_eq!(engine.history().len(), 2);
}

#[test]
fn test_ticket_stale_after_bluff() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    let ticket = engine.submit_bid(Actor::Player, Bid::new(2, 2)).unwrap().unwrap();
    engine.call_bluff(Actor::Computer).unwrap();
    assert!(engine.resolve_computer_bid(ticket, Bid::new(3, 3)).is_none());
}

#[test]
fn test_ticket_is_current_tracks_the_round() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    let ticket = engine.submit_bid(Actor::Player, Bid::new(2, 2)).unwrap().unwrap();
    assert!(engine.ticket_is_current(&ticket));
    engine.reset();
    assert!(!engine.ticket_is_current(&ticket));
}

#[test]
fn test_full_history_keeps_every_bid() {
    let mut engine = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
    computer_answers(&mut engine, Bid::new(1, 1), Bid::new(2, 2));
    computer_answers(&mut engine, Bid::new(3, 2), Bid::new(1, 5));
    let bids: Vec<Bid> = engine.history().iter().map(|r| r.bid).collect();
    assert_eq!(bids, vec![Bid::new(1, 1), Bid::new(2, 2), Bid::new(3, 2), Bid::new(1, 5)]);
    let bidders: Vec<Actor> = engine.history().iter().map(|r| r.bidder).collect();
    assert_eq!(
        bidders,
        vec![Actor::Player, Actor::Computer, Actor::Player, Actor::Computer]
    );
}

#[test]
fn test_latest_only_history_keeps_one_bid() {
    let mut engine = GameEngine::new(EngineConfig {
        history: HistoryMode::LatestOnly,
        ..EngineConfig::default()
    });
    engine.deal(hand([1, 2, 3, 4, 5]), hand([1, 2, 3, 4, 5]));
    computer_answers(&mut engine, Bid::new(1, 1), Bid::new(2, 2));
    assert_eq!(
        engine.history(),
        &[BidRecord { bidder: Actor::Computer, bid: Bid::new(2, 2) }]
    );
}

#[test]
fn test_validation_target_decides_the_baseline() {
    let base = dealt([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]).state();
    // Restored position where the player holds the standing bid and is on turn again.
    let mut state = base.clone();
    state.current = Some(BidRecord { bidder: Actor::Player, bid: Bid::new(3, 4) });
    state.history = vec![
        BidRecord { bidder: Actor::Computer, bid: Bid::new(2, 2) },
        BidRecord { bidder: Actor::Player, bid: Bid::new(3, 4) },
    ];
    state.last_by = [Bid::new(3, 4), Bid::new(2, 2)];
    state.turn = Actor::Player;

    state.config.validation = ValidationTarget::LastBid;
    let mut last = GameEngine::from_state(state.clone());
    assert_eq!(
        last.submit_bid(Actor::Player, Bid::new(2, 3)),
        Err(GameError::InvalidBid)
    );

    state.config.validation = ValidationTarget::OpponentBid;
    let mut opponent = GameEngine::from_state(state);
    assert!(opponent.submit_bid(Actor::Player, Bid::new(2, 3)).is_ok());
}

#[test]
fn test_view_hides_computer_dice_until_over() {
    let mut engine = dealt([2, 2, 2, 5, 5], [2, 3, 3, 3, 6]);
    assert_eq!(engine.view().computer_dice, None);
    assert_eq!(engine.view().player_dice, Some(hand([2, 2, 2, 5, 5])));
    computer_answers(&mut engine, Bid::new(1, 1), Bid::new(4, 2));
    assert_eq!(engine.view().computer_dice, None);
    engine.call_bluff(Actor::Player).unwrap();
    let view = engine.view();
    assert_eq!(view.computer_dice, Some(hand([2, 3, 3, 3, 6])));
    assert_eq!(view.status, GameStatus::Over);
    assert_eq!(view.outcome.unwrap().winner, Actor::Player);
}

#[test]
fn test_state_roundtrip() {
    let mut engine = dealt([6, 5, 4, 3, 2], [1, 1, 2, 2, 3]);
    computer_answers(&mut engine, Bid::new(2, 1), Bid::new(3, 3));
    let state = engine.state();
    let restored = GameEngine::from_state(state.clone());
    assert_eq!(restored.state(), state);
    assert_eq!(restored.turn(), Actor::Player);
}
