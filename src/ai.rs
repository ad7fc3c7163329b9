// Odds of a bid holding, from one participant's point of view.
// Uses no_std and avoids heap allocations.

use crate::{
    bid::Bid,
    config::{FACES, MAX_BID_QUANTITY},
    dice::DiceSet,
};

/// Chance that any single unseen die shows a given face. Ones are not wild.
const FACE_P: f64 = 1.0 / FACES as f64;

/// Probability that `bid` holds, given the dice we can see in `own` and
/// `unseen` dice we cannot.
pub fn bid_odds(bid: &Bid, own: &DiceSet, unseen: usize) -> f64 {
    let seen = own.count(bid.face);
    let need = (bid.quantity as usize).saturating_sub(seen);
    binomial_tail(unseen, need, FACE_P)
}

/// P(X >= k) for X ~ Binomial(n, p).
pub fn binomial_tail(n: usize, k: usize, p: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }
    if k > n {
        return 0.0;
    }
    let mut total = 0.0;
    for i in k..=n {
        total += choose(n, i) * libm::pow(p, i as f64) * libm::pow(1.0 - p, (n - i) as f64);
    }
    total.min(1.0)
}

fn choose(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    let mut acc = 1.0;
    for i in 0..k {
        acc = acc * (n - i) as f64 / (i + 1) as f64;
    }
    acc
}

/// The legal raise over `current` most likely to hold, smallest quantity
/// first on ties. `None` if nothing in range beats `current`.
pub fn suggest_bid(own: &DiceSet, current: &Bid, unseen: usize) -> Option<(Bid, f64)> {
    let mut best: Option<(Bid, f64)> = None;
    for quantity in 1..=MAX_BID_QUANTITY {
        for face in 1..=FACES {
            let candidate = Bid::new(quantity, face);
            if !candidate.beats(current) {
                continue;
            }
            let odds = bid_odds(&candidate, own, unseen);
            if best.map_or(true, |(_, b)| odds > b) {
                best = Some((candidate, odds));
            }
        }
    }
    best
}
