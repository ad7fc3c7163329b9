use core::time::Duration;

/// Dice rolled by each participant at the start of a round.
pub const DICE_PER_HAND: usize = 5;
/// Number of faces on every die.
pub const FACES: u8 = 6;
/// Total dice in play across both hands.
pub const TOTAL_DICE: usize = DICE_PER_HAND * 2;
/// Largest quantity the bid picker offers.
pub const MAX_BID_QUANTITY: u8 = 10;
/// Largest quantity the scripted computer will ever bid.
pub const COMPUTER_MAX_QUANTITY: u8 = 5;
/// How long the computer "thinks" before answering a player bid.
pub const DEFAULT_THINK_TIME: Duration = Duration::from_millis(1500);

/// How much of the bid log the engine keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum HistoryMode {
    /// Every accepted bid of the round, oldest first.
    #[default]
    Full,
    /// Only the most recent bid.
    LatestOnly,
}

/// Which earlier bid a new proposal has to beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum ValidationTarget {
    /// The outstanding bid, whoever made it.
    #[default]
    LastBid,
    /// The latest bid made by the bidder's opponent.
    OpponentBid,
}

/// Engine variant selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub history: HistoryMode,
    pub validation: ValidationTarget,
}

/// Everything a playable session needs beyond the engine variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub engine: EngineConfig,
    pub think_time: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            think_time: DEFAULT_THINK_TIME,
        }
    }
}
