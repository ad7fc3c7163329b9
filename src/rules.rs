//! Rules as shown to the player.
//!
//! Rule 6 describes elimination across rounds. Only a single round is played
//! per game, and ones are never wild.

pub const RULES: [&str; 6] = [
    "Each player starts with five dice.",
    "Players take turns bidding on the total number of a specific face value that are showing among all the dice on the table.",
    "Each bid must be higher than the previous bid, either in quantity or face value.",
    "If a player believes the previous bid was too high, they can challenge by saying \"Liar!\"",
    "All dice are then revealed. If the bid was too high, the bidder loses. If not, the challenger loses.",
    "The game continues until only one player has dice remaining.",
];
