#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bid;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod dice;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
pub mod rules;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
pub mod sim;
pub mod ui;

pub use ai::*;
pub use bid::*;
pub use common::*;
pub use config::*;
pub use dice::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
#[cfg(feature = "std")]
pub use session::*;
pub use ui::*;
