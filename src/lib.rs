#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod board;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod opponent;
mod placement;
#[cfg(feature = "std")]
pub mod remote;
mod ship;
mod shot;
#[cfg(feature = "std")]
pub mod snapshot;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
#[cfg(feature = "std")]
pub use opponent::AiOpponent;
pub use placement::*;
#[cfg(feature = "std")]
pub use remote::{choose_target, DecisionService, HttpDecisionService};
pub use ship::*;
pub use shot::*;
#[cfg(feature = "std")]
pub use snapshot::{restore_or_fresh, MatchSnapshot, SaveFile, SnapshotError};
#[cfg(feature = "std")]
pub use ui::*;
