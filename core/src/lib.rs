//! Minesweeper board and game-state engine.
//!
//! [`Game`] drives a [`Board`]: it opens cells (flood filling zero regions),
//! toggles marks, decides victory or defeat and notifies registered observers
//! through [`EventBus`]. Front-ends read the player-visible state with
//! [`Game::board_state`] and [`Game::statistics`].

#![no_std]

extern crate alloc;

pub use board::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod config;
mod engine;
mod error;
mod events;
mod generator;
mod snapshot;
mod types;
