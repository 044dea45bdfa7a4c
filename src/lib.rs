#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
#[cfg(feature = "std")]
mod app;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod movement;

#[cfg(feature = "std")]
pub use app::{run, write_banner};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
#[cfg(feature = "std")]
pub use movement::{
    move_bishop, move_queen, move_rook, narrate, narrate_piece, Direction, LoopKind, Piece,
    NO_MOVEMENT,
};
