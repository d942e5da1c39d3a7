#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cell;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, is_engine_target, LOG_ENV_VAR};
pub use player::*;
pub use ship::*;
