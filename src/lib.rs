#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod cell;
mod common;
mod config;
mod engine;
mod geometry;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod lookup;
pub mod prelude;
mod ship;
pub mod validator;

pub use cell::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use geometry::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use ship::*;
