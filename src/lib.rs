#![cfg_attr(not(feature = "std"), no_std)]
//! Grid battle game engine and per-player session lifecycle.
//!
//! The engine half (coordinates, grid, generator, resolver, rendering) is
//! pure and builds without `std`. The session half owns mutable state behind
//! injected store, event and directory collaborators.

extern crate alloc;

mod bitboard;
pub mod config;
pub mod coord;
mod generator;
mod grid;
mod render;
mod resolver;

#[cfg(feature = "std")]
pub mod command;
#[cfg(feature = "std")]
pub mod directory;
#[cfg(feature = "std")]
pub mod events;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod manager;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
pub mod store;

pub use bitboard::CellMask;
pub use config::*;
pub use coord::{decode, encode, Coord, CoordError};
pub use generator::*;
pub use grid::*;
pub use render::*;
pub use resolver::*;

#[cfg(feature = "std")]
pub use command::{dispatch, Command};
#[cfg(feature = "std")]
pub use directory::{PlayerDirectory, StaticDirectory};
#[cfg(feature = "std")]
pub use events::{ChannelSink, EventSink, GameEvent, NullSink, RecordingSink};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use manager::{MoveReport, SessionManager};
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use store::{InMemoryStore, SessionStore};
