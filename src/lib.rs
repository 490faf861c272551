// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Warfront: a turn-based territorial-conquest game engine.
//!
//! The world is a grid of provinces, some containing cities. Players
//! command armies that move across the grid, capture provinces, and are
//! healed from a per-player food stockpile. The engine is the game-state
//! model and its transition rules: movement legality and single-depth
//! undo, province capture, turn commit/advance, and resource-gated
//! healing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Front end (REPL / map tooling)    │
//! ├─────────────────────────────────────┤
//! │   Command layer (Game::execute)     │
//! ├─────────────────────────────────────┤
//! │   World / Player / Army model       │
//! └─────────────────────────────────────┘
//! ```
//!
//! Every command is synchronous and atomic: it is validated against the
//! current state and either fully applied or rejected with a typed
//! error, leaving the state untouched.

pub mod error;
pub mod game;
pub mod render;

pub use error::{CommandError, CommandResult};

// Re-export key game types at crate root for convenience
pub use game::{
    Army, ArmyId, City, Command, CommandOutcome, Game, MapDataError, Player, PlayerId, Position,
    Province, Terrain, World,
};
