//! Game layer for Warfront.
//!
//! Implements the game model and its transition rules:
//! - World of provinces (terrain, optional city, optional owner)
//! - Map data loading
//! - Players with army rosters and a food stockpile
//! - Movement with per-turn undo, capture, feeding
//! - Turn commit and advancement

mod army;
mod command;
pub mod invariants;
mod loader;
mod player;
mod position;
mod state;
mod world;

pub use army::{Army, ArmyId, FULL_HEALTH, MOVE_RANGE};
pub use command::{Command, CommandOutcome};
pub use loader::MapDataError;
pub use player::{Player, PlayerId};
pub use position::Position;
pub use state::Game;
pub use world::{City, Province, Terrain, World};
