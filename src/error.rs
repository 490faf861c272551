//! Error types for game commands.

use std::fmt;

use crate::game::{ArmyId, Position};

/// Failures reported by game commands.
///
/// Every variant is non-fatal and state-preserving: the command is
/// rejected and the game is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// A position has no corresponding province.
    OutOfBounds(Position),
    /// An army id does not exist in the acting player's roster.
    UnknownArmy(ArmyId),
    /// A move target exceeds the per-turn movement allowance.
    IllegalMove {
        /// Position the army would have moved from.
        from: Position,
        /// The rejected target position.
        to: Position,
    },
    /// Undo was requested with no move recorded this turn.
    NoPendingMove(ArmyId),
    /// A feed requested more food than the player holds.
    InsufficientResources {
        /// Food quantity requested.
        requested: u32,
        /// Food available in the stockpile.
        available: u32,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::OutOfBounds(position) => write!(f, "no province at {position}"),
            CommandError::UnknownArmy(id) => write!(f, "unknown army id {id}"),
            CommandError::IllegalMove { from, to } => {
                write!(f, "movement out of range: {from} -> {to}")
            }
            CommandError::NoPendingMove(id) => write!(f, "army {id} has no move to undo"),
            CommandError::InsufficientResources {
                requested,
                available,
            } => {
                write!(f, "not enough food: requested {requested}, available {available}")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Result type for game commands.
pub type CommandResult<T> = Result<T, CommandError>;
