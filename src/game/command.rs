//! Structured commands and their success payloads.

use crate::game::{ArmyId, PlayerId, Position};

/// A command issued by the player currently holding the turn.
///
/// The front end parses free-form input into these; the game validates
/// and applies them atomically. Army ids are resolved against the
/// acting player's own roster only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move an army to a target position.
    Move {
        /// Id of the army to move.
        army: ArmyId,
        /// Target position.
        target: Position,
    },
    /// Capture the province under an army.
    Capture {
        /// Id of the capturing army.
        army: ArmyId,
    },
    /// Feed an army from the food stockpile.
    Feed {
        /// Id of the army to feed.
        army: ArmyId,
        /// Food quantity to spend.
        food: u32,
    },
    /// Undo an army's pending move.
    Undo {
        /// Id of the army to restore.
        army: ArmyId,
    },
    /// Commit the current player's moves and pass the turn.
    EndTurn,
    /// Query the current player's food stockpile.
    Resources,
    /// Query a textual report of the world and all players.
    WorldReport,
}

/// Success payload of an executed [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// An army moved.
    Moved {
        /// Position the army moved from.
        from: Position,
        /// Position the army now holds.
        to: Position,
    },
    /// A province changed hands.
    Captured {
        /// Position of the captured province.
        position: Position,
    },
    /// The province was already controlled by the acting player;
    /// nothing changed.
    AlreadyControlled {
        /// Position of the province.
        position: Position,
    },
    /// An army was fed.
    Fed {
        /// Health of the army after feeding.
        health: u32,
    },
    /// A pending move was undone.
    MoveUndone {
        /// Position the army was restored to.
        position: Position,
    },
    /// The turn passed to the next player.
    TurnEnded {
        /// Player now holding the turn.
        current_player: PlayerId,
    },
    /// Food stockpile of the acting player.
    Resources {
        /// Food held.
        food: u32,
    },
    /// Rendered report of the world and all players.
    WorldReport(String),
}
