//! Army state and movement rules.

use crate::game::Position;

/// Unique identifier for an army within its owning player's roster.
pub type ArmyId = u32;

/// Health every newly created army starts with, and the healing cap.
pub const FULL_HEALTH: u32 = 100;

/// Per-turn movement allowance, in Chebyshev distance.
pub const MOVE_RANGE: u16 = 2;

/// A mobile, healable unit owned by exactly one player.
///
/// Ownership is containment: an army lives in its owning player's
/// roster and is never addressable from outside it. All mutation goes
/// through the owning [`Player`](crate::game::Player).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Army {
    /// Current position on the world grid.
    position: Position,
    /// Health in `[0, FULL_HEALTH]`.
    health: u32,
    /// Combat strength.
    strength: u32,
    /// Position held at the start of the turn, set while a move is
    /// pending and cleared on commit or undo.
    turn_origin: Option<Position>,
}

impl Army {
    /// Create a new army at the given position.
    ///
    /// New armies always start at full health.
    #[must_use]
    pub const fn new(position: Position, strength: u32) -> Self {
        Self {
            position,
            health: FULL_HEALTH,
            strength,
            turn_origin: None,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> u32 {
        self.health
    }

    /// Combat strength.
    #[must_use]
    pub const fn strength(&self) -> u32 {
        self.strength
    }

    /// Position recorded at the start of the turn, while a move is
    /// pending. `None` once moves are committed or undone.
    #[must_use]
    pub const fn turn_origin(&self) -> Option<Position> {
        self.turn_origin
    }

    /// Check whether `target` is within this army's movement allowance.
    #[must_use]
    pub fn can_move_to(&self, target: Position) -> bool {
        self.position.distance(target) <= MOVE_RANGE
    }

    /// Move to `target`.
    ///
    /// The first move of the turn records the pre-move position as the
    /// turn origin; later moves in the same turn keep it, so undo
    /// always restores the position the turn started at.
    pub(crate) fn move_to(&mut self, target: Position) {
        if self.turn_origin.is_none() {
            self.turn_origin = Some(self.position);
        }
        self.position = target;
    }

    /// Restore the turn-origin position and clear the pending move.
    ///
    /// Returns the restored position, or `None` if no move is pending.
    pub(crate) fn undo_move(&mut self) -> Option<Position> {
        let origin = self.turn_origin.take()?;
        self.position = origin;
        Some(origin)
    }

    /// Commit a pending move; undo becomes unavailable until the next
    /// move is made.
    pub(crate) fn commit_move(&mut self) {
        self.turn_origin = None;
    }

    /// Increase health by `amount`, clamped to [`FULL_HEALTH`].
    pub(crate) fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(FULL_HEALTH);
    }

    /// Set health directly, for tests that need a wounded army.
    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: u32) {
        self.health = health;
    }
}
