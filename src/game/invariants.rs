//! Game invariants - sanity checks that detect bugs.
//!
//! These should never trigger in a correctly implemented game: every
//! mutating operation validates before it touches state. A violation
//! indicates a bug in one of those operations, not a gameplay
//! condition.

use std::fmt;

use crate::game::{FULL_HEALTH, Game};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns the violations found, empty if all invariants hold:
/// every army stands on a province, army health never exceeds the cap,
/// pending-move origins refer to real provinces, and every owned
/// province belongs to a registered player.
#[must_use]
pub fn check_invariants(game: &Game) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for player in game.players() {
        for (id, army) in player.armies() {
            if !game.world().in_bounds(army.position()) {
                violations.push(InvariantViolation {
                    message: format!(
                        "Army {id} of player {} stands at {} which has no province",
                        player.id(),
                        army.position()
                    ),
                });
            }
            if army.health() > FULL_HEALTH {
                violations.push(InvariantViolation {
                    message: format!(
                        "Army {id} of player {} has health {} > {FULL_HEALTH}",
                        player.id(),
                        army.health()
                    ),
                });
            }
            if let Some(origin) = army.turn_origin() {
                if !game.world().in_bounds(origin) {
                    violations.push(InvariantViolation {
                        message: format!(
                            "Army {id} of player {} has turn origin {origin} which has no province",
                            player.id()
                        ),
                    });
                }
            }
        }
    }

    for (position, province) in game.world().provinces() {
        if let Some(owner) = province.owner {
            if game.player(owner).is_none() {
                violations.push(InvariantViolation {
                    message: format!(
                        "Province at {position} is owned by unregistered player {owner}"
                    ),
                });
            }
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(game: &Game) {
    let violations = check_invariants(game);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_game: &Game) {}
