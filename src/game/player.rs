//! Player state: the army roster, pending moves, and the food
//! stockpile.

use std::collections::BTreeMap;

use crate::error::{CommandError, CommandResult};
use crate::game::{Army, ArmyId, Position};

/// Unique identifier for a player.
pub type PlayerId = u8;

/// State for a single player.
///
/// Created at game start and never destroyed. Armies are owned here
/// exclusively: an army id is only meaningful against its owning
/// player's roster.
#[derive(Debug, Clone)]
pub struct Player {
    /// Unique identifier for this player.
    id: PlayerId,
    /// Armies keyed by id. `BTreeMap` keeps enumeration order stable
    /// for display.
    armies: BTreeMap<ArmyId, Army>,
    /// Next army id to hand out.
    next_army_id: ArmyId,
    /// Food stockpile.
    food: u32,
}

impl Player {
    /// Create a new player with an empty roster and the given food
    /// stockpile.
    #[must_use]
    pub const fn new(id: PlayerId, food: u32) -> Self {
        Self {
            id,
            armies: BTreeMap::new(),
            next_army_id: 0,
            food,
        }
    }

    /// This player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Current food stockpile.
    #[must_use]
    pub const fn food(&self) -> u32 {
        self.food
    }

    /// Check whether an army id exists in this player's roster.
    #[must_use]
    pub fn army_exists(&self, id: ArmyId) -> bool {
        self.armies.contains_key(&id)
    }

    /// Get an army by id.
    #[must_use]
    pub fn army(&self, id: ArmyId) -> Option<&Army> {
        self.armies.get(&id)
    }

    /// Iterate over the roster in stable id order.
    pub fn armies(&self) -> impl Iterator<Item = (ArmyId, &Army)> {
        self.armies.iter().map(|(id, army)| (*id, army))
    }

    /// Number of armies in the roster.
    #[must_use]
    pub fn army_count(&self) -> usize {
        self.armies.len()
    }

    /// Add an army to the roster at `position` and return its id.
    ///
    /// The roster entry is a fresh army with the template's strength:
    /// it starts at full health regardless of the template's health,
    /// and the template itself is left untouched.
    pub fn add_army(&mut self, template: &Army, position: Position) -> ArmyId {
        let id = self.next_army_id;
        self.next_army_id += 1;
        self.armies.insert(id, Army::new(position, template.strength()));
        id
    }

    /// Remove an army from the roster.
    ///
    /// The army is dropped with its roster entry; no cleanup elsewhere
    /// is required.
    pub fn remove_army(&mut self, id: ArmyId) -> Option<Army> {
        self.armies.remove(&id)
    }

    /// Check whether `id` may move to `target` this turn: the army
    /// exists and `target` is within the movement allowance of its
    /// current position. World bounds are checked by the command
    /// layer, which knows the world.
    #[must_use]
    pub fn can_move_army(&self, id: ArmyId, target: Position) -> bool {
        self.armies
            .get(&id)
            .is_some_and(|army| army.can_move_to(target))
    }

    /// Move an army, recording its turn origin on the first move of
    /// the turn. Returns the position the army moved from.
    ///
    /// # Errors
    ///
    /// Returns `UnknownArmy` if the id is not in the roster, or
    /// `IllegalMove` if the target exceeds the movement allowance.
    /// Failure leaves the army untouched.
    pub fn move_army(&mut self, id: ArmyId, target: Position) -> CommandResult<Position> {
        let army = self
            .armies
            .get_mut(&id)
            .ok_or(CommandError::UnknownArmy(id))?;
        if !army.can_move_to(target) {
            return Err(CommandError::IllegalMove {
                from: army.position(),
                to: target,
            });
        }
        let from = army.position();
        army.move_to(target);
        Ok(from)
    }

    /// Undo an army's pending move, restoring the position it held at
    /// the start of the turn. Returns the restored position.
    ///
    /// # Errors
    ///
    /// Returns `UnknownArmy` if the id is not in the roster, or
    /// `NoPendingMove` if the army has not moved since the last
    /// commit.
    pub fn undo_move(&mut self, id: ArmyId) -> CommandResult<Position> {
        let army = self
            .armies
            .get_mut(&id)
            .ok_or(CommandError::UnknownArmy(id))?;
        army.undo_move().ok_or(CommandError::NoPendingMove(id))
    }

    /// Commit all pending moves. Undo becomes unavailable until a new
    /// move is made.
    pub fn commit_moves(&mut self) {
        for army in self.armies.values_mut() {
            army.commit_move();
        }
    }

    /// Feed an army from the stockpile, healing one point of health
    /// per unit of food, clamped to full health. The full quantity is
    /// deducted even when healing clamps. Returns the army's health
    /// after feeding.
    ///
    /// # Errors
    ///
    /// Returns `UnknownArmy` if the id is not in the roster, or
    /// `InsufficientResources` if `food` exceeds the stockpile.
    /// Failure deducts nothing and heals nothing.
    pub fn feed_army(&mut self, id: ArmyId, food: u32) -> CommandResult<u32> {
        let army = self
            .armies
            .get_mut(&id)
            .ok_or(CommandError::UnknownArmy(id))?;
        if food > self.food {
            return Err(CommandError::InsufficientResources {
                requested: food,
                available: self.food,
            });
        }
        self.food -= food;
        army.heal(food);
        Ok(army.health())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FULL_HEALTH;

    #[test]
    fn test_initial_roster_empty() {
        let player = Player::new(0, 100);
        assert_eq!(player.army_count(), 0);
        assert_eq!(player.food(), 100);
    }

    #[test]
    fn test_add_army_copies_template() {
        let mut player = Player::new(0, 100);
        let source = Position::new(0, 0);
        let target = Position::new(2, 2);
        let template = Army::new(source, 2);

        let id = player.add_army(&template, target);

        // The template keeps its construction position; the roster
        // copy sits at the target at full health.
        assert_eq!(template.position(), source);
        let back = player.army(id).unwrap();
        assert_eq!(back.position(), target);
        assert_eq!(back.health(), FULL_HEALTH);
        assert_eq!(back.strength(), 2);
    }

    #[test]
    fn test_remove_army() {
        let mut player = Player::new(0, 100);
        let id = player.add_army(&Army::new(Position::new(0, 0), 2), Position::new(2, 2));
        assert!(player.army_exists(id));

        let removed = player.remove_army(id).unwrap();
        assert_eq!(removed.position(), Position::new(2, 2));
        assert!(!player.army_exists(id));
        assert!(player.remove_army(id).is_none());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut player = Player::new(0, 100);
        let template = Army::new(Position::new(0, 0), 1);
        let first = player.add_army(&template, Position::new(1, 1));
        player.remove_army(first);
        let second = player.add_army(&template, Position::new(1, 1));
        assert_ne!(first, second);
    }

    #[test]
    fn test_roster_order_is_stable() {
        let mut player = Player::new(0, 100);
        let template = Army::new(Position::new(0, 0), 1);
        let a = player.add_army(&template, Position::new(1, 1));
        let b = player.add_army(&template, Position::new(2, 2));
        let c = player.add_army(&template, Position::new(3, 3));

        let ids: Vec<ArmyId> = player.armies().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_move_army() {
        let mut player = Player::new(0, 100);
        let id = player.add_army(&Army::new(Position::new(0, 0), 2), Position::new(1, 1));

        let from = player.move_army(id, Position::new(2, 2)).unwrap();
        assert_eq!(from, Position::new(1, 1));
        assert_eq!(player.army(id).unwrap().position(), Position::new(2, 2));
    }

    #[test]
    fn test_move_out_of_range_rejected() {
        let mut player = Player::new(0, 100);
        let id = player.add_army(&Army::new(Position::new(0, 0), 2), Position::new(1, 1));

        let err = player.move_army(id, Position::new(9, 1)).unwrap_err();
        assert_eq!(
            err,
            CommandError::IllegalMove {
                from: Position::new(1, 1),
                to: Position::new(9, 1),
            }
        );
        // Failure mutates nothing
        let army = player.army(id).unwrap();
        assert_eq!(army.position(), Position::new(1, 1));
        assert!(army.turn_origin().is_none());
    }

    #[test]
    fn test_move_unknown_army() {
        let mut player = Player::new(0, 100);
        let err = player.move_army(9, Position::new(1, 1)).unwrap_err();
        assert_eq!(err, CommandError::UnknownArmy(9));
    }

    #[test]
    fn test_undo_before_any_move() {
        let mut player = Player::new(0, 100);
        let id = player.add_army(&Army::new(Position::new(0, 0), 2), Position::new(1, 1));
        assert_eq!(player.undo_move(id), Err(CommandError::NoPendingMove(id)));
    }

    #[test]
    fn test_undo_after_commit() {
        let mut player = Player::new(0, 100);
        let id = player.add_army(&Army::new(Position::new(0, 0), 2), Position::new(1, 1));
        player.move_army(id, Position::new(2, 2)).unwrap();
        player.commit_moves();

        assert_eq!(player.undo_move(id), Err(CommandError::NoPendingMove(id)));
        assert_eq!(player.army(id).unwrap().position(), Position::new(2, 2));
    }

    #[test]
    fn test_feed_deducts_and_heals() {
        let mut player = Player::new(0, 100);
        let id = player.add_army(&Army::new(Position::new(0, 0), 2), Position::new(1, 1));
        wound(&mut player, id, 40);

        let health = player.feed_army(id, 25).unwrap();
        assert_eq!(health, 65);
        assert_eq!(player.food(), 75);
    }

    #[test]
    fn test_feed_clamps_but_spends_in_full() {
        let mut player = Player::new(0, 100);
        let id = player.add_army(&Army::new(Position::new(0, 0), 2), Position::new(1, 1));
        wound(&mut player, id, 90);

        // Only 10 health is missing but all 60 food is spent
        let health = player.feed_army(id, 60).unwrap();
        assert_eq!(health, FULL_HEALTH);
        assert_eq!(player.food(), 40);
    }

    #[test]
    fn test_feed_insufficient_food() {
        let mut player = Player::new(0, 30);
        let id = player.add_army(&Army::new(Position::new(0, 0), 2), Position::new(1, 1));
        wound(&mut player, id, 10);

        let err = player.feed_army(id, 31).unwrap_err();
        assert_eq!(
            err,
            CommandError::InsufficientResources {
                requested: 31,
                available: 30,
            }
        );
        // Failure mutates nothing
        assert_eq!(player.food(), 30);
        assert_eq!(player.army(id).unwrap().health(), 10);
    }

    #[test]
    fn test_feed_unknown_army() {
        let mut player = Player::new(0, 100);
        assert_eq!(player.feed_army(5, 10), Err(CommandError::UnknownArmy(5)));
        assert_eq!(player.food(), 100);
    }

    /// Lower an army's health directly; the engine has no damage
    /// operation of its own.
    fn wound(player: &mut Player, id: ArmyId, health: u32) {
        player.armies.get_mut(&id).unwrap().set_health(health);
    }
}
