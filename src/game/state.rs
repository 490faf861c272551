//! Game state and command execution.

use crate::error::{CommandError, CommandResult};
use crate::game::{ArmyId, Command, CommandOutcome, Player, PlayerId, Position, World};
use crate::render;

/// Complete game state: the world, the players in turn order, and
/// whose turn it is.
///
/// All mutation flows through [`Game::execute`] (and the setup
/// accessors used before play begins). Commands are atomic: they are
/// validated against the current state and either fully applied or
/// rejected with the state untouched.
#[derive(Debug, Clone)]
pub struct Game {
    /// The game world.
    world: World,
    /// Players in turn order.
    players: Vec<Player>,
    /// Index of the player currently holding the turn. Always within
    /// `[0, players.len())`.
    current: usize,
}

impl Game {
    /// Create a new game.
    ///
    /// Returns `None` if `players` is empty: there must always be a
    /// current player.
    #[must_use]
    pub fn new(world: World, players: Vec<Player>) -> Option<Self> {
        if players.is_empty() {
            return None;
        }
        Some(Self {
            world,
            players,
            current: 0,
        })
    }

    /// The game world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player currently holding the turn.
    #[must_use]
    pub const fn current_player_index(&self) -> usize {
        self.current
    }

    /// The player currently holding the turn.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        // The constructor guarantees a non-empty player list and the
        // index only ever moves modulo its length.
        &self.players[self.current]
    }

    fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// Direct world access for invariant tests.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Mutable access to a player, for game setup (army placement,
    /// stockpile adjustment) before play begins.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id() == id)
    }

    /// Advance the turn to the next player, cyclically.
    pub fn advance_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Commit the current player's pending moves and advance the turn.
    /// Returns the id of the player now holding the turn.
    pub fn end_turn(&mut self) -> PlayerId {
        self.current_player_mut().commit_moves();
        self.advance_player();
        self.current_player().id()
    }

    /// Check whether the current player may move an army to `target`:
    /// the army exists, the target has a province, and it lies within
    /// the movement allowance.
    #[must_use]
    pub fn can_move_army(&self, army: ArmyId, target: Position) -> bool {
        self.world.in_bounds(target) && self.current_player().can_move_army(army, target)
    }

    /// Execute a command on behalf of the current player.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] when validation fails; see the
    /// variants for the failure kind each operation can report. A
    /// failed command leaves the game untouched.
    pub fn execute(&mut self, command: Command) -> CommandResult<CommandOutcome> {
        match command {
            Command::Move { army, target } => self.execute_move(army, target),
            Command::Capture { army } => self.execute_capture(army),
            Command::Feed { army, food } => {
                let health = self.current_player_mut().feed_army(army, food)?;
                Ok(CommandOutcome::Fed { health })
            }
            Command::Undo { army } => {
                let position = self.current_player_mut().undo_move(army)?;
                Ok(CommandOutcome::MoveUndone { position })
            }
            Command::EndTurn => {
                let current_player = self.end_turn();
                Ok(CommandOutcome::TurnEnded { current_player })
            }
            Command::Resources => Ok(CommandOutcome::Resources {
                food: self.current_player().food(),
            }),
            Command::WorldReport => Ok(CommandOutcome::WorldReport(render::render_game(self))),
        }
    }

    /// Validate and apply a move, re-checking every precondition at
    /// mutation time.
    fn execute_move(&mut self, army: ArmyId, target: Position) -> CommandResult<CommandOutcome> {
        if !self.current_player().army_exists(army) {
            return Err(CommandError::UnknownArmy(army));
        }
        if !self.world.in_bounds(target) {
            return Err(CommandError::OutOfBounds(target));
        }
        let from = self.current_player_mut().move_army(army, target)?;
        Ok(CommandOutcome::Moved { from, to: target })
    }

    /// Capture the province under an army. Capture is unconditional
    /// given presence; enemy armies on the same province do not block
    /// it.
    fn execute_capture(&mut self, army: ArmyId) -> CommandResult<CommandOutcome> {
        let player_id = self.current_player().id();
        let position = self
            .current_player()
            .army(army)
            .ok_or(CommandError::UnknownArmy(army))?
            .position();
        let province = self
            .world
            .get(position)
            .ok_or(CommandError::OutOfBounds(position))?;
        if province.owner == Some(player_id) {
            return Ok(CommandOutcome::AlreadyControlled { position });
        }
        self.world.set_owner(position, player_id);
        Ok(CommandOutcome::Captured { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Army, FULL_HEALTH};

    fn grid_map(width: u16, height: u16) -> String {
        use std::fmt::Write as _;
        let mut data = String::new();
        for y in 0..height {
            for x in 0..width {
                writeln!(data, "{x},{y},plains").unwrap();
            }
        }
        data
    }

    /// A 10x10 world with two players, one army each: player 0 at
    /// (2, 2), player 1 at (7, 7).
    fn create_test_game() -> Game {
        let world = World::load(&grid_map(10, 10)).unwrap();

        let mut players = Vec::new();
        for (id, x) in [(0u8, 2u16), (1u8, 7u16)] {
            let mut player = Player::new(id, 100);
            let start = Position::new(x, x);
            player.add_army(&Army::new(start, 5), start);
            players.push(player);
        }

        Game::new(world, players).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_player_list() {
        let world = World::load(&grid_map(2, 2)).unwrap();
        assert!(Game::new(world, Vec::new()).is_none());
    }

    #[test]
    fn test_turn_advancement_is_cyclic() {
        let mut game = create_test_game();
        assert_eq!(game.current_player().id(), 0);
        game.advance_player();
        assert_eq!(game.current_player().id(), 1);
        game.advance_player();
        assert_eq!(game.current_player().id(), 0);
    }

    #[test]
    fn test_move_and_undo() {
        let mut game = create_test_game();

        let outcome = game
            .execute(Command::Move {
                army: 0,
                target: Position::new(3, 4),
            })
            .unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Moved {
                from: Position::new(2, 2),
                to: Position::new(3, 4),
            }
        );

        let outcome = game.execute(Command::Undo { army: 0 }).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::MoveUndone {
                position: Position::new(2, 2),
            }
        );
    }

    #[test]
    fn test_undo_restores_start_of_turn_after_two_moves() {
        let mut game = create_test_game();
        game.execute(Command::Move {
            army: 0,
            target: Position::new(4, 4),
        })
        .unwrap();
        game.execute(Command::Move {
            army: 0,
            target: Position::new(6, 6),
        })
        .unwrap();

        let outcome = game.execute(Command::Undo { army: 0 }).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::MoveUndone {
                position: Position::new(2, 2),
            }
        );
    }

    #[test]
    fn test_end_turn_commits_moves() {
        let mut game = create_test_game();
        game.execute(Command::Move {
            army: 0,
            target: Position::new(3, 3),
        })
        .unwrap();

        let outcome = game.execute(Command::EndTurn).unwrap();
        assert_eq!(outcome, CommandOutcome::TurnEnded { current_player: 1 });

        // Back on player 0's turn, the committed move cannot be undone
        game.execute(Command::EndTurn).unwrap();
        assert_eq!(
            game.execute(Command::Undo { army: 0 }),
            Err(CommandError::NoPendingMove(0))
        );
        assert_eq!(
            game.current_player().army(0).unwrap().position(),
            Position::new(3, 3)
        );
    }

    #[test]
    fn test_move_out_of_bounds() {
        let mut game = create_test_game();
        let target = Position::new(3, 10);
        assert!(!game.can_move_army(0, target));
        assert_eq!(
            game.execute(Command::Move { army: 0, target }),
            Err(CommandError::OutOfBounds(target))
        );
    }

    #[test]
    fn test_move_boundary_distance() {
        let game = create_test_game();
        // Allowance is 2 in Chebyshev distance from (2, 2)
        assert!(game.can_move_army(0, Position::new(4, 4)));
        assert!(game.can_move_army(0, Position::new(0, 2)));
        assert!(!game.can_move_army(0, Position::new(5, 2)));
        assert!(!game.can_move_army(0, Position::new(2, 5)));
    }

    #[test]
    fn test_armies_scoped_to_current_player() {
        let mut game = create_test_game();
        game.execute(Command::EndTurn).unwrap();

        // Player 1 has army 0 at (7, 7); moving it works from there
        let outcome = game
            .execute(Command::Move {
                army: 0,
                target: Position::new(8, 8),
            })
            .unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Moved {
                from: Position::new(7, 7),
                to: Position::new(8, 8),
            }
        );
        // Player 0's army is untouched
        assert_eq!(
            game.player(0).unwrap().army(0).unwrap().position(),
            Position::new(2, 2)
        );
    }

    #[test]
    fn test_capture_and_already_controlled() {
        let mut game = create_test_game();
        let position = Position::new(2, 2);

        let outcome = game.execute(Command::Capture { army: 0 }).unwrap();
        assert_eq!(outcome, CommandOutcome::Captured { position });
        assert_eq!(game.world().get(position).unwrap().owner, Some(0));

        let outcome = game.execute(Command::Capture { army: 0 }).unwrap();
        assert_eq!(outcome, CommandOutcome::AlreadyControlled { position });
        assert_eq!(game.world().get(position).unwrap().owner, Some(0));
    }

    #[test]
    fn test_capture_transfers_enemy_province() {
        let mut game = create_test_game();
        game.execute(Command::Capture { army: 0 }).unwrap();

        // Player 1 walks onto (2, 2) over two turns and takes it
        game.execute(Command::EndTurn).unwrap();
        game.execute(Command::Move {
            army: 0,
            target: Position::new(5, 5),
        })
        .unwrap();
        game.execute(Command::EndTurn).unwrap();
        game.execute(Command::EndTurn).unwrap();
        game.execute(Command::Move {
            army: 0,
            target: Position::new(3, 3),
        })
        .unwrap();
        game.execute(Command::Move {
            army: 0,
            target: Position::new(2, 2),
        })
        .unwrap();

        let outcome = game.execute(Command::Capture { army: 0 }).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Captured {
                position: Position::new(2, 2)
            }
        );
        assert_eq!(game.world().get(Position::new(2, 2)).unwrap().owner, Some(1));
    }

    #[test]
    fn test_capture_unknown_army() {
        let mut game = create_test_game();
        assert_eq!(
            game.execute(Command::Capture { army: 42 }),
            Err(CommandError::UnknownArmy(42))
        );
    }

    #[test]
    fn test_feed_through_commands() {
        let mut game = create_test_game();
        let outcome = game.execute(Command::Feed { army: 0, food: 30 }).unwrap();
        // Armies start at full health, so feeding clamps there but
        // the food is still spent
        assert_eq!(outcome, CommandOutcome::Fed { health: FULL_HEALTH });
        assert_eq!(
            game.execute(Command::Resources).unwrap(),
            CommandOutcome::Resources { food: 70 }
        );
    }

    #[test]
    fn test_feed_failure_preserves_state() {
        let mut game = create_test_game();
        assert_eq!(
            game.execute(Command::Feed { army: 0, food: 101 }),
            Err(CommandError::InsufficientResources {
                requested: 101,
                available: 100,
            })
        );
        assert_eq!(game.current_player().food(), 100);
    }

    #[test]
    fn test_world_report_is_rendered() {
        let mut game = create_test_game();
        let Ok(CommandOutcome::WorldReport(report)) = game.execute(Command::WorldReport) else {
            panic!("expected a world report");
        };
        assert!(report.contains("WORLD"));
        assert!(report.contains("PLAYER 0"));
        assert!(report.contains("PLAYER 1"));
    }
}
