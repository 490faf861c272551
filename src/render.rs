//! Text rendering of game state.
//!
//! Pure string builders; the library never prints. The front end
//! decides where the text goes.

// Allow format! with push_str for readability - the allocation overhead
// is negligible for text rendering
#![allow(clippy::format_push_string)]

use crate::game::{Game, Player};

/// Render a report of the world and all players.
///
/// Output format:
/// ```text
/// WORLD (3x2, 6 provinces):
/// Cities:
/// - Kabul (3160266 points) at (2, 1), neutral
///
/// PLAYER 0 (to move):
/// - Food: 100
/// - Provinces: 0
/// - Army 0 at (2, 2): health 100, strength 5
/// ```
#[must_use]
pub fn render_game(game: &Game) -> String {
    let mut output = String::new();

    render_world_overview(&mut output, game);
    for player in game.players() {
        render_player_status(&mut output, game, player);
    }

    output
}

/// Render the world overview: dimensions, province count, cities.
fn render_world_overview(output: &mut String, game: &Game) {
    let world = game.world();
    output.push_str(&format!(
        "WORLD ({}x{}, {} provinces):\n",
        world.width(),
        world.height(),
        world.len()
    ));

    if world.cities().next().is_some() {
        output.push_str("Cities:\n");
        for (position, city) in world.cities() {
            let owner = world
                .get(position)
                .and_then(|province| province.owner)
                .map_or_else(|| "neutral".to_string(), |id| format!("player {id}"));
            output.push_str(&format!(
                "- {} ({} points) at {position}, {owner}\n",
                city.name, city.points
            ));
        }
    }

    output.push('\n');
}

/// Render one player's holdings, stockpile, and roster.
fn render_player_status(output: &mut String, game: &Game, player: &Player) {
    let marker = if player.id() == game.current_player().id() {
        " (to move)"
    } else {
        ""
    };
    output.push_str(&format!("PLAYER {}{marker}:\n", player.id()));
    output.push_str(&format!("- Food: {}\n", player.food()));
    output.push_str(&format!(
        "- Provinces: {}\n",
        game.world().count_territory(player.id())
    ));

    for (id, army) in player.armies() {
        let pending = if army.turn_origin().is_some() {
            ", move pending"
        } else {
            ""
        };
        output.push_str(&format!(
            "- Army {id} at {}: health {}, strength {}{pending}\n",
            army.position(),
            army.health(),
            army.strength()
        ));
    }

    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Army, Command, Position, World};

    fn create_test_game() -> Game {
        let world = World::load(
            "0,0,plains\n1,0,hills\n2,0,forest\n0,1,desert\n1,1,plains\n2,1,hills,Kabul,3160266\n",
        )
        .unwrap();
        let mut player = Player::new(0, 80);
        player.add_army(&Army::new(Position::new(1, 1), 4), Position::new(1, 1));
        Game::new(world, vec![player]).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let game = create_test_game();
        let report = render_game(&game);
        assert!(report.contains("WORLD (3x2, 6 provinces):"));
        assert!(report.contains("- Kabul (3160266 points) at (2, 1), neutral"));
        assert!(report.contains("PLAYER 0 (to move):"));
        assert!(report.contains("- Food: 80"));
        assert!(report.contains("- Army 0 at (1, 1): health 100, strength 4"));
    }

    #[test]
    fn test_report_marks_pending_moves_and_owners() {
        let mut game = create_test_game();
        game.execute(Command::Move {
            army: 0,
            target: Position::new(2, 1),
        })
        .unwrap();
        game.execute(Command::Capture { army: 0 }).unwrap();

        let report = render_game(&game);
        assert!(report.contains("- Kabul (3160266 points) at (2, 1), player 0"));
        assert!(report.contains("- Provinces: 1"));
        assert!(report.contains("move pending"));
    }
}
