//! Random self-play diagnostic harness.
//!
//! Plays a number of games by picking uniformly from the legal
//! continuations each turn, asserting the structural invariants after
//! every applied update, and reporting how each game ended. Usage:
//!
//!     random_playout [games] [max_plies]

use rand::prelude::IndexedRandom;

use damson_chess::game_state::chess_types::{Color, PieceKind};
use damson_chess::game_state::game_state::{GameState, Status, Update};
use damson_chess::move_generation::rulebook::{Rulebook, StandardRulebook};
use damson_chess::utils::render_game_state::render_game_state;

fn all_legal_updates<R: Rulebook>(rulebook: &R, game: &GameState) -> Vec<Update> {
    game.board
        .pieces_of(game.active_player.color)
        .collect::<Vec<_>>()
        .into_iter()
        .flat_map(|placed| rulebook.legal_updates(game, placed.position))
        .collect()
}

fn assert_invariants(game: &GameState) {
    assert!(game.board.len() <= 32, "board holds more than 32 pieces");
    for color in [Color::White, Color::Black] {
        let kings = game
            .board
            .pieces_of(color)
            .filter(|p| p.piece.kind == PieceKind::King)
            .count();
        assert_eq!(kings, 1, "{color:?} must have exactly one king");
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let games: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let max_plies: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(300);

    let rulebook = StandardRulebook::new();
    let mut rng = rand::rng();

    for game_index in 0..games {
        let mut game = rulebook.create_game();
        let mut plies = 0;

        let outcome = loop {
            let status = rulebook.status(&game);
            match status {
                Status::WhiteTurn | Status::BlackTurn => {}
                terminal => break format!("{terminal:?}"),
            }
            if plies >= max_plies {
                break format!("cut off after {max_plies} plies");
            }

            let updates = all_legal_updates(&rulebook, &game);
            let picked = updates
                .choose(&mut rng)
                .expect("an in-progress game always has a legal continuation");

            game = picked.state.clone();
            assert_invariants(&game);
            plies += 1;
        };

        println!("game {game_index}: {outcome} in {plies} plies");
        println!("{}", render_game_state(&game));
    }
}
