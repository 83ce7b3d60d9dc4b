//! Legal-continuation node counting.
//!
//! Perft walks every legal continuation to a fixed depth and counts the
//! leaves. The counts from the starting position are well known, which
//! makes this a whole-engine oracle: movement, castling, en passant,
//! promotion, and the self-check filter all have to agree for the numbers
//! to come out right.

use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::move_generation::rulebook::Rulebook;

/// Counts legal continuation nodes at exactly `depth` plies.
pub fn perft<R: Rulebook>(rulebook: &R, game: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let positions: Vec<Position> = game
        .board
        .pieces_of(game.active_player.color)
        .map(|placed| placed.position)
        .collect();

    let mut nodes = 0;
    for position in positions {
        for update in rulebook.legal_updates(game, position) {
            nodes += perft(rulebook, &update.state, depth - 1);
        }
    }

    nodes
}
