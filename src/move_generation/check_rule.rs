//! Check detection.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::{GameState, Player};
use crate::move_generation::threat_analyzer::threats;

/// Whether the given player's king currently stands on a square threatened
/// by any enemy piece. A board without that king yields `false`, which is
/// unreachable in normal play.
pub fn is_checked(game: &GameState, player: Player) -> bool {
    let king = game
        .board
        .pieces_of(player.color)
        .find(|p| p.piece.kind == PieceKind::King);

    match king {
        Some(king) => game
            .board
            .pieces_of(player.color.toggle())
            .flat_map(|enemy| threats(&game.board, enemy))
            .any(|square| square == king.position),
        None => false,
    }
}
