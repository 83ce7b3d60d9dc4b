//! Status classification.
//!
//! Combines check detection with exhaustive move simulation: the active
//! player has lost when checked with no legal continuation, the game is a
//! stalemate draw when unchecked with no legal continuation, and otherwise
//! play simply continues.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameState, Status};
use crate::move_generation::check_rule;
use crate::move_generation::movement_rule;

/// Classifies the game from the active player's perspective.
pub fn status(game: &GameState) -> Status {
    let active = game.active_player;
    let is_checked = check_rule::is_checked(game, active);

    let pieces: Vec<_> = game.board.pieces_of(active.color).collect();
    let has_moves = pieces
        .into_iter()
        .flat_map(|placed| movement_rule::commands(game, placed))
        .filter_map(|candidate| candidate.execute(game))
        .any(|future| !check_rule::is_checked(&future, active));

    match (is_checked, has_moves) {
        (true, false) => match active.color {
            Color::White => Status::BlackWin,
            Color::Black => Status::WhiteWin,
        },
        (false, false) => Status::Draw,
        _ => match active.color {
            Color::White => Status::WhiteTurn,
            Color::Black => Status::BlackTurn,
        },
    }
}
