//! Pawn promotion expansion.

use crate::commands::command::Command;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::position::Position;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Commands that replace a pawn standing on its destination square with
/// each promotable piece. Empty unless the destination is a back rank, so
/// callers can compose the result after any pawn move or capture.
pub fn commands(destination: Position, pawn: Piece) -> Vec<Command> {
    match destination.row() {
        0 | 7 => PROMOTION_KINDS
            .iter()
            .map(|kind| {
                Command::Remove {
                    position: destination,
                    piece: pawn,
                }
                .then(Command::Spawn {
                    position: destination,
                    piece: Piece::new(*kind, pawn.color),
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}
