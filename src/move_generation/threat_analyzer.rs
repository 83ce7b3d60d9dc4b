//! Per-kind attack-square computation.
//!
//! A threatened square is any square a piece could move to or capture on,
//! ignoring whose turn it is and ignoring self-check consequences. This is
//! the shared primitive behind ordinary moves, check detection, and the
//! castling path-safety test.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, PlacedPiece};
use crate::game_state::position::{Direction, Position};

/// Computes every square threatened by the given placed piece.
///
/// Sliding pieces walk each ray until blocked: a same-side piece stops the
/// ray before its square, an enemy piece is included and then stops it.
/// Stepping pieces use the same rule capped at one step. Pawns threaten
/// only their two forward diagonals; the forward push is not a threat.
pub fn threats(board: &Board, placed: PlacedPiece) -> Vec<Position> {
    let position = placed.position;
    let color = placed.piece.color;

    match placed.piece.kind {
        PieceKind::Bishop => walk(board, position, color, &Direction::DIAGONALS, u8::MAX),
        PieceKind::Rook => walk(board, position, color, &Direction::ORTHOGONALS, u8::MAX),
        PieceKind::Queen => {
            let mut out = walk(board, position, color, &Direction::ORTHOGONALS, u8::MAX);
            out.extend(walk(board, position, color, &Direction::DIAGONALS, u8::MAX));
            out
        }
        PieceKind::King => {
            let mut out = walk(board, position, color, &Direction::ORTHOGONALS, 1);
            out.extend(walk(board, position, color, &Direction::DIAGONALS, 1));
            out
        }
        PieceKind::Knight => walk(board, position, color, &knight_directions(), 1),
        PieceKind::Pawn => {
            let row_delta = match color {
                Color::White => 1,
                Color::Black => -1,
            };
            let diagonals: Vec<Direction> = Direction::DIAGONALS
                .iter()
                .copied()
                .filter(|d| d.row_delta == row_delta)
                .collect();
            walk(board, position, color, &diagonals, 1)
        }
    }
}

/// All eight L-shaped knight offsets: combinations of {±1, ±2} with
/// unequal absolute values.
fn knight_directions() -> Vec<Direction> {
    let deltas = [-2i8, -1, 1, 2];
    let mut out = Vec::with_capacity(8);

    for row_delta in deltas {
        for column_delta in deltas {
            if row_delta.abs() != column_delta.abs() {
                out.push(Direction::new(row_delta, column_delta));
            }
        }
    }

    out
}

fn walk(
    board: &Board,
    position: Position,
    color: Color,
    directions: &[Direction],
    max_steps: u8,
) -> Vec<Position> {
    let mut out = Vec::new();

    for direction in directions {
        let mut current = position.offset(*direction);
        let mut steps = 0;

        while let Some(square) = current {
            if steps >= max_steps {
                break;
            }
            steps += 1;

            match board.piece_at(square) {
                Some(occupant) if occupant.piece.color == color => break,
                Some(_) => {
                    out.push(square);
                    break;
                }
                None => out.push(square),
            }

            current = square.offset(*direction);
        }
    }

    out
}
