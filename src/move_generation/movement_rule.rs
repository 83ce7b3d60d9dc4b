//! Candidate command generation per piece kind.
//!
//! Turns (state, placed piece) into every syntactically valid command for
//! that piece: plain moves and captures from the threat analysis, plus the
//! castling, en passant, and promotion expansions. No self-check filtering
//! happens here; the rulebook simulates and filters afterwards.

use crate::commands::command::Command;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, PlacedPiece};
use crate::game_state::game_state::GameState;
use crate::game_state::position::{Direction, Position};
use crate::move_generation::castling_rule;
use crate::move_generation::en_passant_rule;
use crate::move_generation::promotion_rule;
use crate::move_generation::threat_analyzer::threats;

/// All candidate commands for the given placed piece.
pub fn commands(game: &GameState, placed: PlacedPiece) -> Vec<Command> {
    match placed.piece.kind {
        PieceKind::Bishop | PieceKind::Knight | PieceKind::Rook | PieceKind::Queen => {
            threat_commands(&game.board, placed)
        }
        PieceKind::King => {
            let mut out = threat_commands(&game.board, placed);
            out.extend(castling_rule::commands(game, placed));
            out
        }
        PieceKind::Pawn => pawn_commands(game, placed),
    }
}

/// One command per threatened square: a plain move onto an empty square,
/// or an explicit remove-then-move capture onto an enemy.
fn threat_commands(board: &Board, placed: PlacedPiece) -> Vec<Command> {
    threats(board, placed)
        .into_iter()
        .map(|target| {
            let move_command = Command::Move {
                source: placed.position,
                target,
                piece: placed.piece,
            };
            match board.piece_of_color_at(target, placed.piece.color.toggle()) {
                Some(enemy) => Command::Remove {
                    position: enemy.position,
                    piece: enemy.piece,
                }
                .then(move_command),
                None => move_command,
            }
        })
        .collect()
}

fn pawn_commands(game: &GameState, placed: PlacedPiece) -> Vec<Command> {
    let pawn = placed.piece;
    let position = placed.position;
    let enemy_color = pawn.color.toggle();

    let (home_row, row_delta) = match pawn.color {
        Color::White => (1, 1),
        Color::Black => (6, -1),
    };
    let forward = Direction::new(row_delta, 0);

    let mut out = Vec::new();

    // Diagonal threats count only where an enemy actually stands.
    for target in threats(&game.board, placed) {
        if let Some(enemy) = game.board.piece_of_color_at(target, enemy_color) {
            let capture = Command::Remove {
                position: enemy.position,
                piece: enemy.piece,
            }
            .then(Command::Move {
                source: position,
                target: enemy.position,
                piece: pawn,
            });
            push_with_promotions(&mut out, capture, enemy.position, placed);
        }
    }

    // One square forward onto an empty square, and two from the home rank
    // when both squares are free.
    let one_forward = position
        .offset(forward)
        .filter(|p| !game.board.is_occupied(*p));
    let two_forward = one_forward
        .filter(|p| p.row() == home_row + row_delta)
        .and_then(|p| p.offset(forward))
        .filter(|p| !game.board.is_occupied(*p));

    for target in one_forward.into_iter().chain(two_forward) {
        let advance = Command::Move {
            source: position,
            target,
            piece: pawn,
        };
        push_with_promotions(&mut out, advance, target, placed);
    }

    if let Some(capture) = en_passant_rule::command(game, position, pawn) {
        out.push(capture);
    }

    out
}

/// Appends the command as-is, or one promotion-expanded variant per
/// promotable kind when the destination is a back rank.
fn push_with_promotions(
    out: &mut Vec<Command>,
    command: Command,
    destination: Position,
    placed: PlacedPiece,
) {
    let promotions = promotion_rule::commands(destination, placed.piece);
    if promotions.is_empty() {
        out.push(command);
    } else {
        for promotion in promotions {
            out.push(command.clone().then(promotion));
        }
    }
}
