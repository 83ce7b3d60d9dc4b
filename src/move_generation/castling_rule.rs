//! The castling rule.
//!
//! A castle is offered per rook on the king's rank when the king stands on
//! its home square, the king's transit squares are empty and unattacked,
//! the king itself is not attacked, and the full recorded history contains
//! no move away from the king's or that rook's square.

use crate::commands::command::Command;
use crate::game_state::chess_types::{Color, PieceKind, PlacedPiece};
use crate::game_state::game_state::GameState;
use crate::game_state::position::{Direction, Position};
use crate::move_generation::threat_analyzer::threats;

/// All possible castling commands for the given king.
pub fn commands(game: &GameState, placed_king: PlacedPiece) -> Vec<Command> {
    let king = placed_king.piece;
    let position = placed_king.position;

    let home = match king.color {
        Color::White => Position::new(0, 4),
        Color::Black => Position::new(7, 4),
    };
    if position != home {
        return Vec::new();
    }

    let rooks: Vec<PlacedPiece> = [0, 7]
        .into_iter()
        .filter_map(|column| {
            game.board
                .piece_of_color_at(Position::new(position.row(), column), king.color)
        })
        .filter(|p| p.piece.kind == PieceKind::Rook)
        .collect();
    if rooks.is_empty() {
        return Vec::new();
    }

    // Only computed once a rook candidate exists.
    let threatened: Vec<Position> = game
        .board
        .pieces_of(king.color.toggle())
        .flat_map(|enemy| threats(&game.board, enemy))
        .collect();

    let mut out = Vec::new();
    for rook in rooks {
        let column_delta = if position.column() > rook.position.column() {
            -1
        } else {
            1
        };
        let step = Direction::new(0, column_delta);
        let Some(one_next) = position.offset(step) else {
            continue;
        };
        let Some(two_next) = one_next.offset(step) else {
            continue;
        };

        let path_is_free =
            !game.board.is_occupied(one_next) && !game.board.is_occupied(two_next);
        let path_is_safe = !threatened.contains(&one_next)
            && !threatened.contains(&two_next)
            && !threatened.contains(&position);
        let never_moved = !game.history().any(|update| {
            update.command.moves_from(position) || update.command.moves_from(rook.position)
        });

        if path_is_free && path_is_safe && never_moved {
            let king_move = Command::Move {
                source: position,
                target: two_next,
                piece: king,
            };
            let rook_move = Command::Move {
                source: rook.position,
                target: one_next,
                piece: rook.piece,
            };
            out.push(king_move.then(rook_move));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Piece;
    use crate::game_state::game_state::{Player, Update};

    fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::White)
    }

    fn game_with(pieces: &[(Position, Piece)]) -> GameState {
        let board = pieces.iter().fold(Board::new(), |board, (position, p)| {
            board.add(*position, *p).unwrap()
        });
        GameState::new(board, Player::new(Color::White), Player::new(Color::Black))
    }

    fn white_king_on_e1() -> PlacedPiece {
        PlacedPiece::new(Position::new(0, 4), white(PieceKind::King))
    }

    #[test]
    fn both_castles_with_clear_back_rank() {
        let game = game_with(&[
            (Position::new(0, 4), white(PieceKind::King)),
            (Position::new(0, 0), white(PieceKind::Rook)),
            (Position::new(0, 7), white(PieceKind::Rook)),
        ]);

        let offers = commands(&game, white_king_on_e1());
        assert_eq!(offers.len(), 2);

        let targets: Vec<Position> = offers
            .iter()
            .filter_map(|c| c.primary_move())
            .map(|(_, target, _)| target)
            .collect();
        assert!(targets.contains(&Position::new(0, 2)));
        assert!(targets.contains(&Position::new(0, 6)));
    }

    #[test]
    fn castle_executes_into_the_expected_squares() {
        let game = game_with(&[
            (Position::new(0, 4), white(PieceKind::King)),
            (Position::new(0, 7), white(PieceKind::Rook)),
        ]);

        let offers = commands(&game, white_king_on_e1());
        let next = offers[0].execute(&game).unwrap();

        assert_eq!(
            next.board.piece_at(Position::new(0, 6)).unwrap().piece.kind,
            PieceKind::King
        );
        assert_eq!(
            next.board.piece_at(Position::new(0, 5)).unwrap().piece.kind,
            PieceKind::Rook
        );
        assert!(!next.board.is_occupied(Position::new(0, 4)));
        assert!(!next.board.is_occupied(Position::new(0, 7)));
    }

    #[test]
    fn interposed_piece_blocks_the_castle() {
        let game = game_with(&[
            (Position::new(0, 4), white(PieceKind::King)),
            (Position::new(0, 7), white(PieceKind::Rook)),
            (Position::new(0, 5), white(PieceKind::Bishop)),
        ]);

        assert!(commands(&game, white_king_on_e1()).is_empty());
    }

    #[test]
    fn attacked_transit_square_blocks_the_castle() {
        // Black rook on f8 covers f1, the king's first transit square.
        let game = game_with(&[
            (Position::new(0, 4), white(PieceKind::King)),
            (Position::new(0, 7), white(PieceKind::Rook)),
            (Position::new(7, 5), Piece::new(PieceKind::Rook, Color::Black)),
        ]);

        assert!(commands(&game, white_king_on_e1()).is_empty());
    }

    #[test]
    fn recorded_king_or_rook_move_blocks_the_castle() {
        let game = game_with(&[
            (Position::new(0, 4), white(PieceKind::King)),
            (Position::new(0, 7), white(PieceKind::Rook)),
        ]);

        // History shows the rook left h1 at some point, even though the
        // current board has it back home.
        let rook_sortie = Command::Move {
            source: Position::new(0, 7),
            target: Position::new(0, 5),
            piece: white(PieceKind::Rook),
        };
        let game = game.set_last_update(Some(Arc::new(Update::new(
            game.clone(),
            rook_sortie,
        ))));

        assert!(commands(&game, white_king_on_e1()).is_empty());
    }

    #[test]
    fn king_off_its_home_square_gets_nothing() {
        let game = game_with(&[
            (Position::new(0, 3), white(PieceKind::King)),
            (Position::new(0, 0), white(PieceKind::Rook)),
        ]);

        let king = PlacedPiece::new(Position::new(0, 3), white(PieceKind::King));
        assert!(commands(&game, king).is_empty());
    }
}
