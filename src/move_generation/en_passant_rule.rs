//! The en passant rule.
//!
//! Only the single most recent history update matters: if it contains an
//! enemy pawn's two-square advance ending directly beside the capturing
//! pawn, the capture onto the square behind the advanced pawn is offered
//! for exactly that one turn.

use crate::commands::command::Command;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;

/// The possible en passant command for a pawn at `position`, if the last
/// recorded update allows it.
pub fn command(game: &GameState, position: Position, pawn: Piece) -> Option<Command> {
    let last = game.last_update.as_deref()?;
    qualifying_capture(&last.command, position, pawn)
}

/// Searches a recorded command for a pawn double step that qualifies for
/// en passant, mirroring the interpreter's execution order through
/// sequences.
fn qualifying_capture(recorded: &Command, position: Position, pawn: Piece) -> Option<Command> {
    match recorded {
        Command::Move {
            source,
            target,
            piece,
        } => {
            let mover_color = piece.color;
            let capture_row = match mover_color {
                Color::White => 3,
                Color::Black => 4,
            };

            let qualifies =
                // The capturing pawn sits on the rank the double step passes.
                position.row() == capture_row
                // The previous move was made by a pawn ...
                && piece.kind == PieceKind::Pawn
                // ... which ended its move directly beside the capturer ...
                && position.row() == target.row()
                && (position.column() - target.column()).abs() == 1
                // ... after advancing exactly two ranks.
                && (source.row() - target.row()).abs() == 2;

            if qualifies {
                let behind = Position::new((source.row() + target.row()) / 2, target.column());
                let capture = Command::Remove {
                    position: *target,
                    piece: *piece,
                }
                .then(Command::Move {
                    source: position,
                    target: behind,
                    piece: pawn,
                });
                Some(capture)
            } else {
                None
            }
        }
        Command::Sequence(first, second) => qualifying_capture(first, position, pawn)
            .or_else(|| qualifying_capture(second, position, pawn)),
        _ => None,
    }
}
