//! ASCII rendering of a game state for diagnostics.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;

fn piece_letter(piece: Piece) -> char {
    let letter = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

/// Renders the board as an 8x8 letter grid, black's side on top, with the
/// side to move underneath. Intended for debugging output only.
pub fn render_game_state(game: &GameState) -> String {
    let mut out = String::with_capacity(256);

    for row in (0..8).rev() {
        out.push((b'1' + row as u8) as char);
        out.push(' ');
        for column in 0..8 {
            let square = Position::new(row, column);
            match game.board.piece_at(square) {
                Some(placed) => out.push(piece_letter(placed.piece)),
                None => out.push('.'),
            }
            if column < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");

    match game.active_player.color {
        Color::White => out.push_str("white to move\n"),
        Color::Black => out.push_str("black to move\n"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::rulebook::{Rulebook, StandardRulebook};

    #[test]
    fn starting_position_renders_both_back_ranks() {
        let game = StandardRulebook::new().create_game();
        let rendered = render_game_state(&game);

        assert!(rendered.contains("r n b q k b n r"));
        assert!(rendered.contains("R N B Q K B N R"));
        assert!(rendered.contains("white to move"));
        // Top line is black's back rank.
        assert!(rendered.starts_with("8 r"));
    }
}
