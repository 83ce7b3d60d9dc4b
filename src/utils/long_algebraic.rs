//! Long algebraic notation helpers.
//!
//! Translates "e2e4" / "e7e8q" style text into board coordinates and back
//! into a matching legal continuation. Used by tests and the playout
//! binary to script games; the engine itself never deals in notation.

use crate::errors::Errors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::{GameState, Update};
use crate::game_state::position::Position;
use crate::move_generation::rulebook::Rulebook;

/// A move as written in long algebraic notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub source: Position,
    pub target: Position,
    pub promotion: Option<PieceKind>,
}

/// Parses long algebraic notation: two squares plus an optional promotion
/// letter (q, r, b, n).
pub fn parse_long_algebraic(text: &str) -> Result<ParsedMove, Errors> {
    let text = text.trim();
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(Errors::InvalidAlgebraic);
    }

    let source = parse_square(bytes[0] as char, bytes[1] as char)?;
    let target = parse_square(bytes[2] as char, bytes[3] as char)?;

    let promotion = match bytes.get(4).map(|b| *b as char) {
        None => None,
        Some('q') | Some('Q') => Some(PieceKind::Queen),
        Some('r') | Some('R') => Some(PieceKind::Rook),
        Some('b') | Some('B') => Some(PieceKind::Bishop),
        Some('n') | Some('N') => Some(PieceKind::Knight),
        Some(_) => return Err(Errors::InvalidAlgebraic),
    };

    Ok(ParsedMove {
        source,
        target,
        promotion,
    })
}

fn parse_square(file: char, rank: char) -> Result<Position, Errors> {
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(Errors::OutOfBounds);
    }
    let column = (file as u8 - b'a') as i8;
    let row = (rank as u8 - b'1') as i8;
    Ok(Position::new(row, column))
}

/// Finds the legal continuation matching the notation, or an error when
/// the text does not parse or no legal move fits it. Castling is written
/// as the king's two-square move (e1g1), en passant as the capturing
/// pawn's diagonal step.
pub fn find_update<R: Rulebook>(
    rulebook: &R,
    game: &GameState,
    text: &str,
) -> Result<Update, Errors> {
    let parsed = parse_long_algebraic(text)?;

    rulebook
        .legal_updates(game, parsed.source)
        .into_iter()
        .find(|update| {
            let matches_squares = update
                .command
                .primary_move()
                .map(|(source, target, _)| source == parsed.source && target == parsed.target)
                .unwrap_or(false);
            matches_squares && update.command.promotion_kind() == parsed.promotion
        })
        .ok_or(Errors::NoMatchingMove)
}

/// Applies a whitespace-separated script of moves, returning the final
/// state.
pub fn apply_script<R: Rulebook>(
    rulebook: &R,
    game: &GameState,
    script: &str,
) -> Result<GameState, Errors> {
    let mut current = game.clone();
    for notation in script.split_whitespace() {
        current = find_update(rulebook, &current, notation)?.state;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::Status;
    use crate::move_generation::rulebook::StandardRulebook;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let plain = parse_long_algebraic("e2e4").unwrap();
        assert_eq!(plain.source, Position::new(1, 4));
        assert_eq!(plain.target, Position::new(3, 4));
        assert_eq!(plain.promotion, None);

        let promoting = parse_long_algebraic("e7e8q").unwrap();
        assert_eq!(promoting.source, Position::new(6, 4));
        assert_eq!(promoting.target, Position::new(7, 4));
        assert_eq!(promoting.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_long_algebraic("e2"), Err(Errors::InvalidAlgebraic));
        assert_eq!(parse_long_algebraic("e2e9"), Err(Errors::OutOfBounds));
        assert_eq!(parse_long_algebraic("i2e4"), Err(Errors::OutOfBounds));
        assert_eq!(
            parse_long_algebraic("e7e8k"),
            Err(Errors::InvalidAlgebraic)
        );
    }

    #[test]
    fn finds_and_applies_an_opening_move() {
        let rulebook = StandardRulebook::new();
        let game = rulebook.create_game();

        let update = find_update(&rulebook, &game, "e2e4").unwrap();
        assert!(update.state.board.is_occupied(Position::new(3, 4)));
        assert_eq!(update.state.active_player.color, Color::Black);

        assert_eq!(
            find_update(&rulebook, &game, "e2e5"),
            Err(Errors::NoMatchingMove)
        );
    }

    #[test]
    fn scripted_fools_mate_ends_in_a_black_win() {
        let rulebook = StandardRulebook::new();
        let game = rulebook.create_game();

        let end = apply_script(&rulebook, &game, "f2f3 e7e5 g2g4 d8h4").unwrap();
        assert_eq!(rulebook.status(&end), Status::BlackWin);
    }

    #[test]
    fn scripted_scholars_mate_ends_in_a_white_win() {
        let rulebook = StandardRulebook::new();
        let game = rulebook.create_game();

        let end = apply_script(&rulebook, &game, "e2e4 e7e5 f1c4 b8c6 d1h5 g8f6 h5f7").unwrap();
        assert_eq!(rulebook.status(&end), Status::WhiteWin);
    }

    #[test]
    fn en_passant_is_available_for_exactly_one_turn() {
        let rulebook = StandardRulebook::new();
        let game = rulebook.create_game();

        // White pawn reaches e5; black answers d7d5 right next to it.
        let game = apply_script(&rulebook, &game, "e2e4 a7a6 e4e5 d7d5").unwrap();
        assert!(find_update(&rulebook, &game, "e5d6").is_ok());

        // One unrelated move on each side later, the capture has lapsed.
        let later = apply_script(&rulebook, &game, "b1c3 b8c6").unwrap();
        assert_eq!(
            find_update(&rulebook, &later, "e5d6"),
            Err(Errors::NoMatchingMove)
        );
    }

    #[test]
    fn castling_is_written_as_the_king_move() {
        let rulebook = StandardRulebook::new();
        let game = rulebook.create_game();

        // Open the kingside: e4/e5, Nf3/Nf6, Bc4/Bc5, then castle.
        let game =
            apply_script(&rulebook, &game, "e2e4 e7e5 g1f3 g8f6 f1c4 f8c5").unwrap();
        let castled = find_update(&rulebook, &game, "e1g1").unwrap().state;

        assert_eq!(
            castled.board.piece_at(Position::new(0, 6)).unwrap().piece.kind,
            PieceKind::King
        );
        assert_eq!(
            castled.board.piece_at(Position::new(0, 5)).unwrap().piece.kind,
            PieceKind::Rook
        );
    }
}
