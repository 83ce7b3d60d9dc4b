//! Piece and side primitives shared by the whole engine.

use crate::game_state::position::Position;

/// Side to move. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A chess piece. Pieces carry no position; the board mapping supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A piece paired with the square it stands on, used transiently when
/// reading the board or feeding the rule components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub position: Position,
    pub piece: Piece,
}

impl PlacedPiece {
    #[inline]
    pub const fn new(position: Position, piece: Piece) -> Self {
        Self { position, piece }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_sides() {
        assert_eq!(Color::White.toggle(), Color::Black);
        assert_eq!(Color::Black.toggle(), Color::White);
        assert_eq!(Color::White.toggle().toggle(), Color::White);
    }

    #[test]
    fn piece_equality_requires_kind_and_color() {
        let white_rook = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(white_rook, Piece::new(PieceKind::Rook, Color::White));
        assert_ne!(white_rook, Piece::new(PieceKind::Rook, Color::Black));
        assert_ne!(white_rook, Piece::new(PieceKind::Queen, Color::White));
    }
}
