//! Immutable board mapping.
//!
//! `Board` maps positions to pieces and never holds two pieces on one
//! square. Mutation is expressed as construction: `add` and `remove` hand
//! back a fresh board and leave the receiver untouched, so every state a
//! game has passed through stays valid for history walks.

use std::collections::BTreeMap;

use crate::game_state::chess_types::{Color, Piece, PlacedPiece};
use crate::game_state::position::Position;

/// A persistent mapping from position to piece. The `BTreeMap` keeps
/// iteration row-major; with at most 32 entries, cloning on write is the
/// structural-sharing strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pieces: BTreeMap<Position, Piece>,
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a piece, or `None` if the square is already occupied.
    pub fn add(&self, position: Position, piece: Piece) -> Option<Board> {
        if self.pieces.contains_key(&position) {
            return None;
        }

        let mut pieces = self.pieces.clone();
        pieces.insert(position, piece);
        Some(Board { pieces })
    }

    /// Clears a square, or `None` if it is already empty.
    pub fn remove(&self, position: Position) -> Option<Board> {
        if !self.pieces.contains_key(&position) {
            return None;
        }

        let mut pieces = self.pieces.clone();
        pieces.remove(&position);
        Some(Board { pieces })
    }

    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.pieces.contains_key(&position)
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<PlacedPiece> {
        self.pieces
            .get(&position)
            .map(|piece| PlacedPiece::new(position, *piece))
    }

    /// Reads a square, keeping the piece only if it has the wanted color.
    #[inline]
    pub fn piece_of_color_at(&self, position: Position, color: Color) -> Option<PlacedPiece> {
        self.piece_at(position).filter(|p| p.piece.color == color)
    }

    /// All pieces of one side, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.iter().filter(move |p| p.piece.color == color)
    }

    /// All pieces on the board, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.pieces
            .iter()
            .map(|(position, piece)| PlacedPiece::new(*position, *piece))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
