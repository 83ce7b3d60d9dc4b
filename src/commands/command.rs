//! The command algebra and its interpreter.
//!
//! Every state transition in the engine is expressed as a `Command` value:
//! a closed set of primitive transitions plus sequencing. Commands are
//! constructed by the rule components, interpreted exactly once against a
//! `GameState`, and recorded in the history chain. Interpretation returns
//! `None` when a board invariant would be violated; `Sequence` binds its
//! halves so a failed first half suppresses the second entirely.

use std::sync::Arc;

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::game_state::{GameState, Update};
use crate::game_state::position::Position;

/// A reversible-in-spirit state transition over a chess game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Relocates a piece. Fails if the source is empty or the target is
    /// occupied, so captures must remove the victim first.
    Move {
        source: Position,
        target: Position,
        piece: Piece,
    },
    /// Takes a piece off the board. Occupancy of the position is checked;
    /// the carried piece identity is trusted, since callers derive it from
    /// a prior board read.
    Remove { position: Position, piece: Piece },
    /// Introduces a new piece. Fails if the position is occupied.
    Spawn { position: Position, piece: Piece },
    /// Runs two commands in order, short-circuiting on the first failure.
    Sequence(Box<Command>, Box<Command>),
    /// Swaps the active and passive players. Never fails.
    EndTurn,
    /// Attaches a history record to the game. Never fails.
    SetLastUpdate(Option<Arc<Update>>),
}

impl Command {
    /// Chains `self` before `second`.
    #[inline]
    pub fn then(self, second: Command) -> Command {
        Command::Sequence(Box::new(self), Box::new(second))
    }

    /// Interprets the command against a game state, producing the successor
    /// state or `None` if any step violates a board invariant.
    pub fn execute(&self, game: &GameState) -> Option<GameState> {
        match self {
            Command::Move {
                source,
                target,
                piece,
            } => {
                let board = game.board.remove(*source)?.add(*target, *piece)?;
                Some(game.set_board(board))
            }
            Command::Remove { position, piece: _ } => {
                let board = game.board.remove(*position)?;
                Some(game.set_board(board))
            }
            Command::Spawn { position, piece } => {
                let board = game.board.add(*position, *piece)?;
                Some(game.set_board(board))
            }
            Command::Sequence(first, second) => {
                let middle = first.execute(game)?;
                second.execute(&middle)
            }
            Command::EndTurn => Some(game.end_turn()),
            Command::SetLastUpdate(update) => Some(game.set_last_update(update.clone())),
        }
    }

    /// Whether this command (or any part of a sequence) moves a piece away
    /// from the given position. Used to prove castling eligibility against
    /// the recorded history.
    pub fn moves_from(&self, position: Position) -> bool {
        match self {
            Command::Move { source, .. } => *source == position,
            Command::Sequence(first, second) => {
                first.moves_from(position) || second.moves_from(position)
            }
            _ => false,
        }
    }

    /// The first `Move` reached in execution order, if any. For every
    /// command the movement rule emits this is the moving piece itself
    /// (captures remove the victim first, castling moves the king first).
    pub fn primary_move(&self) -> Option<(Position, Position, Piece)> {
        match self {
            Command::Move {
                source,
                target,
                piece,
            } => Some((*source, *target, *piece)),
            Command::Sequence(first, second) => {
                first.primary_move().or_else(|| second.primary_move())
            }
            _ => None,
        }
    }

    /// The kind of the first spawned piece, if any. Promotions are the only
    /// movement-rule commands that spawn.
    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self {
            Command::Spawn { piece, .. } => Some(piece.kind),
            Command::Sequence(first, second) => {
                first.promotion_kind().or_else(|| second.promotion_kind())
            }
            _ => None,
        }
    }
}
