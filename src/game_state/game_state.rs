//! Core immutable game state representation.
//!
//! `GameState` bundles the board, the two players, and an optional link to
//! the update that produced it. Every mutator returns a fresh state; the
//! chain of `last_update` links forms the full backward game history and is
//! shared between states through `Arc`, so deriving a new state never
//! copies the past.

use std::sync::Arc;

use crate::commands::command::Command;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

/// A participant in the game. Currently only carries the side it plays;
/// the type exists so per-player data has a home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub color: Color,
}

impl Player {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// The outcome classification of a game state, from the perspective of
/// whoever is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    WhiteTurn,
    WhiteWin,
    BlackTurn,
    BlackWin,
    Draw,
}

/// One edge of the game history: a command together with a game state.
/// When chained as history the state is the one *before* the command ran;
/// when handed to a collaborator it is the state *after*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub state: GameState,
    pub command: Command,
}

impl Update {
    #[inline]
    pub fn new(state: GameState, command: Command) -> Self {
        Self { state, command }
    }
}

/// An immutable snapshot of a chess game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub active_player: Player,
    pub passive_player: Player,
    pub last_update: Option<Arc<Update>>,
}

impl GameState {
    pub fn new(board: Board, active_player: Player, passive_player: Player) -> Self {
        Self {
            board,
            active_player,
            passive_player,
            last_update: None,
        }
    }

    /// Returns the same game with a different board.
    pub fn set_board(&self, board: Board) -> Self {
        Self {
            board,
            active_player: self.active_player,
            passive_player: self.passive_player,
            last_update: self.last_update.clone(),
        }
    }

    /// Returns the same game with a different recorded last update.
    pub fn set_last_update(&self, last_update: Option<Arc<Update>>) -> Self {
        Self {
            board: self.board.clone(),
            active_player: self.active_player,
            passive_player: self.passive_player,
            last_update,
        }
    }

    /// Returns the same game with the players swapped.
    pub fn end_turn(&self) -> Self {
        Self {
            board: self.board.clone(),
            active_player: self.passive_player,
            passive_player: self.active_player,
            last_update: self.last_update.clone(),
        }
    }

    /// Walks the recorded updates backward, most recent first.
    pub fn history(&self) -> History<'_> {
        History {
            next: self.last_update.as_deref(),
        }
    }
}

/// Lazy backward iterator over the update chain of a game state.
pub struct History<'a> {
    next: Option<&'a Update>,
}

impl<'a> Iterator for History<'a> {
    type Item = &'a Update;

    fn next(&mut self) -> Option<Self::Item> {
        let update = self.next?;
        self.next = update.state.last_update.as_deref();
        Some(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_game() -> GameState {
        GameState::new(
            Board::new(),
            Player::new(Color::White),
            Player::new(Color::Black),
        )
    }

    #[test]
    fn end_turn_swaps_players() {
        let game = bare_game();
        let next = game.end_turn();

        assert_eq!(next.active_player.color, Color::Black);
        assert_eq!(next.passive_player.color, Color::White);
        assert_eq!(game.active_player.color, Color::White);
    }

    #[test]
    fn history_walks_backward_most_recent_first() {
        let first = bare_game();
        let second = first.set_last_update(Some(Arc::new(Update::new(
            first.clone(),
            Command::EndTurn,
        ))));
        let third = second.set_last_update(Some(Arc::new(Update::new(
            second.clone(),
            Command::EndTurn,
        ))));

        assert_eq!(first.history().count(), 0);
        assert_eq!(second.history().count(), 1);
        assert_eq!(third.history().count(), 2);

        let newest = third.history().next().unwrap();
        assert_eq!(newest.state, second);
    }
}
