//! The rulebook facade.
//!
//! `StandardRulebook` is the surface the presentation layer talks to:
//! create the initial game, classify its status, and enumerate the legal
//! continuations for one square. Raw movement-rule candidates get wrapped
//! with end-turn and history recording, simulated, and filtered so no
//! returned continuation leaves the mover's own king attacked.

use std::sync::Arc;

use crate::commands::command::Command;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::{GameState, Player, Status, Update};
use crate::game_state::position::Position;
use crate::move_generation::check_rule;
use crate::move_generation::end_rule;
use crate::move_generation::movement_rule;

/// The operations a rule set offers to its collaborators.
pub trait Rulebook {
    fn create_game(&self) -> GameState;
    fn status(&self, game: &GameState) -> Status;
    fn legal_updates(&self, game: &GameState, position: Position) -> Vec<Update>;
}

/// The standard chess rules.
#[derive(Debug, Default)]
pub struct StandardRulebook;

impl StandardRulebook {
    pub fn new() -> Self {
        Self
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

fn starting_board() -> Board {
    let mut placements = Vec::with_capacity(32);

    for (color, base_row, pawn_row) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
        for (column, kind) in BACK_RANK.iter().enumerate() {
            placements.push((
                Position::new(base_row, column as i8),
                Piece::new(*kind, color),
            ));
        }
        for column in 0..8 {
            placements.push((
                Position::new(pawn_row, column),
                Piece::new(PieceKind::Pawn, color),
            ));
        }
    }

    placements
        .into_iter()
        .fold(Board::new(), |board, (position, piece)| {
            board
                .add(position, piece)
                .expect("starting placements never collide")
        })
}

impl Rulebook for StandardRulebook {
    /// The standard 32-piece starting position, white to move.
    fn create_game(&self) -> GameState {
        GameState::new(
            starting_board(),
            Player::new(Color::White),
            Player::new(Color::Black),
        )
    }

    fn status(&self, game: &GameState) -> Status {
        end_rule::status(game)
    }

    /// Every legal continuation for the piece on `position`. Empty when the
    /// square is empty, holds an opponent piece, or nothing survives the
    /// self-check filter.
    fn legal_updates(&self, game: &GameState, position: Position) -> Vec<Update> {
        let Some(placed) = game
            .board
            .piece_of_color_at(position, game.active_player.color)
        else {
            return Vec::new();
        };

        movement_rule::commands(game, placed)
            .into_iter()
            .filter_map(|candidate| {
                // Wrap: finish the turn, then record how we got here. The
                // history edge stores the state *before* the command ran.
                let turn_end = candidate.then(Command::EndTurn);
                let record = turn_end.clone().then(Command::SetLastUpdate(Some(Arc::new(
                    Update::new(game.clone(), turn_end),
                ))));
                let future = record.execute(game)?;
                Some(Update::new(future, record))
            })
            // After end-turn the mover is the passive player; discard any
            // future that leaves their king attacked.
            .filter(|update| !check_rule::is_checked(&update.state, update.state.passive_player))
            .collect()
    }
}
