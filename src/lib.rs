//! Crate root module declarations for the Damson Chess rule engine.
//!
//! This file exposes all top-level subsystems (game state, the command
//! algebra, move generation, and utility helpers) so binaries, tests, and
//! external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod game_state;
    pub mod position;
}

pub mod commands {
    pub mod command;
}

pub mod move_generation {
    pub mod castling_rule;
    pub mod check_rule;
    pub mod en_passant_rule;
    pub mod end_rule;
    pub mod movement_rule;
    pub mod perft;
    pub mod promotion_rule;
    pub mod rulebook;
    pub mod threat_analyzer;
}

pub mod utils {
    pub mod long_algebraic;
    pub mod render_game_state;
}
