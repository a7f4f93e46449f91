//! Crate root module declarations for the minichess engine.
//!
//! Minichess is played on a 6-row by 5-column board with no castling, no
//! en passant and automatic queen promotion. This file exposes the game
//! state, move generation, search, engines and utility helpers so binaries,
//! benches and tests can import stable module paths. The `api` module is the
//! intended entry point for driving a game.

pub mod api;
pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod scoped_move;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod move_ordering;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod game_record;
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
