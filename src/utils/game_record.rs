//! Game record read/write.
//!
//! A PGN-like text form of a game: quoted `[Key "value"]` headers followed by
//! numbered moves in coordinate notation and a result token. Games that start
//! from a non-standard position carry a `Layout` header.

use std::collections::BTreeMap;

use chrono::Local;

use crate::api::apply_move;
use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::move_to_notation;
use crate::utils::long_algebraic::parse_coordinate_move;

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub headers: BTreeMap<String, String>,
    pub initial_state: GameState,
    pub move_history: Vec<ChessMove>,
    pub final_state: GameState,
    pub result: String,
}

/// Record of `game` from its first logged move, with today's date.
pub fn write_game_record(game: &GameState, white: &str, black: &str) -> ChessResult<String> {
    let mut initial_state = game.clone();
    while !initial_state.move_log.is_empty() {
        initial_state.unmake_move()?;
    }

    let result = game
        .outcome()
        .map(|outcome| outcome.result_token())
        .unwrap_or("*");

    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Minichess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("White".to_owned(), white.to_owned());
    headers.insert("Black".to_owned(), black.to_owned());
    headers.insert("Result".to_owned(), result.to_owned());

    let initial_layout = initial_state.get_layout();
    if initial_layout != STARTING_LAYOUT {
        headers.insert("Layout".to_owned(), initial_layout);
    }

    Ok(write_game_record_with_headers(
        &initial_state,
        &game.move_log,
        &headers,
    ))
}

pub fn write_game_record_with_headers(
    initial_state: &GameState,
    move_history: &[ChessMove],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');

    // Numbering follows the absolute ply so a Black-to-move layout starts
    // with "N...".
    let first_ply = usize::from(initial_state.ply_count);
    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (offset, mv) in move_history.iter().enumerate() {
        let ply = first_ply + offset;
        let notation = move_to_notation(mv);
        if offset == 0 && ply % 2 == 1 {
            movetext_parts.push(format!("{}... {}", (ply / 2) + 1, notation));
        } else if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, notation));
        } else {
            movetext_parts.push(notation);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// Parses a record and replays every move through the legality checks.
pub fn read_game_record(text: &str) -> ChessResult<GameRecord> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let initial_state = match headers.get("Layout") {
        Some(layout) => GameState::from_layout(layout)?,
        None => GameState::new_game(),
    };

    let mut state = initial_state.clone();
    let mut move_history = Vec::<ChessMove>::new();
    let mut result = "*".to_owned();

    let movetext = strip_comments(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }

        let cleaned = trim_annotation_suffix(token);
        if is_result_token(cleaned) {
            result = cleaned.to_owned();
            break;
        }

        let mv = parse_coordinate_move(&mut state, cleaned).map_err(|e| replay_error(token, e))?;
        apply_move(&mut state, mv).map_err(|e| replay_error(token, e))?;
        move_history.push(mv);
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(GameRecord {
        headers,
        initial_state,
        move_history,
        final_state: state,
        result,
    })
}

fn replay_error(token: &str, error: ChessError) -> ChessError {
    ChessError::InvalidRecord(format!("cannot replay {token}: {error}"))
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    let invalid = || ChessError::InvalidRecord(format!("invalid header line: {line}"));

    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let (key, value_raw) = inner.split_once(' ').ok_or_else(invalid)?;
    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?
        .replace("\\\"", "\"");

    Ok((key.trim().to_owned(), value))
}

fn strip_comments(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            _ if brace_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
