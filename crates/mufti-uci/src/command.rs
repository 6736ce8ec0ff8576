//! UCI command parsing.

use std::time::Duration;

use mufti_core::Position;

use crate::error::UciError;

/// Bounds of the `Depth` spin option.
pub const DEPTH_RANGE: (u32, u32) = (1, 64);

/// Bounds of the `DefaultMoveTime` spin option, in milliseconds.
pub const MOVE_TIME_RANGE: (u64, u64) = (0, 3_600_000);

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` uses the engine's configured depth
/// and default move time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// White's remaining time.
    pub wtime: Option<Duration>,
    /// Black's remaining time.
    pub btime: Option<Duration>,
    /// Search to this depth only.
    pub depth: Option<u32>,
    /// Search for exactly this duration.
    pub movetime: Option<Duration>,
}

/// An engine option set through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciOption {
    /// `Depth`: search depth when `go` gives none.
    Depth(u32),
    /// `DefaultMoveTime`: allowance when `go` gives no clock.
    DefaultMoveTime(Duration),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a position with optional moves applied.
    Position(Position),
    /// `go` -- search with the given parameters.
    Go(GoParams),
    /// `setoption` -- change an engine option.
    SetOption(UciOption),
    /// `stop` -- halt the current search.
    Stop,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (ignored, as the UCI protocol requires).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "go" => parse_go(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
///
/// The moves are pushed onto the position, so it carries the game history
/// needed for repetition detection.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.is_empty() {
        return Err(UciError::MalformedPosition);
    }

    let (mut position, rest) = if tokens[0] == "startpos" {
        (Position::new(), &tokens[1..])
    } else if tokens[0] == "fen" {
        // FEN is 6 space-separated fields
        if tokens.len() < 7 {
            return Err(UciError::InvalidFen {
                fen: tokens[1..].join(" "),
            });
        }
        let fen = tokens[1..7].join(" ");
        let position = Position::from_fen(&fen).map_err(|_| UciError::InvalidFen { fen: fen.clone() })?;
        (position, &tokens[7..])
    } else {
        return Err(UciError::MalformedPosition);
    };

    if !rest.is_empty() && rest[0] == "moves" {
        for uci_str in &rest[1..] {
            let invalid = || UciError::InvalidMove {
                uci_move: uci_str.to_string(),
            };
            let mv = position.parse_uci(uci_str).map_err(|_| invalid())?;
            position.push(mv).map_err(|_| invalid())?;
        }
    }

    Ok(Command::Position(position))
}

/// Parse the `go` command arguments.
///
/// `wtime`, `btime`, `movetime` and `depth` are read. Keywords that take a
/// value (`winc`, `binc`, `movestogo`, `nodes`, `mate`) have it skipped;
/// any other token, such as `infinite`, is ignored.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();
    let mut tokens = tokens.iter().copied();

    while let Some(key) = tokens.next() {
        match key {
            "wtime" => params.wtime = Some(clock_value(key, tokens.next())?),
            "btime" => params.btime = Some(clock_value(key, tokens.next())?),
            "movetime" => params.movetime = Some(clock_value(key, tokens.next())?),
            "depth" => {
                let value = go_value(key, tokens.next())?;
                let depth = value.parse().map_err(|_| invalid_go_value(key, value))?;
                params.depth = Some(depth);
            }
            "winc" | "binc" | "movestogo" | "nodes" | "mate" => {
                tokens.next();
            }
            _ => {}
        }
    }

    Ok(Command::Go(params))
}

/// A millisecond clock value. Negative readings, which some GUIs send once
/// a flag has fallen, are clamped to zero.
fn clock_value(key: &str, token: Option<&str>) -> Result<Duration, UciError> {
    let value = go_value(key, token)?;
    let ms: i64 = value.parse().map_err(|_| invalid_go_value(key, value))?;
    Ok(Duration::from_millis(ms.max(0).unsigned_abs()))
}

fn go_value<'a>(key: &str, token: Option<&'a str>) -> Result<&'a str, UciError> {
    token.ok_or_else(|| UciError::MissingGoValue {
        param: key.to_string(),
    })
}

fn invalid_go_value(key: &str, value: &str) -> UciError {
    UciError::InvalidGoValue {
        param: key.to_string(),
        value: value.to_string(),
    }
}

/// Parse `setoption name <name...> value <value>`.
///
/// Option names are matched case-insensitively.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    let name_at = tokens.iter().position(|&t| t == "name");
    let value_at = tokens.iter().position(|&t| t == "value");
    let (Some(name_at), Some(value_at)) = (name_at, value_at) else {
        return Err(UciError::MalformedOption);
    };
    if value_at <= name_at + 1 || value_at + 1 >= tokens.len() {
        return Err(UciError::MalformedOption);
    }

    let name = tokens[name_at + 1..value_at].join(" ");
    let value = tokens[value_at + 1..].join(" ");
    let invalid = || UciError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "depth" => {
            let depth: u32 = value.parse().map_err(|_| invalid())?;
            if !(DEPTH_RANGE.0..=DEPTH_RANGE.1).contains(&depth) {
                return Err(invalid());
            }
            UciOption::Depth(depth)
        }
        "defaultmovetime" => {
            let ms: u64 = value.parse().map_err(|_| invalid())?;
            if !(MOVE_TIME_RANGE.0..=MOVE_TIME_RANGE.1).contains(&ms) {
                return Err(invalid());
            }
            UciOption::DefaultMoveTime(Duration::from_millis(ms))
        }
        _ => return Err(UciError::UnknownOption { name }),
    };

    Ok(Command::SetOption(option))
}
