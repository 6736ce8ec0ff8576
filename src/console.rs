//! Interactive console game: a human against the engine.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use tracing::{debug, info};

use mufti_core::{Color, Outcome, Position};
use mufti_engine::find_best_move;

/// Starting setups offered by `mufti play`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Bishops on b1/b8 next to a wall of queens.
    Bishop,
    /// Knights on b1/b8 next to a wall of queens.
    Knight,
}

impl Variant {
    /// FEN of the variant's starting position.
    pub fn fen(self) -> &'static str {
        match self {
            Variant::Bishop => "rbqqkqqr/pppppppp/8/8/8/8/PPPPPPPP/RBQQKQQR w KQkq - 0 1",
            Variant::Knight => "rnqqkqqr/pppppppp/8/8/8/8/PPPPPPPP/RNQQKQQR w KQkq - 0 1",
        }
    }
}

/// Settings for one console game.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    pub variant: Variant,
    /// The engine plays White.
    pub engine_first: bool,
    pub depth: u32,
    pub movetime: Duration,
}

/// Play a game from the variant's starting position.
///
/// Returns the outcome, or `None` if the input ran out first.
pub fn play<R: BufRead, W: Write>(
    config: &ConsoleConfig,
    input: R,
    output: &mut W,
) -> Result<Option<Outcome>> {
    let position = Position::from_fen(config.variant.fen())?;
    play_from(position, config, input, output)
}

fn play_from<R: BufRead, W: Write>(
    mut position: Position,
    config: &ConsoleConfig,
    input: R,
    output: &mut W,
) -> Result<Option<Outcome>> {
    let engine_color = if config.engine_first {
        Color::White
    } else {
        Color::Black
    };
    info!(variant = ?config.variant, ?engine_color, "console game started");

    let mut lines = input.lines();
    writeln!(output, "{}\n", position.pretty())?;

    loop {
        if let Some(outcome) = position.outcome() {
            writeln!(output, "Game over: {}", describe(outcome))?;
            info!(?outcome, "console game finished");
            return Ok(Some(outcome));
        }

        if position.side_to_move() == engine_color {
            let Some(mv) = find_best_move(&mut position, config.depth, config.movetime) else {
                bail!("engine found no move in {}", position.fen());
            };
            writeln!(output, "Engine plays {}", position.to_uci(mv))?;
            position.push(mv).context("engine move rejected")?;
        } else {
            write!(output, "Your move: ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output, "\nEnd of input.")?;
                return Ok(None);
            };
            let line = line?;
            let text = line.trim();
            debug!(input = %text, "human move");

            match position.parse_move(text) {
                Ok(mv) => position.push(mv)?,
                Err(e) => {
                    writeln!(output, "Invalid move ({e}). Try again.")?;
                    continue;
                }
            }
        }

        writeln!(output, "{}\n", position.pretty())?;
    }
}

fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Checkmate {
            winner: Color::White,
        } => "checkmate, White wins",
        Outcome::Checkmate {
            winner: Color::Black,
        } => "checkmate, Black wins",
        Outcome::Stalemate => "draw by stalemate",
        Outcome::InsufficientMaterial => "draw by insufficient material",
        Outcome::SeventyFiveMoves => "draw by the seventy-five-move rule",
        Outcome::FivefoldRepetition => "draw by fivefold repetition",
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mufti_core::{Color, Outcome, Position};

    use super::{ConsoleConfig, Variant, play, play_from};

    fn config(engine_first: bool) -> ConsoleConfig {
        ConsoleConfig {
            variant: Variant::Knight,
            engine_first,
            depth: 1,
            movetime: Duration::from_millis(50),
        }
    }

    fn run(config: &ConsoleConfig, input: &str) -> (Option<Outcome>, String) {
        let mut out = Vec::new();
        let outcome = play(config, input.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn variants_are_valid_positions() {
        // Only the knight can leave the back rank before a pawn moves.
        for (variant, moves) in [(Variant::Bishop, 16), (Variant::Knight, 18)] {
            let position = Position::from_fen(variant.fen()).unwrap();
            assert_eq!(position.legal_moves().len(), moves, "{variant:?}");
        }
    }

    #[test]
    fn invalid_input_reprompts() {
        let (outcome, text) = run(&config(false), "e9\nKe2\ne4\n");
        assert_eq!(outcome, None);
        assert_eq!(text.matches("Invalid move").count(), 2);
        assert!(text.contains("Engine plays "));
        assert!(text.ends_with("End of input.\n"));
    }

    #[test]
    fn engine_moves_first_when_asked() {
        let (outcome, text) = run(&config(true), "");
        assert_eq!(outcome, None);
        let engine = text.find("Engine plays").unwrap();
        let prompt = text.find("Your move").unwrap();
        assert!(engine < prompt);
    }

    #[test]
    fn uci_input_is_accepted() {
        let (_, text) = run(&config(false), "e2e4\n");
        assert!(!text.contains("Invalid move"));
        assert!(text.contains("Engine plays "));
    }

    #[test]
    fn game_ends_on_checkmate() {
        let position = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1").unwrap();
        let mut out = Vec::new();
        let outcome = play_from(position, &config(false), "Rd8#\n".as_bytes(), &mut out).unwrap();
        assert_eq!(
            outcome,
            Some(Outcome::Checkmate {
                winner: Color::White
            })
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Game over: checkmate, White wins"));
    }
}
