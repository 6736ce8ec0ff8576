//! Synchronous UCI engine loop.

use std::io::{BufRead, Write};
use std::time::Duration;

use tracing::{debug, error, info, warn};

use mufti_core::Position;
use mufti_engine::{
    DEFAULT_ALLOWANCE, DEFAULT_DEPTH, EvalWeights, SearchLimits, allowance_from_go, search,
};

use crate::command::{
    Command, DEPTH_RANGE, GoParams, MOVE_TIME_RANGE, UciOption, parse_command,
};
use crate::error::UciError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth when `go` gives none.
    pub depth: u32,
    /// Allowance when `go` gives neither `movetime` nor a clock.
    pub default_movetime: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            default_movetime: DEFAULT_ALLOWANCE,
        }
    }
}

/// The UCI engine, holding the current position and configuration.
///
/// `go` searches on the calling thread and replies before the next command
/// is read, so `stop` has nothing to interrupt.
pub struct UciEngine {
    position: Position,
    config: EngineConfig,
    weights: EvalWeights,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            position: Position::new(),
            config,
            weights: EvalWeights::DEFAULT,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The engine's current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Run the UCI loop until `quit` or end of input.
    ///
    /// Parse errors are logged and the offending line is skipped; a `go`
    /// that fails to parse is still answered with `bestmove 0000`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, output)?,
                Err(e) => {
                    warn!(error = %e, "UCI parse error");
                    // The GUI still waits for a reply to a `go` it sent.
                    if trimmed.split_whitespace().next() == Some("go") {
                        writeln!(output, "bestmove 0000")?;
                    }
                }
            }
            output.flush()?;
        }

        info!("mufti shutting down");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), UciError> {
        match cmd {
            Command::Uci => self.handle_uci(output)?,
            Command::IsReady => writeln!(output, "readyok")?,
            Command::UciNewGame => self.position = Position::new(),
            Command::Position(position) => self.position = position,
            Command::Go(params) => self.handle_go(params, output)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Stop | Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn handle_uci<W: Write>(&self, output: &mut W) -> Result<(), UciError> {
        writeln!(output, "id name Mufti")?;
        writeln!(output, "id author the mufti developers")?;
        writeln!(
            output,
            "option name Depth type spin default {} min {} max {}",
            DEFAULT_DEPTH, DEPTH_RANGE.0, DEPTH_RANGE.1
        )?;
        writeln!(
            output,
            "option name DefaultMoveTime type spin default {} min {} max {}",
            DEFAULT_ALLOWANCE.as_millis(),
            MOVE_TIME_RANGE.0,
            MOVE_TIME_RANGE.1
        )?;
        writeln!(output, "uciok")?;
        Ok(())
    }

    fn handle_setoption(&mut self, option: UciOption) {
        match option {
            UciOption::Depth(depth) => self.config.depth = depth,
            UciOption::DefaultMoveTime(movetime) => self.config.default_movetime = movetime,
        }
        debug!(config = ?self.config, "option updated");
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, output: &mut W) -> Result<(), UciError> {
        let side = self.position.side_to_move();
        let allowance = allowance_from_go(
            params.movetime,
            params.wtime,
            params.btime,
            side,
            self.config.default_movetime,
        );
        let limits = SearchLimits {
            depth: params.depth.unwrap_or(self.config.depth),
            allowance,
        };

        let report = match search(&mut self.position, &limits, &self.weights) {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "search failed");
                writeln!(output, "bestmove 0000")?;
                return Ok(());
            }
        };

        writeln!(
            output,
            "info depth {} score cp {} nodes {} time {}",
            limits.depth,
            report.score,
            report.nodes,
            report.elapsed.as_millis()
        )?;

        match report.best_move {
            Some(mv) => {
                let uci = self.position.to_uci(mv);
                writeln!(output, "bestmove {uci}")?;
                info!(bestmove = %uci, score = report.score, "move chosen");
                if let Err(e) = self.position.push(mv) {
                    warn!(error = %e, "could not apply chosen move");
                }
            }
            None => writeln!(output, "bestmove 0000")?,
        }
        Ok(())
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}
