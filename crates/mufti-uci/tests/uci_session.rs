//! End-to-end UCI sessions driven through in-memory input and output.

use mufti_core::Position;
use mufti_uci::UciEngine;

fn session(input: &str) -> (UciEngine, Vec<String>) {
    let mut engine = UciEngine::new();
    let mut out = Vec::new();
    engine.run(input.as_bytes(), &mut out).unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (engine, lines)
}

fn bestmove(lines: &[String]) -> &str {
    lines
        .iter()
        .find_map(|line| line.strip_prefix("bestmove "))
        .expect("a bestmove line")
}

#[test]
fn handshake() {
    let (_, lines) = session("uci\nisready\nquit\n");
    assert_eq!(lines.first().map(String::as_str), Some("id name Mufti"));
    assert!(lines.iter().any(|l| l.starts_with("option name Depth type spin default 6")));
    assert!(
        lines
            .iter()
            .any(|l| l.starts_with("option name DefaultMoveTime type spin default 1000"))
    );
    assert!(lines.contains(&"uciok".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("readyok"));
}

#[test]
fn go_from_startpos_returns_legal_move() {
    let (_, lines) = session("position startpos moves e2e4\ngo depth 2 movetime 60000\nquit\n");
    let mv = bestmove(&lines);
    let mut position = Position::new();
    position.push(position.parse_uci("e2e4").unwrap()).unwrap();
    assert!(position.parse_uci(mv).is_ok(), "{mv} is legal for Black");

    let info = lines.iter().find(|l| l.starts_with("info ")).unwrap();
    assert!(info.starts_with("info depth 2 score cp "));
    assert!(info.contains(" nodes "));
    assert!(info.contains(" time "));
}

#[test]
fn go_finds_mate_in_one() {
    let input = "position fen r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4\n\
                 go depth 2 movetime 60000\n";
    let (engine, lines) = session(input);
    assert_eq!(bestmove(&lines), "h5f7");
    assert!(engine.position().is_checkmate(), "chosen move is applied");
}

#[test]
fn terminal_position_gets_null_move() {
    let (_, lines) = session("position fen k7/2K5/1Q6/8/8/8/8/8 b - - 0 1\ngo movetime 10\n");
    assert_eq!(bestmove(&lines), "0000");
}

#[test]
fn malformed_commands_are_skipped() {
    let input = "position fen nonsense\ngo depth x\nsetoption name Hash value 1\nisready\n";
    let (engine, lines) = session(input);
    assert_eq!(lines, vec!["bestmove 0000".to_string(), "readyok".to_string()]);
    assert_eq!(engine.position().ply(), 0);
}

#[test]
fn unparsable_go_still_gets_bestmove() {
    for go in ["go movetime abc", "go depth", "go depth two wtime 1000"] {
        let (engine, lines) = session(&format!("position startpos\n{go}\n"));
        assert_eq!(lines, vec!["bestmove 0000".to_string()], "{go}");
        assert_eq!(engine.position().ply(), 0, "{go}");
    }
}

#[test]
fn negative_clock_searches_instantly() {
    let (engine, lines) = session("position startpos\ngo wtime -5000 btime 3000 depth 3\n");
    let mv = bestmove(&lines);
    assert_ne!(mv, "0000");
    assert!(Position::new().parse_uci(mv).is_ok(), "{mv} is legal for White");
    assert_eq!(engine.position().ply(), 1);
}

#[test]
fn ucinewgame_resets_position() {
    let (engine, _) = session("position startpos moves e2e4 e7e5\nucinewgame\n");
    assert_eq!(engine.position().ply(), 0);
    assert_eq!(engine.position().fen(), mufti_core::STARTING_FEN);
}
