//! Search and evaluation for mufti.

pub mod eval;
pub mod search;
pub mod time;

pub use eval::weights::EvalWeights;
pub use eval::{MATE_SCORE, Score, evaluate, evaluate_with};
pub use search::control::SearchClock;
pub use search::negamax::INF;
pub use search::{
    DEFAULT_ALLOWANCE, DEFAULT_DEPTH, SearchError, SearchLimits, SearchReport, find_best_move,
    search,
};
pub use time::allowance_from_go;
