//! UCI protocol handling for mufti.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{GoParams, UciOption};
pub use engine::{EngineConfig, UciEngine};
pub use error::UciError;
