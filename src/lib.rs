// src/lib.rs
pub mod cli;
pub mod collector;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod output;
pub mod prompt;
pub mod resolver;
pub mod runner;
pub mod sources;
pub mod types;
pub mod utils;

pub use cli::Args;
pub use engine::BHuntyEngine;
pub use types::{BHuntyError, Config, RunOutcome, RunReport};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
