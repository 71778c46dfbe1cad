//! This crate provides the core logic for a half-tape Turing machine
//! simulator. It includes modules for the transition-rule model, the
//! auto-extending tape, the execution engine, the per-run tracker, and the
//! rule-text parser and loader.

pub mod loader;
pub mod machine;
pub mod parser;
pub mod tape;
pub mod tracker;
pub mod types;

/// Re-exports the `RuleLoader` struct from the loader module.
pub use loader::RuleLoader;
/// Re-exports the engine types from the machine module.
pub use machine::{Config, Snapshot, Step, TuringMachine, DEFAULT_STEP_DELAY};
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports the tape types from the tape module.
pub use tape::{HalfTape, Tape};
/// Re-exports the `RunTracker` struct from the tracker module.
pub use tracker::RunTracker;
/// Re-exports the rule model and error types from the types module.
pub use types::{
    Direction, MachineError, Rule, RuleTable, State, Symbol, Write, BLANK_SYMBOL, HALT_STATE,
    INITIAL_STATE,
};
