//! This module defines the core data structures and types used throughout the
//! half-tape Turing machine simulator: symbols, transition rules, the ordered
//! rule table, and the error types surfaced by the execution engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The blank symbol an unwritten tape cell holds.
pub const BLANK_SYMBOL: char = '_';
/// The literal token that stands for "any symbol" / "no change" in rule text.
pub const WILDCARD_TOKEN: &str = "*";
/// The reserved halting state. Reaching it ends the run.
pub const HALT_STATE: State = 0;
/// The state every machine starts in.
pub const INITIAL_STATE: State = 1;

/// A control state. Signed: negative state numbers are legal rule-file syntax.
pub type State = i64;

/// The symbol a rule expects under the head before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    /// Matches exactly this character.
    Literal(char),
    /// Matches any scanned character.
    Wildcard,
}

impl Symbol {
    /// Whether this pattern matches the scanned character.
    pub fn matches(&self, scanned: char) -> bool {
        match self {
            Symbol::Literal(c) => *c == scanned,
            Symbol::Wildcard => true,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Literal(c) => write!(f, "{c}"),
            Symbol::Wildcard => write!(f, "{WILDCARD_TOKEN}"),
        }
    }
}

/// The symbol a rule writes back at the head position.
///
/// `Unchanged` is the output-side meaning of the `*` token: rewrite whatever
/// was scanned, never the literal `*` character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Write {
    /// Overwrite the cell with this character.
    Literal(char),
    /// Leave the scanned character in place.
    Unchanged,
}

impl Write {
    /// Resolves the character actually written given the scanned character.
    pub fn applied_to(&self, scanned: char) -> char {
        match self {
            Write::Literal(c) => *c,
            Write::Unchanged => scanned,
        }
    }
}

impl fmt::Display for Write {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Write::Literal(c) => write!(f, "{c}"),
            Write::Unchanged => write!(f, "{WILDCARD_TOKEN}"),
        }
    }
}

/// The possible directions the head moves after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Keep the head in the same position.
    Stay,
    /// Move the head one position to the right.
    Right,
}

impl Direction {
    /// The signed head displacement this direction encodes.
    pub fn offset(&self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Stay => 0,
            Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.offset())
    }
}

/// A single transition quintuple.
///
/// Fires when the machine is in `state` and `scan` matches the symbol under
/// the head; it then writes `write`, enters `next_state`, and moves the head
/// per `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub state: State,
    pub scan: Symbol,
    pub next_state: State,
    pub write: Write,
    pub direction: Direction,
}

impl Rule {
    /// Whether this rule applies to the given control state and scanned symbol.
    pub fn matches(&self, state: State, scanned: char) -> bool {
        self.state == state && self.scan.matches(scanned)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.state, self.scan, self.next_state, self.write, self.direction
        )
    }
}

/// An ordered sequence of rules.
///
/// Declaration order is semantically significant: lookup always returns the
/// earliest matching rule, so a literal rule listed before a wildcard rule for
/// the same state shadows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Creates a table holding `rules` in their given order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Finds the first rule, in declaration order, matching the control state
    /// and scanned symbol. Returns `None` when the table has none.
    pub fn find(&self, state: State, scanned: char) -> Option<&Rule> {
        self.rules.iter().find(|r| r.matches(state, scanned))
    }

    /// Returns the number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

/// Errors surfaced by the simulator. Both execution errors are fatal for the
/// current run: the engine never retries or auto-corrects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MachineError {
    /// No rule in the table matches the current state and scanned symbol.
    #[error("no rule found from state {0} with symbol '{1}'")]
    RuleNotFound(State, char),
    /// The head attempted to move left past the tape's fixed origin.
    #[error("attempted to run off the left side of the tape")]
    TapeRunoff,
    /// A rule token could not be converted to a state, symbol, or direction.
    #[error("invalid rule: {0}")]
    InvalidRule(String),
    /// A rule file could not be read.
    #[error("file error: {0}")]
    FileError(String),
}
