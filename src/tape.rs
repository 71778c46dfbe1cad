//! This module defines the tape abstractions: `HalfTape`, the growable
//! rightward-infinite tape the execution engine runs on, and `Tape`, a
//! bidirectional variant built from two half-tapes.

use crate::types::BLANK_SYMBOL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tape infinite to the right only, fixed at cell 0 on the left.
///
/// Reading or writing past the current length extends the tape with blanks up
/// to and including the accessed index. Extension only ever grows the tape.
/// Negative addressing is impossible by construction; the execution engine
/// rejects a head move that would need it before it reaches the tape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfTape {
    cells: Vec<char>,
}

impl HalfTape {
    /// Creates an empty tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the tape with blanks so that `index` is addressable.
    fn extend_to(&mut self, index: usize) {
        if index >= self.cells.len() {
            self.cells.resize(index + 1, BLANK_SYMBOL);
        }
    }

    /// Returns the symbol at `index`, extending the tape first if needed.
    pub fn read(&mut self, index: usize) -> char {
        self.extend_to(index);
        self.cells[index]
    }

    /// Overwrites the symbol at `index`, extending the tape first if needed.
    pub fn write(&mut self, index: usize, symbol: char) {
        self.extend_to(index);
        self.cells[index] = symbol;
    }

    /// Returns the number of cells written or extended so far.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been written or extended yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the tape's symbols in cell order.
    pub fn symbols(&self) -> &[char] {
        &self.cells
    }

    /// Renders the tape as a string of its symbols. Blank cells render as the
    /// blank symbol itself; any prettier substitution is a display concern.
    pub fn render(&self) -> String {
        self.cells.iter().collect()
    }
}

impl From<&str> for HalfTape {
    fn from(input: &str) -> Self {
        Self {
            cells: input.chars().collect(),
        }
    }
}

impl fmt::Display for HalfTape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// A tape infinite in both directions, built from two half-tapes.
///
/// Cell `i >= 0` lives at `right[i]`; cell `i < 0` lives at `left[-i - 1]`.
/// This type honors the same read/write/extension contract as `HalfTape` but
/// extends leftward instead of failing. The execution engine does not use it:
/// the engine's contract is runoff-on-negative, and this type exists as an
/// alternate representation for callers that want a two-sided tape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    left: HalfTape,
    right: HalfTape,
}

impl Tape {
    /// Creates an empty bidirectional tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol at `index`, extending the relevant half if needed.
    pub fn read(&mut self, index: i64) -> char {
        if index < 0 {
            self.left.read((-index - 1) as usize)
        } else {
            self.right.read(index as usize)
        }
    }

    /// Overwrites the symbol at `index`, extending the relevant half if needed.
    pub fn write(&mut self, index: i64, symbol: char) {
        if index < 0 {
            self.left.write((-index - 1) as usize, symbol);
        } else {
            self.right.write(index as usize, symbol);
        }
    }

    /// Renders the tape left-to-right: the left half reversed, then the right.
    pub fn render(&self) -> String {
        self.left
            .symbols()
            .iter()
            .rev()
            .chain(self.right.symbols().iter())
            .collect()
    }
}

impl From<&str> for Tape {
    fn from(input: &str) -> Self {
        Self {
            left: HalfTape::new(),
            right: HalfTape::from(input),
        }
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
