//! Terminal reporting for simulation runs: per-step state lines, the live
//! single-line display, and the end-of-run summary.

use halftape::{Snapshot, TuringMachine};
use std::io::{self, Write};

/// Formats and prints machine snapshots.
///
/// Owns every display toggle; the engine itself knows nothing about output.
pub struct Reporter {
    /// Append the matched rule to each state line.
    pub display_rules: bool,
    /// Print the visited-state path in the summary.
    pub display_path: bool,
    /// Suppress intermediate state lines.
    pub silent: bool,
    /// Overwrite a single status line instead of printing one per step.
    pub live: bool,
}

impl Reporter {
    /// Prints one state line: `"{step} ({state}): {tape}"`, with a `|`
    /// pointer before the head cell when `show_pointer` is set, plus the
    /// matched rule when enabled. In live mode the line ends with a carriage
    /// return so the next one overwrites it.
    pub fn print_state(&self, snapshot: &Snapshot, show_pointer: bool) {
        if self.silent {
            return;
        }

        let tape = if show_pointer {
            pointed(snapshot)
        } else {
            snapshot.tape.clone()
        };

        let mut line = format!("{} ({}): {}", snapshot.step, snapshot.state, tape);
        if self.display_rules {
            if let Some(rule) = &snapshot.rule {
                line.push_str(&format!(" R: {rule}"));
            }
        }

        if self.live {
            print!("{line}\r");
            let _ = io::stdout().flush();
        } else {
            println!("{line}");
        }
    }

    /// Prints the final state line and the run summary. Printed even in
    /// silent mode: this is the run's result.
    pub fn print_halt(&self, machine: &TuringMachine) {
        let snapshot = machine.snapshot();
        println!("{} ({}): {}", snapshot.step, snapshot.state, snapshot.tape);
        println!();

        let tracker = machine.tracker();
        println!("Steps: {}", tracker.step_count());
        println!("Head moves: {}", tracker.head_move_count());
        if self.display_path {
            println!("State path: {:?}", tracker.path());
        }
    }
}

/// Renders the tape with a `|` marker inserted before the head position.
fn pointed(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(snapshot.tape.len() + 1);
    for (i, c) in snapshot.tape.chars().enumerate() {
        if i == snapshot.head {
            out.push('|');
        }
        out.push(c);
    }
    if snapshot.head >= snapshot.tape.chars().count() {
        out.push('|');
    }
    out
}
