//! This module defines the `TuringMachine` execution engine for a half-tape
//! machine: rule lookup, symbol substitution, head movement, halt detection,
//! and the failure model for missing rules and left-edge runoff.

use crate::tape::HalfTape;
use crate::tracker::RunTracker;
use crate::types::{MachineError, Rule, RuleTable, State, HALT_STATE, INITIAL_STATE};
use serde::Serialize;
use std::thread;
use std::time::Duration;

/// The default pause between automatic steps in [`TuringMachine::run`].
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(250);

/// Immutable engine configuration, fixed at construction.
///
/// Display toggles deliberately live with the reporting collaborator, not
/// here; the engine only consumes the pacing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Wall-clock pause between automatic steps in `run`. Zero skips the
    /// pause entirely.
    pub step_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

/// The outcome of a successful execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine performed a transition and can continue.
    Continue,
    /// The transition entered the halting state.
    Halted,
}

/// A post-step view of the machine, handed to reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Steps attempted so far, including the one that produced this snapshot.
    pub step: usize,
    /// The control state after the transition.
    pub state: State,
    /// The head position after the transition.
    pub head: usize,
    /// The tape contents after the transition.
    pub tape: String,
    /// The most recently applied rule, if any step has completed.
    pub rule: Option<Rule>,
    /// Whether the machine has reached the halting state.
    pub halted: bool,
}

/// A half-tape Turing machine.
///
/// Owns the control state, head, tape, rule table, and run tracker. The tape
/// is infinite to the right only; a transition that would move the head left
/// of cell 0 fails with [`MachineError::TapeRunoff`].
pub struct TuringMachine {
    rules: RuleTable,
    config: Config,
    state: State,
    head: usize,
    tape: HalfTape,
    last_rule: Option<Rule>,
    tracker: RunTracker,
}

impl TuringMachine {
    /// Creates a machine over `rules` with the default configuration and an
    /// empty tape. Call [`reset`](Self::reset) to load input before stepping.
    pub fn new(rules: RuleTable) -> Self {
        Self::with_config(rules, Config::default())
    }

    /// Creates a machine over `rules` with an explicit configuration.
    pub fn with_config(rules: RuleTable, config: Config) -> Self {
        Self {
            rules,
            config,
            state: INITIAL_STATE,
            head: 0,
            tape: HalfTape::new(),
            last_rule: None,
            tracker: RunTracker::new(),
        }
    }

    /// Loads a new initial tape and returns the machine to its starting
    /// configuration: state 1, head 0, no last rule, fresh tracker. This is
    /// the only way to begin a new run on an existing machine.
    pub fn reset(&mut self, input: &str) {
        self.tape = HalfTape::from(input);
        self.state = INITIAL_STATE;
        self.head = 0;
        self.last_rule = None;
        self.tracker = RunTracker::new();
    }

    /// Performs one transition.
    ///
    /// Reads the symbol under the head (extending the tape rightward if the
    /// head sits past the written cells), finds the first matching rule in
    /// declaration order, writes the rule's output symbol, enters its next
    /// state, and displaces the head.
    ///
    /// The step is counted before lookup, so a failed lookup still counts as
    /// an attempted transition. On [`MachineError::TapeRunoff`] the symbol
    /// write and state change have already happened; only the head move is
    /// rejected. Both errors are fatal for the run.
    pub fn step(&mut self) -> Result<Step, MachineError> {
        self.tracker.count_step();

        let scanned = self.tape.read(self.head);
        let rule = *self
            .rules
            .find(self.state, scanned)
            .ok_or(MachineError::RuleNotFound(self.state, scanned))?;

        self.tape.write(self.head, rule.write.applied_to(scanned));
        self.state = rule.next_state;
        self.last_rule = Some(rule);

        let offset = rule.direction.offset();
        if offset != 0 {
            self.tracker.count_head_move();
        }
        self.tracker.visit(self.state);

        let next_head = self.head as i64 + offset;
        if next_head < 0 {
            return Err(MachineError::TapeRunoff);
        }
        self.head = next_head as usize;

        Ok(if self.is_halted() {
            Step::Halted
        } else {
            Step::Continue
        })
    }

    /// Runs the machine until it halts, with no per-step observer.
    ///
    /// Returns the final tape contents.
    pub fn run(&mut self) -> Result<String, MachineError> {
        self.run_with(|_| {})
    }

    /// Runs the machine until it halts, invoking `observe` with the post-step
    /// snapshot after every transition.
    ///
    /// This is a pure repetition of [`step`](Self::step): between steps it
    /// pauses for the configured delay (skipped when zero), and nothing else.
    pub fn run_with<F>(&mut self, mut observe: F) -> Result<String, MachineError>
    where
        F: FnMut(&Snapshot),
    {
        while self.state != HALT_STATE {
            self.step()?;
            observe(&self.snapshot());

            if self.state != HALT_STATE && !self.config.step_delay.is_zero() {
                thread::sleep(self.config.step_delay);
            }
        }

        Ok(self.tape.render())
    }

    /// Whether the machine has reached the halting state.
    pub fn is_halted(&self) -> bool {
        self.state == HALT_STATE
    }

    /// The current control state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The current head position.
    pub fn head(&self) -> usize {
        self.head
    }

    /// The current tape.
    pub fn tape(&self) -> &HalfTape {
        &self.tape
    }

    /// The most recently applied rule. `None` before the first completed step.
    pub fn last_rule(&self) -> Option<&Rule> {
        self.last_rule.as_ref()
    }

    /// The run tracker for the current run.
    pub fn tracker(&self) -> &RunTracker {
        &self.tracker
    }

    /// The engine configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the post-step view handed to reporting collaborators.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.tracker.step_count(),
            state: self.state,
            head: self.head,
            tape: self.tape.render(),
            rule: self.last_rule,
            halted: self.is_halted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Symbol, Write};

    fn rule(state: State, scan: Symbol, next: State, write: Write, dir: Direction) -> Rule {
        Rule {
            state,
            scan,
            next_state: next,
            write,
            direction: dir,
        }
    }

    fn fast_config() -> Config {
        Config {
            step_delay: Duration::ZERO,
        }
    }

    /// Rule table: 1 0 2 1 1 / 2 * 0 * 0
    fn flip_and_halt() -> RuleTable {
        RuleTable::new(vec![
            rule(1, Symbol::Literal('0'), 2, Write::Literal('1'), Direction::Right),
            rule(2, Symbol::Wildcard, 0, Write::Unchanged, Direction::Stay),
        ])
    }

    #[test]
    fn test_single_step() {
        let mut machine = TuringMachine::with_config(flip_and_halt(), fast_config());
        machine.reset("0");

        let step = machine.step().unwrap();

        assert_eq!(step, Step::Continue);
        assert_eq!(machine.state(), 2);
        assert_eq!(machine.head(), 1);
        assert_eq!(machine.tape().render(), "1");
        assert_eq!(machine.tracker().step_count(), 1);
        assert_eq!(machine.tracker().head_move_count(), 1);
        assert_eq!(machine.tracker().path(), &[1, 2]);
    }

    #[test]
    fn test_run_to_halt() {
        let mut machine = TuringMachine::with_config(flip_and_halt(), fast_config());
        machine.reset("0");

        // Step 2 scans past the written cells, extends the tape with a blank,
        // and rewrites it unchanged before halting in place.
        let tape = machine.run().unwrap();

        assert_eq!(tape, "1_");
        assert!(machine.is_halted());
        assert_eq!(machine.state(), 0);
        assert_eq!(machine.head(), 1);
        assert_eq!(machine.tracker().step_count(), 2);
        assert_eq!(machine.tracker().head_move_count(), 1);
        assert_eq!(machine.tracker().path(), &[1, 2, 0]);
    }

    #[test]
    fn test_halting_step_reports_halted() {
        let mut machine = TuringMachine::with_config(flip_and_halt(), fast_config());
        machine.reset("0");

        assert_eq!(machine.step().unwrap(), Step::Continue);
        assert_eq!(machine.step().unwrap(), Step::Halted);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let mut machine = TuringMachine::with_config(flip_and_halt(), fast_config());

        machine.reset("0");
        let first_tape = machine.run().unwrap();
        let first_steps = machine.tracker().step_count();
        let first_path = machine.tracker().path().to_vec();

        machine.reset("0");
        let second_tape = machine.run().unwrap();

        assert_eq!(first_tape, second_tape);
        assert_eq!(machine.tracker().step_count(), first_steps);
        assert_eq!(machine.tracker().path(), first_path.as_slice());
    }

    #[test]
    fn test_tape_runoff_from_left_edge() {
        let table = RuleTable::new(vec![rule(
            1,
            Symbol::Wildcard,
            0,
            Write::Unchanged,
            Direction::Left,
        )]);
        let mut machine = TuringMachine::with_config(table, fast_config());
        machine.reset("a");

        let err = machine.step().unwrap_err();
        assert_eq!(err, MachineError::TapeRunoff);

        // The write and state transition completed; only the head move failed.
        assert_eq!(machine.state(), 0);
        assert_eq!(machine.tape().render(), "a");
        assert_eq!(machine.head(), 0);
        assert_eq!(machine.tracker().step_count(), 1);
        assert_eq!(machine.tracker().head_move_count(), 1);
        assert_eq!(machine.tracker().path(), &[1, 0]);
    }

    #[test]
    fn test_rule_not_found() {
        let table = RuleTable::new(vec![rule(
            2,
            Symbol::Wildcard,
            0,
            Write::Unchanged,
            Direction::Stay,
        )]);
        let mut machine = TuringMachine::with_config(table, fast_config());
        machine.reset("x");

        let err = machine.step().unwrap_err();
        assert_eq!(err, MachineError::RuleNotFound(1, 'x'));

        // The failed lookup still counted as an attempted transition.
        assert_eq!(machine.tracker().step_count(), 1);
        assert_eq!(machine.tracker().path(), &[1]);
        assert!(machine.last_rule().is_none());
    }

    #[test]
    fn test_no_change_write_keeps_symbol_but_counts() {
        let table = RuleTable::new(vec![
            rule(1, Symbol::Literal('a'), 2, Write::Unchanged, Direction::Right),
            rule(2, Symbol::Wildcard, 0, Write::Unchanged, Direction::Stay),
        ]);
        let mut machine = TuringMachine::with_config(table, fast_config());
        machine.reset("ab");

        machine.step().unwrap();

        assert_eq!(machine.tape().render(), "ab");
        assert_eq!(machine.head(), 1);
        assert_eq!(machine.tracker().step_count(), 1);
        assert_eq!(machine.tracker().head_move_count(), 1);
    }

    #[test]
    fn test_wildcard_scan_matches_any_symbol() {
        let table = RuleTable::new(vec![
            rule(1, Symbol::Literal('a'), 5, Write::Unchanged, Direction::Stay),
            rule(1, Symbol::Wildcard, 0, Write::Literal('w'), Direction::Stay),
        ]);
        let mut machine = TuringMachine::with_config(table, fast_config());
        machine.reset("q");

        machine.step().unwrap();

        assert_eq!(machine.state(), 0);
        assert_eq!(machine.tape().render(), "w");
    }

    #[test]
    fn test_stay_direction_does_not_count_head_move() {
        let table = RuleTable::new(vec![rule(
            1,
            Symbol::Wildcard,
            0,
            Write::Unchanged,
            Direction::Stay,
        )]);
        let mut machine = TuringMachine::with_config(table, fast_config());
        machine.reset("a");

        machine.step().unwrap();

        assert_eq!(machine.tracker().step_count(), 1);
        assert_eq!(machine.tracker().head_move_count(), 0);
    }

    #[test]
    fn test_reset_restores_initial_configuration() {
        let mut machine = TuringMachine::with_config(flip_and_halt(), fast_config());
        machine.reset("0");
        machine.run().unwrap();

        machine.reset("0");

        assert_eq!(machine.state(), INITIAL_STATE);
        assert_eq!(machine.head(), 0);
        assert_eq!(machine.tape().render(), "0");
        assert!(machine.last_rule().is_none());
        assert_eq!(machine.tracker().step_count(), 0);
        assert_eq!(machine.tracker().head_move_count(), 0);
        assert_eq!(machine.tracker().path(), &[INITIAL_STATE]);
    }

    #[test]
    fn test_run_with_observes_every_step() {
        let mut machine = TuringMachine::with_config(flip_and_halt(), fast_config());
        machine.reset("0");

        let mut snapshots = Vec::new();
        machine.run_with(|s| snapshots.push(s.clone())).unwrap();

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].state, 2);
        assert_eq!(snapshots[0].tape, "1");
        assert!(!snapshots[0].halted);
        assert_eq!(snapshots[1].state, 0);
        assert_eq!(snapshots[1].tape, "1_");
        assert!(snapshots[1].halted);
        assert_eq!(snapshots[1].rule.unwrap().next_state, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut machine = TuringMachine::with_config(flip_and_halt(), fast_config());
        machine.reset("0");
        machine.step().unwrap();

        let json = serde_json::to_string(&machine.snapshot()).unwrap();
        assert!(json.contains("\"state\":2"));
        assert!(json.contains("\"tape\":\"1\""));
    }

    #[test]
    fn test_negative_states_are_legal() {
        let table = RuleTable::new(vec![
            rule(1, Symbol::Wildcard, -1, Write::Unchanged, Direction::Right),
            rule(-1, Symbol::Wildcard, 0, Write::Unchanged, Direction::Stay),
        ]);
        let mut machine = TuringMachine::with_config(table, fast_config());
        machine.reset("a");

        machine.step().unwrap();
        assert_eq!(machine.state(), -1);

        machine.step().unwrap();
        assert!(machine.is_halted());
        assert_eq!(machine.tracker().path(), &[1, -1, 0]);
    }
}
