mod keypress;
mod report;

use clap::Parser;
use halftape::{Config, MachineError, RuleLoader, TuringMachine};
use keypress::Key;
use report::Reporter;
use std::path::Path;
use std::process;
use std::time::Duration;

/// Simulates the action of a half-tape Turing machine.
#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Path of a file containing rule quintuples
    path: String,

    /// Input string loaded onto the tape
    input: String,

    /// Display the matched rule alongside each step
    #[clap(long)]
    rules: bool,

    /// Delay between steps, in seconds
    #[clap(long, default_value_t = 0.25)]
    step_time: f64,

    /// Remove the delay between steps (equivalent to --step-time=0)
    #[clap(long)]
    fast: bool,

    /// Hide intermediate states
    #[clap(long)]
    silent: bool,

    /// Display a single, continuously changing state line
    #[clap(long)]
    live: bool,

    /// Stepping mode: press any key to advance to the next step
    #[clap(short = 's', long = "step")]
    stepping_mode: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MachineError> {
    let rules = RuleLoader::load_rules(Path::new(&cli.path))?;

    // Silent runs skip the pacing delay; there is nothing to watch.
    let step_time = if cli.fast || cli.silent {
        0.0
    } else {
        cli.step_time
    };
    let config = Config {
        step_delay: Duration::from_secs_f64(step_time),
    };

    let mut machine = TuringMachine::with_config(rules, config);
    machine.reset(&cli.input);

    let reporter = Reporter {
        display_rules: cli.rules,
        display_path: true,
        silent: cli.silent,
        // Overwriting with carriage returns only makes sense on a terminal.
        live: cli.live && atty::is(atty::Stream::Stdout),
    };

    // The starting configuration, before any transition.
    reporter.print_state(&machine.snapshot(), false);

    if cli.stepping_mode && !cli.silent {
        step_loop(&mut machine, &reporter)?;
    } else {
        machine.run_with(|snapshot| {
            if !snapshot.halted {
                reporter.print_state(snapshot, true);
            }
        })?;
    }

    if machine.is_halted() {
        reporter.print_halt(&machine);
    }

    Ok(())
}

/// Advances the machine one step per key press until it halts or the user
/// interrupts with Ctrl+C.
fn step_loop(machine: &mut TuringMachine, reporter: &Reporter) -> Result<(), MachineError> {
    loop {
        machine.step()?;

        if machine.is_halted() {
            return Ok(());
        }

        reporter.print_state(&machine.snapshot(), true);

        match keypress::keypress() {
            Ok(Key::Interrupt) => process::exit(130),
            Ok(_) => {}
            Err(e) => return Err(MachineError::FileError(format!("key input failed: {e}"))),
        }
    }
}
