//! Command-line front-end: loads a flat binary image, steps the hart
//! until it halts or traps, and prints a per-step trace.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use rvemu::bus::BusError;
use rvemu::dram::DRAM_SIZE;
use rvemu::{format, Hart, StepOutcome, Trap};

const ANSI_BLUE: &str = "\x1b[34m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Parser, Debug)]
#[command(name = "rvemu", about = "A user-mode RV64I(MA) functional emulator")]
struct Args {
    /// Path to a flat binary image loaded at the DRAM base.
    path: PathBuf,

    /// Suppress the per-step trace and register dump.
    #[arg(short, long)]
    quiet: bool,

    /// Stop after at most this many steps (default: unbounded).
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image is {len} bytes, larger than the {limit}-byte DRAM region")]
    ImageTooLarge { len: u64, limit: u64 },
    #[error(transparent)]
    Trap(#[from] Trap),
}

fn exit_code(result: &Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::from(0),
        Err(CliError::Io { .. }) | Err(CliError::ImageTooLarge { .. }) => ExitCode::from(2),
        Err(CliError::Trap(_)) => ExitCode::from(3),
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let image = fs::read(&args.path).map_err(|source| CliError::Io {
        path: args.path.clone(),
        source,
    })?;
    if image.len() as u64 > DRAM_SIZE {
        return Err(CliError::ImageTooLarge {
            len: image.len() as u64,
            limit: DRAM_SIZE,
        });
    }

    let mut hart = Hart::new();
    hart.load_image(&image).map_err(|e: BusError| {
        CliError::Trap(Trap::Execute(e.into()))
    })?;

    let mut steps = 0u64;
    loop {
        if let Some(max) = args.max_steps {
            if steps >= max {
                break;
            }
        }
        let pc_before = hart.pc;
        let word = hart
            .bus
            .read(pc_before, rvemu::dram::Wordsize::Word)
            .map_err(|e| CliError::Trap(Trap::Fetch(e)))?;
        match hart.step()? {
            StepOutcome::Halt => break,
            StepOutcome::Continue => {
                steps += 1;
                if !args.quiet {
                    let instr = rvemu::decode::decode(word as u32)
                        .expect("step() succeeded so decode must too");
                    let mnemonic = rvemu::decode::mnemonic(&instr);
                    print!(
                        "{ANSI_BLUE}{}{ANSI_RESET}",
                        format::dump(&hart.registers, pc_before, mnemonic)
                    );
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // clap's own exit codes don't distinguish "argument error"
            // from this crate's other failure modes; report the error
            // ourselves and use the spec's exit code 1 for it.
            eprintln!("{ANSI_RED}{e}{ANSI_RESET}");
            return ExitCode::from(1);
        }
    };
    let result = run(&args);
    if let Err(e) = &result {
        eprintln!("{ANSI_RED}error: {e}{ANSI_RESET}");
    }
    exit_code(&result)
}
