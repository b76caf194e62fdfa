#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the busy_since tool.
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! is impractical - it requires spawning subprocesses and checking exit codes.

use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use busy_since::{RunInput, run};

/// Reports the percentage of time the host processor spent busy since the previous
/// invocation, carrying the sample between runs in the given cookie file.
#[derive(FromArgs)]
struct Args {
    /// path of the cookie file that holds the previous sample
    #[argh(positional)]
    cookie_file: PathBuf,

    /// also report the average current core frequency before the percentage
    #[argh(switch)]
    mhz: bool,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    env_logger::init();

    let env_args: Vec<String> = std::env::args().collect();
    let str_args: Vec<&str> = env_args.iter().map(String::as_str).collect();

    let program_name = str_args
        .first()
        .expect("std::env::args() always provides at least the program name");

    // Every early exit, including --help, routes usage text to stderr and exits nonzero;
    // only a run that printed a percentage exits with success.
    let args: Args = match Args::from_args(&[program_name], str_args.get(1..).unwrap_or(&[])) {
        Ok(args) => args,
        Err(early_exit) => {
            eprintln!("{}", early_exit.output);
            return ExitCode::FAILURE;
        }
    };

    let input = RunInput {
        cookie_path: args.cookie_file,
        sample_frequency: args.mhz,
    };

    match run(&input) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
