//! ucds-bench - build/run orchestration for the UCDS benchmark suite
//!
//! # About
//! `ucds-bench` drives the C programs of the UCDS (Ultra Compressed Diagonal
//! Storage) benchmark collection: matrix-vector timing runs, a conjugate
//! gradient solver, correctness tests and the OpenCL kernels (SAXPY, dot
//! product, diagonal matrix multiply).
//!
//! For every benchmark suite it enumerates the full grid of compiler options
//! (optimization level `-O0`..`-Ofast`, OpenMP, loop unrolling, the
//! wide-float define), compiles one executable per combination into the
//! suite's output directory, and later sweeps those executables over doubling
//! input sizes. The executables encode their option combination in their
//! file name, so a built suite can always be swept without further
//! bookkeeping.
//!
//! # Quickstart
//! ## Pre-requisites
//! A C compiler (`gcc` by default) must be on the `PATH`, and the UCDS C
//! sources must sit in the working directory. The OpenCL suites additionally
//! need an OpenCL library to link against.
//!
//! ## Build
//! As any Rust-based project, `ucds-bench` is built and run with `cargo`:
//! ```sh
//! cargo build --release
//! ```
//!
//! ## Help
//! To see the help usage:
//! ```sh
//! cargo run -- help
//!
//! Build and run orchestration for the UCDS benchmark programs.
//!
//! Usage: ucds-bench [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build  Compile every option variant of a benchmark suite
//!   run    Sweep a suite's executables over doubling input sizes
//!   list   Show the known suites, their variant counts and sweep defaults
//!   help   Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -c, --compiler <PATH>  Override the C compiler used for builds
//!   -s, --setup <PATH>     Override the environment setup script run before
//!                          Intel builds
//!   -n, --dry-run          Print the commands that would be spawned instead
//!                          of executing them
//!   -h, --help             Print help (see a summary with '-h')
//! ```
//!
//! # Example run
//! To compile all forty variants of the conjugate-gradient timing suite and
//! sweep them from 1024 up to 8192 rows:
//! ```sh
//! cargo run --release -- build cg
//! cargo run --release -- run cg 1024 8193 1
//! ```

pub mod cli;
pub mod consts;
pub mod drivers;
pub mod suites;
pub mod utils;
pub mod variants;

use crate::cli::{CliArgs, Command};

use clap::Parser;

use std::process;

fn main() {
    let args = CliArgs::parse();

    let result = match args.command {
        Command::Build { .. } => drivers::build(args),
        Command::Run { .. } => drivers::sweep(args),
        Command::List => {
            drivers::list();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("ucds-bench: {err}");
        process::exit(1);
    }
}
