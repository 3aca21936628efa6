//! Command-Line Interface related code.
//!
//! This module handles the parsing of CLI arguments using the [`clap`][1] crate.
//! It defines the available runtime options and subcommands.
//!
//! [1]: https://crates.io/crates/clap

use crate::suites::{self, Suite};

use clap::{Parser, Subcommand, ValueEnum};

use std::path::PathBuf;

/// Build and run orchestration for the UCDS benchmark programs.
///
/// Enumerates compiler option combinations (optimization level, OpenMP, loop
/// unrolling, wide floats) for each benchmark suite, compiles one executable
/// per combination, and sweeps the resulting executables over doubling input
/// sizes.
#[derive(Clone, Debug, Parser)]
pub struct CliArgs {
    /// Override the C compiler used for builds.
    #[arg(short, long, value_name = "PATH")]
    pub compiler: Option<PathBuf>,

    /// Override the environment setup script run before Intel builds.
    #[arg(short, long, value_name = "PATH")]
    pub setup: Option<PathBuf>,

    /// Print the commands that would be spawned instead of executing them.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// List of available subcommands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Compile every option variant of a benchmark suite.
    Build {
        /// Suite to compile.
        #[arg(value_enum)]
        suite: SuiteId,
    },
    /// Sweep a suite's executables over doubling input sizes.
    Run {
        /// Suite to run.
        #[arg(value_enum)]
        suite: SuiteId,

        /// Smallest input size; the suite's default if omitted.
        #[arg(value_name = "MIN_SIZE")]
        min_size: Option<u64>,

        /// Largest input size; the suite's default if omitted.
        #[arg(value_name = "MAX_SIZE")]
        max_size: Option<u64>,

        /// Iteration count passed through to the executables.
        #[arg(value_name = "ITERATIONS")]
        iterations: Option<u64>,
    },
    /// Show the known suites, their variant counts and sweep defaults.
    List,
}

/// Names the benchmark suites carry on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SuiteId {
    Ucds,
    Test,
    IccTest,
    Cg,
    SaxpyCl,
    DotproductCl,
    DiagmatrixCl,
}

impl SuiteId {
    /// Descriptor of the selected suite.
    pub fn suite(self) -> &'static Suite {
        match self {
            Self::Ucds => &suites::UCDS,
            Self::Test => &suites::TEST,
            Self::IccTest => &suites::ICC_TEST,
            Self::Cg => &suites::CG,
            Self::SaxpyCl => &suites::SAXPY_CL,
            Self::DotproductCl => &suites::DOTPRODUCT_CL,
            Self::DiagmatrixCl => &suites::DIAGMATRIX_CL,
        }
    }
}
