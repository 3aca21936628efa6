//! Sweep driver: runs pre-built executables over doubling input sizes.
//!
//! For each variant of the suite's option grid, the executable path is
//! printed once and then invoked for every size of the geometric
//! progression. The external programs own their own timing and output; this
//! driver only sequences the invocations.

use crate::cli::{CliArgs, Command};
use crate::utils::GeometricSizes;
use crate::variants;

use std::{io, path::Path};

/// Sweeps every executable of the selected suite.
///
/// Sweep parameters omitted on the command line fall back to the suite's
/// hardcoded defaults.
pub fn sweep(args: CliArgs) -> io::Result<()> {
    let (suite, min_size, max_size, iterations) = match args.command {
        Command::Run {
            suite,
            min_size,
            max_size,
            iterations,
        } => (suite.suite(), min_size, max_size, iterations),
        _ => unreachable!(),
    };

    let min_size = min_size.unwrap_or(suite.defaults.min_size);
    let max_size = max_size.unwrap_or(suite.defaults.max_size);
    let iterations = iterations.unwrap_or(suite.defaults.iterations);

    for variant in variants::enumerate(suite.axes) {
        let executable = format!(
            "./{}{}",
            suite.out_dir,
            variant.executable_name(suite.base_name)
        );
        println!("{executable}");

        for size in GeometricSizes::new(min_size, max_size) {
            for argv in suite.run_args.invocations(size, iterations) {
                super::dispatch(Path::new(&executable), &argv, args.dry_run)?;
            }
        }
    }

    Ok(())
}
