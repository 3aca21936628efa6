//! Build and sweep drivers.
//!
//! This module provides the two units of work the tool performs: compiling
//! every option variant of a suite, and sweeping the resulting executables
//! over doubling input sizes. Both walk the same variant enumeration, so the
//! executable names they derive always agree.
//!
//! Every subprocess is spawned sequentially and waited on to completion. A
//! child that exits with a non-zero status is reported on stderr and the
//! enumeration continues; only a failure to spawn at all (a missing compiler
//! or a suite that was never built) aborts the driver.

mod build;
mod sweep;

pub use build::build;
pub use sweep::sweep;

use crate::suites;
use crate::variants;

use std::{io, path::Path, process::Command};

/// Prints the known suites, their variant counts and sweep defaults.
pub fn list() {
    println!(
        "{:<14} {:<19} {:>8}  {}",
        "suite", "out dir", "variants", "default sweep"
    );
    for suite in suites::ALL {
        let count = variants::enumerate(suite.axes).len();
        println!(
            "{:<14} {:<19} {:>8}  {} {} {}",
            suite.name,
            suite.out_dir,
            count,
            suite.defaults.min_size,
            suite.defaults.max_size,
            suite.defaults.iterations,
        );
    }
}

/// Spawns one blocking subprocess, or prints it under `--dry-run`.
///
/// A non-zero exit status is reported and swallowed; the inability to spawn
/// the program at all propagates.
fn dispatch(program: &Path, args: &[String], dry_run: bool) -> io::Result<()> {
    if dry_run {
        println!("{} {}", program.display(), args.join(" "));
        return Ok(());
    }

    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        eprintln!("warning: {} exited with {}", program.display(), status);
    }
    Ok(())
}
