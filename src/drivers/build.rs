//! Build driver: the compiler option enumerator.
//!
//! One compiler invocation per variant of the suite's option grid. The
//! argument vector is a fixed preamble, the variant's flags, the suite's
//! translation units, the derived output path and the link libraries, in
//! that order.

use crate::cli::{CliArgs, Command};
use crate::consts;
use crate::suites::Toolchain;
use crate::utils;
use crate::variants;

use std::{
    io,
    path::{Path, PathBuf},
};

/// Compiles every option variant of the selected suite.
pub fn build(args: CliArgs) -> io::Result<()> {
    let suite = match args.command {
        Command::Build { suite } => suite.suite(),
        _ => unreachable!(),
    };

    utils::ensure_path_exists(Path::new(suite.out_dir))?;

    let compiler: PathBuf = match args.compiler {
        Some(path) => path,
        None => suite.toolchain.compiler().into(),
    };

    // The Intel toolchain wants its environment script run first.
    if suite.toolchain == Toolchain::Intel {
        let setup = match args.setup {
            Some(ref path) => path.display().to_string(),
            None => consts::INTEL_SETUP_SCRIPT.to_string(),
        };
        super::dispatch(
            Path::new("/bin/sh"),
            &[setup, consts::INTEL_SETUP_ARCH.to_string()],
            args.dry_run,
        )?;
    }

    for variant in variants::enumerate(suite.axes) {
        let out_path = format!("{}{}", suite.out_dir, variant.executable_name(suite.base_name));

        let mut argv: Vec<String> = Vec::new();
        argv.extend(consts::WARN_FLAGS.iter().map(|flag| flag.to_string()));
        argv.extend(variant.compiler_flags().iter().map(|flag| flag.to_string()));
        argv.extend(suite.sources.iter().map(|source| source.to_string()));
        argv.push("-o".to_string());
        argv.push(out_path);
        argv.extend(suite.libs.iter().map(|lib| lib.to_string()));

        super::dispatch(&compiler, &argv, args.dry_run)?;
    }

    Ok(())
}
