//! Benchmark suite descriptors.
//!
//! Each suite couples a family of C sources with the option axes it is built
//! over, the directory its executables land in, and the sweep parameters its
//! runner defaults to. The descriptors are the single source of truth shared
//! by the build and sweep drivers.

use crate::consts;
use crate::variants::Axes;

/// Which C compiler family builds a suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toolchain {
    Gnu,
    Intel,
}

impl Toolchain {
    /// Default compiler executable for the toolchain.
    pub fn compiler(self) -> &'static str {
        match self {
            Self::Gnu => consts::GNU_COMPILER,
            Self::Intel => consts::INTEL_COMPILER,
        }
    }
}

/// Sweep parameters used when the command line supplies none.
#[derive(Clone, Copy, Debug)]
pub struct SweepDefaults {
    pub min_size: u64,
    pub max_size: u64,
    pub iterations: u64,
}

/// Shape of the positional arguments handed to a suite's executables.
///
/// The external programs own the meaning of these arguments; the runner only
/// reproduces the argument lists their authors call them with.
#[derive(Clone, Copy, Debug)]
pub enum RunArgs {
    /// `<size> <iterations>`
    SizeIters,
    /// `<size> <iterations>` followed by fixed trailing arguments.
    SizeItersTrailing(&'static [&'static str]),
    /// `<size> <iterations> <size>` followed by fixed trailing arguments.
    SizeItersSizeTrailing(&'static [&'static str]),
    /// `<size> <diagonals> <iterations> 1`, once per diagonal count.
    SizePerDiagonal(&'static [u64]),
}

impl RunArgs {
    /// Argument lists to spawn for a single sweep size, in order.
    pub fn invocations(&self, size: u64, iterations: u64) -> Vec<Vec<String>> {
        match self {
            Self::SizeIters => vec![vec![size.to_string(), iterations.to_string()]],
            Self::SizeItersTrailing(trailing) => {
                let mut argv = vec![size.to_string(), iterations.to_string()];
                argv.extend(trailing.iter().map(|arg| arg.to_string()));
                vec![argv]
            }
            Self::SizeItersSizeTrailing(trailing) => {
                let mut argv = vec![
                    size.to_string(),
                    iterations.to_string(),
                    size.to_string(),
                ];
                argv.extend(trailing.iter().map(|arg| arg.to_string()));
                vec![argv]
            }
            Self::SizePerDiagonal(diagonals) => diagonals
                .iter()
                .map(|diag| {
                    vec![
                        size.to_string(),
                        diag.to_string(),
                        iterations.to_string(),
                        "1".to_string(),
                    ]
                })
                .collect(),
        }
    }
}

/// Everything needed to build and sweep one benchmark suite.
pub struct Suite {
    /// Name used on the command line and in listings.
    pub name: &'static str,
    /// Stem of every executable name; variant prefixes and the level token
    /// wrap around it.
    pub base_name: &'static str,
    /// C translation units handed to the compiler, in order.
    pub sources: &'static [&'static str],
    /// Directory the executables are created in, with trailing slash.
    pub out_dir: &'static str,
    /// Link libraries appended after the output path.
    pub libs: &'static [&'static str],
    /// Option axes the suite is enumerated over.
    pub axes: Axes,
    /// Compiler family building the suite.
    pub toolchain: Toolchain,
    /// Sweep parameters when none are given on the command line.
    pub defaults: SweepDefaults,
    /// Argument shape of the suite's executables.
    pub run_args: RunArgs,
}

/// Timing benchmark for the UCDS matrix-vector routines.
pub static UCDS: Suite = Suite {
    name: "ucds",
    base_name: "ucds",
    sources: &["ucds.c", "projcommon.c", "runucds.c"],
    out_dir: "timeucds/",
    libs: consts::POSIX_LIBS,
    axes: Axes::MP_UR,
    toolchain: Toolchain::Gnu,
    defaults: SweepDefaults {
        min_size: 16384,
        max_size: 2097152,
        iterations: 100,
    },
    run_args: RunArgs::SizeIters,
};

/// Correctness tests for UCDS and the conjugate-gradient solver.
pub static TEST: Suite = Suite {
    name: "test",
    base_name: "tucds",
    sources: &["ucds.c", "projcommon.c", "testucds.c"],
    out_dir: "testbin/",
    libs: consts::POSIX_LIBS,
    axes: Axes::MP_UR_WIDE,
    toolchain: Toolchain::Gnu,
    defaults: SweepDefaults {
        min_size: 64,
        max_size: 65536,
        iterations: 1,
    },
    run_args: RunArgs::SizeIters,
};

/// The correctness tests again, built with the Intel compiler.
pub static ICC_TEST: Suite = Suite {
    name: "icc-test",
    base_name: "itucds",
    sources: &["ucds.c", "projcommon.c", "testucds.c"],
    out_dir: "icctest/",
    libs: consts::POSIX_LIBS,
    axes: Axes::MP_UR,
    toolchain: Toolchain::Intel,
    defaults: SweepDefaults {
        min_size: 64,
        max_size: 65536,
        iterations: 1,
    },
    run_args: RunArgs::SizeIters,
};

/// Timing benchmark for the conjugate-gradient solver.
pub static CG: Suite = Suite {
    name: "cg",
    base_name: "ucdscg",
    sources: &["ucds.c", "projcommon.c", "runconjgrad.c"],
    out_dir: "timecg/",
    libs: consts::POSIX_LIBS,
    axes: Axes::MP_UR_WIDE,
    toolchain: Toolchain::Gnu,
    defaults: SweepDefaults {
        min_size: 1024,
        max_size: 8193,
        iterations: 1,
    },
    run_args: RunArgs::SizeIters,
};

/// Timing benchmark for the OpenCL SAXPY kernel.
pub static SAXPY_CL: Suite = Suite {
    name: "saxpy-cl",
    base_name: "saxpycl",
    sources: &["saxpy.c", "openclstuff.c", "projcommon.c"],
    out_dir: "timesaxpycl/",
    libs: consts::OPENCL_LIBS,
    axes: Axes::MP_UR_WIDE,
    toolchain: Toolchain::Gnu,
    defaults: SweepDefaults {
        min_size: 8192,
        max_size: 8192,
        iterations: 20,
    },
    run_args: RunArgs::SizeItersTrailing(&["22", "True", "o"]),
};

/// Timing benchmark for the OpenCL dot-product reductions.
pub static DOTPRODUCT_CL: Suite = Suite {
    name: "dotproduct-cl",
    base_name: "dotproductcl",
    sources: &["dotproductcl.c", "openclstuff.c", "projcommon.c"],
    out_dir: "timedotproductcl/",
    libs: consts::OPENCL_LIBS,
    axes: Axes::MP_UR_WIDE,
    toolchain: Toolchain::Gnu,
    defaults: SweepDefaults {
        min_size: 256,
        max_size: 512,
        iterations: 512,
    },
    run_args: RunArgs::SizeItersSizeTrailing(&["256", "256"]),
};

/// Timing benchmark for the OpenCL diagonal matrix multiply.
pub static DIAGMATRIX_CL: Suite = Suite {
    name: "diagmatrix-cl",
    base_name: "diagmatrixcl",
    sources: &["diagmatrixcl.c", "openclstuff.c", "projcommon.c"],
    out_dir: "timediagmatrixcl/",
    libs: consts::OPENCL_LIBS,
    axes: Axes::MP_UR_WIDE,
    toolchain: Toolchain::Gnu,
    defaults: SweepDefaults {
        min_size: 10,
        max_size: 10,
        iterations: 10,
    },
    run_args: RunArgs::SizePerDiagonal(&[1, 3, 5, 7, 9, 11, 13]),
};

/// Every known suite, in listing order.
pub static ALL: [&Suite; 7] = [
    &UCDS,
    &TEST,
    &ICC_TEST,
    &CG,
    &SAXPY_CL,
    &DOTPRODUCT_CL,
    &DIAGMATRIX_CL,
];
