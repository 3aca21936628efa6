//! Crate-level constants.

/// C compiler used by the GNU toolchain suites.
pub const GNU_COMPILER: &str = "gcc";

/// Intel C compiler used by the `icc-test` suite.
pub const INTEL_COMPILER: &str = "/opt/intel/bin/icc";

/// Environment setup script sourced before the first Intel compile.
pub const INTEL_SETUP_SCRIPT: &str =
    "/opt/intel/composer_xe_2013.4.183/bin/compilervars.sh";

/// Architecture argument handed to the Intel setup script.
pub const INTEL_SETUP_ARCH: &str = "intel64";

/// Warning flags passed to every compile, regardless of variant.
pub const WARN_FLAGS: [&str; 2] = ["-Wall", "-Wno-unknown-pragmas"];

/// Compiler switch enabling OpenMP parallel loops.
pub const OPENMP_FLAG: &str = "-fopenmp";

/// Compiler switch enabling loop unrolling.
pub const UNROLL_FLAG: &str = "-funroll-loops";

/// Preprocessor define widening the benchmark's floating-point type to
/// double precision.
pub const WIDE_FLOAT_DEFINE: &str = "-DBIGFLOAT";

/// Link libraries for the plain CPU suites.
pub const POSIX_LIBS: &[&str] = &["-lrt", "-lm"];

/// Link libraries for the OpenCL suites.
pub const OPENCL_LIBS: &[&str] = &["-lrt", "-lm", "-lOpenCL"];
