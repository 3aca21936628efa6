//! Compiler option variants and the executable naming convention.
//!
//! A variant is one point in a suite's option grid: an optimization level
//! crossed with the OpenMP, loop-unrolling and wide-float toggles. Both the
//! compiler flags and the executable name are derived here and nowhere else,
//! so the names the build driver produces are by construction the names the
//! sweep driver looks for.

use crate::consts;

use std::fmt;

/// Compiler optimization levels tried for every suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptLevel {
    O0,
    O1,
    O2,
    O3,
    Fast,
}

impl OptLevel {
    /// Every level, in the order the enumeration walks them.
    pub const ALL: [Self; 5] = [Self::O0, Self::O1, Self::O2, Self::O3, Self::Fast];

    /// Filename token appended after the suite base name.
    pub fn token(self) -> &'static str {
        match self {
            Self::O0 => "0",
            Self::O1 => "1",
            Self::O2 => "2",
            Self::O3 => "3",
            Self::Fast => "fast",
        }
    }

    /// The `-O` flag handed to the compiler.
    pub fn flag(self) -> &'static str {
        match self {
            Self::O0 => "-O0",
            Self::O1 => "-O1",
            Self::O2 => "-O2",
            Self::O3 => "-O3",
            Self::Fast => "-Ofast",
        }
    }
}

impl fmt::Display for OptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Which option axes a suite enumerates besides the optimization level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axes {
    pub openmp: bool,
    pub unroll: bool,
    pub wide_float: bool,
}

impl Axes {
    /// OpenMP and loop unrolling only.
    pub const MP_UR: Self = Self {
        openmp: true,
        unroll: true,
        wide_float: false,
    };

    /// OpenMP, loop unrolling and the wide-float define.
    pub const MP_UR_WIDE: Self = Self {
        openmp: true,
        unroll: true,
        wide_float: true,
    };

    /// Number of toggle combinations per optimization level.
    pub fn combinations(self) -> usize {
        1 << (self.openmp as usize + self.unroll as usize + self.wide_float as usize)
    }
}

/// One point in a suite's option grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant {
    pub opt: OptLevel,
    pub openmp: bool,
    pub unroll: bool,
    pub wide_float: bool,
}

impl Variant {
    /// Variant-specific compiler flags.
    ///
    /// Order is fixed: wide-float define, OpenMP, the `-O` level, unrolling.
    pub fn compiler_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::with_capacity(4);
        if self.wide_float {
            flags.push(consts::WIDE_FLOAT_DEFINE);
        }
        if self.openmp {
            flags.push(consts::OPENMP_FLAG);
        }
        flags.push(self.opt.flag());
        if self.unroll {
            flags.push(consts::UNROLL_FLAG);
        }
        flags
    }

    /// Executable name for this variant over a suite base name.
    ///
    /// The `d`, `mp` and `ur` prefixes are concatenated in that fixed order,
    /// then the base name, then the optimization-level token. For example
    /// the fully-toggled `-Ofast` variant of base `ucdscg` is named
    /// `dmpurucdscgfast`.
    pub fn executable_name(&self, base: &str) -> String {
        let mut name = String::with_capacity(base.len() + 9);
        if self.wide_float {
            name.push('d');
        }
        if self.openmp {
            name.push_str("mp");
        }
        if self.unroll {
            name.push_str("ur");
        }
        name.push_str(base);
        name.push_str(self.opt.token());
        name
    }
}

/// Enumerates every variant of the given axes exactly once, optimization
/// level outermost.
pub fn enumerate(axes: Axes) -> Vec<Variant> {
    let mut variants = Vec::with_capacity(OptLevel::ALL.len() * axes.combinations());
    for opt in OptLevel::ALL {
        for &wide_float in toggles(axes.wide_float) {
            for &openmp in toggles(axes.openmp) {
                for &unroll in toggles(axes.unroll) {
                    variants.push(Variant {
                        opt,
                        openmp,
                        unroll,
                        wide_float,
                    });
                }
            }
        }
    }
    variants
}

/// Both toggle states when an axis is present, only "off" when it is not.
fn toggles(present: bool) -> &'static [bool] {
    if present {
        &[true, false]
    } else {
        &[false]
    }
}
