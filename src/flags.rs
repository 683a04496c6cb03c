//! The three-bit heuristic flag set.
//!
//! Each extraction attempt runs with one immutable [`FlagSet`]. When an
//! attempt yields too little text the orchestrator asks for
//! [`FlagSet::degrade`], which clears exactly one flag in the fixed order
//! strip-unlikelys, weight-classes, clean-conditionally.

use std::fmt;
use std::ops::BitOr;

use serde::{Serialize, Serializer};

/// A set of heuristic flags controlling one extraction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet(u8);

impl FlagSet {
    /// Delete unlikely-looking elements during the pre-pass.
    pub const STRIP_UNLIKELYS: Self = Self(0x1);
    /// Adjust scores by class/id keyword weight.
    pub const WEIGHT_CLASSES: Self = Self(0x2);
    /// Remove noisy forms, tables, lists and divs from the result.
    pub const CLEAN_CONDITIONALLY: Self = Self(0x4);

    /// No heuristics active.
    pub const NONE: Self = Self(0);
    /// Every heuristic active.
    pub const ALL: Self = Self(0x1 | 0x2 | 0x4);

    /// Order in which flags are dropped on retry.
    const DEGRADE_ORDER: [Self; 3] = [
        Self::STRIP_UNLIKELYS,
        Self::WEIGHT_CLASSES,
        Self::CLEAN_CONDITIONALLY,
    ];

    /// Build a flag set from individual switches.
    #[must_use]
    pub const fn from_switches(strip_unlikelys: bool, weight_classes: bool, clean_conditionally: bool) -> Self {
        let mut bits = 0;
        if strip_unlikelys {
            bits |= Self::STRIP_UNLIKELYS.0;
        }
        if weight_classes {
            bits |= Self::WEIGHT_CLASSES.0;
        }
        if clean_conditionally {
            bits |= Self::CLEAN_CONDITIONALLY.0;
        }
        Self(bits)
    }

    /// Whether every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// This set with the flags of `other` cleared.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Flags for the next attempt, or `None` once every flag is clear.
    #[must_use]
    pub fn degrade(self) -> Option<Self> {
        Self::DEGRADE_ORDER
            .into_iter()
            .find(|flag| self.contains(*flag))
            .map(|flag| self.without(flag))
    }

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for FlagSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        let names = [
            (Self::STRIP_UNLIKELYS, "strip-unlikelys"),
            (Self::WEIGHT_CLASSES, "weight-classes"),
            (Self::CLEAN_CONDITIONALLY, "clean-conditionally"),
        ];
        let active: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&active.join("|"))
    }
}

impl Serialize for FlagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
