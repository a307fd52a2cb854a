//! Kernel variant selection.

use std::fmt;

use thiserror::Error;

/// Rejected kernel-variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported kernel variant {0}: n must be 24 or 16")]
pub struct UnsupportedVariant(pub usize);

/// Selects a compiled microkernel by its fixed output-tile width.
///
/// Each variant computes `C += A × B` for a `k`-deep contraction onto an
/// `m × n` output with `n` fixed at compile time. The variant decides both
/// which kernel runs and the width of the B and C buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelVariant {
    /// 16-column output tile.
    N16,
    /// 24-column output tile.
    N24,
}

impl KernelVariant {
    /// Fixed output-tile width `n` of this variant.
    pub const fn n(self) -> usize {
        match self {
            KernelVariant::N16 => 16,
            KernelVariant::N24 => 24,
        }
    }
}

impl TryFrom<usize> for KernelVariant {
    type Error = UnsupportedVariant;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            16 => Ok(KernelVariant::N16),
            24 => Ok(KernelVariant::N24),
            other => Err(UnsupportedVariant(other)),
        }
    }
}

impl fmt::Display for KernelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_selectors_round_trip() {
        assert_eq!(KernelVariant::try_from(16), Ok(KernelVariant::N16));
        assert_eq!(KernelVariant::try_from(24), Ok(KernelVariant::N24));
        assert_eq!(KernelVariant::N16.n(), 16);
        assert_eq!(KernelVariant::N24.n(), 24);
    }

    #[test]
    fn unsupported_selector_is_rejected() {
        assert_eq!(KernelVariant::try_from(8), Err(UnsupportedVariant(8)));
        assert_eq!(KernelVariant::try_from(0), Err(UnsupportedVariant(0)));
        assert_eq!(
            UnsupportedVariant(8).to_string(),
            "unsupported kernel variant 8: n must be 24 or 16"
        );
    }
}
