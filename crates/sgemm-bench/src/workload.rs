//! Problem dimensions and variant selection for one run.

use sgemm_kernels::KernelVariant;

/// One measured workload: `C (m×n) += A (m×k) × B (k×n)`.
///
/// The harness handles exactly one workload per invocation; operand buffers
/// are sized from these dimensions once and never resized.
#[derive(Debug, Clone, Copy)]
pub struct Workload {
    pub m: usize,
    pub k: usize,
    pub variant: KernelVariant,
}

impl Workload {
    /// # Panics
    ///
    /// Panics if `m` or `k` is zero; the CLI rejects those before this point.
    pub fn new(m: usize, k: usize, variant: KernelVariant) -> Self {
        assert!(m >= 1 && k >= 1, "dimensions must be positive");
        Self { m, k, variant }
    }

    /// Output-tile width fixed by the selected variant.
    pub fn n(&self) -> usize {
        self.variant.n()
    }

    /// Multiply-add operation count of a single kernel call: `2·m·k·n`.
    pub fn flops_per_call(&self) -> u64 {
        2 * self.m as u64 * self.k as u64 * self.n() as u64
    }

    /// Element count of the A operand.
    pub fn a_len(&self) -> usize {
        self.m * self.k
    }

    /// Element count of the B operand.
    pub fn b_len(&self) -> usize {
        self.k * self.n()
    }

    /// Element count of each result buffer.
    pub fn c_len(&self) -> usize {
        self.m * self.n()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flop_accounting() {
        let w = Workload::new(512, 512, KernelVariant::N24);
        assert_eq!(w.flops_per_call(), 2 * 512 * 512 * 24);
        assert_eq!(w.a_len(), 512 * 512);
        assert_eq!(w.b_len(), 512 * 24);
        assert_eq!(w.c_len(), 512 * 24);
    }

    #[test]
    fn minimal_dimensions_are_valid() {
        let w = Workload::new(1, 1, KernelVariant::N16);
        assert_eq!(w.flops_per_call(), 32);
        assert_eq!(w.c_len(), 16);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn zero_dimension_is_rejected() {
        Workload::new(0, 4, KernelVariant::N16);
    }
}
