//! Runtime-dispatched SGEMM microkernels.
//!
//! | Level | Instruction set | Tile | Variants |
//! |-------|-----------------|------|----------|
//! | [`SimdLevel::Avx2Fma`] | AVX2 + FMA (x86_64) | 4×24, 4×16 | N24, N16 |
//! | [`SimdLevel::Portable`] | scalar | row-at-a-time | N24, N16 |
//!
//! [`multiply_accumulate`] is the single safe entry point: it validates
//! buffer lengths, detects CPU features once per call, and routes to the
//! widest available kernel. The fallback keeps the exact same accumulate
//! contract, so callers never observe which path ran except through timing.

mod detect;
mod kernels;

pub use detect::{simd_level, SimdLevel};

use crate::variant::KernelVariant;

/// Name of the kernel [`multiply_accumulate`] dispatches to on this CPU.
pub fn kernel_label(variant: KernelVariant) -> &'static str {
    match (simd_level(), variant) {
        (SimdLevel::Avx2Fma, KernelVariant::N24) => "sgemm_4x24_avx2",
        (SimdLevel::Avx2Fma, KernelVariant::N16) => "sgemm_4x16_avx2",
        (SimdLevel::Portable, KernelVariant::N24) => "sgemm_n24_portable",
        (SimdLevel::Portable, KernelVariant::N16) => "sgemm_n16_portable",
    }
}

/// Compute `C += A × B` with the selected kernel variant.
///
/// A is `m × k`, B is `k × n`, C is `m × n`, all row-major, with `n` fixed
/// by `variant`. The kernel accumulates: zero C first for a plain product.
/// Repeated invocation on the same buffers is valid and is exactly what the
/// measurement loop does.
///
/// # Panics
///
/// Panics if any slice length disagrees with the stated dimensions.
pub fn multiply_accumulate(
    variant: KernelVariant,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    k: usize,
) {
    let n = variant.n();
    assert_eq!(a.len(), m * k, "A dimensions mismatch");
    assert_eq!(b.len(), k * n, "B dimensions mismatch");
    assert_eq!(c.len(), m * n, "C dimensions mismatch");

    #[cfg(target_arch = "x86_64")]
    {
        if simd_level() == SimdLevel::Avx2Fma {
            // Safety: feature presence checked above; slice lengths checked above.
            unsafe {
                match variant {
                    KernelVariant::N24 => {
                        kernels::sgemm_4x24_avx2(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), m, k)
                    }
                    KernelVariant::N16 => {
                        kernels::sgemm_4x16_avx2(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), m, k)
                    }
                }
            }
            return;
        }
    }

    kernels::sgemm_portable(a, b, c, m, n, k);
}
