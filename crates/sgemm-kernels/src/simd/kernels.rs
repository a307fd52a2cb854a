//! Accumulating SGEMM microkernels.
//!
//! This module is the `unsafe` kernel zone. The functions here are called
//! from the safe dispatcher in [`super`], which has already validated buffer
//! lengths and CPU features.
//!
//! All kernels share one contract: `C += A × B` with A `m × k`, B `k × N`
//! and C `m × N`, all row-major f32, N fixed per kernel. They read existing
//! C contents and add into them, so callers that want a product rather than
//! an accumulation must zero C first.

#![allow(unsafe_code)]

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// AVX2/FMA kernel for the 24-column variant.
///
/// Works a 4-row × 24-column register tile per step: twelve 8-lane
/// accumulators stay resident while the contraction index streams through,
/// with a scalar broadcast per A element. Rows beyond the last multiple of
/// four fall through to a single-row tail with the same vector width.
///
/// # Safety
///
/// The caller must ensure AVX2 and FMA are available and that `a`, `b`, `c`
/// point to `m*k`, `k*24` and `m*24` valid f32 elements respectively.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2", enable = "fma")]
pub(crate) unsafe fn sgemm_4x24_avx2(
    a: *const f32,
    b: *const f32,
    c: *mut f32,
    m: usize,
    k: usize,
) {
    const N: usize = 24;
    unsafe {
        let mut i = 0;
        while i + 4 <= m {
            let r0 = a.add(i * k);
            let r1 = a.add((i + 1) * k);
            let r2 = a.add((i + 2) * k);
            let r3 = a.add((i + 3) * k);
            let c0 = c.add(i * N);
            let c1 = c.add((i + 1) * N);
            let c2 = c.add((i + 2) * N);
            let c3 = c.add((i + 3) * N);

            let mut acc00 = _mm256_loadu_ps(c0);
            let mut acc01 = _mm256_loadu_ps(c0.add(8));
            let mut acc02 = _mm256_loadu_ps(c0.add(16));
            let mut acc10 = _mm256_loadu_ps(c1);
            let mut acc11 = _mm256_loadu_ps(c1.add(8));
            let mut acc12 = _mm256_loadu_ps(c1.add(16));
            let mut acc20 = _mm256_loadu_ps(c2);
            let mut acc21 = _mm256_loadu_ps(c2.add(8));
            let mut acc22 = _mm256_loadu_ps(c2.add(16));
            let mut acc30 = _mm256_loadu_ps(c3);
            let mut acc31 = _mm256_loadu_ps(c3.add(8));
            let mut acc32 = _mm256_loadu_ps(c3.add(16));

            for kk in 0..k {
                let b0 = _mm256_loadu_ps(b.add(kk * N));
                let b1 = _mm256_loadu_ps(b.add(kk * N + 8));
                let b2 = _mm256_loadu_ps(b.add(kk * N + 16));

                let a0 = _mm256_set1_ps(*r0.add(kk));
                acc00 = _mm256_fmadd_ps(a0, b0, acc00);
                acc01 = _mm256_fmadd_ps(a0, b1, acc01);
                acc02 = _mm256_fmadd_ps(a0, b2, acc02);

                let a1 = _mm256_set1_ps(*r1.add(kk));
                acc10 = _mm256_fmadd_ps(a1, b0, acc10);
                acc11 = _mm256_fmadd_ps(a1, b1, acc11);
                acc12 = _mm256_fmadd_ps(a1, b2, acc12);

                let a2 = _mm256_set1_ps(*r2.add(kk));
                acc20 = _mm256_fmadd_ps(a2, b0, acc20);
                acc21 = _mm256_fmadd_ps(a2, b1, acc21);
                acc22 = _mm256_fmadd_ps(a2, b2, acc22);

                let a3 = _mm256_set1_ps(*r3.add(kk));
                acc30 = _mm256_fmadd_ps(a3, b0, acc30);
                acc31 = _mm256_fmadd_ps(a3, b1, acc31);
                acc32 = _mm256_fmadd_ps(a3, b2, acc32);
            }

            _mm256_storeu_ps(c0, acc00);
            _mm256_storeu_ps(c0.add(8), acc01);
            _mm256_storeu_ps(c0.add(16), acc02);
            _mm256_storeu_ps(c1, acc10);
            _mm256_storeu_ps(c1.add(8), acc11);
            _mm256_storeu_ps(c1.add(16), acc12);
            _mm256_storeu_ps(c2, acc20);
            _mm256_storeu_ps(c2.add(8), acc21);
            _mm256_storeu_ps(c2.add(16), acc22);
            _mm256_storeu_ps(c3, acc30);
            _mm256_storeu_ps(c3.add(8), acc31);
            _mm256_storeu_ps(c3.add(16), acc32);

            i += 4;
        }

        // Row tail: m % 4 leftover rows, one at a time.
        while i < m {
            let r0 = a.add(i * k);
            let c0 = c.add(i * N);

            let mut acc0 = _mm256_loadu_ps(c0);
            let mut acc1 = _mm256_loadu_ps(c0.add(8));
            let mut acc2 = _mm256_loadu_ps(c0.add(16));

            for kk in 0..k {
                let av = _mm256_set1_ps(*r0.add(kk));
                acc0 = _mm256_fmadd_ps(av, _mm256_loadu_ps(b.add(kk * N)), acc0);
                acc1 = _mm256_fmadd_ps(av, _mm256_loadu_ps(b.add(kk * N + 8)), acc1);
                acc2 = _mm256_fmadd_ps(av, _mm256_loadu_ps(b.add(kk * N + 16)), acc2);
            }

            _mm256_storeu_ps(c0, acc0);
            _mm256_storeu_ps(c0.add(8), acc1);
            _mm256_storeu_ps(c0.add(16), acc2);

            i += 1;
        }
    }
}

/// AVX2/FMA kernel for the 16-column variant.
///
/// Same structure as the 24-column kernel with a 4-row × 16-column tile:
/// eight accumulators, two B vectors per contraction step.
///
/// # Safety
///
/// The caller must ensure AVX2 and FMA are available and that `a`, `b`, `c`
/// point to `m*k`, `k*16` and `m*16` valid f32 elements respectively.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2", enable = "fma")]
pub(crate) unsafe fn sgemm_4x16_avx2(
    a: *const f32,
    b: *const f32,
    c: *mut f32,
    m: usize,
    k: usize,
) {
    const N: usize = 16;
    unsafe {
        let mut i = 0;
        while i + 4 <= m {
            let r0 = a.add(i * k);
            let r1 = a.add((i + 1) * k);
            let r2 = a.add((i + 2) * k);
            let r3 = a.add((i + 3) * k);
            let c0 = c.add(i * N);
            let c1 = c.add((i + 1) * N);
            let c2 = c.add((i + 2) * N);
            let c3 = c.add((i + 3) * N);

            let mut acc00 = _mm256_loadu_ps(c0);
            let mut acc01 = _mm256_loadu_ps(c0.add(8));
            let mut acc10 = _mm256_loadu_ps(c1);
            let mut acc11 = _mm256_loadu_ps(c1.add(8));
            let mut acc20 = _mm256_loadu_ps(c2);
            let mut acc21 = _mm256_loadu_ps(c2.add(8));
            let mut acc30 = _mm256_loadu_ps(c3);
            let mut acc31 = _mm256_loadu_ps(c3.add(8));

            for kk in 0..k {
                let b0 = _mm256_loadu_ps(b.add(kk * N));
                let b1 = _mm256_loadu_ps(b.add(kk * N + 8));

                let a0 = _mm256_set1_ps(*r0.add(kk));
                acc00 = _mm256_fmadd_ps(a0, b0, acc00);
                acc01 = _mm256_fmadd_ps(a0, b1, acc01);

                let a1 = _mm256_set1_ps(*r1.add(kk));
                acc10 = _mm256_fmadd_ps(a1, b0, acc10);
                acc11 = _mm256_fmadd_ps(a1, b1, acc11);

                let a2 = _mm256_set1_ps(*r2.add(kk));
                acc20 = _mm256_fmadd_ps(a2, b0, acc20);
                acc21 = _mm256_fmadd_ps(a2, b1, acc21);

                let a3 = _mm256_set1_ps(*r3.add(kk));
                acc30 = _mm256_fmadd_ps(a3, b0, acc30);
                acc31 = _mm256_fmadd_ps(a3, b1, acc31);
            }

            _mm256_storeu_ps(c0, acc00);
            _mm256_storeu_ps(c0.add(8), acc01);
            _mm256_storeu_ps(c1, acc10);
            _mm256_storeu_ps(c1.add(8), acc11);
            _mm256_storeu_ps(c2, acc20);
            _mm256_storeu_ps(c2.add(8), acc21);
            _mm256_storeu_ps(c3, acc30);
            _mm256_storeu_ps(c3.add(8), acc31);

            i += 4;
        }

        while i < m {
            let r0 = a.add(i * k);
            let c0 = c.add(i * N);

            let mut acc0 = _mm256_loadu_ps(c0);
            let mut acc1 = _mm256_loadu_ps(c0.add(8));

            for kk in 0..k {
                let av = _mm256_set1_ps(*r0.add(kk));
                acc0 = _mm256_fmadd_ps(av, _mm256_loadu_ps(b.add(kk * N)), acc0);
                acc1 = _mm256_fmadd_ps(av, _mm256_loadu_ps(b.add(kk * N + 8)), acc1);
            }

            _mm256_storeu_ps(c0, acc0);
            _mm256_storeu_ps(c0.add(8), acc1);

            i += 1;
        }
    }
}

/// Scalar fallback with the same accumulate contract as the vector kernels.
///
/// Loop order keeps each A element resident while sweeping a full C row,
/// which is as kind to the cache as a scalar kernel gets.
pub(crate) fn sgemm_portable(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for kk in 0..k {
            let a_ik = a[i * k + kk];
            let b_row = &b[kk * n..kk * n + n];
            let c_row = &mut c[i * n..i * n + n];
            for j in 0..n {
                c_row[j] += a_ik * b_row[j];
            }
        }
    }
}
