//! Single-precision GEMM microkernels with runtime SIMD dispatch.
//!
//! This crate supplies the compute side of the measurement harness: a small
//! family of hand-tiled accumulating SGEMM kernels selected by
//! [`KernelVariant`], plus the naive reference computation they are checked
//! against.
//!
//! # Kernel contract
//!
//! Every kernel computes `C += A × B` for row-major f32 buffers with
//! A `m × k`, B `k × n`, C `m × n` and `n` fixed by the variant (16 or 24).
//! Kernels accumulate rather than overwrite, touch nothing outside the
//! `m × n` output region, and may be invoked repeatedly on the same buffers.
//!
//! # Example
//!
//! ```
//! use sgemm_kernels::{multiply_accumulate, KernelVariant};
//!
//! let variant = KernelVariant::N16;
//! let (m, k) = (2, 3);
//! let a = vec![1.0f32; m * k];
//! let b = vec![1.0f32; k * variant.n()];
//! let mut c = vec![0.0f32; m * variant.n()];
//!
//! multiply_accumulate(variant, &a, &b, &mut c, m, k);
//! assert!(c.iter().all(|&x| x == 3.0));
//! ```

mod reference;
mod simd;
mod variant;

pub use reference::sgemm_reference;
pub use simd::{kernel_label, multiply_accumulate, simd_level, SimdLevel};
pub use variant::{KernelVariant, UnsupportedVariant};
