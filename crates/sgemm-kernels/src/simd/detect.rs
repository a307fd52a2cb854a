//! CPU feature detection for kernel dispatch.

/// Instruction-set level the dispatcher can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    /// 256-bit AVX2 with fused multiply-add.
    Avx2Fma,
    /// Scalar fallback, available everywhere.
    Portable,
}

/// Detect the best kernel level supported by the executing CPU.
pub fn simd_level() -> SimdLevel {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            return SimdLevel::Avx2Fma;
        }
    }
    SimdLevel::Portable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_is_stable() {
        // Feature detection must not flap between calls; the dispatcher
        // relies on warm-up and timed passes taking the same path.
        assert_eq!(simd_level(), simd_level());
    }
}
