//! Warm-up and timed execution of the kernel under test.
//!
//! The timed pass is bracketed by exactly two monotonic clock reads; at
//! microkernel time scales a per-call read would cost more than the call.
//! The warm-up pass is shaped identically to the timed pass (same buffers,
//! same repetition count), so the timed pass observes steady-state cache and
//! branch-predictor behavior rather than a cold start.

use std::time::{Duration, Instant};

/// Elapsed time for a known number of kernel invocations.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub elapsed: Duration,
    pub reps: u64,
}

impl Measurement {
    /// Mean wall time of one kernel call, in seconds.
    pub fn mean_latency_secs(&self) -> f64 {
        self.elapsed.as_secs_f64() / self.reps as f64
    }

    /// Sustained throughput in billions of operations per second.
    pub fn gigaflops(&self, flops_per_call: u64) -> f64 {
        flops_per_call as f64 / self.mean_latency_secs() * 1e-9
    }
}

/// Run `kernel_call` for `reps` untimed warm-up iterations, then `reps`
/// timed iterations between two clock reads.
pub fn measure<F: FnMut()>(reps: u64, mut kernel_call: F) -> Measurement {
    for _ in 0..reps {
        kernel_call();
    }

    let start = Instant::now();
    for _ in 0..reps {
        kernel_call();
    }
    let elapsed = start.elapsed();

    Measurement { elapsed, reps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_warmup_and_timed_passes_of_equal_shape() {
        let mut calls = 0u64;
        let m = measure(5, || calls += 1);
        assert_eq!(calls, 10);
        assert_eq!(m.reps, 5);
    }

    #[test]
    fn derives_latency_and_throughput() {
        let m = Measurement {
            elapsed: Duration::from_secs(2),
            reps: 4,
        };
        assert_eq!(m.mean_latency_secs(), 0.5);
        // 1e9 ops per 0.5 s call = 2 GFLOPS.
        assert!((m.gigaflops(1_000_000_000) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn elapsed_is_positive_for_real_work() {
        let mut sink = 0.0f64;
        let m = measure(1000, || {
            sink = (sink + 1.0).sqrt();
        });
        std::hint::black_box(sink);
        assert!(m.elapsed > Duration::ZERO);
        assert!(m.mean_latency_secs() > 0.0);
    }
}
