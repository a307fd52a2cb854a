//! Run orchestration: pin, allocate, calibrate, measure, validate, export.

use std::path::PathBuf;

use sgemm_kernels::{kernel_label, multiply_accumulate, sgemm_reference};
use tracing::debug;

use crate::affinity::pin_current_thread;
use crate::buffer::PageBuffer;
use crate::calibrate::Calibration;
use crate::error::Result;
use crate::export::write_f32_slice;
use crate::timing::{self, Measurement};
use crate::workload::Workload;

/// Everything one run needs, resolved before any resource is acquired.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub workload: Workload,
    /// Logical processor the measurement thread is bound to.
    pub cpu: usize,
    /// Total-operation budget the calibrator divides into repetitions.
    pub work_budget: u64,
    /// Artifact path for the reference result.
    pub reference_out: PathBuf,
    /// Artifact path for the kernel's correctness-check result.
    pub kernel_out: PathBuf,
}

/// Outcome of a completed run, ready for the console report.
#[derive(Debug)]
pub struct Report {
    pub kernel: &'static str,
    pub workload: Workload,
    pub measurement: Measurement,
    pub mean_latency_us: f64,
    pub gigaflops: f64,
    pub reference_out: PathBuf,
    pub kernel_out: PathBuf,
}

/// Execute one full measurement run.
///
/// Stage order is fixed: pinning precedes allocation, all timing precedes
/// the validation pass, and all file I/O happens after the clocks are done.
/// Buffers are owned by this frame, so every early `?` return still unmaps
/// them.
pub fn run(config: &BenchConfig) -> Result<Report> {
    let w = config.workload;

    pin_current_thread(config.cpu)?;
    debug!(cpu = config.cpu, "pinned measurement thread");

    let mut a = PageBuffer::zeroed(w.a_len())?;
    let mut b = PageBuffer::zeroed(w.b_len())?;
    let mut c_ref = PageBuffer::zeroed(w.c_len())?;
    let mut c_kernel = PageBuffer::zeroed(w.c_len())?;
    debug!(
        a_bytes = w.a_len() * 4,
        b_bytes = w.b_len() * 4,
        c_bytes = w.c_len() * 4,
        "mapped operand and result buffers"
    );

    let mut rng = rand::thread_rng();
    a.fill_random(&mut rng);
    b.fill_random(&mut rng);

    let calibration = Calibration::for_workload(&w, config.work_budget);
    debug!(reps = calibration.reps(), "calibrated timed section");

    // The timed loop accumulates garbage into c_kernel; only timing matters
    // here. The buffer is re-zeroed before the correctness pass below.
    let measurement = timing::measure(calibration.reps(), || {
        multiply_accumulate(
            w.variant,
            a.as_slice(),
            b.as_slice(),
            c_kernel.as_mut_slice(),
            w.m,
            w.k,
        );
    });

    c_ref.zero();
    c_kernel.zero();
    sgemm_reference(
        a.as_slice(),
        b.as_slice(),
        c_ref.as_mut_slice(),
        w.m,
        w.n(),
        w.k,
    );
    multiply_accumulate(
        w.variant,
        a.as_slice(),
        b.as_slice(),
        c_kernel.as_mut_slice(),
        w.m,
        w.k,
    );

    write_f32_slice(&config.reference_out, c_ref.as_slice())?;
    write_f32_slice(&config.kernel_out, c_kernel.as_slice())?;

    Ok(Report {
        kernel: kernel_label(w.variant),
        workload: w,
        measurement,
        mean_latency_us: measurement.mean_latency_secs() * 1e6,
        gigaflops: measurement.gigaflops(w.flops_per_call()),
        reference_out: config.reference_out.clone(),
        kernel_out: config.kernel_out.clone(),
    })
}
