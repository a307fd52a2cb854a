//! Thread-to-processor binding.
//!
//! The timed section is only meaningful on a thread that cannot migrate
//! between cores mid-measurement, so binding happens before any buffer is
//! touched and a binding failure aborts the run.

#![allow(unsafe_code)]

use crate::error::{BenchError, Result};

/// Bind the calling thread to one logical processor.
///
/// Must be called before any warm-up or timed work; the binding holds for
/// the rest of the run.
#[cfg(target_os = "linux")]
pub fn pin_current_thread(cpu: usize) -> Result<()> {
    unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_SET(cpu, &mut set);
        if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
            return Err(BenchError::Affinity {
                cpu,
                source: std::io::Error::last_os_error(),
            });
        }
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn pin_current_thread(cpu: usize) -> Result<()> {
    Err(BenchError::Affinity {
        cpu,
        source: std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "processor affinity is only supported on Linux",
        ),
    })
}

/// Logical processors the current thread is allowed to run on.
///
/// Used to choose a valid pinning target when the process runs inside a
/// restricted cpuset (containers, CI runners).
#[cfg(target_os = "linux")]
pub fn allowed_cpus() -> Vec<usize> {
    unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) != 0 {
            return Vec::new();
        }
        (0..libc::CPU_SETSIZE as usize)
            .filter(|&cpu| libc::CPU_ISSET(cpu, &set))
            .collect()
    }
}
