//! Measurement harness for SGEMM microkernels.
//!
//! Turns "run this kernel once" into a reproducible GFLOPS figure plus a
//! pair of correctness artifacts, under controlled conditions:
//!
//! - the measurement thread is pinned to one logical processor before
//!   anything else happens ([`affinity`]);
//! - operands and results live in page-granular anonymous mappings, owned
//!   and released by scope ([`buffer`]);
//! - a fixed total-operation budget is divided into a repetition count so
//!   elapsed time is roughly size-invariant ([`calibrate`]);
//! - an untimed warm-up pass and a timed pass of identical shape bracket
//!   exactly two monotonic clock reads ([`timing`]);
//! - the canonical triple-loop product and a one-shot kernel invocation are
//!   serialized byte-faithfully for an external diff tool ([`export`]).
//!
//! [`harness::run`] wires the stages together for one workload per process.
//! Setup failures (pinning, allocation) are fatal; a measurement taken
//! without those guarantees is not worth reporting.

pub mod affinity;
pub mod buffer;
pub mod calibrate;
pub mod error;
pub mod export;
pub mod harness;
pub mod timing;
pub mod workload;

pub use error::{BenchError, Result};
pub use harness::{run, BenchConfig, Report};
pub use workload::Workload;
