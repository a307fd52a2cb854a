//! Error types for the measurement harness.
//!
//! Every failure here is fatal: a measurement is only worth reporting when
//! pinning, allocation and export all succeeded in full, so there is no
//! retry or partial-result path anywhere.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up or finishing a run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The measurement thread could not be bound to the requested CPU.
    #[error("failed to bind thread to cpu {cpu}: {source}")]
    Affinity {
        cpu: usize,
        #[source]
        source: io::Error,
    },

    /// A page-granular mapping could not be obtained.
    #[error("failed to map {bytes} bytes of page-aligned memory: {source}")]
    Allocation {
        bytes: usize,
        #[source]
        source: io::Error,
    },

    /// A result artifact could not be written.
    #[error("failed to write result artifact {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, BenchError>;
