//! Result artifact serialization.
//!
//! Artifacts are flat sequences of native-endian f32 values in storage
//! order, with no header and no shape metadata. Consumers (an external diff tool)
//! must know `m` and `n` out of band. Writing happens strictly after the
//! timed section has completed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{BenchError, Result};

/// Write `data` to `path` as raw native-endian f32 bytes.
pub fn write_f32_slice(path: &Path, data: &[f32]) -> Result<()> {
    let export_err = |source| BenchError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(export_err)?;
    let mut writer = BufWriter::new(file);
    for value in data {
        writer.write_all(&value.to_ne_bytes()).map_err(export_err)?;
    }
    writer.flush().map_err(export_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_f32_slice(path: &Path) -> Vec<f32> {
        std::fs::read(path)
            .unwrap()
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect()
    }

    #[test]
    fn round_trip_preserves_every_bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.bin");

        let data: Vec<f32> = (0..1024)
            .map(|i| (i as f32) * 0.37 - 100.0)
            .chain([0.0, -0.0, f32::MIN_POSITIVE])
            .collect();
        write_f32_slice(&path, &data).unwrap();

        let back = read_f32_slice(&path);
        assert_eq!(back.len(), data.len());
        for (x, y) in data.iter().zip(back.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn artifact_size_is_four_bytes_per_element() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sized.bin");

        write_f32_slice(&path, &vec![1.0f32; 512 * 24]).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 512 * 24 * 4);
    }

    #[test]
    fn unwritable_path_is_reported() {
        let err = write_f32_slice(Path::new("/nonexistent-dir/out.bin"), &[1.0]).unwrap_err();
        assert!(matches!(err, BenchError::Export { .. }));
    }
}
