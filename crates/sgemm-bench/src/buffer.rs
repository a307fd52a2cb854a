//! Page-granular operand and result buffers.
//!
//! Buffers come straight from anonymous memory mappings rather than the
//! global allocator: the mapping is page-aligned and zero-filled, and no
//! allocator metadata sits next to hot data. Ownership is scoped:
//! dropping a [`PageBuffer`] unmaps it, on success and error paths alike.

use std::slice;

use memmap2::MmapMut;
use rand::Rng;

use crate::error::{BenchError, Result};

/// A fixed-size f32 buffer backed by an anonymous page-granular mapping.
pub struct PageBuffer {
    map: MmapMut,
    len: usize,
}

impl PageBuffer {
    /// Map a zero-filled buffer of `len` f32 elements.
    pub fn zeroed(len: usize) -> Result<Self> {
        let bytes = len * std::mem::size_of::<f32>();
        let map = MmapMut::map_anon(bytes)
            .map_err(|source| BenchError::Allocation { bytes, source })?;
        Ok(Self { map, len })
    }

    /// Number of f32 elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[f32] {
        // Safety: the mapping is page-aligned (stricter than f32 alignment)
        // and holds exactly `len` f32-sized elements.
        unsafe { slice::from_raw_parts(self.map.as_ptr().cast(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        // Safety: as above, plus exclusive access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.map.as_mut_ptr().cast(), self.len) }
    }

    /// Reset every element to 0.0.
    ///
    /// Result buffers must be re-zeroed immediately before any computation
    /// whose output will be inspected, because kernels accumulate.
    pub fn zero(&mut self) {
        self.as_mut_slice().fill(0.0);
    }

    /// Fill with uniform random values in `[0, 1)`.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        for v in self.as_mut_slice() {
            *v = rng.gen();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_zero_initialized() {
        let buf = PageBuffer::zeroed(4096).unwrap();
        assert_eq!(buf.len(), 4096);
        assert!(buf.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn mapping_is_page_aligned() {
        let buf = PageBuffer::zeroed(16).unwrap();
        assert_eq!(buf.as_slice().as_ptr() as usize % 4096, 0);
    }

    #[test]
    fn random_fill_stays_in_unit_interval() {
        let mut buf = PageBuffer::zeroed(1024).unwrap();
        let mut rng = rand::thread_rng();
        buf.fill_random(&mut rng);
        assert!(buf.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
        // A kilobyte of uniform draws is never all zeros.
        assert!(buf.as_slice().iter().any(|&x| x != 0.0));
    }

    #[test]
    fn zero_resets_contents() {
        let mut buf = PageBuffer::zeroed(64).unwrap();
        buf.as_mut_slice().fill(7.5);
        buf.zero();
        assert!(buf.as_slice().iter().all(|&x| x == 0.0));
    }
}
