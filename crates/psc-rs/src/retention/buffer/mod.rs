//! In-memory object source, used by fixtures and tests.


use anyhow::Result;

use crate::retention::source::{ByteRangeSource, check_range};

/// ObjectBuffer serves byte ranges from an owned in-memory buffer.
pub struct ObjectBuffer {
    data: Vec<u8>,
}

impl ObjectBuffer {
    #[must_use]
    /// `new` wraps a byte buffer as a range source.
    pub const fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    #[must_use]
    /// `as_bytes` returns the full backing buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ObjectBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for ObjectBuffer {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl ByteRangeSource for ObjectBuffer {
    fn len(&self) -> u64 {
        self.data.len() as u64
    }

    fn read(&self, lower: u64, upper: u64) -> Result<Vec<u8>> {
        check_range(lower, upper, self.len())?;
        let lower = usize::try_from(lower)?;
        let upper = usize::try_from(upper)?;
        Ok(self.data[lower..upper].to_vec())
    }
}
