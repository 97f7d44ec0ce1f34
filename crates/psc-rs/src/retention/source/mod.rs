//! Byte-range source trait consumed by stripe extraction.

use anyhow::Result;

/// ByteRangeSource exposes one object's backing bytes as half-open ranges.
///
/// Implementations must return exactly `upper - lower` bytes for a valid
/// range and fail loudly on out-of-range requests. Silent truncation would
/// mask a metadata/data mismatch, which is exactly what extraction relies on
/// this trait to surface.
pub trait ByteRangeSource {
    /// `len` returns the length of the backing data, in bytes.
    fn len(&self) -> u64;

    /// `is_empty` returns true when the backing data has no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `read` returns the bytes in the half-open range `[lower, upper)`.
    ///
    /// # Arguments
    /// * `lower` - Inclusive lower byte offset.
    /// * `upper` - Exclusive upper byte offset.
    ///
    /// # Errors
    /// Returns an error if `lower > upper` or `upper` exceeds the backing
    /// data's length.
    fn read(&self, lower: u64, upper: u64) -> Result<Vec<u8>>;
}

/// `check_range` validates a half-open byte range against a backing length.
///
/// # Errors
/// Returns an error if the range is inverted or extends past `len`.
pub fn check_range(lower: u64, upper: u64, len: u64) -> Result<()> {
    if lower > upper {
        anyhow::bail!("inverted byte range: lower {lower} > upper {upper}");
    }
    if upper > len {
        anyhow::bail!("byte range [{lower}, {upper}) exceeds backing length {len}");
    }
    Ok(())
}
