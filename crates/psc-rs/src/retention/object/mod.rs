//! Mmap-backed object file source.

#[cfg(test)]
mod object_tests;

use anyhow::Result;
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::retention::source::{ByteRangeSource, check_range};

/// ObjectFile serves byte ranges from a recovered object image on disk.
///
/// The image is opened read-only and memory-mapped; extraction never mutates
/// object data.
pub struct ObjectFile {
    path: PathBuf,
    /// None when the image is empty; a zero-length file cannot be mapped.
    map: Option<Mmap>,
    len: u64,
}

impl ObjectFile {
    /// `open` maps an object image for reading.
    ///
    /// # Errors
    /// Returns an error if the image cannot be opened or mapped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let len = file.metadata()?.len();

        let map = if len == 0 {
            None
        } else {
            let map_len = usize::try_from(len)
                .map_err(|_| anyhow::anyhow!("object length {len} exceeds addressable size"))?;
            Some(unsafe { MmapOptions::new().len(map_len).map(&file)? })
        };

        Ok(Self { path, map, len })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteRangeSource for ObjectFile {
    fn len(&self) -> u64 {
        self.len
    }

    fn read(&self, lower: u64, upper: u64) -> Result<Vec<u8>> {
        check_range(lower, upper, self.len)?;
        let Some(map) = self.map.as_ref() else {
            return Ok(Vec::new());
        };
        let lower = usize::try_from(lower)?;
        let upper = usize::try_from(upper)?;
        Ok(map[lower..upper].to_vec())
    }
}
