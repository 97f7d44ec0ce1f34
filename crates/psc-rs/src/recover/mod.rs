//! Whole-file reassembly from per-object stripe extractions.


use anyhow::Result;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::extract::extract_stripes;
use crate::layout::StripeLayout;
use crate::retention::source::ByteRangeSource;

/// `reassemble` rebuilds the logical file from one source per object.
///
/// Extraction runs independently per object; the per-object maps are merged
/// and concatenated in ascending stripe-index order. A gap in the merged
/// index set or a length mismatch against the layout's file size means the
/// supplied objects do not match the claimed layout and is a hard error.
///
/// # Arguments
/// * `layout` - Striping metadata for the file being recovered.
/// * `sources` - One byte-range source per object, ordered by object position.
///
/// # Errors
/// Returns an error if the source count differs from the layout's object
/// count, if any extraction fails, or if the merged stripes do not form the
/// complete file.
pub fn reassemble<S: ByteRangeSource>(layout: &StripeLayout, sources: &[S]) -> Result<Vec<u8>> {
    let object_count = layout.object_count();
    if sources.len() as u64 != object_count {
        anyhow::bail!(
            "layout names {object_count} objects but {} sources were supplied",
            sources.len()
        );
    }

    let mut stripes = BTreeMap::new();
    for (position, source) in sources.iter().enumerate() {
        stripes.extend(extract_stripes(position as u64, layout, source)?);
    }

    let file_size = usize::try_from(layout.file_size())?;
    let mut file = Vec::with_capacity(file_size);
    for (expected, (index, data)) in stripes.into_iter().enumerate() {
        if index != expected as u64 {
            anyhow::bail!("missing stripe {expected}; objects do not match the layout");
        }
        file.extend_from_slice(data.as_bytes());
    }

    if file.len() != file_size {
        anyhow::bail!(
            "reassembled {} bytes but the layout claims {file_size}",
            file.len()
        );
    }
    Ok(file)
}

#[must_use]
/// `digest` returns the SHA-256 of a reassembled file as lowercase hex, for
/// integrity reporting.
pub fn digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
