//! Stripe extraction, the core of partial-striping recovery.


use anyhow::Result;
use std::collections::BTreeMap;

use crate::layout::StripeLayout;
use crate::retention::source::ByteRangeSource;
use crate::stripe::StripeData;

/// `extract_stripes` maps each stripe physically present in one object to its
/// byte payload, keyed by global stripe index.
///
/// Stripes are assigned round-robin: the stripe stored at row `r` of object
/// `p` has global index `object_count * r + p`. The final stripe of the file
/// may be shorter than the stripe width when the file size is not row-aligned;
/// every other stripe is exactly `stripe_width` bytes. A zero stripe width or
/// zero file size yields an empty map.
///
/// # Arguments
/// * `object_position` - Zero-based index of the object among all objects.
/// * `layout` - Striping metadata for the file being recovered.
/// * `source` - Byte-range source backed by this object's recovered image.
///
/// # Errors
/// Returns an error if `object_position` is out of range for the layout, if
/// the layout has no objects, if offset arithmetic overflows, or if the
/// source cannot serve a requested range (the object does not match the
/// claimed layout).
pub fn extract_stripes<S: ByteRangeSource + ?Sized>(
    object_position: u64,
    layout: &StripeLayout,
    source: &S,
) -> Result<BTreeMap<u64, StripeData>> {
    let object_count = layout.object_count();
    if object_count == 0 {
        anyhow::bail!("layout has no objects");
    }
    if object_position >= object_count {
        anyhow::bail!("object position {object_position} out of range for {object_count} objects");
    }

    let stripe_width = layout.stripe_width();
    let file_size = layout.file_size();
    let mut stripes = BTreeMap::new();

    // Explicit degenerate guard: a zero-width stripe or zero-size file holds
    // no stripes, independent of the other value.
    if stripe_width == 0 || file_size == 0 {
        return Ok(stripes);
    }

    let mut row: u64 = 0;
    loop {
        let stripe_index = object_count
            .checked_mul(row)
            .and_then(|n| n.checked_add(object_position))
            .ok_or_else(|| anyhow::anyhow!("stripe index overflow at row {row}"))?;
        let file_lower = stripe_index
            .checked_mul(stripe_width)
            .ok_or_else(|| anyhow::anyhow!("file offset overflow at stripe {stripe_index}"))?;

        // This row, and every later row, lies past the end of the file.
        if file_lower >= file_size {
            break;
        }

        let local_lower = row * stripe_width;
        let take = stripe_width.min(file_size - file_lower);
        let payload = source.read(local_lower, local_lower + take)?;
        stripes.insert(stripe_index, StripeData::new(payload));
        row += 1;
    }

    Ok(stripes)
}
