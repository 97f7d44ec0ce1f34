//! Fixture object images for demonstrating extraction and recovery.

use std::path::{Path, PathBuf};

use anyhow::Result;
use psc_rs::layout::StripeLayout;

/// `object_path` returns the image path for an object position inside a
/// directory.
#[must_use]
pub fn object_path(dir: &Path, position: u64) -> PathBuf {
    dir.join(format!("object-{position}.dat"))
}

/// `seed_objects` writes one fixture image per object for the given layout.
///
/// Stripe `i` of the logical file is filled with the letter `'A' + i mod 26`,
/// so the round-robin assignment is visible at a glance in each image.
///
/// # Errors
/// Returns an error if the directory or an image cannot be written.
pub fn seed_objects(layout: &StripeLayout, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::new();
    for position in 0..layout.object_count() {
        let path = object_path(dir, position);
        std::fs::write(&path, object_image(layout, position))?;
        paths.push(path);
    }
    Ok(paths)
}

fn object_image(layout: &StripeLayout, position: u64) -> Vec<u8> {
    let width = layout.stripe_width();
    let size = layout.file_size();
    let mut image = Vec::new();
    if width == 0 || size == 0 {
        return image;
    }

    let mut row = 0u64;
    loop {
        let stripe_index = layout.object_count() * row + position;
        let file_lower = stripe_index * width;
        if file_lower >= size {
            break;
        }
        let take = width.min(size - file_lower);
        let letter = b'A' + u8::try_from(stripe_index % 26).expect("residue fits in u8");
        let take = usize::try_from(take).expect("stripe width fits in usize");
        image.extend(std::iter::repeat_n(letter, take));
        row += 1;
    }
    image
}
