//! Striping metadata describing how a file is laid out across objects.

#[cfg(test)]
mod layout_tests;

/// StripeLayout describes how a file was striped across storage objects.
///
/// The layout is built once per recovery session and is read-only afterwards.
/// Zero values for `stripe_width` or `file_size` are defined degenerate
/// inputs, not construction errors; extraction treats them as "no stripes".
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct StripeLayout {
    object_count: u64,
    stripe_width: u64,
    file_size: u64,
}

impl StripeLayout {
    #[must_use]
    /// `new` builds a layout from its three defining values.
    ///
    /// # Arguments
    /// * `object_count` - Number of objects the file is striped across.
    /// * `stripe_width` - Size of each stripe slot, in bytes.
    /// * `file_size` - Total size of the logical file, in bytes.
    pub const fn new(object_count: u64, stripe_width: u64, file_size: u64) -> Self {
        Self {
            object_count,
            stripe_width,
            file_size,
        }
    }

    #[must_use]
    /// `object_count` returns the number of objects the file is striped across.
    pub const fn object_count(&self) -> u64 {
        self.object_count
    }

    #[must_use]
    /// `stripe_width` returns the size of each stripe slot, in bytes.
    pub const fn stripe_width(&self) -> u64 {
        self.stripe_width
    }

    #[must_use]
    /// `file_size` returns the total size of the logical file, in bytes.
    pub const fn file_size(&self) -> u64 {
        self.file_size
    }

    #[must_use]
    /// `row_width` returns the bytes covered by one full row across all objects.
    pub const fn row_width(&self) -> u64 {
        self.object_count.saturating_mul(self.stripe_width)
    }

    #[must_use]
    /// `stripe_count` returns the total number of stripes in the file,
    /// counting a trailing partial stripe as one stripe.
    pub const fn stripe_count(&self) -> u64 {
        if self.stripe_width == 0 {
            return 0;
        }
        self.file_size.div_ceil(self.stripe_width)
    }
}
