//! Stripe payload container.

#[cfg(test)]
mod stripe_tests;

use std::borrow::Cow;
use std::fmt;

/// StripeData holds the byte payload of a single extracted stripe.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StripeData {
    data: Vec<u8>,
}

impl StripeData {
    #[must_use]
    /// `new` wraps a stripe's raw bytes.
    pub const fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    #[must_use]
    /// `as_bytes` returns the stripe payload without loss.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    /// `into_bytes` consumes the stripe and returns its payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[must_use]
    /// `len` returns the payload length in bytes.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    #[must_use]
    /// `is_empty` returns true when the payload has no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    /// `to_text` renders the payload as UTF-8 for diagnostics, substituting
    /// placeholders for invalid sequences. Display convenience only; the raw
    /// bytes stay available through [`Self::as_bytes`].
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl fmt::Display for StripeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
