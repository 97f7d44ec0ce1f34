//! Retention layer sources that back extraction with object bytes.

pub mod buffer;
pub mod object;
pub mod source;
