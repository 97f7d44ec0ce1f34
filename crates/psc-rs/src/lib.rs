//! Partial-striping recovery primitives for files striped across storage objects.
#![allow(clippy::cargo_common_metadata)]

pub mod extract;
pub mod layout;
pub mod recover;
pub mod retention;
pub mod stripe;
