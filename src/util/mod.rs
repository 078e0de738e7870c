//! Utility modules

pub mod text;

pub use text::{group_at, Group};
