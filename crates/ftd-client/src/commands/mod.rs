pub mod common;
pub mod consolidate;
