// Shared helpers

pub mod storage;

pub use storage::*;
