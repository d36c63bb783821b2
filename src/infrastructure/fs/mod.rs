//! File System Helpers

mod local;

pub use local::LocalFs;
