//! Local persistence for downloaded files

pub mod downloads;

pub use downloads::DiskFileSink;
