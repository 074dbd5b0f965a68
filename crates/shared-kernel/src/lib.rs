// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ChunkerError, Result, SizeError, SizeResult, SplitError, SplitResult};

pub mod error;
pub mod value_objects;

pub use value_objects::{ByteCount, ChunkName};
