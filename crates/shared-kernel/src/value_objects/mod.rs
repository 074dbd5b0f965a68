// crates/shared-kernel/src/value_objects/mod.rs
pub mod byte_count;
pub mod chunk_name;

pub use byte_count::ByteCount;
pub use chunk_name::ChunkName;
