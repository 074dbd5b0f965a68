// crates/engine/src/lib.rs
//! Size parsing and sequential file splitting.

pub mod config;
pub mod progress;
pub mod size;
pub mod splitter;

pub use chunker_shared_kernel::{ByteCount, ChunkName, SizeError, SplitError};
pub use config::{SplitOptions, SplitOptionsBuilder};
pub use progress::{NoProgress, ProgressSink, WrittenChunk};
pub use size::{SizeUnit, parse_size};
pub use splitter::{SplitReport, Splitter, split_file};
