// crates/engine/src/progress.rs
use chunker_shared_kernel::{ByteCount, ChunkName};

/// A chunk that has been fully written and closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenChunk {
    pub name: ChunkName,
    pub size: ByteCount,
}

/// Receives a notice each time a chunk is finalized.
pub trait ProgressSink {
    fn on_chunk(&mut self, chunk: &WrittenChunk);
}

/// Sink that discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_chunk(&mut self, _chunk: &WrittenChunk) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(&WrittenChunk),
{
    fn on_chunk(&mut self, chunk: &WrittenChunk) {
        self(chunk);
    }
}
