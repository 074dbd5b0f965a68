use chunker_shared_kernel::ByteCount;
use derive_builder::Builder;
use std::path::PathBuf;

/// Size of the scratch buffer used to move bytes from the input to a chunk.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Parameters of a single split run.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct SplitOptions {
    /// File to split.
    pub input: PathBuf,
    /// Stem shared by every chunk file (`<prefix>_<n>`).
    pub prefix: PathBuf,
    /// Upper bound on the size of each chunk.
    pub chunk_size: ByteCount,
    #[builder(default = "DEFAULT_BUFFER_SIZE")]
    pub buffer_size: usize,
}

impl SplitOptions {
    pub fn new(input: impl Into<PathBuf>, prefix: impl Into<PathBuf>, chunk_size: ByteCount) -> Self {
        Self {
            input: input.into(),
            prefix: prefix.into(),
            chunk_size,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Buffer length actually used for copying: never zero, never larger than
    /// one chunk.
    pub(crate) fn effective_buffer_size(&self) -> usize {
        let chunk = usize::try_from(self.chunk_size.bytes()).unwrap_or(usize::MAX);
        self.buffer_size.clamp(1, chunk.max(1))
    }
}
