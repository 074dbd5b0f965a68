// crates/engine/src/splitter.rs
use crate::config::SplitOptions;
use crate::progress::{ProgressSink, WrittenChunk};
use chunker_shared_kernel::{ByteCount, ChunkName, SplitError, SplitResult};
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// Outcome of a completed split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Chunks in the order they were written.
    pub chunks: Vec<WrittenChunk>,
    /// Sum of all chunk sizes.
    pub total: ByteCount,
}

impl SplitReport {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    fn record(&mut self, chunk: WrittenChunk) {
        self.total = ByteCount::new(self.total.bytes() + chunk.size.bytes());
        self.chunks.push(chunk);
    }
}

/// Split the file at `options.input` into `<prefix>_1`, `<prefix>_2`, ...
///
/// Every chunk holds exactly `options.chunk_size` bytes except possibly the
/// last one. Existing files with the same names are truncated. Chunks written
/// before a failure are left on disk.
///
/// # Errors
/// See [`SplitError`]; every variant aborts the run.
pub fn split_file(options: &SplitOptions, progress: &mut dyn ProgressSink) -> SplitResult<SplitReport> {
    let mut splitter = Splitter::new(options)?;
    let input = open_input(&options.input)?;
    debug!(
        "splitting {} into chunks of {:#}",
        options.input.display(),
        options.chunk_size
    );
    let report = splitter.split(input, progress)?;
    debug!(
        "split {} into {} chunk(s), {:#} total",
        options.input.display(),
        report.chunk_count(),
        report.total
    );
    Ok(report)
}

fn open_input(path: &Path) -> SplitResult<File> {
    let input_open = |source| SplitError::InputOpen {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(input_open)?;
    let meta = file.metadata().map_err(input_open)?;
    if meta.is_dir() {
        return Err(input_open(io::Error::other("is a directory")));
    }
    Ok(file)
}

/// Sequential chunk writer for any byte source.
#[derive(Debug)]
pub struct Splitter {
    prefix: PathBuf,
    chunk_size: ByteCount,
    buffer: Vec<u8>,
}

impl Splitter {
    /// # Errors
    /// [`SplitError::ZeroChunkSize`] if the chunk size is zero.
    pub fn new(options: &SplitOptions) -> SplitResult<Self> {
        if options.chunk_size.is_zero() {
            return Err(SplitError::ZeroChunkSize);
        }
        Ok(Self {
            prefix: options.prefix.clone(),
            chunk_size: options.chunk_size,
            buffer: vec![0; options.effective_buffer_size()],
        })
    }

    /// Drain `reader` into numbered chunk files.
    ///
    /// # Errors
    /// [`SplitError::OutputCreate`], [`SplitError::Copy`] or
    /// [`SplitError::OutputRemove`].
    pub fn split<R: Read>(&mut self, mut reader: R, progress: &mut dyn ProgressSink) -> SplitResult<SplitReport> {
        let mut report = SplitReport::default();
        let mut index = 1;
        loop {
            let name = ChunkName::new(&self.prefix, index);
            let written = self.write_chunk(&mut reader, &name)?;
            if written == 0 {
                remove_empty(&name).map_err(|source| SplitError::OutputRemove {
                    path: name.into_path_buf(),
                    source,
                })?;
                break;
            }

            let chunk = WrittenChunk {
                name,
                size: ByteCount::new(written),
            };
            debug!("wrote {} ({:#})", chunk.name, chunk.size);
            progress.on_chunk(&chunk);
            report.record(chunk);
            index += 1;
        }
        Ok(report)
    }

    /// Create the chunk file and fill it. The file is closed before returning.
    fn write_chunk<R: Read>(&mut self, reader: &mut R, name: &ChunkName) -> SplitResult<u64> {
        let mut output = File::create(name).map_err(|source| SplitError::OutputCreate {
            path: name.as_path().to_path_buf(),
            source,
        })?;
        let copied = copy_bounded(reader, &mut output, self.chunk_size.bytes(), &mut self.buffer);
        drop(output);

        match copied {
            Ok(written) => Ok(written),
            Err(failure) => {
                if failure.written == 0
                    && let Err(e) = remove_empty(name)
                {
                    warn!("could not remove empty chunk {name}: {e}");
                }
                Err(SplitError::Copy {
                    path: name.as_path().to_path_buf(),
                    source: failure.source,
                })
            }
        }
    }
}

fn remove_empty(name: &ChunkName) -> io::Result<()> {
    fs::remove_file(name)
}

#[derive(Debug)]
struct CopyFailure {
    written: u64,
    source: io::Error,
}

/// Copy at most `limit` bytes from `reader` to `writer`, stopping early at end
/// of input. Reports how much was written even when the copy fails midway,
/// counting bytes a writer accepted before failing in the middle of a buffer.
fn copy_bounded<R, W>(reader: &mut R, writer: &mut W, limit: u64, buf: &mut [u8]) -> Result<u64, CopyFailure>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut written = 0u64;
    while written < limit {
        let want = usize::try_from(limit - written).map_or(buf.len(), |left| left.min(buf.len()));
        let n = match reader.read(&mut buf[..want]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(CopyFailure { written, source }),
        };
        let mut pending = &buf[..n];
        while !pending.is_empty() {
            match writer.write(pending) {
                Ok(0) => {
                    return Err(CopyFailure {
                        written,
                        source: io::Error::from(ErrorKind::WriteZero),
                    });
                }
                Ok(m) => {
                    pending = &pending[m..];
                    written += m as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(source) => return Err(CopyFailure { written, source }),
            }
        }
    }
    writer.flush().map_err(|source| CopyFailure { written, source })?;
    Ok(written)
}
