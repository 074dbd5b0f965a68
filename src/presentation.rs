// src/presentation.rs
use chunker_engine::{ProgressSink, WrittenChunk};
use chunker_shared_kernel::ChunkerError;
use log::warn;
use std::io::{self, Write};

const RULE: &str = "=====================================================";
const THIN_RULE: &str = "-----------------------------------------------------";
const HOMEPAGE: &str = "https://github.com/itpey/chunker";

pub fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "                  CHUNKER - USAGE")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Usage: chunker <inputFilePath> <outputPrefix> <chunkSize>")?;
    writeln!(out, "{THIN_RULE}")?;
    writeln!(out, "- inputFilePath: Path to the input file to be split.")?;
    writeln!(out, "- outputPrefix: Prefix for the output chunk files.")?;
    writeln!(out, "- chunkSize: Size of each chunk. Examples: 1KB, 5MB, 1GB.")?;
    writeln!(out, "- Supported units: B, KB, MB, GB. Default unit is bytes.")?;
    writeln!(out, "{THIN_RULE}")?;
    writeln!(out, "Example: chunker input.txt outputChunk 5MB")?;
    writeln!(out, "{THIN_RULE}")?;
    writeln!(out, "For more information, visit: {HOMEPAGE}")?;
    writeln!(out, "{RULE}")
}

pub fn print_error<W: Write>(out: &mut W, err: &ChunkerError) -> io::Result<()> {
    writeln!(out, "error: {err}")
}

/// Prints one `Chunk <name> created.` line per finalized chunk.
pub struct ConsoleProgress<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> ConsoleProgress<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<'_, W> {
    fn on_chunk(&mut self, chunk: &WrittenChunk) {
        if let Err(e) = writeln!(self.out, "Chunk {} created.", chunk.name) {
            warn!("failed to report {}: {e}", chunk.name);
        }
    }
}
