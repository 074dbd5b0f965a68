// src/app.rs
use crate::args::Args;
use crate::presentation::{self, ConsoleProgress};
use chunker_engine::{SplitOptions, SplitReport, parse_size, split_file};
use clap::Parser;
use log::{debug, warn};
use std::ffi::OsString;
use std::io::Write;

/// Run one invocation against `argv` (program name first), writing every
/// user-facing line to `out`.
///
/// Failures are reported on `out` and never escalate: the caller always exits
/// normally.
pub fn run<I, T, W>(argv: I, out: &mut W)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            debug!("rejected arguments: {:?}", e.kind());
            report(presentation::print_usage(out));
            return;
        }
    };

    if let Err(err) = execute(&args, out) {
        report(presentation::print_error(out, &err));
        if err.is_size_error() {
            report(presentation::print_usage(out));
        }
    }
}

/// Parse the chunk size and split the input, printing a line per chunk.
///
/// # Errors
/// Size parsing errors and any [`chunker_shared_kernel::SplitError`].
pub fn execute<W: Write>(args: &Args, out: &mut W) -> chunker_shared_kernel::Result<SplitReport> {
    let chunk_size = parse_size(&args.chunk_size)?;
    let options = SplitOptions::new(&args.input, &args.prefix, chunk_size);
    let report = split_file(&options, &mut ConsoleProgress::new(out))?;
    Ok(report)
}

fn report(written: std::io::Result<()>) {
    if let Err(e) = written {
        warn!("failed to write to stdout: {e}");
    }
}
