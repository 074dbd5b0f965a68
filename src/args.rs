// src/args.rs
use clap::Parser;
use std::path::PathBuf;

/// `chunker <inputFilePath> <outputPrefix> <chunkSize>`
///
/// Help and version flags are disabled: anything other than exactly three
/// positional values is an argument error, answered with the usage text.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "chunker",
    about = "Split a file into fixed-size sequential chunks",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Path to the input file to be split.
    #[arg(value_name = "inputFilePath", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Prefix for the output chunk files.
    #[arg(value_name = "outputPrefix", allow_hyphen_values = true)]
    pub prefix: PathBuf,

    /// Size of each chunk, e.g. 1KB, 5MB, 1GB.
    #[arg(value_name = "chunkSize", allow_hyphen_values = true)]
    pub chunk_size: String,
}
