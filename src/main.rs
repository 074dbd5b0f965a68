#![allow(clippy::multiple_crate_versions)]

use std::io;

fn main() {
    if let Err(e) = chunker::logging::init() {
        eprintln!("chunker: logging disabled: {e}");
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    chunker::app::run(std::env::args_os(), &mut out);
}
