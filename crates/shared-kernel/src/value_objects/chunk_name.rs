// crates/shared-kernel/src/value_objects/chunk_name.rs
use std::{
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
};

/// Name of the `index`-th chunk written under `prefix`: `<prefix>_<index>`.
///
/// Indices start at 1 and are never zero-padded. The prefix is taken as an
/// opaque path, so it may point into another directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkName {
    index: u64,
    path: PathBuf,
}

impl ChunkName {
    pub fn new(prefix: impl AsRef<Path>, index: u64) -> Self {
        let mut name = OsString::from(prefix.as_ref().as_os_str());
        name.push(format!("_{index}"));
        Self {
            index,
            path: PathBuf::from(name),
        }
    }

    #[inline]
    pub const fn index(&self) -> u64 {
        self.index
    }

    #[inline]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ChunkName {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ChunkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
