// crates/shared-kernel/src/value_objects/byte_count.rs
use std::fmt;

/// A non-negative number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct ByteCount(u64);

impl ByteCount {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Number of `chunk`-sized pieces needed to hold `self` bytes.
    ///
    /// Returns `None` when `chunk` is zero.
    pub const fn chunks_of(self, chunk: Self) -> Option<u64> {
        if chunk.0 == 0 {
            return None;
        }
        Some(self.0.div_ceil(chunk.0))
    }
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<ByteCount> for u64 {
    fn from(size: ByteCount) -> Self {
        size.bytes()
    }
}

/// Units of the alternate rendering, the same base-2 `KB`/`MB`/`GB` that chunk
/// sizes are written in.
const UNITS: [(&str, u64); 3] = [("GB", 1 << 30), ("MB", 1 << 20), ("KB", 1 << 10)];

/// `{}` prints the raw byte count. `{:#}` prints it in the largest unit that
/// fits, with one truncated decimal unless the count is an exact multiple:
/// `5 MB`, `4.8 KB`, `1023 B`.
impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return write!(f, "{}", self.0);
        }
        let Some(&(unit, scale)) = UNITS.iter().find(|&&(_, scale)| self.0 >= scale) else {
            return write!(f, "{} B", self.0);
        };
        let (whole, rest) = (self.0 / scale, self.0 % scale);
        if rest == 0 {
            write!(f, "{whole} {unit}")
        } else {
            write!(f, "{whole}.{} {unit}", rest * 10 / scale)
        }
    }
}
