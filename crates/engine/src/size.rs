use chunker_shared_kernel::{ByteCount, SizeError, SizeResult};

/// Unit symbol accepted after the magnitude of a size specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Byte,
    Kilo,
    Mega,
    Giga,
}

impl SizeUnit {
    const KB: u64 = 1024;
    const MB: u64 = Self::KB * 1024;
    const GB: u64 = Self::MB * 1024;

    pub const fn multiplier(self) -> u64 {
        match self {
            Self::Byte => 1,
            Self::Kilo => Self::KB,
            Self::Mega => Self::MB,
            Self::Giga => Self::GB,
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'B' => Some(Self::Byte),
            'K' => Some(Self::Kilo),
            'M' => Some(Self::Mega),
            'G' => Some(Self::Giga),
            _ => None,
        }
    }
}

/// Parse a human-readable size such as `10`, `5KB`, `3 m` or `2GB`.
///
/// The accepted shape is: one or more ASCII digits, optional spaces or tabs,
/// an optional unit letter (`B`, `K`, `M`, `G`, any case), after a unit letter
/// an optional literal `B`, and optional trailing spaces or tabs. A missing
/// unit means bytes.
///
/// # Errors
/// [`SizeError::InvalidFormat`] if the string does not have that shape,
/// [`SizeError::InvalidMagnitude`] if the result does not fit in 64 bits.
pub fn parse_size(input: &str) -> SizeResult<ByteCount> {
    const BLANK: [char; 2] = [' ', '\t'];
    let invalid_format = || SizeError::InvalidFormat { input: input.to_string() };

    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if digits_end == 0 {
        return Err(invalid_format());
    }
    let (digits, rest) = input.split_at(digits_end);

    let mut symbols = rest.trim_matches(BLANK).chars();
    let unit = match symbols.next() {
        None => SizeUnit::Byte,
        Some(c) => SizeUnit::from_symbol(c).ok_or_else(invalid_format)?,
    };
    if !matches!(symbols.as_str(), "" | "B" | "b") {
        return Err(invalid_format());
    }

    let magnitude: u64 = digits.parse().map_err(|err| SizeError::InvalidMagnitude {
        input: input.to_string(),
        reason: format!("{err}"),
    })?;
    magnitude
        .checked_mul(unit.multiplier())
        .map(ByteCount::new)
        .ok_or_else(|| SizeError::InvalidMagnitude {
            input: input.to_string(),
            reason: "number too large to fit in target type".to_string(),
        })
}
