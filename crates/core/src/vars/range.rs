//! Random integer grammar: `<min>-<max>` or a plain exclusive bound.

use rand::Rng;

use super::errors::ParseError;
use super::variable::parse_i64;

/// Parsed form of a random-integer value.
///
/// The grammar is decided once, before any field is parsed:
///
/// - a `-` anywhere after the first character selects [`RangeSpec::Inclusive`]
///   (`"0-9"`, `"-5--1"`),
/// - anything else is a plain integer and selects [`RangeSpec::Below`]
///   (`"10"`, `"-5"`).
///
/// A leading `-` is a sign, never a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSpec {
    /// Uniform over `[min, max]`, both ends included.
    Inclusive { min: i64, max: i64 },
    /// Uniform over `[0, bound)`.
    Below(i64),
}

impl RangeSpec {
    /// Parse the value of variable `name`.
    pub fn parse(name: &str, value: &str) -> Result<Self, ParseError> {
        let trimmed = value.trim();

        let Some(idx) = separator_index(trimmed) else {
            let bound = parse_i64(name, trimmed)?;
            if bound <= 0 {
                return Err(ParseError::EmptyBound { name: name.to_string(), bound });
            }
            return Ok(Self::Below(bound));
        };

        let malformed =
            || ParseError::MalformedRange { name: name.to_string(), value: value.to_string() };

        let min = trimmed[..idx].trim().parse::<i64>().map_err(|_| malformed())?;
        let max = trimmed[idx + 1..].trim().parse::<i64>().map_err(|_| malformed())?;

        if min > max {
            return Err(ParseError::InvertedRange { name: name.to_string(), min, max });
        }

        Ok(Self::Inclusive { min, max })
    }

    /// Draw one value from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        match *self {
            Self::Inclusive { min, max } => rng.gen_range(min..=max),
            Self::Below(bound) => rng.gen_range(0..bound),
        }
    }
}

/// Byte index of the first `-` that is not the leading sign.
fn separator_index(s: &str) -> Option<usize> {
    s.char_indices().skip(1).find(|&(_, c)| c == '-').map(|(i, _)| i)
}
