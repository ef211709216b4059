// flags.rs - Single-letter regex flags.
//
// A flags string such as "ix" selects engine options. The accepted
// alphabet is fixed; any other letter rejects the whole string.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use bitflags::bitflags;
use regex::Regex as EngineRegex;

use crate::error::RegexError;

bitflags! {
    /// Set of matching options selected by a flags string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FlagSet: u8 {
        /// `i`: case-insensitive matching.
        const CASE_INSENSITIVE = 1 << 0;
        /// `x`: whitespace in the pattern is ignored and `#` starts a comment.
        const EXTENDED = 1 << 1;
        /// `s`: `.` also matches `\n`.
        const DOT_MATCHES_NEWLINE = 1 << 2;
        /// `m`: `^` and `$` match at every line boundary.
        const MULTI_LINE = 1 << 3;
    }
}

const FLAG_LETTERS: [(char, FlagSet); 4] = [
    ('i', FlagSet::CASE_INSENSITIVE),
    ('x', FlagSet::EXTENDED),
    ('s', FlagSet::DOT_MATCHES_NEWLINE),
    ('m', FlagSet::MULTI_LINE),
];

static INVALID_FLAGS: LazyLock<EngineRegex> =
    LazyLock::new(|| EngineRegex::new("[^ixsm]").expect("flag validation pattern is valid"));

/// Parse a flags string into a [`FlagSet`].
///
/// # Examples
///
/// ```
/// use yare::flags::{parse_flags, FlagSet};
///
/// let flags = parse_flags("ix").unwrap();
/// assert_eq!(flags, FlagSet::CASE_INSENSITIVE | FlagSet::EXTENDED);
/// assert!(parse_flags("iq").is_err());
/// ```
pub fn parse_flags(flags: &str) -> Result<FlagSet, RegexError> {
    if let Some(m) = INVALID_FLAGS.find(flags) {
        // The match is a single char by construction.
        let invalid = m.as_str().chars().next().unwrap_or_default();
        return Err(RegexError::InvalidFlags {
            flags: flags.to_string(),
            invalid,
        });
    }

    Ok(flags.chars().fold(FlagSet::empty(), |acc, c| {
        FLAG_LETTERS
            .iter()
            .find(|(letter, _)| *letter == c)
            .map_or(acc, |&(_, flag)| acc | flag)
    }))
}

impl FromStr for FlagSet {
    type Err = RegexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flags(s)
    }
}

impl fmt::Display for FlagSet {
    /// Writes the canonical letters in `ixsm` order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &(letter, flag) in &FLAG_LETTERS {
            if self.contains(flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}
