// api.rs - Compiled patterns and first-match lookup.
//
// Wraps the `regex` engine with the flag-letter surface a structured-text
// parser expects: Regex, RegexBuilder, Match, plus free functions taking
// the compiled pattern as their first argument.

use std::ops::Range;

use crate::error::RegexError;
use crate::flags::{parse_flags, FlagSet};

/// Compile `pattern` with a flags string such as `"ix"`.
///
/// Fails with [`RegexError::InvalidFlags`] before the engine is consulted
/// when `flags` contains an unknown letter, and with
/// [`RegexError::InvalidPattern`] when the engine rejects `pattern`.
///
/// With `m`, `^` and `$` treat `\n`, `\r` and `\r\n` as line breaks.
/// Without `m`, `$` matches only at the very end of the subject, never
/// before a trailing newline: `a$` does not match `"a\n"`. Write
/// `a\n?\z` (or compile with `m`) when a final line break must be
/// tolerated.
///
/// # Examples
///
/// ```
/// use yare::api::{compile, first_match_range};
///
/// let re = compile("[0-9]+", "").unwrap();
/// assert_eq!(first_match_range(&re, "abc123def"), Some(3..6));
/// ```
pub fn compile(pattern: &str, flags: &str) -> Result<Regex, RegexError> {
    let flags = parse_flags(flags)?;
    RegexBuilder::new(pattern).flags(flags).build()
}

/// Byte range of the leftmost match of `re` in `text`.
pub fn first_match_range(re: &Regex, text: &str) -> Option<Range<usize>> {
    re.find(text).map(|m| m.range())
}

/// `true` iff `re` matches somewhere in `text`.
pub fn matches(re: &Regex, text: &str) -> bool {
    re.is_match(text)
}

/// A compiled regular expression.
///
/// Immutable once built; clone it or share it by reference across
/// threads freely.
///
/// # Examples
///
/// ```
/// use yare::api::Regex;
///
/// let re = Regex::new(r"\d+").unwrap();
/// assert!(re.is_match("hello 42"));
///
/// let m = re.find("hello 42").unwrap();
/// assert_eq!(m.as_str(), "42");
/// assert_eq!(m.start(), 6);
/// assert_eq!(m.end(), 8);
/// ```
#[derive(Clone)]
pub struct Regex {
    pub(crate) inner: regex::Regex,
    flags: FlagSet,
}

impl Regex {
    /// Compile a pattern with no flags.
    pub fn new(pattern: &str) -> Result<Regex, RegexError> {
        RegexBuilder::new(pattern).build()
    }

    /// Compile a pattern with a flags string. Same as [`compile`].
    pub fn with_flags(pattern: &str, flags: &str) -> Result<Regex, RegexError> {
        compile(pattern, flags)
    }

    /// Create a [`RegexBuilder`] for fine-grained control over compilation.
    pub fn builder(pattern: &str) -> RegexBuilder {
        RegexBuilder::new(pattern)
    }

    /// Return the leftmost match in `text`, or `None` if no match.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.inner.find(text).map(|m| Match {
            text,
            start: m.start(),
            end: m.end(),
        })
    }

    /// Check whether `text` matches the pattern anywhere.
    pub fn is_match(&self, text: &str) -> bool {
        self.inner.is_match(text)
    }

    /// The pattern source this regex was compiled from.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// The flags this regex was compiled with.
    pub fn flags(&self) -> FlagSet {
        self.flags
    }

    /// Number of capture groups in the pattern (excluding group 0).
    pub fn captures_len(&self) -> usize {
        self.inner.captures_len() - 1
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &self.as_str())
            .field("flags", &self.flags)
            .finish()
    }
}

// === RegexBuilder ===

/// Builder for compiling a [`Regex`] with custom options.
///
/// # Examples
///
/// ```
/// use yare::api::Regex;
///
/// let re = Regex::builder(r"hello world")
///     .case_insensitive(true)
///     .build()
///     .unwrap();
/// assert!(re.is_match("Hello World"));
/// ```
#[derive(Debug, Clone)]
pub struct RegexBuilder {
    pattern: String,
    flags: FlagSet,
    size_limit: Option<usize>,
}

impl RegexBuilder {
    /// Create a new builder for the given pattern.
    pub fn new(pattern: &str) -> Self {
        RegexBuilder {
            pattern: pattern.to_string(),
            flags: FlagSet::empty(),
            size_limit: None,
        }
    }

    /// Enable or disable case-insensitive matching (`i`).
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.flags.set(FlagSet::CASE_INSENSITIVE, yes);
        self
    }

    /// Enable or disable extended mode (`x`): whitespace and `#` comments ignored.
    pub fn extended(mut self, yes: bool) -> Self {
        self.flags.set(FlagSet::EXTENDED, yes);
        self
    }

    /// Enable or disable `.` matching `\n` (`s`).
    pub fn dot_matches_newline(mut self, yes: bool) -> Self {
        self.flags.set(FlagSet::DOT_MATCHES_NEWLINE, yes);
        self
    }

    /// Enable or disable `^`/`$` matching at every line boundary (`m`).
    ///
    /// `\r\n` counts as a single line boundary.
    pub fn multi_line_anchors(mut self, yes: bool) -> Self {
        self.flags.set(FlagSet::MULTI_LINE, yes);
        self
    }

    /// Replace all flags at once.
    pub fn flags(mut self, flags: FlagSet) -> Self {
        self.flags = flags;
        self
    }

    /// Cap the size of the compiled program, in bytes.
    ///
    /// Patterns exceeding it fail with [`RegexError::InvalidPattern`].
    /// Defaults to the engine's own limit.
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Compile the pattern into a [`Regex`].
    pub fn build(self) -> Result<Regex, RegexError> {
        let mut builder = regex::RegexBuilder::new(&self.pattern);
        builder
            .case_insensitive(self.flags.contains(FlagSet::CASE_INSENSITIVE))
            .ignore_whitespace(self.flags.contains(FlagSet::EXTENDED))
            .dot_matches_new_line(self.flags.contains(FlagSet::DOT_MATCHES_NEWLINE))
            .multi_line(self.flags.contains(FlagSet::MULTI_LINE))
            .crlf(self.flags.contains(FlagSet::MULTI_LINE));
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }

        match builder.build() {
            Ok(inner) => {
                log::trace!("compiled {:?} with flags {:?}", self.pattern, self.flags.to_string());
                Ok(Regex {
                    inner,
                    flags: self.flags,
                })
            }
            Err(err) => {
                let err = RegexError::from_engine(&self.pattern, err);
                log::debug!("{}", err);
                Err(err)
            }
        }
    }
}

// === Match ===

/// A single match result referencing the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the match (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the match.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text.
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// Returns the length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the match is empty (zero-length).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
