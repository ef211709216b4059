// error.rs - Error types for yare.
//
// Only compilation can fail. Matching, substitution and splitting are
// total: a missing match is a normal outcome, not an error.

use std::fmt;

/// Error type for flag parsing and pattern compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    /// The flags string contained a letter outside `i`, `x`, `s`, `m`.
    InvalidFlags {
        /// The flags string as given by the caller.
        flags: String,
        /// The first unrecognized character.
        invalid: char,
    },
    /// The engine rejected the pattern.
    InvalidPattern {
        /// The pattern as given by the caller.
        pattern: String,
        /// Diagnostic reported by the engine.
        message: String,
    },
}

impl fmt::Display for RegexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexError::InvalidFlags { flags, invalid } => {
                write!(f, "invalid regex flag {:?} in {:?}", invalid, flags)
            }
            RegexError::InvalidPattern { pattern, message } => {
                write!(f, "invalid regex pattern {:?}: {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for RegexError {}

impl RegexError {
    /// Short tag naming the error kind, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RegexError::InvalidFlags { .. } => "invalid flags",
            RegexError::InvalidPattern { .. } => "invalid pattern",
        }
    }

    pub(crate) fn from_engine(pattern: &str, err: regex::Error) -> Self {
        let message = match err {
            regex::Error::Syntax(msg) => msg,
            regex::Error::CompiledTooBig(limit) => {
                format!("compiled pattern exceeds size limit of {} bytes", limit)
            }
            other => other.to_string(),
        };
        RegexError::InvalidPattern {
            pattern: pattern.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_flags_display() {
        let err = RegexError::InvalidFlags {
            flags: "iq".to_string(),
            invalid: 'q',
        };
        assert_eq!(err.to_string(), r#"invalid regex flag 'q' in "iq""#);
        assert_eq!(err.kind(), "invalid flags");
    }

    #[test]
    fn from_engine_syntax_error() {
        let engine_err = regex::Regex::new("(").unwrap_err();
        let err = RegexError::from_engine("(", engine_err);
        match &err {
            RegexError::InvalidPattern { pattern, message } => {
                assert_eq!(pattern, "(");
                assert!(!message.is_empty());
            }
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
        assert_eq!(err.kind(), "invalid pattern");
        assert!(err.to_string().starts_with("invalid regex pattern \"(\""));
    }

    #[test]
    fn from_engine_size_limit() {
        let err = RegexError::from_engine("a", regex::Error::CompiledTooBig(10));
        assert!(err.to_string().contains("size limit of 10 bytes"));
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(RegexError::InvalidFlags {
            flags: "z".to_string(),
            invalid: 'z',
        });
        assert!(err.to_string().contains("'z'"));
    }
}
