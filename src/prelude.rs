// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use yare::prelude::*;
//!
//! let re = Regex::with_flags(r"^\s*-", "m").unwrap();
//! assert!(matches(&re, "a\n  - b"));
//! ```

pub use crate::api::{compile, first_match_range, matches, Match, Regex, RegexBuilder};
pub use crate::error::RegexError;
pub use crate::flags::{parse_flags, FlagSet};
pub use crate::replace::{replace_literal, substitute};
pub use crate::split::{split_lead, split_trail};
