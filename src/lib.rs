//! # yare
//!
//! Regular-expression utilities for structured-text parsers, built on the
//! [`regex`](https://crates.io/crates/regex) engine.
//!
//! Patterns are compiled with a short flags string (`i`, `x`, `s`, `m`),
//! then used to find the first match, substitute every match through a
//! callback, or split a line in two around the first match.
//!
//! ## Quick Start
//!
//! ```rust
//! use yare::prelude::*;
//!
//! let re = compile(r"[0-9]+", "").unwrap();
//! assert_eq!(first_match_range(&re, "abc123def"), Some(3..6));
//!
//! let out = substitute(&re, "x1y22z", |_| "#".to_string());
//! assert_eq!(out, "x#y#z");
//!
//! let colon = compile(":", "").unwrap();
//! assert_eq!(colon.split_lead_str("key: value"), ("key:", " value"));
//! assert_eq!(colon.split_trail_str("key: value"), ("key", ": value"));
//! ```
//!
//! Unknown flag letters are rejected as a whole:
//!
//! ```rust
//! use yare::prelude::*;
//!
//! let err = compile("pattern", "q").unwrap_err();
//! assert!(matches!(err, RegexError::InvalidFlags { invalid: 'q', .. }));
//! ```
//!
//! ## Matching cost
//!
//! The engine runs in time linear in the subject length for any pattern,
//! so there is no catastrophic backtracking. Callers that accept
//! untrusted patterns can bound compile cost with
//! [`RegexBuilder::size_limit`](api::RegexBuilder::size_limit).
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`flags`] | Flag letters to [`FlagSet`](flags::FlagSet) |
//! | [`api`] | Compilation, [`Regex`](api::Regex), first match |
//! | [`replace`] | Callback substitution, literal replace |
//! | [`split`] | Lead/trail splitting around the first match |
//! | [`error`] | [`RegexError`](error::RegexError) |

pub mod api;
pub mod error;
pub mod flags;
pub mod prelude;
pub mod replace;
pub mod split;
