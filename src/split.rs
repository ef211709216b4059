// split.rs - Split a string in two around the first match.
//
// split_lead cuts just after the first match, split_trail just before it.
// Both pairs always concatenate back to the input.

use crate::api::Regex;

/// Split `text` immediately after the first match of `re`.
///
/// Returns `("", text)` when there is no match.
///
/// # Examples
///
/// ```
/// use yare::api::Regex;
/// use yare::split::split_lead;
///
/// let re = Regex::new(":").unwrap();
/// assert_eq!(split_lead(&re, "key: value"), ("key:".to_string(), " value".to_string()));
/// ```
pub fn split_lead(re: &Regex, text: &str) -> (String, String) {
    let (lead, rest) = re.split_lead_str(text);
    (lead.to_string(), rest.to_string())
}

/// Split `text` immediately before the first match of `re`.
///
/// Returns `(text, "")` when there is no match.
///
/// # Examples
///
/// ```
/// use yare::api::Regex;
/// use yare::split::split_trail;
///
/// let re = Regex::new(":").unwrap();
/// assert_eq!(split_trail(&re, "key: value"), ("key".to_string(), ": value".to_string()));
/// ```
pub fn split_trail(re: &Regex, text: &str) -> (String, String) {
    let (head, trail) = re.split_trail_str(text);
    (head.to_string(), trail.to_string())
}

impl Regex {
    /// Method form of [`split_lead`].
    pub fn split_lead(&self, text: &str) -> (String, String) {
        split_lead(self, text)
    }

    /// Method form of [`split_trail`].
    pub fn split_trail(&self, text: &str) -> (String, String) {
        split_trail(self, text)
    }

    /// Borrowing [`split_lead`]: both halves are slices of `text`.
    pub fn split_lead_str<'t>(&self, text: &'t str) -> (&'t str, &'t str) {
        match self.find(text) {
            Some(m) => text.split_at(m.end()),
            None => ("", text),
        }
    }

    /// Borrowing [`split_trail`]: both halves are slices of `text`.
    pub fn split_trail_str<'t>(&self, text: &'t str) -> (&'t str, &'t str) {
        match self.find(text) {
            Some(m) => text.split_at(m.start()),
            None => (text, ""),
        }
    }
}
