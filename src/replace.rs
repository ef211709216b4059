// replace.rs - Callback substitution and literal replacement.

use memchr::memmem;
use smallvec::SmallVec;

use crate::api::Regex;

/// Inline capacity for the per-match group slice; most patterns a
/// parser uses have only a handful of groups.
type Groups<'t> = SmallVec<[&'t str; 8]>;

/// Replace every non-overlapping match of `re` in `text` with the output
/// of `transform`.
///
/// `transform` receives the whole match at index 0 followed by each
/// capture group; a group that did not take part in the match is `""`.
/// It is called once per match, left to right. Each search resumes at
/// the end of the previous match, one char further when that match was
/// empty, so an empty match right after a non-empty one is still
/// reported. The output is assembled
/// in a fresh buffer, so replacement text is never rescanned and its
/// length has no effect on where later replacements land.
///
/// # Examples
///
/// ```
/// use yare::api::Regex;
/// use yare::replace::substitute;
///
/// let re = Regex::new(r"(\w+)=(\w+)").unwrap();
/// let out = substitute(&re, "a=1, b=2", |caps| format!("{}:{}", caps[2], caps[1]));
/// assert_eq!(out, "1:a, 2:b");
/// ```
pub fn substitute<F>(re: &Regex, text: &str, mut transform: F) -> String
where
    F: FnMut(&[&str]) -> String,
{
    let mut locs = re.inner.capture_locations();
    let mut out = String::with_capacity(text.len());
    let mut groups: Groups<'_> = SmallVec::with_capacity(locs.len());
    let mut last_end = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(whole) = re.inner.captures_read_at(&mut locs, text, pos) else {
            break;
        };

        groups.clear();
        groups.extend((0..locs.len()).map(|i| locs.get(i).map_or("", |(s, e)| &text[s..e])));

        out.push_str(&text[last_end..whole.start()]);
        out.push_str(&transform(&groups[..]));
        last_end = whole.end();

        // An empty match resumes one char later; otherwise right at its end.
        pos = if whole.start() == whole.end() {
            match text[whole.end()..].chars().next() {
                Some(c) => whole.end() + c.len_utf8(),
                None => break,
            }
        } else {
            whole.end()
        };
    }

    out.push_str(&text[last_end..]);
    out
}

/// Replace every non-overlapping occurrence of the literal `needle` in
/// `text` with `with`, scanning left to right.
///
/// An empty `needle` leaves `text` unchanged.
///
/// # Examples
///
/// ```
/// use yare::replace::replace_literal;
///
/// assert_eq!(replace_literal("a.b.c", ".", "::"), "a::b::c");
/// ```
pub fn replace_literal(text: &str, needle: &str, with: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;
    for start in memmem::find_iter(text.as_bytes(), needle.as_bytes()) {
        out.push_str(&text[last_end..start]);
        out.push_str(with);
        last_end = start + needle.len();
    }
    out.push_str(&text[last_end..]);
    out
}

impl Regex {
    /// Method form of [`substitute`].
    pub fn replace_with<F>(&self, text: &str, transform: F) -> String
    where
        F: FnMut(&[&str]) -> String,
    {
        substitute(self, text, transform)
    }
}
