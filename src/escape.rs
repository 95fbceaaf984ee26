use std::fmt;

/// A host-supplied string that has not been escaped yet.
///
/// Titles, type slugs and edit links are all host data. They enter
/// rendering as `Tainted` and leave it only through an [`Escaper`].
#[derive(Clone, PartialEq, Eq)]
pub struct Tainted<T>(T);

impl<T> Tainted<T> {
    /// Marks `value` as unescaped host data.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tainted").field(&self.0).finish()
    }
}

/// Output of an [`Escaper`], ready to be placed into a rendered message.
///
/// Only escapers in this crate construct it:
///
/// ```compile_fail
/// use content_audit::Verified;
///
/// let verified = Verified::new_unchecked("<b>".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T>(T);

impl<T> Verified<T> {
    fn new_unchecked(value: T) -> Self {
        Self(value)
    }

    /// Returns the escaped value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl Verified<String> {
    /// Borrows the escaped string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Verified<String> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns host-supplied strings into values safe for a particular output.
///
/// # Invariants
///
/// Implementations MUST:
/// - Be total: every input produces an output, never an error
/// - Return the processed value, never the raw input with markup intact
/// - Be idempotent on output that contains no characters they rewrite
pub trait Escaper {
    /// Escapes a tainted value for output.
    fn escape(&self, input: Tainted<String>) -> Verified<String>;
}

/// Escapes the five HTML-significant characters.
///
/// Suitable for both element text and double- or single-quoted attribute
/// values, so the same escaper is used for titles and edit links.
///
/// # Examples
///
/// ```
/// use content_audit::{Escaper, HtmlEscaper, Tainted};
///
/// let escaped = HtmlEscaper.escape(Tainted::new("Fish & \"Chips\"".to_string()));
/// assert_eq!(escaped.as_str(), "Fish &amp; &quot;Chips&quot;");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape(&self, input: Tainted<String>) -> Verified<String> {
        let raw = input.into_inner();

        // Fast path: nothing to rewrite
        if !raw.contains(['&', '<', '>', '"', '\'']) {
            return Verified::new_unchecked(raw);
        }

        let mut out = String::with_capacity(raw.len() + 16);
        for c in raw.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                other => out.push(other),
            }
        }
        Verified::new_unchecked(out)
    }
}

/// Plain-text output: keeps markup as-is but flattens control characters.
///
/// Newlines, carriage returns, tabs and other control characters are
/// replaced by a single space each, so an interpolated message always stays
/// on one log line.
///
/// # Examples
///
/// ```
/// use content_audit::{Escaper, PlainText, Tainted};
///
/// let flat = PlainText.escape(Tainted::new("line one\nline <two>".to_string()));
/// assert_eq!(flat.as_str(), "line one line <two>");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Escaper for PlainText {
    fn escape(&self, input: Tainted<String>) -> Verified<String> {
        let raw = input.into_inner();
        if !raw.chars().any(char::is_control) {
            return Verified::new_unchecked(raw);
        }
        let flat = raw
            .chars()
            .map(|c| if char::is_control(c) { ' ' } else { c })
            .collect();
        Verified::new_unchecked(flat)
    }
}
