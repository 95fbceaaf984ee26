//! `{key}` placeholder substitution.
//!
//! Templates are plain strings with `{key}` placeholders. Values are given
//! as an ordered list of `(key, value)` pairs and pass through an
//! [`Escaper`] before substitution; the template text itself is never
//! escaped. Placeholders without a matching key are left literally in the
//! output, and rendering never fails.

use crate::{Escaper, HtmlEscaper, PlainText, Tainted, Verified};

/// Renders `template` for HTML display, escaping every value.
///
/// # Examples
///
/// ```
/// use content_audit::render;
///
/// let out = render(
///     r#"Created {item_type} "{item_title}""#,
///     [("item_type", "post"), ("item_title", "Hello")],
/// );
/// assert_eq!(out, r#"Created post "Hello""#);
///
/// // Unknown placeholders stay literal
/// assert_eq!(render("{x}", [] as [(&str, &str); 0]), "{x}");
/// ```
pub fn render<I, K, V>(template: &str, fields: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    render_with(&HtmlEscaper, template, fields)
}

/// Renders `template` as a single plain-text line.
///
/// Values keep any markup but have control characters flattened to spaces.
pub fn interpolate<I, K, V>(template: &str, fields: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    render_with(&PlainText, template, fields)
}

/// Renders `template`, escaping values with `escaper`.
///
/// When a key appears more than once, the first pair wins.
pub fn render_with<E, I, K, V>(escaper: &E, template: &str, fields: I) -> String
where
    E: Escaper + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let escaped: Vec<(K, Verified<String>)> = fields
        .into_iter()
        .map(|(key, value)| {
            let verified = escaper.escape(Tainted::new(value.as_ref().to_string()));
            (key, verified)
        })
        .collect();

    substitute(template, |key| {
        escaped
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_str())
    })
}

/// Returns the placeholder keys referenced by `template`, in order.
///
/// # Examples
///
/// ```
/// use content_audit::placeholders;
///
/// assert_eq!(
///     placeholders(r#"Moved {item_type} "{item_title}" to the trash"#),
///     vec!["item_type", "item_title"],
/// );
/// ```
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    let mut rest = template;
    while let Some((_, key, after)) = next_placeholder(rest) {
        keys.push(key);
        rest = after;
    }
    keys
}

fn substitute<'v, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'v str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((before, key, after)) = next_placeholder(rest) {
        out.push_str(before);
        match lookup(key) {
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = after;
    }

    out.push_str(rest);
    out
}

/// Splits off the next `{key}` as `(text before, key, text after)`.
///
/// A `{` that is followed by another `{` before any `}` is literal text, so
/// `{{a}` yields the placeholder `a` preceded by a literal brace.
fn next_placeholder(input: &str) -> Option<(&str, &str, &str)> {
    let mut offset = 0;
    loop {
        let open = offset + input[offset..].find('{')?;
        let after_open = &input[open + 1..];
        let close = after_open.find('}')?;
        let key = &after_open[..close];
        if key.contains('{') {
            offset = open + 1;
            continue;
        }
        return Some((&input[..open], key, &after_open[close + 1..]));
    }
}
