//! Escaping for record-label markup.
//!
//! Node labels are handed to Graphviz as HTML-like record markup, so text
//! from the CSV must have its reserved characters replaced with entities
//! before it is embedded.

/// Escapes the markup-reserved characters `"`, `&`, `<`, and `>`.
///
/// The replacement happens in a single pass over the input. An ampersand
/// produced by one replacement is never re-examined, so escaped text contains
/// no accidental double-encoding (`&` becomes `&amp;`, never `&amp;amp;`).
///
/// # Examples
///
/// ```
/// use armature_core::escape_markup;
///
/// assert_eq!(escape_markup("A & B"), "A &amp; B");
/// assert_eq!(escape_markup("<<note>>"), "&lt;&lt;note&gt;&gt;");
/// ```
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("&quot;"),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
