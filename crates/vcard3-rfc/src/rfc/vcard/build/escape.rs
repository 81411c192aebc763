//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Prefixes `,`, `;` and `:` with a backslash and leaves every other
/// character untouched.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        if matches!(c, ',' | ';' | ':') {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
