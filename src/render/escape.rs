//! HTML text escaping

/// Append `s` to `output` with HTML-significant characters escaped.
///
/// Safe for both element content and single- or double-quoted attributes.
pub fn push_escaped(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            c => output.push(c),
        }
    }
}

/// Escape `s` into a new string
pub fn escape(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    push_escaped(&mut output, s);
    output
}
