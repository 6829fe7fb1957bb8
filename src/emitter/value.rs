//! Translates Jelly attribute values and text into Groovy expressions.
use crate::pipeline::config::StringEscaping;

/// Translates one raw value. The first matching rule wins:
///
/// 1. `${%key}` becomes a localization lookup, `_("key")`.
/// 2. `${expr}` becomes the bare expression `expr`.
/// 3. Anything else is trimmed and quoted as a string literal.
pub fn translate_value(input: &str, escaping: StringEscaping) -> String {
    if let Some(rest) = input.strip_prefix("${%") {
        // Only the opening marker is checked; the last character is dropped regardless.
        let mut chars = rest.chars();
        chars.next_back();
        return format!("_(\"{}\")", escape(chars.as_str(), escaping));
    }
    if let Some(expr) = input.strip_prefix("${").and_then(|s| s.strip_suffix('}')) {
        return expr.to_string();
    }
    format!("\"{}\"", escape(input.trim(), escaping))
}

fn escape(literal: &str, escaping: StringEscaping) -> String {
    match escaping {
        StringEscaping::Verbatim => literal.to_string(),
        StringEscaping::Escape => {
            let mut out = String::with_capacity(literal.len());
            for c in literal.chars() {
                match c {
                    '\\' | '"' | '$' => {
                        out.push('\\');
                        out.push(c);
                    }
                    _ => out.push(c),
                }
            }
            out
        }
    }
}
