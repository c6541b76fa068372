//! Text manipulation utilities

/// Renders `s` as a double-quoted Elm string literal.
pub fn elm_string_literal(s: &str) -> String {
    let mut literal = String::with_capacity(s.len() + 2);
    literal.push('"');
    for c in s.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}

/// Wraps a type expression in parentheses when it spans several tokens, so
/// it can be used as a constructor argument.
pub fn parenthesize_type(type_text: &str) -> String {
    let trimmed = type_text.trim();
    if trimmed.split_whitespace().nth(1).is_none() {
        trimmed.to_string()
    } else {
        format!("({trimmed})")
    }
}
