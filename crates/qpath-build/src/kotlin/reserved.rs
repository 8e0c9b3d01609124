use std::fmt::Write;

// Kotlin hard keywords; soft and modifier keywords are valid identifiers
const HARD_KEYWORDS: &[&str] = &[
    "as",
    "break",
    "class",
    "continue",
    "do",
    "else",
    "false",
    "for",
    "fun",
    "if",
    "in",
    "interface",
    "is",
    "null",
    "object",
    "package",
    "return",
    "super",
    "this",
    "throw",
    "true",
    "try",
    "typealias",
    "typeof",
    "val",
    "var",
    "when",
    "while",
];

#[must_use]
pub fn is_keyword(name: &str) -> bool {
    HARD_KEYWORDS.contains(&name)
}

/// Back-quote an identifier that would otherwise parse as a keyword.
#[must_use]
pub fn identifier(name: &str) -> String {
    if is_keyword(name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// A double-quoted Kotlin string literal. `$` is escaped so the text is
/// never treated as a template.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');

    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }

    out.push('"');
    out
}

///
/// TESTS
///
