/// Whether `s` is usable as a single name segment: a letter or underscore
/// followed by letters, digits, or underscores.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_underscored_names() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_super"));
        assert!(is_identifier("créé"));
        assert!(is_identifier("field2"));
    }

    #[test]
    fn rejects_empty_and_punctuated_names() {
        assert!(!is_identifier(""), "empty identifiers should fail");
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a.b"));
    }
}
