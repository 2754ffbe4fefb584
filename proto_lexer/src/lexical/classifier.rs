//! Character class predicates used by both scanners

pub fn is_alpha_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Identifier continuation: letters, digits and `_`
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace that separates tokens
pub fn is_ignorable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

pub fn is_relational_start(c: char) -> bool {
    matches!(c, '>' | '<' | '=')
}

pub fn is_math_or_bit_start(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '~' | '=')
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert!(is_alpha_start('a') && is_alpha_start('Z'));
        assert!(!is_alpha_start('_') && !is_alpha_start('1'));
        assert!(is_word_char('_') && is_word_char('9'));
        assert!(!is_alpha_start('é') && !is_word_char('é'));
        assert!(is_ignorable('\r') && !is_ignorable('\u{a0}'));
        assert!(is_relational_start('=') && is_math_or_bit_start('='));
        assert!(!is_relational_start('!') && !is_math_or_bit_start('!'));
        assert!(is_hex_digit('f') && !is_hex_digit('g'));
    }
}
