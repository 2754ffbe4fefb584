//! Static lookup tables
//!
//! Tables are ordered `(text, kind)` slices searched front to back; the first
//! exact match wins. They are plain data so the vocabulary can be read and
//! extended without touching scanner control flow.

use super::kind::TokenKind;

/// Reserved words, scalar type names included
pub static KEYWORDS: &[(&str, TokenKind)] = &[
    ("syntax", TokenKind::Syntax),
    ("package", TokenKind::Package),
    ("message", TokenKind::Message),
    ("import", TokenKind::Import),
    ("optional", TokenKind::Optional),
    ("required", TokenKind::Required),
    ("repeated", TokenKind::Repeated),
    ("int32", TokenKind::Int32),
    ("int64", TokenKind::Int64),
    ("uint32", TokenKind::Uint32),
    ("uint64", TokenKind::Uint64),
    ("sint32", TokenKind::Sint32),
    ("sint64", TokenKind::Sint64),
    ("fixed32", TokenKind::Fixed32),
    ("fixed64", TokenKind::Fixed64),
    ("sfixed32", TokenKind::Sfixed32),
    ("sfixed64", TokenKind::Sfixed64),
    ("bool", TokenKind::Bool),
    ("float", TokenKind::Float),
    ("double", TokenKind::Double),
    ("string", TokenKind::String),
    ("bytes", TokenKind::Bytes),
];

/// One to three character operators matched against a whole greedy run
pub static OPERATORS: &[(&str, TokenKind)] = &[
    // arithmetic
    ("+", TokenKind::Add),
    ("-", TokenKind::Subtract),
    ("*", TokenKind::Multiply),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Remainder),
    ("+=", TokenKind::AddEqual),
    ("-=", TokenKind::SubtractEqual),
    ("*=", TokenKind::MultiplyEqual),
    ("/=", TokenKind::DivideEqual),
    ("%=", TokenKind::RemainderEqual),
    ("++", TokenKind::SelfAdd),
    ("--", TokenKind::SelfSubtract),
    // bitwise
    ("&", TokenKind::BitWith),
    ("|", TokenKind::BitOr),
    ("^", TokenKind::BitXor),
    ("~", TokenKind::BitReverse),
    (">>", TokenKind::BitRightMove),
    ("<<", TokenKind::BitLeftMove),
    ("&=", TokenKind::BitWithEqual),
    ("|=", TokenKind::BitOrEqual),
    ("^=", TokenKind::BitXorEqual),
    ("~=", TokenKind::BitReverseEqual),
    (">>=", TokenKind::BitRightMoveEqual),
    ("<<=", TokenKind::BitLeftMoveEqual),
    // relational and assignment
    (">", TokenKind::Greater),
    ("<", TokenKind::Less),
    (">=", TokenKind::GreaterEqual),
    ("<=", TokenKind::LessEqual),
    ("==", TokenKind::Equal),
    ("===", TokenKind::AllEqual),
    ("=", TokenKind::Assignment),
    // logical
    ("&&", TokenKind::LogicWith),
    ("||", TokenKind::LogicOr),
];

/// Single-character punctuation the builder falls back to
pub static DELIMITERS: &[(char, TokenKind)] = &[
    ('\'', TokenKind::SingleQuotes),
    ('"', TokenKind::DoubleQuotes),
    ('`', TokenKind::TemplateQuotes),
    (';', TokenKind::Semicolon),
    ('(', TokenKind::LeftParentheses),
    (')', TokenKind::RightParentheses),
    ('[', TokenKind::LeftSquareBrackets),
    (']', TokenKind::RightSquareBrackets),
    ('{', TokenKind::LeftBrace),
    ('}', TokenKind::RightBrace),
];

/// Characters that end a pending word in the contextual scanner
pub static CONTEXTUAL_SYMBOLS: &[(char, TokenKind)] = &[
    ('+', TokenKind::Add),
    ('-', TokenKind::Subtract),
    ('*', TokenKind::Multiply),
    ('/', TokenKind::Divide),
    ('=', TokenKind::Assignment),
    ('\'', TokenKind::SingleQuotes),
    ('"', TokenKind::DoubleQuotes),
    ('`', TokenKind::TemplateQuotes),
    (';', TokenKind::Semicolon),
    ('(', TokenKind::LeftParentheses),
    (')', TokenKind::RightParentheses),
    ('[', TokenKind::LeftSquareBrackets),
    (']', TokenKind::RightSquareBrackets),
    ('<', TokenKind::Less),
    ('>', TokenKind::Greater),
    ('{', TokenKind::LeftBrace),
    ('}', TokenKind::RightBrace),
];

/// Two-character comment delimiters
pub static COMMENT_MARKERS: &[(&str, TokenKind)] = &[
    ("//", TokenKind::SingleComment),
    ("/*", TokenKind::MultipleCommentStart),
    ("*/", TokenKind::MultipleCommentEnd),
];

fn find_str(table: &[(&str, TokenKind)], text: &str) -> Option<TokenKind> {
    table
        .iter()
        .find(|(entry, _)| *entry == text)
        .map(|(_, kind)| *kind)
}

fn find_char(table: &[(char, TokenKind)], c: char) -> Option<TokenKind> {
    table
        .iter()
        .find(|(entry, _)| *entry == c)
        .map(|(_, kind)| *kind)
}

pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    find_str(KEYWORDS, word)
}

pub fn lookup_operator(run: &str) -> Option<TokenKind> {
    find_str(OPERATORS, run)
}

pub fn lookup_delimiter(c: char) -> Option<TokenKind> {
    find_char(DELIMITERS, c)
}

pub fn lookup_contextual_symbol(c: char) -> Option<TokenKind> {
    find_char(CONTEXTUAL_SYMBOLS, c)
}

pub fn lookup_comment_marker(pair: &str) -> Option<TokenKind> {
    find_str(COMMENT_MARKERS, pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keyword_table_covers_keyword_kinds() {
        for (word, kind) in KEYWORDS {
            assert!(kind.is_keyword(), "{}", word);
            assert_eq!(kind.as_str(), *word);
        }
        assert_eq!(KEYWORDS.iter().filter(|(_, k)| k.is_scalar_type()).count(), 15);
    }

    #[test]
    fn test_tables_have_no_duplicate_entries() {
        let keywords: HashSet<_> = KEYWORDS.iter().map(|(w, _)| *w).collect();
        assert_eq!(keywords.len(), KEYWORDS.len());

        let operators: HashSet<_> = OPERATORS.iter().map(|(w, _)| *w).collect();
        assert_eq!(operators.len(), OPERATORS.len());
    }

    #[test]
    fn test_operator_lookup_is_exact() {
        assert_eq!(lookup_operator(">>="), Some(TokenKind::BitRightMoveEqual));
        assert_eq!(lookup_operator("==="), Some(TokenKind::AllEqual));
        assert_eq!(lookup_operator("+="), Some(TokenKind::AddEqual));
        assert_eq!(lookup_operator("+++"), None);
        assert_eq!(lookup_operator(""), None);
        for (text, kind) in OPERATORS {
            assert!(kind.is_operator(), "{}", text);
            assert!((1..=3).contains(&text.len()));
        }
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(lookup_keyword("message"), Some(TokenKind::Message));
        assert_eq!(lookup_keyword("Message"), None);
        assert_eq!(lookup_keyword("uint64"), Some(TokenKind::Uint64));
    }

    #[test]
    fn test_symbol_lookups() {
        assert_eq!(lookup_delimiter('{'), Some(TokenKind::LeftBrace));
        assert_eq!(lookup_delimiter('<'), None);
        assert_eq!(lookup_contextual_symbol('<'), Some(TokenKind::Less));
        assert_eq!(lookup_contextual_symbol('='), Some(TokenKind::Assignment));
        assert_eq!(lookup_contextual_symbol('%'), None);
        assert_eq!(lookup_comment_marker("/*"), Some(TokenKind::MultipleCommentStart));
        assert_eq!(lookup_comment_marker("**"), None);
    }
}
