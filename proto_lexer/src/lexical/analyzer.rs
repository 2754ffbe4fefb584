//! Token stream builder
//!
//! Dispatches on the class of the character under the cursor and consumes the
//! longest run for that class: words, numbers, relational runs, math/bit runs
//! (with comment detection) and single-character punctuation. Operator runs
//! are looked up whole; a run with no exact table entry becomes one `unknown`
//! token rather than being split.

use super::classifier::*;
use super::metrics::LexicalMetrics;
use super::sink::{log_text, TokenSink};
use super::{ScanStrategy, Scanner};
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::log_warning;
use crate::tokens::{tables, Token, TokenKind, TokenValue};

/// Byte cursor over the source; lives for one scan call
struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.source[start..self.pos]
    }

    fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }
}

/// Builder-strategy scanner
#[derive(Debug, Clone, Default)]
pub struct LexicalAnalyzer {
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    pub fn scan(&self, source: &str) -> Vec<Token> {
        self.scan_with_metrics(source).0
    }

    pub fn scan_with_metrics(&self, source: &str) -> (Vec<Token>, LexicalMetrics) {
        let mut sink = TokenSink::new(source, ScanStrategy::Builder, &self.preferences);
        let mut cursor = Cursor::new(source);

        while let Some(c) = cursor.peek() {
            let start = cursor.pos;

            if is_ignorable(c) {
                cursor.bump();
            } else if is_alpha_start(c) {
                let word = cursor.eat_while(is_word_char);
                let kind = tables::lookup_keyword(word).unwrap_or(TokenKind::Identifier);
                sink.push_text(kind, word, start);
            } else if is_digit(c) {
                let token = scan_number(&mut cursor);
                sink.push(token, start);
            } else if is_relational_start(c) {
                let run = cursor.eat_while(is_relational_start);
                push_operator(&mut sink, run, start);
            } else if is_math_or_bit_start(c) {
                scan_math_or_comment(&mut cursor, &mut sink);
            } else {
                cursor.bump();
                let text = cursor.slice_from(start);
                let kind = tables::lookup_delimiter(c).unwrap_or(TokenKind::Unknown);
                sink.push_text(kind, text, start);
            }
        }

        sink.finish()
    }
}

impl Scanner for LexicalAnalyzer {
    fn scan(&self, source: &str) -> Vec<Token> {
        LexicalAnalyzer::scan(self, source)
    }

    fn scan_with_metrics(&self, source: &str) -> (Vec<Token>, LexicalMetrics) {
        LexicalAnalyzer::scan_with_metrics(self, source)
    }

    fn strategy(&self) -> ScanStrategy {
        ScanStrategy::Builder
    }
}

fn push_operator(sink: &mut TokenSink<'_>, run: &str, start: usize) {
    let kind = tables::lookup_operator(run).unwrap_or(TokenKind::Unknown);
    sink.push_text(kind, run, start);
}

/// Digits and dots, or a `0x` prefix followed by hex digits
///
/// The kind is always numeric. Text that does not fit an `i64` or `f64`
/// keeps its kind and carries a float value: the nearest `f64` for integers
/// too large for `i64`, NaN for text with no numeric reading.
fn scan_number(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.pos;

    if cursor.peek() == Some('0') && cursor.peek_second() == Some('x') {
        cursor.bump();
        cursor.bump();
        let digits = cursor.eat_while(is_hex_digit);
        if let Ok(value) = i64::from_str_radix(digits, 16) {
            return Token::integer(value);
        }
        let text = cursor.slice_from(start);
        let value = if digits.is_empty() {
            f64::NAN
        } else {
            digits
                .chars()
                .filter_map(|c| c.to_digit(16))
                .fold(0.0, |acc, d| acc * 16.0 + f64::from(d))
        };
        return malformed_number(TokenKind::IntegerNumber, value, text, start);
    }

    let text = cursor.eat_while(|c| is_digit(c) || c == '.');
    if text.contains('.') {
        match text.parse::<f64>() {
            Ok(value) => Token::float(value),
            Err(_) => malformed_number(TokenKind::FloatNumber, f64::NAN, text, start),
        }
    } else {
        match text.parse::<i64>() {
            Ok(value) => Token::integer(value),
            Err(_) => {
                let value = text.parse::<f64>().unwrap_or(f64::NAN);
                malformed_number(TokenKind::IntegerNumber, value, text, start)
            }
        }
    }
}

fn malformed_number(kind: TokenKind, value: f64, text: &str, offset: usize) -> Token {
    log_warning!(codes::lexical::MALFORMED_NUMBER, "Number literal could not be parsed",
        offset = offset,
        "text" => log_text(text),
        "kind" => kind
    );
    Token::new(kind, TokenValue::Float(value))
}

fn scan_math_or_comment(cursor: &mut Cursor<'_>, sink: &mut TokenSink<'_>) {
    let start = cursor.pos;
    let run = cursor.eat_while(is_math_or_bit_start);

    if run.starts_with("//") {
        cursor.pos = start + 2;
        cursor.eat_while(|c| c != '\n');
        let text = cursor.slice_from(start);
        sink.record_comment_length(text.len());
        sink.push_text(TokenKind::SingleComment, text, start);
    } else if run.starts_with("/*") {
        cursor.pos = start + 2;
        let closed = match cursor.rest().find("*/") {
            Some(end) => {
                cursor.pos += end + 2;
                true
            }
            None => {
                cursor.pos = cursor.source.len();
                false
            }
        };
        let text = cursor.slice_from(start);
        if !closed {
            sink.unterminated_comment(start, text);
        }
        sink.record_comment_length(text.len());
        sink.push_text(TokenKind::MultipleComment, text, start);
    } else {
        push_operator(sink, run, start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::test_memory_logger;

    fn scan(source: &str) -> Vec<Token> {
        LexicalAnalyzer::new().scan(source)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).into_iter().map(|t| t.kind).collect()
    }

    fn text(kind: TokenKind, s: &str) -> Token {
        Token::text(kind, s)
    }

    #[test]
    fn test_syntax_statement() {
        assert_eq!(
            scan("syntax = \"proto3\";"),
            vec![
                text(TokenKind::Syntax, "syntax"),
                text(TokenKind::Assignment, "="),
                text(TokenKind::DoubleQuotes, "\""),
                text(TokenKind::Identifier, "proto3"),
                text(TokenKind::DoubleQuotes, "\""),
                text(TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(scan("").is_empty());
        assert!(scan(" \t\r\n  \n").is_empty());
    }

    #[test]
    fn test_words() {
        assert_eq!(
            scan("message my_Msg2 uint64"),
            vec![
                text(TokenKind::Message, "message"),
                text(TokenKind::Identifier, "my_Msg2"),
                text(TokenKind::Uint64, "uint64"),
            ]
        );
        // Keywords must match the whole word
        assert_eq!(kinds("messages import"), vec![TokenKind::Identifier, TokenKind::Import]);
    }

    #[test]
    fn test_every_keyword_scans_to_its_kind() {
        for (word, kind) in tables::KEYWORDS {
            assert_eq!(scan(word), vec![text(*kind, word)], "{}", word);
            assert_eq!(kinds(&format!("{}_x", word)), vec![TokenKind::Identifier]);
        }
    }

    #[test]
    fn test_whitespace_does_not_change_tokens() {
        assert_eq!(scan("a+=1;"), scan(" a += 1 ; "));
        assert_eq!(
            scan("message\tFoo{int32 id=1;}"),
            scan("message Foo {\r\n  int32 id = 1;\n}\n")
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(scan("42"), vec![Token::integer(42)]);
        assert_eq!(scan("3.25"), vec![Token::float(3.25)]);
        assert_eq!(scan("0x1F"), vec![Token::integer(31)]);
        assert_eq!(scan("0xff;"), vec![Token::integer(255), text(TokenKind::Semicolon, ";")]);
    }

    #[test]
    fn test_number_stops_at_letters() {
        assert_eq!(
            scan("12ab"),
            vec![Token::integer(12), text(TokenKind::Identifier, "ab")]
        );
        // An x that does not follow a lone leading zero ends the number
        assert_eq!(
            scan("10x"),
            vec![Token::integer(10), text(TokenKind::Identifier, "x")]
        );
    }

    #[test]
    fn test_malformed_numbers_keep_numeric_kind() {
        let memory = test_memory_logger();

        let dotted = scan("1.2.3");
        assert_eq!(dotted.len(), 1);
        assert_eq!(dotted[0].kind, TokenKind::FloatNumber);
        assert!(dotted[0].as_float().unwrap().is_nan());

        let bare_hex = scan("0x");
        assert_eq!(bare_hex.len(), 1);
        assert_eq!(bare_hex[0].kind, TokenKind::IntegerNumber);
        assert!(bare_hex[0].as_float().unwrap().is_nan());

        assert_eq!(
            scan("99999999999999999999"),
            vec![Token::new(TokenKind::IntegerNumber, TokenValue::Float(1e20))]
        );
        assert_eq!(
            scan("0x10000000000000000"),
            vec![Token::new(
                TokenKind::IntegerNumber,
                TokenValue::Float(18446744073709551616.0)
            )]
        );

        for source in ["1.2.3", "0x", "99999999999999999999"] {
            assert!(scan(source).iter().all(|t| t.kind != TokenKind::Unknown));
        }

        let warnings = memory.find_events(codes::lexical::MALFORMED_NUMBER, "text", "1.2.3");
        assert!(!warnings.is_empty());
        assert_eq!(warnings[0].context.get("kind").map(String::as_str), Some("floatNumber"));
    }

    #[test]
    fn test_greedy_operator_runs() {
        assert_eq!(
            kinds("a >>= b === c += d"),
            vec![
                TokenKind::Identifier,
                TokenKind::BitRightMoveEqual,
                TokenKind::Identifier,
                TokenKind::AllEqual,
                TokenKind::Identifier,
                TokenKind::AddEqual,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(scan("+++"), vec![Token::unknown("+++")]);
        assert_eq!(scan("<=>"), vec![Token::unknown("<=>")]);
    }

    #[test]
    fn test_relational_checked_before_math() {
        // A run starting with '=' only consumes relational characters
        assert_eq!(
            scan("=+"),
            vec![text(TokenKind::Assignment, "="), text(TokenKind::Add, "+")]
        );
        assert_eq!(kinds("&& || ~="), vec![
            TokenKind::LogicWith,
            TokenKind::LogicOr,
            TokenKind::BitReverseEqual
        ]);
    }

    #[test]
    fn test_single_line_comment() {
        assert_eq!(
            scan("a // note = 1\nb"),
            vec![
                text(TokenKind::Identifier, "a"),
                text(TokenKind::SingleComment, "// note = 1"),
                text(TokenKind::Identifier, "b"),
            ]
        );
        assert_eq!(scan("//"), vec![text(TokenKind::SingleComment, "//")]);
    }

    #[test]
    fn test_block_comments() {
        assert_eq!(
            scan("/* a\n b */c"),
            vec![
                text(TokenKind::MultipleComment, "/* a\n b */"),
                text(TokenKind::Identifier, "c"),
            ]
        );
        assert_eq!(
            scan("/**/x"),
            vec![
                text(TokenKind::MultipleComment, "/**/"),
                text(TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let memory = test_memory_logger();
        let (tokens, metrics) =
            LexicalAnalyzer::new().scan_with_metrics("x /* builder unterminated");

        assert_eq!(
            tokens,
            vec![
                text(TokenKind::Identifier, "x"),
                text(TokenKind::MultipleComment, "/* builder unterminated"),
            ]
        );
        assert_eq!(metrics.unterminated_comments, 1);

        let warnings = memory.find_events(
            codes::lexical::UNTERMINATED_COMMENT,
            "text",
            "/* builder unterminated",
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].offset, Some(2));
    }

    #[test]
    fn test_unmatched_characters() {
        assert_eq!(
            scan("@ é"),
            vec![Token::unknown("@"), Token::unknown("é")]
        );
        assert_eq!(
            kinds("'`()[]{}"),
            vec![
                TokenKind::SingleQuotes,
                TokenKind::TemplateQuotes,
                TokenKind::LeftParentheses,
                TokenKind::RightParentheses,
                TokenKind::LeftSquareBrackets,
                TokenKind::RightSquareBrackets,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
            ]
        );
    }

    #[test]
    fn test_scan_is_repeatable() {
        let analyzer = LexicalAnalyzer::new();
        let source = "message Foo { int32 id = 1; } // end";
        assert_eq!(analyzer.scan(source), analyzer.scan(source));
    }

    #[test]
    fn test_metrics() {
        let analyzer = LexicalAnalyzer::with_preferences(LexicalPreferences {
            collect_detailed_metrics: true,
            track_operator_patterns: true,
            ..Default::default()
        });
        let (tokens, metrics) = analyzer.scan_with_metrics("int32 a = 1; // c");

        assert_eq!(metrics.total_tokens, tokens.len());
        assert_eq!(metrics.keyword_tokens, 1);
        assert_eq!(metrics.identifier_tokens, 1);
        assert_eq!(metrics.number_tokens, 1);
        assert_eq!(metrics.operator_tokens, 1);
        assert_eq!(metrics.delimiter_tokens, 1);
        assert_eq!(metrics.comment_tokens, 1);
        assert_eq!(metrics.max_comment_length, 4);
        assert_eq!(metrics.operator_usage_patterns.get("assignment"), Some(&1));
    }

    #[test]
    fn test_unknown_tokens_are_logged_when_enabled() {
        let memory = test_memory_logger();
        let analyzer = LexicalAnalyzer::with_preferences(LexicalPreferences {
            log_unknown_tokens: true,
            ..Default::default()
        });
        analyzer.scan("ok #builder-unknown-marker");

        let logged = memory
            .get_events()
            .into_iter()
            .filter(|e| e.context.get("text").map(String::as_str) == Some("#"))
            .filter(|e| e.offset == Some(3))
            .count();
        assert!(logged >= 1);
    }
}
