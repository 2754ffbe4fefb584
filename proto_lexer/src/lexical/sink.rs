//! Per-scan output buffer shared by both scanners
//!
//! A sink lives for exactly one scan call. It owns the token vector and the
//! metrics for that call and does the scan-level logging.

use super::metrics::LexicalMetrics;
use super::ScanStrategy;
use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::{log_debug, log_success, log_warning};

pub(crate) struct TokenSink<'p> {
    tokens: Vec<Token>,
    metrics: LexicalMetrics,
    preferences: &'p LexicalPreferences,
    strategy: ScanStrategy,
}

impl<'p> TokenSink<'p> {
    pub(crate) fn new(
        source: &str,
        strategy: ScanStrategy,
        preferences: &'p LexicalPreferences,
    ) -> Self {
        log_debug!("Starting lexical analysis",
            "strategy" => strategy,
            "source_bytes" => source.len()
        );

        let capacity = (source.len() / BYTES_PER_TOKEN_ESTIMATE + 1).min(MAX_INITIAL_TOKEN_CAPACITY);
        Self {
            tokens: Vec::with_capacity(capacity),
            metrics: LexicalMetrics::default(),
            preferences,
            strategy,
        }
    }

    /// Append a token that started at byte `offset`
    pub(crate) fn push(&mut self, token: Token, offset: usize) {
        if token.kind == TokenKind::Unknown && self.preferences.log_unknown_tokens {
            log_debug!("Unknown token",
                offset = offset,
                "text" => log_text(token.text_value().unwrap_or_default()),
                "strategy" => self.strategy
            );
        }

        self.metrics.record_token(&token, self.preferences);
        self.tokens.push(token);
    }

    pub(crate) fn push_text(&mut self, kind: TokenKind, text: &str, offset: usize) {
        self.push(Token::text(kind, text), offset);
    }

    pub(crate) fn record_comment_length(&mut self, length: usize) {
        self.metrics.record_comment_length(length);
    }

    pub(crate) fn unterminated_comment(&mut self, offset: usize, text: &str) {
        self.metrics.record_unterminated_comment();
        log_warning!(codes::lexical::UNTERMINATED_COMMENT, "Block comment runs to end of input",
            offset = offset,
            "text" => log_text(text),
            "strategy" => self.strategy
        );
    }

    pub(crate) fn finish(self) -> (Vec<Token>, LexicalMetrics) {
        let ratio = self.metrics.unknown_ratio();
        if ratio > UNKNOWN_RATIO_WARNING_THRESHOLD {
            log_warning!(codes::lexical::UNKNOWN_TOKEN, "Most of the input was not recognized",
                "unknown_tokens" => self.metrics.unknown_tokens,
                "total_tokens" => self.metrics.total_tokens,
                "strategy" => self.strategy
            );
        }

        log_success!(codes::success::SCAN_COMPLETE, "Lexical analysis completed",
            "strategy" => self.strategy,
            "total_tokens" => self.metrics.total_tokens,
            "keyword_tokens" => self.metrics.keyword_tokens,
            "identifier_tokens" => self.metrics.identifier_tokens,
            "unknown_tokens" => self.metrics.unknown_tokens,
            "unterminated_comments" => self.metrics.unterminated_comments
        );

        (self.tokens, self.metrics)
    }
}

/// Bound token text copied into log events
pub(crate) fn log_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_LOGGED_TOKEN_TEXT) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_text_is_bounded_on_char_boundaries() {
        let long = "é".repeat(MAX_LOGGED_TOKEN_TEXT * 2);
        assert_eq!(log_text(&long).chars().count(), MAX_LOGGED_TOKEN_TEXT);
        assert_eq!(log_text("short"), "short");
    }

    #[test]
    fn test_sink_collects_tokens_and_metrics() {
        let preferences = LexicalPreferences::default();
        let mut sink = TokenSink::new("a @", ScanStrategy::Builder, &preferences);
        sink.push_text(TokenKind::Identifier, "a", 0);
        sink.push(Token::unknown("@"), 2);

        let (tokens, metrics) = sink.finish();
        assert_eq!(tokens.len(), 2);
        assert_eq!(metrics.total_tokens, 2);
        assert_eq!(metrics.unknown_tokens, 1);
    }
}
