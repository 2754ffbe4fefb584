//! Scan metrics and token distribution

use crate::config::runtime::LexicalPreferences;
use crate::tokens::stream::significant_indices;
use crate::tokens::{Token, TokenKind};
use serde::Serialize;
use std::collections::HashMap;

/// Per-scan tallies collected while tokens are emitted
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub literal_tokens: usize,
    pub number_tokens: usize,
    pub operator_tokens: usize,
    pub delimiter_tokens: usize,
    pub comment_tokens: usize,
    pub unknown_tokens: usize,
    pub max_comment_length: usize,
    pub unterminated_comments: usize,

    // Runtime preference-controlled metrics
    pub operator_usage_patterns: HashMap<String, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        // Unknown counts feed the completion warning, so they are always kept
        if token.kind == TokenKind::Unknown {
            self.unknown_tokens += 1;
            return;
        }

        if !preferences.collect_detailed_metrics {
            return;
        }

        let kind = token.kind;
        if kind.is_keyword() {
            self.keyword_tokens += 1;
        } else if kind.is_number() {
            self.number_tokens += 1;
        } else if kind.is_operator() {
            self.operator_tokens += 1;

            if preferences.track_operator_patterns {
                *self
                    .operator_usage_patterns
                    .entry(kind.as_str().to_string())
                    .or_insert(0) += 1;
            }
        } else if kind.is_delimiter() {
            self.delimiter_tokens += 1;
        } else if kind.is_comment() {
            self.comment_tokens += 1;
        } else {
            match kind {
                TokenKind::Identifier => self.identifier_tokens += 1,
                TokenKind::Literal => self.literal_tokens += 1,
                _ => {}
            }
        }
    }

    pub(crate) fn record_comment_length(&mut self, length: usize) {
        self.max_comment_length = self.max_comment_length.max(length);
    }

    pub(crate) fn record_unterminated_comment(&mut self) {
        self.unterminated_comments += 1;
    }

    /// Share of emitted tokens that were unknown
    pub fn unknown_ratio(&self) -> f64 {
        if self.total_tokens == 0 {
            0.0
        } else {
            self.unknown_tokens as f64 / self.total_tokens as f64
        }
    }
}

/// Token distribution over a finished sequence
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCounts {
    pub total: usize,
    pub keywords: usize,
    pub identifiers: usize,
    pub literals: usize,
    pub numbers: usize,
    pub operators: usize,
    pub delimiters: usize,
    /// Comment tokens plus the comment bodies the contextual scanner emits
    pub comments: usize,
    pub unknown: usize,
}

impl TokenCounts {
    /// Count of tokens a [`TokenStream`](crate::tokens::TokenStream) navigates
    pub fn significant_tokens(&self) -> usize {
        self.total - self.comments
    }

    /// Whether the scan produced anything a parser could use
    pub fn has_content(&self) -> bool {
        self.keywords > 0 || self.identifiers > 0 || self.literals > 0 || self.numbers > 0
    }

    pub fn unknown_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.unknown as f64 / self.total as f64
        }
    }
}

pub fn token_counts(tokens: &[Token]) -> TokenCounts {
    let mut counts = TokenCounts::default();

    let mut significant = vec![false; tokens.len()];
    for index in significant_indices(tokens) {
        significant[index] = true;
    }

    for (token, is_significant) in tokens.iter().zip(significant) {
        counts.total += 1;
        let kind = token.kind;
        if kind.is_keyword() {
            counts.keywords += 1;
        } else if kind.is_number() {
            counts.numbers += 1;
        } else if kind.is_operator() {
            counts.operators += 1;
        } else if kind.is_delimiter() {
            counts.delimiters += 1;
        } else if kind.is_comment() {
            counts.comments += 1;
        } else {
            match kind {
                TokenKind::Identifier => counts.identifiers += 1,
                TokenKind::Literal if !is_significant => counts.comments += 1,
                TokenKind::Literal => counts.literals += 1,
                TokenKind::Unknown => counts.unknown += 1,
                _ => {}
            }
        }
    }

    counts
}
