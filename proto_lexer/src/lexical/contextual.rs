//! Contextual literal scanner
//!
//! Words are accumulated until whitespace, a symbol or a comment marker ends
//! them. What the finished word becomes depends on the current [`LexState`]:
//! a name after a declaration keyword, the body of a quoted string, the value
//! between `=` and `;`, a keyword, or `unknown`.
//!
//! Comments are emitted as marker tokens (`//`, `/*`, `*/`) with the comment
//! body as a separate `literal` token.

use super::classifier::is_ignorable;
use super::metrics::LexicalMetrics;
use super::sink::TokenSink;
use super::{ScanStrategy, Scanner};
use crate::config::runtime::LexicalPreferences;
use crate::tokens::{tables, Token, TokenKind};

/// Scanner state between characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    Idle,
    /// A declaration keyword was just emitted; the next word is a name
    AfterDeclaration,
    InDoubleQuotes,
    InSingleQuotes,
    /// Between `=` and the closing `;`
    AfterAssignment,
    InLineComment,
    InBlockComment,
}

/// Mutable state of one scan call
struct ScanContext<'s, 'p> {
    source: &'s str,
    state: LexState,
    /// Start of the word being accumulated
    pending: Option<usize>,
    /// Start of the current comment body
    comment_body: usize,
    sink: TokenSink<'p>,
}

impl<'s, 'p> ScanContext<'s, 'p> {
    fn new(source: &'s str, preferences: &'p LexicalPreferences) -> Self {
        Self {
            source,
            state: LexState::Idle,
            pending: None,
            comment_body: 0,
            sink: TokenSink::new(source, ScanStrategy::Contextual, preferences),
        }
    }

    fn run(mut self) -> (Vec<Token>, LexicalMetrics) {
        let source = self.source;
        let mut pos = 0;

        while let Some(c) = source[pos..].chars().next() {
            match self.state {
                LexState::InLineComment => {
                    if c == '\n' {
                        self.close_line_comment(pos);
                    }
                    pos += c.len_utf8();
                    continue;
                }
                LexState::InBlockComment => {
                    if source[pos..].starts_with("*/") {
                        self.close_block_comment(pos);
                        pos += 2;
                    } else {
                        pos += c.len_utf8();
                    }
                    continue;
                }
                _ => {}
            }

            let marker = source[pos..]
                .get(..2)
                .and_then(|pair| tables::lookup_comment_marker(pair).map(|kind| (kind, pair)));
            if let Some((kind, pair)) = marker {
                self.flush_word(pos);
                self.sink.push_text(kind, pair, pos);
                pos += 2;
                self.state = match kind {
                    TokenKind::SingleComment => LexState::InLineComment,
                    TokenKind::MultipleCommentStart => LexState::InBlockComment,
                    _ => LexState::Idle,
                };
                self.comment_body = pos;
                continue;
            }

            if is_ignorable(c) {
                self.flush_word(pos);
            } else if let Some(kind) = tables::lookup_contextual_symbol(c) {
                self.on_symbol(kind, pos, c.len_utf8());
            } else if self.pending.is_none() {
                self.pending = Some(pos);
            }
            pos += c.len_utf8();
        }

        self.finish()
    }

    /// Whitespace rule for a finished word ending at `end`
    fn flush_word(&mut self, end: usize) {
        let Some(start) = self.pending.take() else {
            return;
        };
        let word = &self.source[start..end];

        if self.state == LexState::AfterDeclaration {
            self.sink.push_text(TokenKind::Identifier, word, start);
            self.state = LexState::Idle;
        } else if let Some(kind) = tables::lookup_keyword(word) {
            self.sink.push_text(kind, word, start);
            self.state = if kind.is_declaration_keyword() {
                LexState::AfterDeclaration
            } else {
                LexState::Idle
            };
        } else {
            self.sink.push(Token::unknown(word), start);
        }
    }

    fn on_symbol(&mut self, kind: TokenKind, pos: usize, width: usize) {
        match self.pending.take() {
            Some(start) => {
                let word = &self.source[start..pos];
                match (self.state, kind) {
                    (LexState::AfterDeclaration, _) => {
                        self.sink.push_text(TokenKind::Identifier, word, start);
                        self.state = self.state_after(kind);
                    }
                    (LexState::InDoubleQuotes, TokenKind::DoubleQuotes)
                    | (LexState::InSingleQuotes, TokenKind::SingleQuotes)
                    | (LexState::AfterAssignment, TokenKind::Semicolon) => {
                        self.sink.push_text(TokenKind::Literal, word, start);
                        self.state = LexState::Idle;
                    }
                    _ => self.sink.push(Token::unknown(word), start),
                }
            }
            None => self.state = self.state_after(kind),
        }

        let text = &self.source[pos..pos + width];
        self.sink.push_text(kind, text, pos);
    }

    /// State entered by emitting a symbol with no word in front of it
    fn state_after(&self, kind: TokenKind) -> LexState {
        match (kind, self.state) {
            (TokenKind::Assignment, _) => LexState::AfterAssignment,
            (TokenKind::DoubleQuotes, LexState::InDoubleQuotes) => LexState::Idle,
            (TokenKind::DoubleQuotes, _) => LexState::InDoubleQuotes,
            (TokenKind::SingleQuotes, LexState::InSingleQuotes) => LexState::Idle,
            (TokenKind::SingleQuotes, _) => LexState::InSingleQuotes,
            _ => LexState::Idle,
        }
    }

    fn close_line_comment(&mut self, end: usize) {
        self.push_comment_body(end);
        self.state = LexState::Idle;
    }

    fn close_block_comment(&mut self, end: usize) {
        self.push_comment_body(end);
        self.sink.push_text(TokenKind::MultipleCommentEnd, "*/", end);
        self.state = LexState::Idle;
    }

    fn push_comment_body(&mut self, end: usize) {
        let body = &self.source[self.comment_body..end];
        self.sink.record_comment_length(body.len());
        self.sink.push_text(TokenKind::Literal, body, self.comment_body);
    }

    fn finish(mut self) -> (Vec<Token>, LexicalMetrics) {
        let end = self.source.len();
        match self.state {
            LexState::InLineComment => self.close_line_comment(end),
            LexState::InBlockComment => {
                let opened_at = self.comment_body.saturating_sub(2);
                self.sink
                    .unterminated_comment(opened_at, &self.source[opened_at..end]);
                self.close_block_comment(end);
            }
            _ => {
                if let Some(start) = self.pending.take() {
                    self.sink.push(Token::unknown(&self.source[start..end]), start);
                }
            }
        }
        self.sink.finish()
    }
}

/// Contextual-strategy scanner
#[derive(Debug, Clone, Default)]
pub struct ContextualScanner {
    preferences: LexicalPreferences,
}

impl ContextualScanner {
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
        ScanContext::new(source, &self.preferences).run()
    }
}

impl Scanner for ContextualScanner {
    fn scan(&self, source: &str) -> Vec<Token> {
        ContextualScanner::scan(self, source)
    }

    fn scan_with_metrics(&self, source: &str) -> (Vec<Token>, LexicalMetrics) {
        ContextualScanner::scan_with_metrics(self, source)
    }

    fn strategy(&self) -> ScanStrategy {
        ScanStrategy::Contextual
    }
}
