//! Read-only cursor over a finished token sequence
//!
//! The stream keeps every token for inspection but navigates only the
//! significant ones, skipping comment markers, block comments and the comment
//! bodies the contextual scanner emits between markers.

use super::kind::TokenKind;
use super::token::Token;
use crate::logging::codes;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenStreamError {
    #[error("Expected '{expected}', found '{found}'")]
    UnexpectedToken { expected: TokenKind, found: Token },

    #[error("Expected '{expected}', found end of input")]
    UnexpectedEnd { expected: TokenKind },
}

impl TokenStreamError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            TokenStreamError::UnexpectedToken { .. } => codes::tokens::UNEXPECTED_TOKEN,
            TokenStreamError::UnexpectedEnd { .. } => codes::tokens::UNEXPECTED_END,
        }
    }
}

/// Saved navigation position, see [`TokenStream::checkpoint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

#[derive(Debug, Clone)]
pub struct TokenStream {
    /// All tokens in source order
    all_tokens: Vec<Token>,
    /// Indices into all_tokens for significant tokens
    significant_indices: Vec<usize>,
    /// Current position in significant_indices
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let significant_indices = significant_indices(&tokens);

        crate::log_debug!("Token stream created",
            "total_tokens" => tokens.len(),
            "significant_tokens" => significant_indices.len()
        );

        Self {
            all_tokens: tokens,
            significant_indices,
            position: 0,
        }
    }

    // === NAVIGATION ===

    pub fn current(&self) -> Option<&Token> {
        self.peek_ahead(0)
    }

    /// Next significant token after the current one
    pub fn peek(&self) -> Option<&Token> {
        self.peek_ahead(1)
    }

    /// Significant token `n` positions ahead of the current one
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.significant_indices
            .get(self.position + n)
            .and_then(|&index| self.all_tokens.get(index))
    }

    /// Return the current token and move past it
    pub fn advance(&mut self) -> Option<&Token> {
        let index = *self.significant_indices.get(self.position)?;
        self.position += 1;
        self.all_tokens.get(index)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.significant_indices.len()
    }

    /// Position among significant tokens
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of significant tokens
    pub fn len(&self) -> usize {
        self.significant_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significant_indices.is_empty()
    }

    /// Consume the current token if it has `kind`
    pub fn expect(&mut self, kind: TokenKind) -> Result<&Token, TokenStreamError> {
        match self.current() {
            None => return Err(TokenStreamError::UnexpectedEnd { expected: kind }),
            Some(token) if token.kind != kind => {
                return Err(TokenStreamError::UnexpectedToken {
                    expected: kind,
                    found: token.clone(),
                })
            }
            Some(_) => {}
        }
        self.advance()
            .ok_or(TokenStreamError::UnexpectedEnd { expected: kind })
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.0.min(self.significant_indices.len());
    }

    // === INSPECTION ===

    /// Every token, comments included
    pub fn all_tokens(&self) -> &[Token] {
        &self.all_tokens
    }

    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.significant_indices
            .iter()
            .filter_map(|&index| self.all_tokens.get(index))
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.all_tokens
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// Indices of tokens a parser sees, in source order
pub(crate) fn significant_indices(tokens: &[Token]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i].kind {
            TokenKind::SingleComment => {
                // Contextual scans put the comment body right after the marker
                if tokens
                    .get(i + 1)
                    .is_some_and(|next| next.kind == TokenKind::Literal)
                {
                    i += 1;
                }
            }
            TokenKind::MultipleCommentStart => {
                while i + 1 < tokens.len() && tokens[i + 1].kind != TokenKind::MultipleCommentEnd {
                    i += 1;
                }
                // skip the closing marker too
                i += 1;
            }
            TokenKind::MultipleComment | TokenKind::MultipleCommentEnd => {}
            _ => indices.push(i),
        }
        i += 1;
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn text(kind: TokenKind, s: &str) -> Token {
        Token::text(kind, s)
    }

    fn sample() -> Vec<Token> {
        vec![
            text(TokenKind::Syntax, "syntax"),
            text(TokenKind::SingleComment, "//"),
            text(TokenKind::Literal, " note"),
            text(TokenKind::Assignment, "="),
            text(TokenKind::MultipleCommentStart, "/*"),
            text(TokenKind::Literal, " block "),
            text(TokenKind::MultipleCommentEnd, "*/"),
            text(TokenKind::Literal, "proto3"),
            text(TokenKind::MultipleComment, "/* whole */"),
            text(TokenKind::Semicolon, ";"),
        ]
    }

    #[test]
    fn test_comments_are_skipped() {
        let stream = TokenStream::new(sample());
        let kinds: Vec<_> = stream.significant_tokens().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Syntax,
                TokenKind::Assignment,
                TokenKind::Literal,
                TokenKind::Semicolon
            ]
        );
        assert_eq!(stream.len(), 4);
        assert_eq!(stream.all_tokens().len(), 10);
    }

    #[test]
    fn test_navigation() {
        let mut stream = TokenStream::new(sample());
        assert_eq!(stream.current().map(|t| t.kind), Some(TokenKind::Syntax));
        assert_eq!(stream.peek().map(|t| t.kind), Some(TokenKind::Assignment));
        assert_eq!(stream.peek_ahead(2).map(|t| t.kind), Some(TokenKind::Literal));

        assert_eq!(stream.advance().map(|t| t.kind), Some(TokenKind::Syntax));
        assert_eq!(stream.position(), 1);

        while stream.advance().is_some() {}
        assert!(stream.is_at_end());
        assert!(stream.current().is_none());
    }

    #[test]
    fn test_expect() {
        let mut stream = TokenStream::new(sample());
        assert!(stream.expect(TokenKind::Syntax).is_ok());

        let error = stream.expect(TokenKind::Semicolon).unwrap_err();
        assert_matches!(
            &error,
            TokenStreamError::UnexpectedToken { expected: TokenKind::Semicolon, found }
                if found.kind == TokenKind::Assignment
        );
        assert_eq!(error.error_code(), codes::tokens::UNEXPECTED_TOKEN);
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn test_expect_at_end() {
        let mut stream = TokenStream::new(Vec::new());
        assert!(stream.is_empty());
        assert_eq!(
            stream.expect(TokenKind::Semicolon),
            Err(TokenStreamError::UnexpectedEnd {
                expected: TokenKind::Semicolon
            })
        );
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut stream = TokenStream::new(sample());
        let saved = stream.checkpoint();
        stream.advance();
        stream.advance();
        stream.restore(saved);
        assert_eq!(stream.position(), 0);
        assert_eq!(stream.current().map(|t| t.kind), Some(TokenKind::Syntax));
    }
}
