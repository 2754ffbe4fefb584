//! Token model for the schema scanner
//!
//! - [`TokenKind`] is the closed vocabulary every token is classified into.
//! - [`Token`] pairs a kind with its [`TokenValue`] (source text, or a parsed
//!   number for numeric tokens).
//! - [`tables`] holds the keyword, operator and punctuation lookup data.
//! - [`TokenStream`] navigates a finished scan for a downstream parser,
//!   skipping comments.

pub mod kind;
pub mod stream;
pub mod tables;
pub mod token;

pub use kind::TokenKind;
pub use stream::{Checkpoint, TokenStream, TokenStreamError};
pub use token::{Token, TokenValue, TokenValueError};
