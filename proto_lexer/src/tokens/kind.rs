//! Closed token kind vocabulary
//!
//! Every token the scanners emit carries exactly one [`TokenKind`]. The set is
//! closed: source text that fits none of the kinds becomes
//! [`TokenKind::Unknown`] instead of being dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    // === STRUCTURAL ===
    Unknown,
    Identifier,
    Literal,

    // === KEYWORDS ===
    Syntax,
    Package,
    Message,
    Optional,
    Required,
    Repeated,
    Import,

    // === SCALAR TYPES ===
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    Float,
    Double,
    String,
    Bytes,

    // === NUMBERS ===
    IntegerNumber,
    FloatNumber,

    // === ARITHMETIC ===
    Add,            // +
    Subtract,       // -
    Multiply,       // *
    Divide,         // /
    Remainder,      // %
    AddEqual,       // +=
    SubtractEqual,  // -=
    MultiplyEqual,  // *=
    DivideEqual,    // /=
    RemainderEqual, // %=
    SelfAdd,        // ++
    SelfSubtract,   // --

    // === BITWISE ===
    BitWith,           // &
    BitOr,             // |
    BitXor,            // ^
    BitReverse,        // ~
    BitRightMove,      // >>
    BitLeftMove,       // <<
    BitWithEqual,      // &=
    BitOrEqual,        // |=
    BitXorEqual,       // ^=
    BitReverseEqual,   // ~=
    BitRightMoveEqual, // >>=
    BitLeftMoveEqual,  // <<=

    // === RELATIONAL, LOGICAL, ASSIGNMENT ===
    Greater,      // >
    Less,         // <
    GreaterEqual, // >=
    LessEqual,    // <=
    Equal,        // ==
    AllEqual,     // ===
    Assignment,   // =
    LogicWith,    // &&
    LogicOr,      // ||

    // === DELIMITERS ===
    SingleQuotes,        // '
    DoubleQuotes,        // "
    TemplateQuotes,      // `
    Semicolon,           // ;
    LeftParentheses,     // (
    RightParentheses,    // )
    LeftSquareBrackets,  // [
    RightSquareBrackets, // ]
    LeftBrace,           // {
    RightBrace,          // }

    // === COMMENTS ===
    SingleComment,
    MultipleComment,
    MultipleCommentStart,
    MultipleCommentEnd,
}

impl TokenKind {
    /// The camelCase tag name, identical to the serialized form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Identifier => "identifier",
            Self::Literal => "literal",
            Self::Syntax => "syntax",
            Self::Package => "package",
            Self::Message => "message",
            Self::Optional => "optional",
            Self::Required => "required",
            Self::Repeated => "repeated",
            Self::Import => "import",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
            Self::Fixed32 => "fixed32",
            Self::Fixed64 => "fixed64",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::IntegerNumber => "integerNumber",
            Self::FloatNumber => "floatNumber",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Remainder => "remainder",
            Self::AddEqual => "addEqual",
            Self::SubtractEqual => "subtractEqual",
            Self::MultiplyEqual => "multiplyEqual",
            Self::DivideEqual => "divideEqual",
            Self::RemainderEqual => "remainderEqual",
            Self::SelfAdd => "selfAdd",
            Self::SelfSubtract => "selfSubtract",
            Self::BitWith => "bitWith",
            Self::BitOr => "bitOr",
            Self::BitXor => "bitXor",
            Self::BitReverse => "bitReverse",
            Self::BitRightMove => "bitRightMove",
            Self::BitLeftMove => "bitLeftMove",
            Self::BitWithEqual => "bitWithEqual",
            Self::BitOrEqual => "bitOrEqual",
            Self::BitXorEqual => "bitXorEqual",
            Self::BitReverseEqual => "bitReverseEqual",
            Self::BitRightMoveEqual => "bitRightMoveEqual",
            Self::BitLeftMoveEqual => "bitLeftMoveEqual",
            Self::Greater => "greater",
            Self::Less => "less",
            Self::GreaterEqual => "greaterEqual",
            Self::LessEqual => "lessEqual",
            Self::Equal => "equal",
            Self::AllEqual => "allEqual",
            Self::Assignment => "assignment",
            Self::LogicWith => "logicWith",
            Self::LogicOr => "logicOr",
            Self::SingleQuotes => "singleQuotes",
            Self::DoubleQuotes => "doubleQuotes",
            Self::TemplateQuotes => "templateQuotes",
            Self::Semicolon => "semicolon",
            Self::LeftParentheses => "leftParentheses",
            Self::RightParentheses => "rightParentheses",
            Self::LeftSquareBrackets => "leftSquareBrackets",
            Self::RightSquareBrackets => "rightSquareBrackets",
            Self::LeftBrace => "leftBrace",
            Self::RightBrace => "rightBrace",
            Self::SingleComment => "singleComment",
            Self::MultipleComment => "multipleComment",
            Self::MultipleCommentStart => "multipleCommentStart",
            Self::MultipleCommentEnd => "multipleCommentEnd",
        }
    }

    /// Scalar field type names (`int32` .. `bytes`)
    pub const fn is_scalar_type(self) -> bool {
        matches!(
            self,
            Self::Int32
                | Self::Int64
                | Self::Uint32
                | Self::Uint64
                | Self::Sint32
                | Self::Sint64
                | Self::Fixed32
                | Self::Fixed64
                | Self::Sfixed32
                | Self::Sfixed64
                | Self::Bool
                | Self::Float
                | Self::Double
                | Self::String
                | Self::Bytes
        )
    }

    /// Any reserved word, scalar types included
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Syntax
                | Self::Package
                | Self::Message
                | Self::Optional
                | Self::Required
                | Self::Repeated
                | Self::Import
        ) || self.is_scalar_type()
    }

    /// Keywords after which the next word is a name, never another keyword
    pub const fn is_declaration_keyword(self) -> bool {
        matches!(self, Self::Package | Self::Message) || self.is_scalar_type()
    }

    pub const fn is_number(self) -> bool {
        matches!(self, Self::IntegerNumber | Self::FloatNumber)
    }

    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Subtract
                | Self::Multiply
                | Self::Divide
                | Self::Remainder
                | Self::AddEqual
                | Self::SubtractEqual
                | Self::MultiplyEqual
                | Self::DivideEqual
                | Self::RemainderEqual
                | Self::SelfAdd
                | Self::SelfSubtract
                | Self::BitWith
                | Self::BitOr
                | Self::BitXor
                | Self::BitReverse
                | Self::BitRightMove
                | Self::BitLeftMove
                | Self::BitWithEqual
                | Self::BitOrEqual
                | Self::BitXorEqual
                | Self::BitReverseEqual
                | Self::BitRightMoveEqual
                | Self::BitLeftMoveEqual
                | Self::Greater
                | Self::Less
                | Self::GreaterEqual
                | Self::LessEqual
                | Self::Equal
                | Self::AllEqual
                | Self::Assignment
                | Self::LogicWith
                | Self::LogicOr
        )
    }

    pub const fn is_quote(self) -> bool {
        matches!(
            self,
            Self::SingleQuotes | Self::DoubleQuotes | Self::TemplateQuotes
        )
    }

    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            Self::Semicolon
                | Self::LeftParentheses
                | Self::RightParentheses
                | Self::LeftSquareBrackets
                | Self::RightSquareBrackets
                | Self::LeftBrace
                | Self::RightBrace
        ) || self.is_quote()
    }

    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            Self::SingleComment
                | Self::MultipleComment
                | Self::MultipleCommentStart
                | Self::MultipleCommentEnd
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde_name() {
        for kind in [
            TokenKind::Unknown,
            TokenKind::Sfixed64,
            TokenKind::IntegerNumber,
            TokenKind::BitRightMoveEqual,
            TokenKind::LeftSquareBrackets,
            TokenKind::MultipleCommentEnd,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_declaration_keywords() {
        assert!(TokenKind::Package.is_declaration_keyword());
        assert!(TokenKind::Message.is_declaration_keyword());
        assert!(TokenKind::String.is_declaration_keyword());
        assert!(!TokenKind::Optional.is_declaration_keyword());
        assert!(!TokenKind::Syntax.is_declaration_keyword());
        assert!(!TokenKind::Identifier.is_declaration_keyword());
    }

    #[test]
    fn test_classification_is_disjoint() {
        let samples = [
            TokenKind::Import,
            TokenKind::Bytes,
            TokenKind::FloatNumber,
            TokenKind::LogicOr,
            TokenKind::TemplateQuotes,
            TokenKind::RightBrace,
            TokenKind::SingleComment,
        ];
        for kind in samples {
            let classes = [
                kind.is_keyword(),
                kind.is_number(),
                kind.is_operator(),
                kind.is_delimiter(),
                kind.is_comment(),
            ];
            assert_eq!(classes.iter().filter(|c| **c).count(), 1, "{}", kind);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::AllEqual.to_string(), "allEqual");
    }
}
