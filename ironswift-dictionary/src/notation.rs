/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! SWIFT field format notation.
//!
//! Field layouts are written in the notation used by the SWIFT user handbook:
//!
//! | Notation | Meaning |
//! |----------|---------|
//! | `6!n`    | exactly 6 characters of charset `n` |
//! | `35x`    | up to 35 characters of charset `x` |
//! | `4*35x`  | up to 4 lines of up to 35 characters |
//! | `[...]`  | optional part |
//! | `$`      | line break |
//! | other    | literal character (`/`, `:`, `+`, ...) |
//!
//! [`Pattern::compile`] turns a notation string into a token tree. Every
//! character or line token is a *slot*; slots are numbered depth-first, so a
//! decoder can map captured text to the component kinds of a field.

use thiserror::Error;

/// Errors compiling a format notation string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// A length was not followed by a charset letter.
    #[error("missing charset after length at offset {offset}")]
    MissingCharset {
        /// Byte offset in the notation.
        offset: usize,
    },

    /// Unknown charset letter.
    #[error("unknown charset {ch:?} at offset {offset}")]
    UnknownCharset {
        /// The letter found.
        ch: char,
        /// Byte offset in the notation.
        offset: usize,
    },

    /// Zero length or line count.
    #[error("zero length at offset {offset}")]
    ZeroLength {
        /// Byte offset in the notation.
        offset: usize,
    },

    /// `[` without matching `]`.
    #[error("unclosed optional group opened at offset {offset}")]
    UnclosedGroup {
        /// Byte offset of the `[`.
        offset: usize,
    },

    /// `]` without matching `[`.
    #[error("unmatched ']' at offset {offset}")]
    UnmatchedClose {
        /// Byte offset of the `]`.
        offset: usize,
    },
}

/// Character set of a notation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// `n`: digits.
    Numeric,
    /// `a`: upper-case letters.
    Alpha,
    /// `c`: upper-case letters and digits.
    Alphanumeric,
    /// `h`: upper-case hexadecimal digits.
    Hex,
    /// `d`: digits and the decimal comma.
    Decimal,
    /// `e`: space.
    Space,
    /// `x` / `y`: printable text, no line breaks.
    Text,
    /// `z`: printable text including line breaks.
    Extended,
}

impl Charset {
    /// Maps a notation letter to its charset.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'n' => Some(Self::Numeric),
            'a' => Some(Self::Alpha),
            'c' => Some(Self::Alphanumeric),
            'h' => Some(Self::Hex),
            'd' => Some(Self::Decimal),
            'e' => Some(Self::Space),
            'x' | 'y' => Some(Self::Text),
            'z' => Some(Self::Extended),
            _ => None,
        }
    }

    /// Returns true if `c` belongs to this charset.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Numeric => c.is_ascii_digit(),
            Self::Alpha => c.is_ascii_uppercase(),
            Self::Alphanumeric => c.is_ascii_uppercase() || c.is_ascii_digit(),
            Self::Hex => c.is_ascii_digit() || matches!(c, 'A'..='F'),
            Self::Decimal => c.is_ascii_digit() || c == ',',
            Self::Space => c == ' ',
            Self::Text => !c.is_control() && c != '{' && c != '}',
            Self::Extended => c != '{' && c != '}' && (!c.is_control() || c == '\r' || c == '\n'),
        }
    }
}

/// Length constraint of a character token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    /// Exactly `n` characters (`n!`).
    Fixed(u16),
    /// One up to `n` characters.
    Max(u16),
}

impl Length {
    /// Upper bound in characters.
    #[must_use]
    pub const fn max(self) -> usize {
        match self {
            Self::Fixed(n) | Self::Max(n) => n as usize,
        }
    }

    /// Lower bound in characters.
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Self::Fixed(n) => n as usize,
            Self::Max(_) => 1,
        }
    }
}

/// One element of a compiled notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal character.
    Literal(char),
    /// Line break (`$`).
    LineBreak,
    /// Run of characters from one charset.
    Chars {
        /// Accepted characters.
        charset: Charset,
        /// Length constraint.
        length: Length,
        /// Slot number.
        slot: usize,
    },
    /// Up to `lines` lines of up to `width` characters each.
    Lines {
        /// Accepted characters.
        charset: Charset,
        /// Maximum number of lines.
        lines: u16,
        /// Maximum characters per line.
        width: u16,
        /// Slot number.
        slot: usize,
    },
    /// Optional group.
    Optional(Vec<Token>),
}

/// A compiled format notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    notation: &'static str,
    tokens: Vec<Token>,
    slots: usize,
}

impl Pattern {
    /// Compiles a notation string.
    ///
    /// # Errors
    /// Returns a [`NotationError`] describing the first malformed element.
    pub fn compile(notation: &'static str) -> Result<Self, NotationError> {
        let mut parser = NotationParser {
            chars: notation.char_indices().collect(),
            pos: 0,
            slots: 0,
        };
        let tokens = parser.sequence(None)?;
        Ok(Self {
            notation,
            tokens,
            slots: parser.slots,
        })
    }

    /// The source notation.
    #[inline]
    #[must_use]
    pub const fn notation(&self) -> &'static str {
        self.notation
    }

    /// Top-level tokens.
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of slots (captured components).
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.slots
    }
}

struct NotationParser {
    chars: Vec<(usize, char)>,
    pos: usize,
    slots: usize,
}

impl NotationParser {
    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.pos).copied()
    }

    fn offset(&self) -> usize {
        self.peek().map_or_else(
            || self.chars.last().map_or(0, |(i, c)| i + c.len_utf8()),
            |(i, _)| i,
        )
    }

    /// Parses tokens until end of input, or until `]` when inside a group
    /// opened at `group`.
    fn sequence(&mut self, group: Option<usize>) -> Result<Vec<Token>, NotationError> {
        let mut tokens = Vec::new();
        while let Some((offset, c)) = self.peek() {
            match c {
                '[' => {
                    self.pos += 1;
                    let inner = self.sequence(Some(offset))?;
                    tokens.push(Token::Optional(inner));
                }
                ']' => {
                    if group.is_none() {
                        return Err(NotationError::UnmatchedClose { offset });
                    }
                    self.pos += 1;
                    return Ok(tokens);
                }
                '$' => {
                    self.pos += 1;
                    tokens.push(Token::LineBreak);
                }
                '0'..='9' => tokens.push(self.counted()?),
                other => {
                    self.pos += 1;
                    tokens.push(Token::Literal(other));
                }
            }
        }
        match group {
            Some(offset) => Err(NotationError::UnclosedGroup { offset }),
            None => Ok(tokens),
        }
    }

    fn number(&mut self) -> Result<u16, NotationError> {
        let offset = self.offset();
        let mut value: u16 = 0;
        while let Some((_, c)) = self.peek() {
            let Some(digit) = c.to_digit(10) else { break };
            value = value.saturating_mul(10).saturating_add(digit as u16);
            self.pos += 1;
        }
        if value == 0 {
            return Err(NotationError::ZeroLength { offset });
        }
        Ok(value)
    }

    fn charset(&mut self) -> Result<Charset, NotationError> {
        let offset = self.offset();
        let (_, c) = self.peek().ok_or(NotationError::MissingCharset { offset })?;
        let charset = Charset::from_letter(c).ok_or(if c.is_ascii_alphabetic() {
            NotationError::UnknownCharset { ch: c, offset }
        } else {
            NotationError::MissingCharset { offset }
        })?;
        self.pos += 1;
        Ok(charset)
    }

    fn counted(&mut self) -> Result<Token, NotationError> {
        let first = self.number()?;
        let token = match self.peek() {
            Some((_, '*')) => {
                self.pos += 1;
                let width = self.number()?;
                let charset = self.charset()?;
                Token::Lines {
                    charset,
                    lines: first,
                    width,
                    slot: self.slots,
                }
            }
            Some((_, '!')) => {
                self.pos += 1;
                let charset = self.charset()?;
                Token::Chars {
                    charset,
                    length: Length::Fixed(first),
                    slot: self.slots,
                }
            }
            _ => {
                let charset = self.charset()?;
                Token::Chars {
                    charset,
                    length: Length::Max(first),
                    slot: self.slots,
                }
            }
        };
        self.slots += 1;
        Ok(token)
    }
}
