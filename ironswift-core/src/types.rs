/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Core types for SWIFT MT header values.
//!
//! This module provides the fixed-format values found in the message headers:
//! - [`Bic`]: Bank Identifier Code with institution/country/location/branch parts
//! - [`LogicalTerminal`]: 12-character terminal address (BIC8 + terminal code + branch)
//! - [`MessageType`]: 3-digit MT number (e.g. `103`)
//! - [`Direction`], [`MessagePriority`], [`DeliveryMonitoring`]: header codes

use crate::error::BicError;
use arrayvec::ArrayString;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a BIC without branch code.
pub const BIC8_LEN: usize = 8;

/// Length of a BIC with branch code.
pub const BIC11_LEN: usize = 11;

/// Length of a logical terminal address.
pub const LOGICAL_TERMINAL_LEN: usize = 12;

/// Branch code used when a BIC carries none.
pub const DEFAULT_BRANCH: &str = "XXX";

/// Bank Identifier Code (ISO 9362).
///
/// Stored as given: either 8 characters (no branch) or 11 characters. The
/// branch of an 8-character BIC reads as [`DEFAULT_BRANCH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Bic(ArrayString<BIC11_LEN>);

impl Bic {
    /// Creates a BIC from an 8 or 11 character code.
    ///
    /// # Errors
    /// Returns [`BicError::TooShort`] below 8 characters, [`BicError::InvalidLength`]
    /// for any other length than 8 or 11, and [`BicError::InvalidCharacter`] for
    /// non-alphanumeric input.
    pub fn new(s: &str) -> Result<Self, BicError> {
        let len = s.chars().count();
        if len < BIC8_LEN {
            return Err(BicError::TooShort { len });
        }
        if len != BIC8_LEN && len != BIC11_LEN {
            return Err(BicError::InvalidLength { len });
        }
        if let Some(ch) = s.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(BicError::InvalidCharacter { ch });
        }
        ArrayString::from(s)
            .map(Self)
            .map_err(|_| BicError::InvalidLength { len })
    }

    /// Creates a BIC from a logical terminal address.
    ///
    /// # Errors
    /// Returns a [`BicError`] if `lt` is not a valid logical terminal.
    pub fn from_logical_terminal(lt: &str) -> Result<Self, BicError> {
        LogicalTerminal::new(lt)?.bic()
    }

    /// Institution code (characters 1-4).
    #[must_use]
    pub fn institution(&self) -> &str {
        &self.0[0..4]
    }

    /// ISO country code (characters 5-6).
    #[must_use]
    pub fn country(&self) -> &str {
        &self.0[4..6]
    }

    /// Location code (characters 7-8).
    #[must_use]
    pub fn location(&self) -> &str {
        &self.0[6..8]
    }

    /// Branch code (characters 9-11), or `XXX` when absent.
    #[must_use]
    pub fn branch(&self) -> &str {
        if self.has_branch() {
            &self.0[8..11]
        } else {
            DEFAULT_BRANCH
        }
    }

    /// Returns true if the code was given with an explicit branch.
    #[inline]
    #[must_use]
    pub fn has_branch(&self) -> bool {
        self.0.len() == BIC11_LEN
    }

    /// The 8-character form.
    #[must_use]
    pub fn bic8(&self) -> &str {
        &self.0[..BIC8_LEN]
    }

    /// The 11-character form, padding the branch with `XXX` if needed.
    #[must_use]
    pub fn bic11(&self) -> ArrayString<BIC11_LEN> {
        let mut buf = ArrayString::new();
        buf.push_str(self.bic8());
        buf.push_str(self.branch());
        buf
    }

    /// Returns the code as given.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Bic {
    type Err = BicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Bic {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical terminal address: BIC8 + terminal code + branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct LogicalTerminal(ArrayString<LOGICAL_TERMINAL_LEN>);

impl LogicalTerminal {
    /// Creates a logical terminal from a 12-character address.
    ///
    /// # Errors
    /// Returns a [`BicError`] if the address is not 12 alphanumeric characters.
    pub fn new(s: &str) -> Result<Self, BicError> {
        let len = s.chars().count();
        if len < BIC8_LEN {
            return Err(BicError::TooShort { len });
        }
        if len != LOGICAL_TERMINAL_LEN {
            return Err(BicError::InvalidLength { len });
        }
        if let Some(ch) = s.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(BicError::InvalidCharacter { ch });
        }
        ArrayString::from(s)
            .map(Self)
            .map_err(|_| BicError::InvalidLength { len })
    }

    /// The BIC11 addressed by this terminal (terminal code removed).
    ///
    /// # Errors
    /// Never fails for a constructed terminal; the signature mirrors [`Bic::new`].
    pub fn bic(&self) -> Result<Bic, BicError> {
        let mut code = ArrayString::<BIC11_LEN>::new();
        code.push_str(&self.0[..BIC8_LEN]);
        code.push_str(&self.0[9..]);
        Bic::new(&code)
    }

    /// Returns the address as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LogicalTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SWIFT MT message type, three digits (e.g. `103`, `940`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct MessageType(ArrayString<3>);

impl MessageType {
    /// Creates a message type from three ASCII digits.
    ///
    /// # Returns
    /// `Some(MessageType)` if `s` is exactly three digits, `None` otherwise.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()) {
            ArrayString::from(s).ok().map(Self)
        } else {
            None
        }
    }

    /// Returns the type as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for MessageType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of the application header, from the sender's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Message sent to SWIFT (`I`).
    Input,
    /// Message delivered by SWIFT (`O`).
    Output,
}

impl Direction {
    /// Creates a direction from its flag character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::Input),
            'O' => Some(Self::Output),
            _ => None,
        }
    }

    /// The flag character (`I` or `O`).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Input => 'I',
            Self::Output => 'O',
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Output => "Output",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message priority in block 2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
pub enum MessagePriority {
    /// System message.
    System = b'S',
    /// Urgent.
    Urgent = b'U',
    /// Normal.
    Normal = b'N',
}

impl MessagePriority {
    /// Parses a one-character priority code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.as_bytes() {
            [b] => Self::from_u8(*b),
            _ => None,
        }
    }

    /// Returns the priority code character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Urgent => "Urgent",
            Self::Normal => "Normal",
        }
    }
}

/// Delivery monitoring option of an input application header.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
pub enum DeliveryMonitoring {
    /// Non-delivery warning.
    NonDeliveryWarning = 1,
    /// Delivery notification.
    DeliveryNotification = 2,
    /// Both of the above.
    Both = 3,
}

impl DeliveryMonitoring {
    /// Parses a one-digit delivery monitoring code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.as_bytes() {
            [b @ b'0'..=b'9'] => Self::from_u8(b - b'0'),
            _ => None,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NonDeliveryWarning => "Non-Delivery Warning",
            Self::DeliveryNotification => "Delivery Notification",
            Self::Both => "Non-Delivery Warning and Delivery Notification",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bic11_decomposition() {
        let bic = Bic::new("DEUTDEFF500").unwrap();
        assert_eq!(bic.institution(), "DEUT");
        assert_eq!(bic.country(), "DE");
        assert_eq!(bic.location(), "FF");
        assert_eq!(bic.branch(), "500");
        assert!(bic.has_branch());
    }

    #[test]
    fn test_bic_parts_reconstruct_original() {
        let original = "ESPBESMMXXX";
        let bic = Bic::new(original).unwrap();
        let joined = format!(
            "{}{}{}{}",
            bic.institution(),
            bic.country(),
            bic.location(),
            bic.branch()
        );
        assert_eq!(joined, original);
    }

    #[test]
    fn test_bic8_default_branch() {
        let bic = Bic::new("BICFOOYY").unwrap();
        assert_eq!(bic.branch(), DEFAULT_BRANCH);
        assert!(!bic.has_branch());
        assert_eq!(bic.bic8(), "BICFOOYY");
        assert_eq!(bic.bic11().as_str(), "BICFOOYYXXX");
    }

    #[test]
    fn test_bic_too_short() {
        assert_eq!(Bic::new("ABCDEF"), Err(BicError::TooShort { len: 6 }));
        assert_eq!(Bic::new(""), Err(BicError::TooShort { len: 0 }));
    }

    #[test]
    fn test_bic_invalid_length_and_chars() {
        assert_eq!(Bic::new("ABCDEFGH1"), Err(BicError::InvalidLength { len: 9 }));
        assert_eq!(
            Bic::new("ABCD-EFGH"),
            Err(BicError::InvalidLength { len: 9 })
        );
        assert_eq!(
            Bic::new("ABCD EFG"),
            Err(BicError::InvalidCharacter { ch: ' ' })
        );
    }

    #[test]
    fn test_logical_terminal_to_bic() {
        let lt = LogicalTerminal::new("BICFOOYYAXXX").unwrap();
        assert_eq!(lt.bic().unwrap().as_str(), "BICFOOYYXXX");
        assert_eq!(
            Bic::from_logical_terminal("ESPBESMMAXXX").unwrap().as_str(),
            "ESPBESMMXXX"
        );
        assert!(LogicalTerminal::new("ESPBESMMXXX").is_err());
    }

    #[test]
    fn test_message_type() {
        let mt = MessageType::new("103").unwrap();
        assert_eq!(mt.as_str(), "103");
        assert!(MessageType::new("10").is_none());
        assert!(MessageType::new("1O3").is_none());
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::from_char('I'), Some(Direction::Input));
        assert_eq!(Direction::from_char('O'), Some(Direction::Output));
        assert_eq!(Direction::from_char('X'), None);
        assert_eq!(Direction::Output.to_string(), "Output");
    }

    #[test]
    fn test_priority_codes() {
        assert_eq!(MessagePriority::from_code("N"), Some(MessagePriority::Normal));
        assert_eq!(MessagePriority::from_code("U").unwrap().description(), "Urgent");
        assert_eq!(MessagePriority::System.as_char(), 'S');
        assert_eq!(MessagePriority::from_code("X"), None);
        assert_eq!(MessagePriority::from_code("NN"), None);
    }

    #[test]
    fn test_delivery_monitoring_codes() {
        assert_eq!(
            DeliveryMonitoring::from_code("3").unwrap().description(),
            "Non-Delivery Warning and Delivery Notification"
        );
        assert_eq!(DeliveryMonitoring::from_code("0"), None);
        assert_eq!(DeliveryMonitoring::from_code("A"), None);
    }
}
