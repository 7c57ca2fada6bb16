/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tag references and SWIFT value conversions.
//!
//! This module provides:
//! - [`TagRef`]: Zero-copy reference to a tag within a message block
//! - [`swift_date`], [`swift_time`], [`swift_amount`]: conversions of the
//!   SWIFT date, time and decimal-comma amount notations

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Zero-copy reference to a tag within a SWIFT message.
///
/// Both the name and the raw value borrow from the original message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagRef<'a> {
    /// Tag name (e.g. `32A`, `108`, `MAC`).
    pub name: &'a str,
    /// Raw value, line breaks included.
    pub value: &'a str,
}

impl<'a> TagRef<'a> {
    /// Creates a new tag reference.
    #[inline]
    #[must_use]
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }

    /// Returns the tag name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// Returns true if the value is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for TagRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}:{}", self.name, self.value)
    }
}

/// Parses a SWIFT date, `YYMMDD` or `YYYYMMDD`.
///
/// Two-digit years follow the chrono `%y` pivot (00-68 → 20xx, 69-99 → 19xx).
#[must_use]
pub fn swift_date(s: &str) -> Option<NaiveDate> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.len() {
        6 => NaiveDate::parse_from_str(s, "%y%m%d").ok(),
        8 => NaiveDate::parse_from_str(s, "%Y%m%d").ok(),
        _ => None,
    }
}

/// Parses a SWIFT time, `HHMM` or `HHMMSS`.
#[must_use]
pub fn swift_time(s: &str) -> Option<NaiveTime> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.len() {
        4 => NaiveTime::parse_from_str(s, "%H%M").ok(),
        6 => NaiveTime::parse_from_str(s, "%H%M%S").ok(),
        _ => None,
    }
}

/// Parses a SWIFT amount: digits with a mandatory decimal comma.
///
/// `100000,` is 100000 and `1234,50` is 1234.50 (the scale is kept).
#[must_use]
pub fn swift_amount(s: &str) -> Option<Decimal> {
    let (int, frac) = s.split_once(',')?;
    if int.is_empty()
        || !int.bytes().all(|b| b.is_ascii_digit())
        || !frac.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    if frac.is_empty() {
        Decimal::from_str(int).ok()
    } else {
        Decimal::from_str(&format!("{int}.{frac}")).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_ref_display() {
        assert_eq!(TagRef::new("20", "REF1").to_string(), ":20:REF1");
    }

    #[test]
    fn test_swift_date() {
        assert_eq!(swift_date("061028"), NaiveDate::from_ymd_opt(2006, 10, 28));
        assert_eq!(swift_date("20061028"), NaiveDate::from_ymd_opt(2006, 10, 28));
        assert_eq!(swift_date("061328"), None);
        assert_eq!(swift_date("0610"), None);
        assert_eq!(swift_date("+61028"), None);
    }

    #[test]
    fn test_swift_time() {
        assert_eq!(swift_time("1534"), NaiveTime::from_hms_opt(15, 34, 0));
        assert_eq!(swift_time("153407"), NaiveTime::from_hms_opt(15, 34, 7));
        assert_eq!(swift_time("2460"), None);
    }

    #[test]
    fn test_swift_amount() {
        assert_eq!(swift_amount("100000,").unwrap().to_string(), "100000");
        assert_eq!(swift_amount("1234,50").unwrap().to_string(), "1234.50");
        assert_eq!(swift_amount("0,5").unwrap().to_string(), "0.5");
        assert_eq!(swift_amount("1000"), None);
        assert_eq!(swift_amount(",5"), None);
        assert_eq!(swift_amount("1,2,3"), None);
    }
}
