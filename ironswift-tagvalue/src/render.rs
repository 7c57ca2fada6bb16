/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Display rendering of tag values.
//!
//! [`FieldDecoder`] looks a tag up in a [`Dictionary`], matches the raw value
//! against the tag's format notation and renders the captured components:
//!
//! | Kind       | Raw          | Display      |
//! |------------|--------------|--------------|
//! | `Date`     | `051028`     | `2005-10-28` |
//! | `Time`     | `1535`       | `15:35`      |
//! | `Amount`   | `1234,50`    | `1234.50`    |
//! | `Sign`     | `+` `0100`   | `+0100`      |
//! | otherwise  | unchanged    | unchanged    |
//!
//! Components are joined with a single space. Verbatim fields (parties and
//! narratives) and unknown tags are returned unchanged.

use crate::format::match_restricted;
use ironswift_core::error::FieldError;
use ironswift_core::field::{swift_amount, swift_date, swift_time};
use ironswift_core::types::MessageType;
use ironswift_dictionary::schema::{ComponentKind, Dictionary, Render};
use std::borrow::Cow;
use tracing::debug;

/// Decodes tag values into display strings.
#[derive(Debug, Clone, Copy)]
pub struct FieldDecoder<'d> {
    dictionary: &'d Dictionary,
}

impl Default for FieldDecoder<'static> {
    fn default() -> Self {
        Self::new(Dictionary::standard())
    }
}

impl<'d> FieldDecoder<'d> {
    /// Creates a decoder over the given dictionary.
    #[inline]
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    /// The dictionary in use.
    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Human-readable label of a tag.
    #[must_use]
    pub fn label(&self, block: u8, tag: &str, message_type: Option<&MessageType>) -> Cow<'static, str> {
        self.dictionary.label(block, tag, message_type)
    }

    /// Decodes a tag value.
    ///
    /// # Arguments
    /// * `block` - Block the tag was found in (3 or 4)
    /// * `tag` - Tag name
    /// * `value` - Raw tag value
    ///
    /// # Returns
    /// The display value. Tags missing from the dictionary are returned
    /// unchanged.
    ///
    /// # Errors
    /// Returns `FieldError` if the value does not match the tag's format or a
    /// date, time or amount component is invalid.
    pub fn decode<'v>(&self, block: u8, tag: &str, value: &'v str) -> Result<Cow<'v, str>, FieldError> {
        let Some(field) = self.dictionary.get_field(block, tag) else {
            return Ok(Cow::Borrowed(value));
        };
        let pattern = field.pattern.as_ref().map_err(|e| FieldError::InvalidNotation {
            tag: tag.to_string(),
            reason: e.to_string(),
        })?;
        let components =
            match_restricted(pattern, field.def.codes, value).ok_or_else(|| {
                FieldError::FormatMismatch {
                    tag: tag.to_string(),
                    format: pattern.notation().to_string(),
                }
            })?;

        match field.def.render {
            Render::Verbatim => Ok(Cow::Borrowed(value)),
            Render::Components => {
                render_components(tag, field.def.components, &components).map(Cow::Owned)
            }
        }
    }

    /// Decodes a tag value, falling back to the raw value on any error.
    ///
    /// Errors are logged at `debug` level.
    #[must_use]
    pub fn display<'v>(&self, block: u8, tag: &str, value: &'v str) -> Cow<'v, str> {
        match self.decode(block, tag, value) {
            Ok(display) => display,
            Err(error) => {
                debug!(block, tag, value, %error, "tag value kept raw");
                Cow::Borrowed(value)
            }
        }
    }
}

/// Renders captured components by kind.
fn render_components(
    tag: &str,
    kinds: &[ComponentKind],
    components: &[Option<&str>],
) -> Result<String, FieldError> {
    let mut parts: Vec<String> = Vec::with_capacity(components.len());
    let mut sign: Option<&str> = None;

    for (kind, component) in kinds.iter().zip(components) {
        let Some(raw) = *component else { continue };
        let rendered = match kind {
            ComponentKind::Sign => {
                sign = Some(raw);
                continue;
            }
            ComponentKind::Date => swift_date(raw)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .ok_or_else(|| FieldError::InvalidDate {
                    tag: tag.to_string(),
                    value: raw.to_string(),
                })?,
            ComponentKind::Time => swift_time(raw)
                .map(|t| {
                    let format = if raw.len() == 6 { "%H:%M:%S" } else { "%H:%M" };
                    t.format(format).to_string()
                })
                .ok_or_else(|| FieldError::InvalidTime {
                    tag: tag.to_string(),
                    value: raw.to_string(),
                })?,
            ComponentKind::Amount => swift_amount(raw)
                .map(|a| a.to_string())
                .ok_or_else(|| FieldError::InvalidAmount {
                    tag: tag.to_string(),
                    value: raw.to_string(),
                })?,
            ComponentKind::Currency
            | ComponentKind::Bic
            | ComponentKind::Account
            | ComponentKind::Code
            | ComponentKind::Number
            | ComponentKind::Text => raw.to_string(),
        };
        match sign.take() {
            Some(sign) => parts.push(format!("{sign}{rendered}")),
            None => parts.push(rendered),
        }
    }
    if let Some(sign) = sign {
        parts.push(sign.to_string());
    }
    Ok(parts.join(" "))
}
