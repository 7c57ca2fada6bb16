/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Schema definitions for SWIFT MT field dictionaries.
//!
//! This module defines the structures that describe tag layouts:
//! - [`ComponentKind`]: Semantic kind of a captured component
//! - [`Render`]: How a decoded value is displayed
//! - [`FieldDef`]: Tag, label, format notation and component kinds
//! - [`SlotCodes`]: Code list a component must belong to
//! - [`LabelOverride`]: Message-type specific label
//! - [`Dictionary`]: Compiled, indexed lookup over the tables

use crate::fields::{BLOCK3_FIELDS, BLOCK4_FIELDS, LABEL_OVERRIDES};
use crate::notation::{NotationError, Pattern};
use ironswift_core::types::MessageType;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Semantic kind of a field component, used for display rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentKind {
    /// Date, `YYMMDD` or `YYYYMMDD`.
    Date,
    /// Time, `HHMM` or `HHMMSS`.
    Time,
    /// ISO 4217 currency code.
    Currency,
    /// Decimal-comma amount.
    Amount,
    /// BIC or part of one.
    Bic,
    /// Account or party identifier.
    Account,
    /// Code word.
    Code,
    /// Plain number.
    Number,
    /// Sign, attached to the following component.
    Sign,
    /// Free text.
    Text,
}

/// Display rendering of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Render {
    /// Components rendered by kind and joined with a space.
    Components,
    /// Raw value, line breaks kept.
    Verbatim,
}

/// Closed set of codes accepted in one slot of a layout.
///
/// The notation alone cannot tell `2a` from a following `[1!a]`; a code list
/// lets the matcher reject runs that are not valid codes and backtrack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotCodes {
    /// Slot index in the compiled notation.
    pub slot: usize,
    /// Accepted codes.
    pub codes: &'static [&'static str],
}

impl SlotCodes {
    /// Returns true if `value` is one of the codes.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.codes.contains(&value)
    }
}

/// Definition of a SWIFT tag layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Tag name (e.g. `32A`).
    pub tag: &'static str,
    /// Message-type agnostic label.
    pub label: &'static str,
    /// Format notation.
    pub notation: &'static str,
    /// Kind of each slot, in slot order.
    pub components: &'static [ComponentKind],
    /// Display rendering.
    pub render: Render,
    /// Code lists restricting individual slots.
    pub codes: &'static [SlotCodes],
}

impl FieldDef {
    /// Creates a field rendered component by component.
    #[must_use]
    pub const fn new(
        tag: &'static str,
        label: &'static str,
        notation: &'static str,
        components: &'static [ComponentKind],
    ) -> Self {
        Self {
            tag,
            label,
            notation,
            components,
            render: Render::Components,
            codes: &[],
        }
    }

    /// Creates a field displayed verbatim (narrative and party fields).
    #[must_use]
    pub const fn verbatim(
        tag: &'static str,
        label: &'static str,
        notation: &'static str,
        components: &'static [ComponentKind],
    ) -> Self {
        Self {
            tag,
            label,
            notation,
            components,
            render: Render::Verbatim,
            codes: &[],
        }
    }

    /// Restricts slots to closed code lists.
    #[must_use]
    pub const fn with_codes(mut self, codes: &'static [SlotCodes]) -> Self {
        self.codes = codes;
        self
    }
}

/// Label that replaces the generic one for a single message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelOverride {
    /// Tag name.
    pub tag: &'static str,
    /// Message type the label applies to.
    pub message_type: &'static str,
    /// Label.
    pub label: &'static str,
}

/// A field definition with its compiled notation.
#[derive(Debug, Clone)]
pub struct CompiledField {
    /// Table entry.
    pub def: &'static FieldDef,
    /// Compiled notation, or the reason it failed to compile.
    pub pattern: Result<Pattern, NotationError>,
}

/// Indexed SWIFT MT field dictionary.
///
/// The standard instance is built once from static tables and only read
/// afterwards, so it can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Dictionary {
    user_header: HashMap<&'static str, CompiledField>,
    text: HashMap<&'static str, CompiledField>,
    overrides: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

static STANDARD: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::from_tables(BLOCK3_FIELDS, BLOCK4_FIELDS, LABEL_OVERRIDES));

impl Dictionary {
    /// Returns the built-in dictionary.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds a dictionary from field and label tables.
    ///
    /// # Arguments
    /// * `user_header` - Block 3 tag layouts
    /// * `text` - Block 4 tag layouts
    /// * `overrides` - Message-type specific labels
    #[must_use]
    pub fn from_tables(
        user_header: &'static [FieldDef],
        text: &'static [FieldDef],
        overrides: &'static [LabelOverride],
    ) -> Self {
        let index = |defs: &'static [FieldDef]| {
            defs.iter()
                .map(|def| {
                    let compiled = CompiledField {
                        def,
                        pattern: Pattern::compile(def.notation),
                    };
                    (def.tag, compiled)
                })
                .collect::<HashMap<_, _>>()
        };
        let mut by_tag: HashMap<&'static str, HashMap<&'static str, &'static str>> =
            HashMap::new();
        for o in overrides {
            by_tag
                .entry(o.tag)
                .or_default()
                .insert(o.message_type, o.label);
        }
        Self {
            user_header: index(user_header),
            text: index(text),
            overrides: by_tag,
        }
    }

    /// Looks up a tag layout.
    ///
    /// # Arguments
    /// * `block` - Block number the tag was found in (3 or 4)
    /// * `tag` - Tag name
    #[must_use]
    pub fn get_field(&self, block: u8, tag: &str) -> Option<&CompiledField> {
        match block {
            3 => self.user_header.get(tag),
            4 => self.text.get(tag),
            _ => None,
        }
    }

    /// Human-readable label of a tag.
    ///
    /// A label registered for `(tag, message_type)` wins over the table label;
    /// tags unknown to the dictionary are labelled `Field <tag>`.
    #[must_use]
    pub fn label(
        &self,
        block: u8,
        tag: &str,
        message_type: Option<&MessageType>,
    ) -> Cow<'static, str> {
        if let Some(mt) = message_type
            && let Some(label) = self.overrides.get(tag).and_then(|m| m.get(mt.as_str()))
        {
            return Cow::Borrowed(*label);
        }
        match self.get_field(block, tag) {
            Some(field) => Cow::Borrowed(field.def.label),
            None => Cow::Owned(format!("Field {tag}")),
        }
    }

    /// Returns an iterator over all block 3 and block 4 definitions.
    pub fn fields(&self) -> impl Iterator<Item = &CompiledField> {
        self.user_header.values().chain(self.text.values())
    }
}
