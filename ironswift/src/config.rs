/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Parser configuration.
//!
//! This module provides configuration options for [`Parser`](crate::Parser).

use ironswift_tagvalue::decoder::DEFAULT_MAX_MESSAGE_SIZE;

/// How block 3 and block 4 tag values are written to the field map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldRendering {
    /// Values rendered for display: ISO dates, `HH:MM` times, `.` decimals.
    #[default]
    Display,
    /// Values exactly as they appear in the message.
    Raw,
}

/// Configuration for a [`Parser`](crate::Parser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum message size in bytes.
    pub max_message_size: usize,
    /// Rendering of tag values.
    pub field_rendering: FieldRendering,
    /// Whether to emit the `correspondent_bic_*` keys.
    pub include_correspondent_bic: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            field_rendering: FieldRendering::Display,
            include_correspondent_bic: true,
        }
    }

    /// Sets the maximum message size.
    #[must_use]
    pub const fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }

    /// Sets the rendering of tag values.
    #[must_use]
    pub const fn with_field_rendering(mut self, rendering: FieldRendering) -> Self {
        self.field_rendering = rendering;
        self
    }

    /// Sets whether to emit the correspondent BIC keys.
    #[must_use]
    pub const fn with_correspondent_bic(mut self, include: bool) -> Self {
        self.include_correspondent_bic = include;
        self
    }
}

/// Builder for parser configuration.
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    max_message_size: Option<usize>,
    field_rendering: Option<FieldRendering>,
    include_correspondent_bic: Option<bool>,
}

impl ParserConfigBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum message size.
    #[must_use]
    pub const fn max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = Some(size);
        self
    }

    /// Sets the rendering of tag values.
    #[must_use]
    pub const fn field_rendering(mut self, rendering: FieldRendering) -> Self {
        self.field_rendering = Some(rendering);
        self
    }

    /// Sets whether to emit the correspondent BIC keys.
    #[must_use]
    pub const fn include_correspondent_bic(mut self, include: bool) -> Self {
        self.include_correspondent_bic = Some(include);
        self
    }

    /// Builds the configuration. Unset options keep their defaults.
    #[must_use]
    pub fn build(self) -> ParserConfig {
        let mut config = ParserConfig::new();

        if let Some(size) = self.max_message_size {
            config.max_message_size = size;
        }
        if let Some(rendering) = self.field_rendering {
            config.field_rendering = rendering;
        }
        if let Some(include) = self.include_correspondent_bic {
            config.include_correspondent_bic = include;
        }

        config
    }
}
