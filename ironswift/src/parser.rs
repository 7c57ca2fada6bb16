/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Message parser.
//!
//! [`Parser`] runs the whole pipeline: block decoding, tag lexing, field
//! rendering and flattening into a [`FieldMap`].

use crate::assemble::Assembler;
use crate::config::ParserConfig;
use crate::map::FieldMap;
use ironswift_core::error::Result;
use ironswift_dictionary::schema::Dictionary;
use ironswift_tagvalue::decoder::Decoder;
use ironswift_tagvalue::render::FieldDecoder;
use tracing::debug;

/// SWIFT MT message parser.
///
/// A parser holds no per-message state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    fields: FieldDecoder<'static>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl Parser {
    /// Creates a parser using the built-in field dictionary.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self::with_dictionary(config, Dictionary::standard())
    }

    /// Creates a parser using a custom field dictionary.
    ///
    /// # Arguments
    /// * `config` - Parser configuration
    /// * `dictionary` - Tag layouts and labels
    #[must_use]
    pub const fn with_dictionary(config: ParserConfig, dictionary: &'static Dictionary) -> Self {
        Self {
            config,
            fields: FieldDecoder::new(dictionary),
        }
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a message into a flat field map.
    ///
    /// Keys are normalized field names; the message identifier is `uuid`.
    ///
    /// # Errors
    /// Returns `SwiftError::Decode` if the block structure or a header layout
    /// is malformed. Problems in individual tags never fail the parse; those
    /// values are kept raw.
    pub fn parse(&self, message: &str) -> Result<FieldMap> {
        let decoded = Decoder::new(message)
            .with_max_message_size(self.config.max_message_size)
            .decode()?;
        Ok(Assembler::new(&self.config, self.fields).assemble(&decoded))
    }

    /// Parses an optional message, yielding an empty map for absent input
    /// and for messages that cannot be decoded.
    #[must_use]
    pub fn parse_or_empty(&self, message: Option<&str>) -> FieldMap {
        let Some(message) = message else {
            return FieldMap::new();
        };
        self.parse(message).unwrap_or_else(|error| {
            debug!(%error, "message could not be decoded");
            FieldMap::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfigBuilder;
    use ironswift_core::error::{DecodeError, SwiftError};

    const SAMPLE: &str = "{1:F01BICFOOYYAXXX8683497519}{2:O1031535051028ESPBESMMAXXX54237522470510281535N}{3:{113:ROMF}{108:0510280182794665}{119:STP}}{4:\n:20:0061350113089908\n:23B:CRED\n-}{5:{MAC:88B4F929}{CHK:22EF370A4073}}";

    #[test]
    fn test_parse_sample_message() {
        let map = Parser::default().parse(SAMPLE).unwrap();

        assert_eq!(map.get("block1_application_id"), Some("F"));
        assert_eq!(map.get("block1_service_id"), Some("01"));
        assert_eq!(map.get("block1_session_number"), Some("8683"));
        assert_eq!(map.get("block1_sequence_number"), Some("497519"));
        assert_eq!(map.get("block2_direction"), Some("Output"));
        assert_eq!(map.get("block2_message_priority"), Some("N"));
        assert_eq!(map.get("block2_priority_desc"), Some("Normal"));
        assert_eq!(map.get("sender_s_reference"), Some("0061350113089908"));
        assert_eq!(map.get("bank_operation_code"), Some("CRED"));
        assert_eq!(map.get("banking_priority"), Some("ROMF"));
        assert_eq!(map.get("message_user_reference"), Some("0510280182794665"));
        assert_eq!(map.get("validation_flag"), Some("STP"));
        assert_eq!(map.get("block5_mac"), Some("88B4F929"));
        assert_eq!(map.get("block5_chk"), Some("22EF370A4073"));
        assert_eq!(map.get("block5_tag_count"), Some("2"));
    }

    #[test]
    fn test_parse_sample_message_level_keys() {
        let map = Parser::default().parse(SAMPLE).unwrap();

        assert_eq!(map.get("message_type"), Some("103"));
        assert_eq!(map.get("sender"), Some("ESPBESMMXXX"));
        assert_eq!(map.get("receiver"), Some("BICFOOYYXXX"));
        assert_eq!(map.get("uuid"), Some("OESPBESMMXXX1030510280182794665"));
        assert!(!map.contains_key("UUID"));
        assert_eq!(map.get("block_count"), Some("5"));
        assert_eq!(map.get("correspondent_bic_bic11"), Some("ESPBESMMXXX"));
    }

    #[test]
    fn test_parse_sample_output_keys_only() {
        let map = Parser::default().parse(SAMPLE).unwrap();

        assert_eq!(map.get("block2_is_output"), Some("true"));
        assert_eq!(map.get("block2_is_input"), Some("false"));
        assert_eq!(map.get("block2_mir"), Some("051028ESPBESMMAXXX5423752247"));
        assert_eq!(map.get("block2_mir_logical_terminal"), Some("ESPBESMMAXXX"));
        assert_eq!(map.get("block2_receiver_output_time"), Some("1535"));
        for key in [
            "block2_input_value",
            "block2_receiver_address",
            "block2_delivery_monitoring",
            "block2_delivery_monitoring_desc",
            "block2_obsolescence_period",
        ] {
            assert!(!map.contains_key(key), "{key} must not be set");
        }
    }

    #[test]
    fn test_every_key_is_normalized() {
        let map = Parser::default().parse(SAMPLE).unwrap();
        for (key, _) in map.iter() {
            assert_eq!(crate::normalize_field_name(key), key);
        }
    }

    #[test]
    fn test_parse_duplicate_custom_trailer_tag() {
        let map = Parser::default()
            .parse("{1:F01BANKBEBBAXXX2222123456}{5:{XYZ:first}{XYZ:second}}")
            .unwrap();
        assert_eq!(map.get("block5_tag_xyz"), Some("first"));
    }

    #[test]
    fn test_parse_malformed_is_error() {
        let parser = Parser::default();
        assert!(matches!(
            parser.parse("{1:F01BANKBEBBAXXX2222123456"),
            Err(SwiftError::Decode(DecodeError::UnbalancedBraces { .. }))
        ));
        assert!(matches!(
            parser.parse(""),
            Err(SwiftError::Decode(DecodeError::Empty))
        ));
        assert!(parser.parse("{1:F01BANKBEBBAXXX2222123456}{2:X}").is_err());
    }

    #[test]
    fn test_parse_respects_max_message_size() {
        let parser = Parser::new(ParserConfigBuilder::new().max_message_size(16).build());
        assert!(matches!(
            parser.parse(SAMPLE),
            Err(SwiftError::Decode(DecodeError::MessageTooLarge { max_size: 16, .. }))
        ));
    }

    #[test]
    fn test_parse_or_empty() {
        let parser = Parser::default();
        assert!(parser.parse_or_empty(None).is_empty());
        assert!(parser.parse_or_empty(Some("{1:broken")).is_empty());
        assert!(!parser.parse_or_empty(Some(SAMPLE)).is_empty());
    }

    #[test]
    fn test_bad_tag_degrades_to_raw_value() {
        let map = Parser::default()
            .parse("{2:I103BANKDEFFXXXXN}{4:\n:32A:NOT A DATE\n:20:REF\n-}")
            .unwrap();
        assert_eq!(map.get("value_date_currency_amount"), Some("NOT A DATE"));
        assert_eq!(map.get("sender_s_reference"), Some("REF"));
    }

    #[test]
    fn test_statement_line_mark_and_funds_code() {
        let map = Parser::default()
            .parse("{2:I940BANKDEFFXXXXN}{4:\n:61:0910310910CX10,NMSCREF2\n-}")
            .unwrap();
        assert_eq!(
            map.get("statement_line"),
            Some("2009-10-31 0910 C X 10 N MSC REF2")
        );
    }

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }
}
