/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Flattening of a decoded [`Message`] into a [`FieldMap`].
//!
//! Header keys carry a `block1_`, `block2_` or `block5_` prefix. Block 3 and
//! block 4 tags are keyed by their normalized label, so they never collide
//! with header keys.

use crate::config::{FieldRendering, ParserConfig};
use crate::map::{FieldMap, normalize_field_name};
use ironswift_core::message::{
    ApplicationHeader, BasicHeader, InputHeader, Message, OutputHeader, TagBlock,
};
use ironswift_core::types::{Bic, DeliveryMonitoring, MessagePriority, MessageType};
use ironswift_tagvalue::render::FieldDecoder;

/// Trailer tags with dedicated keys, and the description some of them carry.
pub const TRAILER_TAGS: &[(&str, Option<&str>)] = &[
    ("MAC", None),
    ("CHK", None),
    ("PDE", Some("Possible Duplicate Emission")),
    ("PDM", Some("Possible Duplicate Message")),
    ("DLM", Some("Delayed Message")),
    ("MRF", None),
    ("TNG", Some("Training Message")),
    ("SYS", Some("System Originated Message")),
];

/// Builds the field map of a decoded message.
pub(crate) struct Assembler<'c, 'd> {
    config: &'c ParserConfig,
    fields: FieldDecoder<'d>,
    map: FieldMap,
}

impl<'c, 'd> Assembler<'c, 'd> {
    pub(crate) fn new(config: &'c ParserConfig, fields: FieldDecoder<'d>) -> Self {
        Self {
            config,
            fields,
            map: FieldMap::new(),
        }
    }

    pub(crate) fn assemble(mut self, message: &Message<'_>) -> FieldMap {
        self.message(message);
        if let Some(block1) = &message.block1 {
            self.basic_header(block1);
        }
        if let Some(block2) = &message.block2 {
            self.application_header(block2);
        }
        let message_type = message.message_type();
        if let Some(block3) = &message.block3 {
            self.tags(block3, message_type.as_ref());
        }
        if let Some(block4) = &message.block4 {
            self.tags(block4, message_type.as_ref());
        }
        if let Some(block5) = &message.block5 {
            self.trailer(block5);
        }
        self.map
    }

    fn message(&mut self, message: &Message<'_>) {
        if let Some(sender) = message.sender() {
            self.map.insert("sender", sender.as_str());
        }
        if let Some(receiver) = message.receiver() {
            self.map.insert("receiver", receiver.as_str());
        }
        if let Some(uuid) = message.uuid() {
            self.map.insert("uuid", uuid);
        }
        if let Some(message_type) = message.message_type() {
            self.map.insert("message_type", message_type.as_str());
        }
        self.map
            .insert("block_count", message.block_count().to_string());

        if self.config.include_correspondent_bic
            && let Some(bic) = message.correspondent_bic()
        {
            self.bic("correspondent_bic", &bic);
        }
    }

    fn bic(&mut self, prefix: &str, bic: &Bic) {
        self.map.insert(format!("{prefix}_bic"), bic.bic8());
        self.map.insert(format!("{prefix}_bic11"), bic.bic11().as_str());
        self.map
            .insert(format!("{prefix}_institution"), bic.institution());
        self.map.insert(format!("{prefix}_country"), bic.country());
        self.map.insert(format!("{prefix}_location"), bic.location());
        self.map.insert(format!("{prefix}_branch"), bic.branch());
    }

    fn basic_header(&mut self, block1: &BasicHeader<'_>) {
        self.map.insert("block1_name", BasicHeader::NAME);
        self.map
            .insert("block1_application_id", block1.application_id);
        self.map.insert("block1_service_id", block1.service_id);
        self.map
            .insert("block1_logical_terminal", block1.logical_terminal);
        if let Some(session) = block1.session_number {
            self.map.insert("block1_session_number", session);
        }
        if let Some(sequence) = block1.sequence_number {
            self.map.insert("block1_sequence_number", sequence);
        }
    }

    fn application_header(&mut self, block2: &ApplicationHeader<'_>) {
        self.map.insert("block2_name", ApplicationHeader::NAME);
        self.map.insert("block2_block_value", block2.value());
        self.map
            .insert("block2_message_type", block2.message_type().as_str());
        if let Some(priority) = block2.priority() {
            self.map.insert("block2_message_priority", priority);
            let description =
                MessagePriority::from_code(priority).map_or(priority, |p| p.description());
            self.map.insert("block2_priority_desc", description);
        }
        self.map
            .insert("block2_is_input", block2.is_input().to_string());
        self.map
            .insert("block2_is_output", block2.is_output().to_string());
        self.map
            .insert("block2_direction", block2.direction().as_str());

        match block2 {
            ApplicationHeader::Input(input) => self.input_header(input),
            ApplicationHeader::Output(output) => self.output_header(output),
        }
    }

    fn input_header(&mut self, input: &InputHeader<'_>) {
        self.map.insert("block2_input_value", input.value);
        self.map
            .insert("block2_receiver_address", input.receiver_address);
        if let Some(code) = input.delivery_monitoring {
            self.map.insert("block2_delivery_monitoring", code);
            let description =
                DeliveryMonitoring::from_code(code).map_or(code, |d| d.description());
            self.map
                .insert("block2_delivery_monitoring_desc", description);
        }
        if let Some(period) = input.obsolescence_period {
            self.map.insert("block2_obsolescence_period", period);
        }
    }

    fn output_header(&mut self, output: &OutputHeader<'_>) {
        self.map.insert("block2_output_value", output.value);
        self.map
            .insert("block2_sender_input_time", output.sender_input_time);
        self.map.insert("block2_mir", output.mir());
        self.map.insert("block2_mir_date", output.mir_date);
        self.map
            .insert("block2_mir_logical_terminal", output.mir_logical_terminal);
        self.map
            .insert("block2_mir_session_number", output.mir_session_number);
        self.map
            .insert("block2_mir_sequence_number", output.mir_sequence_number);
        self.map
            .insert("block2_receiver_output_date", output.receiver_output_date);
        self.map
            .insert("block2_receiver_output_time", output.receiver_output_time);
    }

    /// Block 3 or block 4 tags, keyed by label. Later tags overwrite earlier
    /// ones sharing a label.
    fn tags(&mut self, block: &TagBlock<'_>, message_type: Option<&MessageType>) {
        for tag in block.tags() {
            let label = self.fields.label(block.number(), tag.name, message_type);
            let value = match self.config.field_rendering {
                FieldRendering::Display => self.fields.display(block.number(), tag.name, tag.value),
                FieldRendering::Raw => tag.value.into(),
            };
            self.map
                .insert(normalize_field_name(&label), value.into_owned());
        }
    }

    fn trailer(&mut self, block5: &TagBlock<'_>) {
        self.map.insert("block5_name", block5.name());
        self.map
            .insert("block5_tag_count", block5.len().to_string());
        self.map
            .insert("block5_is_empty", block5.is_empty().to_string());

        for (name, description) in TRAILER_TAGS {
            let Some(tag) = block5.get_tag(name) else {
                continue;
            };
            let key = format!("block5_{}", normalize_field_name(name));
            if let Some(description) = description {
                self.map.insert(format!("{key}_desc"), *description);
            }
            self.map.insert(key, tag.value);
        }

        for tag in block5.tags() {
            if TRAILER_TAGS.iter().any(|(name, _)| *name == tag.name) {
                continue;
            }
            let key = format!("block5_tag_{}", normalize_field_name(tag.name));
            self.map.insert_if_absent(key, tag.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironswift_tagvalue::decoder::Decoder;

    fn assemble(input: &str) -> FieldMap {
        assemble_with(input, &ParserConfig::default())
    }

    fn assemble_with(input: &str, config: &ParserConfig) -> FieldMap {
        let message = Decoder::new(input).decode().unwrap();
        Assembler::new(config, FieldDecoder::default()).assemble(&message)
    }

    const INPUT_MT103: &str = "{1:F01BANKBEBBAXXX2222123456}{2:I103BANKDEFFXXXXU3003}{3:{108:MUR42}}{4:\r\n:20:REF1\r\n:23B:CRED\r\n:32A:180101EUR1000,\r\n:50K:/123\r\nJOHN DOE\r\n:59:JANE DOE\r\n:71A:SHA\r\n-}";

    #[test]
    fn test_input_header_keys() {
        let map = assemble(INPUT_MT103);
        assert_eq!(map.get("block2_direction"), Some("Input"));
        assert_eq!(map.get("block2_is_input"), Some("true"));
        assert_eq!(map.get("block2_is_output"), Some("false"));
        assert_eq!(map.get("block2_receiver_address"), Some("BANKDEFFXXXX"));
        assert_eq!(map.get("block2_message_priority"), Some("U"));
        assert_eq!(map.get("block2_priority_desc"), Some("Urgent"));
        assert_eq!(map.get("block2_delivery_monitoring"), Some("3"));
        assert_eq!(
            map.get("block2_delivery_monitoring_desc"),
            Some("Non-Delivery Warning and Delivery Notification")
        );
        assert_eq!(map.get("block2_obsolescence_period"), Some("003"));
        assert_eq!(
            map.get("block2_input_value"),
            Some("I103BANKDEFFXXXXU3003")
        );
        for key in ["block2_output_value", "block2_mir", "block2_sender_input_time"] {
            assert!(!map.contains_key(key), "{key} must not be set");
        }
    }

    #[test]
    fn test_input_message_keys() {
        let map = assemble(INPUT_MT103);
        assert_eq!(map.get("sender"), Some("BANKBEBBXXX"));
        assert_eq!(map.get("receiver"), Some("BANKDEFFXXX"));
        assert_eq!(map.get("uuid"), Some("IBANKBEBBXXX103MUR42"));
        assert_eq!(map.get("message_type"), Some("103"));
        assert_eq!(map.get("block_count"), Some("4"));
        assert_eq!(map.get("correspondent_bic_bic"), Some("BANKDEFF"));
        assert_eq!(map.get("correspondent_bic_bic11"), Some("BANKDEFFXXX"));
        assert_eq!(map.get("correspondent_bic_institution"), Some("BANK"));
        assert_eq!(map.get("correspondent_bic_country"), Some("DE"));
        assert_eq!(map.get("correspondent_bic_location"), Some("FF"));
        assert_eq!(map.get("correspondent_bic_branch"), Some("XXX"));
    }

    #[test]
    fn test_text_block_labels_and_values() {
        let map = assemble(INPUT_MT103);
        assert_eq!(map.get("sender_s_reference"), Some("REF1"));
        assert_eq!(map.get("bank_operation_code"), Some("CRED"));
        assert_eq!(
            map.get("value_date_currency_amount"),
            Some("2018-01-01 EUR 1000")
        );
        assert_eq!(map.get("ordering_customer"), Some("/123\r\nJOHN DOE"));
        assert_eq!(map.get("beneficiary_customer"), Some("JANE DOE"));
        assert_eq!(map.get("details_of_charges"), Some("SHA"));
        assert_eq!(map.get("message_user_reference"), Some("MUR42"));
    }

    #[test]
    fn test_raw_rendering() {
        let config = ParserConfig::new().with_field_rendering(FieldRendering::Raw);
        let map = assemble_with(INPUT_MT103, &config);
        assert_eq!(map.get("value_date_currency_amount"), Some("180101EUR1000,"));
    }

    #[test]
    fn test_correspondent_bic_can_be_disabled() {
        let config = ParserConfig::new().with_correspondent_bic(false);
        let map = assemble_with(INPUT_MT103, &config);
        assert!(map.iter().all(|(k, _)| !k.starts_with("correspondent_bic")));
        assert_eq!(map.get("sender"), Some("BANKBEBBXXX"));
    }

    #[test]
    fn test_label_collision_last_write_wins() {
        let map = assemble(
            "{2:I202BANKDEFFXXXXN}{4:\n:52A:BANKBEBB\n:52D:SECOND BANK\n-}",
        );
        assert_eq!(map.get("ordering_institution"), Some("SECOND BANK"));
    }

    #[test]
    fn test_unknown_tag_label() {
        let map = assemble("{2:I103BANKDEFFXXXXN}{4:\n:99Z:SOMETHING\n-}");
        assert_eq!(map.get("field_99z"), Some("SOMETHING"));
    }

    #[test]
    fn test_trailer_well_known_and_custom() {
        let map = assemble(
            "{1:F01BANKBEBBAXXX2222123456}{5:{CHK:ABC}{PDE:}{TNG:}{ZZZ:first}{ZZZ:second}{MAC:1}{MAC:2}}",
        );
        assert_eq!(map.get("block5_name"), Some("5"));
        assert_eq!(map.get("block5_tag_count"), Some("7"));
        assert_eq!(map.get("block5_is_empty"), Some("false"));
        assert_eq!(map.get("block5_chk"), Some("ABC"));
        assert_eq!(map.get("block5_pde"), Some(""));
        assert_eq!(map.get("block5_pde_desc"), Some("Possible Duplicate Emission"));
        assert_eq!(map.get("block5_tng_desc"), Some("Training Message"));
        assert_eq!(map.get("block5_mac"), Some("1"));
        assert_eq!(map.get("block5_tag_zzz"), Some("first"));
        assert!(!map.contains_key("block5_tag_mac"));
        assert!(!map.contains_key("block5_mac_desc"));
        assert!(!map.contains_key("block5_pdm"));
    }

    #[test]
    fn test_empty_trailer() {
        let map = assemble("{1:F01BANKBEBBAXXX2222123456}{5:}");
        assert_eq!(map.get("block5_tag_count"), Some("0"));
        assert_eq!(map.get("block5_is_empty"), Some("true"));
    }

    #[test]
    fn test_block1_only() {
        let map = assemble("{1:F01BANKBEBBAXXX}");
        assert_eq!(map.get("block1_name"), Some("1"));
        assert_eq!(map.get("block1_logical_terminal"), Some("BANKBEBBAXXX"));
        assert!(!map.contains_key("block1_session_number"));
        assert_eq!(map.get("block_count"), Some("1"));
        for key in ["sender", "receiver", "uuid", "message_type"] {
            assert!(!map.contains_key(key), "{key} must not be set");
        }
        assert!(map.iter().all(|(k, _)| !k.starts_with("correspondent_bic")));
    }

    #[test]
    fn test_input_without_basic_header() {
        let map = assemble("{2:I103BANKDEFFXXXXN}");
        assert_eq!(map.get("message_type"), Some("103"));
        assert_eq!(map.get("receiver"), Some("BANKDEFFXXX"));
        assert_eq!(map.get("correspondent_bic_bic11"), Some("BANKDEFFXXX"));
        assert!(!map.contains_key("sender"));
        assert!(!map.contains_key("uuid"));
    }
}
