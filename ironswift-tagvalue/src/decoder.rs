/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Zero-copy SWIFT MT message decoder.
//!
//! This module splits a message into its `{N:...}` blocks, decodes the fixed
//! width headers (blocks 1 and 2) and lexes the tag blocks (3, 4 and 5).
//! Header fields and tag values are returned as slices of the input.

use crate::lexer::{brace_tags, matching_brace, text_tags};
use ironswift_core::error::DecodeError;
use ironswift_core::message::{
    ApplicationHeader, BasicHeader, InputHeader, Message, OutputHeader, TagBlock,
};
use ironswift_core::types::MessageType;
use tracing::trace;

/// Default maximum message size in bytes.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 1024 * 1024;

/// Number of blocks a message may carry.
pub const BLOCK_COUNT: usize = 5;

const BASIC_HEADER_SHORT_LEN: usize = 15;
const BASIC_HEADER_LEN: usize = 25;
const INPUT_HEADER_MIN_LEN: usize = 16;
const INPUT_HEADER_MAX_LEN: usize = 21;
const OUTPUT_HEADER_LEN: usize = 46;

/// Zero-copy SWIFT MT message decoder.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    /// Raw message text.
    input: &'a str,
    /// Maximum accepted input size in bytes.
    max_message_size: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a new decoder for the given message text.
    ///
    /// # Arguments
    /// * `input` - The SWIFT MT message to decode
    #[inline]
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }

    /// Sets the maximum accepted message size.
    ///
    /// # Arguments
    /// * `max` - Maximum size in bytes
    #[inline]
    #[must_use]
    pub const fn with_max_message_size(mut self, max: usize) -> Self {
        self.max_message_size = max;
        self
    }

    /// Decodes the message.
    ///
    /// # Returns
    /// A `Message` borrowing every header field and tag from the input.
    ///
    /// # Errors
    /// Returns `DecodeError` if the block structure or a header layout is
    /// malformed. Tag-level problems never fail the decode.
    pub fn decode(&self) -> Result<Message<'a>, DecodeError> {
        if self.input.len() > self.max_message_size {
            return Err(DecodeError::MessageTooLarge {
                size: self.input.len(),
                max_size: self.max_message_size,
            });
        }

        let blocks = self.split_blocks()?;
        let mut message = Message::default();
        for (index, body) in blocks.iter().enumerate() {
            let Some(body) = *body else { continue };
            match index + 1 {
                1 => message.block1 = Some(parse_basic_header(body)?),
                2 => message.block2 = Some(parse_application_header(body)?),
                3 => message.block3 = Some(TagBlock::new(3, body, brace_tags(body))),
                4 => {
                    let tags = if body.trim_start().starts_with('{') {
                        brace_tags(body)
                    } else {
                        text_tags(body)
                    };
                    message.block4 = Some(TagBlock::new(4, body, tags));
                }
                _ => message.block5 = Some(TagBlock::new(5, body, brace_tags(body))),
            }
        }
        Ok(message)
    }

    /// Splits the input into block bodies, indexed by block number minus one.
    fn split_blocks(&self) -> Result<[Option<&'a str>; BLOCK_COUNT], DecodeError> {
        let input = self.input;
        let bytes = input.as_bytes();
        let mut blocks: [Option<&'a str>; BLOCK_COUNT] = [None; BLOCK_COUNT];
        let mut found = false;
        let mut pos = 0;

        while pos < bytes.len() {
            if bytes[pos].is_ascii_whitespace() {
                pos += 1;
                continue;
            }
            if bytes[pos] != b'{' {
                return Err(DecodeError::UnexpectedContent { offset: pos });
            }
            let close = matching_brace(bytes, pos)
                .ok_or(DecodeError::UnbalancedBraces { offset: pos })?;
            let inner = &input[pos + 1..close];
            let (id, body) = inner
                .split_once(':')
                .ok_or_else(|| DecodeError::InvalidBlockId(inner.to_string()))?;
            let number = block_number(id)?;
            let slot = &mut blocks[usize::from(number) - 1];
            if slot.is_some() {
                return Err(DecodeError::DuplicateBlock(number));
            }
            trace!(block = number, start = pos, end = close, "block found");
            *slot = Some(body);
            found = true;
            pos = close + 1;
        }

        if found {
            Ok(blocks)
        } else {
            Err(DecodeError::Empty)
        }
    }
}

/// Validates a block identifier (`1` to `5`).
fn block_number(id: &str) -> Result<u8, DecodeError> {
    match id.as_bytes() {
        [b @ b'1'..=b'5'] => Ok(b - b'0'),
        _ => Err(DecodeError::InvalidBlockId(id.to_string())),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn basic_header_error(reason: impl Into<String>) -> DecodeError {
    DecodeError::InvalidBasicHeader {
        reason: reason.into(),
    }
}

fn application_header_error(reason: impl Into<String>) -> DecodeError {
    DecodeError::InvalidApplicationHeader {
        reason: reason.into(),
    }
}

/// Decodes block 1: `F01BANKBEBBAXXX2222123456`.
///
/// Layout: application id (1), service id (2), logical terminal (12), then
/// session number (4) and sequence number (6) unless the header is short.
///
/// # Errors
/// Returns [`DecodeError::InvalidBasicHeader`] on any layout violation.
pub fn parse_basic_header(value: &str) -> Result<BasicHeader<'_>, DecodeError> {
    if !value.is_ascii() {
        return Err(basic_header_error("non-ASCII content"));
    }
    if value.len() != BASIC_HEADER_LEN && value.len() != BASIC_HEADER_SHORT_LEN {
        return Err(basic_header_error(format!(
            "length {} is neither {BASIC_HEADER_SHORT_LEN} nor {BASIC_HEADER_LEN}",
            value.len()
        )));
    }

    let application_id = &value[0..1];
    let service_id = &value[1..3];
    let logical_terminal = &value[3..15];
    if !application_id.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(basic_header_error(format!(
            "application id {application_id:?} is not a letter"
        )));
    }
    if !is_digits(service_id) {
        return Err(basic_header_error(format!(
            "service id {service_id:?} is not numeric"
        )));
    }
    if !is_alphanumeric(logical_terminal) {
        return Err(basic_header_error(format!(
            "logical terminal {logical_terminal:?} is not alphanumeric"
        )));
    }

    let (session_number, sequence_number) = if value.len() == BASIC_HEADER_LEN {
        let session = &value[15..19];
        let sequence = &value[19..25];
        if !is_digits(session) || !is_digits(sequence) {
            return Err(basic_header_error(
                "session and sequence numbers must be numeric",
            ));
        }
        (Some(session), Some(sequence))
    } else {
        (None, None)
    };

    Ok(BasicHeader {
        value,
        application_id,
        service_id,
        logical_terminal,
        session_number,
        sequence_number,
    })
}

/// Decodes block 2, choosing the input or output layout by its first
/// character.
///
/// # Errors
/// Returns [`DecodeError::InvalidApplicationHeader`] on any layout violation.
pub fn parse_application_header(value: &str) -> Result<ApplicationHeader<'_>, DecodeError> {
    if !value.is_ascii() {
        return Err(application_header_error("non-ASCII content"));
    }
    match value.as_bytes().first() {
        Some(b'I') => parse_input_header(value).map(ApplicationHeader::Input),
        Some(b'O') => parse_output_header(value).map(ApplicationHeader::Output),
        Some(_) => Err(application_header_error(format!(
            "direction {:?} is neither I nor O",
            &value[..1]
        ))),
        None => Err(application_header_error("empty block")),
    }
}

fn message_type(value: &str) -> Result<MessageType, DecodeError> {
    MessageType::new(&value[1..4]).ok_or_else(|| {
        application_header_error(format!("message type {:?} is not numeric", &value[1..4]))
    })
}

/// `I103BANKDEFFXXXXU3003`: type, receiver, then optional priority, delivery
/// monitoring and obsolescence period.
fn parse_input_header(value: &str) -> Result<InputHeader<'_>, DecodeError> {
    if !(INPUT_HEADER_MIN_LEN..=INPUT_HEADER_MAX_LEN).contains(&value.len()) {
        return Err(application_header_error(format!(
            "input header length {} out of range",
            value.len()
        )));
    }
    let message_type = message_type(value)?;
    let receiver_address = &value[4..16];
    if !is_alphanumeric(receiver_address) {
        return Err(application_header_error(format!(
            "receiver address {receiver_address:?} is not alphanumeric"
        )));
    }

    let mut rest = &value[16..];
    let priority = take_if(&mut rest, 1, |s| s.bytes().all(|b| b.is_ascii_uppercase()));
    let delivery_monitoring = take_if(&mut rest, 1, is_digits);
    let obsolescence_period = take_if(&mut rest, 3, is_digits);
    if !rest.is_empty() {
        return Err(application_header_error(format!(
            "unexpected trailing content {rest:?}"
        )));
    }

    Ok(InputHeader {
        value,
        message_type,
        receiver_address,
        priority,
        delivery_monitoring,
        obsolescence_period,
    })
}

/// Splits `len` leading characters off `rest` when they satisfy `accept`.
fn take_if<'a>(rest: &mut &'a str, len: usize, accept: impl Fn(&str) -> bool) -> Option<&'a str> {
    let head = rest.get(..len)?;
    if !accept(head) {
        return None;
    }
    *rest = &rest[len..];
    Some(head)
}

/// `O1031535051028ESPBESMMAXXX54237522470510281535N`: type, input time, MIR
/// (date, terminal, session, sequence), output date and time, priority.
fn parse_output_header(value: &str) -> Result<OutputHeader<'_>, DecodeError> {
    if value.len() != OUTPUT_HEADER_LEN && value.len() != OUTPUT_HEADER_LEN + 1 {
        return Err(application_header_error(format!(
            "output header length {} is neither {OUTPUT_HEADER_LEN} nor {}",
            value.len(),
            OUTPUT_HEADER_LEN + 1
        )));
    }
    let message_type = message_type(value)?;

    let numeric = [
        ("sender input time", &value[4..8]),
        ("MIR date", &value[8..14]),
        ("MIR session number", &value[26..30]),
        ("MIR sequence number", &value[30..36]),
        ("receiver output date", &value[36..42]),
        ("receiver output time", &value[42..46]),
    ];
    if let Some((name, part)) = numeric.iter().find(|(_, part)| !is_digits(part)) {
        return Err(application_header_error(format!(
            "{name} {part:?} is not numeric"
        )));
    }
    let mir_logical_terminal = &value[14..26];
    if !is_alphanumeric(mir_logical_terminal) {
        return Err(application_header_error(format!(
            "MIR logical terminal {mir_logical_terminal:?} is not alphanumeric"
        )));
    }
    let priority = value.get(46..47);
    if let Some(priority) = priority
        && !priority.bytes().all(|b| b.is_ascii_uppercase())
    {
        return Err(application_header_error(format!(
            "priority {priority:?} is not an uppercase letter"
        )));
    }

    Ok(OutputHeader {
        value,
        message_type,
        sender_input_time: &value[4..8],
        mir_date: &value[8..14],
        mir_logical_terminal,
        mir_session_number: &value[26..30],
        mir_sequence_number: &value[30..36],
        receiver_output_date: &value[36..42],
        receiver_output_time: &value[42..46],
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironswift_core::types::Direction;

    const SAMPLE: &str = "{1:F01BICFOOYYAXXX8683497519}{2:O1031535051028ESPBESMMAXXX54237522470510281535N}{3:{113:ROMF}{108:0510280182794665}{119:STP}}{4:\n:20:0061350113089908\n:23B:CRED\n-}{5:{MAC:88B4F929}{CHK:22EF370A4073}}";

    #[test]
    fn test_decode_sample() {
        let msg = Decoder::new(SAMPLE).decode().unwrap();
        assert_eq!(msg.block_count(), 5);

        let block1 = msg.block1.unwrap();
        assert_eq!(block1.application_id, "F");
        assert_eq!(block1.service_id, "01");
        assert_eq!(block1.logical_terminal, "BICFOOYYAXXX");
        assert_eq!(block1.session_number, Some("8683"));
        assert_eq!(block1.sequence_number, Some("497519"));

        assert_eq!(msg.direction(), Some(Direction::Output));
        assert_eq!(msg.message_type().unwrap().as_str(), "103");

        let block3 = msg.block3.as_ref().unwrap();
        assert_eq!(block3.len(), 3);
        assert_eq!(block3.get_tag("113").unwrap().value, "ROMF");

        let block4 = msg.block4.as_ref().unwrap();
        assert_eq!(block4.get_tag("20").unwrap().value, "0061350113089908");
        assert_eq!(block4.get_tag("23B").unwrap().value, "CRED");

        let block5 = msg.block5.as_ref().unwrap();
        assert_eq!(block5.get_tag("CHK").unwrap().value, "22EF370A4073");
    }

    #[test]
    fn test_decode_system_block4() {
        let msg = Decoder::new("{1:F01BANKBEBBAXXX2222123456}{4:{177:0510281535}{451:0}}")
            .decode()
            .unwrap();
        let block4 = msg.block4.unwrap();
        assert_eq!(block4.len(), 2);
        assert_eq!(block4.get_tag("451").unwrap().value, "0");
        assert!(msg.block2.is_none());
    }

    #[test]
    fn test_decode_whitespace_between_blocks() {
        let msg = Decoder::new("  {1:F01BANKBEBBAXXX2222123456}\n{2:I103BANKDEFFXXXXN}\n")
            .decode()
            .unwrap();
        assert_eq!(msg.block_count(), 2);
        assert!(msg.is_input());
    }

    #[test]
    fn test_decode_structural_failures() {
        assert_eq!(Decoder::new("").decode(), Err(DecodeError::Empty));
        assert_eq!(Decoder::new("  \n").decode(), Err(DecodeError::Empty));
        assert_eq!(
            Decoder::new("{1:F01BANKBEBBAXXX2222123456").decode(),
            Err(DecodeError::UnbalancedBraces { offset: 0 })
        );
        assert_eq!(
            Decoder::new("{1:F01BANKBEBBAXXX2222123456}}").decode(),
            Err(DecodeError::UnexpectedContent { offset: 29 })
        );
        assert_eq!(
            Decoder::new("hello").decode(),
            Err(DecodeError::UnexpectedContent { offset: 0 })
        );
        assert_eq!(
            Decoder::new("{7:X}").decode(),
            Err(DecodeError::InvalidBlockId("7".to_string()))
        );
        assert_eq!(
            Decoder::new("{A:X}").decode(),
            Err(DecodeError::InvalidBlockId("A".to_string()))
        );
        assert_eq!(
            Decoder::new("{3:{108:A}}{3:{108:B}}").decode(),
            Err(DecodeError::DuplicateBlock(3))
        );
    }

    #[test]
    fn test_decode_message_too_large() {
        let result = Decoder::new(SAMPLE).with_max_message_size(10).decode();
        assert_eq!(
            result,
            Err(DecodeError::MessageTooLarge {
                size: SAMPLE.len(),
                max_size: 10
            })
        );
    }

    #[test]
    fn test_basic_header_short_form() {
        let header = parse_basic_header("F01BANKBEBBAXXX").unwrap();
        assert_eq!(header.logical_terminal, "BANKBEBBAXXX");
        assert!(header.session_number.is_none());
        assert!(header.sequence_number.is_none());
    }

    #[test]
    fn test_basic_header_invalid() {
        assert!(matches!(
            parse_basic_header("F01BANK"),
            Err(DecodeError::InvalidBasicHeader { .. })
        ));
        assert!(matches!(
            parse_basic_header("FX1BANKBEBBAXXX2222123456"),
            Err(DecodeError::InvalidBasicHeader { .. })
        ));
        assert!(matches!(
            parse_basic_header("F01BANKBEBBAXXX22221234X6"),
            Err(DecodeError::InvalidBasicHeader { .. })
        ));
        assert!(
            Decoder::new("{1:F01BANK}{2:I103BANKDEFFXXXXN}")
                .decode()
                .is_err()
        );
    }

    #[test]
    fn test_input_header_variants() {
        let ApplicationHeader::Input(h) = parse_application_header("I103BANKDEFFXXXXU3003").unwrap()
        else {
            panic!("expected input header");
        };
        assert_eq!(h.message_type.as_str(), "103");
        assert_eq!(h.receiver_address, "BANKDEFFXXXX");
        assert_eq!(h.priority, Some("U"));
        assert_eq!(h.delivery_monitoring, Some("3"));
        assert_eq!(h.obsolescence_period, Some("003"));

        let ApplicationHeader::Input(h) = parse_application_header("I940BANKDEFFXXXX").unwrap()
        else {
            panic!("expected input header");
        };
        assert!(h.priority.is_none());
        assert!(h.delivery_monitoring.is_none());
        assert!(h.obsolescence_period.is_none());
    }

    #[test]
    fn test_output_header() {
        let header =
            parse_application_header("O1031535051028ESPBESMMAXXX54237522470510281535N").unwrap();
        let ApplicationHeader::Output(h) = header else {
            panic!("expected output header");
        };
        assert_eq!(h.sender_input_time, "1535");
        assert_eq!(h.mir_date, "051028");
        assert_eq!(h.mir_logical_terminal, "ESPBESMMAXXX");
        assert_eq!(h.mir_session_number, "5423");
        assert_eq!(h.mir_sequence_number, "752247");
        assert_eq!(h.receiver_output_date, "051028");
        assert_eq!(h.receiver_output_time, "1535");
        assert_eq!(h.priority, Some("N"));
        assert_eq!(header.priority(), Some("N"));

        let ApplicationHeader::Output(h) =
            parse_application_header("O1031535051028ESPBESMMAXXX54237522470510281535").unwrap()
        else {
            panic!("expected output header");
        };
        assert_eq!(h.priority, None);
    }

    #[test]
    fn test_application_header_invalid() {
        for value in [
            "",
            "X103BANKDEFFXXXXN",
            "I10XBANKDEFFXXXXN",
            "I103BANK",
            "I103BANKDEFFXXXXN3003XY",
            "O1031535051028ESPBESMMAXXX5423752247",
            "O103153505102XESPBESMMAXXX54237522470510281535N",
            "O1031535051028ESPBESMMAXXX542375224705102815357",
            "O1031535051028ESPBESMMAXXX54237522470510281535n",
        ] {
            assert!(
                matches!(
                    parse_application_header(value),
                    Err(DecodeError::InvalidApplicationHeader { .. })
                ),
                "{value:?} should be rejected"
            );
        }
    }
}
