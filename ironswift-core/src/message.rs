/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Block and message model for SWIFT MT messages.
//!
//! This module provides:
//! - [`BasicHeader`]: block 1, fixed-width session addressing
//! - [`ApplicationHeader`]: block 2, either [`InputHeader`] or [`OutputHeader`]
//! - [`TagBlock`]: blocks 3, 4 and 5, an ordered list of [`TagRef`]s
//! - [`Message`]: zero-copy view over all five blocks

use crate::field::TagRef;
use crate::types::{Bic, Direction, MessageType};
use smallvec::SmallVec;

/// Block 3 tag carrying the message user reference.
pub const MUR_TAG: &str = "108";

/// Basic header block (block 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicHeader<'a> {
    /// Full block value.
    pub value: &'a str,
    /// Application id (`F`, `A` or `L`).
    pub application_id: &'a str,
    /// Service id (two digits).
    pub service_id: &'a str,
    /// Logical terminal address (12 characters).
    pub logical_terminal: &'a str,
    /// Session number (four digits), absent in short headers.
    pub session_number: Option<&'a str>,
    /// Sequence number (six digits), absent in short headers.
    pub sequence_number: Option<&'a str>,
}

impl BasicHeader<'_> {
    /// Block name.
    pub const NAME: &'static str = "1";
}

/// Input application header: message sent to the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHeader<'a> {
    /// Full block value.
    pub value: &'a str,
    /// Message type.
    pub message_type: MessageType,
    /// Receiver logical terminal address.
    pub receiver_address: &'a str,
    /// Message priority code.
    pub priority: Option<&'a str>,
    /// Delivery monitoring code.
    pub delivery_monitoring: Option<&'a str>,
    /// Obsolescence period, in units of five minutes.
    pub obsolescence_period: Option<&'a str>,
}

/// Output application header: message delivered by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputHeader<'a> {
    /// Full block value.
    pub value: &'a str,
    /// Message type.
    pub message_type: MessageType,
    /// Input time of the sender (`HHMM`).
    pub sender_input_time: &'a str,
    /// Message input reference date (`YYMMDD`).
    pub mir_date: &'a str,
    /// Message input reference logical terminal.
    pub mir_logical_terminal: &'a str,
    /// Message input reference session number.
    pub mir_session_number: &'a str,
    /// Message input reference sequence number.
    pub mir_sequence_number: &'a str,
    /// Output date at the receiver (`YYMMDD`).
    pub receiver_output_date: &'a str,
    /// Output time at the receiver (`HHMM`).
    pub receiver_output_time: &'a str,
    /// Message priority code.
    pub priority: Option<&'a str>,
}

impl<'a> OutputHeader<'a> {
    /// Complete message input reference: date, terminal, session and sequence.
    #[must_use]
    pub fn mir(&self) -> String {
        [
            self.mir_date,
            self.mir_logical_terminal,
            self.mir_session_number,
            self.mir_sequence_number,
        ]
        .concat()
    }
}

/// Application header block (block 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationHeader<'a> {
    /// Input (`I`) header.
    Input(InputHeader<'a>),
    /// Output (`O`) header.
    Output(OutputHeader<'a>),
}

impl<'a> ApplicationHeader<'a> {
    /// Block name.
    pub const NAME: &'static str = "2";

    /// Header direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Input(_) => Direction::Input,
            Self::Output(_) => Direction::Output,
        }
    }

    /// Returns true for an input header.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// Returns true for an output header.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(self, Self::Output(_))
    }

    /// Message type.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::Input(h) => h.message_type,
            Self::Output(h) => h.message_type,
        }
    }

    /// Message priority code, if present.
    #[must_use]
    pub const fn priority(&self) -> Option<&'a str> {
        match self {
            Self::Input(h) => h.priority,
            Self::Output(h) => h.priority,
        }
    }

    /// Full block value.
    #[must_use]
    pub const fn value(&self) -> &'a str {
        match self {
            Self::Input(h) => h.value,
            Self::Output(h) => h.value,
        }
    }
}

/// A block made of tags: user header (3), text (4) or trailer (5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBlock<'a> {
    number: u8,
    value: &'a str,
    tags: SmallVec<[TagRef<'a>; 16]>,
}

impl<'a> TagBlock<'a> {
    /// Creates a tag block.
    ///
    /// # Arguments
    /// * `number` - Block number (3, 4 or 5)
    /// * `value` - Raw block body
    /// * `tags` - Tags in the order they appear
    #[must_use]
    pub fn new(number: u8, value: &'a str, tags: SmallVec<[TagRef<'a>; 16]>) -> Self {
        Self {
            number,
            value,
            tags,
        }
    }

    /// Block number.
    #[inline]
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Block name (its number as text).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.number {
            3 => "3",
            4 => "4",
            _ => "5",
        }
    }

    /// Raw block body.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// Iterates over the tags in order.
    #[inline]
    pub fn tags(&self) -> impl Iterator<Item = &TagRef<'a>> {
        self.tags.iter()
    }

    /// First tag with the given name.
    #[must_use]
    pub fn get_tag(&self, name: &str) -> Option<&TagRef<'a>> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// Number of tags.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the block has no tags.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Zero-copy view of a decoded SWIFT MT message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message<'a> {
    /// Basic header.
    pub block1: Option<BasicHeader<'a>>,
    /// Application header.
    pub block2: Option<ApplicationHeader<'a>>,
    /// User header.
    pub block3: Option<TagBlock<'a>>,
    /// Text block.
    pub block4: Option<TagBlock<'a>>,
    /// Trailer.
    pub block5: Option<TagBlock<'a>>,
}

impl<'a> Message<'a> {
    /// Number of blocks present.
    #[must_use]
    pub fn block_count(&self) -> usize {
        usize::from(self.block1.is_some())
            + usize::from(self.block2.is_some())
            + usize::from(self.block3.is_some())
            + usize::from(self.block4.is_some())
            + usize::from(self.block5.is_some())
    }

    /// Message type from the application header.
    #[must_use]
    pub fn message_type(&self) -> Option<MessageType> {
        self.block2.as_ref().map(ApplicationHeader::message_type)
    }

    /// Header direction.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.block2.as_ref().map(ApplicationHeader::direction)
    }

    /// Returns true if the message has an input application header.
    #[must_use]
    pub fn is_input(&self) -> bool {
        self.direction() == Some(Direction::Input)
    }

    /// Sending institution.
    ///
    /// Input messages are sent by the basic header's terminal; output messages
    /// by the terminal in the message input reference.
    #[must_use]
    pub fn sender(&self) -> Option<Bic> {
        let lt = match self.block2.as_ref()? {
            ApplicationHeader::Input(_) => self.block1.as_ref()?.logical_terminal,
            ApplicationHeader::Output(h) => h.mir_logical_terminal,
        };
        Bic::from_logical_terminal(lt).ok()
    }

    /// Receiving institution.
    ///
    /// Input messages name the receiver in block 2; output messages are
    /// delivered to the basic header's terminal.
    #[must_use]
    pub fn receiver(&self) -> Option<Bic> {
        let lt = match self.block2.as_ref()? {
            ApplicationHeader::Input(h) => h.receiver_address,
            ApplicationHeader::Output(_) => self.block1.as_ref()?.logical_terminal,
        };
        Bic::from_logical_terminal(lt).ok()
    }

    /// The counterparty of the basic header's terminal.
    #[must_use]
    pub fn correspondent_bic(&self) -> Option<Bic> {
        match self.block2.as_ref()? {
            ApplicationHeader::Input(_) => self.receiver(),
            ApplicationHeader::Output(_) => self.sender(),
        }
    }

    /// Message user reference (block 3, tag 108).
    #[must_use]
    pub fn mur(&self) -> Option<&'a str> {
        self.block3
            .as_ref()
            .and_then(|b| b.get_tag(MUR_TAG))
            .map(|t| t.value)
    }

    /// Identifier built from direction, sender BIC11, message type and MUR.
    ///
    /// Requires the application header and a sender; a missing MUR
    /// contributes an empty part.
    #[must_use]
    pub fn uuid(&self) -> Option<String> {
        let block2 = self.block2.as_ref()?;
        let sender = self.sender()?;
        let mut uuid = String::with_capacity(1 + 11 + 3 + 16);
        uuid.push(block2.direction().as_char());
        uuid.push_str(&sender.bic11());
        uuid.push_str(block2.message_type().as_str());
        uuid.push_str(self.mur().unwrap_or_default());
        Some(uuid)
    }
}
