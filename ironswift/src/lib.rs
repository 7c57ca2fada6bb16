/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # IronSwift
//!
//! A SWIFT MT message parser for Rust.
//!
//! IronSwift decodes the block-delimited `{1:...}{2:...}{3:...}{4:...}{5:...}`
//! text of SWIFT MT messages into a flat mapping of normalized field names to
//! display values, ready to be stored as a record.
//!
//! ## Features
//!
//! - **Zero-copy decoding**: Headers and tags borrow from the input text
//! - **Grammar as data**: Tag layouts are SWIFT format notation strings
//! - **Never panics**: Malformed messages fail cleanly; bad tags degrade to raw values
//! - **Thread-safe**: Lookup tables are immutable and shared
//!
//! ## Quick Start
//!
//! ```rust
//! let message = "{1:F01BANKBEBBAXXX2222123456}{2:I103BANKDEFFXXXXN}{4:\n:20:REF1\n-}";
//! let fields = ironswift::parse(message).unwrap();
//!
//! assert_eq!(fields.get("block1_application_id"), Some("F"));
//! assert_eq!(fields.get("sender_s_reference"), Some("REF1"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Block model, BIC handling and error definitions
//! - [`dictionary`]: Format notation and tag tables
//! - [`tagvalue`]: Block decoding, tag lexing and value rendering

pub mod config;
pub mod map;
pub mod parser;

mod assemble;

pub use assemble::TRAILER_TAGS;
pub use config::{FieldRendering, ParserConfig, ParserConfigBuilder};
pub use map::{FieldMap, normalize_field_name};
pub use parser::Parser;

pub mod core {
    //! Block model, BIC handling and error definitions.
    pub use ironswift_core::*;
}

pub mod dictionary {
    //! Format notation and tag tables.
    pub use ironswift_dictionary::*;
}

pub mod tagvalue {
    //! Block decoding, tag lexing and value rendering.
    pub use ironswift_tagvalue::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use ironswift_core::{
        ApplicationHeader, Bic, BicError, DecodeError, Direction, FieldError, Message,
        MessagePriority, MessageType, Result, SwiftError, TagRef,
    };

    // Dictionary
    pub use ironswift_dictionary::{ComponentKind, Dictionary, FieldDef, Render};

    // Tag-value decoding
    pub use ironswift_tagvalue::{Decoder, FieldDecoder};

    // Parser
    pub use crate::{
        FieldMap, FieldRendering, Parser, ParserConfig, ParserConfigBuilder, normalize_field_name,
        parse, parse_or_empty,
    };
}

/// Parses a message with the default configuration.
///
/// Every key is a normalized field name, so the message identifier is
/// reported as `uuid` rather than `UUID`. Hosts that compare column names
/// case-insensitively see no difference.
///
/// # Errors
/// Returns `SwiftError::Decode` if the message structure is malformed.
pub fn parse(message: &str) -> ironswift_core::Result<FieldMap> {
    Parser::default().parse(message)
}

/// Parses an optional message with the default configuration.
///
/// Absent input and undecodable messages both produce an empty map.
#[must_use]
pub fn parse_or_empty(message: Option<&str>) -> FieldMap {
    Parser::default().parse_or_empty(message)
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let bic = Bic::new("BANKDEFFXXX").unwrap();
        assert_eq!(bic.country(), "DE");
        assert_eq!(Direction::Output.as_str(), "Output");
        assert_eq!(ParserConfig::default().field_rendering, FieldRendering::Display);
    }

    #[test]
    fn test_parse_functions() {
        let fields = parse("{1:F01BANKBEBBAXXX2222123456}").unwrap();
        assert_eq!(fields.get("block1_logical_terminal"), Some("BANKBEBBAXXX"));
        assert!(parse("{9:X}").is_err());
        assert!(parse_or_empty(Some("{9:X}")).is_empty());
        assert_eq!(normalize_field_name("A/B"), "a_b");
    }
}
