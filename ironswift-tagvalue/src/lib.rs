/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # IronSwift Tag-Value
//!
//! Zero-copy SWIFT MT block and tag decoding for the IronSwift parser.
//!
//! This crate turns raw `{1:...}{2:...}{3:...}{4:...}{5:...}` text into a
//! borrowed [`Message`] and renders individual tag values for display.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: Header fields and tag values reference the input
//! - **SIMD-accelerated**: Uses `memchr` for brace and line scanning
//! - **Grammar as data**: Tag layouts come from the dictionary's format notation

pub mod decoder;
pub mod format;
pub mod lexer;
pub mod render;

pub use decoder::{Decoder, parse_application_header, parse_basic_header};
pub use format::{Components, match_components, match_restricted};
pub use ironswift_core::message::Message;
pub use lexer::{brace_tags, text_tags};
pub use render::FieldDecoder;
