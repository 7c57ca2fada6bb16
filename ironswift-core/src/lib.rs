/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # IronSwift Core
//!
//! Core types and error definitions for the IronSwift SWIFT MT parser.
//!
//! This crate provides the fundamental building blocks used across all IronSwift crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: `TagRef` and the SWIFT date/time/amount conversions
//! - **Message types**: `Message`, the five block types and the block 2 sum type
//! - **Core types**: `Bic`, `LogicalTerminal`, `MessageType`, header codes
//!
//! ## Zero-Copy Design
//!
//! A decoded [`Message`] borrows every header value and tag from the input
//! text; nothing is copied until the caller renders it.

pub mod error;
pub mod field;
pub mod message;
pub mod types;

pub use error::{BicError, DecodeError, FieldError, Result, SwiftError};
pub use field::{TagRef, swift_amount, swift_date, swift_time};
pub use message::{ApplicationHeader, BasicHeader, InputHeader, Message, OutputHeader, TagBlock};
pub use types::{Bic, DeliveryMonitoring, Direction, LogicalTerminal, MessagePriority, MessageType};
