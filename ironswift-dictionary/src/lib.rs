/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # IronSwift Dictionary
//!
//! SWIFT MT field dictionary for the IronSwift parser.
//!
//! This crate provides:
//! - **Format notation**: Compiler for the SWIFT `6!n3!a15d` style notation
//! - **Schema definitions**: Field layouts, component kinds and labels
//! - **Built-in tables**: Block 3 and block 4 tags of the common MT categories

pub mod fields;
pub mod notation;
pub mod schema;

pub use notation::{Charset, Length, NotationError, Pattern, Token};
pub use schema::{
    ComponentKind, CompiledField, Dictionary, FieldDef, LabelOverride, Render,
    SlotCodes,
};
