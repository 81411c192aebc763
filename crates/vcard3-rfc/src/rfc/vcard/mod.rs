//! vCard implementation (RFC 2426).
//!
//! This module provides types, decoding, and encoding for vCard 3.0 text.
//!
//! ## Overview
//!
//! A document is a sequence of vCards. Each vCard is a `BEGIN:VCARD` line,
//! one or more property entries and an `END:VCARD` line. The decoder builds a
//! typed tree that the encoder prints back in canonical form, so decoding
//! what the encoder wrote yields the same tree.
//!
//! ## Usage
//!
//! ### Decoding
//!
//! ```rust
//! use vcard3_rfc::rfc::vcard::{VCardProperty, decode};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! TEL;TYPE=WORK,VOICE:+1-555-0100\r\n\
//! END:VCARD";
//!
//! let doc = decode(input).unwrap();
//! let card = &doc.cards()[0];
//! assert_eq!(card.formatted_name().unwrap(), "John Doe");
//! assert!(matches!(card.entries()[2].property(), VCardProperty::Tel(_)));
//! ```
//!
//! ### Encoding
//!
//! ```rust
//! use vcard3_rfc::rfc::vcard::{Document, VCard, VCardProperty, VCardString, encode};
//!
//! let card = VCard::builder()
//!     .property(VCardProperty::Fn(VCardString::new("Jane Doe").unwrap()))
//!     .property(VCardProperty::Note(VCardString::new("Met at ACME, Inc.").unwrap()))
//!     .build()
//!     .unwrap();
//!
//! let output = encode(&Document::new(vec![card]));
//! assert!(output.contains("NOTE:Met at ACME\\, Inc."));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`Document`, `VCard`, `Entry`, `VCardProperty`, etc.)
//! - [`parse`] - Decoding functions and error types
//! - [`build`] - Encoding functions

pub mod build;
pub mod core;
pub mod parse;


// Re-export commonly used types
pub use build::{Encoder, encode, encode_vcard};
pub use core::{
    Address, BuildError, Document, Entry, IndividualNames, Tag, VCard, VCardBuilder,
    VCardProperty, VCardString, Version,
};
pub use parse::{CardIter, Decoder, ParseError, ParseErrorKind, ParseResult, decode};
