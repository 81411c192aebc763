//! vCard 3.0 parsing (RFC 2426).
//!
//! ## Usage
//!
//! ```rust
//! use vcard3_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL;TYPE=INTERNET:john@example.com\r\n\
//! END:VCARD";
//!
//! let doc = parse::decode(input).unwrap();
//! assert_eq!(doc.cards()[0].formatted_name().unwrap(), "John Doe");
//! ```
//!
//! ## Features
//!
//! - Case-sensitive keyword alternatives (`TEL`/`tel`, `HOME`/`home`)
//! - `item<N>.` entry groups
//! - Backtracking over `;TYPE=` qualifier blocks
//! - Folded base64 bodies
//! - `AGENT` vCards nested up to a configurable depth
//! - Lazy streaming of large documents through [`CardIter`]

mod cursor;
mod error;
mod parser;
mod property;
mod values;

#[cfg(test)]
mod error_tests;

pub use error::{ParseError, ParseErrorKind, ParseResult, Position};
pub use parser::{CardIter, Decoder, decode};
