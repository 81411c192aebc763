//! vCard 3.0 serialization (RFC 2426).
//!
//! ## Usage
//!
//! ```rust
//! use vcard3_rfc::rfc::vcard::{VCard, VCardProperty, VCardString, build};
//!
//! let card = VCard::builder()
//!     .property(VCardProperty::Fn(VCardString::new("John Doe").unwrap()))
//!     .build()
//!     .unwrap();
//!
//! let output = build::encode_vcard(&card);
//! assert_eq!(output, "BEGIN:VCARD\r\nFN:John Doe\r\nEND:VCARD");
//! ```
//!
//! ## Features
//!
//! - Entries printed in stored order with canonical keywords
//! - Escaping of `,`, `;` and `:` in text values
//! - Folding of inline binary bodies at a configurable width
//! - CRLF line endings at top level, LF inside `AGENT` vCards

mod escape;
mod fold;
mod serializer;

pub use escape::escape_text;
pub use fold::push_folded;
pub use serializer::{Encoder, encode, encode_vcard};
