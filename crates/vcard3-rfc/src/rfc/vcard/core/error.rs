//! Errors raised while constructing vCard values programmatically.

use thiserror::Error;

use super::tag::Tag;

/// A value or document could not be constructed because it would break an
/// invariant of the vCard model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("text {value:?} contains {found:?}, which cannot appear in a vCard value")]
    InvalidText { value: String, found: char },

    #[error("tag {tag} cannot carry a {property} property")]
    TagMismatch { tag: Tag, property: Tag },

    #[error("invalid extension name {0:?}: expected X- followed by letters, digits or '-'")]
    InvalidExtensionName(String),

    #[error("invalid base64 body: {0}")]
    InvalidBase64(String),

    #[error("a vCard must contain at least one entry")]
    EmptyVCard,

    #[error("UTC offset {hours:02}:{minutes:02} is out of range")]
    OffsetOutOfRange { hours: u8, minutes: u8 },

    #[error("coordinate {0} is not a finite number")]
    NonFiniteCoordinate(f64),
}
