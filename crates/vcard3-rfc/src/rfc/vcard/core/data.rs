//! Binary and referenced payloads (PHOTO, LOGO, SOUND, KEY, AGENT).

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::error::BuildError;
use super::text::{RawText, VCardString};
use super::vcard::VCard;

/// Base64 text of an inline binary payload.
///
/// Stored as written (without fold breaks) so re-encoding reproduces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Base64Body(String);

impl Base64Body {
    /// ## Errors
    /// Returns `BuildError::InvalidBase64` if the text is not canonical,
    /// padded base64.
    pub fn new(text: impl Into<String>) -> Result<Self, BuildError> {
        let text = text.into();
        STANDARD
            .decode(&text)
            .map_err(|err| BuildError::InvalidBase64(err.to_string()))?;
        Ok(Self(text))
    }

    /// Encodes raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// Decodes the body back into bytes.
    ///
    /// ## Errors
    /// Never fails for a body built through [`Base64Body::new`] or decoded
    /// from a vCard; the error type is kept from the base64 engine.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Inline binary introduced by `ENCODING=b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binary {
    /// Optional `TYPE=` token such as `JPEG`.
    pub media_type: Option<VCardString>,
    pub body: Base64Body,
}

/// Payload of PHOTO, LOGO, SOUND and KEY.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Data {
    /// `VALUE=uri` reference.
    Uri(RawText),
    /// `ENCODING=b` inline body.
    Binary(Binary),
    /// Legacy `BASE64:` body.
    Base64(Base64Body),
}

impl Data {
    /// Returns the decoded bytes of an inline payload.
    #[must_use]
    pub fn bytes(&self) -> Option<Vec<u8>> {
        match self {
            Self::Uri(_) => None,
            Self::Binary(binary) => binary.body.decode_bytes().ok(),
            Self::Base64(body) => body.decode_bytes().ok(),
        }
    }
}

/// SOUND and KEY payload with an optional registered-format `TYPE=` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedData {
    /// Tokens of the `TYPE=` block; empty when absent.
    pub format: Vec<VCardString>,
    pub data: Data,
}

impl TaggedData {
    #[must_use]
    pub fn untyped(data: Data) -> Self {
        Self {
            format: Vec::new(),
            data,
        }
    }
}

/// AGENT payload: a reference, or a complete embedded vCard.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentData {
    Uri(RawText),
    VCard(Box<VCard>),
}

impl AgentData {
    #[must_use]
    pub fn as_vcard(&self) -> Option<&VCard> {
        match self {
            Self::VCard(card) => Some(card),
            Self::Uri(_) => None,
        }
    }
}
