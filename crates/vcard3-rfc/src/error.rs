use thiserror::Error;

use crate::rfc::vcard::core::BuildError;
use crate::rfc::vcard::parse::ParseError;

/// vCard codec errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Build error: {0}")]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    CoreError(#[from] vcard3_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
