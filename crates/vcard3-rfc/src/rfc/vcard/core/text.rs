//! Text primitives shared by most property values.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use super::error::BuildError;

/// Text written as an escaped vCard string.
///
/// `,`, `;` and `:` are escaped with a backslash on output. The grammar has no
/// escape for a literal backslash or a line break, so those are rejected at
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VCardString(String);

impl VCardString {
    /// Creates a string, rejecting characters the escaped grammar cannot carry.
    ///
    /// ## Errors
    /// Returns `BuildError::InvalidText` if the value contains a backslash,
    /// CR or LF.
    pub fn new(value: impl Into<String>) -> Result<Self, BuildError> {
        let value = value.into();
        if let Some(found) = value.chars().find(|c| matches!(c, '\\' | '\r' | '\n')) {
            return Err(BuildError::InvalidText { value, found });
        }
        Ok(Self(value))
    }

    /// Wraps text produced by the escaped-string decoder.
    pub(crate) fn from_decoded(value: String) -> Self {
        debug_assert!(!value.contains(['\\', '\r', '\n']));
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for VCardString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VCardString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VCardString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VCardString {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for VCardString {
    type Error = BuildError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for VCardString {
    type Error = BuildError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<str> for VCardString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VCardString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Unescaped text running to the end of its record.
///
/// Used for URI references and the text form of `TZ`. Only line breaks are
/// rejected, since they would end the record early.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawText(String);

impl RawText {
    /// ## Errors
    /// Returns `BuildError::InvalidText` if the value contains CR or LF.
    pub fn new(value: impl Into<String>) -> Result<Self, BuildError> {
        let value = value.into();
        if let Some(found) = value.chars().find(|c| matches!(c, '\r' | '\n')) {
            return Err(BuildError::InvalidText { value, found });
        }
        Ok(Self(value))
    }

    pub(crate) fn from_decoded(value: &str) -> Self {
        debug_assert!(!value.contains(['\r', '\n']));
        Self(value.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for RawText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RawText {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<&str> for RawText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
