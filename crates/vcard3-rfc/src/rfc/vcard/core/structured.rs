//! Structured vCard values (RFC 2426).
//!
//! These types represent composite property values like N, ADR and TEL.

use std::fmt;

use super::error::BuildError;
use super::keyword::{AddrType, EmailType, TelType};
use super::text::VCardString;

/// vCard format version (`VERSION`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    /// vCard 3.0 (RFC 2426).
    pub const V3: Self = Self { major: 3, minor: 0 };
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Individual names (N property, RFC 2426 §3.1.2).
///
/// Each component is a list; an empty component is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndividualNames {
    /// Family names (surnames).
    pub family: Vec<VCardString>,
    /// Given names (first names).
    pub given: Vec<VCardString>,
    /// Additional names (middle names).
    pub additional: Vec<VCardString>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: Vec<VCardString>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: Vec<VCardString>,
}

impl IndividualNames {
    /// Creates a name with one family and one given name.
    #[must_use]
    pub fn simple(family: VCardString, given: VCardString) -> Self {
        Self {
            family: vec![family],
            given: vec![given],
            ..Self::default()
        }
    }

    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
            && self.given.is_empty()
            && self.additional.is_empty()
            && self.prefixes.is_empty()
            && self.suffixes.is_empty()
    }

    /// Formats as a display name (given + family).
    #[must_use]
    pub fn display_name(&self) -> String {
        let join = |list: &[VCardString]| {
            list.iter()
                .map(VCardString::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut parts = Vec::new();
        if !self.given.is_empty() {
            parts.push(join(&self.given));
        }
        if !self.family.is_empty() {
            parts.push(join(&self.family));
        }
        parts.join(" ")
    }
}

/// Delivery address (ADR property, RFC 2426 §3.2.1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub qualifiers: Vec<AddrType>,
    /// Post office box.
    pub po_box: VCardString,
    /// Extended address (e.g., apartment or suite number).
    pub extended: VCardString,
    pub street: VCardString,
    /// Locality (city).
    pub locality: VCardString,
    /// Region (state or province).
    pub region: VCardString,
    pub postal_code: VCardString,
    pub country: VCardString,
}

impl Address {
    /// Returns the seven components in wire order.
    #[must_use]
    pub fn components(&self) -> [&VCardString; 7] {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }

    /// Formats as a single-line address, skipping empty components.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Formatted delivery label (LABEL property).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    pub qualifiers: Vec<AddrType>,
    pub text: VCardString,
}

/// Telephone number (TEL property).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Telephone {
    pub qualifiers: Vec<TelType>,
    pub number: VCardString,
}

impl Telephone {
    #[must_use]
    pub fn is_preferred(&self) -> bool {
        self.qualifiers.contains(&TelType::Pref)
    }
}

/// Electronic mail address (EMAIL property).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email {
    pub qualifiers: Vec<EmailType>,
    pub address: VCardString,
}

impl Email {
    #[must_use]
    pub fn is_preferred(&self) -> bool {
        self.qualifiers.contains(&EmailType::Pref)
    }
}

/// Geographic position (GEO property).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geo {
    latitude: f64,
    longitude: f64,
}

impl Geo {
    /// ## Errors
    /// Returns `BuildError::NonFiniteCoordinate` for NaN or infinite values,
    /// which have no decimal spelling.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, BuildError> {
        for value in [latitude, longitude] {
            if !value.is_finite() {
                return Err(BuildError::NonFiniteCoordinate(value));
            }
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }
}

/// Unique identifier (UID property) with an optional `TYPE=` qualifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uid {
    /// Tokens of the `TYPE=` block; empty when absent.
    pub kind: Vec<VCardString>,
    pub value: VCardString,
}
