//! Documents, vCards and entries.

use std::num::NonZeroU32;

use super::data::AgentData;
use super::error::BuildError;
use super::property::VCardProperty;
use super::structured::{IndividualNames, Version};
use super::tag::Tag;
use super::text::VCardString;

/// One property record of a vCard.
///
/// The tag and the property variant always agree: [`Entry::new`] rejects a
/// mismatch and the fields cannot be modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    prefix: Option<NonZeroU32>,
    tag: Tag,
    property: VCardProperty,
}

impl Entry {
    /// Creates an entry from an explicit tag.
    ///
    /// ## Errors
    /// Returns `BuildError::TagMismatch` if `property` belongs to another tag.
    pub fn new(
        prefix: Option<NonZeroU32>,
        tag: Tag,
        property: VCardProperty,
    ) -> Result<Self, BuildError> {
        let expected = property.tag();
        if expected != tag {
            return Err(BuildError::TagMismatch {
                tag,
                property: expected,
            });
        }
        Ok(Self {
            prefix,
            tag,
            property,
        })
    }

    /// Creates an ungrouped entry whose tag is taken from the property.
    #[must_use]
    pub fn from_property(property: VCardProperty) -> Self {
        Self {
            prefix: None,
            tag: property.tag(),
            property,
        }
    }

    /// Creates an entry printed with an `item<N>.` group prefix.
    #[must_use]
    pub fn grouped(group: NonZeroU32, property: VCardProperty) -> Self {
        Self {
            prefix: Some(group),
            tag: property.tag(),
            property,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> Option<NonZeroU32> {
        self.prefix
    }

    #[must_use]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    #[must_use]
    pub fn property(&self) -> &VCardProperty {
        &self.property
    }

    #[must_use]
    pub fn into_property(self) -> VCardProperty {
        self.property
    }
}

/// A complete vCard: a non-empty sequence of entries.
///
/// RFC 2426 does not fix the order of entries, so lookups search the
/// sequence instead of indexing into it.
#[derive(Debug, Clone, PartialEq)]
pub struct VCard {
    entries: Vec<Entry>,
}

impl VCard {
    /// ## Errors
    /// Returns `BuildError::EmptyVCard` if `entries` is empty.
    pub fn new(entries: Vec<Entry>) -> Result<Self, BuildError> {
        if entries.is_empty() {
            return Err(BuildError::EmptyVCard);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn builder() -> VCardBuilder {
        VCardBuilder::default()
    }

    /// All entries in order of appearance.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Returns the first entry with the given tag.
    #[must_use]
    pub fn find(&self, tag: &Tag) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.tag() == tag)
    }

    /// Returns every entry with the given tag, in order.
    pub fn find_all<'a>(&'a self, tag: &'a Tag) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |entry| entry.tag() == tag)
    }

    /// Returns the declared version, wherever the VERSION entry appears.
    #[must_use]
    pub fn version(&self) -> Option<Version> {
        match self.find(&Tag::Version)?.property() {
            VCardProperty::Version(version) => Some(*version),
            _ => None,
        }
    }

    /// Returns the formatted name (FN).
    #[must_use]
    pub fn formatted_name(&self) -> Option<&VCardString> {
        match self.find(&Tag::Fn)?.property() {
            VCardProperty::Fn(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the individual names (N).
    #[must_use]
    pub fn names(&self) -> Option<&IndividualNames> {
        match self.find(&Tag::N)?.property() {
            VCardProperty::N(names) => Some(names),
            _ => None,
        }
    }

    /// Returns the first embedded agent vCard.
    #[must_use]
    pub fn agent(&self) -> Option<&VCard> {
        self.find_all(&Tag::Agent)
            .find_map(|entry| match entry.property() {
                VCardProperty::Agent(agent) => agent.as_vcard(),
                _ => None,
            })
    }
}

/// Builder for [`VCard`].
///
/// ## Example
///
/// ```rust
/// use vcard3_rfc::rfc::vcard::{VCard, VCardProperty, VCardString, Version};
///
/// let card = VCard::builder()
///     .property(VCardProperty::Version(Version::V3))
///     .property(VCardProperty::Fn(VCardString::new("John Doe").unwrap()))
///     .build()
///     .unwrap();
/// assert_eq!(card.entries().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VCardBuilder {
    entries: Vec<Entry>,
}

impl VCardBuilder {
    /// Appends an ungrouped property.
    #[must_use]
    pub fn property(mut self, property: VCardProperty) -> Self {
        self.entries.push(Entry::from_property(property));
        self
    }

    /// Appends a property under an `item<N>.` group.
    #[must_use]
    pub fn grouped(mut self, group: NonZeroU32, property: VCardProperty) -> Self {
        self.entries.push(Entry::grouped(group, property));
        self
    }

    /// Appends an already constructed entry.
    #[must_use]
    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Appends an AGENT entry embedding `card`.
    #[must_use]
    pub fn agent(self, card: VCard) -> Self {
        self.property(VCardProperty::Agent(AgentData::VCard(Box::new(card))))
    }

    /// ## Errors
    /// Returns `BuildError::EmptyVCard` if no entry was added.
    pub fn build(self) -> Result<VCard, BuildError> {
        VCard::new(self.entries)
    }
}

/// An ordered sequence of vCards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    cards: Vec<VCard>,
}

impl Document {
    #[must_use]
    pub fn new(cards: Vec<VCard>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[VCard] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<VCard> {
        self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VCard> {
        self.cards.iter()
    }
}

impl FromIterator<VCard> for Document {
    fn from_iter<I: IntoIterator<Item = VCard>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a VCard;
    type IntoIter = std::slice::Iter<'a, VCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
