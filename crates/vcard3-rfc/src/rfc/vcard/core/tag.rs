//! Property tags and their keyword spellings.

use std::fmt;

use super::error::BuildError;

/// Name of an `X-` extension property, preserved exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XName(String);

impl XName {
    /// ## Errors
    /// Returns `BuildError::InvalidExtensionName` unless the name starts with
    /// `X-` or `x-` and continues with at least one letter, digit or `-`.
    pub fn new(name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(BuildError::InvalidExtensionName(name))
        }
    }

    pub(crate) fn is_valid(name: &str) -> bool {
        let Some(rest) = name.strip_prefix("X-").or_else(|| name.strip_prefix("x-")) else {
            return false;
        };
        !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for XName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The keyword identifying which property an entry encodes.
///
/// Every tag accepts exactly the spellings listed by [`Tag::alternatives`];
/// the first one is printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Version,
    N,
    Fn,
    Nickname,
    Photo,
    Bday,
    Adr,
    Label,
    Tel,
    Email,
    Mailer,
    Tz,
    Geo,
    Title,
    Role,
    Logo,
    Agent,
    Org,
    Categories,
    Note,
    Prodid,
    Rev,
    SortString,
    Sound,
    Uid,
    Url,
    Class,
    Key,
    /// An `X-` property.
    Extension(XName),
    /// The `item` group marker. It only appears in entry prefixes and never
    /// names a property.
    Item,
}

impl Tag {
    /// Tags with a fixed keyword, in declaration order.
    pub const KEYWORDS: [Tag; 29] = [
        Tag::Version,
        Tag::N,
        Tag::Fn,
        Tag::Nickname,
        Tag::Photo,
        Tag::Bday,
        Tag::Adr,
        Tag::Label,
        Tag::Tel,
        Tag::Email,
        Tag::Mailer,
        Tag::Tz,
        Tag::Geo,
        Tag::Title,
        Tag::Role,
        Tag::Logo,
        Tag::Agent,
        Tag::Org,
        Tag::Categories,
        Tag::Note,
        Tag::Prodid,
        Tag::Rev,
        Tag::SortString,
        Tag::Sound,
        Tag::Uid,
        Tag::Url,
        Tag::Class,
        Tag::Key,
        Tag::Item,
    ];

    /// Returns the accepted spellings; empty for extensions.
    #[must_use]
    pub fn alternatives(&self) -> &'static [&'static str] {
        match self {
            Self::Version => &["VERSION", "version"],
            Self::N => &["N", "n"],
            Self::Fn => &["FN", "fn"],
            Self::Nickname => &["NICKNAME", "nickname"],
            Self::Photo => &["PHOTO", "photo"],
            Self::Bday => &["BDAY", "bday"],
            Self::Adr => &["ADR", "adr"],
            Self::Label => &["LABEL", "label"],
            Self::Tel => &["TEL", "tel"],
            Self::Email => &["EMAIL", "email"],
            Self::Mailer => &["MAILER", "mailer"],
            Self::Tz => &["TZ", "tz"],
            Self::Geo => &["GEO", "geo"],
            Self::Title => &["TITLE", "title"],
            Self::Role => &["ROLE", "role"],
            Self::Logo => &["LOGO", "logo"],
            Self::Agent => &["AGENT", "agent"],
            Self::Org => &["ORG", "org"],
            Self::Categories => &["CATEGORIES", "categories"],
            Self::Note => &["NOTE", "note"],
            Self::Prodid => &["PRODID", "prodid"],
            Self::Rev => &["REV", "rev"],
            Self::SortString => &["SORT-STRING", "sort-string"],
            Self::Sound => &["SOUND", "sound"],
            Self::Uid => &["UID", "uid"],
            Self::Url => &["URL", "url"],
            Self::Class => &["CLASS", "class"],
            Self::Key => &["KEY", "key"],
            Self::Extension(_) => &[],
            Self::Item => &["item", "ITEM"],
        }
    }

    /// Returns the spelling used when printing.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Extension(name) => name.as_str(),
            other => other.alternatives()[0],
        }
    }

    /// Resolves a keyword token, treating `X-` tokens as extensions.
    #[must_use]
    pub fn from_keyword(token: &str) -> Option<Self> {
        if let Some(tag) = Self::KEYWORDS
            .into_iter()
            .find(|tag| tag.alternatives().contains(&token))
        {
            return Some(tag);
        }

        XName::is_valid(token).then(|| Self::Extension(XName(token.to_string())))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
