//! vCard property values, one variant per tag.

use super::data::{AgentData, Data, TaggedData};
use super::datetime::{Birthday, Revision, TimeZone};
use super::keyword::Class;
use super::structured::{Address, Email, Geo, IndividualNames, Label, Telephone, Uid, Version};
use super::tag::{Tag, XName};
use super::text::VCardString;

/// The payload of an entry. Its shape is determined by the entry's [`Tag`].
#[derive(Debug, Clone, PartialEq)]
pub enum VCardProperty {
    Version(Version),
    N(IndividualNames),
    Fn(VCardString),
    Nickname(Vec<VCardString>),
    Photo(Data),
    Bday(Birthday),
    Adr(Address),
    Label(Label),
    Tel(Telephone),
    Email(Email),
    Mailer(VCardString),
    Tz(TimeZone),
    Geo(Geo),
    Title(VCardString),
    Role(VCardString),
    Logo(Data),
    Agent(AgentData),
    Org(Vec<VCardString>),
    Categories(Vec<VCardString>),
    Note(VCardString),
    Prodid(VCardString),
    Rev(Revision),
    SortString(VCardString),
    Sound(TaggedData),
    Uid(Uid),
    Url(VCardString),
    Class(Class),
    Key(TaggedData),
    Extension { name: XName, value: VCardString },
}

impl VCardProperty {
    /// Returns the tag this property must be stored under.
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Self::Version(_) => Tag::Version,
            Self::N(_) => Tag::N,
            Self::Fn(_) => Tag::Fn,
            Self::Nickname(_) => Tag::Nickname,
            Self::Photo(_) => Tag::Photo,
            Self::Bday(_) => Tag::Bday,
            Self::Adr(_) => Tag::Adr,
            Self::Label(_) => Tag::Label,
            Self::Tel(_) => Tag::Tel,
            Self::Email(_) => Tag::Email,
            Self::Mailer(_) => Tag::Mailer,
            Self::Tz(_) => Tag::Tz,
            Self::Geo(_) => Tag::Geo,
            Self::Title(_) => Tag::Title,
            Self::Role(_) => Tag::Role,
            Self::Logo(_) => Tag::Logo,
            Self::Agent(_) => Tag::Agent,
            Self::Org(_) => Tag::Org,
            Self::Categories(_) => Tag::Categories,
            Self::Note(_) => Tag::Note,
            Self::Prodid(_) => Tag::Prodid,
            Self::Rev(_) => Tag::Rev,
            Self::SortString(_) => Tag::SortString,
            Self::Sound(_) => Tag::Sound,
            Self::Uid(_) => Tag::Uid,
            Self::Url(_) => Tag::Url,
            Self::Class(_) => Tag::Class,
            Self::Key(_) => Tag::Key,
            Self::Extension { name, .. } => Tag::Extension(name.clone()),
        }
    }

    /// Returns the value as text if the property is a single string.
    #[must_use]
    pub fn as_text(&self) -> Option<&VCardString> {
        match self {
            Self::Fn(s)
            | Self::Mailer(s)
            | Self::Title(s)
            | Self::Role(s)
            | Self::Note(s)
            | Self::Prodid(s)
            | Self::SortString(s)
            | Self::Url(s)
            | Self::Extension { value: s, .. } => Some(s),
            _ => None,
        }
    }

    /// Returns the list value of NICKNAME, ORG or CATEGORIES.
    #[must_use]
    pub fn as_list(&self) -> Option<&[VCardString]> {
        match self {
            Self::Nickname(list) | Self::Org(list) | Self::Categories(list) => Some(list),
            _ => None,
        }
    }

    /// Returns whether the payload carries inline base64 that may be folded.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        let data = match self {
            Self::Photo(data) | Self::Logo(data) => data,
            Self::Sound(tagged) | Self::Key(tagged) => &tagged.data,
            _ => return false,
        };
        matches!(data, Data::Binary(_) | Data::Base64(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_tags() {
        let fn_prop = VCardProperty::Fn(VCardString::new("John Doe").unwrap());
        assert_eq!(fn_prop.tag(), Tag::Fn);
        assert_eq!(fn_prop.as_text().map(VCardString::as_str), Some("John Doe"));

        let ext = VCardProperty::Extension {
            name: XName::new("X-SKYPE").unwrap(),
            value: VCardString::new("johndoe").unwrap(),
        };
        assert_eq!(ext.tag().keyword(), "X-SKYPE");
    }

    #[test]
    fn list_accessor() {
        let org = VCardProperty::Org(vec![
            VCardString::new("Acme").unwrap(),
            VCardString::new("Engineering").unwrap(),
        ]);
        assert_eq!(org.as_list().map(<[_]>::len), Some(2));
        assert!(org.as_text().is_none());
        assert!(!org.is_binary());
    }
}
