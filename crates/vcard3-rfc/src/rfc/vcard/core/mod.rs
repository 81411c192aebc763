//! Core vCard 3.0 types.
//!
//! A [`Document`] holds [`VCard`]s, a vCard holds [`Entry`]s, and every entry
//! pairs a [`Tag`] with the [`VCardProperty`] variant of that tag. Values that
//! carry invariants are built through smart constructors returning
//! [`BuildError`].

mod data;
mod datetime;
mod error;
mod keyword;
mod property;
mod structured;
mod tag;
mod text;
mod vcard;

pub use data::{AgentData, Base64Body, Binary, Data, TaggedData};
pub use datetime::{Birthday, RevTime, Revision, TimeZone, UtcOffset};
pub use error::BuildError;
pub use keyword::{AddrType, Class, EmailType, Keyword, TelType, params};
pub use property::VCardProperty;
pub use structured::{Address, Email, Geo, IndividualNames, Label, Telephone, Uid, Version};
pub use tag::{Tag, XName};
pub use text::{RawText, VCardString};
pub use vcard::{Document, Entry, VCard, VCardBuilder};
