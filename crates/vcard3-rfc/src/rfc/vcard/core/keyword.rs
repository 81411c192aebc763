//! Keyword enumerations: qualifiers, access classes and parameter literals.
//!
//! Each literal is accepted only in the spellings it declares (`HOME` or
//! `home`, never `Home`). The first spelling is the one printed.

/// An enumeration whose members are written as fixed keywords.
pub trait Keyword: Sized + Copy + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Spellings accepted on decode; the first is printed.
    fn alternatives(self) -> &'static [&'static str];

    #[must_use]
    fn keyword(self) -> &'static str {
        self.alternatives()[0]
    }

    #[must_use]
    fn from_keyword(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.alternatives().contains(&token))
    }
}

/// Qualifier of an `ADR` or `LABEL` entry (RFC 2426 §3.2.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrType {
    Dom,
    Intl,
    Postal,
    Parcel,
    Home,
    Work,
    Pref,
}

impl Keyword for AddrType {
    const ALL: &'static [Self] = &[
        Self::Dom,
        Self::Intl,
        Self::Postal,
        Self::Parcel,
        Self::Home,
        Self::Work,
        Self::Pref,
    ];

    fn alternatives(self) -> &'static [&'static str] {
        match self {
            Self::Dom => &["DOM", "dom"],
            Self::Intl => &["INTL", "intl"],
            Self::Postal => &["POSTAL", "postal"],
            Self::Parcel => &["PARCEL", "parcel"],
            Self::Home => &["HOME", "home"],
            Self::Work => &["WORK", "work"],
            Self::Pref => &["PREF", "pref"],
        }
    }
}

/// Qualifier of a `TEL` entry (RFC 2426 §3.3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelType {
    Home,
    Msg,
    Work,
    Pref,
    Voice,
    Fax,
    Cell,
    Video,
    Pager,
    Bbs,
    Modem,
    Car,
    Isdn,
    Pcs,
}

impl Keyword for TelType {
    const ALL: &'static [Self] = &[
        Self::Home,
        Self::Msg,
        Self::Work,
        Self::Pref,
        Self::Voice,
        Self::Fax,
        Self::Cell,
        Self::Video,
        Self::Pager,
        Self::Bbs,
        Self::Modem,
        Self::Car,
        Self::Isdn,
        Self::Pcs,
    ];

    fn alternatives(self) -> &'static [&'static str] {
        match self {
            Self::Home => &["HOME", "home"],
            Self::Msg => &["MSG", "msg"],
            Self::Work => &["WORK", "work"],
            Self::Pref => &["PREF", "pref"],
            Self::Voice => &["VOICE", "voice"],
            Self::Fax => &["FAX", "fax"],
            Self::Cell => &["CELL", "cell"],
            Self::Video => &["VIDEO", "video"],
            Self::Pager => &["PAGER", "pager"],
            Self::Bbs => &["BBS", "bbs"],
            Self::Modem => &["MODEM", "modem"],
            Self::Car => &["CAR", "car"],
            Self::Isdn => &["ISDN", "isdn"],
            Self::Pcs => &["PCS", "pcs"],
        }
    }
}

/// Qualifier of an `EMAIL` entry (RFC 2426 §3.3.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailType {
    Internet,
    X400,
    Pref,
}

impl Keyword for EmailType {
    const ALL: &'static [Self] = &[Self::Internet, Self::X400, Self::Pref];

    fn alternatives(self) -> &'static [&'static str] {
        match self {
            Self::Internet => &["INTERNET", "internet"],
            Self::X400 => &["X400", "x400"],
            Self::Pref => &["PREF", "pref"],
        }
    }
}

/// Access classification (`CLASS`, RFC 2426 §3.7.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Public,
    Private,
    Confidential,
}

impl Keyword for Class {
    const ALL: &'static [Self] = &[Self::Public, Self::Private, Self::Confidential];

    fn alternatives(self) -> &'static [&'static str] {
        match self {
            Self::Public => &["PUBLIC", "public"],
            Self::Private => &["PRIVATE", "private"],
            Self::Confidential => &["CONFIDENTIAL", "confidential"],
        }
    }
}

/// Parameter names and values that select a value form.
pub mod params {
    pub const TYPE: &[&str] = &["TYPE", "type"];
    pub const VALUE: &[&str] = &["VALUE", "value"];
    pub const ENCODING: &[&str] = &["ENCODING", "encoding"];

    pub const URI: &[&str] = &["uri", "URI"];
    pub const TEXT: &[&str] = &["text", "TEXT"];
    pub const DATE: &[&str] = &["date", "DATE"];
    /// `ENCODING=b`, the RFC 2426 inline binary encoding.
    pub const BINARY: &[&str] = &["b", "B"];
    /// Bare `BASE64` marker of vCard 2.1 style payloads.
    pub const BASE64: &[&str] = &["BASE64", "base64"];
}
