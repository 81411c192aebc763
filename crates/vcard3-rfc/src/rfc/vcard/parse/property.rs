//! Tag-directed property grammars.
//!
//! The tag is read first; it alone decides which grammar the rest of the
//! record must match.

use super::error::{ParseError, ParseResult};
use super::parser::Parser;
use super::values::{
    base64_body, date, decimal, escaped_list, escaped_string, expect_date_end,
    individual_names, keyword, qualifiers, raw_text, revision, type_tokens, unsigned, utc_offset,
};
use crate::rfc::vcard::core::{
    Address, AgentData, Base64Body, Binary, Birthday, Class, Data, Email, Geo, Keyword, Label, Tag,
    TaggedData, Telephone, TimeZone, Uid, VCardProperty, VCardString, Version, params,
};

impl Parser<'_> {
    /// Parses everything between the tag and the record terminator.
    pub(super) fn property(&mut self, tag: &Tag) -> ParseResult<VCardProperty> {
        let property = match tag {
            Tag::Version => {
                self.value_separator(tag)?;
                VCardProperty::Version(self.version()?)
            }
            Tag::N => {
                self.value_separator(tag)?;
                VCardProperty::N(individual_names(&mut self.cursor)?)
            }
            Tag::Fn => VCardProperty::Fn(self.text(tag)?),
            Tag::Mailer => VCardProperty::Mailer(self.text(tag)?),
            Tag::Title => VCardProperty::Title(self.text(tag)?),
            Tag::Role => VCardProperty::Role(self.text(tag)?),
            Tag::Note => VCardProperty::Note(self.text(tag)?),
            Tag::Prodid => VCardProperty::Prodid(self.text(tag)?),
            Tag::SortString => VCardProperty::SortString(self.text(tag)?),
            Tag::Url => VCardProperty::Url(self.text(tag)?),
            Tag::Nickname => VCardProperty::Nickname(self.list(tag, ',')?),
            Tag::Categories => VCardProperty::Categories(self.list(tag, ',')?),
            Tag::Org => VCardProperty::Org(self.list(tag, ';')?),
            Tag::Photo => VCardProperty::Photo(self.data(tag)?),
            Tag::Logo => VCardProperty::Logo(self.data(tag)?),
            Tag::Bday => VCardProperty::Bday(self.birthday(tag)?),
            Tag::Adr => VCardProperty::Adr(self.address(tag)?),
            Tag::Label => {
                let qualifiers = qualifiers(&mut self.cursor, tag)?;
                VCardProperty::Label(Label {
                    qualifiers,
                    text: self.text(tag)?,
                })
            }
            Tag::Tel => {
                let qualifiers = qualifiers(&mut self.cursor, tag)?;
                VCardProperty::Tel(Telephone {
                    qualifiers,
                    number: self.text(tag)?,
                })
            }
            Tag::Email => {
                let qualifiers = qualifiers(&mut self.cursor, tag)?;
                VCardProperty::Email(Email {
                    qualifiers,
                    address: self.text(tag)?,
                })
            }
            Tag::Tz => VCardProperty::Tz(self.time_zone(tag)?),
            Tag::Geo => VCardProperty::Geo(self.geo(tag)?),
            Tag::Agent => VCardProperty::Agent(self.agent(tag)?),
            Tag::Rev => {
                self.value_separator(tag)?;
                let rev = revision(&mut self.cursor, self.config.rev_time_separator)?;
                expect_date_end(&self.cursor)?;
                VCardProperty::Rev(rev)
            }
            Tag::Sound => VCardProperty::Sound(self.tagged_data(tag)?),
            Tag::Key => VCardProperty::Key(self.tagged_data(tag)?),
            Tag::Uid => {
                let kind = type_tokens(&mut self.cursor, tag)?;
                VCardProperty::Uid(Uid {
                    kind,
                    value: self.text(tag)?,
                })
            }
            Tag::Class => VCardProperty::Class(self.class(tag)?),
            Tag::Extension(name) => VCardProperty::Extension {
                name: name.clone(),
                value: self.text(tag)?,
            },
            Tag::Item => {
                return Err(ParseError::value_format(
                    self.cursor.position(),
                    tag,
                    "not a property",
                ));
            }
        };

        Ok(property)
    }

    /// Requires the `:` between the tag (and its parameters) and the value.
    fn value_separator(&mut self, tag: &Tag) -> ParseResult<()> {
        if self.cursor.eat(':') {
            Ok(())
        } else {
            Err(ParseError::value_format(
                self.cursor.position(),
                tag,
                "expected ':' before the value",
            ))
        }
    }

    /// Requires `;NAME=VALUE` with both spellings taken from `params`.
    fn parameter(&mut self, tag: &Tag, name: &[&str], value: &[&str]) -> ParseResult<()> {
        let at = self.cursor.position();
        if self.cursor.eat(';')
            && keyword(&mut self.cursor, name)
            && self.cursor.eat('=')
            && keyword(&mut self.cursor, value)
        {
            Ok(())
        } else {
            Err(ParseError::value_format(
                at,
                tag,
                format!("expected ;{}={}", name[0], value[0]),
            ))
        }
    }

    fn text(&mut self, tag: &Tag) -> ParseResult<VCardString> {
        self.value_separator(tag)?;
        escaped_string(&mut self.cursor)
    }

    fn list(&mut self, tag: &Tag, separator: char) -> ParseResult<Vec<VCardString>> {
        self.value_separator(tag)?;
        escaped_list(&mut self.cursor, separator)
    }

    fn version(&mut self) -> ParseResult<Version> {
        let major = unsigned(&mut self.cursor)?;
        if !self.cursor.eat('.') {
            return Err(ParseError::numeric_format(
                self.cursor.position(),
                "expected VERSION as <major>.<minor>",
            ));
        }
        let minor = unsigned(&mut self.cursor)?;
        Ok(Version { major, minor })
    }

    fn birthday(&mut self, tag: &Tag) -> ParseResult<Birthday> {
        let value_date = self.cursor.peek() == Some(';');
        if value_date {
            self.parameter(tag, params::VALUE, params::DATE)?;
        }
        self.value_separator(tag)?;
        let date = date(&mut self.cursor)?;
        expect_date_end(&self.cursor)?;
        Ok(Birthday { value_date, date })
    }

    /// Parses the qualifiers and seven components of ADR.
    fn address(&mut self, tag: &Tag) -> ParseResult<Address> {
        let qualifiers = qualifiers(&mut self.cursor, tag)?;
        self.value_separator(tag)?;

        let mut components: [VCardString; 7] = Default::default();
        for (i, component) in components.iter_mut().enumerate() {
            if i > 0 && !self.cursor.eat(';') {
                return Err(ParseError::value_format(
                    self.cursor.position(),
                    tag,
                    format!("expected 7 components, found {i}"),
                ));
            }
            *component = escaped_string(&mut self.cursor)?;
        }

        let [po_box, extended, street, locality, region, postal_code, country] = components;
        Ok(Address {
            qualifiers,
            po_box,
            extended,
            street,
            locality,
            region,
            postal_code,
            country,
        })
    }

    fn time_zone(&mut self, tag: &Tag) -> ParseResult<TimeZone> {
        if self.cursor.peek() == Some(';') {
            self.parameter(tag, params::VALUE, params::TEXT)?;
            self.value_separator(tag)?;
            return Ok(TimeZone::Text(raw_text(&mut self.cursor)));
        }

        self.value_separator(tag)?;
        Ok(TimeZone::Offset(utc_offset(&mut self.cursor)?))
    }

    fn geo(&mut self, tag: &Tag) -> ParseResult<Geo> {
        self.value_separator(tag)?;
        let at = self.cursor.position();
        let latitude = decimal(&mut self.cursor)?;
        if !self.cursor.eat(';') {
            return Err(ParseError::value_format(
                self.cursor.position(),
                tag,
                "expected latitude;longitude",
            ));
        }
        let longitude = decimal(&mut self.cursor)?;
        Geo::new(latitude, longitude).map_err(|err| ParseError::numeric_format(at, err.to_string()))
    }

    fn agent(&mut self, tag: &Tag) -> ParseResult<AgentData> {
        if self.cursor.peek() == Some(';') {
            self.parameter(tag, params::VALUE, params::URI)?;
            self.value_separator(tag)?;
            return Ok(AgentData::Uri(raw_text(&mut self.cursor)));
        }

        self.value_separator(tag)?;
        Ok(AgentData::VCard(Box::new(self.nested_vcard()?)))
    }

    /// Parses one of the three payload forms of PHOTO, LOGO, SOUND and KEY.
    fn data(&mut self, tag: &Tag) -> ParseResult<Data> {
        let at = self.cursor.position();
        if !self.cursor.eat(';') {
            return Err(ParseError::value_format(
                at,
                tag,
                "expected ;VALUE=uri, ;ENCODING=b or ;BASE64",
            ));
        }

        if keyword(&mut self.cursor, params::VALUE) {
            if !(self.cursor.eat('=') && keyword(&mut self.cursor, params::URI)) {
                return Err(ParseError::value_format(at, tag, "expected VALUE=uri"));
            }
            self.value_separator(tag)?;
            return Ok(Data::Uri(raw_text(&mut self.cursor)));
        }

        if keyword(&mut self.cursor, params::ENCODING) {
            if !(self.cursor.eat('=') && keyword(&mut self.cursor, params::BINARY)) {
                return Err(ParseError::value_format(at, tag, "expected ENCODING=b"));
            }
            let media_type = if self.cursor.peek() == Some(';') {
                let type_at = self.cursor.position();
                self.cursor.bump();
                if !(keyword(&mut self.cursor, params::TYPE) && self.cursor.eat('=')) {
                    return Err(ParseError::value_format(type_at, tag, "expected TYPE="));
                }
                Some(escaped_string(&mut self.cursor)?)
            } else {
                None
            };
            self.value_separator(tag)?;
            let body = self.binary_body(tag)?;
            return Ok(Data::Binary(Binary { media_type, body }));
        }

        if keyword(&mut self.cursor, params::BASE64) {
            self.value_separator(tag)?;
            return Ok(Data::Base64(self.binary_body(tag)?));
        }

        Err(ParseError::value_format(
            at,
            tag,
            "expected ;VALUE=uri, ;ENCODING=b or ;BASE64",
        ))
    }

    fn binary_body(&mut self, tag: &Tag) -> ParseResult<Base64Body> {
        let terminator = self.terminator();
        base64_body(&mut self.cursor, terminator, tag)
    }

    fn tagged_data(&mut self, tag: &Tag) -> ParseResult<TaggedData> {
        let format = type_tokens(&mut self.cursor, tag)?;
        let data = self.data(tag)?;
        Ok(TaggedData { format, data })
    }

    fn class(&mut self, tag: &Tag) -> ParseResult<Class> {
        self.value_separator(tag)?;
        let at = self.cursor.position();
        let token = self.cursor.take_while(|c| c.is_ascii_alphabetic());
        Class::from_keyword(token).ok_or_else(|| {
            ParseError::value_format(at, tag, format!("unknown access class {token:?}"))
        })
    }
}
