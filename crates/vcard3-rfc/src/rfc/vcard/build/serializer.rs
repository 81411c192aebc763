//! vCard serialization.

use std::fmt::Write as _;

use chrono::Timelike;
use vcard3_core::config::CodecConfig;
use vcard3_core::constants::{BEGIN_LINE, CRLF, END_LINE, LF};

use super::escape::escape_text;
use super::fold::push_folded;
use crate::rfc::vcard::core::{
    AgentData, Base64Body, Data, Document, Entry, IndividualNames, Keyword, Revision, Tag,
    TimeZone, VCard, VCardProperty, VCardString, params,
};

/// Encodes documents with a fixed [`CodecConfig`].
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: CodecConfig,
}

impl Encoder {
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encodes a document.
    ///
    /// ## Summary
    /// Prints each vCard in order, separated by a single LF. Entries keep
    /// their stored order and end in CRLF.
    #[must_use]
    #[tracing::instrument(skip_all, fields(cards = document.len()))]
    pub fn encode(&self, document: &Document) -> String {
        let mut output = String::new();

        for (i, card) in document.iter().enumerate() {
            if i > 0 {
                output.push_str(LF);
            }
            self.write_vcard(card, 0, &mut output);
        }

        tracing::debug!(output_len = output.len(), "Encoded vCard document");

        output
    }

    /// Encodes a single top-level vCard.
    #[must_use]
    pub fn encode_vcard(&self, card: &VCard) -> String {
        let mut output = String::new();
        self.write_vcard(card, 0, &mut output);
        output
    }

    fn write_vcard(&self, card: &VCard, depth: usize, output: &mut String) {
        let terminator = terminator(depth);

        output.push_str(BEGIN_LINE);
        output.push_str(terminator);

        for entry in card.entries() {
            self.write_entry(entry, depth, output);
            output.push_str(terminator);
        }

        output.push_str(END_LINE);
    }

    fn write_entry(&self, entry: &Entry, depth: usize, output: &mut String) {
        debug_assert_eq!(
            entry.tag(),
            &entry.property().tag(),
            "entry tag does not match its property"
        );

        let line_start = output.len();

        if let Some(group) = entry.prefix() {
            write!(output, "{}{group}.", Tag::Item.keyword()).ok();
        }
        output.push_str(entry.tag().keyword());

        let line = Line {
            start: line_start,
            depth,
        };
        self.write_property(entry.property(), line, output);

        tracing::trace!(tag = %entry.tag(), "Encoded entry");
    }

    fn write_property(&self, property: &VCardProperty, line: Line, output: &mut String) {
        match property {
            VCardProperty::Version(version) => {
                write!(output, ":{version}").ok();
            }
            VCardProperty::N(names) => {
                output.push(':');
                write_names(names, output);
            }
            VCardProperty::Fn(text)
            | VCardProperty::Mailer(text)
            | VCardProperty::Title(text)
            | VCardProperty::Role(text)
            | VCardProperty::Note(text)
            | VCardProperty::Prodid(text)
            | VCardProperty::SortString(text)
            | VCardProperty::Url(text)
            | VCardProperty::Extension { value: text, .. } => {
                output.push(':');
                output.push_str(&escape_text(text));
            }
            VCardProperty::Nickname(list) | VCardProperty::Categories(list) => {
                output.push(':');
                write_list(list, ',', output);
            }
            VCardProperty::Org(list) => {
                output.push(':');
                write_list(list, ';', output);
            }
            VCardProperty::Photo(data) | VCardProperty::Logo(data) => {
                self.write_data(data, line, output);
            }
            VCardProperty::Bday(bday) => {
                if bday.value_date {
                    write!(output, ";{}={}", params::VALUE[0], params::DATE[0]).ok();
                }
                write!(output, ":{}", bday.date.format("%Y-%m-%d")).ok();
            }
            VCardProperty::Adr(adr) => {
                write_qualifiers(&adr.qualifiers, output);
                output.push(':');
                write_list(&adr.components(), ';', output);
            }
            VCardProperty::Label(label) => {
                write_qualifiers(&label.qualifiers, output);
                output.push(':');
                output.push_str(&escape_text(&label.text));
            }
            VCardProperty::Tel(tel) => {
                write_qualifiers(&tel.qualifiers, output);
                output.push(':');
                output.push_str(&escape_text(&tel.number));
            }
            VCardProperty::Email(email) => {
                write_qualifiers(&email.qualifiers, output);
                output.push(':');
                output.push_str(&escape_text(&email.address));
            }
            VCardProperty::Tz(TimeZone::Text(text)) => {
                write!(output, ";{}={}:{text}", params::VALUE[0], params::TEXT[0]).ok();
            }
            VCardProperty::Tz(TimeZone::Offset(offset)) => {
                write!(output, ":{offset}").ok();
            }
            VCardProperty::Geo(geo) => {
                write!(output, ":{};{}", geo.latitude(), geo.longitude()).ok();
            }
            VCardProperty::Agent(AgentData::Uri(uri)) => {
                write!(output, ";{}={}:{uri}", params::VALUE[0], params::URI[0]).ok();
            }
            VCardProperty::Agent(AgentData::VCard(card)) => {
                output.push(':');
                self.write_vcard(card, line.depth + 1, output);
            }
            VCardProperty::Rev(rev) => {
                output.push(':');
                self.write_revision(rev, output);
            }
            VCardProperty::Sound(tagged) | VCardProperty::Key(tagged) => {
                write_type_block(&tagged.format, output);
                self.write_data(&tagged.data, line, output);
            }
            VCardProperty::Uid(uid) => {
                write_type_block(&uid.kind, output);
                output.push(':');
                output.push_str(&escape_text(&uid.value));
            }
            VCardProperty::Class(class) => {
                output.push(':');
                output.push_str(class.keyword());
            }
        }
    }

    fn write_data(&self, data: &Data, line: Line, output: &mut String) {
        match data {
            Data::Uri(uri) => {
                write!(output, ";{}={}:{uri}", params::VALUE[0], params::URI[0]).ok();
            }
            Data::Binary(binary) => {
                write!(output, ";{}={}", params::ENCODING[0], params::BINARY[0]).ok();
                if let Some(media_type) = &binary.media_type {
                    write!(output, ";{}={}", params::TYPE[0], escape_text(media_type)).ok();
                }
                output.push(':');
                self.write_body(&binary.body, line, output);
            }
            Data::Base64(body) => {
                write!(output, ";{}:", params::BASE64[0]).ok();
                self.write_body(body, line, output);
            }
        }
    }

    fn write_body(&self, body: &Base64Body, line: Line, output: &mut String) {
        let line_len = output.len() - line.start;
        push_folded(
            output,
            body.as_str(),
            line_len,
            self.config.fold_width,
            terminator(line.depth),
        );
    }

    fn write_revision(&self, rev: &Revision, output: &mut String) {
        write!(output, "{}", rev.date.format("%Y-%m-%d")).ok();

        if let Some(time) = &rev.time {
            let sep = self.config.rev_time_separator.as_char();
            write!(
                output,
                "T{:02}{sep}{:02}{sep}{:02}",
                time.time.hour(),
                time.time.minute(),
                time.time.second()
            )
            .ok();
            if time.utc {
                output.push('Z');
            }
        }
    }
}

/// Where the entry being written starts in the output.
#[derive(Debug, Clone, Copy)]
struct Line {
    start: usize,
    depth: usize,
}

fn terminator(depth: usize) -> &'static str {
    if depth == 0 { CRLF } else { LF }
}

fn write_list<S: AsRef<str>>(items: &[S], separator: char, output: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            output.push(separator);
        }
        output.push_str(&escape_text(item.as_ref()));
    }
}

fn write_names(names: &IndividualNames, output: &mut String) {
    let components = [
        &names.family,
        &names.given,
        &names.additional,
        &names.prefixes,
        &names.suffixes,
    ];
    for (i, component) in components.into_iter().enumerate() {
        if i > 0 {
            output.push(';');
        }
        write_list(component, ',', output);
    }
}

/// Writes all qualifiers as a single `;TYPE=` block.
fn write_qualifiers<K: Keyword>(qualifiers: &[K], output: &mut String) {
    if qualifiers.is_empty() {
        return;
    }

    write!(output, ";{}=", params::TYPE[0]).ok();
    for (i, qualifier) in qualifiers.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(qualifier.keyword());
    }
}

fn write_type_block(tokens: &[VCardString], output: &mut String) {
    if tokens.is_empty() {
        return;
    }

    write!(output, ";{}=", params::TYPE[0]).ok();
    write_list(tokens, ',', output);
}

/// Encodes a document with the default configuration.
#[must_use]
pub fn encode(document: &Document) -> String {
    Encoder::default().encode(document)
}

/// Encodes a single vCard with the default configuration.
#[must_use]
pub fn encode_vcard(card: &VCard) -> String {
    Encoder::default().encode_vcard(card)
}
