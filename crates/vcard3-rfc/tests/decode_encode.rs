//! Integration tests for the vCard codec
//!
//! These tests drive the public decode and encode entry points the way a
//! caller would, including configuration and error conversion.

use vcard3_core::config::{CodecConfig, TimeSeparator};
use vcard3_rfc::error::{RfcError, RfcResult};
use vcard3_rfc::rfc::vcard::core::{
    AddrType, AgentData, Revision, TelType, Telephone, TimeZone, UtcOffset,
};
use vcard3_rfc::rfc::vcard::{
    Decoder, Document, Encoder, ParseErrorKind, Tag, VCard, VCardProperty, VCardString,
    Version, decode, encode, encode_vcard,
};

fn text(value: &str) -> VCardString {
    VCardString::new(value).expect("valid vCard string")
}

fn decode_checked(input: &str) -> RfcResult<Document> {
    Ok(decode(input)?)
}

#[test_log::test]
fn test_minimal_record() {
    let doc = decode("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:John Doe\r\nEND:VCARD").unwrap();

    assert_eq!(doc.len(), 1);
    let entries = doc.cards()[0].entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].tag(), &Tag::Version);
    assert_eq!(entries[0].property(), &VCardProperty::Version(Version::V3));
    assert_eq!(entries[1].property(), &VCardProperty::Fn(text("John Doe")));
}

#[test]
fn test_escaping_survives_round_trip() {
    let original = "Accounting, Inc.; Division: North";
    let card = VCard::builder()
        .property(VCardProperty::Note(text(original)))
        .build()
        .unwrap();

    let output = encode_vcard(&card);
    assert!(output.contains("NOTE:Accounting\\, Inc.\\; Division\\: North\r\n"));

    let doc = decode(&output).unwrap();
    match doc.cards()[0].entries()[0].property() {
        VCardProperty::Note(note) => assert_eq!(note, original),
        other => panic!("expected NOTE, got {other:?}"),
    }
}

#[test]
fn test_address_components() {
    let input = "BEGIN:VCARD\r\n\
ADR;TYPE=HOME,POSTAL:;;123 Main St;Springfield;IL;62704;USA\r\n\
END:VCARD";
    let doc = decode(input).unwrap();

    let VCardProperty::Adr(address) = doc.cards()[0].entries()[0].property() else {
        panic!("expected ADR");
    };
    assert_eq!(address.qualifiers, vec![AddrType::Home, AddrType::Postal]);
    assert!(address.po_box.is_empty());
    assert!(address.extended.is_empty());
    assert_eq!(address.street, "123 Main St");
    assert_eq!(address.locality, "Springfield");
    assert_eq!(address.region, "IL");
    assert_eq!(address.postal_code, "62704");
    assert_eq!(address.country, "USA");

    assert_eq!(encode(&doc), input);
}

#[test_log::test]
fn test_nested_agent_resumes_outer_card() {
    let input = "BEGIN:VCARD\r\n\
FN:Jane Roe\r\n\
AGENT:BEGIN:VCARD\n\
FN:Susan Thomas\n\
END:VCARD\r\n\
TITLE:Manager\r\n\
END:VCARD";
    let doc = decode(input).unwrap();
    let card = &doc.cards()[0];

    assert_eq!(card.entries().len(), 3);
    let VCardProperty::Agent(AgentData::VCard(agent)) = card.entries()[1].property() else {
        panic!("expected embedded agent vCard");
    };
    assert_eq!(agent.formatted_name().unwrap(), "Susan Thomas");
    assert_eq!(card.entries()[2].property(), &VCardProperty::Title(text("Manager")));
}

#[test]
fn test_unknown_tag_is_rejected() {
    let err = decode("BEGIN:VCARD\r\nFN:A\r\nFOO:bar\r\nEND:VCARD").unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::UnknownTag);
    assert_eq!(err.position().line, 3);
    assert_eq!(err.position().column, 1);
}

#[test]
fn test_extension_tag_is_kept() {
    let doc = decode("BEGIN:VCARD\r\nX-SKYPE:jdoe\r\nEND:VCARD").unwrap();
    let entry = &doc.cards()[0].entries()[0];

    assert_eq!(entry.tag().keyword(), "X-SKYPE");
    assert_eq!(entry.property().as_text().unwrap(), "jdoe");
}

#[test]
fn test_qualifier_blocks_merge_in_order() {
    let doc = decode("BEGIN:VCARD\r\nTEL;TYPE=home;TYPE=FAX,pref:+1-555-0100\r\nEND:VCARD")
        .unwrap();

    assert_eq!(
        doc.cards()[0].entries()[0].property(),
        &VCardProperty::Tel(Telephone {
            qualifiers: vec![TelType::Home, TelType::Fax, TelType::Pref],
            number: text("+1-555-0100"),
        })
    );
}

#[test]
fn test_recursion_limit_from_config() {
    let input = "BEGIN:VCARD\r\n\
AGENT:BEGIN:VCARD\n\
AGENT:BEGIN:VCARD\n\
FN:Deep\n\
END:VCARD\n\
END:VCARD\r\n\
END:VCARD";

    assert!(Decoder::default().decode(input).is_ok());

    let shallow = Decoder::new(CodecConfig {
        max_nesting_depth: 1,
        ..CodecConfig::default()
    });
    let err = shallow.decode(input).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::RecursionLimit);
}

#[test]
fn test_dash_revision_separator() {
    let config = CodecConfig {
        rev_time_separator: TimeSeparator::Dash,
        ..CodecConfig::default()
    };
    let input = "BEGIN:VCARD\r\nREV:1995-10-31T22-27-10Z\r\nEND:VCARD";

    let doc = Decoder::new(config.clone()).decode(input).unwrap();
    assert_eq!(
        doc.cards()[0].entries()[0].property(),
        &VCardProperty::Rev(Revision::utc(
            chrono::NaiveDate::from_ymd_opt(1995, 10, 31).unwrap(),
            chrono::NaiveTime::from_hms_opt(22, 27, 10).unwrap(),
        ))
    );
    assert_eq!(Encoder::new(config).encode(&doc), input);

    let err = decode(input).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::DateFormat);
}

#[test]
fn test_binary_body_is_folded() {
    let bytes = vec![0xAB_u8; 120];
    let card = VCard::builder()
        .property(VCardProperty::Fn(text("Photo")))
        .property(VCardProperty::Photo(
            vcard3_rfc::rfc::vcard::core::Data::Base64(
                vcard3_rfc::rfc::vcard::core::Base64Body::from_bytes(&bytes),
            ),
        ))
        .build()
        .unwrap();

    let output = encode_vcard(&card);
    for line in output.split("\r\n") {
        assert!(line.len() <= 75, "line too long: {line}");
    }

    let doc = decode(&output).unwrap();
    let VCardProperty::Photo(data) = doc.cards()[0].entries()[1].property() else {
        panic!("expected PHOTO");
    };
    assert_eq!(data.bytes().unwrap(), bytes);
}

#[test]
fn test_time_zone_offset() {
    let doc = decode("BEGIN:VCARD\r\nTZ:-0500\r\nEND:VCARD").unwrap();

    assert_eq!(
        doc.cards()[0].entries()[0].property(),
        &VCardProperty::Tz(TimeZone::Offset(UtcOffset::new(true, 5, 0).unwrap()))
    );
    assert_eq!(encode(&doc), "BEGIN:VCARD\r\nTZ:-05:00\r\nEND:VCARD");
}

#[test]
fn test_streaming_stops_at_first_error() {
    let input = "BEGIN:VCARD\r\nFN:One\r\nEND:VCARD\nBEGIN:VCARD\r\nFN One\r\nEND:VCARD";
    let decoder = Decoder::default();
    let mut cards = decoder.cards(input);

    let first = cards.next().unwrap().unwrap();
    assert_eq!(first.formatted_name().unwrap(), "One");
    assert!(cards.next().unwrap().is_err());
    assert!(cards.next().is_none());
}

#[test]
fn test_errors_convert_to_rfc_error() {
    let err = decode_checked("BEGIN:VCARD\r\nEND:VCARD").unwrap_err();
    assert!(matches!(err, RfcError::ParseError(_)));

    let err: RfcError = VCardString::new("line\nbreak").unwrap_err().into();
    assert!(matches!(err, RfcError::BuildError(_)));
}

#[test]
fn test_errors_compose_with_anyhow() -> anyhow::Result<()> {
    let doc = decode_checked("BEGIN:VCARD\r\nFN:Ok\r\nEND:VCARD")?;
    assert_eq!(doc.len(), 1);

    let failure: anyhow::Result<Document> =
        decode("BEGIN:VCARD\r\nFN:Ok\r\n").map_err(anyhow::Error::from);
    assert!(failure.is_err());
    Ok(())
}
