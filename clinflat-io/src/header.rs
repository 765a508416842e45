use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use clinflat_core::errors::{ClinflatError, Result};
use clinflat_core::models::ReleaseHeader;

use crate::consts::RELEASE_ROOT_ELEMENT;

///
/// Read only the release root element's attributes.
///
/// The event stream is scanned up to the first element, which must be the
/// `ClinVarVariationRelease` root; no archive is decoded. Releases are tens of gigabytes
/// uncompressed, so this is what the metadata dump uses.
///
pub fn read_release_header<R: BufRead>(reader: R) -> Result<ReleaseHeader> {
    let mut reader = Reader::from_reader(reader);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) | Event::Empty(element) => {
                if element.local_name().as_ref() != RELEASE_ROOT_ELEMENT.as_bytes() {
                    return Err(ClinflatError::MissingReleaseHeader);
                }
                return header_from_root(&element, &reader);
            }
            Event::Eof => return Err(ClinflatError::MissingReleaseHeader),
            // declaration, comments, doctype, whitespace
            _ => {}
        }
        buf.clear();
    }
}

fn header_from_root<R>(root: &BytesStart, reader: &Reader<R>) -> Result<ReleaseHeader> {
    let mut header = ReleaseHeader::default();

    for attribute in root.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let value = attribute
            .decode_and_unescape_value(reader.decoder())?
            .into_owned();

        if attribute.key.as_ref() == b"xmlns:xsi" {
            header.xsi = Some(value);
            continue;
        }

        match attribute.key.local_name().as_ref() {
            b"noNamespaceSchemaLocation" => header.no_namespace_schema_location = Some(value),
            b"ReleaseDate" => header.release_date = Some(value),
            _ => {}
        }
    }

    Ok(header)
}
