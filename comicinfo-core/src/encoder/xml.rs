//! XML element tree for ComicInfo documents
//!
//! Uses quick-xml with one tab of indentation per nesting level.

use super::{Field, FieldValue};
use crate::document::Revision;
use crate::types::PageDescriptor;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;

pub(super) const XMLNS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

const ROOT_ELEMENT: &str = "ComicInfo";
const PAGE_ELEMENT: &str = "Page";

/// Write the root element and every non-empty field
pub(super) fn write_document<W: Write>(
    output: W,
    revision: Revision,
    fields: &[Field<'_>],
) -> Result<(), quick_xml::Error> {
    let mut writer = Writer::new_with_indent(output, b'\t', 1);

    let mut root = BytesStart::new(ROOT_ELEMENT);
    for attribute in super::schema_attributes(revision) {
        root.push_attribute(attribute);
    }
    writer.write_event(Event::Start(root))?;

    for field in fields.iter().filter(|field| !field.is_empty()) {
        write_field(&mut writer, field)?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    Ok(())
}

fn write_field<W: Write>(writer: &mut Writer<W>, field: &Field<'_>) -> Result<(), quick_xml::Error> {
    match field.value {
        FieldValue::Text(text) => write_text_element(writer, field.name, text),
        FieldValue::Integer(value) => write_text_element(writer, field.name, &value.to_string()),
        FieldValue::Rating(Some(rating)) => {
            write_text_element(writer, field.name, &rating.to_string())
        }
        FieldValue::Rating(None) => Ok(()),
        FieldValue::LegacyPages(pages) => write_pages(writer, field.name, pages),
        FieldValue::Pages(pages) => write_pages(writer, field.name, pages),
    }
}

/// Replace characters XML 1.0 cannot carry with U+FFFD
fn sanitize(text: &str) -> Cow<'_, str> {
    fn allowed(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
    }

    if text.chars().all(allowed) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if allowed(c) { c } else { char::REPLACEMENT_CHARACTER })
                .collect(),
        )
    }
}

/// Write a simple text element
fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(&sanitize(content))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write the page list, one empty `<Page>` element per descriptor
fn write_pages<'p, W, P, I>(writer: &mut Writer<W>, name: &str, pages: I) -> Result<(), quick_xml::Error>
where
    W: Write,
    P: PageDescriptor + 'p,
    I: IntoIterator<Item = &'p P>,
{
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    for page in pages {
        let mut elem = BytesStart::new(PAGE_ELEMENT);
        for (key, value) in page.attributes() {
            elem.push_attribute((key, &*sanitize(&value)));
        }
        writer.write_event(Event::Empty(elem))?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
