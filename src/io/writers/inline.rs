//! Inline-tagged XML: the document text with the selected annotations
//! inserted as tags at their offsets, features as attributes. Nested spans
//! nest; spans that would cross an already-open tag are dropped with a
//! warning, since they cannot be represented inline.
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::warn;

use crate::core::annotation::Annotation;
use crate::error::{Error, Result};

/// True for names usable as XML element or attribute names.
fn is_valid_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Serialize `text` with the given annotations as inline tags. Annotations
/// are ordered by start offset, longer spans first, so containment nests.
pub fn write_inline(text: &str, annotations: &[&Annotation]) -> Result<String> {
    let mut sorted: Vec<&Annotation> = annotations.to_vec();
    sorted.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.end.cmp(&a.end))
            .then(a.id.cmp(&b.id))
    });

    let mut writer = Writer::new(Vec::new());
    let mut stack: Vec<&Annotation> = Vec::new();
    let mut cursor = 0usize;

    for annotation in sorted {
        if !is_valid_xml_name(&annotation.kind) {
            warn!("dropping annotation with non-XML kind `{}`", annotation.kind);
            continue;
        }
        // Close every open span that ends at or before this one starts.
        while let Some(&top) = stack.last() {
            if top.end > annotation.start {
                break;
            }
            writer.write_event(Event::Text(BytesText::new(&text[cursor..top.end])))?;
            cursor = top.end;
            writer.write_event(Event::End(BytesEnd::new(top.kind.as_str())))?;
            stack.pop();
        }
        if let Some(top) = stack.last() {
            if annotation.end > top.end {
                warn!(
                    "dropping `{}` [{}, {}): crosses open `{}` ending at {}",
                    annotation.kind, annotation.start, annotation.end, top.kind, top.end
                );
                continue;
            }
        }
        writer.write_event(Event::Text(BytesText::new(&text[cursor..annotation.start])))?;
        cursor = annotation.start;

        let mut start = BytesStart::new(annotation.kind.as_str());
        for (name, value) in &annotation.features {
            if is_valid_xml_name(name) {
                start.push_attribute((name.as_str(), value.as_str()));
            }
        }
        writer.write_event(Event::Start(start))?;
        stack.push(annotation);
    }

    while let Some(top) = stack.pop() {
        writer.write_event(Event::Text(BytesText::new(&text[cursor..top.end])))?;
        cursor = top.end;
        writer.write_event(Event::End(BytesEnd::new(top.kind.as_str())))?;
    }
    writer.write_event(Event::Text(BytesText::new(&text[cursor..])))?;

    String::from_utf8(writer.into_inner()).map_err(Error::external)
}
