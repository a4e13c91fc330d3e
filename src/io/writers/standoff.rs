//! Full-document standoff XML: the text plus every annotation set, default
//! set first, named sets after it. `read_xml` parses the same format back
//! into a document, so a full serialization round-trips.
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::core::annotation::{Annotation, AnnotationSet, Features};
use crate::core::document::Document;
use crate::error::{Error, Result};

/// Serialize a document with all of its annotation sets. `encoding_name` is
/// only recorded in the XML declaration; the returned string is encoded by
/// the caller when written out.
pub fn write_xml(document: &Document, encoding_name: &str) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some(encoding_name), None)))?;

    let mut root = BytesStart::new("AnnotatedDocument");
    root.push_attribute(("name", document.name()));
    writer.write_event(Event::Start(root))?;

    writer.write_event(Event::Start(BytesStart::new("Text")))?;
    writer.write_event(Event::Text(BytesText::new(document.text())))?;
    writer.write_event(Event::End(BytesEnd::new("Text")))?;

    write_set(&mut writer, None, document.annotations())?;
    for (name, set) in document.named_sets() {
        write_set(&mut writer, Some(name), set)?;
    }

    writer.write_event(Event::End(BytesEnd::new("AnnotatedDocument")))?;
    String::from_utf8(writer.into_inner()).map_err(Error::external)
}

fn write_set(
    writer: &mut Writer<Vec<u8>>,
    name: Option<&str>,
    set: &AnnotationSet,
) -> Result<()> {
    let mut start = BytesStart::new("AnnotationSet");
    if let Some(name) = name {
        start.push_attribute(("Name", name));
    }
    writer.write_event(Event::Start(start))?;

    for annotation in set {
        let mut element = BytesStart::new("Annotation");
        element.push_attribute(("Id", annotation.id.to_string().as_str()));
        element.push_attribute(("Type", annotation.kind.as_str()));
        element.push_attribute(("Start", annotation.start.to_string().as_str()));
        element.push_attribute(("End", annotation.end.to_string().as_str()));

        if annotation.features.is_empty() {
            writer.write_event(Event::Empty(element))?;
        } else {
            writer.write_event(Event::Start(element))?;
            for (name, value) in &annotation.features {
                let mut feature = BytesStart::new("Feature");
                feature.push_attribute(("Name", name.as_str()));
                feature.push_attribute(("Value", value.as_str()));
                writer.write_event(Event::Empty(feature))?;
            }
            writer.write_event(Event::End(BytesEnd::new("Annotation")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("AnnotationSet")))?;
    Ok(())
}

fn attr_value(attr: &Attribute) -> Result<String> {
    Ok(attr.unescape_value()?.into_owned())
}

fn parse_offset(value: &str, what: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| Error::Processing(format!("bad {what} offset `{value}` in XML")))
}

/// Parse a document back out of its standoff XML form.
pub fn read_xml(raw: &str) -> Result<Document> {
    let mut reader = Reader::from_str(raw);
    let mut name = String::new();
    let mut text = String::new();
    let mut in_text = false;
    let mut current_set: Option<String> = None;
    let mut pending: Option<Annotation> = None;
    // Annotations are applied once the text is known.
    let mut parsed: Vec<(Option<String>, Annotation)> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"AnnotatedDocument" => {
                    for attr in e.attributes() {
                        let attr = attr.map_err(quick_xml::Error::from)?;
                        if attr.key.as_ref() == b"name" {
                            name = attr_value(&attr)?;
                        }
                    }
                }
                b"Text" => in_text = true,
                b"AnnotationSet" => {
                    current_set = None;
                    for attr in e.attributes() {
                        let attr = attr.map_err(quick_xml::Error::from)?;
                        if attr.key.as_ref() == b"Name" {
                            current_set = Some(attr_value(&attr)?);
                        }
                    }
                }
                b"Annotation" => pending = Some(parse_annotation(e)?),
                _ => {}
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                // Featureless annotations are written self-closing.
                b"Annotation" => parsed.push((current_set.clone(), parse_annotation(e)?)),
                b"Feature" => {
                    let (mut fname, mut fvalue) = (None, None);
                    for attr in e.attributes() {
                        let attr = attr.map_err(quick_xml::Error::from)?;
                        match attr.key.as_ref() {
                            b"Name" => fname = Some(attr_value(&attr)?),
                            b"Value" => fvalue = Some(attr_value(&attr)?),
                            _ => {}
                        }
                    }
                    if let (Some(n), Some(v), Some(ann)) = (fname, fvalue, pending.as_mut()) {
                        ann.features.insert(n, v);
                    }
                }
                _ => {}
            },
            Event::Text(e) => {
                if in_text {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"Text" => in_text = false,
                b"Annotation" => {
                    if let Some(ann) = pending.take() {
                        parsed.push((current_set.clone(), ann));
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    let mut document = Document::new(name, text);
    for (set, annotation) in parsed {
        document.insert_annotation(set.as_deref(), annotation);
    }
    Ok(document)
}

fn parse_annotation(e: &BytesStart<'_>) -> Result<Annotation> {
    let (mut id, mut kind, mut start, mut end) = (None, None, None, None);
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attr_value(&attr)?;
        match attr.key.as_ref() {
            b"Id" => {
                id = Some(value.parse::<u32>().map_err(|_| {
                    Error::Processing(format!("bad annotation id `{value}` in XML"))
                })?)
            }
            b"Type" => kind = Some(value),
            b"Start" => start = Some(parse_offset(&value, "start")?),
            b"End" => end = Some(parse_offset(&value, "end")?),
            _ => {}
        }
    }
    match (id, kind, start, end) {
        (Some(id), Some(kind), Some(start), Some(end)) => Ok(Annotation {
            id,
            kind,
            start,
            end,
            features: Features::new(),
        }),
        _ => Err(Error::Processing(
            "annotation element missing Id/Type/Start/End".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        let mut doc = Document::new("doc1.txt", "Jo ran.\nFast & <free>.");
        let mut features = Features::new();
        features.insert("kind".to_string(), "word".to_string());
        doc.annotate(None, "Token", 0..2, features);
        doc.annotate(None, "Sentence", 0..7, Features::new());
        let mut markup = Features::new();
        markup.insert("tag".to_string(), "p".to_string());
        doc.annotate(Some("markup"), "p", 0..22, markup);
        doc
    }

    #[test]
    fn writes_every_annotation_set() {
        let doc = sample_document();
        let xml = write_xml(&doc, "UTF-8").unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<AnnotatedDocument name=\"doc1.txt\">"));
        assert!(xml.contains("<Annotation Id=\"1\" Type=\"Sentence\" Start=\"0\" End=\"7\"/>"));
        assert!(xml.contains("<AnnotationSet Name=\"markup\">"));
        // Text content is escaped.
        assert!(xml.contains("Fast &amp; &lt;free&gt;."));
    }

    #[test]
    fn round_trips_text_and_annotations() {
        let doc = sample_document();
        let xml = write_xml(&doc, "UTF-8").unwrap();
        let restored = read_xml(&xml).unwrap();

        assert_eq!(restored.name(), doc.name());
        assert_eq!(restored.text(), doc.text());
        assert_eq!(restored.annotations(), doc.annotations());
        assert_eq!(
            restored.named_annotations("markup"),
            doc.named_annotations("markup")
        );
    }

    #[test]
    fn malformed_annotation_is_an_error() {
        let raw = r#"<AnnotatedDocument name="d"><Text>x</Text>
            <AnnotationSet><Annotation Id="0" Type="Token" Start="zero" End="1"/></AnnotationSet>
            </AnnotatedDocument>"#;
        assert!(read_xml(raw).is_err());
    }
}
