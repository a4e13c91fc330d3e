//! End-to-end batch processing through the library API: saved pipeline in,
//! annotated XML next to each input file out.
use std::fs;
use std::path::{Path, PathBuf};

use annobatch::io::encoding::{decode, resolve_encoding};
use annobatch::io::writers::standoff;
use annobatch::{RunParams, api};
use tempfile::TempDir;

const GAPP: &str = r#"{
    "name": "annie-lite",
    "steps": [
        {"kind": "tokenizer", "space_tokens": false},
        {"kind": "sentence-splitter"},
        {"kind": "regex-tagger", "annotation": "Date", "pattern": "\\d{4}-\\d{2}-\\d{2}"},
        {"kind": "gazetteer", "entries": {"York": {"minorType": "city"}}}
    ]
}"#;

fn write_gapp(dir: &Path) -> PathBuf {
    let path = dir.join("annie-lite.gapp");
    fs::write(&path, GAPP).unwrap();
    path
}

fn write_input(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn full_run_writes_standoff_xml_next_to_each_input() {
    let dir = TempDir::new().unwrap();
    let gapp = write_gapp(dir.path());
    let input = write_input(
        dir.path(),
        "letter.txt",
        "Meeting in York on 2024-03-05. Bring notes.",
    );

    let report = api::process_files(&gapp, &[input.clone()], &RunParams::default(), false).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 0);

    let output = dir.path().join("letter.txt.out.xml");
    assert_eq!(report.outputs, vec![output.clone()]);

    let xml = fs::read_to_string(&output).unwrap();
    let doc = standoff::read_xml(&xml).unwrap();
    assert_eq!(doc.name(), "letter.txt");
    assert_eq!(doc.text(), "Meeting in York on 2024-03-05. Bring notes.");
    assert!(doc.annotations().by_kind("Token").count() > 0);
    assert_eq!(doc.annotations().by_kind("Sentence").count(), 2);

    let date = doc.annotations().by_kind("Date").next().unwrap();
    assert_eq!(&doc.text()[date.start..date.end], "2024-03-05");
    let lookup = doc.annotations().by_kind("Lookup").next().unwrap();
    assert_eq!(lookup.features["minorType"], "city");
}

#[test]
fn filtered_run_writes_inline_xml_for_requested_kinds_only() {
    let dir = TempDir::new().unwrap();
    let gapp = write_gapp(dir.path());
    let input = write_input(dir.path(), "doc.txt", "York on 2024-03-05.");

    let params = RunParams::with_kinds(["Date", "Lookup"]);
    api::process_files(&gapp, &[input], &params, false).unwrap();

    let xml = fs::read_to_string(dir.path().join("doc.txt.out.xml")).unwrap();
    assert!(xml.contains("<Date"));
    assert!(xml.contains("</Date>"));
    assert!(xml.contains("minorType=\"city\""));
    assert!(!xml.contains("<Token"));
    assert!(!xml.contains("<Sentence"));
}

#[test]
fn filter_with_absent_kind_yields_untagged_text() {
    let dir = TempDir::new().unwrap();
    let gapp = write_gapp(dir.path());
    let input = write_input(dir.path(), "doc.txt", "Nothing to tag here");

    let params = RunParams::with_kinds(["Person"]);
    api::process_files(&gapp, &[input], &params, false).unwrap();

    let xml = fs::read_to_string(dir.path().join("doc.txt.out.xml")).unwrap();
    assert_eq!(xml, "Nothing to tag here");
}

#[test]
fn zero_input_files_is_a_no_op_run() {
    let dir = TempDir::new().unwrap();
    let gapp = write_gapp(dir.path());

    let report = api::process_files(&gapp, &[], &RunParams::default(), false).unwrap();
    assert_eq!(report.processed, 0);
    assert!(report.outputs.is_empty());
}

#[test]
fn first_failure_aborts_before_remaining_files() {
    let dir = TempDir::new().unwrap();
    let gapp = write_gapp(dir.path());
    let missing = dir.path().join("missing.txt");
    let good = write_input(dir.path(), "good.txt", "Fine.");

    let result = api::process_files(
        &gapp,
        &[missing, good],
        &RunParams::default(),
        false,
    );
    assert!(result.is_err());
    assert!(!dir.path().join("good.txt.out.xml").exists());
}

#[test]
fn continue_on_error_counts_failures_and_proceeds() {
    let dir = TempDir::new().unwrap();
    let gapp = write_gapp(dir.path());
    let missing = dir.path().join("missing.txt");
    let good = write_input(dir.path(), "good.txt", "Fine.");

    let report =
        api::process_files(&gapp, &[missing, good], &RunParams::default(), true).unwrap();
    assert_eq!(report.errors, 1);
    assert_eq!(report.processed, 1);
    assert!(dir.path().join("good.txt.out.xml").exists());
}

#[test]
fn missing_pipeline_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let gapp = dir.path().join("nowhere.gapp");
    let err = api::process_files(&gapp, &[], &RunParams::default(), false).unwrap_err();
    assert!(matches!(err, annobatch::Error::Pipeline(_)));
}

#[test]
fn output_naming_appends_the_suffix_in_place() {
    let out = api::output_path_for(Path::new("/a/b/doc1.txt")).unwrap();
    assert_eq!(out, PathBuf::from("/a/b/doc1.txt.out.xml"));
    let bare = api::output_path_for(Path::new("doc1.txt")).unwrap();
    assert_eq!(bare, PathBuf::from("doc1.txt.out.xml"));
}

#[test]
fn configured_encoding_is_used_for_input_and_output() {
    let dir = TempDir::new().unwrap();
    let gapp = write_gapp(dir.path());
    let input = dir.path().join("latin.txt");
    fs::write(&input, [0x63u8, 0x61, 0x66, 0xE9]).unwrap(); // "café" in latin1

    let params = RunParams {
        encoding: Some("latin1".to_string()),
        annotation_kinds: None,
    };
    api::process_files(&gapp, &[input], &params, false).unwrap();

    let bytes = fs::read(dir.path().join("latin.txt.out.xml")).unwrap();
    let encoding = resolve_encoding(Some("latin1")).unwrap();
    let xml = decode(&bytes, encoding);
    assert!(xml.contains("café"));
    assert!(xml.contains("encoding=\"windows-1252\""));
}

#[test]
fn unsupported_encoding_label_is_fatal() {
    let dir = TempDir::new().unwrap();
    let gapp = write_gapp(dir.path());
    let input = write_input(dir.path(), "doc.txt", "text");

    let params = RunParams {
        encoding: Some("no-such-charset".to_string()),
        annotation_kinds: None,
    };
    let err = api::process_files(&gapp, &[input], &params, false).unwrap_err();
    assert!(matches!(err, annobatch::Error::UnsupportedEncoding { .. }));
}
