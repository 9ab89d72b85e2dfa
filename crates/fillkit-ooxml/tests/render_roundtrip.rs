//! On-disk render round-trip for DOCX templates

use std::io::Write;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use fillkit_data::Row;
use fillkit_ooxml::{fill_docx, DocxArchive};

/// Write a minimal DOCX template to disk and return its path.
fn write_template(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("letter.docx");
    let file = std::fs::File::create(&path).expect("Failed to create template");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(br#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#).unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(br#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#).unwrap();

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Dear {{name}}, your number is {{id}}.</w:t></w:r></w:p>
  </w:body>
</w:document>"#,
    )
    .unwrap();

    zip.finish().unwrap();
    path
}

#[test]
fn test_fill_docx_end_to_end() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let template = write_template(dir.path());
    let dest = dir.path().join("letter_filled.docx");

    let mut row = Row::new();
    row.insert("name", "Zhang");
    row.insert("id", 7i64);

    fill_docx(&row, &template, &dest).expect("Fill failed");
    assert!(dest.exists());

    let restored = DocxArchive::open(&dest).expect("Failed to reopen output");
    let body = restored
        .get_string("word/document.xml")
        .expect("No document part");
    assert!(body.contains("Dear Zhang, your number is 7."));

    // The template itself is never mutated
    let original = DocxArchive::open(&template).unwrap();
    let original_body = original.get_string("word/document.xml").unwrap();
    assert!(original_body.contains("{{name}}"));
}

#[test]
fn test_fill_docx_overwrites_existing_output() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let template = write_template(dir.path());
    let dest = dir.path().join("out.docx");

    let mut row = Row::new();
    row.insert("name", "First");
    row.insert("id", 1i64);
    fill_docx(&row, &template, &dest).expect("First fill failed");

    let mut row = Row::new();
    row.insert("name", "Second");
    row.insert("id", 2i64);
    fill_docx(&row, &template, &dest).expect("Second fill failed");

    let restored = DocxArchive::open(&dest).unwrap();
    let body = restored.get_string("word/document.xml").unwrap();
    assert!(body.contains("Dear Second"));
    assert!(!body.contains("Dear First"));
}

#[test]
fn test_fill_docx_missing_template() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let row = Row::new();
    let result = fill_docx(
        &row,
        dir.path().join("nope.docx"),
        dir.path().join("out.docx"),
    );
    assert!(result.is_err());
}
