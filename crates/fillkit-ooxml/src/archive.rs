//! Archive handling for DOCX files
//!
//! DOCX files are ZIP archives containing XML parts and resources.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;

use zip::read::ZipArchive;
use zip::write::ZipWriter;
use zip::CompressionMethod;

use crate::error::{DocxError, Result};

/// Represents an unpacked DOCX document
#[derive(Debug)]
pub struct DocxArchive {
    /// All parts in the archive, keyed by path
    parts: HashMap<String, Vec<u8>>,
}

impl DocxArchive {
    /// Open and unpack a DOCX file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Create from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut parts = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            // Skip directories
            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            parts.insert(name, contents);
        }

        Ok(Self { parts })
    }

    /// Get a part's contents by path
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.parts.get(path).map(|v| v.as_slice())
    }

    /// Get a part's contents as a string
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.parts
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Get the main document content (word/document.xml)
    pub fn document_xml(&self) -> Result<&[u8]> {
        self.get("word/document.xml")
            .ok_or_else(|| DocxError::MissingPart("word/document.xml".to_string()))
    }

    /// Check if a part exists in the archive
    pub fn contains(&self, path: &str) -> bool {
        self.parts.contains_key(path)
    }

    /// List all parts in the archive
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(|s| s.as_str())
    }

    /// List the parts that carry document text: the main body plus any
    /// headers and footers, in a stable order.
    pub fn text_part_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .parts
            .keys()
            .filter(|k| {
                k.as_str() == "word/document.xml"
                    || (k.starts_with("word/header") && k.ends_with(".xml"))
                    || (k.starts_with("word/footer") && k.ends_with(".xml"))
            })
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Set or update a part's contents
    pub fn set(&mut self, path: impl Into<String>, contents: Vec<u8>) {
        self.parts.insert(path.into(), contents);
    }

    /// Set a part's contents from a string
    pub fn set_string(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.parts.insert(path.into(), contents.into().into_bytes());
    }

    /// Write the archive to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)
    }

    /// Write the archive to any writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated);

        // Sort keys for deterministic output
        let mut paths: Vec<_> = self.parts.keys().collect();
        paths.sort();

        for path in paths {
            let contents = &self.parts[path];
            zip.start_file(path, options)?;
            zip.write_all(contents)?;
        }

        zip.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_part_operations() {
        let mut archive = DocxArchive {
            parts: HashMap::new(),
        };

        archive.set_string("test.xml", "<root/>");
        assert!(archive.contains("test.xml"));
        assert_eq!(archive.get_string("test.xml"), Some("<root/>".to_string()));
        assert!(archive.get("missing.xml").is_none());
    }

    #[test]
    fn test_document_xml_missing() {
        let archive = DocxArchive {
            parts: HashMap::new(),
        };

        let result = archive.document_xml();
        assert!(matches!(result, Err(DocxError::MissingPart(_))));
    }

    #[test]
    fn test_text_part_names() {
        let mut archive = DocxArchive {
            parts: HashMap::new(),
        };

        archive.set_string("word/document.xml", "<w:document/>");
        archive.set_string("word/header1.xml", "<w:hdr/>");
        archive.set_string("word/footer1.xml", "<w:ftr/>");
        archive.set_string("word/styles.xml", "<w:styles/>");
        archive.set_string("word/header1.xml.rels", "<Relationships/>");

        let names = archive.text_part_names();
        assert_eq!(
            names,
            vec![
                "word/document.xml".to_string(),
                "word/footer1.xml".to_string(),
                "word/header1.xml".to_string(),
            ]
        );
    }

    #[test]
    fn test_roundtrip_through_writer() {
        let mut archive = DocxArchive {
            parts: HashMap::new(),
        };
        archive.set_string("[Content_Types].xml", r#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#);
        archive.set_string("word/document.xml", r#"<?xml version="1.0"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body/></w:document>"#);

        let mut buffer = Cursor::new(Vec::new());
        archive.write_to(&mut buffer).unwrap();

        buffer.set_position(0);
        let restored = DocxArchive::from_reader(buffer).unwrap();
        assert!(restored.contains("word/document.xml"));
        assert!(restored.document_xml().is_ok());
    }

    #[test]
    fn test_open_invalid_bytes() {
        // Completely invalid bytes (not a ZIP)
        let invalid = Cursor::new(b"This is not a ZIP file".to_vec());
        let result = DocxArchive::from_reader(invalid);
        assert!(result.is_err());
    }
}
