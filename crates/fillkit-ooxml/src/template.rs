//! Template rendering for DOCX documents
//!
//! A DOCX template carries `{{key}}` placeholder markers in its text parts
//! (body, headers, footers). Rendering substitutes the markers whose key is
//! present in a fill row, XML-escaping the substituted text. Markers with
//! no matching key are left in place.

use std::path::Path;

use quick_xml::escape::escape;
use tracing::debug;

use fillkit_data::Row;

use crate::archive::DocxArchive;
use crate::error::Result;

/// A Word template wrapper providing placeholder rendering
#[derive(Debug)]
pub struct DocxTemplate {
    /// The underlying DOCX archive
    archive: DocxArchive,
}

impl DocxTemplate {
    /// Load a template from a file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let archive = DocxArchive::open(path)?;
        Ok(Self { archive })
    }

    /// Load a template from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let cursor = std::io::Cursor::new(bytes);
        let archive = DocxArchive::from_reader(cursor)?;
        Ok(Self { archive })
    }

    /// Get a reference to the underlying archive
    pub fn archive(&self) -> &DocxArchive {
        &self.archive
    }

    /// Substitute `{{key}}` markers across every text part.
    ///
    /// Empty row values render as the empty string. Fails if the archive
    /// has no `word/document.xml`.
    pub fn render(&mut self, row: &Row) -> Result<()> {
        self.archive.document_xml()?;

        for name in self.archive.text_part_names() {
            if let Some(xml) = self.archive.get_string(&name) {
                let (rendered, count) = render_text(&xml, row);
                if count > 0 {
                    debug!("Substituted {} marker(s) in {}", count, name);
                    self.archive.set_string(name, rendered);
                }
            }
        }
        Ok(())
    }

    /// Write the (rendered) document to a file, overwriting
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.archive.write_to_file(path)
    }

    /// Consume the template and return the underlying archive
    pub fn into_archive(self) -> DocxArchive {
        self.archive
    }
}

/// Replace every `{{key}}` whose key is in `row`, returning the rendered
/// text and the number of markers replaced.
fn render_text(xml: &str, row: &Row) -> (String, usize) {
    let mut out = xml.to_string();
    let mut count = 0;
    for (key, value) in row.iter() {
        let marker = format!("{{{{{}}}}}", key);
        if !out.contains(&marker) {
            continue;
        }
        let text = if value.is_empty() {
            String::new()
        } else {
            value.to_string()
        };
        let escaped = escape(text.as_str());
        count += out.matches(&marker).count();
        out = out.replace(&marker, escaped.as_ref());
    }
    (out, count)
}

/// Fill `row` into a docx template file, saving the rendered document to
/// `dest` and overwriting any existing file there.
pub fn fill_docx<P: AsRef<Path>, Q: AsRef<Path>>(row: &Row, template: P, dest: Q) -> Result<()> {
    let mut doc = DocxTemplate::load(template)?;
    doc.render(row)?;
    doc.save(dest)
}
