//! WordprocessingML reader.
//!
//! A `.docx` is a ZIP archive; the body lives in `word/document.xml`. Each
//! top-level `w:p` becomes one [`Paragraph`]; paragraphs nested inside it
//! (text boxes, alternate content) are skipped. Run text comes from `w:t`,
//! with `w:tab` mapped to a tab and `w:br` to a space. Style hints are read from run
//! properties (`w:i`, `w:u`) and paragraph properties (`w:ind`).

use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use log::debug;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use zip::{ZipArchive, result::ZipError};

use super::ReadError;
use crate::models::Paragraph;

const DOCUMENT_XML: &str = "word/document.xml";

/// `w:ind` attributes that move the text start to the right.
const LEFT_INDENT_KEYS: [&[u8]; 3] = [b"w:left", b"w:start", b"w:firstLine"];

/// Reads the paragraphs of a `.docx` file.
pub fn read_paragraphs(path: &Path) -> Result<Vec<Paragraph>, ReadError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let xml = read_document_xml(&mut archive)?;
    paragraphs_from_xml(&xml)
}

/// Reads the paragraphs of an in-memory `.docx` archive.
pub fn paragraphs_from_bytes(bytes: &[u8]) -> Result<Vec<Paragraph>, ReadError> {
    let mut archive = ZipArchive::new(std::io::Cursor::new(bytes))?;
    let xml = read_document_xml(&mut archive)?;
    paragraphs_from_xml(&xml)
}

fn read_document_xml<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<u8>, ReadError> {
    let mut entry = archive.by_name(DOCUMENT_XML).map_err(|e| match e {
        ZipError::FileNotFound => ReadError::MissingDocument,
        other => ReadError::Zip(other),
    })?;
    let mut xml = Vec::new();
    entry.read_to_end(&mut xml)?;
    Ok(xml)
}

/// Paragraph being collected between `<w:p>` and `</w:p>`.
#[derive(Debug, Default)]
struct OpenParagraph {
    para: Paragraph,
    in_ppr: bool,
    in_run: bool,
    in_text: bool,
    run_italic: bool,
    run_underline: bool,
    run_has_text: bool,
}

impl OpenParagraph {
    fn push_text(&mut self, text: &str) {
        if self.in_text && !text.is_empty() {
            self.para.text.push_str(text);
            self.run_has_text = true;
        }
    }

    fn end_run(&mut self) {
        if self.run_italic && self.run_has_text {
            self.para.is_italic = true;
        }
        if self.run_underline {
            self.para.is_underline = true;
        }
        self.in_run = false;
        self.run_italic = false;
        self.run_underline = false;
        self.run_has_text = false;
    }

    /// Handles an element that may appear as `<x/>` or `<x>`.
    fn element(&mut self, e: &BytesStart<'_>) -> Result<(), ReadError> {
        match e.name().as_ref() {
            b"w:pPr" => self.in_ppr = true,
            b"w:r" => self.in_run = true,
            b"w:t" if self.in_run => self.in_text = true,
            b"w:tab" if self.in_run && !self.in_ppr => {
                self.para.text.push('\t');
                self.run_has_text = true;
            }
            b"w:br" | b"w:cr" if self.in_run => self.para.text.push(' '),
            b"w:i" if self.in_run && !self.in_ppr => {
                self.run_italic = toggle_is_on(val(e)?.as_deref());
            }
            b"w:u" if self.in_run && !self.in_ppr => {
                self.run_underline = val(e)?.is_none_or(|v| v != "none");
            }
            b"w:ind" if self.in_ppr => {
                if has_left_indent(e)? {
                    self.para.has_left_indent = true;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"w:pPr" => self.in_ppr = false,
            b"w:r" => self.end_run(),
            b"w:t" => self.in_text = false,
            _ => {}
        }
    }
}

/// Parses `word/document.xml` into paragraphs.
pub fn paragraphs_from_xml(xml: &[u8]) -> Result<Vec<Paragraph>, ReadError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut out = Vec::new();
    let mut open: Option<OpenParagraph> = None;
    // Depth of `w:p` elements nested in the open one (text boxes).
    let mut nested = 0usize;

    loop {
        let event = reader.read_event_into(&mut buf)?;
        if nested > 0 {
            match event {
                Event::Start(e) if e.name().as_ref() == b"w:p" => nested += 1,
                Event::End(e) if e.name().as_ref() == b"w:p" => nested -= 1,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
            continue;
        }

        match event {
            Event::Start(e) => {
                if e.name().as_ref() == b"w:p" {
                    if open.is_some() {
                        debug!("skipping paragraph nested in a paragraph");
                        nested = 1;
                    } else {
                        open = Some(OpenParagraph::default());
                    }
                } else if let Some(p) = open.as_mut() {
                    p.element(&e)?;
                }
            }
            Event::Empty(e) => {
                if e.name().as_ref() == b"w:p" {
                    if open.is_none() {
                        out.push(Paragraph::default());
                    }
                } else if let Some(p) = open.as_mut() {
                    p.element(&e)?;
                    // `<w:r/>` and `<w:pPr/>` have no end tag.
                    p.end(e.name().as_ref());
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"w:p" {
                    if let Some(p) = open.take() {
                        out.push(p.para);
                    }
                } else if let Some(p) = open.as_mut() {
                    p.end(e.name().as_ref());
                }
            }
            Event::Text(e) => {
                if let Some(p) = open.as_mut() {
                    p.push_text(std::str::from_utf8(e.as_ref())?);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(p) = open.as_mut() {
                    let entity = std::str::from_utf8(e.as_ref())?;
                    if let Some(resolved) = resolve_entity(entity) {
                        p.push_text(&resolved);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    debug!("read {} paragraphs from {DOCUMENT_XML}", out.len());
    Ok(out)
}

/// The `w:val` attribute, if present.
fn val(e: &BytesStart<'_>) -> Result<Option<String>, ReadError> {
    attr(e, b"w:val")
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, ReadError> {
    for a in e.attributes().flatten() {
        if a.key.as_ref() == key {
            return Ok(Some(std::str::from_utf8(&a.value)?.to_string()));
        }
    }
    Ok(None)
}

/// Toggle properties are on unless `w:val` switches them off.
fn toggle_is_on(val: Option<&str>) -> bool {
    !matches!(val, Some("0" | "false" | "off"))
}

/// Positive `w:left`, `w:start` or `w:firstLine` on `w:ind`.
fn has_left_indent(e: &BytesStart<'_>) -> Result<bool, ReadError> {
    for key in LEFT_INDENT_KEYS {
        if let Some(v) = attr(e, key)?
            && v.parse::<i64>().is_ok_and(|twips| twips > 0)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Resolves predefined entities and character references.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        entity.strip_prefix('#')?.parse::<u32>().ok()?
    };
    char::from_u32(code).map(|c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};
    use zip::{ZipWriter, write::SimpleFileOptions};

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    fn document(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document {NS}><w:body>{body}</w:body></w:document>"#
        )
    }

    fn docx(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    fn parse(body: &str) -> Vec<Paragraph> {
        paragraphs_from_xml(document(body).as_bytes()).unwrap()
    }

    #[test]
    fn concatenates_runs() {
        let paragraphs = parse(
            r#"<w:p><w:r><w:t>I, 1 Ad </w:t></w:r><w:r><w:t>Lucinam</w:t></w:r></w:p>
               <w:p><w:r><w:t>Buch II</w:t></w:r></w:p>"#,
        );
        assert_eq!(
            paragraphs,
            vec![Paragraph::new("I, 1 Ad Lucinam"), Paragraph::new("Buch II")]
        );
    }

    #[test]
    fn keeps_preserved_leading_space() {
        let paragraphs = parse(r#"<w:p><w:r><w:t xml:space="preserve">   et tu</w:t></w:r></w:p>"#);
        assert_eq!(paragraphs[0].text, "   et tu");
    }

    #[test]
    fn tabs_and_breaks() {
        let paragraphs = parse(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr>
               <w:r><w:tab/><w:t>quae</w:t><w:br/><w:t>dedimus</w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraphs[0].text, "\tquae dedimus");
    }

    #[test]
    fn italic_runs_with_text() {
        let paragraphs = parse(
            r#"<w:p><w:r><w:rPr><w:i/></w:rPr><w:t>de amore</w:t></w:r></w:p>
               <w:p><w:r><w:rPr><w:i w:val="0"/></w:rPr><w:t>plain</w:t></w:r></w:p>
               <w:p><w:r><w:rPr><w:i/></w:rPr></w:r><w:r><w:t>empty italic run</w:t></w:r></w:p>
               <w:p><w:pPr><w:rPr><w:i/></w:rPr></w:pPr><w:r><w:t>mark only</w:t></w:r></w:p>"#,
        );
        let flags: Vec<bool> = paragraphs.iter().map(|p| p.is_italic).collect();
        assert_eq!(flags, vec![true, false, false, false]);
    }

    #[test]
    fn underline_unless_none() {
        let paragraphs = parse(
            r#"<w:p><w:r><w:rPr><w:u w:val="single"/></w:rPr><w:t>a</w:t></w:r></w:p>
               <w:p><w:r><w:rPr><w:u w:val="none"/></w:rPr><w:t>b</w:t></w:r></w:p>"#,
        );
        assert!(paragraphs[0].is_underline);
        assert!(!paragraphs[1].is_underline);
    }

    #[test]
    fn left_indent_from_paragraph_properties() {
        let paragraphs = parse(
            r#"<w:p><w:pPr><w:ind w:left="708"/></w:pPr><w:r><w:t>a</w:t></w:r></w:p>
               <w:p><w:pPr><w:ind w:firstLine="360"/></w:pPr><w:r><w:t>b</w:t></w:r></w:p>
               <w:p><w:pPr><w:ind w:left="0" w:hanging="360"/></w:pPr><w:r><w:t>c</w:t></w:r></w:p>
               <w:p><w:r><w:t>d</w:t></w:r></w:p>"#,
        );
        let flags: Vec<bool> = paragraphs.iter().map(|p| p.has_left_indent).collect();
        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn text_box_paragraphs_are_skipped() {
        let paragraphs = parse(
            r#"<w:p><w:r><w:t xml:space="preserve">I, 1 Ad </w:t></w:r>
               <w:r><w:pict><w:txbxContent>
                 <w:p><w:r><w:rPr><w:i/></w:rPr><w:t>box</w:t></w:r></w:p>
                 <w:p><w:pPr><w:ind w:left="708"/></w:pPr><w:r><w:t>more box</w:t></w:r></w:p>
               </w:txbxContent></w:pict></w:r>
               <w:r><w:t>Lucinam</w:t></w:r></w:p>
               <w:p><w:r><w:t>Dulcis amor</w:t></w:r></w:p>"#,
        );
        assert_eq!(
            paragraphs,
            vec![Paragraph::new("I, 1 Ad Lucinam"), Paragraph::new("Dulcis amor")]
        );
    }

    #[test]
    fn alternate_content_inside_paragraph_is_skipped() {
        let paragraphs = parse(
            r#"<w:p><w:r><w:t>Buch I</w:t></w:r><w:r><mc:AlternateContent><mc:Choice>
                 <w:drawing><w:txbxContent><w:p><w:r><w:t>choice</w:t></w:r></w:p></w:txbxContent></w:drawing>
               </mc:Choice><mc:Fallback>
                 <w:pict><w:txbxContent><w:p/><w:p><w:r><w:t>fallback</w:t></w:r></w:p></w:txbxContent></w:pict>
               </mc:Fallback></mc:AlternateContent></w:r></w:p>"#,
        );
        assert_eq!(paragraphs, vec![Paragraph::new("Buch I")]);
    }

    #[test]
    fn resolves_entities() {
        let paragraphs =
            parse(r#"<w:p><w:r><w:t>Amor &amp; Venus &#x2019;&#233; &lt;x&gt;</w:t></w:r></w:p>"#);
        assert_eq!(paragraphs[0].text, "Amor & Venus \u{2019}\u{e9} <x>");
    }

    #[test]
    fn empty_paragraphs_are_kept() {
        let paragraphs = parse(r#"<w:p/><w:p><w:pPr/></w:p>"#);
        assert_eq!(paragraphs, vec![Paragraph::default(), Paragraph::default()]);
    }

    #[test]
    fn reads_archive_bytes() {
        let xml = document(r#"<w:p><w:r><w:t>Praefatio</w:t></w:r></w:p>"#);
        let bytes = docx(&[("[Content_Types].xml", "<Types/>"), (DOCUMENT_XML, &xml)]);

        let paragraphs = paragraphs_from_bytes(&bytes).unwrap();
        assert_eq!(paragraphs, vec![Paragraph::new("Praefatio")]);
    }

    #[test]
    fn archive_without_document_is_an_error() {
        let bytes = docx(&[("word/styles.xml", "<w:styles/>")]);
        assert!(matches!(
            paragraphs_from_bytes(&bytes),
            Err(ReadError::MissingDocument)
        ));
    }

    #[test]
    fn reads_docx_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("lucina.docx");
        let xml = document(r#"<w:p><w:r><w:t>Buch I</w:t></w:r></w:p>"#);
        std::fs::write(&path, docx(&[(DOCUMENT_XML, &xml)])).unwrap();

        let paragraphs = read_paragraphs(&path).unwrap();
        assert_eq!(paragraphs, vec![Paragraph::new("Buch I")]);
    }
}
