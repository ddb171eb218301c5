use std::path::Path;

use log::info;
use quick_xml::escape::escape;

use crate::models::{Book, Document, Meter, Poem, VerseLine};

use super::{ExportError, write_output};

pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";

const ELEGIAC_MET: &str = "-uu|-uu|-uu|-uu|-uu|-uu || -uu|-uu|- | -uu|-uu|-";
const SAPPHIC_MET: &str = "-u|-u|-uu|-u|-u || -uu|-u";

/// Header metadata and the fixed praefatio headings.
#[derive(Debug, Clone)]
pub struct TeiOptions {
    pub title: String,
    pub author: String,
    pub source: String,
    pub praefatio_heading: String,
    /// Dedication of the praefatio: text and person id.
    pub praefatio_dedication: Option<(String, String)>,
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for TeiOptions {
    fn default() -> Self {
        Self {
            title: "Lucina".to_string(),
            author: "Aurelius Laurentius Albrisius".to_string(),
            source: "Transcription of the Lucina manuscript".to_string(),
            praefatio_heading: "Aurelii Laurentii Albrisii praefatio in Lucinam".to_string(),
            praefatio_dedication: Some((
                "mecoenatem Cichum Simonetam".to_string(),
                "cicco-simonetta".to_string(),
            )),
            indent: 2,
        }
    }
}

/// Renders the document as TEI-XML.
pub fn to_string(doc: &Document, opts: &TeiOptions) -> String {
    let mut out = XmlOut::new(opts.indent);
    out.line(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.open("TEI", &[("xmlns", TEI_NS)]);
    write_header(&mut out, opts);

    out.open("text", &[]);
    if let Some(front) = &doc.front_matter {
        out.open("front", &[]);
        for poem in &front.poems {
            write_praefatio(&mut out, poem, opts);
        }
        out.close("front");
    }

    out.open("body", &[]);
    for book in &doc.books {
        write_book(&mut out, book);
    }
    out.close("body");

    if !doc.colophon.is_empty() {
        out.open("back", &[]);
        out.open("div", &[("type", "colophon")]);
        for line in doc.colophon.lines() {
            out.leaf("p", &[], line);
        }
        out.close("div");
        out.close("back");
    }
    out.close("text");
    out.close("TEI");
    out.finish()
}

/// Writes the TEI rendering of `doc` to `path`.
pub fn write_file(doc: &Document, opts: &TeiOptions, path: &Path) -> Result<(), ExportError> {
    write_output(path, &to_string(doc, opts))?;
    info!("wrote TEI to {}", path.display());
    Ok(())
}

fn write_header(out: &mut XmlOut, opts: &TeiOptions) {
    out.open("teiHeader", &[]);
    out.open("fileDesc", &[]);
    out.open("titleStmt", &[]);
    out.leaf("title", &[], &opts.title);
    out.leaf("author", &[], &opts.author);
    out.close("titleStmt");
    out.open("publicationStmt", &[]);
    out.leaf("p", &[], "Digital edition");
    out.close("publicationStmt");
    out.open("sourceDesc", &[]);
    out.leaf("p", &[], &opts.source);
    out.close("sourceDesc");
    out.close("fileDesc");
    out.close("teiHeader");
}

fn write_praefatio(out: &mut XmlOut, poem: &Poem, opts: &TeiOptions) {
    let id = poem.id();
    out.open("div", &[("type", "praefatio"), ("xml:id", id.as_str())]);
    out.leaf("head", &[("type", "author")], &opts.praefatio_heading);
    if let Some((text, person)) = &opts.praefatio_dedication {
        out.mixed(
            "head",
            &[("type", "dedication")],
            &format!("ad {}", pers_name(person, text)),
        );
    }
    // The author rubric duplicates the heading above.
    for rubric in poem
        .rubrics
        .iter()
        .filter(|r| !r.to_lowercase().contains("aurelii"))
    {
        out.leaf("head", &[("type", "rubric")], rubric);
    }
    write_lines(out, poem);
    out.close("div");
}

fn write_book(out: &mut XmlOut, book: &Book) {
    let n = book.id.number().unwrap_or_default().to_string();
    let id = format!("book{}", book.id);
    out.open("div", &[("type", "book"), ("n", n.as_str()), ("xml:id", id.as_str())]);
    out.leaf(
        "head",
        &[("type", "book")],
        &format!("Liber {}", book.id.latin_ordinal()),
    );
    for poem in &book.poems {
        write_poem(out, poem);
    }
    out.close("div");
}

fn write_poem(out: &mut XmlOut, poem: &Poem) {
    let id = poem.id();
    let n = poem.number.to_string();
    let ana = format!("#{}", poem.genre);
    out.open(
        "div",
        &[
            ("type", "poem"),
            ("n", n.as_str()),
            ("xml:id", id.as_str()),
            ("met", poem.meter.as_str()),
            ("ana", ana.as_str()),
        ],
    );
    out.leaf("head", &[("type", "number")], &poem.label());

    if !poem.dedicatee.is_empty() {
        let prep = poem.preposition.as_str();
        match &poem.person_ref {
            Some(r) => out.mixed(
                "head",
                &[("type", "dedication")],
                &format!("{prep} {}", pers_name(&r.id, &poem.dedicatee)),
            ),
            None => out.leaf(
                "head",
                &[("type", "dedication")],
                &format!("{prep} {}", poem.dedicatee),
            ),
        }
    }
    for rubric in &poem.rubrics {
        out.leaf("head", &[("type", "rubric")], rubric);
    }
    write_lines(out, poem);
    out.close("div");
}

fn pers_name(person_id: &str, text: &str) -> String {
    format!(
        r##"<persName ref="#{}">{}</persName>"##,
        escape(person_id),
        escape(text)
    )
}

/// Groups verse into `lg` elements by meter: elegiac couplets, sapphic
/// stanzas of four, or a single group.
fn write_lines(out: &mut XmlOut, poem: &Poem) {
    let id = poem.line_id_prefix();
    match poem.meter {
        Meter::Elegiac => {
            for couplet in poem.lines.chunks(2) {
                out.open("lg", &[("type", "elegiac"), ("met", ELEGIAC_MET)]);
                for (j, line) in couplet.iter().enumerate() {
                    write_line(out, &id, line, j == 1 && line.indent);
                }
                out.close("lg");
            }
        }
        Meter::Sapphic => {
            for stanza in poem.lines.chunks(4) {
                out.open("lg", &[("type", "sapphic"), ("met", SAPPHIC_MET)]);
                for (j, line) in stanza.iter().enumerate() {
                    write_line(out, &id, line, j == 3);
                }
                out.close("lg");
            }
        }
        meter => {
            out.open("lg", &[("type", meter.as_str())]);
            for line in &poem.lines {
                write_line(out, &id, line, line.indent);
            }
            out.close("lg");
        }
    }
}

fn write_line(out: &mut XmlOut, prefix: &str, line: &VerseLine, indent: bool) {
    let n = line.line_number.to_string();
    let id = format!("{prefix}.{n}");
    let mut attrs = vec![("n", n.as_str()), ("xml:id", id.as_str())];
    if indent {
        attrs.push(("rend", "indent"));
    }
    out.leaf("l", &attrs, &line.text);
}

/// Line-oriented XML writer: one element per line, indented by depth.
struct XmlOut {
    buf: String,
    depth: usize,
    indent: usize,
}

impl XmlOut {
    fn new(indent: usize) -> Self {
        Self {
            buf: String::new(),
            depth: 0,
            indent,
        }
    }

    fn line(&mut self, s: &str) {
        self.buf
            .extend(std::iter::repeat_n(' ', self.depth * self.indent));
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        let tag = format!("<{name}{}>", attributes(attrs));
        self.line(&tag);
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("</{name}>"));
    }

    /// Element with escaped text content.
    fn leaf(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) {
        self.mixed(name, attrs, &escape(text));
    }

    /// Element whose content is already markup.
    fn mixed(&mut self, name: &str, attrs: &[(&str, &str)], inner: &str) {
        let el = format!("<{name}{}>{inner}</{name}>", attributes(attrs));
        self.line(&el);
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn attributes(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {k}="{}""#, escape(*v)))
        .collect()
}
