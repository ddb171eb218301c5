use serde::{Deserialize, Serialize};

/// One paragraph as delivered by a document reader.
///
/// Carries the raw text (leading whitespace preserved) and the few style
/// hints the classifier looks at. Readers produce these; nothing downstream
/// depends on where they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub is_italic: bool,
    #[serde(default)]
    pub is_underline: bool,
    #[serde(default)]
    pub has_left_indent: bool,
}

impl Paragraph {
    /// Plain paragraph with no style hints.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn italic(mut self) -> Self {
        self.is_italic = true;
        self
    }

    pub fn underlined(mut self) -> Self {
        self.is_underline = true;
        self
    }

    pub fn indented(mut self) -> Self {
        self.has_left_indent = true;
        self
    }

    /// Text with surrounding whitespace removed, as used for classification.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Whether the raw text starts with a space or tab.
    pub fn starts_with_whitespace(&self) -> bool {
        self.text.starts_with([' ', '\t', '\u{a0}'])
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
