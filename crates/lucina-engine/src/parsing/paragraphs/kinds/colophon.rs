/// Closing formula of the manuscript (place/date and dedication to the gods).
pub struct Colophon;

impl Colophon {
    pub const MARKERS: &'static [&'static str] = &["Actum Papiae", "CDiis Immor"];

    pub fn matches(text: &str) -> bool {
        Self::MARKERS.iter().any(|m| text.contains(m))
    }
}
