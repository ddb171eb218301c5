//! # Paragraph Classification
//!
//! Two-phase document building over the paragraph stream.
//!
//! ## Phases
//!
//! 1. **Classification** (`classify`): each paragraph is classified on its
//!    own into a `ParagraphClass` (blank, book header, poem header, rubric,
//!    colophon, verse)
//!
//! 2. **Construction** (`builder`): a `DocumentBuilder` tracks the current
//!    book, the open poem, its verse buffer and a pending rubric, and emits
//!    finished `Poem`s as headers close them
//!
//! ## Modules
//!
//! - **`types`**: `ParagraphClass`
//! - **`kinds`**: one marker struct per paragraph kind, owning its patterns
//! - **`classify`**: `ParagraphClassifier`
//! - **`builder`**: `DocumentBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Rules are tried in fixed priority order; the first match wins
//! - Book headers are never poem content
//! - A poem with no verse is dropped and counted, never emitted

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BuildOutput, DocumentBuilder};
pub use classify::ParagraphClassifier;
pub use kinds::{BookMarker, PoemHeader};
pub use types::ParagraphClass;
