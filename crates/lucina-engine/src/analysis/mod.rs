//! # Poem Analysis
//!
//! Pure annotations computed once per finished poem.
//!
//! - **`meter`**: metrical form from the indentation layout
//! - **`genre`**: genre from the header's preposition and dedicatee
//! - **`report`**: meter, genre and person distributions of a finished
//!   document
//!
//! All are deterministic functions of their inputs and never fail.

pub mod genre;
pub mod meter;
pub mod report;

pub use genre::detect_genre;
pub use meter::{detect_meter, detect_meter_from_pattern};
pub use report::Report;
