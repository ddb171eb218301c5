use std::collections::HashSet;

use crate::models::Document;

pub fn check(doc: &Document) {
    let mut ids = HashSet::new();
    for poem in doc.poems() {
        assert!(ids.insert(poem.id()), "duplicate poem id: {}", poem.id());
        assert!(
            !poem.lines.is_empty(),
            "poem without verse emitted: {}",
            poem.id()
        );
        for (i, line) in poem.lines.iter().enumerate() {
            assert_eq!(
                line.line_number as usize,
                i + 1,
                "line numbers not contiguous in {}",
                poem.id()
            );
        }
    }

    if let Some(front) = &doc.front_matter {
        assert!(front.id.is_praefatio(), "front matter is not the praefatio");
    }
    for pair in doc.books.windows(2) {
        assert!(
            pair[0].id < pair[1].id,
            "books out of order: {} before {}",
            pair[0].id,
            pair[1].id
        );
    }
    for book in &doc.books {
        assert!(!book.id.is_praefatio(), "praefatio among numbered books");
        assert!(
            book.poems.windows(2).all(|w| w[0].number <= w[1].number),
            "poems out of order in book {}",
            book.id
        );
    }
    assert_eq!(doc.poem_count(), doc.stats.poems, "poem counter disagrees");
    assert_eq!(doc.line_count(), doc.stats.lines, "line counter disagrees");
}
