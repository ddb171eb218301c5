//! Tests for the document builder over small paragraph streams.
//!
//! Each scenario is a list of paragraph texts; styled paragraphs are built
//! explicitly where a test needs them.


use pretty_assertions::assert_eq;

use crate::{
    models::{BookId, Document, Genre, Meter, Paragraph, PersonRef, Preposition},
    parsing::{parse_paragraphs, parse_paragraphs_with, snapshot},
    persons::PersonResolver,
};

fn build(texts: &[&str]) -> Document {
    let paragraphs: Vec<Paragraph> = texts.iter().map(|t| Paragraph::new(*t)).collect();
    build_from(&paragraphs)
}

fn build_from(paragraphs: &[Paragraph]) -> Document {
    let doc = parse_paragraphs(paragraphs);
    snapshot::invariants(&doc);
    doc
}

#[test]
fn praefatio_and_first_poem() {
    let doc = build(&[
        "Praefatio",
        "line one text",
        "line two text",
        "Buch I",
        "I, 1 Ad Lucinam",
        "verse a",
        "verse b",
    ]);

    insta::assert_snapshot!(snapshot::normalize(&doc).to_string(), @r"
    book praefatio
      poem praefatio [hendecasyllabic, epistle]
        1: line one text
        2: line two text
    book I
      poem I, 1 Ad Lucinam [hendecasyllabic, erotic] -> lucina
        1: verse a
        2: verse b
    ");

    let poem = doc.poem(BookId::Numbered(1), 1).expect("poem I, 1");
    assert_eq!(poem.dedicatee, "Lucinam");
    assert_eq!(poem.person_ref, Some(PersonRef::table("lucina")));
    assert_eq!(poem.meter, Meter::Hendecasyllabic);
    assert_eq!(doc.front_matter.as_ref().map(|b| b.line_count()), Some(2));
    assert_eq!(doc.stats.paragraphs, 7);
    assert_eq!(doc.stats.book_headers, 2);
    assert_eq!(doc.stats.poem_headers, 1);
    assert_eq!(doc.stats.poems, 2);
    assert_eq!(doc.stats.lines, 4);
}

#[test]
fn header_followed_by_header_drops_first_poem() {
    let doc = build(&[
        "Buch I",
        "I, 1 Ad Somnum",
        "I, 2 Ad Venerem",
        "Alma Venus",
    ]);

    assert_eq!(doc.stats.dropped_poems, 1);
    assert!(doc.poem(BookId::Numbered(1), 1).is_none());
    let poem = doc.poem(BookId::Numbered(1), 2).expect("poem I, 2");
    assert_eq!(poem.genre, Genre::Prayer);
    assert_eq!(poem.person_ref, Some(PersonRef::table("venus")));
}

#[test]
fn rubric_before_header_becomes_first_rubric() {
    let doc = build(&[
        "Buch II",
        "AURELII LAURENTII ALBRISII LIBER SECUNDUS",
        "II, 1 Ad Cichum Simonetam",
        "Carmina nostra tibi",
        "  quae dedimus",
    ]);

    insta::assert_snapshot!(snapshot::normalize(&doc).to_string(), @r"
    book II
      poem II, 1 Ad Cichum Simonetam [elegiac, epistle] -> cicco-simonetta
        rubric AURELII LAURENTII ALBRISII LIBER SECUNDUS
        1: Carmina nostra tibi
        2> quae dedimus
    ");
    assert_eq!(doc.stats.rubrics, 1);
}

#[test]
fn pending_rubric_survives_dropped_poem() {
    let doc = build(&[
        "Buch I",
        "lucina mea",
        "I, 1 Ad Somnum",
        "I, 2 Ad Venerem",
        "Alma Venus",
    ]);

    assert_eq!(doc.stats.dropped_poems, 1);
    let poem = doc.poem(BookId::Numbered(1), 2).expect("poem I, 2");
    assert_eq!(poem.rubrics, vec!["lucina mea".to_string()]);
}

#[test]
fn second_pending_rubric_supersedes_first() {
    let doc = build(&[
        "Buch I",
        "lucina prima",
        "lucina secunda",
        "I, 1 Ad Lucinam",
        "Dulcis amor",
    ]);

    assert_eq!(doc.stats.superseded_rubrics, 1);
    assert_eq!(doc.stats.rubrics, 2);
    let poem = doc.poem(BookId::Numbered(1), 1).expect("poem I, 1");
    assert_eq!(poem.rubrics, vec!["lucina secunda".to_string()]);
}

#[test]
fn pending_rubric_goes_before_attached_and_inline_rubrics() {
    let doc = build_from(&[
        Paragraph::new("Buch III"),
        Paragraph::new("de libro tertio").italic(),
        Paragraph::new("III, 1 Ad Cichum Simonetam Aurelii Laurentii Albrisii liber tertius incipit"),
        Paragraph::new("ad eundem").italic(),
        Paragraph::new("Quae tibi nunc"),
    ]);

    let poem = doc.poem(BookId::Numbered(3), 1).expect("poem III, 1");
    assert_eq!(poem.dedicatee, "Cichum Simonetam");
    assert_eq!(
        poem.rubrics,
        vec![
            "de libro tertio".to_string(),
            "Aurelii Laurentii Albrisii liber tertius incipit".to_string(),
            "ad eundem".to_string(),
        ]
    );
    assert_eq!(doc.stats.rubrics, 3);
}

#[test]
fn verse_without_open_poem_is_unclassified() {
    let doc = build(&["Tu mihi sola places", "Buch I", "Nondum carmen"]);

    assert_eq!(doc.stats.unclassified, 2);
    assert_eq!(doc.poem_count(), 0);
}

#[test]
fn book_header_closes_open_poem() {
    let doc = build(&[
        "Buch I",
        "I, 1 Ad Lucinam",
        "verse a",
        "Buch II",
        "stray line",
    ]);

    assert_eq!(doc.stats.unclassified, 1);
    assert_eq!(doc.poem_count(), 1);
    assert_eq!(doc.book(BookId::Numbered(1)).map(|b| b.line_count()), Some(1));
    assert!(doc.book(BookId::Numbered(2)).is_none());
}

#[test]
fn edition_title_keeps_current_book() {
    let doc = build(&[
        "2 Edition Lucina",
        "7, 1 Ad Lectorem",
        "Buch II",
        "2 Edition",
        "7, 3 Ad Lectorem",
        "Ludite",
    ]);

    // Without a book, a digit marker outside 1-3 is not a header.
    assert_eq!(doc.stats.poem_headers, 1);
    assert_eq!(doc.stats.book_headers, 3);
    let poem = doc.poem(BookId::Numbered(2), 3).expect("poem II, 3");
    assert_eq!(poem.genre, Genre::Paraenesis);
}

#[test]
fn digit_markers_map_to_books() {
    let doc = build(&["Buch III", "1, 4 Ad Venerem", "Alma Venus", "9, 2 In Lamiam", "Improba"]);

    assert!(doc.poem(BookId::Numbered(1), 4).is_some());
    let poem = doc.poem(BookId::Numbered(3), 2).expect("poem III, 2");
    assert_eq!(poem.preposition, Preposition::In);
    assert_eq!(poem.genre, Genre::Invective);
}

#[test]
fn colophon_is_collected_while_poem_open() {
    let doc = build(&[
        "Buch III",
        "III, 47 Ad Lectorem",
        "Vive, vale",
        "Actum Papiae MCCCCLXXIII",
        "CDiis Immortalibus gratia",
    ]);

    assert_eq!(doc.colophon, "Actum Papiae MCCCCLXXIII\nCDiis Immortalibus gratia");
    assert_eq!(doc.stats.colophon, 2);
    assert_eq!(doc.book(BookId::Numbered(3)).map(|b| b.line_count()), Some(1));
}

#[test]
fn blank_paragraphs_are_counted_and_skipped() {
    let doc = build(&["Buch I", "", "I, 1 Ad Lucinam", "   ", "verse a", ""]);

    assert_eq!(doc.stats.blank, 3);
    assert_eq!(doc.stats.paragraphs, 6);
    assert_eq!(doc.line_count(), 1);
}

#[test]
fn indentation_from_style_or_whitespace() {
    let doc = build_from(&[
        Paragraph::new("Buch I"),
        Paragraph::new("I, 5 Ad Lucinam"),
        Paragraph::new("Prima"),
        Paragraph::new("secunda").indented(),
        Paragraph::new("Tertia"),
        Paragraph::new("\tquarta"),
    ]);

    let poem = doc.poem(BookId::Numbered(1), 5).expect("poem I, 5");
    let flags: Vec<bool> = poem.lines.iter().map(|l| l.indent).collect();
    assert_eq!(flags, vec![false, true, false, true]);
    assert_eq!(poem.lines[3].text, "quarta");
    assert_eq!(poem.meter, Meter::Elegiac);
}

#[test]
fn fallback_person_refs_are_counted() {
    let doc = build(&["Buch I", "I, 3 Ad Marcum Tullium", "Salve"]);

    let poem = doc.poem(BookId::Numbered(1), 3).expect("poem I, 3");
    assert_eq!(poem.person_ref, Some(PersonRef::fallback("marcum-tullium")));
    assert_eq!(doc.stats.fallback_person_refs, 1);
}

#[test]
fn extra_person_entries_take_effect() {
    let extra = [("Marcum Tullium".to_string(), "cicero".to_string())]
        .into_iter()
        .collect();
    let paragraphs: Vec<Paragraph> = ["Buch I", "I, 3 Ad Marcum Tullium", "Salve"]
        .into_iter()
        .map(Paragraph::new)
        .collect();

    let doc = parse_paragraphs_with(PersonResolver::with_extra(&extra), &paragraphs);

    let poem = doc.poem(BookId::Numbered(1), 3).expect("poem I, 3");
    assert_eq!(poem.person_ref, Some(PersonRef::table("cicero")));
    assert_eq!(doc.stats.fallback_person_refs, 0);
}

#[test]
fn poems_sorted_within_book() {
    let doc = build(&[
        "Buch I",
        "I, 3 Ad Lucinam",
        "tertium",
        "I, 1 Ad Lucinam",
        "primum",
    ]);

    let numbers: Vec<u32> = doc.books[0].poems.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[test]
fn missing_poems_reported_against_expected_counts() {
    let doc = build(&["Buch I", "I, 2 Ad Lucinam", "versus"]);
    let expected = [(BookId::Numbered(1), 3), (BookId::Numbered(2), 1)]
        .into_iter()
        .collect();

    let missing = doc.missing_poems(&expected);

    assert_eq!(missing.get(&BookId::Numbered(1)), Some(&vec![1, 3]));
    assert_eq!(missing.get(&BookId::Numbered(2)), Some(&vec![1]));
}

#[test]
fn rerun_is_idempotent() {
    let texts = [
        "Praefatio",
        "line one text",
        "Buch I",
        "lucina mea",
        "I, 1 Ad Lucinam",
        "verse a",
        "  verse b",
        "Actum Papiae",
    ];
    assert_eq!(build(&texts), build(&texts));
}
