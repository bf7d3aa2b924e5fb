use content_repurposer::{parse, INTRODUCTION, UNTITLED};

#[test]
fn parses_title_and_sections_in_order() {
    let doc = parse(
        "# Hello World\n\n## Intro\n\nFirst para.\n\nSecond para.\n\n## Details\n\nOne. Two. Three.",
    );

    assert_eq!(doc.title, "Hello World");
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[0].heading, "Intro");
    assert_eq!(doc.sections[0].body, "First para.\n\nSecond para.");
    assert_eq!(doc.sections[1].heading, "Details");
    assert_eq!(doc.sections[1].body, "One. Two. Three.");
}

#[test]
fn document_without_subheadings_collapses_into_introduction() {
    let doc = parse("# Solo Title\n\nParagraph one.\n\nParagraph two.");

    assert_eq!(doc.title, "Solo Title");
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].heading, INTRODUCTION);
    assert_eq!(doc.sections[0].body, "Paragraph one.\n\nParagraph two.");
}

#[test]
fn empty_input_yields_placeholder_title_and_no_sections() {
    let doc = parse("");
    assert_eq!(doc.title, UNTITLED);
    assert!(doc.sections.is_empty());

    let doc = parse("   \n\n  ");
    assert_eq!(doc.title, UNTITLED);
    assert!(doc.sections.is_empty());
}

#[test]
fn first_line_becomes_title_without_markdown_heading() {
    let doc = parse("Plain Title Line\n\nBody text here.");

    assert_eq!(doc.title, "Plain Title Line");
    // Not a markdown heading line, so it stays part of the content.
    assert_eq!(
        doc.section(INTRODUCTION),
        Some("Plain Title Line\n\nBody text here.")
    );
}

#[test]
fn level_one_heading_wins_over_first_line() {
    let doc = parse("Some preamble\n\n# Actual Title\n\nBody.");

    assert_eq!(doc.title, "Actual Title");
    // The heading line is skipped, the preamble is kept.
    assert_eq!(doc.section(INTRODUCTION), Some("Some preamble\n\n\nBody."));
}

#[test]
fn heading_without_body_is_dropped() {
    let doc = parse("# T\n\n## Empty\n\n## Full\n\nContent here.");

    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].heading, "Full");
    assert_eq!(doc.sections[0].body, "Content here.");
}

#[test]
fn trailing_heading_without_body_is_dropped() {
    let doc = parse("# T\n\nIntro text.\n\n## Dangling");

    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].heading, INTRODUCTION);
    assert_eq!(doc.sections[0].body, "Intro text.");
}

#[test]
fn duplicate_heading_keeps_position_with_latest_body() {
    let doc = parse("# T\n\n## A\n\nfirst body.\n\n## B\n\nmiddle.\n\n## A\n\nsecond body.");

    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[0].heading, "A");
    assert_eq!(doc.sections[0].body, "second body.");
    assert_eq!(doc.sections[1].heading, "B");
    assert_eq!(doc.sections[1].body, "middle.");
}

#[test]
fn deeper_headings_are_body_text() {
    let doc = parse("# T\n\n## Section\n\n### Sub\n\ntext.");

    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].heading, "Section");
    assert_eq!(doc.sections[0].body, "### Sub\n\ntext.");
}

#[test]
fn indented_subheading_is_body_text() {
    let doc = parse("# T\n\n## Section\n\n  ## Indented\n\ntext.");

    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].heading, "Section");
    assert_eq!(doc.sections[0].body, "## Indented\n\ntext.");
}

#[test]
fn source_holds_trimmed_input() {
    let doc = parse("  \n# T\n\nBody.\n  ");
    assert_eq!(doc.source, "# T\n\nBody.");
}
