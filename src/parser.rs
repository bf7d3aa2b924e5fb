use crate::types::{Document, Section, INTRODUCTION, UNTITLED};
use tracing::debug;

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Level-1 markdown heading, a title candidate.
    Title(&'a str),
    /// Level-2 markdown heading, starts a new section.
    SectionHeading(&'a str),
    /// Anything else accumulates into the current section.
    Body(&'a str),
}

/// Classify one line of input. Section headings are detected on the raw
/// line (an indented `##` is body text); titles on the trimmed line.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if is_section_heading(line) {
        return LineKind::SectionHeading(heading_text(line));
    }
    if line.trim().starts_with("# ") {
        return LineKind::Title(heading_text(line.trim()));
    }
    LineKind::Body(line)
}

fn is_section_heading(line: &str) -> bool {
    match line.strip_prefix("##") {
        Some(rest) => rest.starts_with(|c: char| c.is_whitespace()),
        None => false,
    }
}

fn heading_text(line: &str) -> &str {
    line.trim_start_matches('#').trim()
}

/// Parse raw article text into a document. Total: any input, including
/// empty text, yields a usable document.
pub fn parse(raw_text: &str) -> Document {
    let source = raw_text.trim().to_string();
    if source.is_empty() {
        return Document {
            title: UNTITLED.to_string(),
            sections: Vec::new(),
            source,
        };
    }

    debug!("Parsing document ({} bytes)", source.len());

    let (title, sections) = {
        let lines: Vec<&str> = source.lines().collect();
        let title = extract_title(&lines);
        let title_line = format!("# {}", title);

        let mut sections: Vec<Section> = Vec::new();
        let mut current_heading = INTRODUCTION.to_string();
        let mut buffer: Vec<&str> = Vec::new();

        for line in lines {
            // The title line itself is not content.
            if line.trim() == title_line {
                continue;
            }

            match classify_line(line) {
                LineKind::SectionHeading(heading) => {
                    flush_section(&mut sections, &current_heading, &buffer);
                    current_heading = heading.to_string();
                    buffer.clear();
                }
                _ => buffer.push(line),
            }
        }
        flush_section(&mut sections, &current_heading, &buffer);

        (title, sections)
    };

    debug!("Parsed \"{}\" with {} sections", title, sections.len());

    Document {
        title,
        sections,
        source,
    }
}

/// The first level-1 heading wins; otherwise the first line of the
/// document, stripped of any heading markers.
fn extract_title(lines: &[&str]) -> String {
    for line in lines {
        if let LineKind::Title(text) = classify_line(line) {
            return text.to_string();
        }
    }
    lines
        .first()
        .map(|line| heading_text(line.trim()).to_string())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Record the accumulated section body, dropping sections whose content is
/// empty. A repeated heading keeps its original position but takes the
/// latest body.
fn flush_section(sections: &mut Vec<Section>, heading: &str, buffer: &[&str]) {
    let body = buffer.join("\n").trim().to_string();
    if body.is_empty() {
        return;
    }

    if let Some(existing) = sections.iter_mut().find(|s| s.heading == heading) {
        existing.body = body;
    } else {
        sections.push(Section {
            heading: heading.to_string(),
            body,
        });
    }
}
