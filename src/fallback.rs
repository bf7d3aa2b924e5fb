//! Deterministic content composition, used whenever the completion
//! endpoint fails. Every function here is a pure transformation of the
//! parsed document, so repeated runs produce identical output.

use crate::types::{Document, Platform};

/// Compose a rule-based summary: title, lead paragraph, then one bullet
/// per section with its first sentence. Capped at `max_length` characters.
pub fn summary(document: &Document, max_length: usize) -> String {
    // Prefer the introduction for the lead; without one, fall back to the
    // opening section, then to the raw source text.
    let lead = document
        .introduction()
        .or_else(|| document.sections.first().map(|s| s.body.as_str()))
        .map(first_paragraph)
        .unwrap_or_else(|| first_paragraph(&document.source));

    let mut summary = format!("{}\n\n{}\n\n", document.title, lead);
    for section in document.content_sections() {
        summary.push_str(&format!(
            "• {}: {}\n",
            section.heading,
            first_sentence(&section.body)
        ));
    }

    truncate_with_ellipsis(&summary, max_length)
}

/// Compose rule-based posts for one platform. Always at most
/// [`Platform::MAX_POSTS`] entries.
pub fn social_posts(document: &Document, platform: Platform) -> Vec<String> {
    let mut posts = match platform {
        Platform::Twitter => vec![twitter_post(document)],
        Platform::Linkedin => vec![linkedin_post(document)],
        Platform::Facebook => vec![facebook_post(document)],
    };
    posts.truncate(Platform::MAX_POSTS);
    posts
}

fn twitter_post(document: &Document) -> String {
    let hashtags = document
        .title
        .split_whitespace()
        .filter(|word| word.chars().count() > 4)
        .map(|word| format!("#{}", word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{}\n\nNew blog post! Check it out: [LINK]\n\n{}",
        document.title, hashtags
    )
}

fn linkedin_post(document: &Document) -> String {
    let mut post = format!("📝 New Article: {}\n\n", document.title);
    post.push_str("I've just published a new blog post exploring:\n\n");

    for section in &document.sections {
        post.push_str(&format!(
            "• {}: {}\n",
            section.heading,
            first_sentence(&section.body)
        ));
    }

    post.push_str("\nCheck out the full article here: [LINK]\n\n");

    let first_word = document
        .title
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    post.push_str(&format!("#ProfessionalDevelopment #{}", first_word));
    post
}

fn facebook_post(document: &Document) -> String {
    let intro = first_paragraph(document.introduction().unwrap_or(""));

    let mut post = format!("Just published a new article: '{}'\n\n", document.title);
    post.push_str(&format!("{}\n\n", intro));
    post.push_str("In this post, I cover:\n");

    for section in document.content_sections() {
        post.push_str(&format!("✅ {}\n", section.heading));
    }

    post.push_str("\nRead the full article here: [LINK]");
    post
}

/// Compose a rule-based newsletter: subject, greeting, intro, numbered
/// table of contents, highlights, call to action and sign-off.
pub fn newsletter(document: &Document) -> String {
    let mut newsletter = format!(
        "Subject: New Blog Post: {}\n\n\
         Dear Subscriber,\n\n\
         I hope this email finds you well! I'm excited to share my latest blog post with you:\n\n\
         ## {}\n\n",
        document.title, document.title
    );

    let intro = first_paragraph(document.introduction().unwrap_or(""));
    newsletter.push_str(&format!("{}\n\n", intro));

    newsletter.push_str("In this article, you'll learn about:\n\n");
    for (i, section) in document.content_sections().enumerate() {
        newsletter.push_str(&format!("{}. {}\n", i, section.heading));
    }

    newsletter.push_str("\n## Highlights\n\n");
    for section in document.content_sections() {
        let highlight = truncate_with_ellipsis(&two_sentence_excerpt(&section.body), 200);
        newsletter.push_str(&format!("**{}**: {}\n\n", section.heading, highlight));
    }

    newsletter.push_str(
        "## Read the Full Article\n\n\
         To read the complete article, click here: [LINK]\n\n\
         I'd love to hear your thoughts! Feel free to reply to this email with your \
         comments or questions.\n\n\
         Until next time,\n[Your Name]\n\n\
         P.S. If you found this valuable, please consider sharing it with a friend or \
         colleague who might also benefit.",
    );

    newsletter.trim().to_string()
}

/// Everything up to and including the first period; bodies without one
/// get a period appended.
fn first_sentence(body: &str) -> String {
    match body.find('.') {
        Some(index) => body[..=index].to_string(),
        None => format!("{}.", body),
    }
}

fn first_paragraph(text: &str) -> &str {
    text.split("\n\n").next().unwrap_or("")
}

/// First two period-separated pieces rejoined, or the whole body when the
/// split yields a single piece.
fn two_sentence_excerpt(body: &str) -> String {
    let mut parts = body.split('.');
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => format!("{}.{}.", first, second),
        _ => body.to_string(),
    }
}

/// Cap `text` at `max_length` characters, replacing the tail with an
/// ellipsis when it overflows. Counts chars, never splitting a code point.
pub(crate) fn truncate_with_ellipsis(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let mut truncated: String = text
        .chars()
        .take(max_length.saturating_sub(3))
        .collect();
    truncated.push_str("...");
    truncated
}
