use crate::fallback;
use crate::llm_client::CompletionClient;
use crate::parser;
use crate::prompts;
use crate::types::{Document, Platform, RepurposedContent};
use std::collections::HashMap;
use tracing::{info, warn};

/// Default character cap for generated summaries.
pub const DEFAULT_SUMMARY_LENGTH: usize = 250;

/// Produces repurposed content from an article, preferring the completion
/// client and falling back to deterministic composition whenever a call
/// fails. Failures are per artifact: one failed call never affects the
/// others.
pub struct ContentRepurposer<C> {
    client: C,
}

impl<C: CompletionClient> ContentRepurposer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Generate a summary capped at `max_length` characters.
    pub async fn make_summary(&self, document: &Document, max_length: usize) -> String {
        match self
            .client
            .complete(&prompts::summary_messages(document, max_length))
            .await
        {
            Ok(text) => fallback::truncate_with_ellipsis(text.trim(), max_length),
            Err(e) => {
                warn!("Summary generation failed ({}), using rule-based fallback", e);
                fallback::summary(document, max_length)
            }
        }
    }

    /// Generate up to three posts per requested platform. The returned map
    /// carries exactly the requested platform keys.
    pub async fn make_social_posts(
        &self,
        document: &Document,
        platforms: &[Platform],
    ) -> HashMap<Platform, Vec<String>> {
        let mut result = HashMap::new();

        for &platform in platforms {
            let posts = match self
                .client
                .complete(&prompts::social_messages(document, platform))
                .await
            {
                Ok(text) => split_posts(&text),
                Err(e) => {
                    warn!(
                        "{} post generation failed ({}), using rule-based fallback",
                        platform, e
                    );
                    fallback::social_posts(document, platform)
                }
            };
            result.insert(platform, posts);
        }

        result
    }

    /// Generate an email newsletter announcing the article.
    pub async fn make_newsletter(&self, document: &Document) -> String {
        match self
            .client
            .complete(&prompts::newsletter_messages(document))
            .await
        {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(
                    "Newsletter generation failed ({}), using rule-based fallback",
                    e
                );
                fallback::newsletter(document)
            }
        }
    }

    /// Parse the article once and derive every artifact from the same
    /// immutable document, with the default platform set and summary cap.
    pub async fn repurpose(&self, raw_text: &str) -> RepurposedContent {
        self.repurpose_with(raw_text, &Platform::ALL, DEFAULT_SUMMARY_LENGTH)
            .await
    }

    /// [`repurpose`](Self::repurpose) with explicit platforms and summary cap.
    pub async fn repurpose_with(
        &self,
        raw_text: &str,
        platforms: &[Platform],
        max_length: usize,
    ) -> RepurposedContent {
        let document = parser::parse(raw_text);
        info!(
            "Repurposing \"{}\" ({} sections) via {}",
            document.title,
            document.sections.len(),
            self.client.client_name()
        );

        let summary = self.make_summary(&document, max_length).await;
        let social_media_posts = self.make_social_posts(&document, platforms).await;
        let email_newsletter = self.make_newsletter(&document).await;

        RepurposedContent {
            title: document.title,
            summary,
            social_media_posts,
            email_newsletter,
        }
    }
}

/// Split a generated response into posts on blank-line boundaries,
/// dropping empty candidates and keeping at most the first three.
fn split_posts(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|post| !post.is_empty())
        .take(Platform::MAX_POSTS)
        .map(str::to_string)
        .collect()
}
