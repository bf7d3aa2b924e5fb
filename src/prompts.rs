//! Completion request builders for each derived artifact.

use crate::llm_client::ChatMessage;
use crate::types::{Document, Platform};

const SUMMARY_SYSTEM: &str = "You are an expert content writer who specializes in creating \
concise, engaging summaries.";

const NEWSLETTER_SYSTEM: &str = "You are an expert email marketer who specializes in creating \
engaging newsletters that drive clicks.";

const TWITTER_INSTRUCTIONS: &str = "Create 3 engaging Twitter posts about this blog article. \
Each post should be under 280 characters including a [LINK] placeholder. \
Include relevant hashtags and make the posts attention-grabbing. \
For one post, include a key statistic or insight from the article.";

const LINKEDIN_INSTRUCTIONS: &str = "Create 1 professional LinkedIn post about this blog article. \
The post should be informative, highlight the key points of the article, \
and include relevant industry hashtags at the end. \
Include a [LINK] placeholder where the article link would go.";

const FACEBOOK_INSTRUCTIONS: &str = "Create 3 Facebook posts about this blog article:\n\
1. A conversational main post announcing the article with a brief overview\n\
2. A quote post that highlights an insightful quote from the article\n\
3. A post that asks a thought-provoking question related to the article\n\n\
Include a [LINK] placeholder for all posts.";

const NEWSLETTER_INSTRUCTIONS: &str = "Create an email newsletter to announce this blog post. \
The newsletter should include:\n\
1. A compelling subject line\n\
2. A friendly introduction\n\
3. A brief overview of the article\n\
4. A structured table of contents or highlights section\n\
5. A call to action to read the full article (use [LINK] as a placeholder)\n\
6. A sign-off with a personal touch";

/// Request a summary of roughly `max_length` characters.
pub fn summary_messages(document: &Document, max_length: usize) -> Vec<ChatMessage> {
    let prompt = format!(
        "Create a concise summary of the following blog post. The summary should capture \
         the main points and be around {} characters.\n\n\
         Blog Title: {}\n\nBlog Content:\n{}\n\nSummary:",
        max_length, document.title, document.source
    );

    vec![ChatMessage::system(SUMMARY_SYSTEM), ChatMessage::user(prompt)]
}

/// Request posts for one platform, with that platform's policy.
pub fn social_messages(document: &Document, platform: Platform) -> Vec<ChatMessage> {
    let (instructions, label) = match platform {
        Platform::Twitter => (TWITTER_INSTRUCTIONS, "Twitter Posts:"),
        Platform::Linkedin => (LINKEDIN_INSTRUCTIONS, "LinkedIn Post:"),
        Platform::Facebook => (FACEBOOK_INSTRUCTIONS, "Facebook Posts:"),
    };

    let prompt = format!(
        "{}\n\nBlog Title: {}\n\nBlog Content:\n{}\n\n{}",
        instructions, document.title, document.source, label
    );

    vec![
        ChatMessage::system(format!(
            "You are an expert social media manager who specializes in creating \
             engaging content for {}.",
            platform
        )),
        ChatMessage::user(prompt),
    ]
}

/// Request a full newsletter announcing the article.
pub fn newsletter_messages(document: &Document) -> Vec<ChatMessage> {
    let prompt = format!(
        "{}\n\nBlog Title: {}\n\nBlog Content:\n{}\n\nEmail Newsletter:",
        NEWSLETTER_INSTRUCTIONS, document.title, document.source
    );

    vec![
        ChatMessage::system(NEWSLETTER_SYSTEM),
        ChatMessage::user(prompt),
    ]
}
