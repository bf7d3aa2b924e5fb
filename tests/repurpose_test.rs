use content_repurposer::{parse, ContentRepurposer, MockCompletionClient, Platform};
use tracing::info;

const ARTICLE: &str =
    "# Hello World\n\n## Intro\n\nFirst para.\n\nSecond para.\n\n## Details\n\nOne. Two. Three.";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

#[tokio::test]
async fn failing_client_produces_identical_fallback_bundles() {
    init_tracing();
    let repurposer = ContentRepurposer::new(MockCompletionClient::failing());

    let first = repurposer.repurpose(ARTICLE).await;
    let second = repurposer.repurpose(ARTICLE).await;

    info!("Fallback summary: {}", first.summary);

    assert_eq!(first, second, "fallback output must be deterministic");
    assert_eq!(first.title, "Hello World");
    assert!(first.summary.starts_with("Hello World\n\nFirst para."));
    assert!(first.summary.contains("• Details: One."));
    assert!(!first.email_newsletter.is_empty());

    for platform in Platform::ALL {
        let posts = first
            .social_media_posts
            .get(&platform)
            .expect("every default platform key is present");
        assert!(!posts.is_empty());
        assert!(posts.len() <= 3);
    }
    assert_eq!(first.social_media_posts.len(), Platform::ALL.len());
}

#[tokio::test]
async fn failing_client_is_called_once_per_artifact() {
    init_tracing();
    let client = MockCompletionClient::failing();
    let repurposer = ContentRepurposer::new(client.clone());

    let _ = repurposer.repurpose(ARTICLE).await;

    // One call for the summary, one per platform, one for the newsletter.
    assert_eq!(client.call_count(), 5);
}

#[tokio::test]
async fn generated_summary_is_truncated_to_max_length() {
    init_tracing();
    let repurposer = ContentRepurposer::new(MockCompletionClient::new("a".repeat(400)));
    let doc = parse(ARTICLE);

    let summary = repurposer.make_summary(&doc, 250).await;

    assert_eq!(summary.chars().count(), 250);
    assert!(summary.ends_with("..."));
}

#[tokio::test]
async fn short_generated_summary_is_kept_verbatim() {
    init_tracing();
    let repurposer = ContentRepurposer::new(MockCompletionClient::new("  A crisp summary.  "));
    let doc = parse(ARTICLE);

    let summary = repurposer.make_summary(&doc, 250).await;
    assert_eq!(summary, "A crisp summary.");
}

#[tokio::test]
async fn generated_posts_split_on_blank_lines_capped_at_three() {
    init_tracing();
    let response = "Post one\n\n  Post two  \n\n\n\nPost three\n\nPost four";
    let repurposer = ContentRepurposer::new(MockCompletionClient::new(response));
    let doc = parse(ARTICLE);

    let posts = repurposer
        .make_social_posts(&doc, &[Platform::Twitter])
        .await;

    assert_eq!(posts.len(), 1, "only the requested platform key");
    let twitter = &posts[&Platform::Twitter];
    assert_eq!(twitter, &["Post one", "Post two", "Post three"]);
}

#[tokio::test]
async fn requested_platform_keys_only() {
    init_tracing();
    let repurposer = ContentRepurposer::new(MockCompletionClient::failing());
    let doc = parse(ARTICLE);

    let posts = repurposer
        .make_social_posts(&doc, &[Platform::Linkedin])
        .await;

    assert_eq!(posts.len(), 1);
    assert!(posts.contains_key(&Platform::Linkedin));
    assert!(!posts.contains_key(&Platform::Twitter));
    assert!(!posts.contains_key(&Platform::Facebook));
}

#[tokio::test]
async fn generated_newsletter_is_returned_trimmed() {
    init_tracing();
    let repurposer =
        ContentRepurposer::new(MockCompletionClient::new("  Subject: Hi\n\nBody.  "));
    let doc = parse(ARTICLE);

    let newsletter = repurposer.make_newsletter(&doc).await;
    assert_eq!(newsletter, "Subject: Hi\n\nBody.");
}

#[tokio::test]
async fn repurpose_with_honors_platform_subset_and_cap() {
    init_tracing();
    let repurposer = ContentRepurposer::new(MockCompletionClient::failing());

    let content = repurposer
        .repurpose_with(ARTICLE, &[Platform::Facebook], 100)
        .await;

    assert_eq!(content.social_media_posts.len(), 1);
    assert!(content.social_media_posts.contains_key(&Platform::Facebook));
    assert!(content.summary.chars().count() <= 100);
}
