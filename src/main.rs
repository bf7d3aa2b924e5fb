use clap::Parser;
use content_repurposer::{
    CompletionClient, ContentRepurposer, LlmConfig, MockCompletionClient, OpenAiClient, Platform,
    RepurposedContent, DEFAULT_SUMMARY_LENGTH,
};
use std::io::Read;
use std::str::FromStr;
use tracing::info;

/// Repurpose a long-form article into a summary, social media posts and
/// an email newsletter.
#[derive(Parser, Debug)]
#[command(name = "content-repurposer", version, about)]
struct Args {
    /// Path to the article text, or "-" to read from stdin.
    input: String,

    /// Comma-separated platforms (twitter, linkedin, facebook).
    #[arg(long, default_value = "twitter,linkedin,facebook")]
    platforms: String,

    /// Character cap for the summary.
    #[arg(long, default_value_t = DEFAULT_SUMMARY_LENGTH)]
    max_length: usize,

    /// Skip the completion endpoint and use deterministic composition only.
    #[arg(long)]
    offline: bool,

    /// Emit the result as pretty-printed JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let raw_text = if args.input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&args.input)?
    };

    let platforms = args
        .platforms
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(Platform::from_str)
        .collect::<Result<Vec<_>, _>>()?;

    let content = if args.offline {
        info!("Running offline, completion calls disabled");
        run(
            MockCompletionClient::failing(),
            &raw_text,
            &platforms,
            args.max_length,
        )
        .await
    } else {
        let config = LlmConfig::from_env()?;
        run(OpenAiClient::new(config), &raw_text, &platforms, args.max_length).await
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        print_report(&content);
    }

    Ok(())
}

async fn run<C: CompletionClient>(
    client: C,
    raw_text: &str,
    platforms: &[Platform],
    max_length: usize,
) -> RepurposedContent {
    ContentRepurposer::new(client)
        .repurpose_with(raw_text, platforms, max_length)
        .await
}

fn print_report(content: &RepurposedContent) {
    println!("Title: {}\n", content.title);
    println!("Summary:\n{}\n", content.summary);

    println!("Social Media Posts:");
    for platform in Platform::ALL {
        if let Some(posts) = content.social_media_posts.get(&platform) {
            println!("\n{}:", platform.as_str().to_uppercase());
            for (i, post) in posts.iter().enumerate() {
                println!("Post {}:\n{}\n", i + 1, post);
            }
        }
    }

    println!("Email Newsletter:\n{}", content.email_newsletter);
}
