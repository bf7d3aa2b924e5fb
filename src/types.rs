use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Heading used for content that appears before the first explicit section.
pub const INTRODUCTION: &str = "Introduction";

/// Title assigned when the input contains no usable title line.
pub const UNTITLED: &str = "Untitled Blog Post";

/// A single section of a parsed article: heading plus body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// Parsed representation of an article: title, ordered sections, and the
/// trimmed source text. Built once by the parser and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
    pub source: String,
}

impl Document {
    /// Look up a section body by heading.
    pub fn section(&self, heading: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.heading == heading)
            .map(|s| s.body.as_str())
    }

    /// Body of the implicit or explicit "Introduction" section, if present.
    pub fn introduction(&self) -> Option<&str> {
        self.section(INTRODUCTION)
    }

    /// Sections other than "Introduction", in document order.
    pub fn content_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.heading != INTRODUCTION)
    }
}

/// Social media platforms with distinct generation policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Linkedin,
    Facebook,
}

impl Platform {
    /// The default platform set, in the order posts are generated.
    pub const ALL: [Platform; 3] = [Platform::Twitter, Platform::Linkedin, Platform::Facebook];

    /// Maximum number of posts kept per platform.
    pub const MAX_POSTS: usize = 3;

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = RepurposerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "twitter" => Ok(Platform::Twitter),
            "linkedin" => Ok(Platform::Linkedin),
            "facebook" => Ok(Platform::Facebook),
            other => Err(RepurposerError::UnknownPlatform(other.to_string())),
        }
    }
}

/// The complete set of repurposed outputs for one input article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepurposedContent {
    pub title: String,
    pub summary: String,
    pub social_media_posts: HashMap<Platform, Vec<String>>,
    pub email_newsletter: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RepurposerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Completion response contained no choices")]
    EmptyCompletion,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepurposerError>;
