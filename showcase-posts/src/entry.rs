/// Records of `posts.json`, the list the carousel loads
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::front_matter::FrontMatter;

/// Longest description taken from the body when none is given
pub const DESCRIPTION_LIMIT: usize = 200;

/// One published post. Keys this tool does not know about are carried
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostEntry {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
    pub image: String,
    pub description: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostEntry {
    /// Build an entry from parsed front matter, the markdown body and its
    /// rendered HTML
    pub fn new(front: FrontMatter, markdown: &str, html: String) -> Self {
        let description = front
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| first_line(markdown));
        Self {
            title: front.title.unwrap_or_default(),
            slug: front.slug.unwrap_or_default(),
            date: front.date.unwrap_or_default(),
            author: front.author.unwrap_or_default(),
            tags: front.tags.unwrap_or_default(),
            image: front.image.unwrap_or_default(),
            description,
            content: html,
            extra: Map::new(),
        }
    }
}

fn first_line(markdown: &str) -> String {
    markdown
        .trim()
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(DESCRIPTION_LIMIT)
        .collect()
}

/// The whole `posts.json` document; other top-level keys survive a rewrite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostsFile {
    #[serde(default)]
    pub posts: Vec<PostEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostsFile {
    pub fn contains(&self, slug: &str) -> bool {
        self.posts.iter().any(|post| post.slug == slug)
    }

    /// Newest first by date text; equal dates keep their order
    pub fn sort_newest_first(&mut self) {
        self.posts.sort_by(|a, b| b.date.cmp(&a.date));
    }
}
