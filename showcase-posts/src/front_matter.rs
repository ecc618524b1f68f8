/// YAML front matter at the head of a markdown post
use serde::Deserialize;

/// `publish:` as written by hand: `true`, `yes`, `"on"`, `1`, ...
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PublishFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl PublishFlag {
    pub fn is_truthy(&self) -> bool {
        match self {
            PublishFlag::Bool(b) => *b,
            PublishFlag::Int(n) => *n != 0,
            PublishFlag::Text(s) => {
                matches!(s.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub publish: Option<PublishFlag>,
}

impl FrontMatter {
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn is_published(&self) -> bool {
        self.publish.as_ref().is_some_and(PublishFlag::is_truthy)
    }

    /// The slug, if present and non-empty
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }
}

/// Split `content` into its front matter text and markdown body.
///
/// The file must open with a `---` line; the block ends at the next line
/// that starts with `---`. Returns `None` when either fence is missing.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = end_of_line(content.strip_prefix("---")?)?;
    let mut from = 0;
    loop {
        let at = from + rest[from..].find("\n---")?;
        if let Some(body) = end_of_line(&rest[at + 4..]) {
            return Some((&rest[..at], body));
        }
        from = at + 1;
    }
}

/// Skip trailing blanks and the newline after a fence
fn end_of_line(text: &str) -> Option<&str> {
    text.trim_start_matches([' ', '\t', '\r']).strip_prefix('\n')
}
