/// Merge published markdown posts into `posts.json`
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use pulldown_cmark::{html, Options, Parser};

use crate::entry::{PostEntry, PostsFile};
use crate::front_matter::{split_front_matter, FrontMatter};

/// What one run changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub added: usize,
    /// Published posts whose slug was already listed
    pub skipped: usize,
}

pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_HEADING_ATTRIBUTES;
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(markdown, options));
    out
}

/// Add every published post under `posts_dir` that `posts_json` does not
/// list yet, then rewrite the file sorted newest first.
///
/// Files without readable front matter, unpublished posts and published
/// posts without a slug are passed over with a warning where useful.
pub fn update_posts(posts_dir: &Path, posts_json: &Path) -> Result<Summary> {
    if !posts_dir.is_dir() {
        bail!("{} directory not found", posts_dir.display());
    }

    let mut file = load_posts_file(posts_json)?;
    let mut summary = Summary::default();

    for path in markdown_files(posts_dir)? {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("unable to read {}", path.display()))?;

        let Some((yaml, markdown)) = split_front_matter(&content) else {
            log::warn!("Could not parse frontmatter in {}", name);
            continue;
        };
        let front = match FrontMatter::parse(yaml) {
            Ok(front) => front,
            Err(err) => {
                log::warn!("Could not parse frontmatter in {}: {}", name, err);
                continue;
            }
        };

        if !front.is_published() {
            continue;
        }
        let Some(slug) = front.slug().map(str::to_string) else {
            log::warn!("Post {} has publish=true but no slug", name);
            continue;
        };
        if file.contains(&slug) {
            summary.skipped += 1;
            continue;
        }

        let entry = PostEntry::new(front, markdown, markdown_to_html(markdown));
        log::info!("Added post: {} ({})", entry.title, slug);
        file.posts.push(entry);
        summary.added += 1;
    }

    file.sort_newest_first();
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(posts_json, json)
        .with_context(|| format!("unable to write {}", posts_json.display()))?;

    Ok(summary)
}

fn load_posts_file(path: &Path) -> Result<PostsFile> {
    if !path.exists() {
        return Ok(PostsFile::default());
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("unable to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("unable to parse {}", path.display()))
}

/// `*.md` files directly inside `dir`, in name order
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("unable to list {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
