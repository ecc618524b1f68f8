/// Showcase Posts - publishes markdown posts into the carousel's post list
///
/// Reads `*.md` files with a YAML front matter block, renders the published
/// ones to HTML and merges them into `posts.json`, newest first.

pub mod entry;
pub mod front_matter;
pub mod update;

pub use entry::{PostEntry, PostsFile};
pub use front_matter::{split_front_matter, FrontMatter, PublishFlag};
pub use update::{update_posts, Summary};
