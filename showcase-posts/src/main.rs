use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use showcase_posts::update_posts;

#[derive(Parser, Debug)]
#[command(
    name = "showcase-posts",
    about = "Add published markdown posts to the carousel's posts.json"
)]
struct Args {
    /// Directory holding the markdown posts
    #[arg(long, default_value = "blog/posts")]
    posts_dir: PathBuf,

    /// Post list to update
    #[arg(long, default_value = "blog/posts.json")]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let summary = update_posts(&args.posts_dir, &args.output)?;
    info!(
        "Summary: Added {} new post(s), skipped {} existing post(s)",
        summary.added, summary.skipped
    );
    Ok(())
}
