// Output locations for generated posts. Both directories live under the
// user's home directory and are expected to exist already; nothing here
// creates them.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Markdown posts, relative to the home directory.
pub const POSTS_DIR: &str = "www/gabriel-blog/src/_posts";
/// Images served by the blog, relative to the home directory.
pub const STATIC_ASSETS_DIR: &str = "www/gabriel-blog/public/static";

/// Resolved, absolute output directories. Built once at startup and passed
/// by reference through the `new` flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub posts_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    /// Resolve the output directories under the invoking user's home.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine the home directory")?;
        Ok(Self::with_root(&home))
    }

    /// Resolve the output directories under an explicit base directory.
    pub fn with_root(root: &Path) -> Self {
        Config {
            posts_dir: root.join(POSTS_DIR),
            static_dir: root.join(STATIC_ASSETS_DIR),
        }
    }

    /// Where the cover image for `slug` is saved.
    pub fn image_path(&self, slug: &str) -> PathBuf {
        self.static_dir.join(format!("{}.jpg", slug))
    }

    /// Where the markdown file for `slug` is written.
    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.posts_dir.join(format!("{}.md", slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_joins_fixed_dirs() {
        let config = Config::with_root(Path::new("/home/writer"));
        assert_eq!(
            config.posts_dir,
            PathBuf::from("/home/writer/www/gabriel-blog/src/_posts")
        );
        assert_eq!(
            config.static_dir,
            PathBuf::from("/home/writer/www/gabriel-blog/public/static")
        );
    }

    #[test]
    fn test_paths_derive_from_slug() {
        let config = Config::with_root(Path::new("/home/writer"));
        let image = config.image_path("my-first-post");
        let post = config.post_path("my-first-post");

        assert!(image.ends_with("public/static/my-first-post.jpg"));
        assert_eq!(post.file_name().unwrap(), "my-first-post.md");
        assert_eq!(post.parent().unwrap(), config.posts_dir);
    }
}
