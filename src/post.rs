// Post assembly: turns the prompt answers into a slug, a cover image and a
// markdown file with front matter.

use crate::api::ImageClient;
use crate::config::Config;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

const ATTRIBUTION: &str =
    "# This post was autogenerated by my [blog-automator](https://github.com/Gabriel2233/blog-automator) project";
const WARNING_BOX: &str = "<WarningBox />";

/// The two required answers collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub title: String,
    pub description: String,
}

impl Answers {
    /// Both fields must be non-empty. Whitespace counts as a value.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let description = description.into();
        if let Err(msg) = required(&title) {
            bail!("Post title: {}", msg);
        }
        if let Err(msg) = required(&description) {
            bail!("Post description: {}", msg);
        }
        Ok(Answers { title, description })
    }
}

/// Validator shared with the interactive prompt.
pub fn required(value: &str) -> std::result::Result<(), &'static str> {
    if value.is_empty() {
        Err("Value is required")
    } else {
        Ok(())
    }
}

/// Everything written into the front matter of a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub description: String,
    pub image: String,
    pub slug: String,
    pub created_at: String,
}

impl Post {
    pub fn new(answers: Answers, date: NaiveDate) -> Self {
        let slug = slugify(&answers.title);
        Post {
            title: answers.title,
            description: answers.description,
            image: format!("/static/{}.jpg", slug),
            slug,
            created_at: format_date(date),
        }
    }

    /// The file contents, one entry per line, in output order.
    pub fn front_matter_lines(&self) -> Vec<String> {
        vec![
            "---".to_string(),
            format!("title: {}", self.title),
            format!("description: {}", self.description),
            format!("createdAt: {}", self.created_at),
            format!("image: {}", self.image),
            format!("slug: {}", self.slug),
            "---".to_string(),
            ATTRIBUTION.to_string(),
            WARNING_BOX.to_string(),
        ]
    }
}

/// Lowercase the title and turn every space into a hyphen. Punctuation and
/// repeated hyphens are left alone.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// `M-D-YYYY` with no zero padding, e.g. `5-4-2021`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m-%-d-%Y").to_string()
}

/// Write every line of the post, newline-terminated, then flush.
pub fn write_post<W: Write>(writer: W, post: &Post) -> Result<()> {
    let mut w = BufWriter::new(writer);
    for line in post.front_matter_lines() {
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

/// Download the cover image, then create the markdown file. The markdown
/// file is never created when the download fails. Existing files with the
/// same slug are overwritten. Returns the path of the markdown file.
pub fn publish(
    config: &Config,
    client: &ImageClient,
    answers: Answers,
    date: NaiveDate,
) -> Result<PathBuf> {
    let post = Post::new(answers, date);

    client.download_to(&config.image_path(&post.slug))?;

    let path = config.post_path(&post.slug);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create post file {}", path.display()))?;
    write_post(file, &post).with_context(|| format!("Failed to write post {}", path.display()))?;
    Ok(path)
}
