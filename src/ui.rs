// UI layer: the interactive prompts for `new` and the progress output
// around the download. Uses `dialoguer` for input and `indicatif` for the
// spinner.

use crate::api::ImageClient;
use crate::config::Config;
use crate::post::{self, Answers};
use anyhow::{bail, Context, Result};
use chrono::Local;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Ask for the post title and description. Empty answers are rejected by
/// the prompt and asked again.
pub fn prompt_answers() -> Result<Answers> {
    // dialoguer cannot read from a pipe; fail instead of waiting on it.
    if !std::io::stdin().is_terminal() {
        bail!("Cannot read answers: standard input is not a terminal");
    }

    let title: String = Input::new()
        .with_prompt("Post Title")
        .validate_with(|s: &String| post::required(s))
        .interact_text()
        .context("Failed to read post title")?;
    let description: String = Input::new()
        .with_prompt("Post Description")
        .validate_with(|s: &String| post::required(s))
        .interact_text()
        .context("Failed to read post description")?;

    Answers::new(title, description)
}

/// Download the cover image and write the post dated today, with a
/// spinner while the download runs.
pub fn new_post(config: &Config, client: &ImageClient, answers: Answers) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Downloading cover image from {}", client.provider_url()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = post::publish(config, client, answers, Local::now().date_naive());
    spinner.finish_and_clear();

    let path = result?;
    println!("Post written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{local_client, serve_once, unreachable_url};
    use std::fs;
    use tempfile::TempDir;

    fn blog_home() -> (TempDir, Config) {
        let temp = TempDir::new().unwrap();
        let config = Config::with_root(temp.path());
        fs::create_dir_all(&config.posts_dir).unwrap();
        fs::create_dir_all(&config.static_dir).unwrap();
        (temp, config)
    }

    #[test]
    fn test_new_post_writes_today() {
        let (_temp, config) = blog_home();
        let client = local_client(serve_once("200 OK", b"img"));
        let answers = Answers::new("Hello World", "desc").unwrap();

        new_post(&config, &client, answers).unwrap();

        let today = post::format_date(Local::now().date_naive());
        let content = fs::read_to_string(config.post_path("hello-world")).unwrap();
        assert!(content.contains(&format!("createdAt: {}\n", today)));
        assert!(config.image_path("hello-world").exists());
    }

    #[test]
    fn test_new_post_reports_download_failure() {
        let (_temp, config) = blog_home();
        let client = local_client(unreachable_url());
        let answers = Answers::new("Hello World", "desc").unwrap();

        assert!(new_post(&config, &client, answers).is_err());
        assert!(!config.post_path("hello-world").exists());
    }
}
