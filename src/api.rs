// Image download module: a small blocking HTTP client that fetches a
// random stock photo and saves it next to the blog's static assets.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, ClientBuilder};
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Random 1600x900 photo, a different one on every request.
pub const DEFAULT_PROVIDER_URL: &str = "https://source.unsplash.com/1600x900";

/// Holds a reqwest blocking client and the URL images are fetched from.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    provider_url: String,
}

impl ImageClient {
    /// Create an ImageClient for the URL in `IMAGE_PROVIDER_URL`, or the
    /// Unsplash endpoint when the variable is unset.
    pub fn from_env() -> Result<Self> {
        let provider_url =
            std::env::var("IMAGE_PROVIDER_URL").unwrap_or_else(|_| DEFAULT_PROVIDER_URL.into());
        Self::new(provider_url)
    }

    /// Create an ImageClient for an explicit provider URL.
    pub fn new(provider_url: impl Into<String>) -> Result<Self> {
        Self::with_builder(provider_url, Client::builder())
    }

    /// Finish `builder` into a client with the request timeout turned off.
    pub(crate) fn with_builder(
        provider_url: impl Into<String>,
        builder: ClientBuilder,
    ) -> Result<Self> {
        let client = builder
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ImageClient {
            client,
            provider_url: provider_url.into(),
        })
    }

    pub fn provider_url(&self) -> &str {
        &self.provider_url
    }

    /// GET the provider URL and stream the body into `path`, replacing any
    /// existing file. The status code is not inspected: whatever the
    /// provider answers with is saved. Returns the number of bytes written.
    pub fn download_to(&self, path: &Path) -> Result<u64> {
        let mut res = self
            .client
            .get(&self.provider_url)
            .send()
            .with_context(|| format!("Failed to fetch image from {}", self.provider_url))?;

        let mut out = File::create(path)
            .with_context(|| format!("Failed to create image file {}", path.display()))?;

        let written = io::copy(&mut res, &mut out)
            .with_context(|| format!("Failed to save image to {}", path.display()))?;
        Ok(written)
    }
}
