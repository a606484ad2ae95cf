//! Backend location.

use url::Url;

use crate::error::CvResult;

/// Backend used when none is configured (the generator's dev server).
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Path of the CV generation endpoint, relative to the backend root.
pub const GENERATE_PATH: &str = "/generate";

/// Where the client sends requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> CvResult<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn generate_url(&self) -> CvResult<Url> {
        Ok(self.base_url.join(GENERATE_PATH)?)
    }

    /// Resolve a URL returned by the backend, which may be relative.
    pub fn resolve(&self, url: &str) -> CvResult<Url> {
        Ok(self.base_url.join(url)?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
        }
    }
}
