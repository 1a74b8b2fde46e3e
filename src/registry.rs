use anyhow::Result;
use log::debug;
use serde::Deserialize;
use std::time::Duration;

use crate::config::REGISTRY_URL;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a single registry lookup.
///
/// Every failure mode, from a refused connection to a 404 to a garbled
/// body, collapses into `exists == false`. The cause only surfaces in
/// the debug log; verification must not abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub name: String,
    pub exists: bool,
    pub latest: Option<String>,
}

impl Verification {
    pub fn latest_version(&self) -> &str {
        self.latest.as_deref().unwrap_or("unknown")
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PackageDocument {
    #[serde(default, rename = "dist-tags")]
    pub(crate) dist_tags: DistTags,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DistTags {
    pub(crate) latest: Option<String>,
}

/// Blocking client for the npm registry metadata endpoint.
pub struct RegistryClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(REGISTRY_URL)
    }

    /// Builds a client against a custom registry base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .user_agent(concat!("dep-mole/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Looks up one package by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The package name, scoped or not.
    ///
    /// # Returns
    ///
    /// Returns a `Verification` carrying the latest published version when
    /// the registry knows the package, and `exists == false` otherwise.
    pub fn lookup(&self, name: &str) -> Verification {
        match self.fetch_latest(name) {
            Ok(latest) => Verification {
                name: name.to_string(),
                exists: true,
                latest,
            },
            Err(err) => {
                debug!("registry lookup for {name} failed: {err:#}");
                Verification {
                    name: name.to_string(),
                    exists: false,
                    latest: None,
                }
            }
        }
    }

    pub(crate) fn lookup_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(name))
    }

    fn fetch_latest(&self, name: &str) -> Result<Option<String>> {
        let response = self.client.get(self.lookup_url(name)).send()?;
        if !response.status().is_success() {
            anyhow::bail!("registry returned status code {}", response.status());
        }
        let document: PackageDocument = response.json()?;
        Ok(document.dist_tags.latest)
    }
}
