//! Catalog client: retrieve the blocks manifest and answer lookups.
//!
//! `CatalogClient` owns the manifest URL, a transport, and a single slot for
//! the parsed catalog. Retrieval replaces the slot wholesale after a
//! successful parse; a failed retrieval leaves whatever was held (including
//! nothing) untouched and surfaces the error. Queries with `refresh = false`
//! never touch the network, so an unretrieved client answers with absence
//! rather than fetching implicitly.

use crate::catalog::model::{BlockEntry, Catalog, parse_catalog};
use anyhow::Context;
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Public manifest endpoint used when no URL is configured.
pub const DEFAULT_MANIFEST_URL: &str = "https://detect.roboflow.com/workflows/blocks/describe";

/// Resolve the manifest URL, honoring the `BLOCKDEX_MANIFEST_URL` override.
pub fn manifest_url_from_env() -> String {
    std::env::var("BLOCKDEX_MANIFEST_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MANIFEST_URL.to_string())
}

#[derive(Debug, Error)]
/// Failure modes of a manifest retrieval.
///
/// "Block not found" is not represented here; lookups report absence through
/// their return values.
pub enum FetchError {
    /// The transport could not produce a response body (connection failure,
    /// non-success status).
    #[error("retrieving blocks manifest from {url}")]
    Retrieval {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The response body was not a well-formed catalog document.
    #[error("blocks manifest from {url} is not a valid catalog document")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Retrieval seam: fetch the text body at a URL.
///
/// Production code uses `HttpTransport`; tests inject fakes so the client's
/// replace-on-success behavior can be exercised without a network.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_text(&self, url: &str) -> anyhow::Result<String>;
}

/// `reqwest`-backed transport. Timeout behavior is whatever the underlying
/// client was built with; nothing is added here.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Share an existing `reqwest::Client` (connection pool, timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_text(&self, url: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("GET {url} returned an error status"))?;
        response
            .text()
            .await
            .with_context(|| format!("reading response body from {url}"))
    }
}

/// Holds the manifest URL, the transport, and the current catalog.
pub struct CatalogClient {
    manifest_url: String,
    transport: Box<dyn Transport>,
    catalog: Option<Catalog>,
}

impl CatalogClient {
    /// Client against `manifest_url` using the HTTP transport.
    pub fn new(manifest_url: impl Into<String>) -> Self {
        Self::with_transport(manifest_url, Box::new(HttpTransport::new()))
    }

    /// Client with an injected transport (used by tests).
    pub fn with_transport(manifest_url: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            manifest_url: manifest_url.into(),
            transport,
            catalog: None,
        }
    }

    /// The configured manifest URL.
    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    /// The currently held catalog, if one has been retrieved.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Fetch the manifest and replace the held catalog in full.
    ///
    /// On failure the previously held catalog is retained: the slot is only
    /// assigned after the body parses, so callers never observe a partial
    /// update.
    pub async fn retrieve(&mut self) -> Result<(), FetchError> {
        debug!(url = %self.manifest_url, "retrieving blocks manifest");
        let body = self
            .transport
            .fetch_text(&self.manifest_url)
            .await
            .map_err(|source| FetchError::Retrieval {
                url: self.manifest_url.clone(),
                source: source.into(),
            })?;
        let catalog = parse_catalog(&body).map_err(|source| FetchError::Parse {
            url: self.manifest_url.clone(),
            source,
        })?;
        debug!(blocks = catalog.blocks.len(), "catalog replaced");
        self.catalog = Some(catalog);
        Ok(())
    }

    /// Lookup against the held catalog; `None` before the first retrieve.
    pub fn find_block(&self, identifier: &str) -> Option<&BlockEntry> {
        self.catalog.as_ref()?.find_block(identifier)
    }

    /// Human-readable description of a block.
    ///
    /// With `refresh` the manifest is re-fetched first and any fetch error
    /// aborts the lookup. Returns `None` when the block is missing, has no
    /// description, or nothing has been retrieved yet.
    pub async fn block_description(
        &mut self,
        identifier: &str,
        refresh: bool,
    ) -> Result<Option<String>, FetchError> {
        if refresh {
            self.retrieve().await?;
        }
        Ok(self
            .find_block(identifier)
            .and_then(|block| block.block_schema.short_description.clone()))
    }

    /// Names of a block's input properties tagged with `kind`, ascending.
    ///
    /// A missing block (or an unretrieved catalog) yields an empty vector,
    /// distinguishing "block missing" from a failed refresh.
    pub async fn input_properties_of_kind(
        &mut self,
        identifier: &str,
        kind: &str,
        refresh: bool,
    ) -> Result<Vec<String>, FetchError> {
        if refresh {
            self.retrieve().await?;
        }
        Ok(self
            .find_block(identifier)
            .map(|block| block.input_properties_of_kind(kind))
            .unwrap_or_default())
    }
}
