//! Pokédex Loader
//!
//! Orchestrates the two network phases of a load: one collection-page
//! request, then a concurrent fan-out of per-Pokémon detail requests joined
//! all-or-nothing. Either every detail arrives and the canonical card list
//! is built in collection order, or the whole load fails with one error.

use crate::api::{PokemonDetail, SummaryPage, DEFAULT_BASE_URL};
use crate::error::{DexGridError, Result};
use crate::pokedex::PokemonCard;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

// ============================================================================
// Loader Configuration
// ============================================================================

/// Configuration for a load
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Page size requested from the collection endpoint (first page only)
    pub limit: usize,
    /// Collection API base, without trailing slash
    pub base_url: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            limit: 20,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// ============================================================================
// Pokedex Loader
// ============================================================================

/// Fetches one page of Pokémon and assembles the canonical card list
pub struct PokedexLoader {
    client: reqwest::Client,
    config: LoadConfig,
    /// Cancellation flag. A cancelled load never publishes results.
    cancelled: Arc<AtomicBool>,
}

impl PokedexLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            config: LoadConfig::default(),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Configure the loader
    pub fn with_config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    /// Get cancellation token, shareable across threads
    pub fn cancel_token(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    /// Cancel the load
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Perform the load: collection page, then the detail fan-out.
    ///
    /// No retries, no timeout, no pagination beyond the first page. Any
    /// single failure aborts the entire load.
    pub async fn load(&self) -> Result<Vec<PokemonCard>> {
        let start = Instant::now();
        let list_url = format!(
            "{}/pokemon?limit={}",
            self.config.base_url, self.config.limit
        );

        debug!(url = %list_url, "fetching collection page");
        let page: SummaryPage = self.get_json(&list_url).await?;
        info!(summaries = page.results.len(), "collection page fetched");

        if self.is_cancelled() {
            return Err(DexGridError::Cancelled);
        }

        // Structured all-or-nothing join: one future per summary, all
        // in flight at once, first error fails the batch.
        let details: Vec<PokemonDetail> = futures::future::try_join_all(
            page.results
                .iter()
                .map(|summary| self.fetch_detail(&summary.url)),
        )
        .await?;

        if self.is_cancelled() {
            return Err(DexGridError::Cancelled);
        }

        let cards: Vec<PokemonCard> = details.into_iter().map(PokemonCard::from).collect();
        info!(
            cards = cards.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "load complete"
        );

        Ok(cards)
    }

    /// Perform the load on a freshly built single-threaded runtime.
    ///
    /// The CLI commands and the TUI background thread are synchronous; the
    /// fan-out still runs concurrently because the requests are futures on
    /// one reactor, not threads.
    pub fn load_blocking(&self) -> Result<Vec<PokemonCard>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| DexGridError::Runtime(e.to_string()))?;
        runtime.block_on(self.load())
    }

    async fn fetch_detail(&self, url: &str) -> Result<PokemonDetail> {
        debug!(url = %url, "fetching detail");
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(url = %url, status = %status, "non-success response");
            return Err(DexGridError::BadStatus {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| DexGridError::MalformedPayload {
            url: url.to_string(),
            detail: e.to_string(),
        })
    }
}

impl Default for PokedexLoader {
    fn default() -> Self {
        Self::new()
    }
}
