//! Site commands shared by the CLI subcommands.
//!
//! Each command loads what it needs from a [`SiteConfig`]: the content store
//! from the built-in catalog or `catalog_path`, and the assistant from `[ai]`.

use std::path::PathBuf;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::assistant::{AssistantDispatcher, GenerationClient, GenerationError};
use crate::config::{ConfigError, ConfigLoader, SiteConfig};
use crate::content::{catalog, Catalog, ContentError, ContentStore};
use crate::web::{AppState, FolioServer, ServerError};

/// Errors that can occur while running a site command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Content could not be loaded.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    /// The assistant could not be built or failed to answer.
    #[error("Assistant error: {0}")]
    Generation(#[from] GenerationError),
    /// The HTTP server failed.
    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}

/// Load configuration from an explicit path or the default search paths.
///
/// # Errors
///
/// Returns an error if a config file exists but is invalid.
pub fn load_config(path: Option<PathBuf>) -> Result<SiteConfig, ConfigError> {
    let loader = path.map_or_else(ConfigLoader::new, ConfigLoader::with_path);
    loader.load()
}

/// Build the content store from `catalog_path`, or the built-in catalog.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or contains duplicate slugs.
pub fn load_store(config: &SiteConfig) -> Result<ContentStore, ContentError> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => catalog::builtin()?,
    };
    ContentStore::from_catalog(catalog)
}

/// Build the assistant for `store` from the `[ai]` section.
///
/// # Errors
///
/// Returns `GenerationError::MissingApiKey` if the API key variable is unset.
pub fn build_assistant(
    config: &SiteConfig,
    store: &ContentStore,
) -> Result<AssistantDispatcher, GenerationError> {
    let client = GenerationClient::from_config(config.ai.clone())?;
    Ok(AssistantDispatcher::from_store(
        Arc::new(client),
        store,
        &config.profile,
    ))
}

/// Serve the HTTP API until `cancel` is triggered.
///
/// A missing API key disables the chat endpoint instead of failing.
///
/// # Errors
///
/// Returns an error if content cannot be loaded or the server fails.
pub async fn serve(config: SiteConfig, cancel: CancellationToken) -> Result<(), CommandError> {
    let store = load_store(&config)?;
    let state = match build_assistant(&config, &store) {
        Ok(assistant) => {
            crate::display::print_server_start(&config.server.address(), Some(&config.ai.model));
            AppState::with_assistant(store, assistant)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Assistant disabled");
            crate::display::print_server_start(&config.server.address(), None);
            AppState::new(store)
        }
    };

    FolioServer::new(state, cancel)
        .with_config(config.server)
        .run()
        .await?;
    Ok(())
}

/// Ask the assistant a single question with no prior history.
///
/// # Errors
///
/// Returns an error if the assistant cannot be built or the call fails.
pub async fn ask(config: &SiteConfig, message: &str) -> Result<String, CommandError> {
    let store = load_store(config)?;
    let assistant = build_assistant(config, &store)?;
    Ok(assistant.respond(&[], message).await?)
}
