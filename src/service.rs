// src/service.rs
//! The lookup-service boundary: what a thin HTTP layer would call. One
//! resolver serves both the client engine and this boundary; the service
//! just supplies the config it holds (the server-side mapping file) instead
//! of running its own reduced algorithm.

use crate::core::dictionary::DictionaryLayer;
use crate::core::normalizer::{normalize, normalize_key};
use crate::core::resolver::resolve;
use crate::core::romanizer::KatakanaEngine;
use crate::core::types::{CardType, FullConfig};
use crate::persistence::{load_default_config, write_json_config};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Rejected requests, surfaced to the transport layer as 400s.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("cardName is required")]
    MissingCardName,
    #[error("invalid cardType '{0}'")]
    InvalidCardType(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    pub card_name: String,
    pub card_type: String,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub override_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub japanese: String,
    pub not_in_list: bool,
}

/// Server-held resolution state: a published default layer plus the mapping
/// of overrides users have posted, persisted to a JSON file.
pub struct LookupService {
    dictionary: DictionaryLayer,
    romanizer: KatakanaEngine,
    mapping_path: Option<PathBuf>,
}

impl LookupService {
    pub fn new(default_config: FullConfig, server_mapping: FullConfig) -> Self {
        let mut dictionary = DictionaryLayer::default();
        dictionary.set_defaults(default_config);
        dictionary.set_user_config(server_mapping);
        Self {
            dictionary,
            romanizer: KatakanaEngine::new(),
            mapping_path: None,
        }
    }

    /// Loads both layers from disk. Missing or malformed files are empty
    /// mappings; posted overrides will be written back to `mapping_path`.
    pub fn from_files(default_path: &std::path::Path, mapping_path: &std::path::Path) -> Self {
        let mut service = Self::new(
            load_default_config(default_path),
            load_default_config(mapping_path),
        );
        service.mapping_path = Some(mapping_path.to_path_buf());
        service
    }

    /// Resolves one request. A provided override is stored into the
    /// server-held mapping before resolution, so it wins now and on every
    /// later request for the same name.
    pub fn resolve(&mut self, request: &ResolveRequest) -> Result<ResolveResponse, ServiceError> {
        let normalized = normalize(&request.card_name);
        if normalized.is_empty() {
            return Err(ServiceError::MissingCardName);
        }
        let card_type: CardType = request
            .card_type
            .parse()
            .map_err(|()| ServiceError::InvalidCardType(request.card_type.clone()))?;

        let override_text = request
            .override_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        if let Some(japanese) = override_text {
            self.dictionary
                .save_override(card_type, &normalize_key(&normalized), japanese);
            self.persist_mapping();
        }

        let translation = resolve(
            &normalized,
            override_text,
            &self.dictionary.effective(card_type),
            &self.romanizer,
        );
        Ok(ResolveResponse {
            japanese: translation.japanese_text,
            not_in_list: translation.not_in_list,
        })
    }

    /// The entire server-held dictionary, all categories, overrides merged.
    pub fn mapping(&self) -> FullConfig {
        self.dictionary.merged()
    }

    // Write failures are logged, never surfaced: the override is already
    // live in memory and the next successful write catches up.
    fn persist_mapping(&self) {
        if let Some(path) = &self.mapping_path {
            if let Err(e) = write_json_config(self.dictionary.user_config(), path) {
                log::error!("failed to write mapping file {}: {e}", path.display());
            }
        }
    }
}
