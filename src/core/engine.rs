// src/core/engine.rs
use crate::core::dictionary::DictionaryLayer;
use crate::core::normalizer::{normalize, normalize_key};
use crate::core::resolver::resolve;
use crate::core::romanizer::KatakanaEngine;
use crate::core::types::{CardType, FullConfig, RecentSearch, TranslationResult};
use crate::links::{price_charting_url, yuyutei_url};
use crate::persistence::{
    load_default_config, load_session, read_json_config, save_session, write_json_config,
    PersistenceError, SessionState,
};
use crate::recent::RecentSearches;
use std::path::{Path, PathBuf};

/// One finished search: the resolved text plus both marketplace links.
#[derive(Debug, Clone)]
pub struct CardSearch {
    pub normalized_name: String,
    pub translation: TranslationResult,
    pub yuyutei_url: String,
    pub price_charting_url: String,
}

/// The full client-side engine: layered dictionary, romanization fallback,
/// recent-search list and session persistence.
pub struct ResolverEngine {
    dictionary: DictionaryLayer,
    romanizer: KatakanaEngine,
    recent: RecentSearches,
    session_path: Option<PathBuf>,
}

impl ResolverEngine {
    pub fn new() -> Self {
        Self {
            dictionary: DictionaryLayer::default(),
            romanizer: KatakanaEngine::new(),
            recent: RecentSearches::new(),
            session_path: None,
        }
    }

    /// Restores the user layer and recent searches from a session snapshot,
    /// or starts fresh if the snapshot is absent or unreadable.
    pub fn from_file_or_new(path: &Path) -> Self {
        let mut engine = Self::new();
        match load_session(path) {
            Ok(state) => {
                engine.dictionary.set_user_config(state.user_config);
                engine.recent = RecentSearches::from_items(state.recent);
            }
            Err(e) => log::debug!("starting fresh session ({e})"),
        }
        engine.session_path = Some(path.to_path_buf());
        engine
    }

    /// Loads the published default dictionary. Absent resource -> empty.
    pub fn load_defaults(&mut self, path: &Path) {
        self.dictionary.set_defaults(load_default_config(path));
    }

    pub fn set_defaults(&mut self, config: FullConfig) {
        self.dictionary.set_defaults(config);
    }

    /// Resolves one card and records it in the recent list. Returns `None`
    /// for empty input (the "no input, skip resolution" contract).
    pub fn resolve_card(
        &mut self,
        card_type: CardType,
        raw_name: &str,
        manual_override: Option<&str>,
    ) -> Option<CardSearch> {
        let normalized = normalize(raw_name);
        if normalized.is_empty() {
            return None;
        }

        let translation = resolve(
            &normalized,
            manual_override,
            &self.dictionary.effective(card_type),
            &self.romanizer,
        );

        self.recent.push(RecentSearch::new(
            &normalize_key(&normalized),
            card_type,
            &translation.japanese_text,
        ));

        Some(CardSearch {
            yuyutei_url: yuyutei_url(card_type, &translation.japanese_text),
            price_charting_url: price_charting_url(&normalized),
            normalized_name: normalized,
            translation,
        })
    }

    /// Saves a manual correction into the user layer, keyed on the
    /// normalized name. Effective for the next resolution.
    pub fn save_override(&mut self, card_type: CardType, raw_name: &str, japanese: &str) {
        let key = normalize_key(raw_name);
        if key.is_empty() || japanese.trim().is_empty() {
            return;
        }
        self.dictionary.save_override(card_type, &key, japanese.trim());
    }

    pub fn recent_searches(&self) -> &[RecentSearch] {
        self.recent.items()
    }

    pub fn dictionary(&self) -> &DictionaryLayer {
        &self.dictionary
    }

    /// Writes the user layer as a JSON snapshot (the import/export format).
    pub fn export_user_config(&self, path: &Path) -> Result<(), PersistenceError> {
        write_json_config(self.dictionary.user_config(), path)
    }

    /// Merges a JSON snapshot into the user layer (per-category, imported
    /// entries win).
    pub fn import_config(&mut self, path: &Path) -> Result<(), PersistenceError> {
        let snapshot = read_json_config(path)?;
        self.dictionary.import(snapshot);
        Ok(())
    }

    pub fn save_session(&self) -> Result<(), PersistenceError> {
        if let Some(path) = &self.session_path {
            let state = SessionState {
                user_config: self.dictionary.user_config().clone(),
                recent: self.recent.items().to_vec(),
            };
            save_session(&state, path)
        } else {
            Ok(())
        }
    }
}

impl Default for ResolverEngine {
    fn default() -> Self {
        Self::new()
    }
}
