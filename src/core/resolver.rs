// src/core/resolver.rs
use crate::core::corrector::{correct, known_override};
use crate::core::dictionary::EffectiveConfig;
use crate::core::normalizer::normalize_key;
use crate::core::romanizer::TokenToKana;
use crate::core::types::TranslationResult;

/// Resolves a normalized English name to Japanese text.
///
/// Precedence, strictly in this order:
/// 1. a non-empty (trimmed) manual override is returned verbatim;
/// 2. an exact whole-phrase hit in the effective dictionary;
/// 3. per-token: dictionary hit, else known-name exception, else
///    romanize + correct — tokens concatenate with no separator, matching
///    how the target sites index multi-word names.
///
/// `not_in_list` is true iff at least one token used tier 3's fallback
/// (i.e. was not found in the effective dictionary). Total over all inputs;
/// an empty name resolves to empty text.
pub fn resolve(
    name: &str,
    manual_override: Option<&str>,
    config: &EffectiveConfig<'_>,
    kana: &impl TokenToKana,
) -> TranslationResult {
    if let Some(override_text) = manual_override {
        let trimmed = override_text.trim();
        if !trimmed.is_empty() {
            return TranslationResult {
                japanese_text: trimmed.to_string(),
                not_in_list: false,
            };
        }
    }

    let full_key = normalize_key(name);
    if let Some(japanese) = config.get(&full_key) {
        return TranslationResult {
            japanese_text: japanese.to_string(),
            not_in_list: false,
        };
    }

    let mut japanese_text = String::new();
    let mut not_in_list = false;
    for token in full_key.split_whitespace() {
        match config.get(token) {
            Some(japanese) => japanese_text.push_str(japanese),
            None => {
                not_in_list = true;
                match known_override(token) {
                    Some(japanese) => japanese_text.push_str(japanese),
                    None => japanese_text.push_str(&correct(&kana.to_katakana(token))),
                }
            }
        }
    }

    TranslationResult {
        japanese_text,
        not_in_list,
    }
}
