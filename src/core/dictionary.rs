// src/core/dictionary.rs
use crate::core::types::{CardType, CategoryConfig, FullConfig};

/// The two-tier translation dictionary: a read-mostly default layer
/// (published dictionaries, populated by fetch collaborators) overlaid by
/// the user's own corrections. Resolution never mutates the default layer;
/// `save_override` and `import` are the only mutators and touch only the
/// user layer.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLayer {
    default: FullConfig,
    user: FullConfig,
}

impl DictionaryLayer {
    pub fn new(default: FullConfig, user: FullConfig) -> Self {
        Self { default, user }
    }

    /// The dictionary view a resolution consults for one category. The
    /// overlay is computed lazily per lookup, so overrides saved between
    /// calls are visible immediately and nothing needs invalidating.
    pub fn effective(&self, category: CardType) -> EffectiveConfig<'_> {
        EffectiveConfig {
            default: self.default.get(&category),
            user: self.user.get(&category),
        }
    }

    /// Records a user correction, effective for the next resolution.
    pub fn save_override(&mut self, category: CardType, key: &str, japanese: &str) {
        self.user
            .entry(category)
            .or_default()
            .insert(key.to_string(), japanese.to_string());
    }

    /// Merges an imported snapshot into the user layer, category by
    /// category. Imported entries win on key collision; categories absent
    /// from the snapshot are left untouched.
    pub fn import(&mut self, snapshot: FullConfig) {
        for (category, entries) in snapshot {
            self.user.entry(category).or_default().extend(entries);
        }
    }

    /// Replaces one category of the default layer (lazy per-session
    /// population by the fetch collaborator).
    pub fn set_default_category(&mut self, category: CardType, entries: CategoryConfig) {
        self.default.insert(category, entries);
    }

    pub fn set_defaults(&mut self, config: FullConfig) {
        self.default = config;
    }

    pub fn user_config(&self) -> &FullConfig {
        &self.user
    }

    pub fn set_user_config(&mut self, config: FullConfig) {
        self.user = config;
    }

    /// Materializes the full merged view, all categories (the shape the
    /// mapping endpoint returns).
    pub fn merged(&self) -> FullConfig {
        let mut out = self.default.clone();
        for (category, entries) in &self.user {
            out.entry(*category).or_default().extend(entries.clone());
        }
        out
    }
}

/// Borrowed overlay of one category: user entries shadow default entries.
#[derive(Debug, Clone, Copy)]
pub struct EffectiveConfig<'a> {
    default: Option<&'a CategoryConfig>,
    user: Option<&'a CategoryConfig>,
}

impl<'a> EffectiveConfig<'a> {
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.user
            .and_then(|m| m.get(key))
            .or_else(|| self.default.and_then(|m| m.get(key)))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(entries: &[(&str, &str)]) -> CategoryConfig {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn user_entries_shadow_default_entries() {
        let mut layer = DictionaryLayer::default();
        layer.set_default_category(CardType::Ygo, config(&[("dark magician", "デフォルト")]));
        layer.save_override(CardType::Ygo, "dark magician", "ブラック・マジシャン");

        let eff = layer.effective(CardType::Ygo);
        assert_eq!(eff.get("dark magician"), Some("ブラック・マジシャン"));
    }

    #[test]
    fn default_entries_visible_without_user_entry() {
        let mut layer = DictionaryLayer::default();
        layer.set_default_category(CardType::Mtg, config(&[("black lotus", "ブラック・ロータス")]));

        let eff = layer.effective(CardType::Mtg);
        assert_eq!(eff.get("black lotus"), Some("ブラック・ロータス"));
        assert_eq!(eff.get("mox ruby"), None);
    }

    #[test]
    fn save_override_is_effective_immediately() {
        let mut layer = DictionaryLayer::default();
        assert_eq!(layer.effective(CardType::Digi).get("agumon"), None);

        layer.save_override(CardType::Digi, "agumon", "アグモン");
        assert_eq!(layer.effective(CardType::Digi).get("agumon"), Some("アグモン"));
    }

    #[test]
    fn import_merges_per_category() {
        let mut layer = DictionaryLayer::default();
        layer.save_override(CardType::Mtg, "bar", "バー");
        layer.save_override(CardType::Ygo, "kept", "キープ");

        let mut snapshot = FullConfig::new();
        snapshot.insert(CardType::Mtg, config(&[("foo", "フー")]));
        layer.import(snapshot);

        let user = layer.user_config();
        assert_eq!(user[&CardType::Mtg]["bar"], "バー");
        assert_eq!(user[&CardType::Mtg]["foo"], "フー");
        // Categories absent from the import are untouched.
        assert_eq!(user[&CardType::Ygo]["kept"], "キープ");
    }

    #[test]
    fn import_overrides_existing_user_entries() {
        let mut layer = DictionaryLayer::default();
        layer.save_override(CardType::Mtg, "foo", "古い");

        let mut snapshot = FullConfig::new();
        snapshot.insert(CardType::Mtg, config(&[("foo", "フー")]));
        layer.import(snapshot);

        assert_eq!(layer.effective(CardType::Mtg).get("foo"), Some("フー"));
    }

    #[test]
    fn merged_view_prefers_user_layer() {
        let mut layer = DictionaryLayer::default();
        layer.set_default_category(CardType::Ygo, config(&[("a", "デ"), ("b", "ブ")]));
        layer.save_override(CardType::Ygo, "a", "ユ");

        let merged = layer.merged();
        assert_eq!(merged[&CardType::Ygo]["a"], "ユ");
        assert_eq!(merged[&CardType::Ygo]["b"], "ブ");
    }
}
