// tests/resolver_flow.rs
//
// End-to-end flows through the engine and the lookup-service boundary.

use tcg_core::core::types::{CardType, CategoryConfig, FullConfig};
use tcg_core::service::{LookupService, ResolveRequest};
use tcg_core::ResolverEngine;

fn ygo_defaults() -> FullConfig {
    let mut ygo = CategoryConfig::new();
    ygo.insert("dark magician".to_string(), "ブラック・マジシャン".to_string());
    let mut config = FullConfig::new();
    config.insert(CardType::Ygo, ygo);
    config
}

#[test]
fn known_ygo_card_resolves_from_the_default_dictionary() {
    let mut engine = ResolverEngine::new();
    engine.set_defaults(ygo_defaults());

    let search = engine
        .resolve_card(CardType::Ygo, "Dark Magician", None)
        .expect("non-empty input");

    assert_eq!(search.translation.japanese_text, "ブラック・マジシャン");
    assert!(!search.translation.not_in_list);
    assert!(search
        .yuyutei_url
        .starts_with("https://yuyu-tei.jp/sell/ygo/s/search?search_word="));
    assert_eq!(
        search.price_charting_url,
        "https://www.pricecharting.com/search-products?q=Dark+Magician&type=prices"
    );
}

#[test]
fn unknown_digimon_romanizes_with_corrections() {
    let mut engine = ResolverEngine::new();

    let search = engine
        .resolve_card(CardType::Digi, "Seadramon", None)
        .expect("non-empty input");

    // The stray Latin "d" must have been corrected into ドラ.
    assert!(search.translation.japanese_text.contains("ドラ"));
    assert!(!search.translation.japanese_text.contains('d'));
    assert_eq!(search.translation.japanese_text, "セアドラモン");
    assert!(search.translation.not_in_list);
}

#[test]
fn mixed_known_and_unknown_tokens_flag_the_result() {
    let mut engine = ResolverEngine::new();
    engine.save_override(CardType::Digi, "greymon", "グレイモン");

    let search = engine
        .resolve_card(CardType::Digi, "metal greymon", None)
        .expect("non-empty input");

    // "greymon" came from the dictionary, "metal" fell back, so the whole
    // result is flagged approximate.
    assert!(search.translation.japanese_text.ends_with("グレイモン"));
    assert!(search.translation.not_in_list);
}

#[test]
fn saved_override_changes_the_next_resolution() {
    let mut engine = ResolverEngine::new();

    let before = engine
        .resolve_card(CardType::Onepiece, "Nami", None)
        .unwrap();
    assert!(before.translation.not_in_list);

    engine.save_override(CardType::Onepiece, "Nami", "ナミ");
    let after = engine
        .resolve_card(CardType::Onepiece, "Nami", None)
        .unwrap();
    assert_eq!(after.translation.japanese_text, "ナミ");
    assert!(!after.translation.not_in_list);
}

#[test]
fn recent_list_dedups_across_repeated_searches() {
    let mut engine = ResolverEngine::new();
    engine.resolve_card(CardType::Ygo, "Dark Magician", None);
    engine.resolve_card(CardType::Ygo, "Blue-Eyes", None);
    engine.resolve_card(CardType::Ygo, "dark   magician", None);

    let recent = engine.recent_searches();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].card_name, "dark magician");
}

#[test]
fn service_and_engine_agree_on_resolution() {
    let mut engine = ResolverEngine::new();
    engine.set_defaults(ygo_defaults());
    let engine_result = engine
        .resolve_card(CardType::Ygo, "Dark Magician", None)
        .unwrap();

    let mut service = LookupService::new(ygo_defaults(), FullConfig::new());
    let service_result = service
        .resolve(&ResolveRequest {
            card_name: "Dark Magician".to_string(),
            card_type: "ygo".to_string(),
            override_text: None,
        })
        .unwrap();

    assert_eq!(
        engine_result.translation.japanese_text,
        service_result.japanese
    );
    assert_eq!(
        engine_result.translation.not_in_list,
        service_result.not_in_list
    );
}
