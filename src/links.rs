// src/links.rs
use crate::core::types::CardType;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const PRICE_CHARTING_SEARCH: &str = "https://www.pricecharting.com/search-products";
const YUYUTEI_SELL: &str = "https://yuyu-tei.jp/sell";

/// PriceCharting search link for the (normalized) English name.
pub fn price_charting_url(normalized_name: &str) -> String {
    let query = normalized_name.replace(' ', "+");
    format!("{PRICE_CHARTING_SEARCH}?q={query}&type=prices")
}

/// Yuyutei sell-price search link for the Japanese text, under the
/// category's site section.
pub fn yuyutei_url(card_type: CardType, japanese_text: &str) -> String {
    let encoded = utf8_percent_encode(japanese_text, NON_ALPHANUMERIC);
    format!(
        "{YUYUTEI_SELL}/{}/s/search?search_word={encoded}",
        card_type.site_slug()
    )
}
