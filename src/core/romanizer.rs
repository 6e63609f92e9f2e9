// src/core/romanizer.rs

/// Injected transliteration capability. The resolver and the population tool
/// only depend on this trait, so tests can swap in a deterministic stub.
pub trait TokenToKana {
    fn to_katakana(&self, token: &str) -> String;
}

/// A Romanized-input to katakana converter.
///
/// Parses greedily: optional sokuon (doubled consonant), then the longest
/// consonant cluster that forms a romaji syllable with the following vowel.
/// Anything that does not form a syllable (stray "d", "th", "l", trailing
/// "y"...) passes through as a literal Latin character. Those literals are
/// exactly what the katakana corrector cleans up afterwards.
pub struct KatakanaEngine;

impl KatakanaEngine {
    pub fn new() -> Self {
        Self
    }

    /// Transliterates a full token. Pure and total; empty input stays empty.
    pub fn transliterate(&self, token: &str) -> String {
        let chars: Vec<char> = token.to_lowercase().chars().collect();
        let mut out = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '-' {
                out.push('ー');
                i += 1;
                continue;
            }
            if let Some(kana) = standalone_vowel(c) {
                out.push(kana);
                i += 1;
                continue;
            }
            if !c.is_ascii_alphabetic() {
                out.push(c);
                i += 1;
                continue;
            }

            // Doubled consonant -> sokuon ("kka" -> ッカ). "nn" and "ll" are
            // excluded: "n" doubles as the syllabic ン and "ll" is left for
            // the corrector.
            if is_geminable(c) && chars.get(i + 1) == Some(&c) {
                out.push('ッ');
                i += 1;
                continue;
            }

            let cluster_len = if matches!(chars.get(i + 1), Some(&next) if is_digraph(c, next)) {
                2
            } else {
                1
            };
            let cluster: String = chars[i..i + cluster_len].iter().collect();

            if let Some(&v) = chars.get(i + cluster_len) {
                if is_vowel(v) {
                    if let Some(kana) = syllable(&cluster, v) {
                        out.push_str(kana);
                        i += cluster_len + 1;
                        continue;
                    }
                }
            }

            // Bare "n" before a consonant or at end of token is the syllabic ン.
            if c == 'n' {
                out.push('ン');
            } else {
                out.push(c);
            }
            i += 1;
        }

        out
    }
}

impl TokenToKana for KatakanaEngine {
    fn to_katakana(&self, token: &str) -> String {
        self.transliterate(token)
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn standalone_vowel(c: char) -> Option<char> {
    match c {
        'a' => Some('ア'),
        'i' => Some('イ'),
        'u' => Some('ウ'),
        'e' => Some('エ'),
        'o' => Some('オ'),
        _ => None,
    }
}

fn is_geminable(c: char) -> bool {
    matches!(
        c,
        'k' | 'g' | 's' | 'z' | 'j' | 't' | 'd' | 'h' | 'f' | 'b' | 'p' | 'm' | 'r' | 'c' | 'v' | 'w'
    )
}

fn is_digraph(first: char, second: char) -> bool {
    matches!(
        (first, second),
        ('c', 'h')
            | ('s', 'h')
            | ('t', 's')
            | ('k', 'y')
            | ('g', 'y')
            | ('n', 'y')
            | ('h', 'y')
            | ('b', 'y')
            | ('p', 'y')
            | ('m', 'y')
            | ('r', 'y')
    )
}

fn syllable(cluster: &str, vowel: char) -> Option<&'static str> {
    let kana = match (cluster, vowel) {
        ("k", 'a') => "カ", ("k", 'i') => "キ", ("k", 'u') => "ク", ("k", 'e') => "ケ", ("k", 'o') => "コ",
        ("g", 'a') => "ガ", ("g", 'i') => "ギ", ("g", 'u') => "グ", ("g", 'e') => "ゲ", ("g", 'o') => "ゴ",
        ("s", 'a') => "サ", ("s", 'i') => "シ", ("s", 'u') => "ス", ("s", 'e') => "セ", ("s", 'o') => "ソ",
        ("z", 'a') => "ザ", ("z", 'i') => "ジ", ("z", 'u') => "ズ", ("z", 'e') => "ゼ", ("z", 'o') => "ゾ",
        ("j", 'a') => "ジャ", ("j", 'i') => "ジ", ("j", 'u') => "ジュ", ("j", 'e') => "ジェ", ("j", 'o') => "ジョ",
        ("t", 'a') => "タ", ("t", 'i') => "チ", ("t", 'u') => "ツ", ("t", 'e') => "テ", ("t", 'o') => "ト",
        ("d", 'a') => "ダ", ("d", 'i') => "ヂ", ("d", 'u') => "ヅ", ("d", 'e') => "デ", ("d", 'o') => "ド",
        ("n", 'a') => "ナ", ("n", 'i') => "ニ", ("n", 'u') => "ヌ", ("n", 'e') => "ネ", ("n", 'o') => "ノ",
        ("h", 'a') => "ハ", ("h", 'i') => "ヒ", ("h", 'u') => "フ", ("h", 'e') => "ヘ", ("h", 'o') => "ホ",
        ("f", 'a') => "ファ", ("f", 'i') => "フィ", ("f", 'u') => "フ", ("f", 'e') => "フェ", ("f", 'o') => "フォ",
        ("b", 'a') => "バ", ("b", 'i') => "ビ", ("b", 'u') => "ブ", ("b", 'e') => "ベ", ("b", 'o') => "ボ",
        ("p", 'a') => "パ", ("p", 'i') => "ピ", ("p", 'u') => "プ", ("p", 'e') => "ペ", ("p", 'o') => "ポ",
        ("m", 'a') => "マ", ("m", 'i') => "ミ", ("m", 'u') => "ム", ("m", 'e') => "メ", ("m", 'o') => "モ",
        ("y", 'a') => "ヤ", ("y", 'u') => "ユ", ("y", 'o') => "ヨ",
        ("r", 'a') => "ラ", ("r", 'i') => "リ", ("r", 'u') => "ル", ("r", 'e') => "レ", ("r", 'o') => "ロ",
        ("w", 'a') => "ワ", ("w", 'o') => "ヲ",
        ("v", 'a') => "ヴァ", ("v", 'i') => "ヴィ", ("v", 'u') => "ヴ", ("v", 'e') => "ヴェ", ("v", 'o') => "ヴォ",
        ("sh", 'a') => "シャ", ("sh", 'i') => "シ", ("sh", 'u') => "シュ", ("sh", 'e') => "シェ", ("sh", 'o') => "ショ",
        ("ch", 'a') => "チャ", ("ch", 'i') => "チ", ("ch", 'u') => "チュ", ("ch", 'e') => "チェ", ("ch", 'o') => "チョ",
        ("ts", 'a') => "ツァ", ("ts", 'i') => "ツィ", ("ts", 'u') => "ツ", ("ts", 'e') => "ツェ", ("ts", 'o') => "ツォ",
        ("ky", 'a') => "キャ", ("ky", 'u') => "キュ", ("ky", 'o') => "キョ",
        ("gy", 'a') => "ギャ", ("gy", 'u') => "ギュ", ("gy", 'o') => "ギョ",
        ("ny", 'a') => "ニャ", ("ny", 'u') => "ニュ", ("ny", 'o') => "ニョ",
        ("hy", 'a') => "ヒャ", ("hy", 'u') => "ヒュ", ("hy", 'o') => "ヒョ",
        ("by", 'a') => "ビャ", ("by", 'u') => "ビュ", ("by", 'o') => "ビョ",
        ("py", 'a') => "ピャ", ("py", 'u') => "ピュ", ("py", 'o') => "ピョ",
        ("my", 'a') => "ミャ", ("my", 'u') => "ミュ", ("my", 'o') => "ミョ",
        ("ry", 'a') => "リャ", ("ry", 'u') => "リュ", ("ry", 'o') => "リョ",
        _ => return None,
    };
    Some(kana)
}
