// src/bin/fetch_names.rs
//
// Populates one category of the default dictionary from its public API and
// writes it in the configuration.json format ({"<category>": {en -> ja}}).
// Long-running sources checkpoint progress to disk and resume if the run
// was interrupted; the checkpoint is deleted on success.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::Duration;
use tcg_core::core::corrector::{correct, known_override};
use tcg_core::core::normalizer::{normalize, normalize_key};
use tcg_core::core::romanizer::{KatakanaEngine, TokenToKana};
use tcg_core::core::types::{CardType, CategoryConfig, FullConfig};
use tcg_core::persistence::write_json_config;
use thiserror::Error;

const POKEMON_SPECIES_LIST: &str = "https://pokeapi.co/api/v2/pokemon-species?limit=2000";
const YGO_NAME_INDEX_EN: &str = "https://db.ygorganization.com/data/idx/card/name/en";
const YGO_NAME_INDEX_JA: &str = "https://db.ygorganization.com/data/idx/card/name/ja";
const DIGI_API_BASE: &str = "https://digi-api.com/api/v1/digimon";
const ONEPIECE_CHARACTERS: &str = "https://api.api-onepiece.com/v2/characters/en";

const POKEMON_BATCH_SIZE: usize = 15;
const DIGI_PAGE_SIZE: usize = 100;

#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unexpected response shape: {0}")]
    Shape(#[from] serde_json::Error),
    #[error("write failed: {0}")]
    Write(#[from] tcg_core::persistence::PersistenceError),
    #[error("no public Japanese-name source for '{0}'")]
    Unsupported(CardType),
    #[error("source returned no data")]
    EmptySource,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FetchCategory {
    Pokemon,
    Ygo,
    Digi,
    Onepiece,
    Mtg,
}

impl From<FetchCategory> for CardType {
    fn from(value: FetchCategory) -> Self {
        match value {
            FetchCategory::Pokemon => CardType::Pokemon,
            FetchCategory::Ygo => CardType::Ygo,
            FetchCategory::Digi => CardType::Digi,
            FetchCategory::Onepiece => CardType::Onepiece,
            FetchCategory::Mtg => CardType::Mtg,
        }
    }
}

#[derive(Parser)]
#[command(about = "Populate the default dictionary from public card APIs")]
struct Args {
    /// Category to fetch
    #[arg(value_enum)]
    category: FetchCategory,
    /// Directory for output and progress files
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,
}

/// Resumable checkpoint: entries collected so far plus a source cursor
/// (species index for PokeAPI, page number for digi-api).
#[derive(Debug, Default, Serialize, Deserialize)]
struct Progress {
    entries: CategoryConfig,
    cursor: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), FetchError> {
    let card_type: CardType = args.category.into();
    let client = reqwest::blocking::Client::builder()
        .user_agent("tcg-smart-links-fetch/1.0")
        .timeout(Duration::from_secs(120))
        .build()?;

    let progress_path = args.out_dir.join(format!("{card_type}-progress.json"));
    let output_path = args.out_dir.join(format!("{card_type}-output.json"));

    let entries = match args.category {
        FetchCategory::Pokemon => fetch_pokemon(&client, &progress_path)?,
        FetchCategory::Ygo => fetch_ygo(&client)?,
        FetchCategory::Digi => fetch_digi(&client, &progress_path)?,
        FetchCategory::Onepiece => fetch_onepiece(&client)?,
        FetchCategory::Mtg => return Err(FetchError::Unsupported(card_type)),
    };

    let mut output = FullConfig::new();
    let count = entries.len();
    output.insert(card_type, entries);
    write_json_config(&output, &output_path)?;
    let _ = std::fs::remove_file(&progress_path);

    log::info!("done: wrote {count} entries to {}", output_path.display());
    log::info!("merge the \"{card_type}\" object into data/configuration.json");
    Ok(())
}

fn load_progress(path: &Path) -> Progress {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn save_progress(progress: &Progress, path: &Path) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(progress)?)?;
    Ok(())
}

fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<T, FetchError> {
    Ok(client.get(url).send()?.error_for_status()?.json()?)
}

/// Romanized name -> katakana approximation, for sources with no Japanese
/// names. Same pipeline the resolver's fallback tier uses.
fn approximate_japanese(name: &str) -> String {
    let normalized = normalize(name);
    if let Some(japanese) = known_override(&normalize_key(&normalized)) {
        return japanese.to_string();
    }
    correct(&KatakanaEngine::new().to_katakana(&normalized))
}

// --- PokeAPI: species list, then per-species en/ja names ------------------

#[derive(Deserialize)]
struct SpeciesList {
    results: Vec<SpeciesRef>,
}

#[derive(Deserialize)]
struct SpeciesRef {
    name: String,
    url: String,
}

#[derive(Deserialize)]
struct Species {
    names: Vec<LocalizedName>,
}

#[derive(Deserialize)]
struct LocalizedName {
    name: String,
    language: NamedRef,
}

#[derive(Deserialize)]
struct NamedRef {
    name: String,
}

fn localized(names: &[LocalizedName], lang: &str) -> Option<String> {
    names
        .iter()
        .find(|n| n.language.name == lang)
        .map(|n| n.name.clone())
}

fn fetch_pokemon(
    client: &reqwest::blocking::Client,
    progress_path: &Path,
) -> Result<CategoryConfig, FetchError> {
    let mut progress = load_progress(progress_path);

    log::info!("fetching species list...");
    let list: SpeciesList = get_json(client, POKEMON_SPECIES_LIST)?;
    let total = list.results.len();
    if total == 0 {
        return Err(FetchError::EmptySource);
    }
    log::info!(
        "{total} species, resuming from index {} (batch size {POKEMON_BATCH_SIZE})",
        progress.cursor
    );

    while progress.cursor < total {
        let end = (progress.cursor + POKEMON_BATCH_SIZE).min(total);
        for species_ref in &list.results[progress.cursor..end] {
            match get_json::<Species>(client, &species_ref.url) {
                Ok(species) => {
                    let en = localized(&species.names, "en");
                    let ja = localized(&species.names, "ja");
                    if let (Some(en), Some(ja)) = (en, ja) {
                        progress.entries.insert(normalize_key(&en), ja);
                    }
                }
                Err(e) => log::warn!("skip {}: {e}", species_ref.name),
            }
        }
        progress.cursor = end;
        save_progress(&progress, progress_path)?;
        log::info!("  {}/{total}", progress.cursor);
        if progress.cursor < total {
            sleep(Duration::from_millis(200));
        }
    }

    Ok(progress.entries)
}

// --- YGOrganization: en and ja name->id indices, matched by card id -------

type NameIndex = HashMap<String, Vec<u64>>;

fn fetch_ygo(client: &reqwest::blocking::Client) -> Result<CategoryConfig, FetchError> {
    log::info!("fetching English name index...");
    let en_map: NameIndex = get_json(client, YGO_NAME_INDEX_EN)?;

    sleep(Duration::from_secs(3));
    log::info!("fetching Japanese name index (may take a minute)...");
    let mut ja_map: Option<NameIndex> = None;
    for attempt in 1..=3 {
        match get_json(client, YGO_NAME_INDEX_JA) {
            Ok(map) => {
                ja_map = Some(map);
                break;
            }
            Err(e) if attempt < 3 => {
                log::warn!("attempt {attempt} failed ({e}), retrying in 5s...");
                sleep(Duration::from_secs(5));
            }
            Err(e) => return Err(e),
        }
    }
    let ja_map = ja_map.ok_or(FetchError::EmptySource)?;

    // id -> Japanese name; first occurrence wins if an id appears under
    // multiple names.
    let mut id_to_ja: HashMap<u64, &str> = HashMap::new();
    for (ja_name, ids) in &ja_map {
        for id in ids {
            id_to_ja.entry(*id).or_insert_with(|| ja_name.trim());
        }
    }

    let mut entries = CategoryConfig::new();
    for (en_name, ids) in &en_map {
        let key = normalize_key(en_name);
        if key.is_empty() {
            continue;
        }
        if let Some(ja) = ids.iter().find_map(|id| id_to_ja.get(id)) {
            entries.insert(key, ja.to_string());
        }
    }

    log::info!("matched {} of {} English names", entries.len(), en_map.len());
    Ok(entries)
}

// --- digi-api: paged list, Japanese approximated ---------------------------

#[derive(Deserialize)]
struct DigiPage {
    #[serde(default)]
    content: Vec<DigiRef>,
    pageable: DigiPageable,
}

#[derive(Deserialize)]
struct DigiRef {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DigiPageable {
    total_pages: usize,
    total_elements: usize,
}

fn fetch_digi(
    client: &reqwest::blocking::Client,
    progress_path: &Path,
) -> Result<CategoryConfig, FetchError> {
    let mut progress = load_progress(progress_path);

    log::info!("fetching first page for totals...");
    let first: DigiPage = get_json(client, &digi_page_url(0))?;
    let total_pages = first.pageable.total_pages;
    if total_pages == 0 {
        return Err(FetchError::EmptySource);
    }
    log::info!(
        "{} Digimon across {total_pages} pages, resuming from page {}",
        first.pageable.total_elements,
        progress.cursor
    );

    while progress.cursor < total_pages {
        let page: DigiPage = get_json(client, &digi_page_url(progress.cursor))?;
        for item in &page.content {
            let Some(en) = item.name.as_deref().map(normalize) else {
                continue;
            };
            let key = normalize_key(&en);
            if !key.is_empty() && !progress.entries.contains_key(&key) {
                progress.entries.insert(key, approximate_japanese(&en));
            }
        }
        progress.cursor += 1;
        save_progress(&progress, progress_path)?;
        log::info!(
            "  page {}/{total_pages} ({} entries)",
            progress.cursor,
            progress.entries.len()
        );
        if progress.cursor < total_pages {
            sleep(Duration::from_millis(150));
        }
    }

    Ok(progress.entries)
}

fn digi_page_url(page: usize) -> String {
    format!("{DIGI_API_BASE}?pageSize={DIGI_PAGE_SIZE}&page={page}")
}

// --- api-onepiece: character list, Japanese approximated -------------------

#[derive(Deserialize)]
struct OnePieceCharacter {
    name: Option<String>,
}

fn fetch_onepiece(client: &reqwest::blocking::Client) -> Result<CategoryConfig, FetchError> {
    log::info!("fetching One Piece characters...");
    let list: Vec<OnePieceCharacter> = get_json(client, ONEPIECE_CHARACTERS)?;
    if list.is_empty() {
        return Err(FetchError::EmptySource);
    }

    let mut entries = CategoryConfig::new();
    for character in &list {
        let Some(en) = character.name.as_deref() else {
            continue;
        };
        let key = onepiece_key(en);
        if key.is_empty() {
            continue;
        }
        let ja = approximate_japanese(en);
        // "monkey d luffy" is also searched as "monkey.d.luffy".
        let dotted = key.replace(" d ", ".d.");
        if dotted != key {
            entries.insert(dotted, ja.clone());
        }
        entries.insert(key, ja);
    }

    Ok(entries)
}

/// One Piece names sometimes carry an alias after a slash ("Buggy / Le
/// Clown"); only the part before the slash is a useful key.
fn onepiece_key(name: &str) -> String {
    let base = name.split('/').next().unwrap_or(name);
    normalize_key(base)
}
