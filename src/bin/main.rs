use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tcg_core::core::types::CardType;
use tcg_core::{CardSearch, ResolverEngine};

const DEFAULT_CONFIG_PATH: &str = "data/configuration.json";

fn session_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("tcg-smart-links");
    path.push("session.bin");
    path
}

fn main() {
    env_logger::init();

    let mut engine = ResolverEngine::from_file_or_new(&session_path());
    engine.load_defaults(std::path::Path::new(DEFAULT_CONFIG_PATH));

    let mut card_type = CardType::Onepiece;
    let mut last_search: Option<(CardType, String)> = None;

    println!("TCG Smart Links. Type a card name, or 'help'. 'exit' saves and quits.");
    println!("---------------------------------------------------------------------");

    loop {
        print!("[{}] > ", card_type.label());
        stdout().flush().ok();

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let line = input.trim();

        match line {
            "exit" => break,
            "" => continue,
            "help" => print_help(),
            ":recent" => {
                for item in engine.recent_searches() {
                    println!("  {} ({}) -> {}", item.card_name, item.card_type.label(), item.japanese_text);
                }
                if engine.recent_searches().is_empty() {
                    println!("  (no recent searches)");
                }
            }
            s if s.starts_with(":type ") => match s[6..].trim().parse::<CardType>() {
                Ok(ct) => card_type = ct,
                Err(()) => {
                    let known: Vec<&str> = CardType::ALL.iter().map(|c| c.as_str()).collect();
                    println!("{} one of: {}", "Unknown card type.".red(), known.join(", "));
                }
            },
            s if s.starts_with(":save ") => {
                let japanese = s[6..].trim();
                match &last_search {
                    Some((ct, name)) if !japanese.is_empty() => {
                        engine.save_override(*ct, name, japanese);
                        println!("Saved override for '{}'.", name);
                    }
                    _ => println!("Nothing to save. Resolve a card first."),
                }
            }
            s if s.starts_with(":export ") => {
                match engine.export_user_config(std::path::Path::new(s[8..].trim())) {
                    Ok(()) => println!("Exported user config."),
                    Err(e) => println!("{} {e}", "Export failed:".red()),
                }
            }
            s if s.starts_with(":import ") => {
                match engine.import_config(std::path::Path::new(s[8..].trim())) {
                    Ok(()) => println!("Imported and merged."),
                    Err(e) => println!("{} {e}", "Import failed:".red()),
                }
            }
            s => {
                // "name = override" forces the Japanese text for this search.
                let (name, override_text) = match s.split_once('=') {
                    Some((n, o)) => (n.trim(), Some(o.trim())),
                    None => (s, None),
                };
                if let Some(search) = engine.resolve_card(card_type, name, override_text) {
                    print_search(&search);
                    last_search = Some((card_type, search.normalized_name));
                }
            }
        }
    }

    println!("\nSaving session...");
    if let Err(e) = engine.save_session() {
        eprintln!("[ERROR] Could not save session: {e}");
    }
}

fn print_search(search: &CardSearch) {
    println!("\nJapanese: {}", search.translation.japanese_text.as_str().bold());
    if search.translation.not_in_list {
        println!(
            "{}",
            "(approximate romanization — ':save <japanese>' to store a correction)".yellow()
        );
    }
    println!("Yuyutei:       {}", search.yuyutei_url);
    println!("PriceCharting: {}\n", search.price_charting_url);
}

fn print_help() {
    println!("  <name>              resolve a card name");
    println!("  <name> = <japanese> resolve with a manual override");
    println!("  :type <category>    switch category (pokemon, ygo, digi, onepiece, mtg)");
    println!("  :save <japanese>    save an override for the last search");
    println!("  :recent             show recent searches");
    println!("  :export <path>      export user overrides as JSON");
    println!("  :import <path>      merge a JSON snapshot into user overrides");
    println!("  exit                save session and quit");
}
