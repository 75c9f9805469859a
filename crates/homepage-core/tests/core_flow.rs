use homepage_core::codec::{decode_lists, encode_lists};
use homepage_core::config::{ConfigAction, Configuration, STORAGE_KEY, Shortcut, TimeAlign};
use homepage_core::layout::tile_width_percent;
use homepage_core::numeric::parse_form_u32;
use homepage_core::redirect::plan_redirect;
use homepage_core::search::resolve_search;
use homepage_core::store::{ConfigStore, MemoryStore};

#[test]
fn edits_persist_across_reloads() {
    let store = ConfigStore::new(MemoryStore::default());
    let mut config = store.load();

    let text = "GitHub\nhttps://github.com/\n\nCrates\nhttps://crates.io/\nhttps://crates.io/favicon.ico\n\n-----\n\nNews\nhttps://news.ycombinator.com/";
    let (shortcuts, folded) = decode_lists(text);

    for action in [
        ConfigAction::SetTimeAlign(TimeAlign::Right),
        ConfigAction::SetShortcutMargin(parse_form_u32("12").expect("margin")),
        ConfigAction::SetShortcutRows(parse_form_u32("4").expect("rows")),
        ConfigAction::ReplaceShortcuts { shortcuts, folded },
    ] {
        config = config.apply(action);
        store.save(&config);
    }

    let reloaded = ConfigStore::new(MemoryStore::with_entry(
        STORAGE_KEY,
        &store.backend().raw(STORAGE_KEY).expect("saved value"),
    ))
    .load();

    assert_eq!(reloaded, config);
    assert_eq!(reloaded.time_align, TimeAlign::Right);
    assert_eq!(reloaded.shortcut_margin, 12);
    assert_eq!(reloaded.shortcuts.len(), 2);
    assert_eq!(
        reloaded.folded_shortcuts,
        vec![Shortcut::new("News", "https://news.ycombinator.com/", "")]
    );
    assert!((tile_width_percent(reloaded.shortcut_rows) - 25.0).abs() < f64::EPSILON);
}

#[test]
fn settings_text_round_trips_through_the_editor() {
    let config = Configuration::default().apply(ConfigAction::ReplaceShortcuts {
        shortcuts: vec![
            Shortcut::new("Rust", "https://www.rust-lang.org/", ""),
            Shortcut::new("Docs", "https://docs.rs/", "https://docs.rs/favicon.ico"),
        ],
        folded: vec![Shortcut::new("Yew", "https://yew.rs/", "")],
    });

    let text = encode_lists(&config.shortcuts, &config.folded_shortcuts);
    let (shortcuts, folded) = decode_lists(&text);
    let edited = config.clone().apply(ConfigAction::ReplaceShortcuts { shortcuts, folded });
    assert_eq!(edited, config);
}

#[test]
fn corrupt_storage_recovers_and_stays_recovered() {
    let store = ConfigStore::new(MemoryStore::with_entry(STORAGE_KEY, "]]"));
    assert_eq!(store.load(), Configuration::default());
    assert_eq!(store.load(), Configuration::default());
}

#[test]
fn redirect_and_search_targets() {
    assert_eq!(
        plan_redirect("https://start.example/?n=3", 5).as_deref(),
        Some("https://start.example/")
    );
    assert_eq!(plan_redirect("https://start.example/", 5), None);

    assert_eq!(resolve_search("example.com").as_deref(), Some("https://example.com"));
    assert_eq!(resolve_search("http://example.com").as_deref(), Some("https://example.com"));
    assert_eq!(
        resolve_search("hello world").as_deref(),
        Some("https://duckduckgo.com/?q=hello%20world")
    );
}

#[test]
fn three_rows_split_evenly() {
    assert!((tile_width_percent(3) - 100.0 / 3.0).abs() < f64::EPSILON);
}
