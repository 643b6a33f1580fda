#![forbid(unsafe_code)]

//! End-to-end tests for the localization pipeline: configuration parsing,
//! language selection, layered catalog loading, caching, and substitution.

use std::fs;
use std::path::Path;

use lexicat::{L10nConfig, L10nError, Locations, Translator};
use tempfile::TempDir;

fn write_source(root: &Path, code: &str, file: &str, json: &str) {
    let dir = root.join(code);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), json).unwrap();
}

struct Fixture {
    default_root: TempDir,
    override_root: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let default_root = TempDir::new().unwrap();
        let override_root = TempDir::new().unwrap();

        write_source(
            default_root.path(),
            "en",
            "app.json",
            r#"{"greet": "Hi :name", "bye": "Bye", "title": "Default Title"}"#,
        );
        write_source(
            default_root.path(),
            "en",
            "errors.json",
            r#"{"errors.not_found": "Not found: :what"}"#,
        );
        write_source(
            override_root.path(),
            "en",
            "app.json",
            r#"{"title": "Branded Title"}"#,
        );
        write_source(
            default_root.path(),
            "ru",
            "app.json",
            r#"{"greet": "Привет, :name"}"#,
        );

        Self {
            default_root,
            override_root,
        }
    }

    fn locations(&self) -> Locations {
        Locations::new(self.default_root.path(), self.override_root.path())
    }

    fn translator(&self) -> Translator {
        let config = L10nConfig::from_json_str(
            r#"{ "is-allowed": true, "language": "en",
                 "languages": { "en": "English", "ru": "Russian" } }"#,
        )
        .unwrap();
        Translator::new(&config, self.locations())
    }
}

#[test]
fn selection_round_trips_for_every_configured_language() {
    let fixture = Fixture::new();
    let mut translator = fixture.translator();

    let codes: Vec<String> = translator
        .languages()
        .iter()
        .map(|(code, _)| code.to_string())
        .collect();
    assert_eq!(codes, vec!["en", "ru"]);

    for code in &codes {
        translator.set_current_by_name(code).unwrap();
        assert_eq!(translator.current(true), Some(code.as_str()));
    }
}

#[test]
fn unknown_selection_fails_and_keeps_previous() {
    let fixture = Fixture::new();
    let mut translator = fixture.translator();

    let err = translator.set_current_by_name("de").unwrap_err();
    assert_eq!(err, L10nError::UnknownLanguage("de".into()));
    assert_eq!(translator.current(true), Some("en"));
}

#[test]
fn explicit_prewarm_scans_once_and_messages_are_stable() {
    let fixture = Fixture::new();
    let translator = fixture.translator();

    translator.load(None);
    let first = translator.messages(None);
    assert_eq!(first.get("title").map(String::as_str), Some("Branded Title"));

    // Rewriting sources after the first load must not change anything:
    // loaded catalogs are terminal for the process lifetime.
    write_source(
        fixture.default_root.path(),
        "en",
        "app.json",
        r#"{"title": "Rewritten"}"#,
    );
    translator.load(None);
    assert_eq!(translator.messages(None), first);
}

#[test]
fn override_root_wins_the_merge() {
    let fixture = Fixture::new();
    let translator = fixture.translator();
    assert_eq!(translator.tr("title"), "Branded Title");
    // Keys only in the default root still survive.
    assert_eq!(translator.tr("bye"), "Bye");
}

#[test]
fn all_files_in_the_language_dir_contribute() {
    let fixture = Fixture::new();
    let translator = fixture.translator();
    assert_eq!(
        translator.translate("errors.not_found", &[("what", "user 7")], None),
        "Not found: user 7"
    );
}

#[test]
fn unknown_key_is_echoed_unchanged() {
    let fixture = Fixture::new();
    let translator = fixture.translator();
    assert_eq!(translator.tr("unknown.key"), "unknown.key");
}

#[test]
fn substitution_in_both_languages() {
    let fixture = Fixture::new();
    let translator = fixture.translator();
    assert_eq!(translator.translate("greet", &[("name", "Ann")], None), "Hi Ann");
    assert_eq!(
        translator.translate("greet", &[("name", "Аня")], Some("ru")),
        "Привет, Аня"
    );
}

#[test]
fn name_lookups_miss_with_none() {
    let fixture = Fixture::new();
    let translator = fixture.translator();
    assert_eq!(translator.short_name("English"), Some("en"));
    assert_eq!(translator.short_name("Martian"), None);
    assert_eq!(translator.full_name(Some("ru")), Some("Russian"));
    assert_eq!(translator.full_name(Some("mt")), None);
    assert_eq!(translator.full_name(None), Some("English"));
}

#[test]
fn disabled_translation_echoes_and_never_scans() {
    let fixture = Fixture::new();
    let translator = Translator::new(&L10nConfig::disabled(), fixture.locations());

    assert!(!translator.is_enabled());
    assert_eq!(translator.translate("greet", &[("name", "Ann")], None), "greet");
    assert_eq!(translator.messages(Some("en")), lexicat::Messages::new());
    // No language was ever loaded, so the snapshot stays empty even though
    // catalog sources exist on disk.
    assert!(translator.messages(Some("en")).is_empty());
}
