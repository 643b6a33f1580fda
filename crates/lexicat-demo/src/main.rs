#![forbid(unsafe_code)]

//! Lexicat demo: wires the library to the real locale directories shipped
//! under `data/` and prints a few translated lines.
//!
//! Run with `RUST_LOG=lexicat=debug` to watch catalog loads happen lazily.

use std::path::PathBuf;

use lexicat::{L10nConfig, L10nError, Locations, Translator};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
  "is-allowed": true,
  "language": "en",
  "languages": { "en": "English", "ru": "Russian" }
}"#;

fn main() -> Result<(), L10nError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let config = L10nConfig::from_json_str(CONFIG)?;
    let mut translator = Translator::new(
        &config,
        Locations::new(data.join("locale"), data.join("app-locale")),
    );

    info!(languages = translator.languages().len(), "translator ready");

    // The override root rebrands the title; everything else comes from the
    // framework defaults.
    println!("{}", translator.tr("app.title"));
    println!("{}", translator.translate("greet", &[("name", "Ann")], None));
    println!(
        "{}",
        translator.translate("errors.not_found", &[("what", "user 7")], None)
    );

    // Per-call language override leaves the current selection alone.
    println!("{}", translator.translate("greet", &[("name", "Аня")], Some("ru")));

    // Switch the current language for good.
    translator.set_current_by_name("ru")?;
    translator.load(None);
    let count = translator.messages(None).len().to_string();
    println!(
        "{}",
        translator.translate(
            "status.loaded",
            &[("count", count.as_str()), ("language", "Russian")],
            None,
        )
    );

    // Missing keys echo back instead of failing.
    println!("{}", translator.tr("missing.key"));

    Ok(())
}
