//! Layered Settings loading with a local config file
//!
//! These tests run without a global config (temp directories only).

use std::fs;

use tempfile::TempDir;

use treedraw::config::{local_config_path, Settings, Style};
use treedraw::RenderRules;

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "style = \"ascii\"\nmax_width = 30\nlast = \"\\\\--\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.style, Style::Ascii);
    assert_eq!(settings.max_width, Some(30));
    let rules = settings.rules();
    assert_eq!(rules.last, "\\--");
    assert_eq!(rules.continuous, "|--");
}

#[test]
fn given_no_local_config_when_load_then_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load(Some(dir.path())).expect("load settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.rules(), RenderRules::unicode());
}

#[test]
fn given_invalid_local_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "style = \"fancy\"\n").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();
    assert!(err.to_string().contains("config error"), "{err}");
}
