// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for translation runs

use countries_l10n::error::SetupError;
use countries_l10n::locale::{CldrTerritories, MemoryTerritories};
use countries_l10n::output::OutputStyle;
use countries_l10n::pipeline::{self, TranslateConfig};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DATASET: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"N": "France", "I": "FR", "C": [[2.5, 46.25], [3.0, 47.0]]},
    {"N": "N. Cyprus", "C": [[33.5, 35.25]]},
    {"N": "Atlantis", "I": "XX"},
    {"N": "Japan", "I": "jp"}
  ]
}"#;

fn provider() -> MemoryTerritories {
    MemoryTerritories::new()
        .with_names("de", &[("FR", "Frankreich"), ("JP", "Japan")])
        .with_names("zh-Hans-CN", &[("FR", "法国"), ("JP", "日本")])
        .with_names("ru", &[("FR", "Франция"), ("JP", "Япония")])
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(linguas: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("countries.json.in"), DATASET).unwrap();
        fs::write(dir.path().join("LINGUAS"), linguas).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self, output: Option<&str>, style: OutputStyle) -> TranslateConfig {
        TranslateConfig {
            input: self.path("countries.json.in"),
            linguas: self.path("LINGUAS"),
            output: output.map(|name| self.path(name)),
            style,
        }
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_translates_every_coded_feature() {
    let fixture = Fixture::new("# comment\n\nde\nzh_CN\nru\n");
    let config = fixture.config(Some("countries.json"), OutputStyle::Minified);
    let report = pipeline::run(&config, &provider()).expect("run should succeed");

    assert_eq!(report.languages, vec!["de", "zh_CN", "ru"]);
    assert_eq!(report.summary.features_translated, 3);
    assert_eq!(report.summary.features_skipped, 1);

    let out = read_json(&report.output);
    assert_eq!(
        out["features"][0]["translations"],
        json!({"de": "Frankreich", "zh_CN": "法国", "ru": "Франция"})
    );
    assert_eq!(
        out["features"][2]["translations"],
        json!({"de": "Atlantis", "zh_CN": "Atlantis", "ru": "Atlantis"})
    );
    assert_eq!(out["features"][3]["translations"]["zh_CN"], "日本");
    assert_eq!(out["features"][3]["I"], "jp");
}

#[test]
fn test_passes_through_untouched_members() {
    let fixture = Fixture::new("de\n");
    let config = fixture.config(Some("countries.json"), OutputStyle::Minified);
    let report = pipeline::run(&config, &provider()).unwrap();

    let input = read_json(&fixture.path("countries.json.in"));
    let out = read_json(&report.output);
    assert_eq!(out["type"], "FeatureCollection");
    assert_eq!(out["features"][1], input["features"][1]);
    assert!(out["features"][1].get("translations").is_none());
    assert_eq!(out["features"][0]["C"], input["features"][0]["C"]);

    let text = fs::read_to_string(&report.output).unwrap();
    assert!(text.contains(r#"{"N":"N. Cyprus","C":[[33.5,35.25]]}"#));
}

#[test]
fn test_runs_are_byte_identical() {
    let fixture = Fixture::new("ru\nde\nzh_CN\nde\n");
    let first = pipeline::run(&fixture.config(Some("a.json"), OutputStyle::Minified), &provider())
        .unwrap();
    let second = pipeline::run(&fixture.config(Some("b.json"), OutputStyle::Minified), &provider())
        .unwrap();
    assert_eq!(
        fs::read(&first.output).unwrap(),
        fs::read(&second.output).unwrap()
    );
}

#[test]
fn test_minify_only_changes_layout() {
    let fixture = Fixture::new("de\nzh_CN\n");
    let minified = pipeline::run(
        &fixture.config(Some("min.json"), OutputStyle::Minified),
        &provider(),
    )
    .unwrap();
    let pretty = pipeline::run(
        &fixture.config(Some("pretty.json"), OutputStyle::Pretty),
        &provider(),
    )
    .unwrap();

    let min_text = fs::read_to_string(&minified.output).unwrap();
    let pretty_text = fs::read_to_string(&pretty.output).unwrap();
    assert!(!min_text.contains('\n'));
    assert!(pretty_text.contains("\n  \"features\""));
    assert!(pretty_text.contains("法国"));
    assert_eq!(read_json(&minified.output), read_json(&pretty.output));
}

#[test]
fn test_default_output_is_derived_from_input() {
    let fixture = Fixture::new("de\n");
    let report = pipeline::run(&fixture.config(None, OutputStyle::Minified), &provider()).unwrap();
    assert_eq!(report.output, fixture.path("countries_translated.json.in"));
    assert!(report.output.is_file());
}

#[test]
fn test_missing_linguas_stops_before_output() {
    let fixture = Fixture::new("de\n");
    fs::remove_file(fixture.path("LINGUAS")).unwrap();
    let config = fixture.config(Some("countries.json"), OutputStyle::Minified);

    let err = pipeline::run(&config, &provider()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::MissingLinguas(_))
    ));
    assert!(!fixture.path("countries.json").exists());
}

#[test]
fn test_missing_input_stops_before_output() {
    let fixture = Fixture::new("de\n");
    fs::remove_file(fixture.path("countries.json.in")).unwrap();
    let config = fixture.config(Some("countries.json"), OutputStyle::Minified);

    let err = pipeline::run(&config, &provider()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::MissingInput(_))
    ));
    assert!(!fixture.path("countries.json").exists());
}

#[test]
fn test_non_object_document_is_rejected() {
    let fixture = Fixture::new("de\n");
    fs::write(fixture.path("countries.json.in"), "[1, 2, 3]").unwrap();
    let config = fixture.config(Some("countries.json"), OutputStyle::Minified);

    let err = pipeline::run(&config, &provider()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::NotAnObject(_))
    ));
}

#[test]
fn test_runs_against_cldr_tree() {
    let fixture = Fixture::new("de\nzh_TW\nsr@latin\n");
    let cldr_root = fixture.path("cldr");
    for (tag, names) in [
        ("de", json!({"FR": "Frankreich", "JP": "Japan"})),
        ("zh-Hant", json!({"FR": "法國", "JP": "日本"})),
    ] {
        let dir = cldr_root.join("main").join(tag);
        fs::create_dir_all(&dir).unwrap();
        let doc = json!({"main": {tag: {"localeDisplayNames": {"territories": names}}}});
        fs::write(dir.join("territories.json"), doc.to_string()).unwrap();
    }

    let provider = CldrTerritories::open(&cldr_root).unwrap();
    let config = fixture.config(Some("countries.json"), OutputStyle::Pretty);
    let report = pipeline::run(&config, &provider).unwrap();

    let out = read_json(&report.output);
    assert_eq!(
        out["features"][0]["translations"],
        json!({"de": "Frankreich", "zh_TW": "法國", "sr@latin": "France"})
    );
    assert_eq!(report.summary.fallbacks, 1 + 3 + 1);
}
