// SPDX-License-Identifier: PMPL-1.0-or-later

//! `--check`: report whether a run would have what it needs
//!
//! Checks the CLDR package, the LINGUAS file and the dataset, then lists the
//! LINGUAS entries that CLDR cannot serve. Those languages would fall back to
//! English display names for every country.

use crate::linguas::read_linguas;
use crate::locale::{locale_for, CldrTerritories};
use crate::pipeline::{load_document, TranslateConfig};
use crate::types::{Feature, FEATURES_KEY};
use anyhow::{anyhow, Result};
use serde_json::Value;
use std::path::Path;

pub fn run_self_diagnostics(config: &TranslateConfig, cldr_dir: &Path) -> Result<()> {
    let checks = collect_diagnostics(config, cldr_dir);

    println!("countries-l10n self-diagnostics");
    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

pub fn collect_diagnostics(config: &TranslateConfig, cldr_dir: &Path) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("countries-l10n {}", env!("CARGO_PKG_VERSION")),
    ));

    let cldr = match CldrTerritories::open(cldr_dir) {
        Ok(cldr) => {
            checks.push(Diagnostic::ok(
                "CLDR locale names",
                format!("{} has main/", cldr_dir.display()),
            ));
            Some(cldr)
        }
        Err(err) => {
            checks.push(Diagnostic::error("CLDR locale names", err.to_string()));
            None
        }
    };

    match read_linguas(&config.linguas) {
        Ok(languages) => {
            checks.push(Diagnostic::ok(
                "LINGUAS",
                format!("{} languages in {}", languages.len(), config.linguas.display()),
            ));
            if let Some(cldr) = &cldr {
                checks.push(check_coverage(cldr, &languages));
            }
        }
        Err(err) => checks.push(Diagnostic::error("LINGUAS", err.to_string())),
    }

    match load_document(&config.input) {
        Ok(document) => checks.push(check_features(document.get(FEATURES_KEY))),
        Err(err) => checks.push(Diagnostic::error("dataset", format!("{:#}", err))),
    }

    checks
}

fn check_coverage(cldr: &CldrTerritories, languages: &[String]) -> Diagnostic {
    let uncovered: Vec<&str> = languages
        .iter()
        .filter(|lang| match locale_for(lang) {
            Ok(locale) => !CldrTerritories::fallback_chain(&locale)
                .iter()
                .any(|tag| cldr.has_locale(tag)),
            Err(_) => true,
        })
        .map(String::as_str)
        .collect();

    if uncovered.is_empty() {
        Diagnostic::ok("locale coverage", "every language has CLDR data".to_string())
    } else {
        Diagnostic::warning(
            "locale coverage",
            format!("no CLDR data for: {}", uncovered.join(", ")),
        )
    }
}

fn check_features(features: Option<&Value>) -> Diagnostic {
    let Some(features) = features.and_then(Value::as_array) else {
        return Diagnostic::warning("dataset", format!("no '{}' array", FEATURES_KEY));
    };
    let with_code = features
        .iter()
        .filter_map(Value::as_object)
        .filter(|object| Feature::new(object).code().is_some())
        .count();
    Diagnostic::ok(
        "dataset",
        format!(
            "{} features, {} with a country code",
            features.len(),
            with_code
        ),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:18} {}", self.level.tag(), self.label, self.detail);
    }
}
