// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end translation run: LINGUAS + dataset in, translated dataset out.

use crate::annotate::{annotate_collection, AnnotationSummary};
use crate::error::SetupError;
use crate::linguas::read_linguas;
use crate::locale::TerritoryNames;
use crate::output::{default_output_path, write_document, OutputStyle};
use crate::resolver::CountryNameResolver;
use anyhow::{Context, Result};
use colored::*;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "countries.json.in";
pub const DEFAULT_LINGUAS: &str = "../po/LINGUAS";
pub const DEFAULT_OUTPUT: &str = "../src/countries.json";

/// Configuration for a translation run
#[derive(Debug, Clone)]
pub struct TranslateConfig {
    pub input: PathBuf,
    pub linguas: PathBuf,
    /// Derived from `input` when unset
    pub output: Option<PathBuf>,
    pub style: OutputStyle,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            linguas: PathBuf::from(DEFAULT_LINGUAS),
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            style: OutputStyle::Minified,
        }
    }
}

impl TranslateConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    /// Both inputs must exist before anything is read.
    pub fn check_inputs(&self) -> Result<(), SetupError> {
        if !self.linguas.is_file() {
            return Err(SetupError::MissingLinguas(self.linguas.clone()));
        }
        if !self.input.is_file() {
            return Err(SetupError::MissingInput(self.input.clone()));
        }
        Ok(())
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub languages: Vec<String>,
    pub output: PathBuf,
    pub summary: AnnotationSummary,
}

/// Read a dataset. The top level must be a JSON object.
pub fn load_document(path: &Path) -> Result<Map<String, Value>> {
    if !path.is_file() {
        return Err(SetupError::MissingInput(path.to_path_buf()).into());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SetupError::NotAnObject(path.to_path_buf()).into()),
    }
}

/// Run the whole transformation against `provider`.
pub fn run(config: &TranslateConfig, provider: &dyn TerritoryNames) -> Result<RunReport> {
    config.check_inputs()?;

    let languages = read_linguas(&config.linguas)?;
    println!(
        "Found {} languages: {}",
        languages.len().to_string().bold(),
        languages.join(", ")
    );

    let mut document = load_document(&config.input)?;
    let resolver = CountryNameResolver::new(provider);
    let summary = annotate_collection(&mut document, &languages, &resolver);
    tracing::info!(
        translated = summary.features_translated,
        skipped = summary.features_skipped,
        fallbacks = summary.fallbacks,
        "annotation finished"
    );

    let output = config.output_path();
    write_document(&document, &output, config.style)?;
    println!(
        "\n{} {}",
        "Translated JSON saved to:".green(),
        output.display()
    );

    Ok(RunReport {
        languages,
        output,
        summary,
    })
}
