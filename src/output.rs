// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of the translated dataset

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// No whitespace between tokens.
    #[default]
    Minified,
    /// Two-space indentation.
    Pretty,
}

impl OutputStyle {
    pub fn from_minify(minify: bool) -> Self {
        if minify {
            OutputStyle::Minified
        } else {
            OutputStyle::Pretty
        }
    }

    /// Non-ASCII text is emitted as UTF-8, never as `\u` escapes.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputStyle::Minified => Ok(serde_json::to_string(value)?),
            OutputStyle::Pretty => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

/// Serialize `value` and write it to `path`.
pub fn write_document<T: Serialize>(value: &T, path: &Path, style: OutputStyle) -> Result<()> {
    let content = style.serialize(value)?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

/// Output path next to `input`: `countries.json.in` becomes
/// `countries_translated.json.in`, `world.geojson` becomes
/// `world_translated.geojson`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let Some(file_name) = input.file_name().and_then(|name| name.to_str()) else {
        return input.with_file_name("translated.json");
    };
    let translated = if file_name.contains(".json") {
        file_name.replacen(".json", "_translated.json", 1)
    } else {
        match file_name.rfind('.').filter(|&dot| dot > 0) {
            Some(dot) => format!("{}_translated{}", &file_name[..dot], &file_name[dot..]),
            None => format!("{}_translated", file_name),
        }
    };
    input.with_file_name(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn sample() -> Value {
        json!({
            "features": [
                {"N": "Japan", "I": "JP", "translations": {"ja": "日本", "ru": "Япония"}}
            ]
        })
    }

    #[test]
    fn minified_has_no_whitespace() {
        let text = OutputStyle::Minified.serialize(&sample()).unwrap();
        assert_eq!(
            text,
            r#"{"features":[{"N":"Japan","I":"JP","translations":{"ja":"日本","ru":"Япония"}}]}"#
        );
    }

    #[test]
    fn pretty_indents_and_keeps_unicode() {
        let text = OutputStyle::Pretty.serialize(&sample()).unwrap();
        assert!(text.contains("\n  \"features\": ["));
        assert!(text.contains("\"ja\": \"日本\""));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn styles_parse_to_the_same_value() {
        let minified = OutputStyle::Minified.serialize(&sample()).unwrap();
        let pretty = OutputStyle::Pretty.serialize(&sample()).unwrap();
        let a: Value = serde_json::from_str(&minified).unwrap();
        let b: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn default_path_inserts_suffix() {
        assert_eq!(
            default_output_path(Path::new("data/countries.json.in")),
            PathBuf::from("data/countries_translated.json.in")
        );
        assert_eq!(
            default_output_path(Path::new("countries.json")),
            PathBuf::from("countries_translated.json")
        );
        assert_eq!(
            default_output_path(Path::new("world.geojson")),
            PathBuf::from("world_translated.geojson")
        );
        assert_eq!(
            default_output_path(Path::new("countries")),
            PathBuf::from("countries_translated")
        );
    }

    #[test]
    fn write_document_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_document(&sample(), &path, OutputStyle::Minified).unwrap();
        let back: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, sample());
    }
}
