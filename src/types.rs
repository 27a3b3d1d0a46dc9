// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country dataset conventions
//!
//! The dataset is a JSON object whose `features` array holds one object per
//! country. Member names are fixed by the world-map loader that reads the
//! output: `N` is the display name, `I` the ISO 3166 code, `C` the polygon
//! coordinates. Documents are kept as [`serde_json::Value`] so that every
//! member this tool does not touch is written back as it was read.

use serde_json::{Map, Value};

pub const FEATURES_KEY: &str = "features";
pub const NAME_KEY: &str = "N";
pub const CODE_KEY: &str = "I";
pub const TRANSLATIONS_KEY: &str = "translations";

/// Language identifier to localized name, in LINGUAS order.
pub type TranslationMap = Map<String, Value>;

/// Borrowed view of one feature object.
#[derive(Debug, Clone, Copy)]
pub struct Feature<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> Feature<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self { object }
    }

    pub fn name(&self) -> Option<&'a str> {
        self.object.get(NAME_KEY).and_then(Value::as_str)
    }

    /// Country code, if present as a non-empty string.
    pub fn code(&self) -> Option<&'a str> {
        self.object
            .get(CODE_KEY)
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
    }

    pub fn translations(&self) -> Option<&'a TranslationMap> {
        self.object.get(TRANSLATIONS_KEY).and_then(Value::as_object)
    }

    /// Value used when no localized name exists: the display name, or the
    /// code itself for unnamed features.
    pub fn fallback_name(&self) -> Option<&'a str> {
        self.name().or_else(|| self.code())
    }
}
