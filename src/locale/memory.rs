// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory territory-name provider.

use super::TerritoryNames;
use crate::error::LookupError;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Territory names keyed by exact locale tag (`de`, `zh-Hans-CN`).
///
/// No inheritance between locales; a locale that was never added is unknown
/// and yields [`LookupError::UnknownLocale`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTerritories {
    tables: HashMap<String, HashMap<String, String>>,
}

impl MemoryTerritories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(mut self, locale: &str, names: &[(&str, &str)]) -> Self {
        self.insert(locale, names);
        self
    }

    pub fn insert(&mut self, locale: &str, names: &[(&str, &str)]) {
        let table = self.tables.entry(locale.to_string()).or_default();
        for (code, name) in names {
            table.insert(code.to_string(), name.to_string());
        }
    }
}

impl TerritoryNames for MemoryTerritories {
    fn territory_name(
        &self,
        locale: &LanguageIdentifier,
        code: &str,
    ) -> Result<Option<String>, LookupError> {
        let tag = locale.to_string();
        self.tables
            .get(&tag)
            .map(|table| table.get(code).cloned())
            .ok_or(LookupError::UnknownLocale(tag))
    }
}
