// SPDX-License-Identifier: PMPL-1.0-or-later

//! Territory names from the Unicode CLDR JSON distribution.
//!
//! Expects the layout of the `cldr-localenames-full` package from
//! <https://github.com/unicode-org/cldr-json>:
//!
//! ```text
//! <root>/main/de/territories.json
//! <root>/main/zh-Hant/territories.json
//! ...
//! ```
//!
//! Each file holds `main.<locale>.localeDisplayNames.territories`, a map from
//! region code to display name. Locales inherit from their truncations, so a
//! lookup for `zh-Hans-CN` consults `zh-Hans-CN`, `zh-Hans`, then `zh`.
//! Parsed tables are cached for the lifetime of the provider.

use super::TerritoryNames;
use crate::error::{LookupError, SetupError};
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use unic_langid::LanguageIdentifier;

const TERRITORIES_FILE: &str = "territories.json";

type Table = Rc<HashMap<String, String>>;

#[derive(Deserialize)]
struct TerritoriesFile {
    main: HashMap<String, LocaleSection>,
}

#[derive(Deserialize)]
struct LocaleSection {
    #[serde(rename = "localeDisplayNames")]
    display_names: DisplayNames,
}

#[derive(Deserialize)]
struct DisplayNames {
    #[serde(default)]
    territories: HashMap<String, String>,
}

pub struct CldrTerritories {
    main_dir: PathBuf,
    // `None` records a locale with no data directory.
    tables: RefCell<HashMap<String, Option<Table>>>,
}

impl CldrTerritories {
    /// Open a CLDR locale-names package rooted at `root`.
    pub fn open(root: &Path) -> Result<Self, SetupError> {
        let main_dir = root.join("main");
        if !main_dir.is_dir() {
            return Err(SetupError::ProviderUnavailable(root.to_path_buf()));
        }
        Ok(Self {
            main_dir,
            tables: RefCell::new(HashMap::new()),
        })
    }

    /// Whether CLDR ships a table for exactly this locale tag.
    pub fn has_locale(&self, tag: &str) -> bool {
        self.table_path(tag).is_file()
    }

    /// Locales to consult for `locale`, most specific first.
    pub fn fallback_chain(locale: &LanguageIdentifier) -> Vec<String> {
        let language = locale.language;
        let mut chain = Vec::new();
        let mut push = |script, region| {
            let tag = LanguageIdentifier::from_parts(language, script, region, &[]).to_string();
            if !chain.contains(&tag) {
                chain.push(tag);
            }
        };
        push(locale.script, locale.region);
        push(locale.script, None);
        push(None, locale.region);
        push(None, None);
        chain
    }

    fn table_path(&self, tag: &str) -> PathBuf {
        self.main_dir.join(tag).join(TERRITORIES_FILE)
    }

    fn table(&self, tag: &str) -> Result<Option<Table>, LookupError> {
        if let Some(cached) = self.tables.borrow().get(tag) {
            return Ok(cached.clone());
        }
        let loaded = self.load_table(tag)?;
        self.tables
            .borrow_mut()
            .insert(tag.to_string(), loaded.clone());
        Ok(loaded)
    }

    fn load_table(&self, tag: &str) -> Result<Option<Table>, LookupError> {
        let path = self.table_path(tag);
        if !path.is_file() {
            return Ok(None);
        }
        let bad_table = |reason: String| LookupError::BadTable {
            path: path.clone(),
            reason,
        };
        let content = fs::read_to_string(&path).map_err(|e| bad_table(e.to_string()))?;
        let file: TerritoriesFile =
            serde_json::from_str(&content).map_err(|e| bad_table(e.to_string()))?;
        let section = file
            .main
            .into_values()
            .next()
            .ok_or_else(|| bad_table("no locale section under main".to_string()))?;
        tracing::debug!(
            locale = tag,
            entries = section.display_names.territories.len(),
            "loaded CLDR territory table"
        );
        Ok(Some(Rc::new(section.display_names.territories)))
    }
}

impl TerritoryNames for CldrTerritories {
    fn territory_name(
        &self,
        locale: &LanguageIdentifier,
        code: &str,
    ) -> Result<Option<String>, LookupError> {
        let mut known = false;
        for tag in Self::fallback_chain(locale) {
            if let Some(table) = self.table(&tag)? {
                known = true;
                if let Some(name) = table.get(code) {
                    return Ok(Some(name.clone()));
                }
            }
        }
        if known {
            Ok(None)
        } else {
            Err(LookupError::UnknownLocale(locale.to_string()))
        }
    }
}
