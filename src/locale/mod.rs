// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale handling: identifier normalization, parsing into parts, and the
//! territory-name provider seam.
//!
//! LINGUAS identifiers use gettext form (`de`, `pt_BR`, `zh_CN`). Locale data
//! providers key Chinese by script rather than by region, so a small patch
//! table rewrites the ambiguous identifiers before they are parsed:
//!
//! | LINGUAS | Provider     |
//! |---------|--------------|
//! | zh_CN   | zh_Hans_CN   |
//! | zh_TW   | zh_Hant_TW   |
//! | fa_IR   | fa_IR        |
//!
//! The table is maintained by hand. New ambiguous locales get a new row;
//! nothing is inferred.

mod cldr;
mod memory;

pub use cldr::CldrTerritories;
pub use memory::MemoryTerritories;

use crate::error::LookupError;
use unic_langid::{subtags, LanguageIdentifier};

const LOCALE_PATCHES: &[(&str, &str)] = &[
    ("zh_CN", "zh_Hans_CN"),
    ("zh_TW", "zh_Hant_TW"),
    ("fa_IR", "fa_IR"),
];

/// Source of localized territory names.
///
/// `code` is an upper-case ISO 3166 region code. `Ok(None)` means the locale
/// is known but has no name for that code.
pub trait TerritoryNames {
    fn territory_name(
        &self,
        locale: &LanguageIdentifier,
        code: &str,
    ) -> Result<Option<String>, LookupError>;
}

/// Apply the patch table. Unlisted identifiers are returned unchanged.
pub fn normalize_locale_code(lang: &str) -> &str {
    LOCALE_PATCHES
        .iter()
        .find(|(from, _)| *from == lang)
        .map(|(_, to)| *to)
        .unwrap_or(lang)
}

/// A normalized identifier split on `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleParts<'a> {
    pub language: &'a str,
    pub script: Option<&'a str>,
    pub territory: Option<&'a str>,
}

impl<'a> LocaleParts<'a> {
    /// `lang`, `lang_TERRITORY` or `lang_Script_TERRITORY`.
    pub fn parse(tag: &'a str) -> Result<Self, LookupError> {
        let parts: Vec<&str> = tag.split('_').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(invalid(tag, "empty subtag"));
        }
        match parts[..] {
            [language] => Ok(Self {
                language,
                script: None,
                territory: None,
            }),
            [language, territory] => Ok(Self {
                language,
                script: None,
                territory: Some(territory),
            }),
            [language, script, territory] => Ok(Self {
                language,
                script: Some(script),
                territory: Some(territory),
            }),
            _ => Err(invalid(tag, "too many subtags")),
        }
    }

    /// Build a locale from the parts. Subtag casing is canonicalized.
    pub fn to_language_identifier(&self) -> Result<LanguageIdentifier, LookupError> {
        let tag = self.to_string();
        let language: subtags::Language = self
            .language
            .parse()
            .map_err(|_| invalid(&tag, "invalid language subtag"))?;
        let script = self
            .script
            .map(|s| s.parse::<subtags::Script>())
            .transpose()
            .map_err(|_| invalid(&tag, "invalid script subtag"))?;
        let region = self
            .territory
            .map(|t| t.parse::<subtags::Region>())
            .transpose()
            .map_err(|_| invalid(&tag, "invalid territory subtag"))?;
        Ok(LanguageIdentifier::from_parts(language, script, region, &[]))
    }
}

impl std::fmt::Display for LocaleParts<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = self.script {
            write!(f, "_{}", script)?;
        }
        if let Some(territory) = self.territory {
            write!(f, "_{}", territory)?;
        }
        Ok(())
    }
}

fn invalid(tag: &str, reason: &str) -> LookupError {
    LookupError::InvalidLocale {
        tag: tag.to_string(),
        reason: reason.to_string(),
    }
}

/// Normalize, parse and build in one step.
pub fn locale_for(lang: &str) -> Result<LanguageIdentifier, LookupError> {
    LocaleParts::parse(normalize_locale_code(lang))?.to_language_identifier()
}
