// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country name resolution for one (country, language) pair.

use crate::error::LookupError;
use crate::locale::{locale_for, TerritoryNames};

pub struct CountryNameResolver<'p> {
    provider: &'p dyn TerritoryNames,
}

impl<'p> CountryNameResolver<'p> {
    pub fn new(provider: &'p dyn TerritoryNames) -> Self {
        Self { provider }
    }

    /// Localized name of `country_code` in `lang`, or `None`.
    ///
    /// Lookup failures are logged and reported as `None`; they never abort
    /// the caller.
    pub fn resolve(&self, country_code: &str, lang: &str) -> Option<String> {
        match self.try_resolve(country_code, lang) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(
                    country = country_code,
                    lang,
                    "could not get translation for {} in {}: {}",
                    country_code,
                    lang,
                    err
                );
                None
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but surfaces the failure.
    pub fn try_resolve(&self, country_code: &str, lang: &str) -> Result<Option<String>, LookupError> {
        let locale = locale_for(lang)?;
        let name = self
            .provider
            .territory_name(&locale, &country_code.to_uppercase())?;
        Ok(name.filter(|name| !name.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::MemoryTerritories;

    fn provider() -> MemoryTerritories {
        MemoryTerritories::new()
            .with_names("de", &[("FR", "Frankreich"), ("AQ", "")])
            .with_names("zh-Hans-CN", &[("FR", "法国")])
    }

    #[test]
    fn resolves_with_upper_cased_code() {
        let names = provider();
        let resolver = CountryNameResolver::new(&names);
        assert_eq!(resolver.resolve("fr", "de").as_deref(), Some("Frankreich"));
    }

    #[test]
    fn normalizes_chinese_before_lookup() {
        let names = provider();
        let resolver = CountryNameResolver::new(&names);
        assert_eq!(resolver.resolve("FR", "zh_CN").as_deref(), Some("法国"));
    }

    #[test]
    fn unknown_code_is_none_not_empty() {
        let names = provider();
        let resolver = CountryNameResolver::new(&names);
        assert_eq!(resolver.try_resolve("XX", "de").unwrap(), None);
        assert_eq!(resolver.try_resolve("AQ", "de").unwrap(), None);
    }

    #[test]
    fn failures_are_recovered() {
        let names = provider();
        let resolver = CountryNameResolver::new(&names);
        assert!(resolver.try_resolve("FR", "sr@latin").is_err());
        assert_eq!(resolver.resolve("FR", "sr@latin"), None);
        assert!(matches!(
            resolver.try_resolve("FR", "es"),
            Err(LookupError::UnknownLocale(_))
        ));
        assert_eq!(resolver.resolve("FR", "es"), None);
    }
}
