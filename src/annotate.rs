// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attach per-language country names to every feature of a dataset
//!
//! Each feature with a country code gains a `translations` object holding one
//! entry per distinct LINGUAS language. When a language has no name for the
//! country the feature's own display name is stored instead, so the map never
//! has holes. Features without a code are left exactly as they were.

use crate::resolver::CountryNameResolver;
use crate::types::{Feature, TranslationMap, FEATURES_KEY, TRANSLATIONS_KEY};
use serde::Serialize;
use serde_json::{Map, Value};

/// Counters for the completion report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationSummary {
    pub features_translated: usize,
    pub features_skipped: usize,
    pub fallbacks: usize,
}

/// Annotate every feature of `document` in place.
///
/// A document without a `features` array is left untouched.
pub fn annotate_collection(
    document: &mut Map<String, Value>,
    languages: &[String],
    resolver: &CountryNameResolver<'_>,
) -> AnnotationSummary {
    let mut summary = AnnotationSummary::default();
    let Some(features) = document.get_mut(FEATURES_KEY).and_then(Value::as_array_mut) else {
        tracing::warn!("document has no '{}' array; nothing to translate", FEATURES_KEY);
        return summary;
    };

    for feature in features.iter_mut() {
        let Some(object) = feature.as_object_mut() else {
            summary.features_skipped += 1;
            continue;
        };
        match build_translations(object, languages, resolver, &mut summary.fallbacks) {
            Some(translations) => {
                object.insert(TRANSLATIONS_KEY.to_string(), Value::Object(translations));
                summary.features_translated += 1;
            }
            None => summary.features_skipped += 1,
        }
    }
    summary
}

/// Translation map for one feature, or `None` if it has no country code.
///
/// Duplicate languages keep their first position and are looked up once.
pub fn build_translations(
    object: &Map<String, Value>,
    languages: &[String],
    resolver: &CountryNameResolver<'_>,
    fallbacks: &mut usize,
) -> Option<TranslationMap> {
    let feature = Feature::new(object);
    let code = feature.code()?;
    let fallback = feature.fallback_name().unwrap_or(code);
    tracing::info!(
        country = code,
        "processing: {} ({})",
        feature.name().unwrap_or("<unnamed>"),
        code
    );

    let mut translations = TranslationMap::new();
    for lang in languages {
        if translations.contains_key(lang) {
            continue;
        }
        let name = match resolver.resolve(code, lang) {
            Some(name) => name,
            None => {
                *fallbacks += 1;
                fallback.to_string()
            }
        };
        translations.insert(lang.clone(), Value::String(name));
    }
    Some(translations)
}

/// Name a map consumer would display: the first preferred language present
/// in `translations`, else the display name.
pub fn translated_name<'a, S: AsRef<str>>(
    object: &'a Map<String, Value>,
    preferred: &[S],
) -> Option<&'a str> {
    let feature = Feature::new(object);
    feature
        .translations()
        .and_then(|translations| {
            preferred
                .iter()
                .find_map(|lang| translations.get(lang.as_ref()).and_then(Value::as_str))
        })
        .or_else(|| feature.name())
}
