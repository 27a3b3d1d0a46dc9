// SPDX-License-Identifier: PMPL-1.0-or-later

//! countries-l10n: localized country names for a world-map dataset.
//!
//! Reads the languages a project ships from its LINGUAS file, looks up the
//! name of every country in every language through a territory-name provider
//! (CLDR JSON by default), and writes the dataset back with a `translations`
//! object on each feature.
//!
//! PIPELINE:
//! 1. **linguas**: language list from a LINGUAS file.
//! 2. **locale**: identifier normalization and the provider seam.
//! 3. **resolver**: one name per (country, language), failures recovered.
//! 4. **annotate**: translation maps attached to features.
//! 5. **output**: minified or pretty JSON.

pub mod annotate;
pub mod diagnostics;
pub mod error;
pub mod linguas;
pub mod locale;
pub mod output;
pub mod pipeline;
pub mod resolver;
pub mod types;
