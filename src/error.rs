// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types.
//!
//! Two classes: [`SetupError`] stops the run before any output is written,
//! [`LookupError`] covers a single country/language lookup and is always
//! recovered by the resolver.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems detected before the transformation starts.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("CLDR locale-name data not found at {0} (expected a main/ directory of locales)")]
    ProviderUnavailable(PathBuf),

    #[error("LINGUAS file not found at {0}")]
    MissingLinguas(PathBuf),

    #[error("JSON file not found at {0}")]
    MissingInput(PathBuf),

    #[error("{0} does not contain a JSON object at the top level")]
    NotAnObject(PathBuf),
}

/// Failure of one territory-name lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("malformed locale identifier '{tag}': {reason}")]
    InvalidLocale { tag: String, reason: String },

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("unreadable locale data {path}: {reason}")]
    BadTable { path: PathBuf, reason: String },
}
