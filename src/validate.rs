//! Lint checks for decoded search tables.
//!
//! The decoder accepts anything structurally well-formed; this module
//! enforces what generated output actually guarantees: non-empty lowercase
//! keys in strictly ascending order, at least one target per entry, and
//! target URLs whose shape matches their scope flag.

use url::Url;

use crate::error::SearchDataError;
use crate::index::SearchIndex;
use crate::types::{SearchEntry, SearchTarget};

/// Base used to resolve document-relative target URLs during checking.
const RELATIVE_BASE: &str = "https://docs.invalid/html/";

/// Switches for [`validate_with`]. Defaults enforce everything.
#[derive(Debug, Clone)]
pub struct LintOptions {
    /// Schemes accepted for absolute target URLs.
    pub allowed_schemes: Vec<String>,
    /// Require keys in strictly ascending byte order.
    pub require_sorted: bool,
    /// Require every key to equal its own lowercase form.
    pub require_lowercase_keys: bool,
    /// Require flag 0 targets to carry absolute URLs and flag 1 targets
    /// relative ones. Flags above 1 are never checked for shape.
    pub check_scope_consistency: bool,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            allowed_schemes: vec!["http".into(), "https".into()],
            require_sorted: true,
            require_lowercase_keys: true,
            check_scope_consistency: true,
        }
    }
}

/// Check all invariants with default options.
pub fn validate(index: &SearchIndex) -> Result<(), SearchDataError> {
    validate_with(index, &LintOptions::default())
}

/// Check all invariants, stopping at the first violation.
pub fn validate_with(index: &SearchIndex, opts: &LintOptions) -> Result<(), SearchDataError> {
    let mut seen = std::collections::HashSet::new();
    let mut prev: Option<&str> = None;
    for (i, entry) in index.iter().enumerate() {
        if entry.key.is_empty() {
            return Err(SearchDataError::EmptyKey { index: i });
        }
        if opts.require_lowercase_keys && entry.key != entry.key.to_lowercase() {
            return Err(SearchDataError::KeyNotLowercase(entry.key.clone()));
        }
        if !seen.insert(entry.key.as_str()) {
            return Err(SearchDataError::DuplicateKey(entry.key.clone()));
        }
        if opts.require_sorted {
            if let Some(first) = prev {
                if first > entry.key.as_str() {
                    return Err(SearchDataError::OutOfOrder {
                        first: first.to_string(),
                        second: entry.key.clone(),
                    });
                }
            }
        }
        if entry.targets.is_empty() {
            return Err(SearchDataError::NoTargets(entry.key.clone()));
        }
        for target in &entry.targets {
            check_target(entry, target, opts)?;
        }
        prev = Some(&entry.key);
    }
    Ok(())
}

fn url_error(entry: &SearchEntry, target: &SearchTarget, reason: impl Into<String>) -> SearchDataError {
    SearchDataError::InvalidUrl {
        key: entry.key.clone(),
        url: target.url.clone(),
        reason: reason.into(),
    }
}

fn check_target(
    entry: &SearchEntry,
    target: &SearchTarget,
    opts: &LintOptions,
) -> Result<(), SearchDataError> {
    if target.url.is_empty() {
        return Err(url_error(entry, target, "empty url"));
    }
    match Url::parse(&target.url) {
        Ok(parsed) => {
            if !opts.allowed_schemes.iter().any(|s| s == parsed.scheme()) {
                return Err(url_error(
                    entry,
                    target,
                    format!("scheme '{}' is not allowed", parsed.scheme()),
                ));
            }
            if opts.check_scope_consistency && target.scope_flag.is_local() {
                return Err(url_error(
                    entry,
                    target,
                    "scope flag marks a local page but the url is absolute",
                ));
            }
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE)
                .and_then(|base| base.join(&target.url))
                .map_err(|e| url_error(entry, target, e.to_string()))?;
            if opts.check_scope_consistency && target.scope_flag.is_external() {
                return Err(url_error(
                    entry,
                    target,
                    "scope flag marks an external page but the url is relative",
                ));
            }
        }
        Err(e) => return Err(url_error(entry, target, e.to_string())),
    }
    Ok(())
}
