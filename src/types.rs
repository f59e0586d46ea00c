use serde::{Deserialize, Serialize};

pub use crate::error::SearchDataError;

/// Category tag attached to a search target.
///
/// The generator stores a small integer whose meaning lives outside the
/// fragment. The two values observed in generated output are named below;
/// anything else is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeFlag(pub u8);

impl ScopeFlag {
    /// Target resolved through an external tag file (absolute URL).
    pub const EXTERNAL: ScopeFlag = ScopeFlag(0);
    /// Target inside the locally generated pages (document-relative URL).
    pub const LOCAL: ScopeFlag = ScopeFlag(1);

    pub fn is_local(self) -> bool {
        self == ScopeFlag::LOCAL
    }

    pub fn is_external(self) -> bool {
        self == ScopeFlag::EXTERNAL
    }
}

/// One hyperlink attached to a search entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTarget {
    /// Documentation anchor, absolute or document-relative.
    pub url: String,
    pub scope_flag: ScopeFlag,
    /// Fully qualified name of the symbol the link points at.
    pub qualified_name: String,
}

impl SearchTarget {
    pub fn new(url: impl Into<String>, scope_flag: ScopeFlag, qualified_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            scope_flag,
            qualified_name: qualified_name.into(),
        }
    }
}

/// One record of the search table: a lowercase sort key, a display label and
/// the ordered links behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub key: String,
    pub label: String,
    pub targets: Vec<SearchTarget>,
}

impl SearchEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>, targets: Vec<SearchTarget>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            targets,
        }
    }
}
