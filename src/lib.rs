//! Codec and lint checks for generated documentation search fragments.
//!
//! A fragment is one JavaScript file, produced by a documentation generator,
//! assigning a literal nested array to `searchData`. Each record maps a
//! lowercase search key to a display label and one or more link targets:
//!
//! ```text
//! var searchData=
//! [
//!   ['twoway',['TwoWay',['https://doc.qt.io/qt-5/class_qt_mvvm_1_1_binding.html#a6a03...',0,'QtMvvm::Binding::TwoWay()'],...]],
//!   ...
//! ];
//! ```
//!
//! [`decode_fragment`] turns fragment text into a [`SearchIndex`],
//! [`encode_fragment`] writes the canonical form back, and [`validate`]
//! checks the invariants generated output is supposed to satisfy. The table
//! the crate was built around ships in the [`builtin`](crate::builtin)
//! module.

pub mod builtin;
pub mod decode;
pub mod encode;
pub mod error;
pub mod index;
pub mod io_utils;
pub mod types;
pub mod validate;

pub use crate::builtin::builtin;
pub use crate::decode::decode_fragment;
pub use crate::encode::encode_fragment;
pub use crate::error::SearchDataError;
pub use crate::index::SearchIndex;
pub use crate::types::{ScopeFlag, SearchEntry, SearchTarget};
pub use crate::validate::{validate, validate_with, LintOptions};
