//! Canonical writer for search fragments.
//!
//! Output mirrors the generator's layout byte for byte: the assignment
//! prelude on its own line, two-space indent, one entry per line, and a
//! closing `];` followed by a newline. Strings are single-quoted with `'`
//! and `\` escaped. `decode_fragment(encode_fragment(index))` reproduces the
//! same entry sequence.

use std::fmt::Write;

use crate::index::SearchIndex;
use crate::types::SearchEntry;

fn push_escaped(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('\'');
}

fn push_entry(out: &mut String, entry: &SearchEntry) {
    out.push('[');
    push_escaped(out, &entry.key);
    out.push_str(",[");
    push_escaped(out, &entry.label);
    for target in &entry.targets {
        out.push_str(",[");
        push_escaped(out, &target.url);
        let _ = write!(out, ",{},", target.scope_flag.0);
        push_escaped(out, &target.qualified_name);
        out.push(']');
    }
    out.push_str("]]");
}

/// Encode a table in the generator's canonical layout.
pub fn encode_fragment(index: &SearchIndex) -> String {
    let mut out = String::from("var searchData=\n[\n");
    let mut first = true;
    for entry in index {
        if !first {
            out.push_str(",\n");
        }
        first = false;
        out.push_str("  ");
        push_entry(&mut out, entry);
    }
    out.push_str("\n];\n");
    out
}
