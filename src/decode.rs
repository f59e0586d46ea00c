//! Decoder for generated search fragments.
//!
//! A fragment is a JavaScript file assigning one literal nested array to
//! `searchData`:
//!
//! ```text
//! var searchData=
//! [
//!   ['key',['Label',['url',flag,'QualifiedName'],...]],
//!   ...
//! ];
//! ```
//!
//! The decoder is purely syntactic: it accepts any structurally well-formed
//! table, including shapes the lint pass rejects (empty tables, zero-target
//! entries, unsorted keys). All errors are [`SearchDataError::Syntax`] and
//! carry the 1-based line and column of the offending character.

use crate::error::SearchDataError;
use crate::index::SearchIndex;
use crate::types::{ScopeFlag, SearchEntry, SearchTarget};

/// Character-level reader with position tracking.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn err(&self, msg: impl Into<String>) -> SearchDataError {
        SearchDataError::Syntax {
            line: self.line,
            column: self.column,
            msg: msg.into(),
        }
    }

    fn err_at(&self, line: usize, column: usize, msg: impl Into<String>) -> SearchDataError {
        SearchDataError::Syntax {
            line,
            column,
            msg: msg.into(),
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn expect_char(&mut self, want: char) -> Result<(), SearchDataError> {
        match self.peek() {
            Some(c) if c == want => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.err(format!("expected '{want}', found '{c}'"))),
            None => Err(self.err(format!("expected '{want}', found end of input"))),
        }
    }

    fn expect_word(&mut self, word: &str) -> Result<(), SearchDataError> {
        let (line, column) = (self.line, self.column);
        for want in word.chars() {
            match self.bump() {
                Some(c) if c == want => {}
                _ => return Err(self.err_at(line, column, format!("expected '{word}'"))),
            }
        }
        Ok(())
    }

    /// Single-quoted string. Escapes are limited to `\'` and `\\`.
    fn parse_string(&mut self) -> Result<String, SearchDataError> {
        match self.peek() {
            Some('\'') => {
                self.bump();
            }
            Some(c) => return Err(self.err(format!("expected string, found '{c}'"))),
            None => return Err(self.err("expected string, found end of input")),
        }
        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(self.err("unterminated string")),
                Some('\n') => return Err(self.err("unterminated string")),
                Some('\'') => {
                    self.bump();
                    return Ok(out);
                }
                Some('\\') => {
                    self.bump();
                    match self.peek() {
                        Some(c @ ('\'' | '\\')) => {
                            self.bump();
                            out.push(c);
                        }
                        Some(c) => return Err(self.err(format!("invalid escape '\\{c}'"))),
                        None => return Err(self.err("unterminated string")),
                    }
                }
                Some(_) => {
                    if let Some(c) = self.bump() {
                        out.push(c);
                    }
                }
            }
        }
    }

    /// Unsigned decimal scope flag, range 0..=255.
    fn parse_flag(&mut self) -> Result<ScopeFlag, SearchDataError> {
        let (line, column) = (self.line, self.column);
        let mut digits = String::new();
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            if let Some(c) = self.bump() {
                digits.push(c);
            }
        }
        if digits.is_empty() {
            return Err(self.err("expected scope flag"));
        }
        let value: u32 = digits
            .parse()
            .map_err(|_| self.err_at(line, column, "scope flag out of range"))?;
        if value > u32::from(u8::MAX) {
            return Err(self.err_at(line, column, "scope flag out of range"));
        }
        Ok(ScopeFlag(value as u8))
    }

    /// `['url',flag,'qualifiedName']`
    fn parse_target(&mut self) -> Result<SearchTarget, SearchDataError> {
        self.expect_char('[')?;
        self.skip_ws();
        let url = self.parse_string()?;
        self.skip_ws();
        self.expect_char(',')?;
        self.skip_ws();
        let scope_flag = self.parse_flag()?;
        self.skip_ws();
        self.expect_char(',')?;
        self.skip_ws();
        let qualified_name = self.parse_string()?;
        self.skip_ws();
        self.expect_char(']')?;
        Ok(SearchTarget {
            url,
            scope_flag,
            qualified_name,
        })
    }

    /// `['key',['Label',target,...]]`
    fn parse_entry(&mut self) -> Result<SearchEntry, SearchDataError> {
        self.expect_char('[')?;
        self.skip_ws();
        let key = self.parse_string()?;
        self.skip_ws();
        self.expect_char(',')?;
        self.skip_ws();
        self.expect_char('[')?;
        self.skip_ws();
        let label = self.parse_string()?;
        self.skip_ws();
        let mut targets = Vec::new();
        loop {
            match self.peek() {
                Some(',') => {
                    self.bump();
                    self.skip_ws();
                    targets.push(self.parse_target()?);
                    self.skip_ws();
                }
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(c) => return Err(self.err(format!("expected ',' or ']', found '{c}'"))),
                None => return Err(self.err("expected ',' or ']', found end of input")),
            }
        }
        self.skip_ws();
        self.expect_char(']')?;
        Ok(SearchEntry { key, label, targets })
    }
}

/// Decode one fragment into a [`SearchIndex`].
pub fn decode_fragment(input: &str) -> Result<SearchIndex, SearchDataError> {
    let mut s = Scanner::new(input);
    s.skip_ws();
    s.expect_word("var")?;
    match s.peek() {
        Some(c) if c.is_whitespace() => s.skip_ws(),
        _ => return Err(s.err("expected whitespace after 'var'")),
    }
    s.expect_word("searchData")?;
    s.skip_ws();
    s.expect_char('=')?;
    s.skip_ws();
    s.expect_char('[')?;
    s.skip_ws();

    let mut entries = Vec::new();
    if s.peek() == Some(']') {
        s.bump();
    } else {
        loop {
            entries.push(s.parse_entry()?);
            s.skip_ws();
            match s.peek() {
                Some(',') => {
                    s.bump();
                    s.skip_ws();
                }
                Some(']') => {
                    s.bump();
                    break;
                }
                Some(c) => return Err(s.err(format!("expected ',' or ']', found '{c}'"))),
                None => return Err(s.err("expected ',' or ']', found end of input")),
            }
        }
    }

    s.skip_ws();
    s.expect_char(';')?;
    s.skip_ws();
    if let Some(c) = s.peek() {
        return Err(s.err(format!("unexpected trailing character '{c}'")));
    }
    Ok(SearchIndex::new(entries))
}
