// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` file parser.
//!
//! # Format
//!
//! ```text
//! # comment                      skipped, as are blank lines
//! KEY=bare value  # comment      trimmed, inline comment needs a blank before '#'
//! export KEY=value               'export ' prefix ignored
//! KEY: value                     ':' works like '='
//! KEY='literal $NOT \n'          no escapes, no substitution, may span lines
//! KEY="line\n${OTHER}"           \n \r \t \" \\ \$ escapes, substitution, may span lines
//! export KEY                     KEY must be assigned earlier in the file
//! ```
//!
//! Parsing is pure: it reads the live environment only through the
//! [`Lookup`] handed to [`parse_with`] or [`Parser::with_lookup`]. A key assigned twice keeps
//! its first position and takes the later value.

pub mod substitution;


use std::collections::HashMap;

use serde::Serialize;

use crate::error::{ParseError, ParseErrorKind};
use crate::utility::encoding::{decode_to_utf8, detect};

pub use substitution::{LiveLookup, Lookup, NoLookup, Precedence};
use substitution::{Resolver, is_name_char, is_name_start};

/// One `KEY=VALUE` assignment after unquoting and substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvPair {
    pub key: String,
    pub value: String,
}

impl EnvPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parses env file bytes without substitution lookups.
///
/// # Errors
///
/// Returns a [`ParseError`] on malformed syntax or invalid UTF-8.
///
/// # Example
/// ```
/// use dotenv_rs::parser::{parse_bytes, EnvPair};
///
/// let pairs = parse_bytes(b"\xEF\xBB\xBFBOM=UTF-8\n").unwrap();
/// assert_eq!(pairs, vec![EnvPair::new("BOM", "UTF-8")]);
/// ```
pub fn parse_bytes(bytes: &[u8]) -> ParseResult<Vec<EnvPair>> {
    Parser::new().parse_bytes(bytes)
}

/// Parses env file text without substitution lookups.
///
/// # Errors
///
/// Returns a [`ParseError`] on malformed syntax.
pub fn parse_str(text: &str) -> ParseResult<Vec<EnvPair>> {
    Parser::new().parse_str(text)
}

/// Parses env file text, resolving `$NAME` through `lookup` before the
/// file's own earlier keys.
///
/// # Errors
///
/// Returns a [`ParseError`] on malformed syntax.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use dotenv_rs::parser::{parse_with, EnvPair};
///
/// let vars = BTreeMap::from([("HOME".to_string(), "/home/me".to_string())]);
/// let pairs = parse_with("CACHE=${HOME}/.cache\n", &vars).unwrap();
/// assert_eq!(pairs, vec![EnvPair::new("CACHE", "/home/me/.cache")]);
/// ```
pub fn parse_with(text: &str, lookup: &dyn Lookup) -> ParseResult<Vec<EnvPair>> {
    Parser::new().with_lookup(lookup).parse_str(text)
}

/// Configurable parser.
pub struct Parser<'a> {
    lookup: &'a dyn Lookup,
    precedence: Precedence,
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lookup: &NoLookup,
            precedence: Precedence::default(),
        }
    }

    /// Sets where `$NAME` references look outside the file.
    #[must_use]
    pub fn with_lookup(mut self, lookup: &'a dyn Lookup) -> Self {
        self.lookup = lookup;
        self
    }

    #[must_use]
    pub const fn with_precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Decodes (stripping any BOM) and parses `bytes`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on malformed syntax or invalid UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> ParseResult<Vec<EnvPair>> {
        let text = decode_to_utf8(bytes).map_err(|e| {
            let (_, bom_len) = detect(bytes);
            let valid = &bytes[bom_len..bom_len + e.valid_up_to];
            let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
            ParseError::new(line, ParseErrorKind::InvalidUtf8)
        })?;
        self.parse_str(&text)
    }

    /// Parses `text`. A leading U+FEFF is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on malformed syntax.
    pub fn parse_str(&self, text: &str) -> ParseResult<Vec<EnvPair>> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let resolver = Resolver::new(self.lookup, self.precedence);
        let mut scanner = Scanner::new(text);
        let mut pairs = Pairs::default();

        loop {
            scanner.skip_blanks();
            match scanner.peek() {
                None => break,
                Some('\n') => {
                    scanner.bump();
                }
                Some('#') => scanner.skip_line(),
                Some(_) => statement(&mut scanner, &mut pairs, &resolver)?,
            }
        }

        Ok(pairs.entries)
    }
}

/// Parsed pairs in first-seen order.
#[derive(Default)]
struct Pairs {
    entries: Vec<EnvPair>,
    index: HashMap<String, usize>,
}

impl Pairs {
    fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].value.as_str())
    }

    fn insert(&mut self, key: &str, value: String) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].value = value;
        } else {
            self.index.insert(key.to_owned(), self.entries.len());
            self.entries.push(EnvPair::new(key, value));
        }
    }
}

fn statement(scanner: &mut Scanner<'_>, pairs: &mut Pairs, resolver: &Resolver<'_>) -> ParseResult<()> {
    let line = scanner.line;
    let line_text = scanner.rest_of_line().trim().to_string();
    let invalid_line = || ParseError::new(line, ParseErrorKind::InvalidLine(line_text.clone()));

    let exported = scanner.eat_keyword("export");
    let key = scanner.take_while(is_key_char);
    if key.is_empty() {
        return Err(invalid_line());
    }

    scanner.skip_blanks();
    if !scanner.eat('=') && !scanner.eat(':') {
        if exported && (scanner.at_line_end() || scanner.peek() == Some('#')) {
            validate_key(key, line)?;
            if pairs.get(key).is_none() {
                return Err(ParseError::new(
                    line,
                    ParseErrorKind::UndefinedExport(key.to_string()),
                ));
            }
            return Ok(());
        }
        return Err(invalid_line());
    }
    validate_key(key, line)?;

    scanner.skip_blanks();
    let value = match scanner.peek() {
        Some('\'') => {
            scanner.bump();
            let value = single_quoted(scanner, line)?;
            after_quote(scanner)?;
            value
        }
        Some('"') => {
            scanner.bump();
            let value = double_quoted(scanner, line, pairs, resolver)?;
            after_quote(scanner)?;
            value
        }
        _ => bare(scanner, pairs, resolver),
    };

    if value.contains('\0') {
        return Err(ParseError::new(line, ParseErrorKind::NulByte));
    }

    tracing::trace!(key, line, "parsed assignment");
    pairs.insert(key, value);
    Ok(())
}

const fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

fn validate_key(key: &str, line: usize) -> ParseResult<()> {
    match key.chars().next() {
        Some(c) if is_name_start(c) => Ok(()),
        _ => Err(ParseError::new(
            line,
            ParseErrorKind::InvalidKey(key.to_string()),
        )),
    }
}

fn single_quoted(scanner: &mut Scanner<'_>, line: usize) -> ParseResult<String> {
    let mut out = String::new();
    loop {
        match scanner.bump() {
            None => {
                return Err(ParseError::new(
                    line,
                    ParseErrorKind::UnterminatedQuote('\''),
                ));
            }
            Some('\'') => return Ok(out),
            Some(c) => out.push(c),
        }
    }
}

fn double_quoted(
    scanner: &mut Scanner<'_>,
    line: usize,
    pairs: &Pairs,
    resolver: &Resolver<'_>,
) -> ParseResult<String> {
    let unterminated = || ParseError::new(line, ParseErrorKind::UnterminatedQuote('"'));
    let mut out = String::new();
    loop {
        match scanner.bump().ok_or_else(unterminated)? {
            '"' => return Ok(out),
            '\\' => match scanner.bump().ok_or_else(unterminated)? {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                other => out.push(other),
            },
            '$' => substitute(scanner, pairs, resolver, &mut out),
            c => out.push(c),
        }
    }
}

/// Checks that only blanks or a comment follow a closing quote.
fn after_quote(scanner: &mut Scanner<'_>) -> ParseResult<()> {
    scanner.skip_blanks();
    if scanner.at_line_end() || scanner.peek() == Some('#') {
        return Ok(());
    }
    Err(ParseError::new(
        scanner.line,
        ParseErrorKind::TrailingCharacters(scanner.rest_of_line().trim().to_string()),
    ))
}

/// Reads an unquoted value up to the end of line or an inline comment.
fn bare(scanner: &mut Scanner<'_>, pairs: &Pairs, resolver: &Resolver<'_>) -> String {
    let start = scanner.pos;
    let mut prev_blank = true;
    while let Some(c) = scanner.peek() {
        if c == '\n' || (c == '#' && prev_blank) {
            break;
        }
        scanner.bump();
        prev_blank = matches!(c, ' ' | '\t');
    }
    let raw = scanner.src[start..scanner.pos].trim_end();

    let mut inner = Scanner::new(raw);
    let mut out = String::with_capacity(raw.len());
    while let Some(c) = inner.bump() {
        match c {
            '\\' if inner.peek() == Some('$') => {
                inner.bump();
                out.push('$');
            }
            '$' => substitute(&mut inner, pairs, resolver, &mut out),
            c => out.push(c),
        }
    }
    out
}

/// Expands the reference following a `$` that was just consumed.
fn substitute(scanner: &mut Scanner<'_>, pairs: &Pairs, resolver: &Resolver<'_>, out: &mut String) {
    match scanner.reference() {
        Some(name) => out.push_str(&resolver.resolve(name, pairs.get(name))),
        None => out.push('$'),
    }
}

/// Character cursor over the input that tracks line numbers.
struct Scanner<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
}

impl<'s> Scanner<'s> {
    const fn new(src: &'s str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes `word` only when a blank follows it.
    fn eat_keyword(&mut self, word: &str) -> bool {
        let Some(after) = self.rest().strip_prefix(word) else {
            return false;
        };
        if !after.starts_with([' ', '\t']) {
            return false;
        }
        self.pos += word.len();
        self.skip_blanks();
        true
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    /// Skips spaces, tabs and carriage returns, never newlines.
    fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
            self.bump();
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some('\n'))
    }

    fn rest_of_line(&self) -> &'s str {
        let rest = self.rest();
        rest.find('\n').map_or(rest, |end| &rest[..end])
    }

    /// Reads `NAME` or `{NAME}` after a `$`; rewinds and returns `None`
    /// when there is no well-formed reference.
    fn reference(&mut self) -> Option<&'s str> {
        let start = self.pos;
        let braced = self.eat('{');
        let name = match self.peek() {
            Some(c) if is_name_start(c) => self.take_while(is_name_char),
            _ => "",
        };
        if name.is_empty() || (braced && !self.eat('}')) {
            self.pos = start;
            return None;
        }
        Some(name)
    }
}
