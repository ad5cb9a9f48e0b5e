// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Markup scanning and term frequency ranking
//!
//! Works on the raw response text with plain string scanning; no HTML
//! parser or regex engine is involved. Malformed markup never fails, it
//! only falls back to the default title and description.

use rand::RngCore;
use std::collections::HashMap;

use super::metrics::MetricsProvider;
use super::types::{ExtractedPage, RankedToken};

pub const DEFAULT_TITLE: &str = "No title found";
pub const DEFAULT_DESCRIPTION: &str = "No description found";

/// Shortest run of letters that counts as a token
pub const MIN_TOKEN_LEN: usize = 4;
/// Maximum number of ranked terms kept per page
pub const MAX_TOP_TOKENS: usize = 10;

const TITLE_OPEN: &str = "<title>";
const TITLE_CLOSE: &str = "</title>";
const META_DESCRIPTION_PREFIX: &str = "<meta name=\"description\" content=\"";

/// A distinct term and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCount {
    pub term: String,
    pub frequency: u32,
}

/// Everything pulled out of a page before metrics are attached
#[derive(Debug, Clone, PartialEq)]
pub struct PageExtract {
    pub title: String,
    pub meta_description: String,
    /// Total tokens, duplicates included
    pub word_count: usize,
    /// Most frequent terms first; ties keep first-occurrence order
    pub top_terms: Vec<TermCount>,
}

impl PageExtract {
    /// Attach synthesized metrics to each ranked term
    pub fn into_page(
        self,
        url: &str,
        provider: &dyn MetricsProvider,
        rng: &mut dyn RngCore,
    ) -> ExtractedPage {
        let top_tokens = self
            .top_terms
            .into_iter()
            .map(|term| RankedToken {
                metrics: provider.metrics(&term.term, rng),
                text: term.term,
                frequency: term.frequency,
            })
            .collect();

        ExtractedPage {
            url: url.to_string(),
            title: self.title,
            meta_description: self.meta_description,
            word_count: self.word_count,
            top_tokens,
        }
    }
}

/// Extract title, description and ranked terms from raw markup
///
/// `limit` is clamped to [`MAX_TOP_TOKENS`].
pub fn extract(raw: &str, limit: usize) -> PageExtract {
    let title = find_title(raw).unwrap_or(DEFAULT_TITLE).to_string();
    let meta_description = find_meta_description(raw)
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();

    let text = strip_tags(raw);
    let tokens = tokenize(&text);
    let word_count = tokens.len();
    let top_terms = rank_terms(&tokens, limit.min(MAX_TOP_TOKENS));

    PageExtract {
        title,
        meta_description,
        word_count,
        top_terms,
    }
}

/// Content of the first `<title>...</title>` span on a single line
pub fn find_title(raw: &str) -> Option<&str> {
    find_delimited(raw, TITLE_OPEN, TITLE_CLOSE)
}

/// Value of the first `<meta name="description" content="...">` attribute
pub fn find_meta_description(raw: &str) -> Option<&str> {
    find_delimited(raw, META_DESCRIPTION_PREFIX, "\"")
}

/// First span between `open` and the nearest following `close`
///
/// Delimiters match ASCII case-insensitively. A candidate whose content
/// would cross a line break is skipped in favour of the next `open`.
fn find_delimited<'a>(raw: &'a str, open: &str, close: &str) -> Option<&'a str> {
    // ASCII lowercasing keeps byte offsets aligned with `raw`
    let folded = raw.to_ascii_lowercase();
    let open = open.to_ascii_lowercase();
    let close = close.to_ascii_lowercase();

    let mut search_from = 0;
    while let Some(found) = folded[search_from..].find(&open) {
        let start = search_from + found + open.len();
        let line_end = folded[start..]
            .find('\n')
            .map(|offset| start + offset)
            .unwrap_or(folded.len());

        if let Some(offset) = folded[start..line_end].find(&close) {
            return Some(&raw[start..start + offset]);
        }
        search_from = start;
    }
    None
}

/// Replace every `<...>` tag with a single space
pub fn strip_tags(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            // `<>` is not a tag
            Some(0) => {
                text.push('<');
                rest = after;
            }
            Some(close) => {
                text.push(' ');
                rest = &after[close + 1..];
            }
            None => {
                text.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    text.push_str(rest);
    text
}

/// Lowercased tokens in order of appearance
///
/// A token is a whole word made only of ASCII letters, at least
/// [`MIN_TOKEN_LEN`] long. Words glued to digits, underscores or
/// non-ASCII letters are dropped entirely.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| word.len() >= MIN_TOKEN_LEN && word.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|word| word.to_ascii_lowercase())
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Rank distinct tokens by descending frequency
///
/// Equal frequencies keep the order in which the terms first appeared.
pub fn rank_terms(tokens: &[String], limit: usize) -> Vec<TermCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TermCount> = Vec::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&slot) => counts[slot].frequency += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push(TermCount {
                    term: token.clone(),
                    frequency: 1,
                });
            }
        }
    }

    // Stable sort preserves first-occurrence order among ties
    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counts.truncate(limit);
    counts
}
