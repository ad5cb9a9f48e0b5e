// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Related keyword expansion from fixed templates

const PREFIXES: [&str; 6] = ["best", "top", "how to", "what is", "free", "online"];
const SUFFIXES: [&str; 6] = ["tool", "software", "guide", "tips", "review", "2024"];
const MODIFIERS: [&str; 5] = ["for beginners", "vs", "alternative", "pricing", "features"];

/// How many entries of each template list are used
///
/// Only the head of each list participates; widening this is the
/// extension point for broader coverage.
const TEMPLATES_PER_LIST: usize = 2;

/// Number of phrases [`generate_related_keywords`] always returns
pub const RELATED_KEYWORD_COUNT: usize = 3 * TEMPLATES_PER_LIST;

/// Expand a keyword into its related phrases
///
/// Deterministic: prefixed forms first, then suffixed, then modified.
pub fn generate_related_keywords(keyword: &str) -> Vec<String> {
    PREFIXES
        .iter()
        .take(TEMPLATES_PER_LIST)
        .map(|prefix| format!("{} {}", prefix, keyword))
        .chain(
            SUFFIXES
                .iter()
                .take(TEMPLATES_PER_LIST)
                .map(|suffix| format!("{} {}", keyword, suffix)),
        )
        .chain(
            MODIFIERS
                .iter()
                .take(TEMPLATES_PER_LIST)
                .map(|modifier| format!("{} {}", keyword, modifier)),
        )
        .collect()
}
