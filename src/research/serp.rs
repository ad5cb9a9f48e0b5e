// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Synthetic search results page

use super::types::SerpResult;

/// Entries on the synthetic results page
pub const SERP_SIZE: u32 = 10;

/// Build the templated results page for a keyword
///
/// Purely derived from the keyword and the position; no randomness.
pub fn synthesize_serp(keyword: &str) -> Vec<SerpResult> {
    let slug = keyword.replace(' ', "-");

    (1..=SERP_SIZE)
        .map(|position| SerpResult {
            position,
            title: format!("Top {} Resource #{}", keyword, position),
            url: format!("https://example{}.com/{}", position, slug),
            description: format!(
                "Comprehensive guide about {} with expert insights and practical tips.",
                keyword
            ),
        })
        .collect()
}
