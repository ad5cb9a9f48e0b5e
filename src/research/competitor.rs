// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Competitor profile synthesis
//!
//! A profile is built from five brand-derived keyword templates and five
//! synthetic content pages. Numbers come from bounded draws on the
//! supplied random source.

use rand::{Rng, RngCore};
use regex::Regex;
use std::sync::OnceLock;

use super::metrics::{round_to, MetricsProvider};
use super::types::{CompetitorKeyword, CompetitorProfile, ContentPage, ResearchError};

const CONTENT_TYPES: [&str; 5] = ["blog", "product", "landing", "guide", "comparison"];

/// Accepts `name.tld` style domains: letters, digits, dots and hyphens,
/// ending in a dot and at least two letters
fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("domain pattern is valid")
    })
}

/// Check a domain against the accepted format
pub fn validate_domain(domain: &str) -> Result<(), ResearchError> {
    if domain_pattern().is_match(domain) {
        Ok(())
    } else {
        Err(ResearchError::InvalidDomainFormat {
            domain: domain.to_string(),
        })
    }
}

/// Label before the first dot
pub fn brand_of(domain: &str) -> &str {
    domain.split('.').next().unwrap_or(domain)
}

/// The five keyword templates for a brand, in fixed order
pub fn keyword_templates(brand: &str) -> Vec<String> {
    vec![
        format!("{} review", brand),
        format!("best {} alternative", brand),
        format!("{} pricing", brand),
        format!("how to use {}", brand),
        format!("{} vs competitors", brand),
    ]
}

/// Build a competitor profile for a validated domain
///
/// Fails with [`ResearchError::InvalidDomainFormat`] when the domain does
/// not match the accepted format.
pub fn synthesize_competitor(
    domain: &str,
    provider: &dyn MetricsProvider,
    rng: &mut dyn RngCore,
) -> Result<CompetitorProfile, ResearchError> {
    validate_domain(domain)?;

    let traffic_estimate = rng.gen_range(10_000..=1_000_000);

    let top_keywords: Vec<CompetitorKeyword> = keyword_templates(brand_of(domain))
        .into_iter()
        .map(|keyword| {
            let metrics = provider.metrics(&keyword, rng);
            CompetitorKeyword {
                position: rng.gen_range(1..=10),
                search_volume: metrics.search_volume,
                difficulty: metrics.difficulty,
                traffic_share: round_to(rng.gen_range(5.0..=25.0), 1),
                keyword,
            }
        })
        .collect();

    // Pages pair with keywords by index, not by relevance
    let content_pages = CONTENT_TYPES
        .iter()
        .enumerate()
        .map(|(i, content_type)| ContentPage {
            url: format!("https://{}/{}-page-{}", domain, content_type, i + 1),
            title: format!("Top {} Page #{}", title_case(content_type), i + 1),
            traffic_estimate: rng.gen_range(1_000..=50_000),
            top_keyword: top_keywords
                .get(i)
                .map(|k| k.keyword.clone())
                .unwrap_or_else(|| format!("{} keyword", content_type)),
            content_type: content_type.to_string(),
        })
        .collect();

    Ok(CompetitorProfile {
        domain: domain.to_string(),
        traffic_estimate,
        top_keywords,
        content_pages,
        backlink_estimate: rng.gen_range(500..=50_000),
        domain_authority: rng.gen_range(30..=90),
    })
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
