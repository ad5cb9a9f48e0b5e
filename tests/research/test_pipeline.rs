// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end research service tests
//!
//! URL analysis runs against the local fixture server; keyword and
//! competitor analysis run with a seeded random source.

use seo_research_node::research::{
    CompetitionLevel, ResearchConfig, ResearchError, ResearchService,
};

use super::test_fetcher::spawn_fixture_server;

fn seeded_service(seed: u64) -> ResearchService {
    let config = ResearchConfig {
        fetch_timeout_secs: 1,
        rng_seed: Some(seed),
        ..ResearchConfig::immediate()
    };
    ResearchService::new(config).unwrap()
}

#[tokio::test]
async fn test_analyze_url_end_to_end() {
    let addr = spawn_fixture_server().await;
    let service = seeded_service(1);

    let page = service
        .analyze_url(&format!("http://{}/page", addr))
        .await
        .unwrap();

    assert_eq!(page.title, "Rust SEO Guide");
    assert_eq!(page.meta_description, "Learn keyword research with Rust.");
    assert!(page.top_tokens.len() <= 10);
    assert_eq!(page.word_count, 20);

    let top: Vec<(&str, u32)> = page
        .top_tokens
        .iter()
        .map(|t| (t.text.as_str(), t.frequency))
        .collect();
    assert_eq!(top[0], ("research", 4));
    assert_eq!(top[1], ("keyword", 3));
    // "rust" (title) appears before "content", so it wins the tie
    assert_eq!(top[2], ("rust", 2));
    assert_eq!(top[3], ("content", 2));

    let total: u32 = page.top_tokens.iter().map(|t| t.frequency).sum();
    assert!(page.word_count as u32 >= total);
}

#[tokio::test]
async fn test_analyze_url_surfaces_fetch_errors() {
    let addr = spawn_fixture_server().await;
    let service = seeded_service(1);

    let result = service
        .analyze_url(&format!("http://{}/missing", addr))
        .await;
    assert!(matches!(result, Err(ResearchError::Fetch(_))));
}

#[tokio::test]
async fn test_analyze_url_rejects_invalid_format_before_io() {
    let service = seeded_service(1);
    let result = service.analyze_url("https://exa mple.com").await;
    assert!(matches!(result, Err(ResearchError::InvalidUrlFormat { .. })));
}

#[tokio::test]
async fn test_keyword_analysis_contract() {
    let service = seeded_service(9);
    let analysis = service.analyze_keyword("seo tool").await.unwrap();

    assert_eq!(
        analysis.related_keywords,
        vec![
            "best seo tool",
            "top seo tool",
            "seo tool tool",
            "seo tool software",
            "seo tool for beginners",
            "seo tool vs",
        ]
    );
    let positions: Vec<u32> = analysis.serp_results.iter().map(|r| r.position).collect();
    assert_eq!(positions, (1..=10).collect::<Vec<u32>>());
    assert!((20..=90).contains(&analysis.metrics.difficulty));
    assert!(CompetitionLevel::ALL.contains(&analysis.metrics.competition));
}

#[tokio::test]
async fn test_competitor_analysis_contract() {
    let service = seeded_service(3);
    let analysis = service.analyze_competitor(" example.com ").await.unwrap();

    let keywords: Vec<&str> = analysis
        .profile
        .top_keywords
        .iter()
        .map(|k| k.keyword.as_str())
        .collect();
    assert_eq!(
        keywords,
        vec![
            "example review",
            "best example alternative",
            "example pricing",
            "how to use example",
            "example vs competitors",
        ]
    );
    assert_eq!(analysis.profile.domain, "example.com");
}

#[tokio::test]
async fn test_competitor_analysis_rejects_bad_domains() {
    let service = seeded_service(3);
    for domain in ["nodothere", "bad_domain.com"] {
        let result = service.analyze_competitor(domain).await;
        assert!(
            matches!(result, Err(ResearchError::InvalidDomainFormat { .. })),
            "{} should be rejected",
            domain
        );
    }
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let service = seeded_service(5);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.analyze_keyword("rust").await.unwrap() })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap().metrics);
    }
    // Same seed per request, so every concurrent request sees the same draws
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
