// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Heuristic keyword metric synthesis
//!
//! There is no live data source behind these numbers. Each call draws four
//! independent values from the supplied random source and nudges them by
//! simple keyword-shape rules (phrase length, word count).

use rand::{Rng, RngCore};

use super::types::{CompetitionLevel, KeywordMetrics};

pub const MIN_SEARCH_VOLUME: u32 = 100;
pub const MAX_SEARCH_VOLUME: u32 = 50_000;
pub const MIN_DIFFICULTY: u32 = 20;
pub const MAX_DIFFICULTY: u32 = 90;
pub const MIN_CPC: f64 = 0.50;
pub const MAX_CPC: f64 = 15.00;

/// Phrases with more words than this count as long-tail
const LONG_TAIL_WORDS: usize = 3;
/// Keywords longer than this (in characters) get a difficulty discount
const EASY_KEYWORD_CHARS: usize = 20;
const EASY_KEYWORD_DISCOUNT: u32 = 20;

/// Source of keyword metrics
///
/// The default implementation is [`HeuristicMetrics`]. A real data
/// integration can implement this trait and be handed to the research
/// service without changing any caller.
pub trait MetricsProvider: Send + Sync {
    /// Produce metrics for `keyword`, drawing any randomness from `rng`
    fn metrics(&self, keyword: &str, rng: &mut dyn RngCore) -> KeywordMetrics;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Bounded-random metrics shaped by keyword length
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMetrics;

impl MetricsProvider for HeuristicMetrics {
    fn metrics(&self, keyword: &str, rng: &mut dyn RngCore) -> KeywordMetrics {
        synthesize_metrics(keyword, rng)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Synthesize metrics for a keyword
///
/// Draw order is fixed (volume, difficulty, cpc, competition) so a seeded
/// source always yields the same metrics for the same keyword.
pub fn synthesize_metrics<R: Rng + ?Sized>(keyword: &str, rng: &mut R) -> KeywordMetrics {
    let word_count = keyword.split_whitespace().count();
    let char_count = keyword.chars().count();

    let mut search_volume = rng.gen_range(MIN_SEARCH_VOLUME..=MAX_SEARCH_VOLUME);
    if word_count > LONG_TAIL_WORDS {
        search_volume /= (word_count - 1) as u32;
    }

    let mut difficulty = rng.gen_range(MIN_DIFFICULTY..=MAX_DIFFICULTY);
    if char_count > EASY_KEYWORD_CHARS {
        difficulty = difficulty
            .saturating_sub(EASY_KEYWORD_DISCOUNT)
            .max(MIN_DIFFICULTY);
    }

    let cpc = round_to(rng.gen_range(MIN_CPC..=MAX_CPC), 2);

    let competition = CompetitionLevel::ALL[rng.gen_range(0..CompetitionLevel::ALL.len())];

    KeywordMetrics {
        search_volume,
        difficulty,
        cpc,
        competition,
    }
}

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
