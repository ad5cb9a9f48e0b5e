// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::research::{ResearchConfig, ResearchService};

/// SEO research from the command line
#[derive(Parser, Debug)]
#[command(name = "seo-cli")]
#[command(version)]
#[command(about = "Keyword, competitor and URL research without the HTTP server", long_about = None)]
pub struct Cli {
    /// Seed the random source for reproducible output
    #[arg(long, global = true, env = "RESEARCH_RNG_SEED")]
    pub seed: Option<u64>,

    /// Page fetch timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize metrics, related keywords and a SERP for a keyword
    Keyword {
        /// Keyword or phrase
        keyword: String,
    },

    /// Synthesize a competitor profile for a domain
    Competitor {
        /// Domain such as example.com
        domain: String,
    },

    /// Fetch a page and rank its most frequent terms
    Url {
        /// Page URL; https:// is assumed when no scheme is given
        url: String,
    },
}

impl Cli {
    /// Research configuration for a one-shot run
    pub fn research_config(&self) -> ResearchConfig {
        ResearchConfig {
            fetch_timeout_secs: self.timeout,
            rng_seed: self.seed,
            ..ResearchConfig::immediate()
        }
    }
}

/// Execute CLI command, returning the pretty-printed JSON result
pub async fn execute(cli: Cli) -> Result<String> {
    let config = cli.research_config();
    config.validate().map_err(|e| anyhow!(e))?;
    let service = ResearchService::new(config)?;

    match cli.command {
        Commands::Keyword { keyword } => to_json(&service.analyze_keyword(&keyword).await?),
        Commands::Competitor { domain } => to_json(&service.analyze_competitor(&domain).await?),
        Commands::Url { url } => to_json(&service.analyze_url(&url).await?),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
