// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use seo_research_node::{
    api::{start_server, ApiConfig, AppState},
    research::{ResearchConfig, ResearchService},
    version,
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("Starting SEO research node {}", version::get_version_string());

    let research_config = ResearchConfig::from_env();
    research_config.validate().map_err(|e| anyhow!(e))?;
    if let Some(seed) = research_config.rng_seed {
        tracing::warn!("RESEARCH_RNG_SEED={} set, every response will repeat", seed);
    }

    let service = ResearchService::new(research_config)?;
    let api_config = ApiConfig::from_env();

    start_server(api_config, AppState::new(service)).await
}
