// Version information for the SEO research node

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-seo-research-2026-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "keyword-research",
    "competitor-analysis",
    "url-analysis",
    "seeded-randomness",
];

/// Get formatted version string
pub fn get_version_string() -> String {
    format!("{} ({})", VERSION_NUMBER, BUILD_DATE)
}
