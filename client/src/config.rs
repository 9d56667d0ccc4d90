//! Build-time client configuration.
//!
//! The API base URL is baked into the WASM bundle from `REFERRALS_API_URL`
//! at compile time; the browser has no process environment to read later.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `REFERRALS_API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Base URL of the referral service, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("REFERRALS_API_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}
