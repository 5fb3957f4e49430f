//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible default, so a host can run with an empty
//! environment; a `.env` file is honored for local development.

use std::env;
use std::str::FromStr;

/// Map and marker presentation settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Zoom level used when the map is first rendered
    pub initial_zoom: f64,
    /// Maximum marker popup width in pixels
    pub popup_max_width: u32,
    /// Minimum marker popup width in pixels
    pub popup_min_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_zoom: 13.0,
            popup_max_width: 200,
            popup_min_width: 50,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Self {
            initial_zoom: env_or("TRAILMARK_INITIAL_ZOOM", defaults.initial_zoom),
            popup_max_width: env_or("TRAILMARK_POPUP_MAX_WIDTH", defaults.popup_max_width),
            popup_min_width: env_or("TRAILMARK_POPUP_MIN_WIDTH", defaults.popup_min_width),
        }
    }
}

/// Read and parse an environment variable, or fall back to `default`.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
