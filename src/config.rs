//! Application configuration.
//!
//! Defaults live in constants. A few values can be overridden at compile time
//! through environment variables; rebuild after changing them.

use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "https://ninte-kadha-backend-production.up.railway.app/upload";
pub const MAX_UPLOAD_BYTES: u64 = 45 * 1024 * 1024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const FLIP_DURATION_MS: u32 = 700;
pub const SPARKLE_DURATION_MS: u32 = 1000;
pub const STORY_STORAGE_KEY: &str = "autobiography";
pub const BOOK_TITLE: &str = "Your Digital Journey";
pub const BOOK_AUTHOR: &str = "Based on Your Digital Journey";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub max_upload_bytes: u64,
    pub request_timeout: Duration,
    pub flip_duration_ms: u32,
    pub sparkle_duration_ms: u32,
    pub storage_key: String,
    pub book_title: String,
    pub book_author: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            flip_duration_ms: FLIP_DURATION_MS,
            sparkle_duration_ms: SPARKLE_DURATION_MS,
            storage_key: STORY_STORAGE_KEY.to_string(),
            book_title: BOOK_TITLE.to_string(),
            book_author: BOOK_AUTHOR.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Defaults with the compile-time overrides applied.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("NINTE_KADHA_BACKEND_URL"),
            option_env!("NINTE_KADHA_TIMEOUT_SECS"),
            option_env!("NINTE_KADHA_LOG_LEVEL"),
        )
    }

    /// Apply raw override values. Blank or unparseable values keep the default.
    pub fn with_overrides(
        mut self,
        backend_url: Option<&str>,
        timeout_secs: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        if let Some(url) = backend_url.map(str::trim).filter(|s| !s.is_empty()) {
            self.backend_url = url.to_string();
        }
        if let Some(secs) = timeout_secs
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(level) = log_level.and_then(|s| s.trim().parse::<log::Level>().ok()) {
            self.log_level = level;
        }
        self
    }
}
