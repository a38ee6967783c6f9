use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_usize(profile: &str, key: &str, default: usize) -> usize {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key).as_deref() {
        Some("1") | Some("true") | Some("yes") => true,
        Some("0") | Some("false") | Some("no") => false,
        _ => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub data: DataConfig,
    pub queries: QueryConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `DOCREADS_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("DOCREADS_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            data: DataConfig::from_env_profiled(p),
            queries: QueryConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  data:     file={}, skip_malformed={}",
            self.data
                .data_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string()),
            self.data.skip_malformed
        );
        tracing::info!(
            "  queries:  top_readers={}, also_likes={}",
            self.queries.top_readers,
            self.queries.also_likes
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: String::new(),
            data: DataConfig::default(),
            queries: QueryConfig::default(),
        }
    }
}

// ── Data source ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Default event file when none is given on the command line.
    pub data_file: Option<PathBuf>,
    /// Skip malformed lines instead of aborting the load.
    pub skip_malformed: bool,
}

impl DataConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            data_file: profiled_env_opt(p, "DOCREADS_DATA_FILE").map(PathBuf::from),
            skip_malformed: profiled_env_bool(p, "DOCREADS_SKIP_MALFORMED", false),
        }
    }
}

// ── Query limits ──────────────────────────────────────────────

pub const DEFAULT_TOP_READERS: usize = 10;
pub const DEFAULT_ALSO_LIKES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Number of visitors returned by the top-readers ranking.
    pub top_readers: usize,
    /// Number of pairs returned by the also-likes ranking.
    pub also_likes: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_readers: DEFAULT_TOP_READERS,
            also_likes: DEFAULT_ALSO_LIKES,
        }
    }
}

impl QueryConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            top_readers: profiled_env_usize(p, "DOCREADS_TOP_N", DEFAULT_TOP_READERS),
            also_likes: profiled_env_usize(p, "DOCREADS_LIKES_N", DEFAULT_ALSO_LIKES),
        }
    }
}
