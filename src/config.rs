use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::DEFAULT_USER_AGENT;

pub const DEFAULT_OUTPUT: &str = "faculty_lists.xlsx";
pub const DEFAULT_SITES_FILE: &str = "sites.yml";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process settings, read from the environment. Relative paths resolve
/// against `ROOT`.
#[derive(Debug, Clone)]
pub struct Config {
    pub output: PathBuf,
    pub sites_file: PathBuf,
    pub http_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        let root = PathBuf::from(".");
        Config {
            output: root.join(DEFAULT_OUTPUT),
            sites_file: root.join(DEFAULT_SITES_FILE),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let root = PathBuf::from(get("ROOT", "."));
        let timeout_secs = get("FACULTY_HTTP_TIMEOUT_SECS", "")
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Config {
            output: root.join(get("FACULTY_OUTPUT", DEFAULT_OUTPUT)),
            sites_file: root.join(get("FACULTY_SITES_FILE", DEFAULT_SITES_FILE)),
            http_timeout: Duration::from_secs(timeout_secs),
            user_agent: get("FACULTY_USER_AGENT", DEFAULT_USER_AGENT),
        }
    }
}
