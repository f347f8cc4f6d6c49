// src/config.rs

use std::fmt;
use std::path::PathBuf;
use url::Url;

use crate::error::{Error, Result};

const DEFAULT_CSV_FILE: &str = "controls.csv";
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Process-wide settings, read once at startup and passed down explicitly.
#[derive(Clone)]
pub struct Config {
    /// `owner/repo` that receives the issues.
    pub repo: String,
    pub token: String,
    pub csv_file: PathBuf,
    /// Echo every request and response.
    pub debug: bool,
    pub api_base: Url,
}

impl Config {
    /// Read `REPO`, `GITHUB_TOKEN`, `CSV_FILE`, `DEBUG` and `GITHUB_API_URL`
    /// from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an arbitrary key lookup.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let repo = get("REPO").ok_or_else(|| Error::Config("REPO env var not set".into()))?;
        let token = get("GITHUB_TOKEN")
            .ok_or_else(|| Error::Config("GITHUB_TOKEN env var not set".into()))?;

        let csv_file = get("CSV_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_FILE));
        let debug = get("DEBUG").map(|v| parse_flag(&v)).unwrap_or(false);

        let raw_base = get("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&raw_base)
            .map_err(|e| Error::Config(format!("invalid GITHUB_API_URL {raw_base:?}: {e}")))?;

        Ok(Self {
            repo,
            token,
            csv_file,
            debug,
            api_base,
        })
    }

    /// `{api_base}/repos/{repo}/issues`
    pub fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/issues",
            self.api_base.as_str().trim_end_matches('/'),
            self.repo
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("repo", &self.repo)
            .field("token", &"***")
            .field("csv_file", &self.csv_file)
            .field("debug", &self.debug)
            .field("api_base", &self.api_base.as_str())
            .finish()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
