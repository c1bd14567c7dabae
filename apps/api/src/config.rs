use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::matching::scorer::ScoreFloor;

/// Application configuration loaded from environment variables.
/// Nothing is required; every variable has a working default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub match_score_floor: ScoreFloor,
    /// When set, postings come from the HireFlow backend instead of fixtures.
    pub backend_url: Option<String>,
    /// When set, the backend session token is persisted here.
    pub token_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let match_score_floor = match lookup("MATCH_SCORE_FLOOR") {
            Some(raw) => {
                let value = raw
                    .trim()
                    .parse::<u8>()
                    .context("MATCH_SCORE_FLOOR must be an integer")?;
                ScoreFloor::new(value)
                    .ok_or_else(|| anyhow!("MATCH_SCORE_FLOOR must be between 0 and 99, got {value}"))?
            }
            None => ScoreFloor::DEFAULT,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            match_score_floor,
            backend_url: non_empty(lookup("HIREFLOW_API_URL")),
            token_path: non_empty(lookup("HIREFLOW_TOKEN_PATH")).map(PathBuf::from),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
