//! Recorded game files as saved by the game tracker.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use statiq_core::{Play, TeamInfo};

#[derive(Debug, Deserialize)]
pub struct GameFile {
    pub home: TeamInfo,
    pub away: TeamInfo,
    #[serde(default)]
    pub quarter: Option<String>,
    #[serde(default)]
    pub clock: Option<String>,
    #[serde(default)]
    pub plays: Vec<Play>,
}

impl GameFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read game file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse game file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
