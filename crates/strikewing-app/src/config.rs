//! Campaign file loading.

use std::fs;
use std::path::Path;

use strikewing_core::error::SimError;
use strikewing_sim::levels::{default_campaign, CampaignConfig};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed campaign file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid campaign: {0}")]
    Invalid(#[from] SimError),
}

/// Parse and validate a campaign from JSON text.
pub fn parse_campaign(json: &str) -> Result<CampaignConfig, ConfigError> {
    let config: CampaignConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load a campaign file, or the stock campaign when no path is given.
pub fn load_campaign(path: Option<&Path>) -> Result<CampaignConfig, ConfigError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            let config = parse_campaign(&json)?;
            log::info!(
                "loaded {} level(s) from {}",
                config.levels.len(),
                path.display()
            );
            Ok(config)
        }
        None => Ok(default_campaign()),
    }
}
