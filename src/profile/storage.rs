//! Filesystem helpers for reading business profile documents.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::defaults::default_profile;
use super::model::BusinessProfile;

/// On-disk encodings accepted for profile documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Yaml,
}

impl ProfileFormat {
    /// Picks the format from the file extension; anything unknown is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ProfileFormat::Yaml,
            _ => ProfileFormat::Json,
        }
    }
}

/// Parses a profile document held in memory.
pub fn parse_profile(data: &str, format: ProfileFormat) -> Result<BusinessProfile> {
    let profile = match format {
        ProfileFormat::Json => serde_json::from_str(data)?,
        ProfileFormat::Yaml => serde_yaml::from_str(data)?,
    };
    Ok(profile)
}

/// Reads and parses the profile stored at `path`.
pub fn read_profile<P: AsRef<Path>>(path: P) -> Result<BusinessProfile> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed reading business profile {:?}", path))?;
    parse_profile(&data, ProfileFormat::from_path(path))
        .with_context(|| format!("Failed parsing business profile {:?}", path))
}

/// Loads the profile at `path`, substituting the minimal default profile when
/// no path is given or the file cannot be read or parsed.
pub fn load_or_default(path: Option<&Path>) -> BusinessProfile {
    let Some(path) = path else {
        tracing::info!("No business profile configured; using the default profile");
        return default_profile();
    };
    match read_profile(path) {
        Ok(profile) => {
            tracing::info!(
                business = profile.name(),
                services = profile.services.len(),
                products = profile.products.len(),
                faqs = profile.faqs.len(),
                "Loaded business profile from {:?}",
                path
            );
            profile
        }
        Err(err) => {
            tracing::warn!("Error loading business profile: {:#}", err);
            default_profile()
        }
    }
}
