use crate::error::{PortfolioError, Result};
use crate::models::PortfolioSnapshot;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

pub const DEFAULT_SNAPSHOT_PATH: &str = "src/data/github-analysis.json";

/// Overwrites `path` with the pretty-printed snapshot, creating parent
/// directories as needed.
pub fn save_snapshot(snapshot: &PortfolioSnapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "Analysis snapshot written");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<PortfolioSnapshot> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PortfolioError::MissingSnapshot(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&data)?)
}
