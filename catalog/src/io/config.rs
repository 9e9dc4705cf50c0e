//! Catalog configuration stored in `catalog.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::filter::ALL_DOMAINS;
use crate::core::types::OpeningsThresholds;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "catalog.toml";

/// Catalog configuration (TOML).
///
/// Missing fields default to the values the browser has always shown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Dataset JSON file. Relative paths resolve against the config file's
    /// directory. When unset the embedded dataset is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,

    /// Domain preselected in listings (`"all"` for every domain).
    pub default_domain: String,

    pub detail: DetailConfig,

    pub openings: OpeningsThresholds,
}

/// Limits for the course detail panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DetailConfig {
    /// Skills shown under "Key Skills".
    pub max_skills: usize,
    /// Certifications shown under "Recommended Certifications".
    pub max_certifications: usize,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            max_skills: 6,
            max_certifications: 3,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            default_domain: ALL_DOMAINS.to_string(),
            detail: DetailConfig::default(),
            openings: OpeningsThresholds::default(),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_domain.trim().is_empty() {
            return Err(anyhow!("default_domain must be non-empty"));
        }
        if self.detail.max_skills == 0 {
            return Err(anyhow!("detail.max_skills must be > 0"));
        }
        if self.detail.max_certifications == 0 {
            return Err(anyhow!("detail.max_certifications must be > 0"));
        }
        if self.openings.medium_above >= self.openings.large_above {
            return Err(anyhow!(
                "openings.medium_above ({}) must be < openings.large_above ({})",
                self.openings.medium_above,
                self.openings.large_above
            ));
        }
        Ok(())
    }

    /// Dataset path with relative paths anchored at `config_dir`.
    pub fn dataset_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.dataset.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                config_dir.join(path)
            }
        })
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CatalogConfig::default()`.
pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = CatalogConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CatalogConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), dataset = ?cfg.dataset, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CatalogConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
