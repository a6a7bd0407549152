//! Finds the files that carry a version field, either from a `.vermanrc.json`
//! configuration file or by walking the base directory for default manifests.

use anyhow::Result;
use log::{debug, info, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".vermanrc.json";

const SKIPPED_DIRS: [&str; 3] = ["node_modules", "target", ".git"];

/// One unit of work: a file and the dotted path of its version field.
///
/// Constructed here, consumed read-only by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTarget {
    pub file_path: PathBuf,
    pub version_path: String,
}

impl VersionTarget {
    pub fn new(file_path: impl Into<PathBuf>, version_path: impl Into<String>) -> Self {
        VersionTarget {
            file_path: file_path.into(),
            version_path: version_path.into(),
        }
    }

    /// Short label used when reporting per-target outcomes.
    pub fn label(&self) -> String {
        self.file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file_path.to_string_lossy().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct Config {
    files: Vec<ConfigEntry>,
}

/// A config entry is either a bare relative path or a path plus the dotted
/// location of its version field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(rename = "versionPath")]
        version_path: Option<String>,
    },
}

/// Builds the target list for a run, rooted at an explicit base directory.
///
/// A `.vermanrc.json` in the base directory takes precedence; without one,
/// the directory tree is walked for `package.json` and `package-lock.json`
/// files. Returns an empty list when nothing is found; deciding whether that
/// is fatal is the caller's call.
pub fn find_version_targets(base_dir: impl AsRef<Path>) -> Result<Vec<VersionTarget>> {
    let base_dir = base_dir.as_ref();

    if let Some(config) = load_config(&base_dir.join(CONFIG_FILE_NAME)) {
        info!("Configuration file found: {}", CONFIG_FILE_NAME);

        let targets = config
            .files
            .into_iter()
            .map(|entry| match entry {
                ConfigEntry::Path(path) => VersionTarget::new(base_dir.join(path), "version"),
                ConfigEntry::Detailed { path, version_path } => VersionTarget::new(
                    base_dir.join(path),
                    version_path.unwrap_or_else(|| "version".to_string()),
                ),
            })
            .collect();
        return Ok(targets);
    }

    info!("No {} found. Falling back to default files.", CONFIG_FILE_NAME);
    default_targets(base_dir)
}

/// A config file that is missing, unreadable or malformed is not fatal;
/// discovery falls back to the default manifests.
fn load_config(config_path: &Path) -> Option<Config> {
    if !config_path.exists() {
        return None;
    }
    let contents = match std::fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("Cannot read {}: {}", CONFIG_FILE_NAME, err);
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!("Ignoring malformed {}: {}", CONFIG_FILE_NAME, err);
            None
        }
    }
}

fn default_targets(base_dir: &Path) -> Result<Vec<VersionTarget>> {
    let filename_regex = regex::Regex::new(r#"(?i)[/\\]package(-lock)?\.json$"#)?;
    let mut targets = vec![];

    let walkdir_iter = walkdir::WalkDir::new(base_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !entry
                .file_name()
                .to_str()
                .is_some_and(|name| entry.file_type().is_dir() && SKIPPED_DIRS.contains(&name))
        });

    for item in walkdir_iter {
        let item = item?;
        let path = item.path();
        if filename_regex.is_match(path.to_string_lossy().as_ref()) {
            targets.push(VersionTarget::new(path, "version"));
        }
    }

    debug!("Found default targets: {:?}", targets);
    Ok(targets)
}
