//! Applies version updates across one or many targets.
//!
//! Batch operations isolate failures per target: one unreadable or misconfigured
//! file is recorded and reported, and the rest of the batch still runs. Partial
//! success is a normal, reportable outcome.

use crate::codec::Codec;
use crate::discovery::VersionTarget;
use crate::errors::UpdateError;
use crate::resolver;
use crate::version::{self, BumpKind};
use anyhow::Result;
use log::{debug, info};
use serde_json::Value;

/// The outcome of processing one target in a batch.
#[derive(Debug)]
pub struct TargetReport {
    pub label: String,
    pub result: Result<()>,
}

impl TargetReport {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Reads the version string a target currently carries.
///
/// The resolved value must be a non-empty string; numbers and other shapes
/// are rejected as `InvalidVersionField`.
pub fn get_current_version<C: Codec>(target: &VersionTarget) -> Result<String, UpdateError> {
    let doc = C::load(&target.file_path)?;
    let value = resolver::resolve(&doc, &target.version_path)?;
    match value.as_str() {
        Some(version) if !version.is_empty() => Ok(version.to_string()),
        _ => Err(UpdateError::InvalidVersionField {
            file: target.label(),
            path: target.version_path.clone(),
        }),
    }
}

/// Loads, rewrites the version field in place and persists one target.
pub fn apply_version<C: Codec>(target: &VersionTarget, new_version: &str) -> Result<(), UpdateError> {
    debug!(
        "Writing version {} to '{}' (path: \"{}\")",
        new_version,
        target.file_path.display(),
        target.version_path
    );
    let mut doc = C::load(&target.file_path)?;
    resolver::assign(
        &mut doc,
        &target.version_path,
        Value::String(new_version.to_string()),
    )?;
    C::persist(&target.file_path, &doc)
}

/// Sets the same version on every target, continuing past failures.
pub fn apply_to_many<C: Codec>(targets: &[VersionTarget], new_version: &str) -> Vec<TargetReport> {
    targets
        .iter()
        .map(|target| {
            let result = apply_version::<C>(target, new_version).map_err(Into::into);
            if result.is_ok() {
                info!("Set version of {} to v{}", target.label(), new_version);
            }
            TargetReport {
                label: target.label(),
                result,
            }
        })
        .collect()
}

/// Bumps each target from its own current version, continuing past failures.
pub fn bump_many<C: Codec>(targets: &[VersionTarget], kind: BumpKind) -> Vec<TargetReport> {
    targets
        .iter()
        .map(|target| {
            let result = bump_one::<C>(target, kind);
            TargetReport {
                label: target.label(),
                result,
            }
        })
        .collect()
}

fn bump_one<C: Codec>(target: &VersionTarget, kind: BumpKind) -> Result<()> {
    let current = get_current_version::<C>(target)?;
    let next = version::bump(&current, kind)?;
    apply_version::<C>(target, &next.to_string())?;
    info!("Updated {} from v{} to v{}", target.label(), current, next);
    Ok(())
}
