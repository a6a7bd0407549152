use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use semver::Version;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

/// Computes the next version from the current one.
///
/// Lower components reset to zero and any pre-release or build metadata is
/// dropped, so `1.2.3-beta.1` bumped as patch becomes `1.2.4`.
pub fn bump(current: &str, kind: BumpKind) -> Result<Version> {
    let current = Version::parse(current)
        .with_context(|| format!("Cannot increment invalid version: {current}"))?;

    let next = match kind {
        BumpKind::Major => Version::new(current.major + 1, 0, 0),
        BumpKind::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpKind::Patch => Version::new(current.major, current.minor, current.patch + 1),
    };

    debug!("Incrementing version from {} -> {}", current, next);
    Ok(next)
}
