use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, error, info};
use semver::Version;
use std::path::Path;
use verman::{
    arguments::Arguments,
    codec::JsonCodec,
    discovery::{self, VersionTarget},
    orchestrator::{self, TargetReport},
    version::BumpKind,
};

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let base_dir: &Path = args.path.as_ref();
    let set_version = args
        .set
        .as_deref()
        .map(Version::parse)
        .transpose()
        .context("--set requires a valid semantic version (e.g. 1.2.3)")?;

    let discovered = discovery::find_version_targets(base_dir)?;
    if discovered.is_empty() {
        bail!("No version files found. Aborting.");
    }

    let targets = select_targets(discovered, &args.files);
    if targets.is_empty() {
        bail!("No discovered file matches the --file selection. Aborting.");
    }

    let reports = match &set_version {
        Some(version) => {
            info!("Forcing version to v{} on {} file(s)...", version, targets.len());
            orchestrator::apply_to_many::<JsonCodec>(&targets, &version.to_string())
        }
        None => {
            let kind = args.bump.unwrap_or(BumpKind::Patch);
            info!("Bumping versions with update type: {:?}...", kind);
            orchestrator::bump_many::<JsonCodec>(&targets, kind)
        }
    };

    report_outcomes(&reports);
    Ok(())
}

/// Narrows the discovered targets to the `--file` selection; an empty
/// selection keeps everything.
fn select_targets(discovered: Vec<VersionTarget>, selection: &[String]) -> Vec<VersionTarget> {
    if selection.is_empty() {
        return discovered;
    }
    discovered
        .into_iter()
        .filter(|target| {
            selection
                .iter()
                .any(|wanted| target.label() == *wanted || target.file_path.ends_with(wanted))
        })
        .collect()
}

fn report_outcomes(reports: &[TargetReport]) {
    let mut failed = 0;
    for report in reports {
        if let Err(err) = &report.result {
            failed += 1;
            error!("Failed to update {}: {:#}", report.label, err);
        }
    }
    info!(
        "Update complete: {} updated, {} failed",
        reports.len() - failed,
        failed
    );
}
