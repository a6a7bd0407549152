use crate::version::BumpKind;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "verman")]
pub struct Arguments {
    /// The kind of version bump to apply to the selected files
    #[arg(value_enum, ignore_case = true)]
    pub bump: Option<BumpKind>,
    /// Set an explicit version instead of bumping
    #[arg(long, short, conflicts_with = "bump")]
    pub set: Option<String>,
    /// Base directory for file discovery
    #[arg(long, short, default_value = "./")]
    pub path: String,
    /// Only update files matching this name or relative path (repeatable; defaults to all discovered files)
    #[arg(long = "file", short)]
    pub files: Vec<String>,
    #[arg(long, short)]
    pub verbose: bool,
}
