//! verbump - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use verbump::{DiskStore, ReleaseConfig, logging, plan_release, run_release};

/// Bump the patch version and propagate it into the release files.
#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(about = "Bump the patch version and propagate it into the release files")]
#[command(version)]
struct Cli {
    /// Project directory containing the release files
    #[arg(short = 'C', long, default_value = ".")]
    directory: PathBuf,

    /// Version file holding the current version
    #[arg(long, default_value = "VERSION")]
    version_file: PathBuf,

    /// Generated source file declaring the version
    #[arg(long, default_value = "lightstep/version.py")]
    declaration_file: PathBuf,

    /// Packaging manifest embedding the version as a quoted literal
    #[arg(long, default_value = "setup.py")]
    manifest: PathBuf,

    /// Symbol assigned in the declaration file
    #[arg(long, default_value = verbump::rewrite::DEFAULT_SYMBOL)]
    symbol: String,

    /// Dry run - compute the new version without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn release_config(&self) -> ReleaseConfig {
        ReleaseConfig {
            version_file: self.version_file.clone(),
            declaration_file: self.declaration_file.clone(),
            manifest_file: self.manifest.clone(),
            symbol: self.symbol.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.release_config();
    let mut store = DiskStore::new(&cli.directory);

    let plan = if cli.dry_run {
        plan_release(&store, &config).context("Failed to plan version bump")?
    } else {
        run_release(&mut store, &config).context("Failed to bump version")?
    };

    println!("{}", plan.summary());

    Ok(())
}
