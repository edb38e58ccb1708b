#![cfg_attr(feature = "strict", deny(warnings))]

pub mod cli;
pub mod logging;
pub mod output;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use lmist_core::config::Settings;
use lmist_core::list::list;
use lmist_core::place::{PlaceRequest, Placement, absolute, place};
use lmist_core::storage::FsStorage;

use cli::{AddArgs, Cli, Commands, LsArgs};
use output::Spinner;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("Failed to read the current directory")?;
    run_in(cli.command, &working_dir, &mut io::stdout()).await
}

/// Runs `command` with relative paths resolved against `working_dir`,
/// writing listings and version output to `out`.
pub async fn run_in<W: Write>(
    command: Commands,
    working_dir: &Path,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => add(args, working_dir).await?,
        Commands::Ls(args) => ls(args, working_dir, out).await?,
        Commands::Version => {
            writeln!(out, "lmist {}", env!("CARGO_PKG_VERSION"))?;
        }
    }
    Ok(())
}

async fn add(args: AddArgs, working_dir: &Path) -> anyhow::Result<()> {
    let output_dir = match args.output {
        Some(output_dir) => output_dir,
        None => Settings::load()?
            .output_dir
            .unwrap_or_else(|| working_dir.to_path_buf()),
    };
    let request = PlaceRequest {
        working_dir: working_dir.to_path_buf(),
        output_dir,
        filename: args.filename,
    };

    let spinner = Spinner::start("Processing...")?;
    match place(&FsStorage, &spinner, &request).await {
        Ok(placement @ Placement::Placed { .. }) => spinner.succeed(&placement.to_string()),
        Ok(placement @ Placement::AlreadyExists { .. }) => spinner.info(&placement.to_string()),
        Err(err) => {
            spinner.clear();
            return Err(err.into());
        }
    }
    Ok(())
}

async fn ls<W: Write>(args: LsArgs, working_dir: &Path, out: &mut W) -> anyhow::Result<()> {
    let target = match args.target {
        Some(target) => target,
        None => Settings::load()?.list_target(),
    };
    let entries = list(&FsStorage, &absolute(working_dir, &target)).await?;

    output::write_entries(out, &entries).context("Failed to write directory listing")?;
    Ok(())
}
