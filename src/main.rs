// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `chain`: find the longest chain in a dataset file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn, Level};

use chain_search::io::{chain_rows, load_from_path, render_table, verify_chain, write_export};
use chain_search::{ChainSearch, SearchOptions, TokenRegistry};

#[derive(Parser, Debug)]
#[command(name = "chain")]
#[command(about = "Find the longest chain of connectable six-digit tokens")]
struct Cli {
    /// Path to dataset file (one six-digit code per line)
    #[arg(short, long)]
    file: PathBuf,

    /// Timeout in seconds (default: none)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Export chain to file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Log each link of the chain with its verification result
    #[arg(long)]
    verify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut registry = TokenRegistry::new();
    match load_from_path(&mut registry, &cli.file) {
        Ok(0) => {
            error!("No valid tokens in {}", cli.file.display());
            return Ok(ExitCode::FAILURE);
        }
        Ok(_) => {}
        Err(err) => {
            error!("{}", err);
            return Ok(ExitCode::FAILURE);
        }
    }

    let options = SearchOptions::new()
        .with_timeout_secs(cli.timeout)
        .with_progress(true);
    let outcome = ChainSearch::new(&registry, options).run();
    info!(
        "Found chain with length {} in {:.2} seconds",
        outcome.chain.len(),
        outcome.elapsed.as_secs_f64()
    );
    info!("Search statistics: {}", outcome.statistics);

    if outcome.chain.is_empty() {
        warn!("No chain found!");
        return Ok(ExitCode::SUCCESS);
    }

    let rows = chain_rows(&registry, &outcome.chain);
    info!("Chain details:\n{}", render_table(&rows));

    if cli.verify {
        let verification = verify_chain(&registry, &outcome.chain);
        for link in &verification.links {
            info!(
                "Link {} -> {}: {} -> {} : {}",
                link.position,
                link.position + 1,
                link.from,
                link.to,
                if link.valid { "valid" } else { "INVALID" }
            );
        }
        if verification.is_valid() {
            info!("All connections are valid");
        } else {
            error!("Some connections are invalid");
        }
    }

    if let Some(path) = &cli.export {
        write_export(path, &rows, outcome.chain.len())
            .with_context(|| format!("exporting {} links", rows.len()))?;
        info!("Chain exported to {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
