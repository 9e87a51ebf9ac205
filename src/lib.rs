// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod notify;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_and_normalize;
use crate::config::model::Config;
use crate::notify::ConsoleNotify;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the console notice sink (quiet / pacing from the CLI)
/// - config loading + normalization
/// - a human-readable summary of what will be watched
///
/// The scraper or scheduler that consumes the resolved config plugs in
/// after this returns; loading runs strictly before anything concurrent
/// starts.
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let mut notifier = ConsoleNotify::new(args.quiet, args.pace.map(Duration::from_secs));

    let cfg = load_and_normalize(&config_path, &mut notifier)
        .with_context(|| format!("loading configuration from {config_path:?}"))?;

    info!(
        skins = cfg.skins.len(),
        proxy = cfg.proxy_url.is_some(),
        "configuration loaded"
    );

    print_summary(&cfg);
    Ok(())
}

/// Print the resolved configuration: timeouts, proxy, then one block per
/// watched skin.
fn print_summary(cfg: &Config) {
    println!("skinwatch configuration");
    println!("  timeouts.per_skin = {}s", cfg.timeouts.per_skin);
    println!("  timeouts.per_page = {}s", cfg.timeouts.per_page);
    println!(
        "  timeouts.after_server_error = {}s",
        cfg.timeouts.after_server_error
    );
    println!(
        "  timeouts.after_too_many_requests = {}s",
        cfg.timeouts.after_too_many_requests
    );
    match cfg.proxy_url.as_deref() {
        Some(url) if !url.is_empty() => println!("  proxy_url = {url}"),
        _ => println!("  proxy_url = (none)"),
    }
    println!();

    println!("skins ({}):", cfg.skins.len());
    for skin in cfg.skins.iter() {
        println!("  - {}", skin.url);
        if let Some(float) = skin.float {
            println!("      float: <= {float}");
        }
        if let Some(ref pattern) = skin.pattern {
            println!("      pattern: {pattern:?}");
        }
        if let Some(price) = skin.price {
            println!("      price: <= {price}");
        }
        if let Some(pages) = skin.pages {
            println!("      pages: {pages}");
        }
        if let Some(sort_by_float) = skin.sort_by_float {
            println!("      sort_by_float: {sort_by_float}");
        }
    }
}
