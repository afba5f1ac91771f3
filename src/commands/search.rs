//! `luhngen search` command.

use crate::cli::SearchArgs;
use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::domain::Prefix;
use crate::error::Error;
use crate::persist;
use crate::search::{self, SearchReport};

/// Execute the `search` command with a live local-only context.
///
/// # Errors
///
/// Returns an error string if the prefix is malformed, the config cannot be
/// loaded, or the results cannot be written.
pub fn run(args: &SearchArgs) -> Result<(), String> {
    let mut ctx = SearchContext::local(args.seed);
    run_with_context(&mut ctx, args).map(|_| ())
}

/// Execute the `search` command with the given context.
///
/// The prefix is validated before anything else happens.
///
/// # Errors
///
/// Returns an error string on malformed input, unusable parameters, or I/O failure.
pub fn run_with_context(ctx: &mut SearchContext, args: &SearchArgs) -> Result<SearchReport, String> {
    let prefix = Prefix::parse(&args.prefix).map_err(|e| e.to_string())?;
    let config = resolve_config(args).map_err(|e| e.to_string())?;
    let params = config.params();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| Error::Runtime(e).to_string())?;
    let report = runtime
        .block_on(search::search(ctx, &prefix, &params))
        .map_err(|e| e.to_string())?;

    if report.records.is_empty() {
        println!("No valid identifiers found for prefix {prefix}.");
        return Ok(report);
    }

    println!("Identifiers found for prefix {prefix}:");
    for (i, record) in report.records.iter().enumerate() {
        println!("{:>3}: {} | {}", i + 1, record.masked_id, record.expiry);
    }
    if report.budget_exhausted() {
        println!(
            "Found {} of {} after {} attempts.",
            report.records.len(),
            report.requested,
            report.attempts
        );
    }

    let output = config.output_path();
    persist::write_records(&output, &report.records).map_err(|e| e.to_string())?;
    println!("Saved {} records to {}", report.records.len(), output.display());
    Ok(report)
}

/// Layers the optional config file under the command-line flags.
fn resolve_config(args: &SearchArgs) -> Result<SearchConfig, Error> {
    let file = match &args.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    let flags = SearchConfig {
        target_length: args.length,
        count: args.count,
        max_attempts: args.max_attempts,
        output: args.output.clone(),
        ..SearchConfig::default()
    };
    Ok(file.overlay(flags))
}
