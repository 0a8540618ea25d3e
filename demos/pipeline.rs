//! Walk a batch of lookups through the outcome combinators
//!
//! Run with `cargo run --example pipeline -- -vv` to see the crate's
//! debug and trace events.

use clap::Parser;
use serde_json::{json, Value};
use tagged_outcome::prelude::*;
use tracing::info;

#[derive(Parser)]
#[command(name = "pipeline")]
#[command(about = "Demonstrate tagged outcome combinators on a sample batch", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Inject an unrecognized `pending` outcome into the batch
    #[arg(long)]
    with_pending: bool,
}

fn lookup(id: u64) -> DynOutcome {
    match id {
        0 => DynOutcome::failure(json!("invalid id")),
        n if n % 7 == 0 => DynOutcome::failure(json!({ "id": n, "reason": "not found" })),
        n => DynOutcome::success(json!({ "id": n, "name": format!("user-{}", n) })),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    let mut batch: Vec<DynOutcome> = [3, 14, 5, 0].into_iter().map(lookup).collect();
    if cli.with_pending {
        batch.push(DynOutcome::tagged("pending", json!(99)));
    }

    let grouped = batch.clone().into_iter().group_by_tag();
    for (tag, entries) in grouped.iter() {
        info!("{}: {} outcome(s)", tag, entries.len());
    }

    match collect_errors(batch.clone()).into_payload() {
        Payload::Single(Collected::Successes(entries)) => {
            info!("all {} lookups succeeded", entries.len())
        }
        Payload::Single(Collected::Errors(errors)) => {
            let anomalies = errors.anomalies.map(|a| a.total()).unwrap_or(0);
            info!(
                "{} failure(s), {} unrecognized outcome(s)",
                errors.failures.len(),
                anomalies
            );
        }
        _ => {}
    }

    let names = map_while_success(batch.iter().cloned().reject_failures(), |user| {
        map_success(user, |value| match value.get("name") {
            Some(name) => Mapped::value(name.clone()),
            None => Mapped::outcome(Outcome::failure(json!("missing name"))),
        })
    });
    info!("names: {}", names.into_outcome());

    let first = batch
        .into_iter()
        .next()
        .map(|outcome| outcome.unwrap_or(Value::Null))
        .transpose()?;
    info!("first lookup: {:?}", first);

    Ok(())
}
