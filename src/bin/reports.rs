//! Report generation CLI: fetches survey responses and writes one two-page
//! PNG report per respondent.

use std::path::PathBuf;

use clap::Parser;

use flavourdna::config::StoreConfig;
use flavourdna::report::run_batch;
use flavourdna::store::{decode_rows, ResponseFilter, SurveyStore};

#[derive(Parser, Debug)]
#[command(name = "reports", about = "Render per-respondent flavour profile reports")]
struct Args {
    /// Only render responses from this school level (e.g. P3).
    #[arg(long)]
    level: Option<String>,

    /// Render a single respondent by UUID.
    #[arg(long)]
    id: Option<String>,

    /// Stop after this many reports.
    #[arg(long)]
    limit: Option<usize>,

    /// Directory for the rendered pages.
    #[arg(long, default_value = "reports")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,flavourdna=debug".into()),
        )
        .init();

    let args = Args::parse();

    let store = SurveyStore::new(StoreConfig::from_env()?);
    let filter = ResponseFilter {
        level: args.level,
        since: None,
        id: args.id,
    };
    let rows = store.fetch_rows(&filter).await?;
    let (mut responses, skipped) = decode_rows(rows);
    if skipped > 0 {
        tracing::warn!("skipped {skipped} malformed row(s)");
    }
    if let Some(limit) = args.limit {
        responses.truncate(limit);
    }

    let outcome = run_batch(&responses, &args.output)?;
    tracing::info!(
        "done: {} report(s) written, {} failed",
        outcome.succeeded,
        outcome.failed
    );

    Ok(())
}
