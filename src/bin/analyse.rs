//! Cohort analysis CLI: fetches survey responses, prints the colored
//! console summary, and writes the analyst export files.

use std::path::PathBuf;

use clap::Parser;

use flavourdna::analysis::{console, SurveySummary};
use flavourdna::config::StoreConfig;
use flavourdna::export::{write_email_list, write_exports};
use flavourdna::store::{decode_rows, ResponseFilter, SurveyStore};

#[derive(Parser, Debug)]
#[command(name = "analyse", about = "Summarize survey responses and write analyst exports")]
struct Args {
    /// Only include responses from this school level (e.g. P3).
    #[arg(long)]
    level: Option<String>,

    /// Only include responses submitted on or after this date (YYYY-MM-DD).
    #[arg(long)]
    since: Option<String>,

    /// Also write the deduplicated respondent email list.
    #[arg(long)]
    export_emails: bool,

    /// Directory for export files.
    #[arg(long, default_value = "exports")]
    output_dir: PathBuf,
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
        since: args.since,
        id: None,
    };
    let rows = store.fetch_rows(&filter).await?;
    let (responses, skipped) = decode_rows(rows);
    if skipped > 0 {
        tracing::warn!("skipped {skipped} malformed row(s)");
    }
    if responses.is_empty() {
        tracing::warn!("no responses matched the filters, nothing to analyse");
        return Ok(());
    }

    let summary = SurveySummary::build(&responses);
    console::print_summary(&responses, &summary);

    write_exports(&responses, &summary, &args.output_dir)?;
    if args.export_emails {
        write_email_list(&responses, &args.output_dir)?;
    }

    Ok(())
}
