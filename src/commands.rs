//! CLI command implementations.
//!
//! Every command reads its document from a file path, or from stdin when the
//! path is `-`. Tables go to stdout; logs go to stderr.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use healthstats_core::compare::ComparisonTable;
use healthstats_core::stats::{compute_aggregate, AggregateRecord};

use crate::config::Config;
use crate::service::{baseline_store, ComparisonService};

/// `hstats stats <FILE>`: print the aggregate statistics of one document.
pub fn run_stats(input: &Path, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let record = compute_aggregate(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

/// `hstats compare <FILE>`: compare one document against the baseline,
/// building the baseline first if needed.
pub async fn run_compare(config: &Config, input: &Path, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let service = ComparisonService::from_config(config)?;
    let response = service.compare(&text).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_table(&response.statistics);
    }
    Ok(())
}

/// `hstats baseline show`
pub async fn run_baseline_show(config: &Config) -> Result<()> {
    let store = baseline_store(config)?;
    let path = &config.baseline.path;

    println!("HealthStats — Baseline");
    println!("======================");
    println!();
    println!("  Location:    {}", path.display());

    let Some(record) = store.load().await? else {
        println!("  Status:      not built");
        println!();
        println!("  Run `hstats baseline build` or send a comparison request to build it.");
        return Ok(());
    };

    let metadata = std::fs::metadata(path).ok();
    let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
    let built = metadata
        .and_then(|m| m.modified().ok())
        .map(|t| format_ts_relative(chrono::DateTime::<chrono::Utc>::from(t).timestamp()))
        .unwrap_or_else(|| "unknown".to_string());

    println!("  Size:        {}", format_bytes(size));
    println!("  Built:       {}", built);
    println!();
    print_record(&record);
    Ok(())
}

/// `hstats baseline build`: build the baseline if it does not exist yet.
pub async fn run_baseline_build(config: &Config) -> Result<()> {
    let store = baseline_store(config)?;
    if store.load().await?.is_some() {
        println!(
            "Baseline already exists at {} (use `hstats baseline rebuild` to replace it).",
            config.baseline.path.display()
        );
        return Ok(());
    }

    let record = store.load_or_build().await?;
    println!("Baseline written to {}", config.baseline.path.display());
    println!();
    print_record(&record);
    Ok(())
}

/// `hstats baseline rebuild`: refetch the corpus and overwrite the baseline.
pub async fn run_baseline_rebuild(config: &Config) -> Result<()> {
    let store = baseline_store(config)?;
    let record = store.rebuild().await?;
    println!("Baseline rebuilt at {}", config.baseline.path.display());
    println!();
    print_record(&record);
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read document from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read document: {}", input.display()))
    }
}

/// Row names and values of a record, in column order.
fn record_fields(record: &AggregateRecord) -> [(&'static str, String); 8] {
    [
        ("Sentences", record.sentence_count.to_string()),
        ("Words", record.word_count.to_string()),
        ("Avg word length", format!("{:.2}", record.average_word_length)),
        ("Unique words", record.unique_word_count.to_string()),
        ("Characters", record.character_count.to_string()),
        ("Nouns", record.noun_count.to_string()),
        ("Adjectives", record.adjective_count.to_string()),
        ("Verbs", record.verb_count.to_string()),
    ]
}

fn print_record(record: &AggregateRecord) {
    for (name, value) in record_fields(record) {
        println!("  {:<17} {:>10}", format!("{}:", name), value);
    }
}

fn print_table(table: &ComparisonTable) {
    let baseline = table.baseline();
    let user = table.user_input();

    println!(
        "  {:<17} {:>20} {:>22}",
        "", baseline.label, user.label
    );
    println!("  {}", "-".repeat(61));
    for ((name, base_value), (_, user_value)) in record_fields(&baseline.record)
        .into_iter()
        .zip(record_fields(&user.record))
    {
        println!("  {:<17} {:>20} {:>22}", name, base_value, user_value);
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Format a Unix timestamp as a relative time string (e.g. "3 hours ago").
fn format_ts_relative(ts: i64) -> String {
    let delta = chrono::Utc::now().timestamp() - ts;

    if delta < 0 {
        return format_ts_iso(ts);
    }

    if delta < 60 {
        "just now".to_string()
    } else if delta < 3600 {
        let mins = delta / 60;
        format!("{} min{} ago", mins, if mins == 1 { "" } else { "s" })
    } else if delta < 86400 {
        let hours = delta / 3600;
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else if delta < 86400 * 30 {
        let days = delta / 86400;
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    } else {
        format_ts_iso(ts)
    }
}

fn format_ts_iso(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}
