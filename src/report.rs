//! End-to-end reporting: dataset summary rendering plus the one
//! fetch-compute-persist pass the binary performs.

use crate::api::{Client, FetchError};
use crate::models::FlatUser;
use crate::stats;
use crate::storage;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths written by one run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub rows: usize,
    pub csv_path: PathBuf,
    pub stats_path: PathBuf,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 2 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.2}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

/// Structural summary: row/column counts and the column types.
pub fn render_dataset_info(users: &[FlatUser]) -> String {
    let mut out = String::new();
    out.push_str("Dataset Info:\n");
    out.push_str(&format!(
        "{} rows x {} columns\n",
        users.len(),
        FlatUser::FIELD_NAMES.len()
    ));
    for name in FlatUser::FIELD_NAMES {
        let ty = if name == "age" { "integer" } else { "string" };
        out.push_str(&format!("  {}: {}\n", name, ty));
    }
    out
}

/// Render the three statistics blocks (age, gender, country) behind a title
/// banner. Well-defined for zero rows: sections are present but empty or NA.
pub fn render_stats(users: &[FlatUser]) -> String {
    let ages = stats::describe_ages(users);
    let genders = stats::gender_distribution(users);
    let countries = stats::country_counts(users);

    let mut out = String::new();
    out.push_str("Random Users Dataset Statistics\n");
    out.push_str("===============================\n\n");

    out.push_str("Age Statistics:\n");
    out.push_str(&format!("count    {}\n", ages.count));
    out.push_str(&format!("mean     {}\n", fmt_opt(ages.mean)));
    out.push_str(&format!("std      {}\n", fmt_opt(ages.std)));
    out.push_str(&format!("min      {}\n", fmt_opt(ages.min)));
    out.push_str(&format!("25%      {}\n", fmt_opt(ages.q25)));
    out.push_str(&format!("50%      {}\n", fmt_opt(ages.median)));
    out.push_str(&format!("75%      {}\n", fmt_opt(ages.q75)));
    out.push_str(&format!("max      {}\n", fmt_opt(ages.max)));
    out.push('\n');

    out.push_str("Gender Distribution (%):\n");
    for (gender, pct) in &genders {
        out.push_str(&format!("{}    {:.2}\n", gender, pct));
    }
    out.push('\n');

    out.push_str("Users by Country:\n");
    for (country, n) in &countries {
        out.push_str(&format!("{}    {}\n", country, n));
    }
    out
}

/// Timestamped CSV filename, second granularity. Two runs started in
/// different seconds never collide.
pub fn csv_filename(now: DateTime<Local>) -> String {
    format!("random_users_{}.csv", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// One end-to-end fetch-compute-report-persist pass. With `json` set, the
/// records are additionally saved as a JSON array next to the CSV.
///
/// A network/HTTP failure is logged once and degrades to an empty record
/// set, matching the fetcher's documented contract; a malformed response
/// body is a programming-level decode error and propagates.
pub fn run(client: &Client, count: u32, out_dir: &Path, json: bool) -> Result<RunSummary> {
    let users = match client.fetch(count) {
        Ok(users) => users,
        Err(FetchError::Http(e)) => {
            log::error!("Error fetching random users: {}", e);
            Vec::new()
        }
        Err(e @ FetchError::Decode(_)) => {
            return Err(e).context("malformed response from random user API");
        }
    };

    print!("{}", render_dataset_info(&users));
    let stats_text = render_stats(&users);
    println!("\n{}", stats_text);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let csv_path = out_dir.join(csv_filename(Local::now()));
    storage::save_csv(&users, &csv_path)?;
    println!("Dataset saved to {}", csv_path.display());

    if json {
        let json_path = csv_path.with_extension("json");
        storage::save_json(&users, &json_path)?;
        println!("Dataset saved to {}", json_path.display());
    }

    let stats_path = out_dir.join("user_stats.txt");
    fs::write(&stats_path, &stats_text)
        .with_context(|| format!("write {}", stats_path.display()))?;

    Ok(RunSummary {
        rows: users.len(),
        csv_path,
        stats_path,
    })
}
