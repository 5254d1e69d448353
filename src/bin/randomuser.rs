use anyhow::Result;
use clap::Parser;
use randomuser_rs::{Client, report};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "randomuser",
    version,
    about = "Fetch random users, print statistics & export CSV reports"
)]
struct Cli {
    /// Number of user records to request from the API.
    #[arg(short = 'n', long, default_value_t = 50)]
    count: u32,
    /// Directory for the CSV export and the statistics text file
    /// (created if missing).
    #[arg(short, long, default_value = "data")]
    out_dir: PathBuf,
    /// Additionally save the records as a pretty JSON array.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let client = Client::default();
    report::run(&client, cli.count, &cli.out_dir, cli.json)?;

    Ok(())
}
