use anyhow::Result;
use tracing_subscriber::EnvFilter;

use faculty_lists::config::Config;
use faculty_lists::fetch::HttpFetcher;
use faculty_lists::{runner, storage};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();
    let sites = storage::load_sites(&config.sites_file)?;
    let fetcher = HttpFetcher::new(config.http_timeout, &config.user_agent)?;

    let summary = runner::run(&config, &sites, &fetcher)?;

    println!(
        "Faculty lists have been saved to '{}'.",
        summary.output_path.display()
    );

    for failed in summary.failed() {
        println!(
            "  {}: {} ({})",
            failed.sheet_name,
            failed.status,
            failed.error_message.as_deref().unwrap_or("no details")
        );
    }

    Ok(())
}
