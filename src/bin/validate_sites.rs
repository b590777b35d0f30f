//! Site Registry Validator
//!
//! Checks the site registry before a run:
//! - Every site has a URL, a usable sheet name and its extractor's parameters
//! - Sheet names are unique
//! - Reports URLs without an http/https scheme

use anyhow::{Context, Result};

use faculty_lists::config::Config;
use faculty_lists::storage::{load_sites, site_errors, site_warnings};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    println!("=== Site Registry Validator ===");
    if config.sites_file.exists() {
        println!("Registry: {}", config.sites_file.display());
    } else {
        println!("Registry: built-in ({} not found)", config.sites_file.display());
    }

    let sites = load_sites(&config.sites_file)
        .context("Failed to load site registry")?;

    let errors = site_errors(&sites);
    let warnings = site_warnings(&sites);

    if errors.is_empty() && warnings.is_empty() {
        println!("✓ All {} sites are valid", sites.len());
        for site in &sites {
            println!("  - {} [{}] {}", site.sheet_name, site.extractor.kind(), site.url);
        }
        return Ok(());
    }

    if !errors.is_empty() {
        println!("\n❌ ERRORS (must fix):");
        for error in &errors {
            println!("  - {}", error);
        }
    }

    if !warnings.is_empty() {
        println!("\n⚠️  WARNINGS:");
        for warning in &warnings {
            println!("  - {}", warning);
        }
    }

    if !errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
