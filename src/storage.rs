use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::types::{Extractor, SiteDescriptor, SitesFile};
use crate::workbook::check_sheet_names;

/// The built-in registry, in output order
pub fn default_sites() -> Vec<SiteDescriptor> {
    vec![
        SiteDescriptor {
            sheet_name: "UNM Anesthesiology".to_string(),
            url: "https://hsc.unm.edu/directory/index.json".to_string(),
            extractor: Extractor::DepartmentJson {
                department_filter: "SOM - Anesthesiology".to_string(),
            },
        },
        SiteDescriptor {
            sheet_name: "Upstate Anesthesiology".to_string(),
            url: "https://www.upstate.edu/anesthesiology/about-us/faculty.php".to_string(),
            extractor: Extractor::EmployeeDirectory {
                email_domain: "upstate.edu".to_string(),
            },
        },
        SiteDescriptor {
            sheet_name: "Westchester Anesthesiology".to_string(),
            url: "https://www.westchestermedicalcenter.org/anesthesiology-residency-program"
                .to_string(),
            extractor: Extractor::CredentialBios,
        },
    ]
}

pub fn parse_sites(content: &str) -> Result<Vec<SiteDescriptor>> {
    let file: SitesFile = serde_yaml::from_str(content)
        .with_context(|| "Failed to parse sites YAML")?;
    Ok(file.sites)
}

/// Load the registry from `path`, or the built-in list when the file is absent.
pub fn load_sites(path: &Path) -> Result<Vec<SiteDescriptor>> {
    if !path.exists() {
        return Ok(default_sites());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sites from {:?}", path))?;
    parse_sites(&content)
}

/// Problems that make a registry unusable
pub fn site_errors(sites: &[SiteDescriptor]) -> Vec<String> {
    let mut errors = Vec::new();

    if sites.is_empty() {
        errors.push("No sites configured".to_string());
    }

    for site in sites {
        if site.url.trim().is_empty() {
            errors.push(format!("Site '{}' has empty URL", site.sheet_name));
        }
        match &site.extractor {
            Extractor::DepartmentJson { department_filter } if department_filter.trim().is_empty() => {
                errors.push(format!("Site '{}' has empty department_filter", site.sheet_name));
            }
            Extractor::EmployeeDirectory { email_domain } if email_domain.trim().is_empty() => {
                errors.push(format!("Site '{}' has empty email_domain", site.sheet_name));
            }
            _ => {}
        }
    }

    if let Err(e) = check_sheet_names(sites.iter().map(|s| s.sheet_name.as_str())) {
        errors.push(e.to_string());
    }

    errors
}

/// Suspicious but usable settings
pub fn site_warnings(sites: &[SiteDescriptor]) -> Vec<String> {
    sites
        .iter()
        .filter(|s| !s.url.starts_with("http://") && !s.url.starts_with("https://"))
        .map(|s| {
            format!(
                "Site '{}' has URL without http/https scheme: {}",
                s.sheet_name, s.url
            )
        })
        .collect()
}

pub fn validate_sites(sites: &[SiteDescriptor]) -> Result<()> {
    let errors = site_errors(sites);
    if !errors.is_empty() {
        bail!("Invalid site configuration: {}", errors.join("; "));
    }
    Ok(())
}
