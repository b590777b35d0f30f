//! Integration tests for the faculty list pipeline
//! Runs the full registry against fixture pages and reads the workbook back

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Reader, Xlsx};

use faculty_lists::config::Config;
use faculty_lists::fetch::{FetchFailure, Fetcher};
use faculty_lists::runner::run;
use faculty_lists::scrapers::{parse_credential_bios, parse_department_json, parse_employee_directory};
use faculty_lists::storage::default_sites;
use faculty_lists::types::{FacultyRecord, SiteStatus};

const UNM_URL: &str = "https://hsc.unm.edu/directory/index.json";
const UPSTATE_URL: &str = "https://www.upstate.edu/anesthesiology/about-us/faculty.php";
const WESTCHESTER_URL: &str = "https://www.westchestermedicalcenter.org/anesthesiology-residency-program";

/// Serves canned bodies by URL; unknown URLs answer 404
struct FixtureFetcher {
    pages: HashMap<String, Result<String, FetchFailure>>,
}

impl FixtureFetcher {
    fn new() -> Self {
        FixtureFetcher { pages: HashMap::new() }
    }

    fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    fn failure(mut self, url: &str, failure: FetchFailure) -> Self {
        self.pages.insert(url.to_string(), Err(failure));
        self
    }
}

impl Fetcher for FixtureFetcher {
    fn get(&self, url: &str) -> Result<String, FetchFailure> {
        self.pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchFailure::http(404)))
    }
}

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {:?}: {}", path, e))
}

fn all_fixtures() -> FixtureFetcher {
    FixtureFetcher::new()
        .page(UNM_URL, &fixture("unm_directory.json"))
        .page(UPSTATE_URL, &fixture("upstate_faculty.html"))
        .page(WESTCHESTER_URL, &fixture("westchester_residency.html"))
}

fn config_in(dir: &Path) -> Config {
    Config {
        output: dir.join("faculty_lists.xlsx"),
        sites_file: dir.join("sites.yml"),
        ..Config::default()
    }
}

fn read_sheet(path: &Path, sheet: &str) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range(sheet).unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn sheet_names(path: &Path) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.sheet_names()
}

fn row(cells: [&str; 4]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn header() -> Vec<String> {
    row(["First Name", "Last Name", "Email", "Error"])
}

#[test]
fn test_json_fixture_scenario() {
    let body = r#"{"faculty":[{"firstName":" Ana ","lastName":" Lee","departments":["SOM - Anesthesiology"]},{"firstName":"Bo","lastName":"Kim","departments":["Other"]}]}"#;
    let records = parse_department_json(body, "SOM - Anesthesiology").unwrap();
    assert_eq!(records, vec![FacultyRecord::new("Ana", "Lee", "")]);
}

#[test]
fn test_json_output_respects_department_filter() {
    let body = fixture("unm_directory.json");
    let records = parse_department_json(&body, "SOM - Anesthesiology").unwrap();

    let names: Vec<_> = records
        .iter()
        .map(|r| format!("{} {}", r.first_name, r.last_name))
        .collect();
    assert_eq!(names, ["Ana Lee", "Carlos Mendez Ruiz"]);
    assert!(records.iter().all(|r| r.email.is_empty() && r.error.is_empty()));
}

#[test]
fn test_employee_directory_fixture() {
    let html = fixture("upstate_faculty.html");
    let records = parse_employee_directory(&html, "upstate.edu").unwrap();

    assert_eq!(
        records,
        vec![
            FacultyRecord::new("John", "Smith", "123@upstate.edu"),
            FacultyRecord::new("Maria", "de la Cruz", "smithj2@upstate.edu"),
            FacultyRecord::new("Cher", "", "88@upstate.edu"),
        ]
    );
}

#[test]
fn test_credential_bios_fixture() {
    let html = fixture("westchester_residency.html");
    let records = parse_credential_bios(&html).unwrap();

    assert_eq!(
        records,
        vec![
            FacultyRecord::new("Mary Ann", "Jones", ""),
            FacultyRecord::new("Raj", "Patel", ""),
            FacultyRecord::new("Li", "Wei", ""),
        ]
    );
}

#[test]
fn test_reextraction_is_identical() {
    let html = fixture("upstate_faculty.html");
    let first = parse_employee_directory(&html, "upstate.edu").unwrap();
    let second = parse_employee_directory(&html, "upstate.edu").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_full_run_writes_all_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let summary = run(&config, &default_sites(), &all_fixtures()).unwrap();

    assert_eq!(summary.failed().count(), 0);
    assert_eq!(summary.total_records(), 8);
    assert_eq!(
        sheet_names(&config.output),
        ["UNM Anesthesiology", "Upstate Anesthesiology", "Westchester Anesthesiology"]
    );

    assert_eq!(
        read_sheet(&config.output, "UNM Anesthesiology"),
        vec![
            header(),
            row(["Ana", "Lee", "", ""]),
            row(["Carlos", "Mendez Ruiz", "", ""]),
        ]
    );
    assert_eq!(
        read_sheet(&config.output, "Upstate Anesthesiology"),
        vec![
            header(),
            row(["John", "Smith", "123@upstate.edu", ""]),
            row(["Maria", "de la Cruz", "smithj2@upstate.edu", ""]),
            row(["Cher", "", "88@upstate.edu", ""]),
        ]
    );
    assert_eq!(
        read_sheet(&config.output, "Westchester Anesthesiology"),
        vec![
            header(),
            row(["Mary Ann", "Jones", "", ""]),
            row(["Raj", "Patel", "", ""]),
            row(["Li", "Wei", "", ""]),
        ]
    );
}

#[test]
fn test_html_failure_leaves_other_sheets_intact() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let fetcher = FixtureFetcher::new()
        .page(UNM_URL, &fixture("unm_directory.json"))
        .failure(UPSTATE_URL, FetchFailure::http(500))
        .page(WESTCHESTER_URL, &fixture("westchester_residency.html"));

    let summary = run(&config, &default_sites(), &fetcher).unwrap();

    let failed: Vec<_> = summary.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].sheet_name, "Upstate Anesthesiology");
    assert_eq!(failed[0].status, SiteStatus::ServerError);

    assert_eq!(sheet_names(&config.output).len(), 3);
    assert_eq!(read_sheet(&config.output, "Upstate Anesthesiology"), vec![header()]);
    assert_eq!(read_sheet(&config.output, "UNM Anesthesiology").len(), 3);
    assert_eq!(read_sheet(&config.output, "Westchester Anesthesiology").len(), 4);
}

#[test]
fn test_malformed_json_does_not_lose_other_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let fetcher = all_fixtures().page(UNM_URL, r#"{"faculty":[{"departments":["SOM - Anesthesiology"]}]}"#);

    let summary = run(&config, &default_sites(), &fetcher).unwrap();

    assert_eq!(summary.results[0].status, SiteStatus::ParseError);
    assert!(summary.results[1].is_ok());
    assert!(summary.results[2].is_ok());
    assert_eq!(read_sheet(&config.output, "UNM Anesthesiology"), vec![header()]);
    assert_eq!(read_sheet(&config.output, "Upstate Anesthesiology").len(), 4);
}

#[test]
fn test_every_site_unreachable_still_writes_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let summary = run(&config, &default_sites(), &FixtureFetcher::new()).unwrap();

    assert_eq!(summary.failed().count(), 3);
    assert!(summary.results.iter().all(|r| r.status == SiteStatus::NotFound));
    let names = sheet_names(&config.output);
    assert_eq!(names.len(), 3);
    for name in &names {
        assert_eq!(read_sheet(&config.output, name), vec![header()]);
    }
}

#[test]
fn test_invalid_registry_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let mut sites = default_sites();
    sites[2].sheet_name = sites[0].sheet_name.clone();

    assert!(run(&config, &sites, &all_fixtures()).is_err());
    assert!(!config.output.exists());
}
