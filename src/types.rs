use serde::{Deserialize, Serialize};

/// Column labels shared by every sheet, in output order.
pub const COLUMNS: [&str; 4] = ["First Name", "Last Name", "Email", "Error"];

/// One row of output. Every extractor produces exactly these four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacultyRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub error: String,
}

impl FacultyRecord {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        FacultyRecord {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.to_string(),
            error: String::new(),
        }
    }

    /// Cells in `COLUMNS` order
    pub fn cells(&self) -> [&str; 4] {
        [&self.first_name, &self.last_name, &self.email, &self.error]
    }
}

/// Which parsing strategy a site uses, with its site-specific parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "extractor", rename_all = "snake_case")]
pub enum Extractor {
    /// JSON directory filtered by an exact department tag
    DepartmentJson { department_filter: String },
    /// HTML list items whose links carry `empID=`
    EmployeeDirectory { email_domain: String },
    /// HTML paragraphs mentioning a credential, name in bold
    CredentialBios,
}

impl Extractor {
    pub fn kind(&self) -> &'static str {
        match self {
            Extractor::DepartmentJson { .. } => "department_json",
            Extractor::EmployeeDirectory { .. } => "employee_directory",
            Extractor::CredentialBios => "credential_bios",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteDescriptor {
    pub sheet_name: String,
    pub url: String,
    #[serde(flatten)]
    pub extractor: Extractor,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SitesFile {
    pub sites: Vec<SiteDescriptor>,
}

/// Outcome classification for one site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteStatus {
    Ok,
    NotFound,
    Forbidden,
    RateLimited,
    ServerError,
    Timeout,
    SslError,
    TooManyRedirects,
    NetworkError,
    ParseError,
    Unknown,
}

impl SiteStatus {
    /// Map a non-success HTTP status code to a classification.
    pub fn from_http_code(code: u16) -> Self {
        match code {
            200..=299 => SiteStatus::Ok,
            404 | 410 => SiteStatus::NotFound,
            403 => SiteStatus::Forbidden,
            429 => SiteStatus::RateLimited,
            500..=599 => SiteStatus::ServerError,
            _ => SiteStatus::Unknown,
        }
    }
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SiteStatus::Ok => "ok",
            SiteStatus::NotFound => "not_found",
            SiteStatus::Forbidden => "forbidden",
            SiteStatus::RateLimited => "rate_limited",
            SiteStatus::ServerError => "server_error",
            SiteStatus::Timeout => "timeout",
            SiteStatus::SslError => "ssl_error",
            SiteStatus::TooManyRedirects => "too_many_redirects",
            SiteStatus::NetworkError => "network_error",
            SiteStatus::ParseError => "parse_error",
            SiteStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// What one site produced: its records plus how the extraction went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteResult {
    pub sheet_name: String,
    pub records: Vec<FacultyRecord>,
    pub status: SiteStatus,
    pub http_code: Option<u16>,
    pub error_message: Option<String>,
}

impl SiteResult {
    pub fn ok(sheet_name: &str, records: Vec<FacultyRecord>) -> Self {
        SiteResult {
            sheet_name: sheet_name.to_string(),
            records,
            status: SiteStatus::Ok,
            http_code: Some(200),
            error_message: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == SiteStatus::Ok
    }
}

/// Returned by a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: std::path::PathBuf,
    pub results: Vec<SiteResult>,
}

impl RunSummary {
    pub fn total_records(&self) -> usize {
        self.results.iter().map(|r| r.records.len()).sum()
    }

    pub fn failed(&self) -> impl Iterator<Item = &SiteResult> {
        self.results.iter().filter(|r| !r.is_ok())
    }
}
