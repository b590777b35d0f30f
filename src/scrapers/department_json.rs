use serde::Deserialize;

use super::ExtractError;
use crate::types::FacultyRecord;

#[derive(Debug, Deserialize)]
struct Directory {
    faculty: Vec<Member>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Member {
    first_name: Option<String>,
    last_name: Option<String>,
    departments: Option<Vec<String>>,
}

impl Member {
    fn in_department(&self, filter: &str) -> bool {
        self.departments
            .as_deref()
            .is_some_and(|deps| deps.iter().any(|d| d == filter))
    }
}

/// Parse a `{"faculty": [...]}` directory, keeping members whose
/// `departments` contain `department_filter` exactly.
///
/// Email and error stay empty; the directory carries neither.
pub fn parse_department_json(
    body: &str,
    department_filter: &str,
) -> Result<Vec<FacultyRecord>, ExtractError> {
    let directory: Directory = serde_json::from_str(body)
        .map_err(|e| ExtractError::Shape(e.to_string()))?;

    let mut records = Vec::new();
    for (idx, member) in directory.faculty.iter().enumerate() {
        if !member.in_department(department_filter) {
            continue;
        }

        let first = member.first_name.as_deref().ok_or_else(|| {
            ExtractError::Shape(format!("faculty[{}] is missing firstName", idx))
        })?;
        let last = member.last_name.as_deref().ok_or_else(|| {
            ExtractError::Shape(format!("faculty[{}] is missing lastName", idx))
        })?;

        records.push(FacultyRecord::new(first, last, ""));
    }

    Ok(records)
}
