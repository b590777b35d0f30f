//! Workbook Output Module
//!
//! Writes one sheet per site: a bold header row followed by one row per
//! record. No index column. Sheets appear in the order they are given.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rust_xlsxwriter::{Format, Workbook};

use crate::types::{FacultyRecord, SiteResult, COLUMNS};

/// Excel's sheet name limit
pub const MAX_SHEET_NAME_LEN: usize = 31;

const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Describe why `name` cannot be used as a sheet name, if it can't
pub fn sheet_name_problem(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("sheet name is empty".to_string());
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Some(format!(
            "sheet name '{}' is longer than {} characters",
            name, MAX_SHEET_NAME_LEN
        ));
    }
    if let Some(c) = name.chars().find(|c| INVALID_SHEET_CHARS.contains(c)) {
        return Some(format!("sheet name '{}' contains '{}'", name, c));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Some(format!("sheet name '{}' starts or ends with an apostrophe", name));
    }
    None
}

/// Check every sheet name and reject case-insensitive duplicates
pub fn check_sheet_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if let Some(problem) = sheet_name_problem(name) {
            bail!(problem);
        }
        if !seen.insert(name.to_lowercase()) {
            bail!("duplicate sheet name '{}'", name);
        }
    }
    Ok(())
}

/// Write all results to a single workbook at `path`.
///
/// Nothing touches the disk until every sheet has been laid out, so a failure
/// while building rows leaves no partial file behind.
pub fn write_workbook(path: &Path, results: &[SiteResult]) -> Result<()> {
    check_sheet_names(results.iter().map(|r| r.sheet_name.as_str()))?;

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for result in results {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(&result.sheet_name)
            .with_context(|| format!("Failed to name sheet '{}'", result.sheet_name))?;

        for (col, label) in COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *label, &header)?;
            sheet.set_column_width(col as u16, 22)?;
        }

        write_rows(sheet, &result.records)
            .with_context(|| format!("Failed to write rows for sheet '{}'", result.sheet_name))?;
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook to {:?}", path))?;

    Ok(())
}

fn write_rows(sheet: &mut rust_xlsxwriter::Worksheet, records: &[FacultyRecord]) -> Result<()> {
    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, value) in record.cells().iter().enumerate() {
            if !value.is_empty() {
                sheet.write_string(row, col as u16, *value)?;
            }
        }
    }
    Ok(())
}
