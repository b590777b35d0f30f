use scraper::{ElementRef, Html};

use super::{selector, ExtractError};
use crate::normalize::{email_for, employee_id, normalize_ws, split_name_first_token, strip_credentials};
use crate::types::FacultyRecord;

/// Parse a directory page where each faculty member is a `<li>` wrapping a
/// profile link such as `profile.php?empID=123`.
///
/// List items without such a link are skipped.
pub fn parse_employee_directory(
    html: &str,
    email_domain: &str,
) -> Result<Vec<FacultyRecord>, ExtractError> {
    let document = Html::parse_document(html);
    let li_selector = selector("li")?;
    let a_selector = selector("a")?;

    let mut records = Vec::new();
    for li in document.select(&li_selector) {
        let Some(link) = li.select(&a_selector).next() else {
            continue;
        };
        let Some(id) = link.value().attr("href").and_then(employee_id) else {
            continue;
        };

        let text = link_text(&link);
        let (first, last) = split_name_first_token(strip_credentials(&text));
        records.push(FacultyRecord::new(&first, &last, &email_for(id, email_domain)));
    }

    Ok(records)
}

fn link_text(link: &ElementRef) -> String {
    normalize_ws(&link.text().collect::<Vec<_>>().join(" "))
}
