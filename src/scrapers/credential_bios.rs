use scraper::Html;

use super::{selector, ExtractError};
use crate::normalize::{mentions_credential, normalize_ws, split_name_first_two, strip_credentials};
use crate::types::FacultyRecord;

/// Parse a page of free-form bios. A `<p>` counts as a faculty entry when its
/// text mentions a credential; the name is the first bold element inside it.
///
/// Names are split with the first-two-tokens policy, and no email is
/// available from this layout.
pub fn parse_credential_bios(html: &str) -> Result<Vec<FacultyRecord>, ExtractError> {
    let document = Html::parse_document(html);
    let p_selector = selector("p")?;
    let bold_selector = selector("strong, b")?;

    let mut records = Vec::new();
    for p in document.select(&p_selector) {
        let text: String = p.text().collect();
        if !mentions_credential(&text) {
            continue;
        }

        let Some(bold) = p.select(&bold_selector).next() else {
            continue;
        };
        let name = normalize_ws(&bold.text().collect::<Vec<_>>().join(" "));
        let (first, last) = split_name_first_two(strip_credentials(&name));
        records.push(FacultyRecord::new(&first, &last, ""));
    }

    Ok(records)
}
