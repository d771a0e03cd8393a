// src/specs/members.rs

use url::Url;

use crate::core::calendar::{Calendar, chamber_for};
use crate::core::sanitize::{group_parts, split_qualifier, strip_mailto};
use crate::data::{CanonicalRecord, Detail};
use crate::error::{Result, ScrapeError};
use crate::params::{BASE_URL, PLACEHOLDER_IMAGE, RecordShape};
use crate::scrape::RawObservation;

/// Normalize one scraped row into a canonical record for `date`.
///
/// Rows missing a required field are malformed and excluded by the
/// caller; nothing is ever recorded with placeholder values. A stripped
/// name qualifier is a logged diagnostic, not an error; the cleaned
/// value is used regardless.
pub fn normalize(
    raw: &RawObservation,
    date: &str,
    calendar: &Calendar,
    shape: RecordShape,
) -> Result<CanonicalRecord> {
    let term = calendar.term_for(date)?;

    let raw_name = required(raw.name.as_deref(), date, "name")?;
    let (name, stripped) = split_qualifier(raw_name);
    if stripped {
        logw!("{raw_name:?} converted to {name:?}");
    }

    let email = raw.email.as_deref().and_then(strip_mailto);

    let photo_src = required(raw.photo.as_deref(), date, "photo")?;
    let image = photo_url(photo_src, date)?;

    let raw_group = required(raw.group.as_deref(), date, "group")?;
    let (group, group_id) = group_parts(raw_group);

    let detail = match shape {
        RecordShape::Chamber => Detail::Chamber(s!(chamber_for(date)?)),
        RecordShape::Interval => match calendar.sample_window(term, date)? {
            Some((start, end)) => Detail::Interval { start: Some(start), end },
            None => Detail::Interval { start: None, end: None },
        },
    };

    Ok(CanonicalRecord {
        name,
        email,
        image,
        term: s!(term),
        group,
        group_id,
        detail,
    })
}

fn required<'a>(value: Option<&'a str>, date: &str, field: &'static str) -> Result<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ScrapeError::MalformedRow { date: s!(date), field })
}

/// Resolve the photo src's `image` query parameter against the site base.
/// The stock "no portrait" placeholder resolves to no photo at all.
fn photo_url(src: &str, date: &str) -> Result<Option<String>> {
    let base = Url::parse(BASE_URL)?;
    // src may be page-relative
    let src = base.join(src)?;
    let image = src
        .query_pairs()
        .find_map(|(k, v)| if k == "image" { Some(v.into_owned()) } else { None })
        .ok_or_else(|| ScrapeError::MalformedRow { date: s!(date), field: "image" })?;
    if image.contains(PLACEHOLDER_IMAGE) {
        return Ok(None);
    }
    Ok(Some(base.join(&image)?.to_string()))
}
