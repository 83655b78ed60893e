//! Validate raw form input into submittable event records.
//!
//! Validation happens entirely client-side, before any network call.
//! Every violated rule is collected and reported, not just the first one,
//! so a form can be corrected in a single pass.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

use crate::event::{Event, EventDraft};

/// Raw form input for creating or editing an event, exactly as the user
/// typed it. Categories arrive as one comma-separated string.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub image: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub categories: String,
    pub organizer: String,
    pub organizer_image: String,
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Required field is blank (or, for categories, splits to nothing)
    Missing,
    /// Date/time field present but not parseable
    UnparseableDate,
    /// End time is not strictly after start time
    InvalidDateRange,
}

/// A single violated rule, tied to the field it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub field: &'static str,
    pub kind: IssueKind,
}

impl Issue {
    /// Human-readable one-liner for this issue.
    pub fn message(&self) -> String {
        match self.kind {
            IssueKind::Missing => format!("{} is required", self.field),
            IssueKind::UnparseableDate => {
                format!("{} is not a valid date/time", self.field)
            }
            IssueKind::InvalidDateRange => "end time must be after start time".to_string(),
        }
    }
}

/// All rules a submission violated. Blocks the submission: nothing is sent
/// to the store while this is non-empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid event: {}", render_issues(.0))]
pub struct ValidationErrors(pub Vec<Issue>);

impl ValidationErrors {
    pub fn issues(&self) -> &[Issue] {
        &self.0
    }

    /// Names of the fields reported as missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|issue| issue.kind == IssueKind::Missing)
            .map(|issue| issue.field)
            .collect()
    }
}

fn render_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a create submission into a draft ready for POST.
pub fn validate_new_event(form: &EventForm) -> Result<EventDraft, ValidationErrors> {
    normalize(form)
}

/// Validate an edit submission into a full record ready for PUT.
///
/// Edits always resend the whole record, so the result carries every field
/// plus the existing id.
pub fn validate_edited_event(id: &str, form: &EventForm) -> Result<Event, ValidationErrors> {
    normalize(form).map(|draft| draft.into_event(id.to_string()))
}

/// Split a comma-separated categories string into trimmed, non-empty tags.
pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

fn normalize(form: &EventForm) -> Result<EventDraft, ValidationErrors> {
    let mut issues = Vec::new();

    let title = required_text("title", &form.title, &mut issues);
    let description = required_text("description", &form.description, &mut issues);
    let location = required_text("location", &form.location, &mut issues);
    let organizer = required_text("organizer", &form.organizer, &mut issues);

    let categories = split_categories(&form.categories);
    if categories.is_empty() {
        issues.push(Issue {
            field: "categories",
            kind: IssueKind::Missing,
        });
    }

    let start = required_instant("start", &form.start, &mut issues);
    let end = required_instant("end", &form.end, &mut issues);

    // The range rule only applies once both ends parsed; missing or
    // unparseable dates are already reported above.
    if let (Some(start), Some(end)) = (start, end)
        && end <= start
    {
        issues.push(Issue {
            field: "end",
            kind: IssueKind::InvalidDateRange,
        });
    }

    match (start, end) {
        (Some(start_time), Some(end_time)) if issues.is_empty() => Ok(EventDraft {
            title,
            description,
            image: optional_text(&form.image),
            start_time,
            end_time,
            location,
            categories,
            organizer,
            organizer_image: optional_text(&form.organizer_image),
        }),
        _ => Err(ValidationErrors(issues)),
    }
}

/// Trimmed field value, recording a Missing issue when blank.
fn required_text(field: &'static str, raw: &str, issues: &mut Vec<Issue>) -> String {
    let value = raw.trim();
    if value.is_empty() {
        issues.push(Issue {
            field,
            kind: IssueKind::Missing,
        });
    }
    value.to_string()
}

/// Blank optional fields normalize to None rather than an empty string.
fn optional_text(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn required_instant(
    field: &'static str,
    raw: &str,
    issues: &mut Vec<Issue>,
) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        issues.push(Issue {
            field,
            kind: IssueKind::Missing,
        });
        return None;
    }

    match parse_instant(raw) {
        Some(instant) => Some(instant),
        None => {
            issues.push(Issue {
                field,
                kind: IssueKind::UnparseableDate,
            });
            None
        }
    }
}

/// Parse an instant from RFC 3339 or the datetime-local shape
/// (`2025-01-01T18:00`, optionally with seconds). Offset-less inputs are
/// interpreted as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn complete_form() -> EventForm {
        EventForm {
            title: "Jazz Night".to_string(),
            description: "An evening of live jazz".to_string(),
            image: "https://example.com/jazz.jpg".to_string(),
            start: "2025-01-01T18:00".to_string(),
            end: "2025-01-01T20:00".to_string(),
            location: "Blue Note".to_string(),
            categories: "Music, Arts".to_string(),
            organizer: "Ella".to_string(),
            organizer_image: String::new(),
        }
    }

    // --- happy path ---

    #[test]
    fn complete_form_normalizes() {
        let draft = validate_new_event(&complete_form()).unwrap();

        assert_eq!(draft.title, "Jazz Night");
        assert_eq!(draft.categories, vec!["Music", "Arts"]);
        assert_eq!(draft.image.as_deref(), Some("https://example.com/jazz.jpg"));
        assert_eq!(draft.organizer_image, None);
        assert_eq!(
            draft.start_time,
            Utc.with_ymd_and_hms(2025, 1, 1, 18, 0, 0).unwrap()
        );
        assert_eq!(
            draft.end_time,
            Utc.with_ymd_and_hms(2025, 1, 1, 20, 0, 0).unwrap()
        );
    }

    #[test]
    fn edited_event_keeps_id() {
        let event = validate_edited_event("ev-7", &complete_form()).unwrap();
        assert_eq!(event.id, "ev-7");
        assert_eq!(event.title, "Jazz Night");
    }

    #[test]
    fn fields_are_trimmed() {
        let mut form = complete_form();
        form.title = "  Jazz Night  ".to_string();
        let draft = validate_new_event(&form).unwrap();
        assert_eq!(draft.title, "Jazz Night");
    }

    // --- missing fields ---

    #[test]
    fn missing_title_reports_exactly_title() {
        let mut form = complete_form();
        form.title = String::new();

        let errors = validate_new_event(&form).unwrap_err();
        assert_eq!(errors.missing_fields(), vec!["title"]);
        assert_eq!(errors.issues().len(), 1);
    }

    #[test]
    fn every_missing_field_is_reported() {
        let errors = validate_new_event(&EventForm::default()).unwrap_err();

        let mut missing = errors.missing_fields();
        missing.sort();
        assert_eq!(
            missing,
            vec!["categories", "description", "end", "location", "organizer", "start", "title"]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = complete_form();
        form.organizer = "   ".to_string();

        let errors = validate_new_event(&form).unwrap_err();
        assert_eq!(errors.missing_fields(), vec!["organizer"]);
    }

    // --- categories ---

    #[test]
    fn categories_split_trim_and_drop_empties() {
        assert_eq!(split_categories("Music, Arts"), vec!["Music", "Arts"]);
        assert_eq!(split_categories(" Music ,, Arts , "), vec!["Music", "Arts"]);
        assert_eq!(split_categories("Solo"), vec!["Solo"]);
    }

    #[test]
    fn categories_of_only_separators_are_missing() {
        let mut form = complete_form();
        form.categories = " , , ".to_string();

        let errors = validate_new_event(&form).unwrap_err();
        assert_eq!(errors.missing_fields(), vec!["categories"]);
    }

    // --- dates ---

    #[test]
    fn date_range_violation_is_its_own_kind() {
        let mut form = complete_form();
        form.end = "2025-01-01T17:00".to_string();

        let errors = validate_new_event(&form).unwrap_err();
        assert_eq!(errors.issues().len(), 1);
        assert_eq!(errors.issues()[0].kind, IssueKind::InvalidDateRange);
        assert!(errors.missing_fields().is_empty());
    }

    #[test]
    fn equal_start_and_end_is_rejected() {
        let mut form = complete_form();
        form.end = form.start.clone();

        let errors = validate_new_event(&form).unwrap_err();
        assert_eq!(errors.issues()[0].kind, IssueKind::InvalidDateRange);
    }

    #[test]
    fn unparseable_date_is_reported_per_field() {
        let mut form = complete_form();
        form.start = "next friday".to_string();

        let errors = validate_new_event(&form).unwrap_err();
        assert_eq!(errors.issues().len(), 1);
        assert_eq!(errors.issues()[0].field, "start");
        assert_eq!(errors.issues()[0].kind, IssueKind::UnparseableDate);
    }

    #[test]
    fn missing_date_does_not_double_report() {
        let mut form = complete_form();
        form.end = String::new();

        let errors = validate_new_event(&form).unwrap_err();
        assert_eq!(errors.missing_fields(), vec!["end"]);
        assert_eq!(errors.issues().len(), 1);
    }

    // --- parse_instant ---

    #[test]
    fn parses_datetime_local_with_and_without_seconds() {
        assert_eq!(
            parse_instant("2025-01-01T18:00"),
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 18, 0, 0).unwrap())
        );
        assert_eq!(
            parse_instant("2025-01-01T18:00:30"),
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 18, 0, 30).unwrap())
        );
    }

    #[test]
    fn parses_rfc3339_and_converts_offsets_to_utc() {
        assert_eq!(
            parse_instant("2025-01-01T18:00:00Z"),
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 18, 0, 0).unwrap())
        );
        assert_eq!(
            parse_instant("2025-01-01T18:00:00+02:00"),
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 16, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_instant("tomorrow"), None);
        assert_eq!(parse_instant("2025-13-01T00:00"), None);
    }
}
