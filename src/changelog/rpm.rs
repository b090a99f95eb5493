use chrono::DateTime;

use super::ChangelogFormatter;
use crate::domain::{BoundaryRules, CommitRecord, KeywordFilter};

/// Date layout of an RPM `%changelog` header, e.g. `Wed Jan 04 2023`
pub const RPM_DATE_FORMAT: &str = "%a %b %d %Y";

/// RPM spec file changelog formatter.
///
/// Each release boundary opens a stanza:
///
/// ```text
///
/// * Wed Jan 04 2023 Jane Doe <jane@example.com> - v1.2.0
/// - fix crash on empty input : Commit 1a2b3c4
/// ```
#[derive(Debug, Clone, Default)]
pub struct RpmFormatter {
    rules: BoundaryRules,
    filter: KeywordFilter,
}

impl RpmFormatter {
    pub fn new(rules: BoundaryRules, filter: KeywordFilter) -> Self {
        RpmFormatter { rules, filter }
    }

    fn header(record: &CommitRecord, label: &str) -> String {
        format!(
            "* {} {} <{}> - {}",
            format_date(&record.date),
            record.committer_name,
            record.committer_email,
            label
        )
    }

    fn bullet(record: &CommitRecord) -> String {
        format!("- {} : Commit {}", record.subject, record.short_id)
    }
}

impl ChangelogFormatter for RpmFormatter {
    fn format(&self, records: &mut dyn Iterator<Item = CommitRecord>) -> Vec<String> {
        let mut lines = Vec::new();

        for record in records {
            let boundary = self.rules.classify(&record.decoration);
            if boundary.is_boundary {
                lines.push(String::new());
                lines.push(Self::header(&record, &boundary.label));
            }
            if self.filter.accepts(&record.subject) {
                lines.push(Self::bullet(&record));
            }
        }

        lines
    }
}

/// Render a committer date as `Wed Jan 04 2023`.
///
/// Accepts RFC 3339 (`%cI`) and RFC 2822 (`%cD`) input; anything else is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|date| date.format(RPM_DATE_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, subject: &str, decoration: &str) -> CommitRecord {
        CommitRecord {
            date: "2023-01-04T10:00:00+01:00".to_string(),
            committer_name: "Jane Doe".to_string(),
            committer_email: "jane@example.com".to_string(),
            short_id: id.to_string(),
            subject: subject.to_string(),
            decoration: decoration.to_string(),
        }
    }

    fn run(formatter: &RpmFormatter, records: Vec<CommitRecord>) -> Vec<String> {
        formatter.format(&mut records.into_iter())
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2023-01-04T10:00:00+01:00"), "Wed Jan 04 2023");
    }

    #[test]
    fn test_format_date_keeps_source_offset() {
        assert_eq!(format_date("2023-01-04T23:30:00-05:00"), "Wed Jan 04 2023");
    }

    #[test]
    fn test_format_date_rfc2822() {
        assert_eq!(format_date("Wed, 4 Jan 2023 10:00:00 +0100"), "Wed Jan 04 2023");
    }

    #[test]
    fn test_format_date_unparseable_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_boundary_header_and_bullet() {
        let lines = run(
            &RpmFormatter::default(),
            vec![record("1a2b3c4", "fix crash", " (tag: v1.2.0)")],
        );
        assert_eq!(
            lines,
            vec![
                "",
                "* Wed Jan 04 2023 Jane Doe <jane@example.com> - v1.2.0",
                "- fix crash : Commit 1a2b3c4",
            ]
        );
    }

    #[test]
    fn test_untagged_head_uses_unreleased_label() {
        let lines = run(
            &RpmFormatter::default(),
            vec![record("abc", "wip", " (HEAD -> main)")],
        );
        assert_eq!(lines[1], "* Wed Jan 04 2023 Jane Doe <jane@example.com> - HEAD:UNRELEASED");
    }

    #[test]
    fn test_release_name_for_untagged_head() {
        let formatter = RpmFormatter::new(
            BoundaryRules::with_release_name(Some("release-9".to_string())),
            KeywordFilter::default(),
        );
        let lines = run(&formatter, vec![record("abc", "wip", " (HEAD -> main)")]);
        assert!(lines[1].ends_with("- release-9"));
    }

    #[test]
    fn test_filter_suppresses_bullets_but_keeps_headers() {
        let formatter = RpmFormatter::new(
            BoundaryRules::default(),
            KeywordFilter::new(["bugfix", "security"]),
        );
        let lines = run(
            &formatter,
            vec![
                record("c3", "unrelated change", " (tag: v2.0.0)"),
                record("c2", "security patch", ""),
                record("c1", "docs tweak", ""),
            ],
        );
        assert_eq!(
            lines,
            vec![
                "",
                "* Wed Jan 04 2023 Jane Doe <jane@example.com> - v2.0.0",
                "- security patch : Commit c2",
            ]
        );
    }

    #[test]
    fn test_multiple_matching_terms_emit_one_bullet() {
        let formatter = RpmFormatter::new(
            BoundaryRules::default(),
            KeywordFilter::new(["security", "patch"]),
        );
        let lines = run(&formatter, vec![record("c2", "security patch", "")]);
        assert_eq!(lines, vec!["- security patch : Commit c2"]);
    }

    #[test]
    fn test_revert_subject_keeps_release_header() {
        let parsed = CommitRecord::parse(
            "2023-01-04T10:00:00+00:00,Jane Doe,jane@example.com,abc1234,\"Revert \"Add foo\"\",\" (HEAD -> main, tag: v2.0.0)\"",
        );
        let lines = run(&RpmFormatter::default(), vec![parsed]);
        assert_eq!(
            lines,
            vec![
                "",
                "* Wed Jan 04 2023 Jane Doe <jane@example.com> - v2.0.0",
                "- Revert \"Add foo\" : Commit abc1234",
            ]
        );
    }

    #[test]
    fn test_commits_before_any_boundary_have_no_header() {
        let lines = run(
            &RpmFormatter::default(),
            vec![
                record("c2", "second", ""),
                record("c1", "first", " (tag: v1.0.0)"),
            ],
        );
        assert_eq!(
            lines,
            vec![
                "- second : Commit c2",
                "",
                "* Wed Jan 04 2023 Jane Doe <jane@example.com> - v1.0.0",
                "- first : Commit c1",
            ]
        );
    }
}
