use git2changelog::changelog::{ChangelogFormatter, RpmFormatter};
use git2changelog::domain::{BoundaryRules, CommitRecord, KeywordFilter};

// ============================================================================
// Release boundary classification
// ============================================================================

#[test]
fn test_tag_decoration_is_boundary() {
    let result = BoundaryRules::default().classify("tag: v1.2.0");
    assert!(result.is_boundary);
    assert_eq!(result.label, "v1.2.0");
}

#[test]
fn test_tagged_tip_uses_tag_name() {
    let result = BoundaryRules::default().classify("HEAD -> main, tag: v1.2.0");
    assert!(result.is_boundary);
    assert_eq!(result.label, "v1.2.0");
}

#[test]
fn test_untagged_tip_without_override() {
    let result = BoundaryRules::default().classify("HEAD -> main");
    assert!(result.is_boundary);
    assert_eq!(result.label, "HEAD:UNRELEASED");
}

#[test]
fn test_untagged_tip_with_override() {
    let rules = BoundaryRules::with_release_name(Some("release-9".to_string()));
    let result = rules.classify("HEAD -> main");
    assert!(result.is_boundary);
    assert_eq!(result.label, "release-9");
}

#[test]
fn test_plain_commit_passes_decoration_through() {
    let result = BoundaryRules::default().classify(" (origin/feature)");
    assert!(!result.is_boundary);
    assert_eq!(result.label, " (origin/feature)");
}

// ============================================================================
// Keyword filtering through the formatter
// ============================================================================

fn line(subject: &str) -> CommitRecord {
    CommitRecord::parse(&format!(
        "2023-01-04T10:00:00+00:00,Jane Doe,jane@example.com,0abc123,\"{}\",\"\"",
        subject
    ))
}

#[test]
fn test_filter_keeps_matching_subject() {
    let formatter = RpmFormatter::new(
        BoundaryRules::default(),
        KeywordFilter::new(["bugfix", "security"]),
    );
    let lines = formatter.format(&mut vec![line("security patch")].into_iter());
    assert_eq!(lines, vec!["- security patch : Commit 0abc123"]);
}

#[test]
fn test_filter_drops_other_subjects() {
    let formatter = RpmFormatter::new(
        BoundaryRules::default(),
        KeywordFilter::new(["bugfix", "security"]),
    );
    let lines = formatter.format(&mut vec![line("unrelated change")].into_iter());
    assert!(lines.is_empty());
}

#[test]
fn test_term_order_does_not_change_output() {
    let records = || vec![line("bugfix for security hole")].into_iter();
    let forward = RpmFormatter::new(
        BoundaryRules::default(),
        KeywordFilter::new(["bugfix", "security"]),
    );
    let reverse = RpmFormatter::new(
        BoundaryRules::default(),
        KeywordFilter::new(["security", "bugfix"]),
    );
    assert_eq!(
        forward.format(&mut records()),
        reverse.format(&mut records())
    );
}
