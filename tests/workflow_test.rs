// tests/workflow_test.rs
use chrono::{DateTime, TimeZone, Utc};

use merge_release_notes::cli::{run_merge_workflow, MergeWorkflowArgs, WorkflowOutcome};
use merge_release_notes::config::ReleasesConfig;
use merge_release_notes::diagnostics::{Endpoint, RangeWarning};
use merge_release_notes::domain::{Release, VersionRange};
use merge_release_notes::github::{MockReleaseSource, RepoIdentity};
use merge_release_notes::ReleaseNotesError;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
}

fn args(start: &str, end: &str) -> MergeWorkflowArgs {
    MergeWorkflowArgs {
        repository: RepoIdentity::new("facebook", "react"),
        range: VersionRange::new(start, end),
        now: now(),
    }
}

fn sample_releases() -> Vec<Release> {
    // Newest first, the way the API reports them
    vec![
        Release::new("v2.0.0").with_body("Stable"),
        Release::new("v2.0.0-rc.1")
            .with_body("Candidate")
            .with_prerelease(true),
        Release::new("v1.1.0").with_body("Minor"),
        Release::new("v1.0.0").with_body("Initial"),
    ]
}

#[tokio::test]
async fn test_workflow_renders_ordered_document() {
    let source = MockReleaseSource::new(sample_releases());
    let mut warnings: Vec<RangeWarning> = Vec::new();

    let outcome = run_merge_workflow(
        &args("v1.0.0", "v2.0.0"),
        &ReleasesConfig::default(),
        &source,
        &mut warnings,
    )
    .await
    .unwrap();

    match &outcome {
        WorkflowOutcome::Rendered { document, tags } => {
            assert_eq!(tags, &vec!["v1.1.0", "v2.0.0-rc.1", "v2.0.0"]);
            assert!(document.starts_with("# Release notes for facebook/react"));
            let minor = document.find("Minor").unwrap();
            let candidate = document.find("Candidate").unwrap();
            let stable = document.find("Stable").unwrap();
            assert!(minor < candidate && candidate < stable);
            assert!(!document.contains("Initial"));
        }
        other => panic!("expected a document, got {:?}", other),
    }
    assert_eq!(outcome.release_count(), 3);
    assert_eq!(source.fetch_count(), 1);
    assert!(warnings.is_empty());
}

#[tokio::test]
async fn test_workflow_can_exclude_prereleases() {
    let source = MockReleaseSource::new(sample_releases());
    let mut warnings: Vec<RangeWarning> = Vec::new();
    let config = ReleasesConfig {
        include_prereleases: false,
    };

    let outcome = run_merge_workflow(&args("v1.0.0", "v2.0.0"), &config, &source, &mut warnings)
        .await
        .unwrap();

    match outcome {
        WorkflowOutcome::Rendered { document, tags } => {
            assert_eq!(tags, vec!["v1.1.0", "v2.0.0"]);
            assert!(!document.contains("Candidate"));
        }
        other => panic!("expected a document, got {:?}", other),
    }
}

#[tokio::test]
async fn test_workflow_empty_range_returns_informational_sentence() {
    let source = MockReleaseSource::new(sample_releases());
    let mut warnings: Vec<RangeWarning> = Vec::new();

    let outcome = run_merge_workflow(
        &args("v3.0.0", "v4.0.0"),
        &ReleasesConfig::default(),
        &source,
        &mut warnings,
    )
    .await
    .unwrap();

    assert_eq!(
        outcome.text(),
        "No releases found between v3.0.0 (exclusive) and v4.0.0 (inclusive)."
    );
    assert_eq!(outcome.release_count(), 0);
}

#[tokio::test]
async fn test_invalid_range_fails_before_fetching() {
    let source = MockReleaseSource::new(sample_releases());
    let mut warnings: Vec<RangeWarning> = Vec::new();

    let err = run_merge_workflow(
        &args("v2.0.0", "v1.0.0"),
        &ReleasesConfig::default(),
        &source,
        &mut warnings,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        ReleaseNotesError::InvalidRange { ref start, ref end } if start == "v2.0.0" && end == "v1.0.0"
    ));
    assert_eq!(source.fetch_count(), 0, "no fetch may happen for an invalid range");
}

#[tokio::test]
async fn test_source_errors_propagate() {
    let source = MockReleaseSource::failing("rate limited upstream");
    let mut warnings: Vec<RangeWarning> = Vec::new();

    let err = run_merge_workflow(
        &args("v1.0.0", "v2.0.0"),
        &ReleasesConfig::default(),
        &source,
        &mut warnings,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ReleaseNotesError::Api { status: 503, .. }));
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn test_non_semver_endpoint_warns_but_succeeds() {
    let source = MockReleaseSource::new(vec![
        Release::new("build-12"),
        Release::new("build-9"),
        Release::new("build-10"),
    ]);
    let mut warnings: Vec<RangeWarning> = Vec::new();

    let outcome = run_merge_workflow(
        &args("build-9", "build-12"),
        &ReleasesConfig::default(),
        &source,
        &mut warnings,
    )
    .await
    .unwrap();

    match outcome {
        WorkflowOutcome::Rendered { tags, .. } => assert_eq!(tags, vec!["build-10", "build-12"]),
        other => panic!("expected a document, got {:?}", other),
    }
    assert!(warnings.contains(&RangeWarning::NonSemverEndpoint {
        endpoint: Endpoint::Start,
        value: "build-9".to_string(),
    }));
    assert!(warnings.contains(&RangeWarning::NonSemverEndpoint {
        endpoint: Endpoint::End,
        value: "build-12".to_string(),
    }));
}

#[tokio::test]
async fn test_written_output_ends_with_single_newline() {
    let source = MockReleaseSource::new(sample_releases());
    let mut warnings: Vec<RangeWarning> = Vec::new();

    let rendered = run_merge_workflow(
        &args("v1.0.0", "v2.0.0"),
        &ReleasesConfig::default(),
        &source,
        &mut warnings,
    )
    .await
    .unwrap();
    let empty = run_merge_workflow(
        &args("v3.0.0", "v4.0.0"),
        &ReleasesConfig::default(),
        &source,
        &mut warnings,
    )
    .await
    .unwrap();

    for outcome in [rendered, empty] {
        let mut out: Vec<u8> = Vec::new();
        outcome.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"), "double newline in {:?}", text);
        assert_eq!(text.trim_end_matches('\n'), outcome.text().trim_end_matches('\n'));
    }
}
