mod helper;

use std::sync::Arc;

use helper::{RecordingReporter, StubSource};
use rstest::rstest;
use update_checker::update::checker::{UpdateSeverity, classify};
use update_checker::update::error::{FetchError, UpdateError};
use update_checker::update::service::UpdateService;
use update_checker::update::version::Version;

#[rstest]
#[case("2.27.1.2342", UpdateSeverity::NoNewVersion)]
#[case("2.27.0.1253", UpdateSeverity::NoNewVersion)]
#[case("2.26.9.9999", UpdateSeverity::NoNewVersion)]
#[case("1.99.99.99", UpdateSeverity::NoNewVersion)]
#[case("2.27.1.2343", UpdateSeverity::PatchAvailable)]
#[case("2.27.2.2342", UpdateSeverity::PatchAvailable)]
#[case("2.28.0.144", UpdateSeverity::MinorAvailable)]
#[case("3.0.0.4344", UpdateSeverity::MajorAvailable)]
#[tokio::test]
async fn service_classifies_release_against_current_build(
    #[case] available: &str,
    #[case] expected: UpdateSeverity,
) {
    let current = Version::parse("2.27.1.2342").unwrap();
    let service = UpdateService::new(
        current,
        Arc::new(StubSource::returning(available)),
        Arc::new(RecordingReporter::default()),
    );

    assert_eq!(service.check(false).await, expected);
    assert_eq!(
        classify(current, Version::parse(available).unwrap()),
        expected
    );
}

#[tokio::test]
async fn each_refresh_replaces_the_cached_result() {
    let current = Version::parse("2.27.1.2342").unwrap();
    let source = StubSource::new(vec![
        Ok(Version::new(2, 27, 2, 0)),
        Err(UpdateError::Fetch(FetchError::Timeout { timeout_ms: 5000 })),
        Ok(Version::new(3, 0, 0, 0)),
    ]);
    let service = UpdateService::new(
        current,
        Arc::new(source),
        Arc::new(RecordingReporter::default()),
    );

    let severities = [
        service.check(false).await,
        service.check(false).await,
        service.check(false).await,
    ];

    assert_eq!(
        severities,
        [
            UpdateSeverity::PatchAvailable,
            UpdateSeverity::Unknown,
            UpdateSeverity::MajorAvailable
        ]
    );
    let last = service.last_check().unwrap();
    assert_eq!(last.available, Some(Version::new(3, 0, 0, 0)));
    assert_eq!(last.current, current);
}

#[test]
fn equal_versions_never_classify_as_update() {
    for tag in ["0.0.0.0", "2.27.1.2342", "4294967295.4294967295.4294967295.4294967295"] {
        let v = Version::parse(tag).unwrap();
        assert_eq!(classify(v, v), UpdateSeverity::NoNewVersion);
    }
}
