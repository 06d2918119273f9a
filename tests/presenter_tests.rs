//! End-to-end tests: JSON file on disk → session → chart specification.

use circadian_viewer::charts::{ChartSelection, SeriesColor};
use circadian_viewer::config::ViewerConfig;
use circadian_viewer::data::{LabelError, TimeOverflow};
use circadian_viewer::{DataLoader, LoaderError, Session, SessionError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TWO_SAMPLES: &str = r#"[
    {"time": 0, "brightness": 10, "cct": 2000},
    {"time": 60, "brightness": 50, "cct": 3000}
]"#;

fn write_data(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("circadian.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_overlay_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_data(&dir, TWO_SAMPLES);

    let session = Session::from_path(path, &ViewerConfig::default()).unwrap();
    let spec = session.presenter().chart(ChartSelection::Overlay);

    let xs = vec!["12:00 AM".to_string(), "01:00 AM".to_string()];
    assert_eq!(spec.series.len(), 2);
    assert_eq!(spec.series[0].xs, xs);
    assert_eq!(spec.series[0].ys, vec![10.0, 50.0]);
    assert_eq!(spec.series[0].color, SeriesColor::Blue);
    assert_eq!(spec.series[1].xs, xs);
    assert_eq!(spec.series[1].ys, vec![2000.0, 3000.0]);
    assert_eq!(spec.series[1].color, SeriesColor::Red);
}

#[test]
fn test_single_series_views_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_data(&dir, TWO_SAMPLES);
    let session = Session::from_path(path, &ViewerConfig::default()).unwrap();
    let presenter = session.presenter();

    let brightness = presenter.chart(ChartSelection::BrightnessOnly);
    assert_eq!(brightness.series.len(), 1);
    assert_eq!(brightness.series[0].ys, presenter.dataset().brightness());

    let cct = presenter.chart(ChartSelection::CctOnly);
    assert_eq!(cct.series.len(), 1);
    assert_eq!(cct.series[0].ys, presenter.dataset().cct());

    for selection in ChartSelection::ALL {
        let spec = presenter.chart(selection);
        assert_eq!(spec.x_axis_title, "Time (AM/PM)");
        assert!(spec.series.iter().all(|s| s.xs.len() == s.ys.len()));
    }
}

#[test]
fn test_missing_file_stops_before_chart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("circadian.json");

    let result = Session::from_path(path, &ViewerConfig::default());
    let err = result.unwrap_err();
    assert!(err.is_data_not_found());
    assert!(err.to_string().contains(&dir.path().display().to_string()));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_data(&dir, r#"[{"time": 0, "cct": 2000}]"#);

    match DataLoader::load(&path) {
        Err(LoaderError::Parse(e)) => assert!(e.to_string().contains("brightness")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_overflow_policy_from_config() {
    let dir = TempDir::new().unwrap();
    let path = write_data(
        &dir,
        r#"[{"time": 1380, "brightness": 5, "cct": 2200},
            {"time": 1500, "brightness": 3, "cct": 2000}]"#,
    );

    let wrap = Session::from_path(path.clone(), &ViewerConfig::default()).unwrap();
    assert_eq!(wrap.presenter().labels(), ["11:00 PM", "01:00 AM"]);

    let strict = ViewerConfig {
        time_overflow: TimeOverflow::Reject,
        ..ViewerConfig::default()
    };
    let err = Session::from_path(path, &strict).unwrap_err();
    assert!(matches!(err, SessionError::Label(LabelError::OutOfRange(1500))));
}

#[test]
fn test_bundled_fixture_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("circadian.json");
    let session = Session::from_path(path, &ViewerConfig::default()).unwrap();
    let presenter = session.presenter();

    assert!(!presenter.dataset().is_empty());
    assert!(presenter.dataset().is_monotonic());
    assert_eq!(presenter.labels().first().map(String::as_str), Some("12:00 AM"));
}

#[test]
fn test_config_file_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("circadian.toml");
    fs::write(
        &path,
        "data_file = \"/srv/light/schedule.json\"\ntime_overflow = \"reject\"\n",
    )
    .unwrap();

    let config = ViewerConfig::load(&path).unwrap();
    assert_eq!(config.data_file, PathBuf::from("/srv/light/schedule.json"));
    assert_eq!(config.time_overflow, TimeOverflow::Reject);
    assert_eq!(
        Session::candidate_paths(&config.data_file, Some(dir.path())),
        vec![PathBuf::from("/srv/light/schedule.json")]
    );
}
