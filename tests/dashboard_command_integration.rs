//! Integration tests for the `dashboard` command.
//!
//! Sessions are driven by scripted input over `tests/fixtures/titles.csv`.

use catalog_eda::Host;
use std::io::{BufRead, Cursor};

const FIXTURE: &str = "tests/fixtures/titles.csv";

/// Test host that captures output and replays a command script.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    input_buf: Cursor<Vec<u8>>,
}

impl TestHost {
    fn with_input(script: &str) -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            input_buf: Cursor::new(script.as_bytes().to_vec()),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn input(&mut self) -> impl BufRead {
        &mut self.input_buf
    }

    fn exit(&mut self, _code: i32) {}
}

fn run_session(script: &str, extra: &[&str]) -> TestHost {
    let mut host = TestHost::with_input(script);
    let mut argv = vec!["catalog-eda", "dashboard", "--color", "never", "--input", FIXTURE];
    argv.extend_from_slice(extra);
    catalog_eda::run(&mut host, argv).unwrap();
    host
}

#[test]
fn test_initial_dashboard_uses_full_year_range() {
    let host = run_session("", &["--once"]);
    let out = host.output_str();

    assert!(out.contains("Years   : 2017-2021"), "{out}");
    // Titles without a parsable date fall outside every year range.
    assert!(out.contains("Titles  : 20"), "{out}");
    assert!(out.contains("TV Shows: 8"), "{out}");
    assert!(out.contains("[06] Trend of Selected Genres Over Time"));
    assert!(host.error_str().is_empty());
}

#[test]
fn test_scripted_session_narrows_views() {
    let host = run_session("types TV Show\nyears 2021 2021\nregions Asia\nview 10\nquit\n", &[]);
    let out = host.output_str();

    assert!(out.contains("Titles  : 8"), "{out}");
    assert!(out.contains("Years set to 2021-2021"));
    assert!(out.contains("Titles  : 4"), "{out}");

    let (_, countries) = out.rsplit_once("[10] Top Content-Producing Countries").unwrap();
    assert!(countries.contains("India"), "{countries}");
    assert!(!countries.contains("United States"), "{countries}");
    assert!(host.error_str().is_empty(), "{}", host.error_str());
}

#[test]
fn test_year_range_is_clamped_to_data() {
    let host = run_session("years 1990 2030\n", &[]);
    assert!(host.output_str().contains("Years set to 2017-2021"));
}

#[test]
fn test_empty_selection_renders_no_data() {
    let host = run_session("types none\nview 1\n", &[]);
    let out = host.output_str();

    assert!(out.contains("Titles  : 0"), "{out}");
    let (_, view) = out.rsplit_once("[01] Count of Movies vs TV Shows").unwrap();
    assert!(view.contains("(no data)"), "{view}");
}

#[test]
fn test_session_survives_errors() {
    let host = run_session("years abc\nview twelve\nsample -1\nhelp\n", &[]);

    assert_eq!(host.error_str().matches("error: ").count(), 3, "{}", host.error_str());
    assert!(host.output_str().contains("quit"));
}

#[test]
fn test_invalid_initial_region_fails() {
    let mut host = TestHost::with_input("");
    let result = catalog_eda::run(
        &mut host,
        ["catalog-eda", "dashboard", "--input", FIXTURE, "--once", "--regions", "Atlantis"],
    );

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Atlantis"), "{message}");
}
