//! End-to-end tests: file bytes through the session and the display pipeline

use approx::assert_relative_eq;
use tsplot_core::signal::{dft_abs, idft_real, moving_average, LogType};
use tsplot_core::signal::{PostProcess, ProcessMode, ProcessParams};
use tsplot_core::{ParseOptions, TouchstoneError, TraceSession};

const TEST_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/data");

fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(format!("{}/{}", TEST_DATA_DIR, name)).expect("Failed to read fixture")
}

#[test]
fn test_session_dft_of_selected_trace() {
    let mut session = TraceSession::new();
    session
        .load(&read_fixture("load_ma.s1p"), "load_ma.s1p")
        .expect("Failed to load");
    assert!(session.select("S11"));

    let params = ProcessParams {
        show_half: false,
        ..Default::default()
    };
    let out = session.processed(ProcessMode::Dft, &params);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name(), "S11 (DFT)");

    let expected = dft_abs(&[0.1, 0.2, 0.3, 0.4]);
    for (a, e) in out[0].values().iter().zip(&expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-12);
    }
    // DC bin is the sum
    assert_relative_eq!(out[0].values()[0], 1.0, epsilon = 1e-12);
}

#[test]
fn test_session_idft_with_preprocessing() {
    let mut session = TraceSession::new();
    session
        .load(&read_fixture("load_ma.s1p"), "load_ma.s1p")
        .unwrap();
    session.select_all();

    let params = ProcessParams {
        ma_enabled: true,
        ma_window: 2,
        log_type: LogType::Ln,
        show_half: true,
    };
    let out = session.processed(ProcessMode::Idft, &params);
    assert_eq!(out[0].name(), "S11 (IDFT)");
    assert_eq!(out[0].len(), 2);
    assert_eq!(out[0].frequency(), &[1000.0, 2000.0]);

    let smoothed = moving_average(&[0.1, 0.2, 0.3, 0.4], 2);
    let logged: Vec<f64> = smoothed.iter().map(|v| (v.abs() + 1e-12).ln()).collect();
    let expected = idft_real(&logged);
    for (a, e) in out[0].values().iter().zip(&expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-12);
    }
}

#[test]
fn test_parameters_can_change_without_reparsing() {
    let mut session = TraceSession::new();
    session.load(&read_fixture("simple.s2p"), "simple.s2p").unwrap();
    session.select("S21");

    let mut params = ProcessParams {
        show_half: false,
        ..Default::default()
    };
    let first = session.processed(ProcessMode::Dft, &params);
    params.log_type = LogType::Log10;
    let second = session.processed(ProcessMode::Dft, &params);
    params.log_type = LogType::None;
    let third = session.processed(ProcessMode::Dft, &params);

    assert_ne!(first, second);
    assert_eq!(first, third);
}

#[test]
fn test_post_process_overlay() {
    let mut session = TraceSession::new();
    session
        .load(&read_fixture("three_port.s3p"), "three_port.s3p")
        .unwrap();
    session.select("S11");
    session.select("S33");

    let traces: Vec<_> = session.selected_traces().into_iter().cloned().collect();
    let post = PostProcess {
        show_ma: true,
        ma_window: 2,
    };
    let shown = tsplot_core::signal::with_moving_average(&traces, &post);
    let names: Vec<&str> = shown.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["S11", "S33", "S11 (MA)", "S33 (MA)"]);
}

#[test]
fn test_strict_session_rejects_trailing_tokens() {
    let mut content = read_fixture("load_ma.s1p");
    content.extend_from_slice(b"5000 0.5\n");

    let mut lenient = TraceSession::new();
    assert_eq!(lenient.load(&content, "load_ma.s1p").unwrap()[0].len(), 4);

    let mut strict = TraceSession::with_options(ParseOptions::strict());
    assert!(matches!(
        strict.load(&content, "load_ma.s1p"),
        Err(TouchstoneError::IncompleteSample { trailing: 2 })
    ));
    assert!(strict.traces().is_empty());
}
