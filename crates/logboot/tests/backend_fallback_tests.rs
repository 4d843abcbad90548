#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Asking for the shared backend while handing over a custom sink must
//! still register the sink natively and say why, exactly once.

use logboot::bootstrap::{registration_count, try_ensure_initialized_with};
use logboot::sink::CaptureSink;
use logboot::{Backend, BackendChoice, BootstrapConfig, LogLevel};

#[test]
fn test_shared_request_with_custom_sink_warns_once() {
    let (sink, capture) = CaptureSink::new();
    let config = BootstrapConfig::default()
        .with_sink(sink)
        .with_backend(BackendChoice::Shared);

    let backend = try_ensure_initialized_with(config).unwrap();
    assert_eq!(backend, Backend::Native);
    assert_eq!(registration_count(), 1);

    let warnings: Vec<_> = capture
        .records()
        .into_iter()
        .filter(|r| r.message.contains("event=\"backend_fallback\""))
        .collect();
    assert_eq!(warnings.len(), 1, "{:?}", capture.lines());

    let warning = &warnings[0];
    assert_eq!(warning.level, LogLevel::Warn);
    assert!(warning.console_line().starts_with("(3) ["));
    assert!(warning.message.contains("using native sink"));
    if Backend::is_shared_available() {
        assert!(warning.message.contains("custom sink requires the native facility"));
        assert!(!warning.message.contains("not compiled in"));
    } else {
        assert!(warning.message.contains("shared backend not compiled in"));
    }

    // Later calls reuse the cached outcome and stay quiet
    try_ensure_initialized_with(BootstrapConfig::default()).unwrap();
    assert_eq!(
        capture.count_records(|r| r.message.contains("backend_fallback")),
        1
    );
}
