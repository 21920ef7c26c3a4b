//! End-to-end tests running the real runtime loop over a simulated driver.
//!
//! # Test Strategy
//!
//! Each test scripts what a user types, runs [`Runtime`] to completion and
//! checks the records handed back plus the frames the driver captured. The
//! standard invariants run on every frame, so any violation fails the run.

use searchform_app::{FormConfig, KeyInput, Mode, Runtime, SearchRecord};
use searchform_harness::{InvariantRegistry, SimDriver};

fn checked_driver() -> SimDriver {
    SimDriver::new().with_invariants(InvariantRegistry::standard())
}

/// Script one keyword/location pair ending on the submit button.
fn type_pair(driver: &SimDriver, keyword: &str, location: &str) {
    driver.inject_text(keyword);
    driver.inject_token("tab");
    driver.inject_text(location);
    driver.inject_token("tab");
    driver.inject_token("enter");
}

#[tokio::test]
async fn single_search_then_quit() {
    let driver = checked_driver();
    type_pair(&driver, "Engineer", "Denver CO");
    driver.inject_key(KeyInput::Esc);

    let runtime = Runtime::new(driver.clone(), &FormConfig::default());
    let records = runtime.run().await.unwrap();

    assert_eq!(records, vec![SearchRecord::new("Engineer", "Denver CO")]);
    assert!(driver.stopped());
    assert!(!driver.has_pending());
}

#[tokio::test]
async fn add_another_collects_two_searches() {
    let driver = checked_driver();
    type_pair(&driver, "Nurse", "Boise ID");
    driver.inject_token("Y");
    type_pair(&driver, "Welder", "Provo UT");
    driver.inject_token("esc");

    let records = Runtime::new(driver.clone(), &FormConfig::default()).run().await.unwrap();

    assert_eq!(
        records,
        vec![SearchRecord::new("Nurse", "Boise ID"), SearchRecord::new("Welder", "Provo UT")]
    );

    let last = driver.last_frame().unwrap().to_plain_text();
    assert!(last.starts_with("Add another search item?"));
    assert!(last.ends_with("2 searches queued"));
}

#[tokio::test]
async fn quit_before_commit_returns_nothing() {
    let driver = checked_driver();
    driver.inject_text("Baker");
    driver.inject_token("tab");
    driver.inject_text("Ogden");
    driver.inject_token("ctrl+c");
    driver.inject_text("ignored");

    let records = Runtime::new(driver.clone(), &FormConfig::default()).run().await.unwrap();

    assert!(records.is_empty());
    // Events after the quit key are never polled.
    assert!(driver.has_pending());
}

#[tokio::test]
async fn exhausted_input_ends_session() {
    let driver = checked_driver();
    type_pair(&driver, "Chef", "Reno NV");

    let records = Runtime::new(driver.clone(), &FormConfig::default()).run().await.unwrap();

    assert_eq!(records.len(), 1);
    assert!(driver.stopped());
}

#[tokio::test]
async fn every_event_renders_one_frame() {
    let driver = checked_driver();
    driver.inject_text("ab");
    driver.inject_token("tab");

    let runtime = Runtime::new(driver.clone(), &FormConfig::default());
    let _ = runtime.run().await.unwrap();

    // Initial frame plus one per event.
    assert_eq!(driver.frames().len(), 4);
}

#[tokio::test]
async fn paste_respects_configured_limit() {
    let driver = checked_driver();
    driver.inject_token("Software Engineer");
    driver.inject_token("shift+tab");
    driver.inject_token("enter");

    let config = FormConfig::default().with_keyword_limit(8);
    let records = Runtime::new(driver, &config).run().await.unwrap();

    assert_eq!(records, vec![SearchRecord::new("Software", "")]);
}

#[tokio::test]
async fn controller_accessor_reflects_initial_state() {
    let runtime = Runtime::new(checked_driver(), &FormConfig::default());

    assert_eq!(runtime.controller().mode(), Mode::Editing);
    assert!(runtime.controller().records().is_empty());
}

#[tokio::test]
async fn driver_error_aborts_session() {
    let driver = checked_driver();
    type_pair(&driver, "Miner", "Elko NV");
    driver.inject_error("terminal went away");

    let err = Runtime::new(driver.clone(), &FormConfig::default()).run().await.unwrap_err();

    assert_eq!(err.to_string(), "SimDriverError: terminal went away");
    assert!(!driver.stopped());
}
