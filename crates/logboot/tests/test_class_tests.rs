#![allow(clippy::unwrap_used, clippy::expect_used)]

use logboot::bootstrap::{registration_count, require_initialized, state, BootstrapState};
use logboot::TestCaseBase;
use std::sync::atomic::{AtomicUsize, Ordering};

static FIXTURE_CLASS_SET_UPS: AtomicUsize = AtomicUsize::new(0);
static FIXTURE_SET_UPS: AtomicUsize = AtomicUsize::new(0);

pub struct FixtureCase;

impl TestCaseBase for FixtureCase {
    fn set_up_class() {
        // The wrapper checks logging before handing over
        assert_eq!(state(), BootstrapState::Initialized);
        FIXTURE_CLASS_SET_UPS.fetch_add(1, Ordering::SeqCst);
    }

    fn set_up() {
        FIXTURE_SET_UPS.fetch_add(1, Ordering::SeqCst);
    }
}

logboot::test_class!(plain_class {
    fn logging_is_ready() {
        assert_eq!(state(), BootstrapState::Initialized);
        assert!(require_initialized().is_ok());
        log::info!("inside a plain test class");
    }

    fn registration_happened_once() {
        assert_eq!(registration_count(), 1);
    }
});

logboot::test_class!(fixture_class: FixtureCase {
    fn first_fixture_test() {
        assert_eq!(FIXTURE_CLASS_SET_UPS.load(Ordering::SeqCst), 1);
    }

    fn second_fixture_test() {
        assert_eq!(FIXTURE_CLASS_SET_UPS.load(Ordering::SeqCst), 1);
        assert!(FIXTURE_SET_UPS.load(Ordering::SeqCst) >= 1);
    }

    #[should_panic(expected = "fixture failure")]
    fn meta_attributes_are_kept() {
        panic!("fixture failure");
    }
});
