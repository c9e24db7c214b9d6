use super::*;
use board::settings::{DEFAULT_WARNING_HOURS, WARNING_HOURS_KEY, load_warning_hours};

#[cfg(not(feature = "csr"))]
#[test]
fn native_store_misses_every_load() {
    BrowserSettings.save(WARNING_HOURS_KEY, "6");
    assert_eq!(BrowserSettings.load(WARNING_HOURS_KEY), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_store_yields_default_threshold() {
    assert!((load_warning_hours(&BrowserSettings) - DEFAULT_WARNING_HOURS).abs() < f64::EPSILON);
}
