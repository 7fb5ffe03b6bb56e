use lazy_static::lazy_static;
use prometheus::{register_counter_vec, register_int_counter, CounterVec, IntCounter};

lazy_static! {
    // ── Event counters (increment on each event) ────────────────────────────
    pub static ref SUBMISSIONS_COUNTER: CounterVec = register_counter_vec!(
        "planner_submissions_total",
        "Form submissions by section and outcome",
        &["section", "outcome"]
    ).unwrap();

    pub static ref STORE_ERRORS_COUNTER: IntCounter = register_int_counter!(
        "planner_store_errors_total",
        "Requests that failed reading or writing the document"
    ).unwrap();
}

pub fn record_saved(section: &str) {
    SUBMISSIONS_COUNTER.with_label_values(&[section, "saved"]).inc();
}

pub fn record_rejected(section: &str) {
    SUBMISSIONS_COUNTER.with_label_values(&[section, "rejected"]).inc();
}

pub fn record_store_error() {
    STORE_ERRORS_COUNTER.inc();
}
