#![allow(dead_code, unused_imports)]

//! Shared helpers for integration tests; everything lives in the
//! `taskviz-test-utils` workspace crate.

use std::sync::{Arc, Mutex};

pub use taskviz_test_utils::builders;
pub use taskviz_test_utils::fake_scoring::{CallLog, FakeCall, FakeScoringBackend};
pub use taskviz_test_utils::{init_tracing, with_timeout};

/// Fresh call log shared between a fake backend and the test body.
pub fn call_log() -> Arc<Mutex<CallLog>> {
    Arc::new(Mutex::new(CallLog::default()))
}
