//! Common utilities for UI integration tests.
//!
//! Each test runs the full app in a kittest harness against a wiremock server.
//! Requests run on the test's Tokio runtime, so waiting means sleeping between
//! frames rather than blocking.

use std::time::Duration;

use egui_kittest::Harness;
use kittest::Queryable;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Upper bound on how long a test waits for the UI to reflect a reply.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 2_000;

/// Starts a mock server and mounts `GET /users` returning `users`.
pub async fn server_with_users(users: serde_json::Value) -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "users": users })),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

/// Builds the app against `base_url`. The first frame sends the initial load.
pub fn new_app<'a>(base_url: impl Into<String>) -> Harness<'a, RosterApp> {
    let app = RosterApp::new(State::test(base_url.into()));
    Harness::new_eframe(|_| app)
}

/// Frames stepped after a wait succeeds. A window that just appeared spends
/// its first frame sizing itself and ignores clicks until it is laid out.
const SETTLE_FRAMES: usize = 2;

/// Steps frames until `done` holds, yielding to the runtime in between, then
/// lets the UI settle so newly shown widgets accept clicks.
pub async fn wait_until<'a>(
    harness: &mut Harness<'a, RosterApp>,
    what: &str,
    done: impl Fn(&Harness<'a, RosterApp>) -> bool,
) {
    let step = Duration::from_millis(20);
    let mut waited = Duration::ZERO;
    loop {
        harness.step();
        if done(harness) {
            for _ in 0..SETTLE_FRAMES {
                harness.step();
            }
            return;
        }
        assert!(
            waited < Duration::from_millis(DEFAULT_NETWORK_WAIT_MS),
            "timed out waiting until {what}"
        );
        tokio::time::sleep(step).await;
        waited += step;
    }
}

/// Waits for every in-flight request to be applied.
pub async fn wait_idle(harness: &mut Harness<'_, RosterApp>) {
    wait_until(harness, "no request is in flight", |h| {
        !h.state().state.controller.state().is_busy()
    })
    .await;
}

/// Clicks the button labelled `label` in the given table row (0-based).
pub fn click_row_button(harness: &Harness<'_, RosterApp>, label: &str, row: usize) {
    harness
        .query_all_by_label(label)
        .nth(row)
        .unwrap_or_else(|| panic!("row {row} should have a {label} button"))
        .click();
}
