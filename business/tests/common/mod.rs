use std::time::Duration;

use roster_business::{BusinessConfig, UserTableController};
use wiremock::MockServer;

/// Upper bound on how long a test waits for spawned requests.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 2_000;

pub async fn setup() -> (MockServer, UserTableController) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;
    let controller = UserTableController::new(BusinessConfig::new(mock_server.uri()));
    (mock_server, controller)
}

/// Polls the controller until every spawned request has been applied.
///
/// Sleeping yields to the runtime so the spawned request tasks make progress.
pub async fn settle(controller: &mut UserTableController) {
    let step = Duration::from_millis(10);
    let mut waited = Duration::ZERO;
    loop {
        controller.poll();
        if !controller.state().is_busy() {
            return;
        }
        assert!(
            waited < Duration::from_millis(DEFAULT_NETWORK_WAIT_MS),
            "requests did not finish in time: {:?}",
            controller.state()
        );
        tokio::time::sleep(step).await;
        waited += step;
    }
}
