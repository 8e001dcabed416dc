use log::debug;
use tokio::time::{Duration, sleep};

use crate::domain::payment::ProcessorKind;
use crate::domain::registry::ProcessorRegistry;
use crate::infrastructure::http::processor_client::ProcessorClient;
use crate::use_cases::health_check::HealthCheckUseCase;

const PROBE_INTERVAL: Duration = Duration::from_secs(5);

/// One independent loop per processor. Two of these run
/// side by side — one for `Default`, one for `Fallback` — each with its
/// own `ProcessorClient`, so a slow or down processor never delays the
/// other's probe.
pub async fn run<R: ProcessorRegistry>(
	kind: ProcessorKind,
	client: ProcessorClient,
	use_case: HealthCheckUseCase<R>,
) {
	loop {
		use_case.execute(kind, &client).await;
		debug!("health probe cycle complete for {:?}", kind);
		sleep(PROBE_INTERVAL).await;
	}
}
