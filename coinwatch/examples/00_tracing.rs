mod common;

use std::sync::Arc;
use std::time::Duration;

use coinwatch::SearchOrchestrator;
use common::{ConsolePresenter, get_worker, print_section, section_label};
use tokio::time::sleep;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,coinwatch=trace,coinwatch_http=trace
    // Build with `--features tracing` to see the orchestrator and pipeline spans.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Worker (mock in CI when COINWATCH_EXAMPLES_USE_MOCK is set) and orchestrator.
    let worker = get_worker();
    let orchestrator = SearchOrchestrator::builder(worker, Arc::new(ConsolePresenter))
        .debounce(Duration::from_millis(300))
        .build();

    // Initial load.
    orchestrator.prepare().await;

    // One debounced search.
    orchestrator.search_field_changed("solana");
    sleep(Duration::from_secs(2)).await;

    let state = orchestrator.snapshot();
    for section in state.sections() {
        print_section(section_label(section), &state.rows(section));
    }
}
