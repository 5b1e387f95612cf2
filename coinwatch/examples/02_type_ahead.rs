mod common;

use std::sync::Arc;
use std::time::Duration;

use coinwatch::SearchOrchestrator;
use common::{ConsolePresenter, get_worker, print_section, section_label};
use tokio::time::sleep;

#[tokio::main]
async fn main() {
    // 1. Pick a worker (mock in CI when COINWATCH_EXAMPLES_USE_MOCK is set).
    let worker = get_worker();

    // 2. A short debounce keeps the demo snappy; the default is one second.
    let orchestrator = SearchOrchestrator::builder(worker, Arc::new(ConsolePresenter))
        .debounce(Duration::from_millis(300))
        .build();

    // 3. Simulate typing. Each edit lands within the previous one's quiet
    //    window, so only the final text reaches the network.
    for text in ["b", "bitc", "bitcoin"] {
        println!("typing: {text:?}");
        orchestrator.search_field_changed(text);
        sleep(Duration::from_millis(100)).await;
    }

    // 4. Wait out the quiet interval plus a little network time.
    sleep(Duration::from_secs(2)).await;

    // 5. Print the stored results section by section.
    let state = orchestrator.snapshot();
    for section in state.sections() {
        print_section(section_label(section), &state.rows(section));
    }

    // 6. Clearing the field cancels the stream and restores browsing.
    println!("\nclearing the search field");
    orchestrator.search_field_changed("");
}
