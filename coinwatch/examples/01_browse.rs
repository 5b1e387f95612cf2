mod common;

use std::sync::Arc;

use coinwatch::{SearchOrchestrator, Section, TrendingCategory};
use common::{ConsolePresenter, get_worker, print_section, section_label};

#[tokio::main]
async fn main() {
    // 1. Pick a worker (mock in CI when COINWATCH_EXAMPLES_USE_MOCK is set).
    let worker = get_worker();

    // 2. Assemble the orchestrator with a console presenter.
    let orchestrator = SearchOrchestrator::builder(worker, Arc::new(ConsolePresenter)).build();

    // 3. Load history, trending, and highlight concurrently.
    orchestrator.prepare().await;

    // 4. Walk the derived sections and print each one's rows.
    let state = orchestrator.snapshot();
    for section in state.sections() {
        print_section(section_label(section), &state.rows(section));
    }

    // 5. The collapsed coin list caps out with a load-more row; tapping the
    //    expand row reveals every coin.
    orchestrator.tapped_expand_row();
    let state = orchestrator.snapshot();
    print_section(
        "Trending (expanded)",
        &state.rows(Section::Trending(TrendingCategory::Coin)),
    );

    // 6. Switch the trending strip to NFT collections. With no stored
    //    history, trending is section 0 and NFT is row 1.
    orchestrator.category_tapped(0, 1);
    let state = orchestrator.snapshot();
    print_section(
        "Trending (NFT collections)",
        &state.rows(Section::Trending(state.selected_trending)),
    );
}
