use std::sync::Arc;

use coinwatch::{
    HighlightCategory, SearchOrchestrator, SearchState, TrendingCategory,
};
use coinwatch_mock::{MockPresenter, MockWorker, fixtures};
use coinwatch_types::SectionUpdate;

fn seeded(state: SearchState) -> (Arc<SearchOrchestrator>, Arc<MockWorker>, Arc<MockPresenter>) {
    let worker = Arc::new(MockWorker::new());
    let presenter = Arc::new(MockPresenter::new());
    let orchestrator = SearchOrchestrator::builder(worker.clone(), presenter.clone())
        .state(state)
        .build();
    (orchestrator, worker, presenter)
}

fn trending_state() -> SearchState {
    SearchState {
        trending: fixtures::trending_payload(),
        ..SearchState::default()
    }
}

#[test]
fn tapping_a_trending_row_switches_the_sub_category() {
    let (orchestrator, worker, presenter) = seeded(trending_state());

    // No history and no highlight data, so trending is section 0; its rows
    // follow the category order, making row 1 the NFT strip entry.
    orchestrator.category_tapped(0, 1);

    assert_eq!(
        orchestrator.snapshot().selected_trending,
        TrendingCategory::Nft
    );
    let updates = presenter.section_updates();
    assert_eq!(updates.len(), 1);
    let SectionUpdate::Trending(section) = &updates[0] else {
        panic!("expected a trending update, got {updates:?}");
    };
    assert_eq!(section.selected, TrendingCategory::Nft);
    assert!(!section.is_expanded);

    // Switching a strip never touches the network.
    assert!(worker.calls().is_empty());
}

#[test]
fn reselecting_the_active_category_still_rerenders() {
    let (orchestrator, worker, presenter) = seeded(trending_state());

    orchestrator.category_tapped(0, 0);

    assert_eq!(
        orchestrator.snapshot().selected_trending,
        TrendingCategory::Coin
    );
    assert_eq!(presenter.section_updates().len(), 1);
    assert!(worker.calls().is_empty());
}

#[test]
fn an_unknown_row_keeps_the_current_selection() {
    let (orchestrator, _worker, presenter) = seeded(trending_state());

    orchestrator.category_tapped(0, 9);

    assert_eq!(
        orchestrator.snapshot().selected_trending,
        TrendingCategory::Coin
    );
    // The strip is still re-rendered.
    assert_eq!(presenter.section_updates().len(), 1);
}

#[test]
fn an_out_of_range_section_is_ignored() {
    let (orchestrator, _worker, presenter) = seeded(trending_state());

    orchestrator.category_tapped(5, 0);

    assert!(presenter.events().is_empty());
}

#[test]
fn tapping_a_highlight_row_switches_its_selection() {
    let state = SearchState {
        trending: fixtures::trending_payload(),
        highlight: fixtures::highlight_payload(),
        ..SearchState::default()
    };
    let (orchestrator, _worker, presenter) = seeded(state);

    // Trending is section 0 here, highlight section 1.
    orchestrator.category_tapped(1, 1);

    assert_eq!(
        orchestrator.snapshot().selected_highlight,
        HighlightCategory::TopLosers
    );
    let updates = presenter.section_updates();
    assert_eq!(updates.len(), 1);
    assert!(matches!(updates[0], SectionUpdate::Highlight(_)));
}

#[test]
fn taps_on_the_history_section_are_ignored() {
    let state = SearchState {
        recent_searches: vec![fixtures::recent_search()],
        trending: fixtures::trending_payload(),
        ..SearchState::default()
    };
    let (orchestrator, _worker, presenter) = seeded(state);

    // With history present it becomes section 0.
    orchestrator.category_tapped(0, 0);
    assert!(presenter.events().is_empty());

    // Trending shifted down to section 1.
    orchestrator.category_tapped(1, 2);
    assert_eq!(
        orchestrator.snapshot().selected_trending,
        TrendingCategory::Category
    );
}

#[test]
fn taps_on_search_result_sections_are_ignored() {
    let state = SearchState {
        trending: fixtures::trending_payload(),
        search_results: Some(fixtures::search_payload()),
        ..SearchState::default()
    };
    let (orchestrator, _worker, presenter) = seeded(state);

    // Section 0 is now the coin hits, not trending.
    orchestrator.category_tapped(0, 1);

    assert!(presenter.events().is_empty());
    assert_eq!(
        orchestrator.snapshot().selected_trending,
        TrendingCategory::Coin
    );
}

#[test]
fn the_expand_row_shows_every_trending_coin() {
    let (orchestrator, _worker, presenter) = seeded(trending_state());

    orchestrator.tapped_expand_row();

    assert!(orchestrator.snapshot().is_trending_expanded);
    let updates = presenter.section_updates();
    assert_eq!(updates.len(), 1);
    let SectionUpdate::Trending(section) = &updates[0] else {
        panic!("expected a trending update, got {updates:?}");
    };
    assert!(section.is_expanded);
}

#[test]
fn the_expand_row_notifies_even_without_trending_data() {
    let (orchestrator, _worker, presenter) = seeded(SearchState::default());

    orchestrator.tapped_expand_row();

    assert!(orchestrator.snapshot().is_trending_expanded);
    assert_eq!(presenter.section_updates().len(), 1);
}
