use std::sync::Arc;
use std::time::Duration;

use coinwatch::{
    ListUpdate, SEARCH_HIT_CAP, SearchError, SearchOrchestrator, SearchPayload,
};
use coinwatch_mock::{MockBehavior, MockPresenter, MockWorker, WorkerCall, fixtures};
use tokio::time::sleep;

const DEBOUNCE: Duration = Duration::from_millis(200);

fn harness(worker: MockWorker) -> (Arc<SearchOrchestrator>, Arc<MockWorker>, Arc<MockPresenter>) {
    let worker = Arc::new(worker);
    let presenter = Arc::new(MockPresenter::new());
    let orchestrator = SearchOrchestrator::builder(worker.clone(), presenter.clone())
        .debounce(DEBOUNCE)
        .build();
    (orchestrator, worker, presenter)
}

/// Poll until `check` passes. Under the paused clock the sleeps advance
/// virtual time, which is what lets the debounce window elapse.
async fn eventually(check: impl Fn() -> bool) {
    for _ in 0..500 {
        if check() {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached in time");
}

#[tokio::test(start_paused = true)]
async fn a_settled_query_searches_saves_and_notifies() {
    let worker =
        MockWorker::new().on_search(|_| MockBehavior::Return(fixtures::search_payload()));
    let (orchestrator, worker, presenter) = harness(worker);

    orchestrator.search_field_changed("ABC");
    eventually(|| orchestrator.snapshot().search_results.is_some()).await;

    assert_eq!(
        orchestrator.snapshot().search_results,
        Some(fixtures::search_payload())
    );
    assert_eq!(worker.search_calls(), vec!["ABC"]);

    // The first coin hit was persisted and mirrored into the history.
    assert!(
        worker
            .calls()
            .contains(&WorkerCall::SaveHistory("bitcoin".into()))
    );
    let history = orchestrator.snapshot().recent_searches;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].identity(), "bitcoin");

    assert_eq!(
        presenter.list_updates(),
        vec![
            ListUpdate::Loading,
            ListUpdate::Search(fixtures::search_payload()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_debounces_to_one_search() {
    let worker = MockWorker::new().on_search(|query| {
        assert_eq!(query.query, "ABCF");
        MockBehavior::Return(fixtures::search_payload())
    });
    let (orchestrator, worker, presenter) = harness(worker);

    orchestrator.search_field_changed("ABC");
    orchestrator.search_field_changed("AC");
    orchestrator.search_field_changed("ABCF");

    eventually(|| orchestrator.snapshot().search_results.is_some()).await;

    assert_eq!(worker.search_calls(), vec!["ABCF"]);
    // One loading notification per keystroke, then the single result.
    assert_eq!(
        presenter.list_updates(),
        vec![
            ListUpdate::Loading,
            ListUpdate::Loading,
            ListUpdate::Loading,
            ListUpdate::Search(fixtures::search_payload()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn the_search_waits_out_the_full_quiet_interval() {
    let worker =
        MockWorker::new().on_search(|_| MockBehavior::Return(fixtures::search_payload()));
    let (orchestrator, worker, _presenter) = harness(worker);

    orchestrator.search_field_changed("btc");
    sleep(DEBOUNCE - Duration::from_millis(1)).await;
    assert!(worker.search_calls().is_empty());

    eventually(|| worker.search_calls() == vec!["btc"]).await;
}

#[tokio::test(start_paused = true)]
async fn clearing_before_the_interval_never_searches() {
    let worker =
        MockWorker::new().on_search(|_| MockBehavior::Return(fixtures::search_payload()));
    let (orchestrator, worker, presenter) = harness(worker);

    orchestrator.search_field_changed("ABC");
    orchestrator.search_field_changed("");

    // The debounce window passes with the stream already cancelled.
    sleep(DEBOUNCE * 4).await;

    assert!(worker.search_calls().is_empty());
    let snapshot = orchestrator.snapshot();
    assert_eq!(snapshot.search_results, None);
    assert!(snapshot.query.is_empty());

    let updates = presenter.list_updates();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0], ListUpdate::Loading);
    let ListUpdate::Information(info) = &updates[1] else {
        panic!("expected the browsing snapshot after a clear, got {updates:?}");
    };
    assert!(info.recent_searches.is_empty());
}

#[tokio::test(start_paused = true)]
async fn clearing_cancels_the_in_flight_search_and_suppresses_its_effects() {
    let worker = MockWorker::new().on_search(|_| MockBehavior::Hang);
    let (orchestrator, worker, presenter) = harness(worker);

    orchestrator.search_field_changed("ABC");
    eventually(|| worker.search_calls() == vec!["ABC"]).await;

    // The worker is now stalled inside `search`; clearing cancels it.
    orchestrator.search_field_changed("");
    sleep(DEBOUNCE * 4).await;

    let snapshot = orchestrator.snapshot();
    assert_eq!(snapshot.search_results, None);
    assert!(snapshot.recent_searches.is_empty());
    assert!(
        !worker
            .calls()
            .iter()
            .any(|call| matches!(call, WorkerCall::SaveHistory(_)))
    );

    let updates = presenter.list_updates();
    assert_eq!(updates.len(), 2);
    assert!(matches!(updates[1], ListUpdate::Information(_)));
    assert!(presenter.alerts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn typing_again_after_a_clear_restarts_the_stream() {
    let worker = MockWorker::new().on_search(|query| {
        MockBehavior::Return(SearchPayload {
            coins: vec![fixtures::search_hit(&query.query)],
            ..SearchPayload::default()
        })
    });
    let (orchestrator, worker, _presenter) = harness(worker);

    orchestrator.search_field_changed("first");
    eventually(|| worker.search_calls() == vec!["first"]).await;

    orchestrator.search_field_changed("");
    orchestrator.search_field_changed("second");
    eventually(|| worker.search_calls() == vec!["first", "second"]).await;

    let results = orchestrator
        .snapshot()
        .search_results
        .expect("second search stored");
    assert_eq!(results.coins[0].symbol, "second");
}

#[tokio::test(start_paused = true)]
async fn results_are_truncated_to_the_hit_cap() {
    let worker = MockWorker::new().on_search(|_| {
        MockBehavior::Return(SearchPayload {
            coins: (0..8)
                .map(|index| fixtures::search_hit(&format!("coin-{index}")))
                .collect(),
            nfts: (0..6)
                .map(|index| fixtures::search_hit(&format!("nft-{index}")))
                .collect(),
            exchanges: Vec::new(),
        })
    });
    let (orchestrator, _worker, presenter) = harness(worker);

    orchestrator.search_field_changed("many");
    eventually(|| orchestrator.snapshot().search_results.is_some()).await;

    let results = orchestrator.snapshot().search_results.expect("stored");
    assert_eq!(results.coins.len(), SEARCH_HIT_CAP);
    assert_eq!(results.nfts.len(), SEARCH_HIT_CAP);
    assert!(results.exchanges.is_empty());

    // The notification carries the same truncated payload.
    let updates = presenter.list_updates();
    let Some(ListUpdate::Search(notified)) = updates.last() else {
        panic!("expected a search notification, got {updates:?}");
    };
    assert_eq!(*notified, results);
}

#[tokio::test(start_paused = true)]
async fn a_failing_search_surfaces_one_alert() {
    let worker = MockWorker::new()
        .on_search(|_| MockBehavior::Fail(SearchError::undocumented(500, "/search")));
    let (orchestrator, _worker, presenter) = harness(worker);

    orchestrator.search_field_changed("doge");
    eventually(|| !presenter.alerts().is_empty()).await;

    assert_eq!(
        presenter.alerts(),
        vec![SearchError::undocumented(500, "/search").to_string()]
    );
    let snapshot = orchestrator.snapshot();
    assert_eq!(snapshot.search_results, None);
    assert!(snapshot.destination.is_some());
    // Loading stays the last list update; no search notification followed.
    assert_eq!(presenter.list_updates(), vec![ListUpdate::Loading]);
}

#[tokio::test(start_paused = true)]
async fn a_failing_save_alerts_but_keeps_the_stored_result() {
    let worker = MockWorker::new()
        .on_search(|_| MockBehavior::Return(fixtures::search_payload()))
        .on_save_history(|_| MockBehavior::Fail(SearchError::store("disk full")));
    let (orchestrator, _worker, presenter) = harness(worker);

    orchestrator.search_field_changed("btc");
    eventually(|| !presenter.alerts().is_empty()).await;

    // The result was stored before the save failed; the history mirror and
    // the search notification never happened.
    let snapshot = orchestrator.snapshot();
    assert_eq!(snapshot.search_results, Some(fixtures::search_payload()));
    assert!(snapshot.recent_searches.is_empty());
    assert_eq!(presenter.list_updates(), vec![ListUpdate::Loading]);
    assert_eq!(
        presenter.alerts(),
        vec![SearchError::store("disk full").to_string()]
    );
}
