use std::sync::Arc;

use coinwatch::{MemoryRecentStore, Row, SearchPresenting, SearchWorker, Section};
use coinwatch_coingecko::{CoinGeckoClient, CoinGeckoWorker};
use coinwatch_mock::{MockBehavior, MockWorker, fixtures};
use coinwatch_types::{Destination, ListUpdate, SectionUpdate};

#[must_use]
pub fn get_worker() -> Arc<dyn SearchWorker> {
    if std::env::var("COINWATCH_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Worker for CI) ---");
        Arc::new(mock_worker())
    } else {
        let client = CoinGeckoClient::builder().build();
        Arc::new(CoinGeckoWorker::new(
            client,
            Arc::new(MemoryRecentStore::new()),
        ))
    }
}

fn mock_worker() -> MockWorker {
    MockWorker::new()
        .on_trending(|| MockBehavior::Return(fixtures::trending_payload()))
        .on_highlight(|| MockBehavior::Return(fixtures::highlight_payload()))
        .on_search(|_| MockBehavior::Return(fixtures::search_payload()))
}

/// A presenter that narrates every notification on stdout.
pub struct ConsolePresenter;

impl SearchPresenting for ConsolePresenter {
    fn update_list(&self, update: ListUpdate) {
        match update {
            ListUpdate::Information(info) => println!(
                "[list] browsing snapshot: {} history item(s), {} trending coin(s), {} gainer(s)",
                info.recent_searches.len(),
                info.trending.data.coins.len(),
                info.highlight.data.top_gainers.len(),
            ),
            ListUpdate::Loading => println!("[list] searching..."),
            ListUpdate::Search(results) => println!(
                "[list] search results: {} coin(s), {} nft(s), {} exchange(s)",
                results.coins.len(),
                results.nfts.len(),
                results.exchanges.len(),
            ),
        }
    }

    fn update_section(&self, update: SectionUpdate) {
        match update {
            SectionUpdate::Trending(section) => println!(
                "[section] trending -> {:?} (expanded: {})",
                section.selected, section.is_expanded
            ),
            SectionUpdate::Highlight(section) => {
                println!("[section] highlight -> {:?}", section.selected);
            }
        }
    }

    fn change_destination(&self, destination: Destination) {
        let Destination::Alert { message } = destination;
        println!("[alert] {message}");
    }
}

/// Print one section's rows as a small table.
pub fn print_section(label: &str, rows: &[Row]) {
    println!("\n## {label}");
    println!("{:<6} | Name", "Rank");
    println!("{:-<7}|{:-<30}", "", "");
    for row in rows {
        match row {
            Row::Data(data) => {
                let rank = data
                    .rank
                    .map_or_else(|| "-".to_owned(), |rank| rank.to_string());
                println!("{:<6} | {} ({})", rank, data.name, data.fullname);
            }
            Row::LoadMore => println!("{:<6} | [load more]", ""),
        }
    }
}

#[must_use]
pub fn section_label(section: Section) -> &'static str {
    match section {
        Section::History => "Recent searches",
        Section::Trending(_) => "Trending",
        Section::Highlight(_) => "Highlight",
        Section::Coins => "Coins",
        Section::Nfts => "NFTs",
        Section::Exchanges => "Exchanges",
    }
}
