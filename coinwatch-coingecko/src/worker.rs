//! The production [`SearchWorker`]: CoinGecko client plus a recent-search
//! store.

use std::cmp::Ordering;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use coinwatch_core::{RecentSearchesStore, SearchError, SearchWorker, checkpoint};
use coinwatch_http::ApiOutcome;
use coinwatch_types::{
    Coin, HighlightPayload, RecentSearch, SearchPayload, SearchQuery, TrendingPayload,
};
use tokio_util::sync::CancellationToken;

use crate::client::{COINS_LIST_PATH, CoinGeckoClient, MARKETS_PATH, SEARCH_PATH, TRENDING_PATH};
use crate::schema::{ListedCoinSchema, MarketCoinSchema};

/// [`SearchWorker`] over the CoinGecko API.
///
/// Network methods observe their token two ways: a checkpoint before any
/// request goes out, and a race against the token while one is in flight.
/// History methods delegate straight to the store.
pub struct CoinGeckoWorker {
    client: CoinGeckoClient,
    store: Arc<dyn RecentSearchesStore>,
}

impl CoinGeckoWorker {
    /// Build a worker from a configured client and a history store.
    pub fn new(client: CoinGeckoClient, store: Arc<dyn RecentSearchesStore>) -> Self {
        Self { client, store }
    }
}

#[async_trait]
impl SearchWorker for CoinGeckoWorker {
    async fn load_search_history(&self) -> Result<Vec<RecentSearch>, SearchError> {
        self.store.load().await
    }

    async fn save_search_history(&self, item: RecentSearch) -> Result<(), SearchError> {
        self.store.save(item).await
    }

    async fn trending(&self, cancel: &CancellationToken) -> Result<TrendingPayload, SearchError> {
        let outcome = race(cancel, self.client.trending()).await??;
        Ok(documented(outcome, TRENDING_PATH)?.into_domain())
    }

    async fn highlight(
        &self,
        cancel: &CancellationToken,
    ) -> Result<HighlightPayload, SearchError> {
        let (markets, listed) = race(cancel, async {
            futures::join!(self.client.markets(), self.client.coins_list())
        })
        .await?;
        let markets = documented(markets?, MARKETS_PATH)?;
        checkpoint(cancel)?;
        let listed = documented(listed?, COINS_LIST_PATH)?;

        let coins: Vec<Coin> = markets
            .into_iter()
            .map(MarketCoinSchema::into_domain)
            .collect();
        let mut top_gainers = coins.clone();
        top_gainers.sort_by(|a, b| compare_change(a, b, false));
        let mut top_losers = coins;
        top_losers.sort_by(|a, b| compare_change(a, b, true));
        Ok(HighlightPayload {
            top_gainers,
            top_losers,
            new_coins: listed
                .into_iter()
                .map(ListedCoinSchema::into_domain)
                .collect(),
        })
    }

    async fn search(
        &self,
        query: SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<SearchPayload, SearchError> {
        let outcome = race(cancel, self.client.search(&query.query)).await??;
        Ok(documented(outcome, SEARCH_PATH)?.into_domain())
    }
}

/// Run `fetch` unless the token fires first.
///
/// The leading checkpoint makes an already-cancelled token deterministic: no
/// request is started at all.
async fn race<F>(cancel: &CancellationToken, fetch: F) -> Result<F::Output, SearchError>
where
    F: Future + Send,
{
    checkpoint(cancel)?;
    tokio::select! {
        () = cancel.cancelled() => Err(SearchError::Cancelled),
        output = fetch => Ok(output),
    }
}

/// Unwrap the documented success or escalate the undocumented status.
fn documented<T>(outcome: ApiOutcome<T>, endpoint: &str) -> Result<T, SearchError> {
    match outcome {
        ApiOutcome::Ok(value) => Ok(value),
        ApiOutcome::Undocumented { status, .. } => {
            Err(SearchError::undocumented(status, endpoint))
        }
    }
}

/// Order two coins by 24h price change. Coins with no change figure sort
/// after those with one in both directions; `ascending` only flips the
/// ordering between two coins that have figures.
fn compare_change(a: &Coin, b: &Coin, ascending: bool) -> Ordering {
    match (a.price_change_percentage_24h, b.price_change_percentage_24h) {
        (Some(left), Some(right)) => {
            let ordering = left.total_cmp(&right);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: &str, change: Option<f64>) -> Coin {
        Coin {
            id: id.into(),
            coin_id: None,
            name: id.to_uppercase(),
            symbol: id.into(),
            market_cap_rank: None,
            thumb: None,
            current_price: None,
            price_change_percentage_24h: change,
        }
    }

    #[test]
    fn descending_puts_the_best_gainer_first() {
        let mut coins = vec![
            coin("flat", Some(0.0)),
            coin("up", Some(4.2)),
            coin("down", Some(-3.1)),
        ];
        coins.sort_by(|a, b| compare_change(a, b, false));
        let ids: Vec<_> = coins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["up", "flat", "down"]);
    }

    #[test]
    fn missing_change_sorts_last_in_both_directions() {
        let mut coins = vec![
            coin("mystery", None),
            coin("up", Some(4.2)),
            coin("down", Some(-3.1)),
        ];
        coins.sort_by(|a, b| compare_change(a, b, false));
        assert_eq!(coins.last().map(|c| c.id.as_str()), Some("mystery"));

        coins.sort_by(|a, b| compare_change(a, b, true));
        assert_eq!(coins.first().map(|c| c.id.as_str()), Some("down"));
        assert_eq!(coins.last().map(|c| c.id.as_str()), Some("mystery"));
    }

    #[test]
    fn documented_escalates_with_the_endpoint_name() {
        let outcome: ApiOutcome<()> = ApiOutcome::Undocumented {
            status: 503,
            payload: coinwatch_http::UndocumentedPayload::default(),
        };
        let err = documented(outcome, MARKETS_PATH).unwrap_err();
        assert_eq!(
            err.to_string(),
            "undocumented response from coins/markets: status 503"
        );
    }
}
