use coinwatch_coingecko::CoinGeckoClient;
use coinwatch_http::ApiOutcome;
use httpmock::prelude::*;

fn client_for(server: &MockServer) -> CoinGeckoClient {
    CoinGeckoClient::builder().base_url(server.url("/api/v3/")).build()
}

#[tokio::test]
async fn trending_decodes_the_nested_wire_shape() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/search/trending");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{
                        "coins": [{"item": {"id": "bitcoin", "coin_id": 1, "name": "Bitcoin",
                                            "symbol": "btc", "market_cap_rank": 1,
                                            "thumb": "https://img.example/btc.png"}}],
                        "nfts": [{"id": "punks", "name": "CryptoPunks", "symbol": "PUNK",
                                  "thumb": "https://img.example/punk.png",
                                  "floor_price_in_native_currency": 44.5,
                                  "floor_price_24h_percentage_change": -2.25}],
                        "categories": [{"id": 7, "name": "DeFi", "market_cap_1h_change": 0.8}]
                    }"#,
                );
        })
        .await;

    let outcome = client_for(&server).trending().await.unwrap();

    mock.assert_async().await;
    match outcome {
        ApiOutcome::Ok(schema) => {
            let payload = schema.into_domain();
            assert_eq!(payload.coins[0].id, "bitcoin");
            assert_eq!(payload.coins[0].market_cap_rank, Some(1));
            assert_eq!(payload.nfts[0].floor_price_in_native_currency, 44.5);
            assert_eq!(payload.categories[0].name, "DeFi");
        }
        ApiOutcome::Undocumented { status, .. } => panic!("unexpected status {status}"),
    }
}

#[tokio::test]
async fn markets_sends_the_pinned_page_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v3/coins/markets")
                .query_param("vs_currency", "usd")
                .query_param("order", "market_cap_desc")
                .query_param("per_page", "10")
                .query_param("page", "1");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"[{"id": "bitcoin", "name": "Bitcoin", "symbol": "btc",
                         "image": "https://img.example/btc.png", "market_cap_rank": 1,
                         "current_price": 67000.5, "price_change_percentage_24h": 1.2}]"#,
                );
        })
        .await;

    let outcome = client_for(&server).markets().await.unwrap();

    mock.assert_async().await;
    match outcome {
        ApiOutcome::Ok(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].current_price, Some(67000.5));
        }
        ApiOutcome::Undocumented { status, .. } => panic!("unexpected status {status}"),
    }
}

#[tokio::test]
async fn search_query_text_reaches_the_wire() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v3/search")
                .query_param("query", "wrapped ether");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{"coins": [], "nfts": [],
                        "exchanges": [{"id": "binance", "name": "Binance",
                                       "thumb": "https://img.example/bnb.png"}]}"#,
                );
        })
        .await;

    let outcome = client_for(&server).search("wrapped ether").await.unwrap();

    mock.assert_async().await;
    match outcome {
        ApiOutcome::Ok(schema) => assert_eq!(schema.exchanges[0].name, "Binance"),
        ApiOutcome::Undocumented { status, .. } => panic!("unexpected status {status}"),
    }
}

#[tokio::test]
async fn api_key_header_rides_every_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v3/coins/list")
                .header("x-cg-demo-api-key", "demo-key");
            then.status(200).body("[]");
        })
        .await;

    let client = CoinGeckoClient::builder()
        .base_url(server.url("/api/v3/"))
        .api_key("demo-key")
        .build();
    let outcome = client.coins_list().await.unwrap();

    mock.assert_async().await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn undocumented_status_is_captured_not_errored() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/search/trending");
            then.status(503).body("down for maintenance");
        })
        .await;

    let outcome = client_for(&server).trending().await.unwrap();

    match outcome {
        ApiOutcome::Undocumented { status, payload } => {
            assert_eq!(status, 503);
            assert_eq!(
                payload.body.as_deref(),
                Some(b"down for maintenance".as_slice())
            );
        }
        ApiOutcome::Ok(_) => panic!("503 must not decode as a success"),
    }
}

#[tokio::test]
async fn malformed_success_body_keeps_request_and_response_context() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/search/trending");
            then.status(200).body("<html>definitely not json</html>");
        })
        .await;

    let err = client_for(&server).trending().await.unwrap_err();

    assert!(err.request.is_some());
    assert!(err.response.is_some());
    assert_eq!(
        err.request.as_ref().map(|request| request.path.as_str()),
        Some("search/trending")
    );
}
