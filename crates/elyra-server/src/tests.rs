use super::*;
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use elyra_core::core_types::{LLMResponse, Message};
use elyra_core::market::types::{BaseToken, DexPair, Liquidity, PriceChange};
use elyra_core::market::{MarketData, TokenListing};
use elyra_core::{ElyraError, LLM};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for `oneshot`

#[derive(Default)]
struct MockMarket {
    pairs: Vec<DexPair>,
    listings: Vec<TokenListing>,
    fail: bool,
}

#[async_trait]
impl MarketData for MockMarket {
    async fn token_pairs(&self, _address: &str) -> std::result::Result<Vec<DexPair>, ElyraError> {
        if self.fail {
            return Err(ElyraError::Upstream("DexScreener API returned 502".to_string()));
        }
        Ok(self.pairs.clone())
    }

    async fn top_boosts(&self) -> std::result::Result<Vec<TokenListing>, ElyraError> {
        if self.fail {
            return Err(ElyraError::Upstream("connection reset".to_string()));
        }
        Ok(self.listings.clone())
    }

    async fn latest_profiles(&self) -> std::result::Result<Vec<TokenListing>, ElyraError> {
        self.top_boosts().await
    }
}

struct MockLLM {
    questions: Mutex<Vec<String>>,
}

#[async_trait]
impl LLM for MockLLM {
    async fn generate(&self, messages: Vec<Message>) -> std::result::Result<LLMResponse, ElyraError> {
        let question = messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.questions.lock().unwrap().push(question);
        Ok(LLMResponse {
            content: Some("Not financial advice, but it looks liquid.".to_string()),
            ..Default::default()
        })
    }
}

fn sample_pair() -> DexPair {
    DexPair {
        chain_id: Some("solana".to_string()),
        dex_id: Some("raydium".to_string()),
        base_token: Some(BaseToken {
            address: Some("MINT".to_string()),
            name: Some("Wrapped SOL".to_string()),
            symbol: Some("SOL".to_string()),
        }),
        price_usd: Some("142.37".to_string()),
        price_change: Some(PriceChange {
            h1: Some(0.5),
            h24: Some(-2.5),
        }),
        liquidity: Some(Liquidity {
            usd: Some(9_000.0),
        }),
        ..Default::default()
    }
}

fn router(market: MockMarket) -> Router {
    ElyraServer::new(TerminalService::new(Arc::new(market))).build_router()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = send(router(MockMarket::default()), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_token_summary_and_not_found() {
    let app = router(MockMarket {
        pairs: vec![sample_pair()],
        ..Default::default()
    });
    let (status, body) = send(app, get("/api/token/MINT")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "SOL");
    assert_eq!(body["price"], "142.37");
    assert_eq!(body["priceChange24h"], -2.5);
    assert_eq!(body["txns24h"], 0);

    let (status, body) = send(router(MockMarket::default()), get("/api/token/NOPE")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Token not found"}));
}

#[tokio::test]
async fn test_scan_reports_risk() {
    let app = router(MockMarket {
        pairs: vec![sample_pair()],
        ..Default::default()
    });
    let (status, body) = send(app, get("/api/terminal/scan/MINT")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["address"], "MINT");
    assert_eq!(body["riskScore"], "HIGH");
    assert_eq!(body["riskFactors"], json!(["Low liquidity (<$10K)"]));

    let (status, body) = send(router(MockMarket::default()), get("/api/terminal/scan/NOPE")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Token not found");
}

#[tokio::test]
async fn test_upstream_failures_use_endpoint_messages() {
    let cases = [
        ("/api/token/MINT", "Failed to fetch token data"),
        ("/api/terminal/trending", "Failed to fetch trending tokens"),
        ("/api/terminal/newpairs", "Failed to fetch new pairs"),
        ("/api/terminal/scan/MINT", "Failed to scan token"),
        ("/api/terminal/sol", "Failed to fetch SOL data"),
    ];

    for (uri, message) in cases {
        let app = router(MockMarket {
            fail: true,
            ..Default::default()
        });
        let (status, body) = send(app, get(uri)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body, json!({ "error": message }), "{}", uri);
    }
}

#[tokio::test]
async fn test_listing_endpoints_wrap_payloads() {
    let listing = TokenListing {
        token_address: Some("7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr".to_string()),
        chain_id: Some("solana".to_string()),
        description: Some("GIGA".to_string()),
        url: Some("https://dexscreener.com/solana/7gci".to_string()),
    };
    let market = || MockMarket {
        listings: vec![listing.clone()],
        ..Default::default()
    };

    let (status, body) = send(router(market()), get("/api/terminal/trending")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokens"][0]["name"], "7GCihgDB");
    assert_eq!(body["tokens"][0]["symbol"], "GIGA");

    let (status, body) = send(router(market()), get("/api/terminal/newpairs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pairs"][0]["address"], "7GCihgDB8fe6");
}

#[tokio::test]
async fn test_sol_defaults_when_no_pairs() {
    let (status, body) = send(router(MockMarket::default()), get("/api/terminal/sol")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"price": "0", "priceChange24h": 0.0, "volume24h": 0.0, "liquidity": 0.0})
    );
}

#[tokio::test]
async fn test_ask_requires_question() {
    for body in [r#"{}"#, r#"{"question": ""}"#, "not json"] {
        let (status, response) = send(
            router(MockMarket::default()),
            post_json("/api/terminal/ask", body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(response["error"], "Question is required");
    }
}

#[tokio::test]
async fn test_ask_answers_with_model() {
    let llm = Arc::new(MockLLM {
        questions: Mutex::new(Vec::new()),
    });
    let service = TerminalService::new(Arc::new(MockMarket::default())).with_llm(llm.clone());
    let app = ElyraServer::new(service).build_router();

    let (status, body) = send(
        app,
        post_json("/api/terminal/ask", r#"{"question": "is this safe?", "tokenAddress": "NOPE"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Not financial advice, but it looks liquid.");
    assert_eq!(llm.questions.lock().unwrap().as_slice(), &["is this safe?".to_string()]);
}

#[tokio::test]
async fn test_ask_without_model_fails() {
    let (status, body) = send(
        router(MockMarket::default()),
        post_json("/api/terminal/ask", r#"{"question": "gm"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process question");
}

#[test]
fn test_server_config_from_settings() {
    let settings = ServerSettings {
        bind_addr: "0.0.0.0:8080".to_string(),
        enable_cors: false,
        cors_origins: Some(vec!["https://elyra.example".to_string()]),
        enable_logging: false,
    };
    let config = ServerConfig::from_settings(&settings).unwrap();
    assert_eq!(config.bind_addr.port(), 8080);
    assert!(!config.enable_logging);
    assert!(!config.enable_cors);
    assert_eq!(config.cors_origins.as_ref().unwrap().len(), 1);

    let bad = ServerSettings {
        bind_addr: "not-an-address".to_string(),
        ..settings
    };
    assert!(matches!(
        ServerConfig::from_settings(&bad),
        Err(ServerError::Config(_))
    ));
}

fn cors_preflight() -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/terminal/trending")
        .header("origin", "https://elyra.example")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_follows_settings() {
    let service = TerminalService::new(Arc::new(MockMarket::default()));

    let open = ServerConfig::from_settings(&ServerSettings::default()).unwrap();
    let response = ElyraServer::with_config(service.clone(), open)
        .build_router()
        .oneshot(cors_preflight())
        .await
        .unwrap();
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));

    let closed = ServerConfig::from_settings(&ServerSettings {
        enable_cors: false,
        ..ServerSettings::default()
    })
    .unwrap();
    let response = ElyraServer::with_config(service, closed)
        .build_router()
        .oneshot(cors_preflight())
        .await
        .unwrap();
    assert!(!response
        .headers()
        .contains_key("access-control-allow-origin"));
}
