use std::sync::atomic::AtomicUsize;
use std::time::Duration;

use async_trait::async_trait;
use elyra_core::market::{RiskLevel, TokenSnapshot};
use elyra_core::service::{NewPair, ScanReport, SolStatus, TokenSummary, TrendingToken};
use tokio::sync::Notify;

use super::*;

#[derive(Default)]
struct MockGateway {
    calls: AtomicUsize,
    fail: bool,
    missing: bool,
    asked: Mutex<Vec<(String, Option<String>)>>,
    release: Option<Arc<Notify>>,
}

impl MockGateway {
    fn record(&self) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GatewayError::Upstream("connection refused".to_string()));
        }
        Ok(())
    }
}

fn snapshot() -> TokenSnapshot {
    TokenSnapshot {
        name: "Wrapped SOL".to_string(),
        symbol: "SOL".to_string(),
        address: "So11111111111111111111111111111111111111112".to_string(),
        chain: "solana".to_string(),
        dex: "orca".to_string(),
        price_usd: "142.37".to_string(),
        price_change_1h_pct: 0.2,
        price_change_24h_pct: 75.0,
        market_cap_usd: 1.0,
        fdv_usd: 1.0,
        liquidity_usd: 200_000.0,
        volume_24h_usd: 1.0,
        buys_24h: 1,
        sells_24h: 1,
    }
}

#[async_trait]
impl TerminalGateway for MockGateway {
    async fn trending(&self) -> Result<Vec<TrendingToken>, GatewayError> {
        self.record()?;
        Ok(vec![TrendingToken {
            name: "7GCihgDB".to_string(),
            symbol: "GIGA".to_string(),
            chain: "solana".to_string(),
            url: String::new(),
        }])
    }

    async fn new_pairs(&self) -> Result<Vec<NewPair>, GatewayError> {
        self.record()?;
        Ok(vec![])
    }

    async fn sol(&self) -> Result<SolStatus, GatewayError> {
        self.record()?;
        Ok(SolStatus {
            price: "142.37".to_string(),
            price_change_24h: -1.0,
            volume_24h: 0.0,
            liquidity: 0.0,
        })
    }

    async fn token_summary(&self, _address: &str) -> Result<TokenSummary, GatewayError> {
        self.record()?;
        Ok(TokenSummary::from(&snapshot()))
    }

    async fn scan(&self, address: &str) -> Result<ScanReport, GatewayError> {
        if let Some(release) = &self.release {
            release.notified().await;
        }
        self.record()?;
        if self.missing {
            return Err(GatewayError::NotFound(address.to_string()));
        }
        Ok(ScanReport {
            snapshot: snapshot(),
            risk_score: RiskLevel::Low,
            risk_factors: vec!["High volatility (>50% 24h change)".to_string()],
        })
    }

    async fn ask(&self, question: &str, token_address: Option<&str>) -> Result<String, GatewayError> {
        self.record()?;
        self.asked
            .lock()
            .unwrap()
            .push((question.to_string(), token_address.map(str::to_string)));
        Ok("Not financial advice.".to_string())
    }
}

fn interpreter(gateway: MockGateway) -> (Arc<MockGateway>, Interpreter) {
    let gateway = Arc::new(gateway);
    let interpreter = Interpreter::with_buffer(gateway.clone(), SessionBuffer::new());
    (gateway, interpreter)
}

fn contents(interpreter: &Interpreter) -> Vec<(LineKind, String)> {
    interpreter
        .lines()
        .into_iter()
        .map(|line| (line.kind, line.content))
        .collect()
}

#[tokio::test]
async fn it_ignores_blank_submissions() {
    let (_, interpreter) = interpreter(MockGateway::default());
    assert_eq!(interpreter.submit("   ").await, Submission::Empty);
    assert!(interpreter.lines().is_empty());
}

#[tokio::test]
async fn it_echoes_input_and_appends_one_line_per_static_command() {
    let (_, interpreter) = interpreter(MockGateway::default());
    interpreter.submit("help").await;
    interpreter.submit("help").await;

    let lines = contents(&interpreter);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], (LineKind::Input, "elyra@os:~$ help".to_string()));
    assert_eq!(lines[1], (LineKind::Output, texts::HELP_TEXT.to_string()));
    assert_eq!(lines[1], lines[3]);
    assert_ne!(interpreter.lines()[1].id, interpreter.lines()[3].id);
}

#[tokio::test]
async fn it_clears_the_buffer() {
    let gateway = Arc::new(MockGateway::default());
    let interpreter = Interpreter::new(gateway);
    assert_eq!(interpreter.lines().len(), 5);

    interpreter.submit("status").await;
    interpreter.submit("CLEAR").await;
    assert!(interpreter.lines().is_empty());

    interpreter.submit("clear").await;
    assert!(interpreter.lines().is_empty());
}

#[tokio::test]
async fn it_reports_unknown_commands() {
    let (_, interpreter) = interpreter(MockGateway::default());
    interpreter.submit("foobar").await;

    let errors: Vec<_> = contents(&interpreter)
        .into_iter()
        .filter(|(kind, _)| *kind == LineKind::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].1.contains("Command not found: foobar"));
}

#[tokio::test]
async fn it_requires_an_address_for_scan() {
    let (gateway, interpreter) = interpreter(MockGateway::default());
    interpreter.submit("scan").await;

    let lines = contents(&interpreter);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], (LineKind::Error, texts::SCAN_USAGE.to_string()));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn it_renders_a_scan() {
    let (_, interpreter) = interpreter(MockGateway::default());
    interpreter
        .submit("analyze So11111111111111111111111111111111111111112")
        .await;

    let lines = contents(&interpreter);
    assert_eq!(lines[1], (LineKind::Output, "Scanning token So111111...".to_string()));
    assert!(lines[2].1.contains("RISK ASSESSMENT: LOW"));
    assert!(lines[2].1.contains("High volatility (>50% 24h change)"));
}

#[tokio::test]
async fn it_reports_missing_tokens() {
    let (_, interpreter) = interpreter(MockGateway {
        missing: true,
        ..Default::default()
    });
    interpreter.submit("scan NOPE").await;

    let lines = contents(&interpreter);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], (LineKind::Error, texts::TOKEN_NOT_FOUND.to_string()));
}

#[tokio::test]
async fn it_collapses_gateway_failures_into_one_line() {
    let (_, interpreter) = interpreter(MockGateway {
        fail: true,
        ..Default::default()
    });
    for command in ["trending", "newpairs", "sol", "scan MINT", "ask \"gm\""] {
        interpreter.submit(command).await;
        let lines = contents(&interpreter);
        assert_eq!(
            lines.last().unwrap(),
            &(LineKind::Error, texts::GENERIC_ERROR.to_string()),
            "{}",
            command
        );
    }
    assert!(!interpreter.is_busy());
}

#[tokio::test]
async fn it_renders_listings() {
    let (_, interpreter) = interpreter(MockGateway::default());
    interpreter.submit("trending").await;
    interpreter.submit("newpairs").await;
    interpreter.submit("sol").await;

    let lines = contents(&interpreter);
    assert!(lines[1].1.contains("1. GIGA (solana)"));
    assert!(lines[3].1.ends_with("No new pairs found.\n"));
    assert!(lines[5].1.contains("Price:      $142.37 (-1.00%)"));
}

#[tokio::test]
async fn it_asks_with_question_and_address() {
    let (gateway, interpreter) = interpreter(MockGateway::default());
    interpreter.submit("ask \"is this safe?\" ABC123").await;
    interpreter.submit("ask what is defi").await;

    let asked = gateway.asked.lock().unwrap().clone();
    assert_eq!(
        asked,
        vec![
            ("is this safe?".to_string(), Some("ABC123".to_string())),
            ("what is defi".to_string(), None),
        ]
    );

    let lines = contents(&interpreter);
    assert_eq!(lines[1], (LineKind::Output, texts::THINKING.to_string()));
    assert_eq!(lines[2], (LineKind::Output, "\nElyra: Not financial advice.".to_string()));
}

#[tokio::test]
async fn it_requires_a_question() {
    let (gateway, interpreter) = interpreter(MockGateway::default());
    interpreter.submit("ask").await;

    let lines = contents(&interpreter);
    assert_eq!(lines[1], (LineKind::Error, texts::ASK_USAGE.to_string()));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn it_rejects_submissions_while_busy() {
    let release = Arc::new(Notify::new());
    let (_, interpreter) = interpreter(MockGateway {
        release: Some(release.clone()),
        ..Default::default()
    });
    let interpreter = Arc::new(interpreter);

    let in_flight = {
        let interpreter = interpreter.clone();
        tokio::spawn(async move { interpreter.submit("scan MINT").await })
    };

    while !interpreter.is_busy() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let before = interpreter.lines().len();

    assert_eq!(interpreter.submit("help").await, Submission::Rejected);
    assert_eq!(interpreter.lines().len(), before);

    release.notify_one();
    assert_eq!(in_flight.await.unwrap(), Submission::Accepted);
    assert!(!interpreter.is_busy());

    assert_eq!(interpreter.submit("help").await, Submission::Accepted);
}
