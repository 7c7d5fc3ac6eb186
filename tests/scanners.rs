//! Provider adapters and multiscan against a local stub HTTP server
//!
//! Each stub answers every request with a fixed status and body and records the
//! raw requests it received.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tokenscan::apis::{GoPlusClient, HoneypotClient, QuickIntelClient};
use tokenscan::config::{GoPlusConfig, HoneypotConfig, QuickIntelConfig, ScannersConfig};
use tokenscan::errors::ApiError;
use tokenscan::scan::TokenScanner;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const TOKEN: &str = "0x6982508145454Ce325dDbE47a25d4ec3d2311933";

struct Stub {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    async fn start(status: u16, body: &'static str) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let seen = Arc::clone(&seen);
                tokio::spawn(async move {
                    let _ = respond(stream, status, body, seen).await;
                });
            }
        });

        Ok(Self { base_url, requests })
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(
    mut stream: TcpStream,
    status: u16,
    body: &str,
    seen: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            break raw.len();
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while raw.len() < header_end + content_length {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
    }

    // Record before answering
    seen.lock()
        .unwrap()
        .push(String::from_utf8_lossy(&raw).to_string());

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

/// A base URL nothing listens on
async fn closed_port_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}", listener.local_addr()?);
    drop(listener);
    Ok(url)
}

fn goplus(base_url: &str) -> Result<GoPlusClient> {
    let config = GoPlusConfig {
        base_url: base_url.to_string(),
        ..GoPlusConfig::default()
    };
    GoPlusClient::new(config, 5).map_err(anyhow::Error::msg)
}

fn honeypot(base_url: &str) -> Result<HoneypotClient> {
    let config = HoneypotConfig {
        base_url: base_url.to_string(),
        ..HoneypotConfig::default()
    };
    HoneypotClient::new(config, 5).map_err(anyhow::Error::msg)
}

fn quickintel(base_url: &str) -> Result<QuickIntelClient> {
    let config = QuickIntelConfig {
        base_url: base_url.to_string(),
        ..QuickIntelConfig::default()
    };
    QuickIntelClient::new(config, 5).map_err(anyhow::Error::msg)
}

const GOPLUS_OK: &str = r#"{
    "code": 1,
    "message": "OK",
    "result": {
        "0x6982508145454ce325ddbe47a25d4ec3d2311933": {
            "token_name": "Pepe",
            "token_symbol": "PEPE",
            "buy_tax": "0",
            "sell_tax": "0",
            "is_honeypot": "0",
            "is_open_source": "1",
            "is_mintable": "0",
            "owner_change_balance": "0"
        }
    }
}"#;

const HONEYPOT_FLAGGED: &str = r#"{
    "token": {"name": "Pepe", "symbol": "PEPE", "decimals": 18},
    "honeypotResult": {"isHoneypot": true},
    "contractCode": {"openSource": true},
    "pair": {"name": "Uniswap V2", "address": "0xa43fe16908251ee70ef74718545e4fe6c5ccec9f", "liquidity": 1250000.5}
}"#;

const QUICKINTEL_OK: &str = r#"{
    "tokenDetails": {"tokenName": "Pepe", "tokenSymbol": "PEPE", "tokenDecimals": 18},
    "quickiAudit": {"hidden_Owner": false, "can_Mint": false, "can_Blacklist": true}
}"#;

#[tokio::test]
async fn test_goplus_success_matches_lowercase_key() -> Result<()> {
    let stub = Stub::start(200, GOPLUS_OK).await?;
    let report = goplus(&stub.base_url)?.scan(TOKEN).await?;

    assert_eq!(report.token_name.as_deref(), Some("Pepe"));
    assert_eq!(report.is_open_source.as_deref(), Some("1"));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with(&format!(
        "GET /token_security/1?contract_addresses={} ",
        TOKEN
    )));
    Ok(())
}

#[tokio::test]
async fn test_goplus_error_code() -> Result<()> {
    let stub = Stub::start(200, r#"{"code": 2, "message": "too many requests", "result": {}}"#).await?;
    let err = goplus(&stub.base_url)?.scan(TOKEN).await.unwrap_err();

    assert_eq!(err, ApiError::Provider("too many requests".to_string()));
    assert_eq!(err.to_string(), "scan failed: too many requests");
    Ok(())
}

#[tokio::test]
async fn test_goplus_missing_address() -> Result<()> {
    let stub = Stub::start(200, r#"{"code": 1, "message": "OK", "result": {"0xdead": {}}}"#).await?;
    let err = goplus(&stub.base_url)?.scan(TOKEN).await.unwrap_err();

    assert_eq!(err, ApiError::NotFound);
    Ok(())
}

#[tokio::test]
async fn test_honeypot_success() -> Result<()> {
    let stub = Stub::start(200, HONEYPOT_FLAGGED).await?;
    let response = honeypot(&stub.base_url)?.scan(TOKEN).await?;

    assert_eq!(
        response.honeypot_result.and_then(|r| r.is_honeypot),
        Some(true)
    );
    let requests = stub.requests();
    assert!(requests[0].starts_with(&format!(
        "GET /IsHoneypot?address={}&chainID=1 ",
        TOKEN
    )));
    Ok(())
}

#[tokio::test]
async fn test_honeypot_non_success_status() -> Result<()> {
    let stub = Stub::start(404, r#"{"error": "token not found"}"#).await?;
    let err = honeypot(&stub.base_url)?.scan(TOKEN).await.unwrap_err();

    match err {
        ApiError::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("token not found"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_honeypot_malformed_body() -> Result<()> {
    let stub = Stub::start(200, "<html>gateway timeout</html>").await?;
    let err = honeypot(&stub.base_url)?.scan(TOKEN).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidResponse(_)), "got {:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_quickintel_posts_audit_request() -> Result<()> {
    let stub = Stub::start(200, QUICKINTEL_OK).await?;
    let response = quickintel(&stub.base_url)?.scan(TOKEN).await?;

    assert_eq!(
        response.quicki_audit.and_then(|a| a.can_blacklist),
        Some(true)
    );

    let requests = stub.requests();
    let request = &requests[0];
    assert!(request.starts_with("POST /quicki/getquickiauditfull "));

    let body = request
        .split_once("\r\n\r\n")
        .map(|(_, body)| body)
        .unwrap_or_default();
    let body: serde_json::Value = serde_json::from_str(body)?;
    assert_eq!(
        body,
        serde_json::json!({"chain": "eth", "tokenAddress": TOKEN, "tier": "basic"})
    );
    Ok(())
}

#[tokio::test]
async fn test_multiscan_merges_worst_case() -> Result<()> {
    let goplus_stub = Stub::start(200, GOPLUS_OK).await?;
    let honeypot_stub = Stub::start(200, HONEYPOT_FLAGGED).await?;
    let quickintel_stub = Stub::start(200, QUICKINTEL_OK).await?;

    let mut config = ScannersConfig::default();
    config.request_timeout_secs = 5;
    config.goplus.base_url = goplus_stub.base_url.clone();
    config.honeypot.base_url = honeypot_stub.base_url.clone();
    config.quickintel.base_url = quickintel_stub.base_url.clone();

    let unified = TokenScanner::from_config(&config)
        .map_err(anyhow::Error::msg)?
        .aggregate(TOKEN)
        .await;

    // Only Honeypot.is flags the token; the merge keeps it
    assert!(unified.is_honeypot);
    assert!(unified.is_open_source);
    assert!(unified.is_blacklisted);
    assert!(!unified.is_mintable);
    assert_eq!(unified.token_name, "Pepe");
    assert_eq!(unified.decimals, 18);
    assert_eq!(
        unified.uniswap_v2_pair,
        "0xa43fe16908251ee70ef74718545e4fe6c5ccec9f"
    );
    assert_eq!(unified.sell_tax, "0");
    assert!(!unified.personal_slippage_modifiable);
    Ok(())
}

#[tokio::test]
async fn test_multiscan_survives_unreachable_and_disabled_providers() -> Result<()> {
    let honeypot_stub = Stub::start(200, HONEYPOT_FLAGGED).await?;

    let mut config = ScannersConfig::default();
    config.goplus.base_url = closed_port_url().await?;
    config.honeypot.base_url = honeypot_stub.base_url.clone();
    config.quickintel.enabled = false;

    let unified = TokenScanner::from_config(&config)
        .map_err(anyhow::Error::msg)?
        .aggregate(TOKEN)
        .await;

    assert!(unified.is_honeypot);
    assert_eq!(unified.token_symbol, "PEPE");
    assert!(unified.buy_tax.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_multiscan_with_every_provider_down_is_empty() -> Result<()> {
    let mut config = ScannersConfig::default();
    config.goplus.base_url = closed_port_url().await?;
    config.honeypot.base_url = closed_port_url().await?;
    config.quickintel.base_url = closed_port_url().await?;

    let unified = TokenScanner::from_config(&config)
        .map_err(anyhow::Error::msg)?
        .aggregate(TOKEN)
        .await;

    assert!(unified.is_empty());
    assert_eq!(unified.to_json().map_err(anyhow::Error::msg)?, "{}");
    Ok(())
}
