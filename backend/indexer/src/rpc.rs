//! Soroban RPC access: pages through `getEvents` for the watched contracts
//! and turns the raw entries into [`CondominiumEvent`]s.
//!
//! Transport failures, HTTP 429 and soft JSON-RPC errors are retried with
//! exponential back-off capped at [`MAX_BACKOFF_SECS`]. Invalid-request and
//! unknown-method errors are returned at once.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{CondominiumEvent, EventKind};
use crate::scval;

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct RawEvent {
    /// Topic list, base64 XDR or already rendered JSON.
    pub topic: Vec<String>,
    /// Event data.
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
    #[serde(rename = "pagingToken")]
    pub paging_token: Option<String>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch one page of events emitted by `contract_ids`.
///
/// Scans from `start_ledger` unless `cursor` resumes a previous page.
/// Returns `(events, next_cursor, latest_ledger)`.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_ids: &[String],
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<(Vec<RawEvent>, Option<String>, Option<u64>)> {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getEvents",
        "params": build_params(contract_ids, start_ledger, cursor, limit),
    });
    let mut backoff = Backoff::new();

    loop {
        let resp = match client.post(rpc_url).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                backoff.wait(&format!("RPC request failed: {e}")).await;
                continue;
            }
        };
        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            backoff.wait("Rate-limited by RPC").await;
            continue;
        }

        let body: RpcResponse = resp.json().await?;
        if let Some(err) = body.error {
            if is_hard_error(err.code) {
                return Err(IndexerError::Rpc {
                    code: err.code,
                    message: err.message,
                });
            }
            backoff
                .wait(&format!("RPC soft error {}: {}", err.code, err.message))
                .await;
            continue;
        }

        let result = body.result.ok_or_else(|| {
            IndexerError::EventParse("Empty result from getEvents".to_string())
        })?;
        debug!(
            "Fetched {} events (latest_ledger={:?})",
            result.events.len(),
            result.latest_ledger
        );
        return Ok((result.events, result.cursor, result.latest_ledger));
    }
}

/// Invalid request and unknown method will not succeed on retry.
fn is_hard_error(code: i64) -> bool {
    code == -32600 || code == -32601
}

/// Doubling delay between retries, capped at [`MAX_BACKOFF_SECS`].
struct Backoff {
    secs: u64,
}

impl Backoff {
    fn new() -> Self {
        Backoff {
            secs: INITIAL_BACKOFF_SECS,
        }
    }

    async fn wait(&mut self, reason: &str) {
        warn!("{reason} (retrying in {}s)", self.secs);
        tokio::time::sleep(Duration::from_secs(self.secs)).await;
        self.secs = self.next_secs();
    }

    fn next_secs(&self) -> u64 {
        (self.secs * 2).min(MAX_BACKOFF_SECS)
    }
}

fn build_params(
    contract_ids: &[String],
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Value {
    let mut params = json!({
        "filters": [
            {
                "type": "contract",
                "contractIds": contract_ids
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────

/// Decode raw RPC entries, skipping those without a topic.
pub fn decode_events(raw: &[RawEvent], fallback_contract: &str) -> Vec<CondominiumEvent> {
    raw.iter()
        .filter_map(|e| decode_single(e, fallback_contract))
        .collect()
}

fn decode_single(raw: &RawEvent, fallback_contract: &str) -> Option<CondominiumEvent> {
    let kind = EventKind::from_topic(&topic_text(raw.topic.first()?));

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    let subject_kind = kind.subject_kind();
    let subject = subject_kind
        .and_then(|_| raw.topic.get(1))
        .map(|t| topic_text(t));

    let (actor, amount) = decode_data(&data_fields(&raw.value), &kind);

    let event_id = raw.id.clone().unwrap_or_else(|| {
        format!(
            "{ledger}-{}-{}-{}",
            raw.tx_hash.as_deref().unwrap_or("-"),
            kind.as_str(),
            subject.as_deref().unwrap_or("-"),
        )
    });

    Some(CondominiumEvent {
        event_id,
        event_type: kind.as_str().to_string(),
        subject_kind: subject_kind.map(|k| k.as_str().to_string()),
        subject,
        actor,
        amount,
        ledger,
        timestamp,
        contract_id: raw
            .contract_id
            .clone()
            .unwrap_or_else(|| fallback_contract.to_string()),
        tx_hash: raw.tx_hash.clone(),
    })
}

/// Event data as JSON. The RPC's default encoding is a base64 XDR string;
/// anything else is taken as already rendered.
fn data_fields(value: &Value) -> Value {
    match value {
        Value::String(xdr) => scval::decode_value(xdr).unwrap_or(Value::Null),
        other => other.clone(),
    }
}

/// Pull the acting address and the moved amount out of the event data.
fn decode_data(value: &Value, kind: &EventKind) -> (Option<String>, Option<String>) {
    match kind {
        EventKind::ResidentAdded | EventKind::ResidentRemoved | EventKind::CounselorSet => {
            (extract_field(value, &["resident"]), None)
        }
        EventKind::TopicCreated | EventKind::TopicEdited => (
            extract_field(value, &["responsible"]),
            extract_field(value, &["amount"]),
        ),
        EventKind::VoteCast => (extract_field(value, &["residence_id"]), None),
        EventKind::ManagerChanged => (extract_field(value, &["manager"]), None),
        EventKind::QuotaChanged => (None, extract_field(value, &["amount"])),
        EventKind::QuotaPaid => (
            extract_field(value, &["payer"]),
            extract_field(value, &["amount"]),
        ),
        EventKind::FundsTransferred => (
            extract_field(value, &["to"]),
            extract_field(value, &["amount"]),
        ),
        EventKind::ImplementationUpgraded => (extract_field(value, &["implementation"]), None),
        EventKind::TopicRemoved
        | EventKind::VotingOpened
        | EventKind::VotingClosed
        | EventKind::Unknown => (None, None),
    }
}

fn extract_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Render a topic entry, which may be `{"type":…,"value":…}` JSON, base64
/// XDR, or plain text.
fn topic_text(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        match v.get("value") {
            Some(Value::String(s)) => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    scval::decode(raw).unwrap_or_else(|| raw.to_string())
}

fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}
