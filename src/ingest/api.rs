//! Access-log API payloads.
//!
//! The remote service answers `{ "data": { "data": [ { "time": .. }, .. ] } }`;
//! a bare array of logs is accepted too. Each log becomes one bare punch at
//! the date and minute written in its own timestamp: offsets are dropped,
//! never converted.

use super::ParsedBatch;
use crate::errors::AppResult;
use crate::models::punch::{Punch, PunchSource};
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteLog {
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct LogPage {
    #[serde(default)]
    data: Vec<RemoteLog>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    // tried first: a one-element array would otherwise match the envelope
    Bare(Vec<RemoteLog>),
    Envelope {
        #[serde(default)]
        data: Option<LogPage>,
    },
}

/// Wall-clock fields of an ISO-8601 timestamp, with or without offset.
pub fn parse_local_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn punches_from_logs(logs: &[RemoteLog]) -> ParsedBatch {
    let mut batch = ParsedBatch::default();

    for log in logs {
        match log.time.as_deref().and_then(parse_local_timestamp) {
            Some(dt) => batch
                .punches
                .push(Punch::unstructured(dt.date(), dt.time(), PunchSource::Api)),
            None => batch.skipped += 1,
        }
    }

    batch
}

pub fn parse_api_payload(json: &str) -> AppResult<ParsedBatch> {
    let payload: Payload = serde_json::from_str(json)?;

    let logs = match payload {
        Payload::Envelope { data } => data.unwrap_or_default().data,
        Payload::Bare(logs) => logs,
    };

    Ok(punches_from_logs(&logs))
}
