use crate::fingerprint::Fingerprint;
use crate::identity::ProcessIdentity;
use crate::timespan;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordState {
    Open,
    Closed,
}

impl fmt::Display for RecordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordState::Open => f.write_str("open"),
            RecordState::Closed => f.write_str("closed"),
        }
    }
}

/// Persisted lifecycle document of a process, keyed by its fingerprint.
///
/// An open record carries only the start timestamp; `stopTimestamp` and
/// `duration` are left out of the document until the record is closed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    pub id: Fingerprint,
    #[serde(flatten)]
    pub identity: ProcessIdentity,
    pub start_timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timespan::option"
    )]
    pub duration: Option<TimeDelta>,
    #[serde(default)]
    pub is_complete: bool,
}

impl ProcessRecord {
    pub fn open(id: Fingerprint, identity: ProcessIdentity, start: DateTime<Utc>) -> Self {
        Self {
            id,
            identity,
            start_timestamp: start,
            stop_timestamp: None,
            duration: None,
            is_complete: false,
        }
    }

    /// Rebuilds the whole document in its closed form. The start timestamp
    /// and identity are carried over unchanged.
    pub fn close(self, stop: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self {
            stop_timestamp: Some(stop),
            duration: Some(duration),
            is_complete: true,
            ..self
        }
    }

    pub fn state(&self) -> RecordState {
        if self.is_complete || self.stop_timestamp.is_some() {
            RecordState::Closed
        } else {
            RecordState::Open
        }
    }
}

/// Synthetic record used to seed sample dashboards. Written in one step with
/// both timestamps already set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRecord {
    pub id: Fingerprint,
    pub product_name: String,
    pub status_name: String,
    pub edition_number: u8,
    pub update_number: u8,
    pub is_releasable: bool,
    pub start_timestamp: DateTime<Utc>,
    pub stop_timestamp: DateTime<Utc>,
    #[serde(with = "timespan")]
    pub duration: TimeDelta,
    pub is_complete: bool,
}

impl DemoRecord {
    /// Demo ids cover product, edition, update and the releasable flag only,
    /// so two samples agreeing on those overwrite each other.
    pub fn fingerprint_for(
        product_name: &str,
        edition_number: u8,
        update_number: u8,
        is_releasable: bool,
    ) -> Fingerprint {
        Fingerprint::derive([
            product_name.to_string(),
            edition_number.to_string(),
            update_number.to_string(),
            is_releasable.to_string(),
        ])
    }
}
