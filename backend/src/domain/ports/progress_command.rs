//! Driving ports for progress logs.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Error, ProgressEntryDraft, ProgressLog, ProgressLogId, UserId};

/// Request to record body metrics for an existing user.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordProgressRequest {
    pub user_id: UserId,
    pub entry: ProgressEntryDraft,
}

/// Filter applied when listing a user's logs. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProgressRequest {
    pub user_id: UserId,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

/// Domain use-case port for progress writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressCommand: Send + Sync {
    /// Record a log.
    ///
    /// Fails with `not_found` when the owner does not exist and
    /// `invalid_request` when a metric is out of range.
    async fn record_progress(&self, request: RecordProgressRequest) -> Result<ProgressLog, Error>;

    /// Delete a log, or `not_found`.
    async fn delete_progress(&self, id: ProgressLogId) -> Result<(), Error>;
}

/// Domain use-case port for progress reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressQuery: Send + Sync {
    /// Fetch one log, or `not_found`.
    async fn get_progress(&self, id: ProgressLogId) -> Result<ProgressLog, Error>;

    /// A user's logs inside the requested window, ordered by log date.
    ///
    /// Fails with `invalid_request` when `from_date` is after `to_date` and
    /// `not_found` when the user does not exist.
    async fn list_progress(&self, request: ListProgressRequest) -> Result<Vec<ProgressLog>, Error>;
}
