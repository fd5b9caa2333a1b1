//! Cycle tracking screen.

use chrono::{DateTime, NaiveDate, Utc};

use crate::backend::Backend;
use crate::models::CycleRecord;
use crate::{db, SessionContext};

use super::notice;

/// Derived prediction, computed at render time from the latest record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePrediction {
    pub next_period: NaiveDate,
    pub days_remaining: i64,
}

pub struct CycleScreen {
    backend: Backend,
    session: SessionContext,
    pub records: Vec<CycleRecord>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl CycleScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            records: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;
        match db::list_cycle_records(&self.backend, &me.id).await {
            Ok(records) => self.records = records,
            Err(e) => self.notice = Some(notice("Could not load cycle records", &e)),
        }
        self.loading = false;
    }

    /// Record a period start for `start_date` with the expected length.
    pub async fn add_record(&mut self, start_date: NaiveDate, cycle_length: i64, note: Option<&str>) {
        let Some(me) = self.session.identity() else {
            return;
        };
        if cycle_length <= 0 {
            self.notice = Some("Cycle length must be positive".into());
            return;
        }

        match db::add_cycle_record(&self.backend, &me.id, start_date, cycle_length, note).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the record", &e)),
        }
    }

    pub async fn delete_record(&mut self, id: &str) {
        match db::delete_cycle_record(&self.backend, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the record", &e)),
        }
    }

    /// The most recent record; the list comes back newest first.
    pub fn latest(&self) -> Option<&CycleRecord> {
        self.records.first()
    }

    /// Next predicted start and whole days remaining, from the latest
    /// record.
    pub fn prediction(&self, now: DateTime<Utc>) -> Option<CyclePrediction> {
        self.latest().map(|record| CyclePrediction {
            next_period: record.next_period_date(),
            days_remaining: record.days_until_next(now),
        })
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
