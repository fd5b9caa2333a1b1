//! Alarm and reminder screen.
//!
//! The core stores the shared schedule; actually ringing is the shell's
//! notification scheduler's job.

use crate::backend::Backend;
use crate::models::{Alarm, AlarmKind};
use crate::{db, SessionContext};

use super::notice;

pub struct AlarmScreen {
    backend: Backend,
    session: SessionContext,
    pub alarms: Vec<Alarm>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl AlarmScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            alarms: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;
        match db::list_alarms(&self.backend, &me.id).await {
            Ok(alarms) => self.alarms = alarms,
            Err(e) => self.notice = Some(notice("Could not load alarms", &e)),
        }
        self.loading = false;
    }

    pub async fn add_alarm(
        &mut self,
        title: &str,
        time: &str,
        days: &[String],
        message: Option<&str>,
        kind: AlarmKind,
    ) {
        let Some(me) = self.session.identity() else {
            return;
        };

        match db::add_alarm(&self.backend, &me.id, title, time, days, message, kind).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the alarm", &e)),
        }
    }

    /// Flip enabled on one alarm, then re-read the list.
    pub async fn toggle(&mut self, id: &str) {
        let Some(current) = self.alarms.iter().find(|a| a.id == id).map(|a| a.is_enabled)
        else {
            return;
        };

        match db::set_enabled(&self.backend, id, !current).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not update the alarm", &e)),
        }
    }

    pub async fn delete_alarm(&mut self, id: &str) {
        match db::delete_alarm(&self.backend, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the alarm", &e)),
        }
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
