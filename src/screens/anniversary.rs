//! Anniversary screen.

use chrono::NaiveDate;

use crate::backend::Backend;
use crate::models::{Anniversary, AnniversaryKind};
use crate::{db, SessionContext};

use super::notice;

pub struct AnniversaryScreen {
    backend: Backend,
    session: SessionContext,
    pub anniversaries: Vec<Anniversary>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl AnniversaryScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            anniversaries: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;
        match db::list_anniversaries(&self.backend, &me.id).await {
            Ok(list) => self.anniversaries = list,
            Err(e) => self.notice = Some(notice("Could not load anniversaries", &e)),
        }
        self.loading = false;
    }

    pub async fn add_anniversary(
        &mut self,
        title: &str,
        date: NaiveDate,
        kind: AnniversaryKind,
        note: Option<&str>,
    ) {
        let Some(me) = self.session.identity() else {
            return;
        };
        if title.trim().is_empty() {
            self.notice = Some("Please name the anniversary".into());
            return;
        }

        match db::add_anniversary(&self.backend, &me.id, title.trim(), date, kind, note).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the anniversary", &e)),
        }
    }

    pub async fn delete_anniversary(&mut self, id: &str) {
        match db::delete_anniversary(&self.backend, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the anniversary", &e)),
        }
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
