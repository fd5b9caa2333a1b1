//! Mood tracking screen.

use chrono::NaiveDate;

use crate::backend::Backend;
use crate::models::{Mood, MoodEntry};
use crate::{db, SessionContext};

use super::notice;

pub struct MoodScreen {
    backend: Backend,
    session: SessionContext,
    pub history: Vec<MoodEntry>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl MoodScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            history: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;
        match db::list_moods(&self.backend, &me.id).await {
            Ok(history) => self.history = history,
            Err(e) => self.notice = Some(notice("Could not load moods", &e)),
        }
        self.loading = false;
    }

    /// Record (or replace) the mood for `day`.
    pub async fn record(&mut self, day: NaiveDate, mood: Mood, note: Option<&str>) {
        let Some(me) = self.session.identity() else {
            return;
        };

        match db::record_mood(&self.backend, &me.id, day, mood, note).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the mood", &e)),
        }
    }

    pub async fn delete(&mut self, id: &str) {
        match db::delete_mood(&self.backend, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the mood", &e)),
        }
    }

    /// The entry recorded for `day`, from the loaded history.
    pub fn mood_for(&self, day: NaiveDate) -> Option<&MoodEntry> {
        self.history.iter().find(|m| m.recorded_on == day)
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
