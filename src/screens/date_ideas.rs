//! Date ideas screen.

use crate::backend::Backend;
use crate::models::{DateIdea, DateIdeaCategory};
use crate::{db, SessionContext};

use super::notice;

pub struct DateIdeasScreen {
    backend: Backend,
    session: SessionContext,
    pub ideas: Vec<DateIdea>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl DateIdeasScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            ideas: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;
        match db::list_date_ideas(&self.backend, &me.id).await {
            Ok(ideas) => self.ideas = ideas,
            Err(e) => self.notice = Some(notice("Could not load date ideas", &e)),
        }
        self.loading = false;
    }

    pub async fn add_idea(&mut self, title: &str, note: Option<&str>, category: DateIdeaCategory) {
        let Some(me) = self.session.identity() else {
            return;
        };
        if title.trim().is_empty() {
            self.notice = Some("Please name the idea".into());
            return;
        }

        match db::add_date_idea(&self.backend, &me.id, title.trim(), note, category).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the idea", &e)),
        }
    }

    pub async fn toggle_favorite(&mut self, id: &str) {
        let Some(current) = self.ideas.iter().find(|i| i.id == id).map(|i| i.is_favorite)
        else {
            return;
        };

        match db::set_favorite(&self.backend, id, !current).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not update the idea", &e)),
        }
    }

    pub async fn toggle_done(&mut self, id: &str) {
        let Some(current) = self.ideas.iter().find(|i| i.id == id).map(|i| i.is_done) else {
            return;
        };

        match db::set_done(&self.backend, id, !current).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not update the idea", &e)),
        }
    }

    pub async fn delete_idea(&mut self, id: &str) {
        match db::delete_date_idea(&self.backend, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the idea", &e)),
        }
    }

    /// Client-side category filter for the chip row.
    pub fn filtered(&self, category: Option<DateIdeaCategory>) -> Vec<&DateIdea> {
        self.ideas
            .iter()
            .filter(|i| category.map_or(true, |c| i.category == c))
            .collect()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
