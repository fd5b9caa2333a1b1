//! Joke journal screen.

use crate::backend::Backend;
use crate::models::{Joke, JokeCategory};
use crate::{db, SessionContext};

use super::notice;

pub struct JokeScreen {
    backend: Backend,
    session: SessionContext,
    pub jokes: Vec<Joke>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl JokeScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            jokes: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    /// On-mount load; also the re-fetch after every mutation.
    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;
        match db::list_jokes(&self.backend, &me.id).await {
            Ok(jokes) => self.jokes = jokes,
            Err(e) => self.notice = Some(notice("Could not load jokes", &e)),
        }
        self.loading = false;
    }

    pub async fn add_joke(&mut self, content: &str, category: JokeCategory) {
        let Some(me) = self.session.identity() else {
            return;
        };
        let content = content.trim();
        if content.is_empty() {
            self.notice = Some("Please write a joke first".into());
            return;
        }

        match db::add_joke(&self.backend, &me.id, content, category).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the joke", &e)),
        }
    }

    pub async fn delete_joke(&mut self, id: &str) {
        match db::delete_joke(&self.backend, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the joke", &e)),
        }
    }

    /// Hand the pending notice to the shell for display.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
