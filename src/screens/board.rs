//! Message board screen.

use crate::backend::Backend;
use crate::models::{PostKind, PostWithCounts, ReactionKind};
use crate::{db, SessionContext};

use super::notice;

pub struct BoardScreen {
    backend: Backend,
    session: SessionContext,
    pub posts: Vec<PostWithCounts>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl BoardScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            posts: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    /// Load the shared board with fresh reaction counts.
    pub async fn refresh(&mut self) {
        if self.session.identity().is_none() {
            return;
        }
        self.loading = true;
        match db::list_posts(&self.backend).await {
            Ok(posts) => self.posts = posts,
            Err(e) => self.notice = Some(notice("Could not load the board", &e)),
        }
        self.loading = false;
    }

    pub async fn add_post(&mut self, message: &str, kind: PostKind, is_urgent: bool) {
        let Some(me) = self.session.identity() else {
            return;
        };
        let message = message.trim();
        if message.is_empty() {
            self.notice = Some("Please write a message first".into());
            return;
        }

        match db::add_post(&self.backend, &me.id, message, kind, is_urgent).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not publish the message", &e)),
        }
    }

    /// React to a post, then re-read the board so counts update.
    pub async fn react(&mut self, post_id: &str, reaction: ReactionKind) {
        let Some(me) = self.session.identity() else {
            return;
        };

        match db::react(&self.backend, post_id, &me.id, reaction).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the reaction", &e)),
        }
    }

    /// Delete my own post.
    pub async fn delete_post(&mut self, post_id: &str) {
        let Some(me) = self.session.identity() else {
            return;
        };
        let mine = self
            .posts
            .iter()
            .any(|p| p.post.id == post_id && p.post.user_id == me.id);
        if !mine {
            self.notice = Some("Only your own messages can be deleted".into());
            return;
        }

        match db::delete_post(&self.backend, post_id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the message", &e)),
        }
    }

    /// Client-side kind filter for the chip row.
    pub fn filtered(&self, kind: Option<PostKind>) -> Vec<&PostWithCounts> {
        self.posts
            .iter()
            .filter(|p| kind.map_or(true, |k| p.post.kind == k))
            .collect()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
