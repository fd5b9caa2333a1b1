//! Wishlist screen.

use crate::backend::Backend;
use crate::models::{Priority, WishlistItem};
use crate::{db, SessionContext};

use super::notice;

pub struct WishlistScreen {
    backend: Backend,
    session: SessionContext,
    pub items: Vec<WishlistItem>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl WishlistScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            items: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;
        match db::list_wishlist(&self.backend, &me.id).await {
            Ok(items) => self.items = items,
            Err(e) => self.notice = Some(notice("Could not load the wishlist", &e)),
        }
        self.loading = false;
    }

    pub async fn add_wish(&mut self, title: &str, note: Option<&str>, priority: Priority) {
        let Some(me) = self.session.identity() else {
            return;
        };
        if title.trim().is_empty() {
            self.notice = Some("Please name the wish".into());
            return;
        }

        match db::add_wish(&self.backend, &me.id, title.trim(), note, priority).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the wish", &e)),
        }
    }

    /// Flip fulfilled on one item, then re-read the list.
    pub async fn toggle_fulfilled(&mut self, id: &str) {
        let Some(current) = self.items.iter().find(|i| i.id == id).map(|i| i.is_fulfilled)
        else {
            return;
        };

        match db::set_fulfilled(&self.backend, id, !current).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not update the wish", &e)),
        }
    }

    pub async fn delete_wish(&mut self, id: &str) {
        match db::delete_wish(&self.backend, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the wish", &e)),
        }
    }

    pub fn fulfilled_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_fulfilled).count()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
