//! Pin message screen: one-liners sent between the partners.

use crate::backend::Backend;
use crate::models::PinMessage;
use crate::{db, SessionContext};

use super::notice;

pub struct PinScreen {
    backend: Backend,
    session: SessionContext,
    pub pins: Vec<PinMessage>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl PinScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            pins: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    /// Load pins addressed to the signed-in identity.
    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;
        match db::received_pins(&self.backend, &me.id).await {
            Ok(pins) => self.pins = pins,
            Err(e) => self.notice = Some(notice("Could not load pins", &e)),
        }
        self.loading = false;
    }

    pub async fn send_pin(&mut self, receiver_id: &str, message: &str) {
        let Some(me) = self.session.identity() else {
            return;
        };
        let message = message.trim();
        if message.is_empty() {
            self.notice = Some("Please write a message first".into());
            return;
        }

        match db::send_pin(&self.backend, &me.id, receiver_id, message).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not send the pin", &e)),
        }
    }

    pub async fn mark_read(&mut self, id: &str) {
        match db::mark_pin_read(&self.backend, id, true).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not update the pin", &e)),
        }
    }

    pub async fn delete_pin(&mut self, id: &str) {
        match db::delete_pin(&self.backend, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the pin", &e)),
        }
    }

    pub fn unread_count(&self) -> usize {
        self.pins.iter().filter(|p| !p.is_read).count()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
