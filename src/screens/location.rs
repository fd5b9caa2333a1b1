//! Location sharing screen.
//!
//! Coordinates come from the shell's platform location service; the
//! core stores, serves, and measures them.

use crate::backend::Backend;
use crate::models::LocationSample;
use crate::{db, SessionContext};

use super::notice;

pub struct LocationScreen {
    backend: Backend,
    session: SessionContext,
    /// The other partner's identity id, once known.
    partner_id: Option<String>,
    pub mine: Option<LocationSample>,
    pub partner: Option<LocationSample>,
    pub is_sharing: bool,
    pub loading: bool,
    pub notice: Option<String>,
}

impl LocationScreen {
    pub fn new(backend: Backend, session: SessionContext, partner_id: Option<String>) -> Self {
        Self {
            backend,
            session,
            partner_id,
            mine: None,
            partner: None,
            is_sharing: true,
            loading: false,
            notice: None,
        }
    }

    pub fn set_partner(&mut self, partner_id: Option<String>) {
        self.partner_id = partner_id;
    }

    /// Load my stored sample and the partner's, if they share.
    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;

        match db::get_location(&self.backend, &me.id).await {
            Ok(sample) => {
                if let Some(ref s) = sample {
                    self.is_sharing = s.is_sharing;
                }
                self.mine = sample;
            }
            Err(e) => self.notice = Some(notice("Could not load your location", &e)),
        }

        if let Some(partner_id) = self.partner_id.clone() {
            match db::partner_location(&self.backend, &partner_id).await {
                Ok(sample) => self.partner = sample,
                Err(e) => self.notice = Some(notice("Could not load your partner's location", &e)),
            }
        }

        self.loading = false;
    }

    /// Store my current position as reported by the device.
    pub async fn update_location(&mut self, latitude: f64, longitude: f64, place_name: Option<&str>) {
        let Some(me) = self.session.identity() else {
            return;
        };
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            self.notice = Some("Those coordinates are not on this planet".into());
            return;
        }

        match db::upsert_location(
            &self.backend,
            &me.id,
            latitude,
            longitude,
            place_name,
            self.is_sharing,
        )
        .await
        {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not update your location", &e)),
        }
    }

    pub async fn toggle_sharing(&mut self, value: bool) {
        let Some(me) = self.session.identity() else {
            return;
        };

        match db::set_sharing(&self.backend, &me.id, value).await {
            Ok(()) => {
                self.is_sharing = value;
                self.refresh().await;
            }
            Err(e) => self.notice = Some(notice("Could not change location sharing", &e)),
        }
    }

    /// Distance between the two partners, only while both share.
    pub fn distance_km(&self) -> Option<f64> {
        match (&self.mine, &self.partner) {
            (Some(mine), Some(partner)) if mine.is_sharing && partner.is_sharing => {
                Some(mine.distance_km(partner))
            }
            _ => None,
        }
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
