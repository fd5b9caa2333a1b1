//! Photo gallery screen.

use chrono::NaiveDate;
use futures::future::join_all;

use crate::backend::Backend;
use crate::models::{Album, PhotoComment, PhotoWithCounts};
use crate::{db, SessionContext};

use super::notice;

pub struct GalleryScreen {
    backend: Backend,
    session: SessionContext,
    pub photos: Vec<PhotoWithCounts>,
    /// Comments for the photo currently open in the viewer.
    pub comments: Vec<PhotoComment>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl GalleryScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            photos: Vec::new(),
            comments: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    /// Load photos, then their like counts and my-like flags in one
    /// fan-out per list read.
    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;

        match db::list_photos(&self.backend, &me.id).await {
            Ok(photos) => {
                let counts = join_all(photos.iter().map(|photo| {
                    let backend = self.backend.clone();
                    let me = me.id.clone();
                    let photo_id = photo.id.clone();
                    async move {
                        let like_count = db::like_count(&backend, &photo_id).await?;
                        let liked_by_me = db::has_liked(&backend, &photo_id, &me).await?;
                        crate::Result::Ok((like_count, liked_by_me))
                    }
                }))
                .await;

                let mut joined = Vec::with_capacity(photos.len());
                for (photo, counts) in photos.into_iter().zip(counts) {
                    match counts {
                        Ok((like_count, liked_by_me)) => joined.push(PhotoWithCounts {
                            photo,
                            like_count,
                            liked_by_me,
                        }),
                        Err(e) => {
                            self.notice = Some(notice("Could not load photo likes", &e));
                            joined.push(PhotoWithCounts {
                                photo,
                                like_count: 0,
                                liked_by_me: false,
                            });
                        }
                    }
                }
                self.photos = joined;
            }
            Err(e) => self.notice = Some(notice("Could not load the gallery", &e)),
        }

        self.loading = false;
    }

    pub async fn add_photo(
        &mut self,
        image_ref: &str,
        caption: Option<&str>,
        album: Album,
        taken_on: Option<NaiveDate>,
    ) {
        let Some(me) = self.session.identity() else {
            return;
        };

        match db::add_photo(&self.backend, &me.id, image_ref, caption, album, taken_on).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the photo", &e)),
        }
    }

    pub async fn toggle_favorite(&mut self, photo_id: &str) {
        let Some(current) = self
            .photos
            .iter()
            .find(|p| p.photo.id == photo_id)
            .map(|p| p.photo.is_favorite)
        else {
            return;
        };

        match db::set_photo_favorite(&self.backend, photo_id, !current).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not update the photo", &e)),
        }
    }

    pub async fn delete_photo(&mut self, photo_id: &str) {
        match db::delete_photo(&self.backend, photo_id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the photo", &e)),
        }
    }

    pub async fn toggle_like(&mut self, photo_id: &str) {
        let Some(me) = self.session.identity() else {
            return;
        };

        match db::toggle_like(&self.backend, photo_id, &me.id).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not update the like", &e)),
        }
    }

    /// Open a photo's comment thread.
    pub async fn load_comments(&mut self, photo_id: &str) {
        match db::list_comments(&self.backend, photo_id).await {
            Ok(comments) => self.comments = comments,
            Err(e) => self.notice = Some(notice("Could not load comments", &e)),
        }
    }

    pub async fn add_comment(&mut self, photo_id: &str, content: &str) {
        let Some(me) = self.session.identity() else {
            return;
        };
        let content = content.trim();
        if content.is_empty() {
            self.notice = Some("Please write a comment first".into());
            return;
        }

        match db::add_comment(&self.backend, &me.id, photo_id, content).await {
            Ok(_) => self.load_comments(photo_id).await,
            Err(e) => self.notice = Some(notice("Could not post the comment", &e)),
        }
    }

    pub async fn delete_comment(&mut self, comment_id: &str, photo_id: &str) {
        match db::delete_comment(&self.backend, comment_id).await {
            Ok(()) => self.load_comments(photo_id).await,
            Err(e) => self.notice = Some(notice("Could not delete the comment", &e)),
        }
    }

    /// Client-side album filter for the chip row.
    pub fn filtered(&self, album: Option<Album>) -> Vec<&PhotoWithCounts> {
        self.photos
            .iter()
            .filter(|p| album.map_or(true, |a| p.photo.album == a))
            .collect()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
