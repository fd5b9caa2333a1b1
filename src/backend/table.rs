//! Generic table operations.
//!
//! Builds PostgREST-style requests: `select`/`eq`/`order`/`limit` query
//! parameters, `Prefer: return=representation` on mutations, and exact
//! row counts via `Prefer: count=exact` + the `Content-Range` reply
//! header. Every data-access function bottoms out here.

use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{error_from_response, Backend};
use crate::{Error, Result};

/// Sort direction for `order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn suffix(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// One pending table operation. Built with filters, consumed by exactly
/// one of the terminal calls.
pub struct TableQuery {
    backend: Backend,
    table: String,
    select: String,
    filters: Vec<String>,
    order: Option<String>,
    limit: Option<u32>,
}

impl TableQuery {
    pub(crate) fn new(backend: Backend, table: &str) -> Self {
        Self {
            backend,
            table: table.to_string(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Restrict returned columns (defaults to `*`).
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    /// Keep rows where `column` equals `value`.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(format!(
            "{}=eq.{}",
            column,
            urlencoding::encode(&value.to_string())
        ));
        self
    }

    pub fn order(mut self, column: &str, direction: Order) -> Self {
        self.order = Some(format!("{}.{}", column, direction.suffix()));
        self
    }

    pub fn limit(mut self, count: u32) -> Self {
        self.limit = Some(count);
        self
    }

    /// Fetch all matching rows.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let url = self.build_url(true)?;
        debug!(table = %self.table, "select");

        let response = self
            .backend
            .http()
            .get(url)
            .headers(self.backend.rest_headers())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, &self.table).await);
        }

        response.json().await.map_err(Error::from)
    }

    /// Fetch exactly one row; anything else is `NotFound`.
    pub async fn fetch_one<T: DeserializeOwned>(self) -> Result<T> {
        let url = self.build_url(true)?;
        debug!(table = %self.table, "select single");

        let response = self
            .backend
            .http()
            .get(url)
            .headers(self.backend.rest_headers())
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, &self.table).await);
        }

        response.json().await.map_err(Error::from)
    }

    /// Fetch the first matching row, if any.
    pub async fn fetch_optional<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }

    /// Count matching rows without transferring them.
    pub async fn count(self) -> Result<u64> {
        let url = self.build_url(false)?;
        debug!(table = %self.table, "count");

        let response = self
            .backend
            .http()
            .head(url)
            .headers(self.backend.rest_headers())
            .header("Prefer", "count=exact")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, &self.table).await);
        }

        let range = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        parse_content_range(range)
            .ok_or_else(|| Error::Internal(format!("Missing count for table {}", self.table)))
    }

    /// Insert one row and return it as stored.
    pub async fn insert<T: DeserializeOwned>(self, row: &impl Serialize) -> Result<T> {
        self.write(reqwest::Method::POST, "return=representation", row)
            .await
    }

    /// Insert-or-merge one row keyed on `conflict_column`.
    pub async fn upsert<T: DeserializeOwned>(
        mut self,
        conflict_column: &str,
        row: &impl Serialize,
    ) -> Result<T> {
        self.filters
            .push(format!("on_conflict={}", urlencoding::encode(conflict_column)));
        self.write(
            reqwest::Method::POST,
            "resolution=merge-duplicates,return=representation",
            row,
        )
        .await
    }

    /// Patch all matching rows and return them as stored.
    pub async fn update<T: DeserializeOwned>(self, patch: &impl Serialize) -> Result<Vec<T>> {
        let url = self.build_url(true)?;
        debug!(table = %self.table, "update");

        let response = self
            .backend
            .http()
            .patch(url)
            .headers(self.backend.rest_headers())
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, &self.table).await);
        }

        response.json().await.map_err(Error::from)
    }

    /// Delete all matching rows.
    pub async fn delete(self) -> Result<()> {
        let url = self.build_url(false)?;
        debug!(table = %self.table, "delete");

        let response = self
            .backend
            .http()
            .delete(url)
            .headers(self.backend.rest_headers())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, &self.table).await);
        }

        Ok(())
    }

    async fn write<T: DeserializeOwned>(
        self,
        method: reqwest::Method,
        prefer: &str,
        row: &impl Serialize,
    ) -> Result<T> {
        let url = self.build_url(false)?;
        debug!(table = %self.table, %method, "write");

        let response = self
            .backend
            .http()
            .request(method, url)
            .headers(self.backend.rest_headers())
            .header("Prefer", prefer)
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .json(row)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, &self.table).await);
        }

        response.json().await.map_err(Error::from)
    }

    fn build_url(&self, with_select: bool) -> Result<url::Url> {
        let mut url = self.backend.rest_url(&self.table)?;

        let mut parts = Vec::new();
        if with_select {
            parts.push(format!("select={}", urlencoding::encode(&self.select)));
        }
        parts.extend(self.filters.iter().cloned());
        if let Some(ref order) = self.order {
            parts.push(format!("order={}", order));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }

        if !parts.is_empty() {
            url.set_query(Some(&parts.join("&")));
        }

        Ok(url)
    }
}

/// `Content-Range` comes back as `0-9/42` or `*/0`; the figure after the
/// slash is the exact count.
fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    fn backend() -> Backend {
        Backend::new(&BackendConfig::new("https://proj.example.co", "anon")).unwrap()
    }

    #[test]
    fn test_build_url_filters_and_order() {
        let query = backend()
            .from("jokes")
            .eq("user_id", "u-1")
            .order("created_at", Order::Desc);
        let url = query.build_url(true).unwrap();
        assert_eq!(
            url.as_str(),
            "https://proj.example.co/rest/v1/jokes?select=%2A&user_id=eq.u-1&order=created_at.desc"
        );
    }

    #[test]
    fn test_build_url_encodes_values() {
        let query = backend().from("moods").eq("note", "tea & toast");
        let url = query.build_url(false).unwrap();
        assert!(url.as_str().contains("note=eq.tea%20%26%20toast"));
    }

    #[test]
    fn test_parse_content_range() {
        assert_eq!(parse_content_range("0-9/42"), Some(42));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range(""), None);
    }
}
