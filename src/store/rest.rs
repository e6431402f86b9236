//! REST List Store
//!
//! `ListStore` implementation over a PostgREST-style row endpoint, one
//! table per list kind. Filters, ordering and limits travel as query
//! parameters; updated rows come back when `Prefer: return=representation`
//! is set.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;

use super::config::StoreConfig;
use super::traits::ListStore;
use crate::domain::{Group, ListItem, StoreError, StoreResult};

/// PostgREST-backed remote list store
pub struct RestListStore<G> {
    client: Client,
    config: StoreConfig,
    _group: PhantomData<G>,
}

#[derive(Deserialize)]
struct SortOrderRow {
    sort_order: i32,
}

impl<G: Group> RestListStore<G> {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            _group: PhantomData,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, G::TABLE)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }

    async fn send(&self, request: RequestBuilder) -> StoreResult<Response> {
        let response = self
            .authed(request)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            log::warn!("{} request failed with {}", G::TABLE, status);
            Err(StoreError::Unavailable(format!(
                "{} returned {}",
                G::TABLE,
                status
            )))
        }
    }

    async fn rows(response: Response) -> StoreResult<Vec<ListItem<G>>> {
        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn single_row(response: Response) -> StoreResult<ListItem<G>> {
        let mut rows = Self::rows(response).await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound(format!("no matching {} row", G::TABLE)));
        }
        Ok(rows.swap_remove(0))
    }

    /// PATCH the given columns of one row and return the updated row
    async fn patch_row(&self, id: i64, body: serde_json::Value) -> StoreResult<ListItem<G>> {
        let request = self
            .client
            .patch(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&body);
        Self::single_row(self.send(request).await?).await
    }
}

#[async_trait]
impl<G: Group> ListStore<G> for RestListStore<G> {
    async fn fetch_all(&self) -> StoreResult<Vec<ListItem<G>>> {
        let request = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "owner.asc,sort_order.asc")]);
        Self::rows(self.send(request).await?).await
    }

    async fn fetch_by_id(&self, id: i64) -> StoreResult<ListItem<G>> {
        let request = self
            .client
            .get(self.table_url())
            .query(&[("select", "*".to_string()), ("id", format!("eq.{}", id))]);
        Self::single_row(self.send(request).await?).await
    }

    async fn max_order(&self, group: G) -> StoreResult<Option<i32>> {
        let request = self.client.get(self.table_url()).query(&[
            ("select", "sort_order".to_string()),
            ("owner", format!("eq.{}", group.as_str())),
            ("order", "sort_order.desc".to_string()),
            ("limit", "1".to_string()),
        ]);
        let rows: Vec<SortOrderRow> = self
            .send(request)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(rows.first().map(|row| row.sort_order))
    }

    async fn insert(&self, text: &str, group: G, order: i32) -> StoreResult<ListItem<G>> {
        let request = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&json!({
                "text": text,
                "owner": group,
                "sort_order": order,
                "is_checked": false,
            }));
        Self::single_row(self.send(request).await?).await
    }

    async fn set_checked(&self, id: i64, checked: bool) -> StoreResult<ListItem<G>> {
        self.patch_row(id, json!({ "is_checked": checked })).await
    }

    async fn set_text(&self, id: i64, text: &str) -> StoreResult<ListItem<G>> {
        self.patch_row(id, json!({ "text": text })).await
    }

    async fn set_position(&self, id: i64, group: G, order: i32) -> StoreResult<ListItem<G>> {
        self.patch_row(id, json!({ "owner": group, "sort_order": order }))
            .await
    }

    async fn set_order(&self, id: i64, order: i32) -> StoreResult<()> {
        let request = self
            .client
            .patch(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .json(&json!({ "sort_order": order }));
        self.send(request).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let request = self
            .client
            .delete(self.table_url())
            .query(&[("id", format!("eq.{}", id))]);
        self.send(request).await?;
        Ok(())
    }
}
