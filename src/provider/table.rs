//! Table operations (`/rest/v1/<table>`)
//!
//! Ownership filtering is the provider's row-level security; nothing here checks `user_id`.

use reqwest::{header::ACCEPT, Method, RequestBuilder};
use serde_json::{Map, Value};
use tracing::debug;

use crate::provider::client::{read_json, ScopedClient};
use crate::provider::error::ProviderResult;

/// Ask for exactly one row; zero or many is rejected by the provider (406)
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const PREFER_HEADER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

fn id_filter(id: &str) -> String {
    format!("eq.{}", id)
}

impl ScopedClient<'_> {
    fn single(&self, method: Method) -> RequestBuilder {
        self.request(method, &self.table_url())
            .header(ACCEPT, SINGLE_OBJECT)
    }

    fn single_returning(&self, method: Method) -> RequestBuilder {
        self.single(method)
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
    }

    /// All visible rows, newest first
    pub async fn list(&self) -> ProviderResult<Vec<Value>> {
        debug!("listing lesson plans");
        let response = self
            .request(Method::GET, &self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        read_json(response).await
    }

    pub async fn get(&self, id: &str) -> ProviderResult<Value> {
        debug!(id, "fetching lesson plan");
        let response = self
            .single(Method::GET)
            .query(&[("select", "*".to_string()), ("id", id_filter(id))])
            .send()
            .await?;

        read_json(response).await
    }

    pub async fn insert(&self, record: &Map<String, Value>) -> ProviderResult<Value> {
        debug!("inserting lesson plan");
        let response = self
            .single_returning(Method::POST)
            .json(record)
            .send()
            .await?;

        read_json(response).await
    }

    pub async fn update(&self, id: &str, changes: &Map<String, Value>) -> ProviderResult<Value> {
        debug!(id, "updating lesson plan");
        let response = self
            .single_returning(Method::PATCH)
            .query(&[("id", id_filter(id))])
            .json(changes)
            .send()
            .await?;

        read_json(response).await
    }

    /// A delete that removes nothing (absent, or hidden by the access policy) is an error.
    pub async fn delete(&self, id: &str) -> ProviderResult<()> {
        debug!(id, "deleting lesson plan");
        let response = self
            .single_returning(Method::DELETE)
            .query(&[("id", id_filter(id))])
            .send()
            .await?;

        let _deleted: Value = read_json(response).await?;
        Ok(())
    }
}
