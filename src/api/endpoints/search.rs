//! Advanced search endpoints.

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::error::Result;

fn search_params(query: &str, page: u32, limit: u32) -> Vec<(String, String)> {
    vec![
        ("query".to_string(), query.to_string()),
        ("page".to_string(), page.to_string()),
        ("limit".to_string(), limit.to_string()),
    ]
}

impl ApiClient {
    /// GET /api/search/salons
    pub async fn search_salons(&self, query: &str, page: u32, limit: u32) -> Result<Value> {
        self.search("salons", query, page, limit).await
    }

    /// GET /api/search/resellers
    pub async fn search_resellers(&self, query: &str, page: u32, limit: u32) -> Result<Value> {
        self.search("resellers", query, page, limit).await
    }

    /// GET /api/search/licenses
    pub async fn search_licenses(&self, query: &str, page: u32, limit: u32) -> Result<Value> {
        self.search("licenses", query, page, limit).await
    }

    /// GET /api/search/global
    pub async fn search_global(&self, query: &str, page: u32, limit: u32) -> Result<Value> {
        self.search("global", query, page, limit).await
    }

    // Search results are never cached; each keystroke-driven query is fresh.
    async fn search(&self, scope: &str, query: &str, page: u32, limit: u32) -> Result<Value> {
        let payload = self
            .get(
                &format!("/api/search/{scope}"),
                &search_params(query, page, limit),
            )
            .await?;
        Ok(payload.pick("results").data)
    }
}
