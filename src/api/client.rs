//! Core API client
//!
//! Single choke point for every backend call: bearer credential attachment,
//! envelope unwrapping, error normalization, forced logout on 401, and the
//! tagged query cache. Endpoint definitions (see `endpoints/`) only state
//! paths, parameters, and expected shapes.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, error, warn};
use url::Url;

use crate::api::cache::{QueryCache, ResourceTag, query_key};
use crate::api::envelope::{Payload, unwrap_envelope};
use crate::api::error::{ApiError, Result};
use crate::auth::routes::Route;
use crate::auth::session::SessionStore;
use crate::config::Settings;

/// Client-side navigation seam.
///
/// The API layer forces a jump to the login view when a session expires
/// mid-flight; how that jump happens belongs to the shell hosting the
/// client, not to this layer.
pub trait Navigator: Send + Sync {
    fn current_route(&self) -> Route;
    fn redirect(&self, route: Route);
}

/// Navigator that goes nowhere. Suitable for scripted use where there is no
/// navigation surface to speak of.
#[derive(Debug, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn current_route(&self) -> Route {
        Route::Login
    }

    fn redirect(&self, _route: Route) {}
}

/// Typed, cached, authenticated access to the QuickXPos backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<SessionStore>,
    cache: QueryCache,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        settings: &Settings,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.clone(),
            session,
            cache: QueryCache::new(settings.cache_ttl),
            navigator,
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Network came back after an outage: drop cached data so subscribers
    /// revalidate. There is deliberately no focus-driven counterpart.
    pub fn on_reconnect(&self) {
        self.cache.on_reconnect();
    }

    /// GET through the cache. A fresh entry is served without a network
    /// call; a miss fetches, then retains the payload under `tags`.
    pub async fn get_cached(
        &self,
        path: &str,
        params: &[(String, String)],
        tags: &[ResourceTag],
    ) -> Result<Payload> {
        let key = query_key(path, params);
        if let Some(payload) = self.cache.get(&key) {
            debug!(%path, "serving cached query result");
            return Ok(payload);
        }

        let payload = self.request(Method::GET, path, params, None).await?;
        self.cache.insert(key, payload.clone(), tags);
        Ok(payload)
    }

    /// GET bypassing any cached entry, repopulating it on success. This is
    /// the explicit "refetch" a human triggers from an error state.
    pub async fn get_fresh(
        &self,
        path: &str,
        params: &[(String, String)],
        tags: &[ResourceTag],
    ) -> Result<Payload> {
        self.cache.remove(&query_key(path, params));
        self.get_cached(path, params, tags).await
    }

    /// Uncached GET.
    pub async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Payload> {
        self.request(Method::GET, path, params, None).await
    }

    /// POST a mutation, invalidating `invalidates` tags on success.
    pub async fn post(
        &self,
        path: &str,
        body: Option<Value>,
        invalidates: &[ResourceTag],
    ) -> Result<Payload> {
        let payload = self.request(Method::POST, path, &[], body).await?;
        self.cache.invalidate(invalidates);
        Ok(payload)
    }

    /// PUT a mutation, invalidating `invalidates` tags on success.
    pub async fn put(
        &self,
        path: &str,
        body: Option<Value>,
        invalidates: &[ResourceTag],
    ) -> Result<Payload> {
        let payload = self.request(Method::PUT, path, &[], body).await?;
        self.cache.invalidate(invalidates);
        Ok(payload)
    }

    /// DELETE a resource, invalidating `invalidates` tags on success.
    pub async fn delete(&self, path: &str, invalidates: &[ResourceTag]) -> Result<Payload> {
        let payload = self.request(Method::DELETE, path, &[], None).await?;
        self.cache.invalidate(invalidates);
        Ok(payload)
    }

    /// GET raw bytes (CSV exports). Error responses are normalized the same
    /// way as JSON endpoints.
    pub async fn download(&self, path: &str, params: &[(String, String)]) -> Result<Vec<u8>> {
        let response = self.send(Method::GET, path, params, None).await?;
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(ApiError::Network)?;
            return Ok(bytes.to_vec());
        }
        Err(self.normalize_error(path, status.as_u16(), response).await)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        body: Option<Value>,
    ) -> Result<Payload> {
        let response = self.send(method.clone(), path, params, body).await?;
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(ApiError::Network)?;
            let body = if text.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&text).unwrap_or(Value::String(text))
            };
            return Ok(unwrap_envelope(body));
        }

        Err(self.normalize_error(path, status.as_u16(), response).await)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        body: Option<Value>,
    ) -> Result<reqwest::Response> {
        let url = self.url(path, params)?;
        let mut request = self.http.request(method, url);

        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        request.send().await.map_err(ApiError::Network)
    }

    fn url(&self, path: &str, params: &[(String, String)]) -> Result<Url> {
        // Plain concatenation, as the base URL may itself carry a path
        // prefix that Url::join would discard.
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        let mut url = Url::parse(&joined)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter().map(|(k, v)| (k, v)));
        }
        Ok(url)
    }

    /// Normalize an error response and run the cross-cutting 401 policy.
    ///
    /// An expired session on any endpoint other than the login endpoints
    /// forces a logout and a jump to the login view. Login endpoints are
    /// exempt: a bad password must surface as a form error, not a silent
    /// redirect.
    async fn normalize_error(&self, path: &str, status: u16, response: reqwest::Response) -> ApiError {
        let body = match response.text().await {
            Ok(text) if !text.trim().is_empty() => serde_json::from_str(&text).ok(),
            Ok(_) => None,
            Err(err) => {
                warn!(%path, status, "failed to read error body: {err}");
                None
            }
        };

        if status == 401 && !is_login_path(path) {
            warn!(%path, "session rejected by backend, forcing logout");
            self.session.logout();
            if self.navigator.current_route() != Route::Login {
                self.navigator.redirect(Route::Login);
            }
        }

        let normalized = ApiError::from_response(status, body);
        if status >= 500 {
            error!(%path, status, message = %normalized, "server error");
        }
        normalized
    }
}

fn is_login_path(path: &str) -> bool {
    path.contains("/auth/login")
}
