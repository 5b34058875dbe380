//! Shared HTTP client: base URL, bearer token, request/decode helpers.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Typed client for the Linkrise backend.
///
/// Cheap to construct per call site; holds no connection state of its own
/// beyond the underlying `reqwest` pool.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Client against the default backend location.
    ///
    /// On the web this is `<origin>/api`; natively it falls back to a local
    /// development backend.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: default_base_url(),
            token: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach the session token; sent as a bearer header on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST with a body, discarding any response payload.
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(())
    }
}

/// `reqwest` needs absolute URLs on every platform, so the web default is
/// derived from the window origin rather than hardcoded.
fn default_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return format!("{origin}/api");
        }
    }
    "http://localhost:8080/api".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_base_url_override() {
        let client = Client::new().with_base_url("https://api.linkrise.io/v1");
        assert_eq!(client.base_url(), "https://api.linkrise.io/v1");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(500), ApiError::Status(500));
        assert_eq!(ApiError::from_status(404), ApiError::Status(404));
    }
}
