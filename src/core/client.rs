use crate::core::deals::DealHandler;
use crate::core::payments::PaymentHandler;
use crate::core::payouts::PayoutHandler;
use crate::core::receipts::ReceiptHandler;
use crate::core::refunds::RefundHandler;
use crate::core::settings::SettingsHandler;
use crate::domain::api_error::ApiError;
use crate::domain::ports::{CredentialsProvider, DEFAULT_BASE_URL};
use crate::utils::error::{Result, YooKassaError};
use crate::utils::validation::{validate_non_empty_string, validate_path_segment, validate_url};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use url::Url;
use uuid::Uuid;

pub const IDEMPOTENCE_KEY_HEADER: &str = "Idempotence-Key";

/// Authenticated connection to the YooKassa API.
///
/// Every resource handler sends its requests through [`Client`]: the URL is
/// the base URL joined with the endpoint, requests carry Basic auth with the
/// shop id and secret key, and `POST`s additionally carry a JSON body and an
/// `Idempotence-Key`. Responses with any status other than 200 are decoded into
/// [`ApiError`] and returned as [`YooKassaError::ApiError`].
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    account_id: String,
    secret_key: String,
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("account_id", &self.account_id)
            .field("secret_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Client {
    pub fn new(account_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            account_id: account_id.into(),
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn from_config<C: CredentialsProvider>(config: &C) -> Result<Self> {
        validate_non_empty_string("account_id", config.account_id())?;
        validate_non_empty_string("secret_key", config.secret_key())?;
        validate_url("base_url", config.base_url())?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent.to_string());
        }

        Ok(Self::new(config.account_id(), config.secret_key())
            .with_http_client(builder.build()?)
            .with_base_url(config.base_url()))
    }

    /// Points the client at another API root, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn payments(&self) -> PaymentHandler<'_> {
        PaymentHandler::new(self)
    }

    pub fn payouts(&self) -> PayoutHandler<'_> {
        PayoutHandler::new(self)
    }

    pub fn refunds(&self) -> RefundHandler<'_> {
        RefundHandler::new(self)
    }

    pub fn deals(&self) -> DealHandler<'_> {
        DealHandler::new(self)
    }

    pub fn receipts(&self) -> ReceiptHandler<'_> {
        ReceiptHandler::new(self)
    }

    pub fn settings(&self) -> SettingsHandler<'_> {
        SettingsHandler::new(self)
    }

    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(endpoint.trim_start_matches('/'))?)
    }

    /// Starts a request with URL, auth and, for `POST`, the JSON content type
    /// and idempotency key already set. A missing or empty key is replaced by
    /// a fresh UUID v4.
    pub(crate) fn request(
        &self,
        method: Method,
        endpoint: &str,
        idempotency_key: Option<&str>,
    ) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        let is_post = method == Method::POST;

        let mut request = self
            .http
            .request(method, url)
            .basic_auth(&self.account_id, Some(&self.secret_key));

        if is_post {
            let key = match idempotency_key {
                Some(key) if !key.is_empty() => key.to_string(),
                _ => Uuid::new_v4().to_string(),
            };
            request = request
                .header(CONTENT_TYPE, "application/json")
                .header(IDEMPOTENCE_KEY_HEADER, key);
        }

        Ok(request)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let request = self.request(Method::GET, endpoint, None)?;
        self.execute(request).await
    }

    pub(crate) async fn get_with_params<T, Q>(&self, endpoint: &str, params: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, endpoint, None)?.query(params);
        self.execute(request).await
    }

    pub(crate) async fn post<T, B>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        idempotency_key: Option<&str>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.request(Method::POST, endpoint, idempotency_key)?;
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = request.build()?;
        tracing::debug!("Making API request: {} {}", request.method(), request.url());

        let response = self.http.execute(request).await?;
        decode_response(response).await
    }
}

/// Builds `collection/id[/action]` with the id percent-encoded as exactly one
/// path segment. Ids that could still move the request elsewhere are refused.
pub(crate) fn resource_path(collection: &str, id: &str, action: Option<&str>) -> Result<String> {
    validate_path_segment(&format!("{} id", collection), id)?;

    let mut url = Url::parse("http://resource/")?;
    url.path_segments_mut()
        .map_err(|_| YooKassaError::validation("cannot build a resource path"))?
        .pop_if_empty()
        .push(collection)
        .push(id)
        .extend(action);

    Ok(url.path().trim_start_matches('/').to_string())
}

pub(crate) async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    tracing::debug!("API response status: {}", status);

    let body = response.bytes().await?;

    // only 200 carries a resource; anything else is an error payload
    if status != StatusCode::OK {
        let error: ApiError = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Undecodable error body for status {}: {}", status, e);
            YooKassaError::SerializationError(e)
        })?;
        tracing::warn!(
            "API request rejected with status {}: {} (request id {})",
            status,
            error,
            error.id
        );
        return Err(YooKassaError::ApiError {
            status: status.as_u16(),
            error,
        });
    }

    Ok(serde_json::from_slice(&body)?)
}
