//! REST client for the gym API.
//!
//! Every success body is wrapped as `{"data": ...}`; error bodies are
//! `{"error": ..., "code": ...}` and surface as [`ClientError::Api`].

use std::marker::PhantomData;

use gym_core::billing::BillingQuote;
use gym_core::listing::{Page, MAX_PAGE_SIZE};
use gym_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Credentials returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// HTTP client for one gym API server.
#[derive(Debug, Clone)]
pub struct GymClient {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GymClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            api_url: format!("{}/api/v1", base_url.trim_end_matches('/')),
            token: None,
        }
    }

    /// Attach a bearer token obtained elsewhere.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Log in and keep the returned access token for later requests.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Session, ClientError> {
        let resp = self
            .client
            .post(format!("{}/auth/login", self.api_url))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;

        let session: Session = parse_response(resp).await?;
        self.token = Some(session.access_token.clone());
        tracing::debug!(username, "Logged in");
        Ok(session)
    }

    /// Price a plan with the discount and tax exactly as typed into the form.
    pub async fn quote(
        &self,
        plan: &str,
        discount: &str,
        tax_percent: &str,
    ) -> Result<BillingQuote, ClientError> {
        let builder = self
            .client
            .post(format!("{}/billing/quote", self.api_url))
            .json(&serde_json::json!({
                "plan": plan,
                "discount": discount,
                "tax_percent": tax_percent,
            }));
        let resp = authorize(builder, self.token.as_deref()).send().await?;
        parse_data(resp).await
    }

    /// Typed access to the collection mounted at `/api/v1/{path}`.
    pub fn collection<T, I>(&self, path: &str) -> CollectionApi<T, I> {
        CollectionApi {
            client: self.client.clone(),
            url: format!("{}/{}", self.api_url, path.trim_matches('/')),
            token: self.token.clone(),
            _rows: PhantomData,
        }
    }
}

/// CRUD over one collection endpoint, with rows of type `T` and write
/// bodies of type `I`.
#[derive(Debug, Clone)]
pub struct CollectionApi<T, I> {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
    _rows: PhantomData<fn() -> (T, I)>,
}

impl<T, I> CollectionApi<T, I>
where
    T: DeserializeOwned,
    I: Serialize,
{
    /// `GET /{path}?search=&page=&page_size=`.
    pub async fn list_page(
        &self,
        search: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Page<T>, ClientError> {
        let builder = self.client.get(&self.url).query(&[
            ("search", search.to_string()),
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ]);
        let resp = authorize(builder, self.token.as_deref()).send().await?;
        parse_data(resp).await
    }

    /// Every row of the collection, fetched a page at a time.
    pub async fn list_all(&self) -> Result<Vec<T>, ClientError> {
        let mut rows = Vec::new();
        let mut page = 0;
        loop {
            let batch = self.list_page("", page, MAX_PAGE_SIZE).await?;
            let done = batch.items.is_empty() || rows.len() + batch.items.len() >= batch.total;
            rows.extend(batch.items);
            if done {
                return Ok(rows);
            }
            page += 1;
        }
    }

    /// `GET /{path}/{id}`.
    pub async fn get(&self, id: DbId) -> Result<T, ClientError> {
        let builder = self.client.get(format!("{}/{id}", self.url));
        let resp = authorize(builder, self.token.as_deref()).send().await?;
        parse_data(resp).await
    }

    /// `POST /{path}`.
    pub async fn create(&self, input: &I) -> Result<T, ClientError> {
        let builder = self.client.post(&self.url).json(input);
        let resp = authorize(builder, self.token.as_deref()).send().await?;
        parse_data(resp).await
    }

    /// `PUT /{path}/{id}` with the full record.
    pub async fn replace(&self, id: DbId, input: &I) -> Result<T, ClientError> {
        let builder = self.client.put(format!("{}/{id}", self.url)).json(input);
        let resp = authorize(builder, self.token.as_deref()).send().await?;
        parse_data(resp).await
    }

    /// `DELETE /{path}/{id}`.
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let builder = self.client.delete(format!("{}/{id}", self.url));
        let resp = authorize(builder, self.token.as_deref()).send().await?;
        check_status(resp).await
    }
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn authorize(builder: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Return the response if its status is 2xx, otherwise an API error
/// carrying the status and body text.
async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    Err(ClientError::from_response(status.as_u16(), body))
}

async fn parse_response<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ClientError> {
    let resp = ensure_success(resp).await?;
    Ok(resp.json().await?)
}

/// Unwrap the `{"data": ...}` envelope.
async fn parse_data<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ClientError> {
    let envelope: DataEnvelope<R> = parse_response(resp).await?;
    Ok(envelope.data)
}

async fn check_status(resp: reqwest::Response) -> Result<(), ClientError> {
    ensure_success(resp).await?;
    Ok(())
}
