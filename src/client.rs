//! SignRequest API client.
//!
//! The main entry point for interacting with the SignRequest REST API.

use crate::documents::DocumentsClient;
use crate::error::{DEFAULT_API_ERROR_MESSAGE, Result, SignRequestError};
use crate::signrequests::SignRequestsClient;
use crate::teams::TeamsClient;
use reqwest::multipart::Form;
use reqwest::{Client as HttpClient, Method, RequestBuilder, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL of the SignRequest API.
pub const API_BASE_URL: &str = "https://signrequest.com/api/v1";

/// Language given to signers that declare none.
pub const DEFAULT_LANGUAGE: &str = "nl";

/// SignRequest API client.
///
/// Holds the API token and, optionally, the subdomain of the team every
/// request is scoped to. No connection is opened until the first call.
///
/// # Example
///
/// ```rust,no_run
/// use signrequest::{Client, SendSignRequest, Signer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("sr_token_xxxxx", None)?;
///
///     let document = client
///         .documents()
///         .create("/tmp/contract.pdf", "order-42", None)
///         .await?;
///
///     let request = SendSignRequest::new(
///         document.uuid,
///         "sales@example.com",
///         vec![Signer::new("customer@example.com")],
///     );
///     let sign_request_id = client.signrequests().send(request).await?;
///     println!("Sign request: {}", sign_request_id);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    token: String,
    subdomain: Option<String>,
    default_language: String,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API (default: https://signrequest.com/api/v1).
    pub base_url: Option<String>,
    /// Request timeout (default: none, the transport decides).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// Language for signers that declare none (default: "nl").
    pub default_language: Option<String>,
}

impl Client {
    /// Create a new SignRequest client with default configuration.
    ///
    /// # Arguments
    ///
    /// * `token` - Your SignRequest API token
    /// * `subdomain` - Team subdomain to scope requests to, if any
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signrequest::Client;
    ///
    /// let personal = Client::new("sr_token_xxxxx", None)?;
    /// let team = Client::new("sr_token_xxxxx", Some("acme"))?;
    /// # Ok::<(), signrequest::SignRequestError>(())
    /// ```
    pub fn new(token: impl Into<String>, subdomain: Option<&str>) -> Result<Self> {
        Self::with_config(token, subdomain, ClientConfig::default())
    }

    /// Create a new SignRequest client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signrequest::{Client, ClientConfig};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("sr_token_xxxxx", Some("acme"), ClientConfig {
    ///     timeout: Some(Duration::from_secs(60)),
    ///     default_language: Some("en".to_string()),
    ///     ..Default::default()
    /// })?;
    /// # Ok::<(), signrequest::SignRequestError>(())
    /// ```
    pub fn with_config(
        token: impl Into<String>,
        subdomain: Option<&str>,
        config: ClientConfig,
    ) -> Result<Self> {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("signrequest-rust/{}", env!("CARGO_PKG_VERSION")));

        let mut builder = HttpClient::builder().user_agent(user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            token: token.into(),
            subdomain: subdomain.map(str::to_string),
            default_language: config
                .default_language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the team subdomain requests are scoped to.
    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }

    /// Get the language given to signers that declare none.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Get the documents client for uploading and fetching documents.
    pub fn documents(&self) -> DocumentsClient {
        DocumentsClient::new(self.clone())
    }

    /// Get the sign requests client.
    pub fn signrequests(&self) -> SignRequestsClient {
        SignRequestsClient::new(self.clone())
    }

    /// Get the teams client.
    pub fn teams(&self) -> TeamsClient {
        TeamsClient::new(self.clone())
    }

    /// API URL of a document, as referenced from sign requests.
    pub(crate) fn document_url(&self, document_id: &str) -> String {
        format!("{}/documents/{}/", self.base_url, document_id)
    }

    /// Make an authenticated GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, action: &str) -> Result<T> {
        let request = self.with_subdomain_query(self.request(Method::GET, action));
        self.execute(request).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, action: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize,
    {
        let request = self
            .with_subdomain_query(self.request(Method::POST, action))
            .json(body);
        self.execute(request).await
    }

    /// Make an authenticated multipart POST request.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        action: &str,
        form: Form,
    ) -> Result<T> {
        let form = match &self.subdomain {
            Some(subdomain) => form.text("subdomain", subdomain.clone()),
            None => form,
        };
        let request = self.request(Method::POST, action).multipart(form);
        self.execute(request).await
    }

    fn request(&self, method: Method, action: &str) -> RequestBuilder {
        let url = format!("{}/{}/", self.base_url, action);
        debug!(
            method = method.as_str(),
            action,
            subdomain = self.subdomain.is_some(),
            "Sending SignRequest API request"
        );

        self.http
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Token {}", self.token))
    }

    fn with_subdomain_query(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.subdomain {
            Some(subdomain) => request.query(&[("subdomain", subdomain)]),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;
        debug!(status_code, "Received SignRequest API response");

        if has_errors(status_code) {
            warn!(status_code, "SignRequest API request failed");
            return Err(SignRequestError::Api {
                message: DEFAULT_API_ERROR_MESSAGE.to_string(),
                status_code,
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Check a response status code for errors.
///
/// Only `200..=209` count as success; anything else, including the rest of
/// the 2xx range, is an error.
pub fn has_errors(status_code: u16) -> bool {
    !(200..=209).contains(&status_code)
}
