//! Sign request operations.
//!
//! This module provides the SignRequestsClient for asking signers to sign
//! an uploaded document.

use crate::client::Client;
use crate::error::Result;
use crate::types::{SendSignRequest, Signer};
use serde::{Deserialize, Serialize};

/// Client for sign request operations.
///
/// Access via `client.signrequests()`.
pub struct SignRequestsClient {
    client: Client,
}

impl SignRequestsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Send a sign request for an uploaded document.
    ///
    /// Signers without a `language` get the request's `default_language`,
    /// or the client's configured default when the request sets none.
    /// Returns the identifier of the created sign request.
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
    ///     let request = SendSignRequest::new(
    ///         "abc-123",
    ///         "sales@example.com",
    ///         vec![
    ///             Signer::new("a@example.com"),
    ///             Signer::new("b@example.com").with_language("en"),
    ///         ],
    ///     )
    ///     .with_message("Please sign the attached contract.");
    ///
    ///     let uuid = client.signrequests().send(request).await?;
    ///     println!("Sign request {}", uuid);
    ///     Ok(())
    /// }
    /// ```
    pub async fn send(&self, request: SendSignRequest) -> Result<String> {
        #[derive(Serialize)]
        struct ApiRequest<'a> {
            document: String,
            from_email: &'a str,
            message: Option<&'a str>,
            signers: &'a [Signer],
        }

        #[derive(Deserialize)]
        struct Response {
            uuid: String,
        }

        let SendSignRequest {
            document_id,
            from_email,
            message,
            mut signers,
            default_language,
        } = request;

        let language = default_language
            .as_deref()
            .unwrap_or(self.client.default_language());
        for signer in &mut signers {
            signer.fill_language(language);
        }

        let api_request = ApiRequest {
            document: self.client.document_url(&document_id),
            from_email: &from_email,
            message: message.as_deref(),
            signers: &signers,
        };

        let response: Response = self.client.post("signrequests", &api_request).await?;
        Ok(response.uuid)
    }
}
