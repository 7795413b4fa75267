//! Document operations.
//!
//! This module provides the DocumentsClient for uploading documents and
//! fetching them back.

use crate::client::Client;
use crate::error::{Result, SignRequestError};
use crate::types::CreateDocumentResult;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;

/// Client for document operations.
///
/// Access via `client.documents()`.
pub struct DocumentsClient {
    client: Client,
}

impl DocumentsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Upload a document.
    ///
    /// The file is read completely before the request is sent; an unreadable
    /// path fails with [`SignRequestError::FileAccess`] without contacting
    /// the API.
    ///
    /// # Arguments
    ///
    /// * `file` - Path to the file to upload
    /// * `identifier` - Your own reference, stored as `external_id`
    /// * `callback_url` - URL the API posts document events to
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signrequest::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("sr_token_xxxxx", None)?;
    ///
    ///     let document = client
    ///         .documents()
    ///         .create("/srv/contracts/42.pdf", "order-42", Some("https://example.com/hooks/sr"))
    ///         .await?;
    ///     println!("Uploaded document {}", document.uuid);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(
        &self,
        file: impl AsRef<Path>,
        identifier: &str,
        callback_url: Option<&str>,
    ) -> Result<CreateDocumentResult> {
        let path = file.as_ref();
        let contents =
            tokio::fs::read(path)
                .await
                .map_err(|source| SignRequestError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        let mut form = Form::new()
            .part("file", Part::bytes(contents).file_name(file_name))
            .text("external_id", identifier.to_string());
        if let Some(callback_url) = callback_url {
            form = form.text("events_callback_url", callback_url.to_string());
        }

        self.client.post_multipart("documents", form).await
    }

    /// Get a document by ID.
    ///
    /// The document is returned exactly as the API encodes it.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signrequest::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("sr_token_xxxxx", None)?;
    ///
    ///     let document = client.documents().get("abc-123").await?;
    ///     println!("Status: {}", document["status"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get(&self, document_id: &str) -> Result<Value> {
        self.client.get(&format!("documents/{}", document_id)).await
    }
}
