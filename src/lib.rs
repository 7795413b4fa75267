//! # SignRequest Rust SDK
//!
//! Rust client for the [SignRequest](https://signrequest.com) document
//! e-signature API: upload documents, send them out for signing, fetch them
//! back and create teams.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signrequest::{Client, SendSignRequest, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client with your API token, optionally scoped to a team
//!     let client = Client::new("sr_token_xxxxx", Some("acme"))?;
//!
//!     // Upload a document
//!     let document = client
//!         .documents()
//!         .create("/srv/contracts/42.pdf", "order-42", None)
//!         .await?;
//!
//!     // Ask two people to sign it
//!     let request = SendSignRequest::new(
//!         document.uuid.clone(),
//!         "sales@example.com",
//!         vec![
//!             Signer::new("customer@example.com"),
//!             Signer::new("partner@example.com").with_language("en"),
//!         ],
//!     );
//!     let sign_request_id = client.signrequests().send(request).await?;
//!     println!("Sent sign request {}", sign_request_id);
//!
//!     // Check on the document later
//!     let view = client.documents().get(&document.uuid).await?;
//!     println!("Document status: {}", view["status"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Signer language
//!
//! Signers that do not declare a `language` get one filled in when the sign
//! request is sent: the request's `default_language` if set, otherwise the
//! client's [`ClientConfig::default_language`] (`"nl"` unless configured).
//!
//! ## Error Handling
//!
//! All operations return `Result<T, SignRequestError>`. Only status codes
//! `200..=209` count as success:
//!
//! ```rust,no_run
//! use signrequest::{Client, SignRequestError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), SignRequestError> {
//!     let client = Client::new("sr_token_xxxxx", None)?;
//!
//!     match client.documents().get("abc-123").await {
//!         Ok(document) => println!("Found {}", document["uuid"]),
//!         Err(e) if e.is_auth_error() => println!("Invalid API token"),
//!         Err(SignRequestError::Api { status_code, body, .. }) => {
//!             println!("API said {}: {}", status_code, body)
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Requests and responses are reported through `tracing` at debug level,
//! failed status checks at warn level. Install any subscriber to see them.

pub mod client;
pub mod documents;
pub mod error;
pub mod signrequests;
pub mod teams;
pub mod types;

// Re-export main types at the crate root
pub use client::{API_BASE_URL, Client, ClientConfig, DEFAULT_LANGUAGE, has_errors};
pub use error::{Result, SignRequestError};

pub use types::{CreateDocumentResult, SendSignRequest, Signer};
