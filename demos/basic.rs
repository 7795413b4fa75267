//! Basic usage example for the SignRequest SDK.
//!
//! This example demonstrates:
//! - Creating a client
//! - Uploading a document
//! - Sending it out for signing
//! - Fetching the document back
//!
//! Run with:
//! ```bash
//! SIGNREQUEST_TOKEN=xxx DOCUMENT_PATH=/tmp/contract.pdf \
//!     SENDER_EMAIL=me@example.com SIGNER_EMAIL=you@example.com \
//!     RUST_LOG=signrequest=debug cargo run --example basic
//! ```
//!
//! Set `SIGNREQUEST_SUBDOMAIN` to scope the requests to a team.

use signrequest::{Client, SendSignRequest, Signer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = std::env::var("SIGNREQUEST_TOKEN")
        .expect("SIGNREQUEST_TOKEN environment variable required");
    let subdomain = std::env::var("SIGNREQUEST_SUBDOMAIN").ok();
    let document_path =
        std::env::var("DOCUMENT_PATH").expect("DOCUMENT_PATH environment variable required");
    let sender = std::env::var("SENDER_EMAIL").expect("SENDER_EMAIL environment variable required");
    let signer = std::env::var("SIGNER_EMAIL").expect("SIGNER_EMAIL environment variable required");

    println!("Creating SignRequest client...");
    let client = Client::new(&token, subdomain.as_deref())?;

    println!("\nUploading {}...", document_path);
    let document = client
        .documents()
        .create(&document_path, "basic-example", None)
        .await?;
    println!("Uploaded document:");
    println!("  UUID:   {}", document.uuid);
    println!("  Name:   {}", document.name.as_deref().unwrap_or("-"));
    println!("  Status: {}", document.status.as_deref().unwrap_or("-"));

    println!("\nSending sign request to {}...", signer);
    let request = SendSignRequest::new(document.uuid.clone(), sender, vec![Signer::new(signer)])
        .with_message("Please sign this document.");
    let sign_request_id = client.signrequests().send(request).await?;
    println!("Sign request: {}", sign_request_id);

    println!("\nFetching document...");
    let view = client.documents().get(&document.uuid).await?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    println!("\nDone!");
    Ok(())
}
