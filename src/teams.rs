//! Team management operations.

use crate::client::Client;
use crate::error::{Result, SignRequestError};
use serde::{Deserialize, Serialize};

/// Client for team operations.
///
/// Access via `client.teams()`.
pub struct TeamsClient {
    client: Client,
}

impl TeamsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new team.
    ///
    /// Returns the subdomain the API assigned to the team, which can be
    /// passed to [`Client::new`] to scope later requests to it.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the team
    /// * `subdomain` - Requested subdomain slug
    /// * `callback_url` - URL the API posts team events to
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
    ///     let subdomain = client.teams().create("Acme", "acme", None).await?;
    ///     let _team_client = Client::new("sr_token_xxxxx", Some(subdomain.as_str()))?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(
        &self,
        name: &str,
        subdomain: &str,
        callback_url: Option<&str>,
    ) -> Result<String> {
        #[derive(Serialize)]
        struct Request<'a> {
            name: &'a str,
            subdomain: &'a str,
            events_callback_url: Option<&'a str>,
        }

        #[derive(Deserialize)]
        struct Response {
            subdomain: String,
        }

        let request = Request {
            name,
            subdomain,
            events_callback_url: callback_url,
        };

        let response: Response = self
            .client
            .post("teams", &request)
            .await
            .map_err(|e| team_error(name, e))?;

        Ok(response.subdomain)
    }
}

/// Name the team in API errors; other errors pass through untouched.
fn team_error(name: &str, error: SignRequestError) -> SignRequestError {
    match error {
        SignRequestError::Api {
            status_code, body, ..
        } => SignRequestError::Api {
            message: format!("Unable to create team {}", name),
            status_code,
            body,
        },
        other => other,
    }
}
