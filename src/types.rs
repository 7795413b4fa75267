//! Type definitions for the SignRequest SDK.
//!
//! Request payloads and the typed projections of API responses. Shapes the
//! API owns but this crate does not model (documents returned by
//! `documents().get`) are passed through as `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of uploading a document.
///
/// Only `uuid` is required; every other field of the raw response is kept,
/// either in one of the optional typed fields or in `extra`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateDocumentResult {
    /// Service-side document identifier.
    pub uuid: String,
    /// API URL of the document.
    #[serde(default)]
    pub url: Option<String>,
    /// Identifier supplied by the caller at upload time.
    #[serde(default)]
    pub external_id: Option<String>,
    /// Document name, usually the uploaded file name.
    #[serde(default)]
    pub name: Option<String>,
    /// Document status code (e.g. "co" for converting).
    #[serde(default)]
    pub status: Option<String>,
    /// Remaining response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateDocumentResult {
    /// Look up any response field by name.
    ///
    /// Typed fields resolve too; an optional typed field that was missing or
    /// `null` in the response yields `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        let typed = match key {
            "uuid" => return Some(Value::from(self.uuid.as_str())),
            "url" => &self.url,
            "external_id" => &self.external_id,
            "name" => &self.name,
            "status" => &self.status,
            _ => return self.extra.get(key).cloned(),
        };
        typed.as_deref().map(Value::from)
    }
}

/// A party asked to sign a document.
///
/// Any field the API accepts beyond `email` and `language` (`first_name`,
/// `order`, `needs_to_sign`, ...) goes into `extra` and is sent verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Signer {
    /// Signer email address.
    pub email: String,
    /// Language used for correspondence with this signer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Additional signer fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Signer {
    /// Create a signer with only an email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Set the correspondence language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set an additional signer field.
    ///
    /// `email` and `language` land in their typed fields so the signer never
    /// serializes either key twice. A non-string `email` is ignored, as is a
    /// `language` that is neither a string nor `null`.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == "email" {
            if let Value::String(email) = value {
                self.email = email;
            }
        } else if key == "language" {
            match value {
                Value::String(language) => self.language = Some(language),
                Value::Null => self.language = None,
                _ => {}
            }
        } else {
            self.extra.insert(key, value);
        }
        self
    }

    /// Fill in `language` unless the signer already declares one. An
    /// explicit `null` language counts as undeclared.
    pub(crate) fn fill_language(&mut self, language: &str) {
        if self.language.is_none() {
            self.extra.remove("language");
            self.language = Some(language.to_string());
        }
    }
}

/// Request to send a sign request for an uploaded document.
#[derive(Debug, Clone, Default)]
pub struct SendSignRequest {
    /// Identifier of a previously uploaded document.
    pub document_id: String,
    /// Email address the request is sent from.
    pub from_email: String,
    /// Optional message shown to the signers.
    pub message: Option<String>,
    /// Signers, in order.
    pub signers: Vec<Signer>,
    /// Language for signers that declare none. Falls back to the client's
    /// configured default when unset.
    pub default_language: Option<String>,
}

impl SendSignRequest {
    /// Create a request without a message.
    pub fn new(
        document_id: impl Into<String>,
        from_email: impl Into<String>,
        signers: Vec<Signer>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            from_email: from_email.into(),
            signers,
            ..Default::default()
        }
    }

    /// Attach a message for the signers.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Override the default signer language for this request only.
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }
}
