//! Request issuing and response decoding for the fact-check endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, GENERIC_FAILURE};

/// Default backend base URL when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Request body for `POST /fact-check`.
#[derive(Debug, Serialize)]
struct ClaimRequest<'a> {
    claim: &'a str,
}

/// A completed verification from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verification {
    /// Backend-determined classification of the claim, e.g. "True" or
    /// "False".
    pub verdict: String,
    /// Prose explanation of the verdict.
    #[serde(default)]
    pub justification: String,
    /// Source links supporting the verdict, in backend order. A missing
    /// field decodes as an empty list.
    #[serde(default, rename = "evidence_used")]
    pub evidence_urls: Vec<String>,
}

impl Verification {
    /// Whether the verdict is the affirming literal "True".
    pub fn is_true(&self) -> bool {
        self.verdict == "True"
    }
}

/// Error detail carried by non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: String,
}

/// Client for the fact-check backend.
#[derive(Debug, Clone)]
pub struct FactCheckClient {
    http: reqwest::Client,
    base_url: String,
}

impl FactCheckClient {
    /// Create a client targeting the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http: reqwest::Client::new(), base_url }
    }

    /// Submit a claim for verification.
    ///
    /// Issues exactly one `POST /fact-check` request and decodes the
    /// response. The claim is sent as-is; trimming is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for transport failures, backend rejections,
    /// and undecodable bodies.
    pub async fn verify(&self, claim: &str) -> Result<Verification, ClientError> {
        let url = format!("{}/fact-check", self.base_url);
        tracing::debug!(url = %url, "submitting claim for verification");

        let response = self.http.post(&url).json(&ClaimRequest { claim }).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        let outcome = decode_response(status, &body);
        match &outcome {
            Ok(verification) => {
                tracing::debug!(
                    verdict = %verification.verdict,
                    evidence = verification.evidence_urls.len(),
                    "verification resolved"
                );
            },
            Err(error) => tracing::debug!(status, %error, "verification failed"),
        }
        outcome
    }

    /// Backend base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Decode a raw `(status, body)` pair into a verification or a normalized
/// error.
///
/// Non-success statuses use the body's `detail` field as the message when it
/// is present and non-blank, else [`GENERIC_FAILURE`]. Success bodies that do
/// not decode as a verification are a [`ClientError::Decode`].
///
/// # Errors
///
/// Returns [`ClientError::Backend`] for non-2xx statuses and
/// [`ClientError::Decode`] for undecodable success bodies.
pub fn decode_response(status: u16, body: &str) -> Result<Verification, ClientError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|error_body| error_body.detail)
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(ClientError::Backend { status, message });
    }

    serde_json::from_str(body).map_err(|decode_error| ClientError::Decode(decode_error.to_string()))
}
