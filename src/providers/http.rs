//! Plumbing shared by the HTTP-backed providers.

use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::error::ProviderError;
use crate::provider::ProviderOutcome;
use crate::Error;

/// Longest slice of an error body kept in a [`ProviderError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Build a client whose every request is bounded by `timeout`.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, Error> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// POST `body` as JSON and return the raw body of a 2xx response.
///
/// Transport failures and non-2xx statuses become [`ProviderError`]s. A
/// request that outlives `timeout` is a [`ProviderError::Timeout`].
pub(crate) async fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    endpoint: &str,
    headers: &[(&'static str, String)],
    body: &T,
    timeout: Duration,
) -> Result<Bytes, ProviderError> {
    let mut request = client
        .post(endpoint)
        .header("Content-Type", "application/json")
        .json(body)
        .timeout(timeout);
    for (name, value) in headers {
        request = request.header(*name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| request_error(e, timeout))?;
    let status = response.status();

    if !status.is_success() {
        let mut error_text = response.text().await.unwrap_or_default();
        if error_text.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|&i| error_text.is_char_boundary(i))
                .unwrap_or(0);
            error_text.truncate(cut);
        }
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body: error_text,
        });
    }

    response.bytes().await.map_err(|e| request_error(e, timeout))
}

fn request_error(err: reqwest::Error, timeout: Duration) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(timeout)
    } else {
        err.into()
    }
}

/// Reject generated text that is empty or only whitespace.
pub(crate) fn non_empty(text: Option<String>, what: &str) -> ProviderOutcome {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(ProviderError::parse(format!("{what} was empty"))),
        None => Err(ProviderError::parse(format!("{what} missing from response"))),
    }
}
