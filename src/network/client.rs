//! HTTP client wrapper - posts prompts and decodes generation results

use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};

use crate::messages::NetworkResponse;
use crate::models::{BackendError, GenerationRequest, GenerationResult};

/// Create an HTTP client, with a request timeout only when one is configured
pub fn create_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

/// POST the request and decode the body.
///
/// Every failure mode is folded into an error; the caller only needs to know
/// that it failed and why, for the log.
async fn post_generate(
    client: &reqwest::Client,
    endpoint: &str,
    request: &GenerationRequest,
) -> Result<(u16, GenerationResult), (Option<u16>, anyhow::Error)> {
    let resp = client
        .post(endpoint)
        .json(request)
        .send()
        .await
        .map_err(|e| (None, describe_transport_error(e)))?;

    let status = resp.status();
    let code = status.as_u16();
    let body = resp
        .text()
        .await
        .map_err(|e| (Some(code), anyhow!("Error reading body: {}", e)))?;

    if !status.is_success() {
        let detail = serde_json::from_str::<BackendError>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        return Err((Some(code), anyhow!("Server returned {}: {}", status, detail)));
    }

    let result = serde_json::from_str::<GenerationResult>(&body)
        .context("Response body is not a generation result")
        .map_err(|e| (Some(code), e))?;

    Ok((code, result))
}

fn describe_transport_error(e: reqwest::Error) -> anyhow::Error {
    if e.is_timeout() {
        anyhow!("Request timed out: {}", e)
    } else if e.is_connect() {
        anyhow!("Connection failed: {}", e)
    } else {
        anyhow!("Request failed: {}", e)
    }
}

/// Execute a generation request and report the outcome as a NetworkResponse
pub async fn generate_image(
    client: &reqwest::Client,
    endpoint: &str,
    request: GenerationRequest,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let result = post_generate(client, endpoint, &request).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok((status, result)) => NetworkResponse::Generated {
            id: request_id,
            status,
            result,
            time_ms,
        },
        Err((status, err)) => NetworkResponse::Failed {
            id: request_id,
            status,
            reason: format!("{:#}", err),
            time_ms,
        },
    }
}
