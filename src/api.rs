//! Catalog listing and submission against the backend REST API.
use catalog::{NewVlog, Vlog, validation::validate};
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    api_url: String,
}

impl CatalogClient {
    pub fn new(http: Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn fetch_vlogs(&self) -> Result<Vec<Vlog>, ClientError> {
        let response = self
            .http
            .get(format!("{}/vlogs", self.api_url))
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    /// Validates the form locally first; nothing is sent unless every field passes.
    pub async fn create_vlog(&self, form: NewVlog) -> Result<Vlog, ClientError> {
        let form = form.trimmed();

        let errors = validate(&form);
        if !errors.is_empty() {
            return Err(ClientError::Invalid(errors));
        }

        let response = self
            .http
            .post(format!("{}/vlogs", self.api_url))
            .json(&form)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("Request failed").to_string(),
    };

    Err(ClientError::Server { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_form_is_never_sent() {
        // unreachable on purpose: validation must fail before any request
        let client = CatalogClient::new(Client::new(), "http://127.0.0.1:9/api");

        let result = client
            .create_vlog(NewVlog {
                title: "Hi".to_string(),
                ..NewVlog::default()
            })
            .await;

        match result {
            Err(ClientError::Invalid(errors)) => assert_eq!(errors.len(), 5),
            other => panic!("expected validation errors, got {other:?}"),
        }
    }
}
