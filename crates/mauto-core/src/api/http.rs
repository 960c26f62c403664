//! HTTP+JSON implementation of [`MailApi`].

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::MailApi;
use super::wire::{
    DetailResponse, EmailRecord, FilterRequest, FilterResponse, GenerateRequest, GenerateResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::model::{Category, Email, EmailDetail, EmailId};

/// Triage API client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpMailApi {
    /// Base URL, e.g. `http://localhost:8000/api`.
    base_url: String,
    /// HTTP client.
    http_client: Client,
}

impl HttpMailApi {
    /// Creates a client for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client: Client::new(),
        }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fails on non-success statuses, keeping the endpoint for the log line.
    fn check_status(path: &str, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            })
        }
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> ApiResult<T> {
        let response = Self::check_status(path, response)?;
        Ok(response.json::<T>().await?)
    }
}

impl MailApi for HttpMailApi {
    async fn list_emails(&self, category: Category) -> ApiResult<Vec<Email>> {
        let path = "/emails";
        let response = self
            .http_client
            .get(self.endpoint(path))
            .query(&[("is_job", category.is_job())])
            .send()
            .await?;
        let records: Vec<EmailRecord> = Self::decode(path, response).await?;
        Ok(records
            .into_iter()
            .map(|record| record.into_email(category))
            .collect())
    }

    async fn email_detail(&self, id: &EmailId) -> ApiResult<EmailDetail> {
        let path = format!("/emails/{}", id.as_str());
        let response = self.http_client.get(self.endpoint(&path)).send().await?;
        let detail: DetailResponse = Self::decode(&path, response).await?;
        Ok(detail.into_detail())
    }

    async fn trigger_sync(&self) -> ApiResult<()> {
        let path = "/sync";
        let response = self.http_client.post(self.endpoint(path)).send().await?;
        Self::check_status(path, response)?;
        Ok(())
    }

    async fn filter(&self, prompt: &str) -> ApiResult<Vec<EmailId>> {
        let path = "/filter";
        let response = self
            .http_client
            .post(self.endpoint(path))
            .json(&FilterRequest { prompt })
            .send()
            .await?;
        let body: FilterResponse = Self::decode(path, response).await?;
        Ok(body.matching_ids)
    }

    async fn generate_draft(&self, email_id: &EmailId, context: &str) -> ApiResult<String> {
        let path = "/generate";
        let response = self
            .http_client
            .post(self.endpoint(path))
            .json(&GenerateRequest {
                email_id: email_id.as_str(),
                context,
            })
            .send()
            .await?;
        let body: GenerateResponse = Self::decode(path, response).await?;
        Ok(body.draft)
    }
}
