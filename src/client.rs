//! Typed HTTP client for the six recipe endpoints.
//!
//! Recipe rows arrive with serialized ingredients and instructions; the
//! single-recipe call decodes them so callers always get structured data.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::constants::DEFAULT_API_BASE_URL;
use crate::models::{
    Category, CreatedRecipe, RecipeDetail, RecipeListParams, RecipePayload, RecipeRow,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl ClientError {
    /// The `message` the server put in an error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Data source the frontend views read from and write to
#[allow(async_fn_in_trait)]
pub trait RecipeSource {
    async fn categories(&self) -> ClientResult<Vec<Category>>;

    /// Empty strings mean "no filter"
    async fn recipes(&self, search: &str, category_id: &str) -> ClientResult<Vec<RecipeRow>>;

    async fn recipe(&self, id: i64) -> ClientResult<RecipeDetail>;

    async fn create_recipe(&self, payload: &RecipePayload) -> ClientResult<i64>;

    async fn update_recipe(&self, id: i64, payload: &RecipePayload) -> ClientResult<()>;

    async fn delete_recipe(&self, id: i64) -> ClientResult<()>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecipeClient {
    /// Create a client for the API rooted at `base_url`, e.g. `http://localhost:5000/api`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn with_default_base_url() -> ClientResult<Self> {
        Self::new(DEFAULT_API_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn non-2xx responses into `ClientError::Api`
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        tracing::error!("Request failed with HTTP {}: {:?}", status, message);
        Err(ClientError::Api { status, message })
    }
}

impl RecipeSource for RecipeClient {
    async fn categories(&self) -> ClientResult<Vec<Category>> {
        let response = self.http.get(self.url("/categories")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn recipes(&self, search: &str, category_id: &str) -> ClientResult<Vec<RecipeRow>> {
        let params = RecipeListParams {
            search: Some(search.to_string()),
            category_id: Some(category_id.to_string()),
        };
        let response = self
            .http
            .get(self.url("/recipes"))
            .query(&params)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn recipe(&self, id: i64) -> ClientResult<RecipeDetail> {
        let response = self
            .http
            .get(self.url(&format!("/recipes/{id}")))
            .send()
            .await?;
        let row: RecipeRow = Self::check(response).await?.json().await?;
        Ok(row.decode()?)
    }

    async fn create_recipe(&self, payload: &RecipePayload) -> ClientResult<i64> {
        let response = self
            .http
            .post(self.url("/recipes"))
            .json(payload)
            .send()
            .await?;
        let created: CreatedRecipe = Self::check(response).await?.json().await?;
        Ok(created.id)
    }

    async fn update_recipe(&self, id: i64, payload: &RecipePayload) -> ClientResult<()> {
        let response = self
            .http
            .put(self.url(&format!("/recipes/{id}")))
            .json(payload)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_recipe(&self, id: i64) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/recipes/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
