use std::collections::HashMap;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::{
    config::UpstreamConfig,
    types::{book::BookRecord, genre::GenreOption},
};

pub mod schema;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog returned status {status}")]
    Upstream { status: reqwest::StatusCode },
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error("no works listed for this genre")]
    NotFound,
}

/// Read-only view of the external catalog. The seam where tests substitute
/// a scripted catalog for the live one.
pub trait CatalogApi {
    async fn list_genres(&self) -> Result<Vec<GenreOption>, CatalogError>;
    async fn fetch_bestseller(&self, cat_uri: &str) -> Result<BookRecord, CatalogError>;
}

/// Live client for the catalog's title resource endpoints.
pub struct CatalogClient {
    http:     reqwest::Client,
    base_url: String,
    domain:   String,
    api_key:  String,
}

impl CatalogClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http:     reqwest::Client::new(),
            base_url: config.base_url.clone(),
            domain:   config.domain.clone(),
            api_key:  config.api_key.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &HashMap<&str, &str>,
    ) -> Result<T, CatalogError> {
        let response = self.http.get(url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Upstream { status });
        }
        let body = response.text().await?;
        let mut deserializer = serde_json::Deserializer::from_str(&body);
        Ok(serde_path_to_error::deserialize(&mut deserializer)?)
    }
}

impl CatalogApi for CatalogClient {
    async fn list_genres(&self) -> Result<Vec<GenreOption>, CatalogError> {
        let url = format!("{}/domains/{}/categories", self.base_url, self.domain);
        let mut params = HashMap::new();
        params.insert("api_key", self.api_key.as_str());
        let response: schema::CategoriesResponse = self.get_json(&url, &params).await?;
        info!("Fetched {} categories.", response.data.categories.len());
        Ok(response
            .data
            .categories
            .into_iter()
            .map(GenreOption::from)
            .collect())
    }

    async fn fetch_bestseller(&self, cat_uri: &str) -> Result<BookRecord, CatalogError> {
        let url = format!(
            "{}/domains/{}/works/views/list-display",
            self.base_url, self.domain
        );
        let mut params = HashMap::new();
        params.insert("api_key", self.api_key.as_str());
        // The query builder escapes the category URI; only the top-ranked
        // row is ever requested, ranked by the catalog's own score.
        params.insert("catUri", cat_uri);
        params.insert("rows", "1");
        params.insert("sort", "printScore");
        let response: schema::WorksResponse = self.get_json(&url, &params).await?;
        response
            .data
            .works
            .into_iter()
            .next()
            .map(BookRecord::from)
            .ok_or(CatalogError::NotFound)
    }
}
