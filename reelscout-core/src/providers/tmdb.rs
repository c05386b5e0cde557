use async_trait::async_trait;
use reelscout_model::{CastMember, GenreInfo, MovieDetail, MovieId, MovieSummary, Video};
use reqwest::{Client, RequestBuilder, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::traits::{CatalogResponse, CatalogService};
use crate::config::CatalogConfig;
use crate::error::FetchError;
use crate::query::QueryDescriptor;

/// TMDB-style REST catalog over `reqwest`.
#[derive(Clone)]
pub struct TmdbCatalog {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    language: Option<String>,
}

impl std::fmt::Debug for TmdbCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbCatalog")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("has_token", &self.api_token.is_some())
            .finish()
    }
}

impl TmdbCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        let base_url = config.base_url.as_str().trim_end_matches('/').to_string();

        info!(base_url = %base_url, "catalog client ready");

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
            language: config.language.clone(),
        })
    }

    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        format!("{}/{}", self.base_url, path.as_ref().trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .get(self.build_url(path))
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        if let Some(language) = &self.language {
            request = request.query(&[("language", language.as_str())]);
        }
        request
    }

    async fn send(request: RequestBuilder) -> Result<reqwest::Response, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// Body transfer failures are connectivity errors; a complete body that
    /// does not decode is unexpected.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let body = response.bytes().await.map_err(|err| {
            FetchError::Connectivity(format!("response body interrupted: {err}"))
        })?;
        serde_json::from_slice(&body)
            .map_err(|err| FetchError::Unexpected(format!("malformed catalog payload: {err}")))
    }
}

#[async_trait]
impl CatalogService for TmdbCatalog {
    async fn query_movies(
        &self,
        query: &QueryDescriptor,
    ) -> Result<CatalogResponse, FetchError> {
        let endpoint = query.endpoint();
        debug!(path = endpoint.path, params = ?endpoint.params, "querying catalog");

        let request = self.get(endpoint.path).query(&endpoint.params);
        let payload: ListPayload = Self::read_json(Self::send(request).await?).await?;
        Ok(payload.into_response())
    }

    async fn movie_detail(&self, id: MovieId) -> Result<MovieDetail, FetchError> {
        debug!(%id, "fetching movie detail");

        let request = self
            .get(&format!("movie/{id}"))
            .query(&[("append_to_response", "credits,videos")]);
        let value: serde_json::Value = Self::read_json(Self::send(request).await?).await?;
        decode_detail(value)
    }
}

/// Listing payload as the service sends it. Failure markers of both the
/// legacy (`Response`/`Error`) and current (`success`/`status_message`)
/// shapes are recognized.
#[derive(Debug, Deserialize)]
struct ListPayload {
    results: Option<Vec<MovieSummary>>,
    total_pages: Option<u32>,
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
    success: Option<bool>,
    status_message: Option<String>,
}

impl ListPayload {
    fn into_response(self) -> CatalogResponse {
        if self.response.as_deref() == Some("False") {
            return CatalogResponse::domain_failure(self.error.unwrap_or_default());
        }
        if self.success == Some(false) {
            return CatalogResponse::domain_failure(
                self.status_message.unwrap_or_default(),
            );
        }
        CatalogResponse::results(
            self.results.unwrap_or_default(),
            self.total_pages.unwrap_or(0),
        )
    }
}

#[derive(Debug, Deserialize)]
struct DetailPayload {
    id: MovieId,
    #[serde(default)]
    title: String,
    tagline: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    runtime: Option<u32>,
    vote_average: Option<f64>,
    poster_path: Option<String>,
    #[serde(default)]
    original_language: String,
    #[serde(default)]
    genres: Vec<GenreInfo>,
    credits: Option<CreditsPayload>,
    videos: Option<VideosPayload>,
}

#[derive(Debug, Deserialize)]
struct CreditsPayload {
    #[serde(default)]
    cast: Vec<CastMember>,
}

#[derive(Debug, Deserialize)]
struct VideosPayload {
    #[serde(default)]
    results: Vec<Video>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl From<DetailPayload> for MovieDetail {
    fn from(payload: DetailPayload) -> Self {
        MovieDetail {
            id: payload.id,
            title: payload.title,
            tagline: non_empty(payload.tagline),
            overview: non_empty(payload.overview),
            release_date: non_empty(payload.release_date),
            runtime: payload.runtime.filter(|minutes| *minutes > 0),
            vote_average: payload.vote_average,
            poster_path: payload.poster_path,
            original_language: payload.original_language,
            genres: payload.genres,
            cast: payload.credits.map(|c| c.cast).unwrap_or_default(),
            videos: payload.videos.map(|v| v.results).unwrap_or_default(),
        }
    }
}

fn decode_detail(value: serde_json::Value) -> Result<MovieDetail, FetchError> {
    if value.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
        let message = value
            .get("status_message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        return Err(FetchError::Domain(message.to_string()));
    }
    let payload: DetailPayload = serde_json::from_value(value)
        .map_err(|err| FetchError::Unexpected(err.to_string()))?;
    Ok(payload.into())
}
