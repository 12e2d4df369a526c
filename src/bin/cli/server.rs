use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::{error, info};

use biblio::catalog::{CatalogApi, CatalogClient, CatalogError};
use biblio::config::Config;
use biblio::types::{book::BookRecord, genre::GenreOption};

pub struct ProxyState {
    catalog: CatalogClient,
}

#[derive(Serialize)]
struct GenresResponse {
    data: GenresData,
}

#[derive(Serialize)]
struct GenresData {
    categories: Vec<CategoryRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRow {
    menu_text: String,
    cat_uri:   String,
}

impl From<GenreOption> for CategoryRow {
    fn from(genre: GenreOption) -> Self {
        Self {
            menu_text: genre.label,
            cat_uri:   genre.value,
        }
    }
}

#[derive(Serialize)]
struct WorksResponse {
    data: WorksData,
}

#[derive(Serialize)]
struct WorksData {
    works: Vec<BookRecord>,
}

pub async fn start(config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(ProxyState {
        catalog: CatalogClient::new(&config.upstream),
    });

    let app = Router::new()
        .route("/biblio-api/v1/genres", get(genres))
        .route("/biblio-api/v1/genres/bestsellers", get(bestsellers))
        .with_state(state);

    let addr: SocketAddr = config.server.listen.parse()?;
    info!("Listening on {addr}.");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

async fn genres(
    State(state): State<Arc<ProxyState>>,
) -> Result<Json<GenresResponse>, StatusCode> {
    match state.catalog.list_genres().await {
        Ok(genres) => {
            info!("Serving {} genres.", genres.len());
            Ok(Json(GenresResponse {
                data: GenresData {
                    categories: genres.into_iter().map(CategoryRow::from).collect(),
                },
            }))
        }
        Err(e) => {
            error!("Genre listing failed: {e}.");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

async fn bestsellers(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<ProxyState>>,
) -> Result<Json<WorksResponse>, StatusCode> {
    let genre = match params.get("genre").filter(|genre| !genre.is_empty()) {
        Some(genre) => genre,
        None => return Err(StatusCode::BAD_REQUEST),
    };
    info!("Received bestseller request for {genre}.");
    match state.catalog.fetch_bestseller(genre).await {
        Ok(book) => Ok(Json(WorksResponse {
            data: WorksData { works: vec![book] },
        })),
        Err(CatalogError::NotFound) => {
            error!("No works listed for {genre}.");
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!("Bestseller fetch for {genre} failed: {e}.");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}
